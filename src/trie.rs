mod level;
mod trie;
mod trie_builder;
mod trie_iter;

use crate::bit_vector::{BitVector, BitVectorBuilder};

/// Static set of byte strings, stored as a trie in a level-partitioned LOUDS
/// encoding.
///
/// Built by [TrieBuilder](struct.TrieBuilder.html) from keys in ascending
/// order. [lookup()](#method.lookup) maps a stored key to a stable id equal
/// to its rank in that order; absent keys map to `None`.
///
/// # Implementation detail
/// Nodes at depth _L_ are described by three parallel structures in
/// `levels[L]`: `labels` (the byte on the edge from the parent), `outs` (one
/// bit per node, 1 iff a key ends there), and `louds` (in `levels[L]`, the
/// child structure of depth _L - 1_: one 0-bit per depth-_L_ node and one
/// 1-bit closing each parent's child block, the last bit always being a
/// 1-bit left open for a future sibling).
///
/// ```text
/// keys;       "b", "ba", "in", "it"
///
/// level 1;    labels  b  i        louds  0 0 1      outs  1 0
/// level 2;    labels  a  n  t     louds  0 1 0 0 1  outs  1 1 1
/// ```
///
/// A query descends one level per byte. The child block of the current node
/// starts right after the node's closing 1-bit (`select1`), its members are
/// counted by the 0-bits up to the next 1-bit, and the queried byte is found
/// among the corresponding labels by binary search. At the last byte, `outs`
/// decides membership and `outs.rank1` plus the level's key offset recovers
/// the id.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[derive(Clone, Debug)]
pub struct Trie {
    levels: Vec<Level>,
    n_keys: u64,
    n_nodes: u64,
    size: u64,
}

/// Incremental [Trie](struct.Trie.html) construction from keys in strict
/// ascending order.
#[derive(Clone, Debug)]
pub struct TrieBuilder {
    levels: Vec<LevelBuilder>,
    n_keys: u64,
    n_nodes: u64,
    last_key: Vec<u8>,
}

/// Iterator over the stored keys in ascending order.
/// Created by [Trie::iter()](struct.Trie.html#method.iter).
pub struct TrieIter<'a> {
    trie: &'a Trie,
    /// Pending (depth, node id) pairs, deepest-first within a sibling run.
    stack: Vec<(usize, u64)>,
    /// Bytes of the path to the most recently visited node.
    key: Vec<u8>,
}

/// Nodes of one trie depth.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[derive(Clone, Debug)]
struct Level {
    louds: BitVector,
    outs: BitVector,
    labels: Vec<u8>,
    /// Number of keys shorter than this depth; added to a per-level ordinal
    /// to recover the global key id.
    offset: u64,
}

#[derive(Clone, Debug)]
struct LevelBuilder {
    louds: BitVectorBuilder,
    outs: BitVectorBuilder,
    labels: Vec<u8>,
    offset: u64,
}
