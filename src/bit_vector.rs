mod bit_vector;
mod bit_vector_builder;
mod rank;

/// Number of bits covered by one rank record.
const BLOCK_BITS: u64 = 256;

/// Number of 64-bit words covered by one rank record.
const BLOCK_WORDS: usize = 4;

/// One select sample is kept per this many 1-bits.
const SELECT_BITS: u64 = 256;

/// Accounted bytes per 64-bit word.
const WORD_BYTES: u64 = 8;

/// Accounted bytes per rank record.
const RANK_BYTES: u64 = 6;

/// Accounted bytes per select sample.
const SELECT_BYTES: u64 = 4;

/// Succinct bit vector with constant-time [rank1()](#method.rank1) and
/// near-constant [select1()](#method.select1).
///
/// # Implementation detail
/// Bits are packed LSB-first into 64-bit words, four words to a 256-bit block:
///
/// ```text
/// words;  |w0      w1      w2      w3     |w4      w5      w6      w7     | ...
/// blocks; |           block 0             |           block 1             | ...
/// ranks;  R0                              R1                              ... R_n
/// ```
///
/// Each block carries one 6-byte [Rank](struct.Rank.html) record: a 24-bit
/// absolute 1-count covering everything before the block, plus three 8-bit
/// relative counts covering words `0..=0`, `0..=1` and `0..=2` of the block.
/// `rank1(i)` is then one absolute load, one relative load and one masked
/// popcount.
///
/// `selects` samples the block id of every 256th 1-bit. `select1(i)` narrows
/// its block search to the sampled range, picks the word via the relative
/// counts, and extracts the target bit by clearing the lowest set bits.
///
/// A terminal rank record (total 1-count) and a terminal select sample (block
/// count) close the two indexes, so both searches run without bound checks
/// against the data they follow.
///
/// The 24-bit absolute counter caps one bit vector at 2^24 1-bits, far above
/// what a single trie level holds in practice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[derive(Clone, Debug)]
pub struct BitVector {
    /// Raw bits. Always a whole number of blocks; bits past `n_bits` are 0.
    words: Vec<u64>,

    /// Logical length in bits.
    n_bits: u64,

    /// One record per block, plus a terminal record holding the total 1-count.
    ranks: Vec<Rank>,

    /// Block id of every 256th 1-bit, plus a terminal sample equal to the
    /// block count.
    selects: Vec<u32>,
}

/// Append-only bit sequence; [build()](#method.build) freezes it into a
/// [BitVector](struct.BitVector.html).
#[derive(Clone, Debug, Default)]
pub struct BitVectorBuilder {
    words: Vec<u64>,
    n_bits: u64,
}

/// Rank record of one 256-bit block.
///
/// `abs` (24 bits, split so the record packs into 6 bytes) counts the 1-bits
/// before the block. `rels[j]` counts the 1-bits in words `0..=j` of the
/// block, giving the running count at the start of words 1, 2 and 3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
struct Rank {
    abs_hi: u16,
    abs_lo: u8,
    rels: [u8; 3],
}
