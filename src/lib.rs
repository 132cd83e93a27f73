//! # louds-trie-rs
//!
//! louds-trie-rs is a static, compressed set of byte strings with _simple API_ and _small memory footprint_.
//!
//! Keys are inserted in ascending order into a [TrieBuilder](struct.TrieBuilder.html);
//! the built [Trie](struct.Trie.html) answers membership queries with a stable key id
//! in `[0, number of keys)`.
//!
//! ```
//! use louds_trie_rs::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.add("apple");
//! builder.add("banana");
//! let trie = builder.build();
//!
//! assert_eq!(trie.lookup("apple"), Some(0));
//! assert_eq!(trie.lookup("banana"), Some(1));
//! assert_eq!(trie.lookup("grape"), None);
//! ```

pub use bit_vector::{BitVector, BitVectorBuilder};
pub use trie::{Trie, TrieBuilder, TrieIter};

pub mod bit_vector;
pub mod trie;
