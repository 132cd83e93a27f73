#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::{BitVector, BitVectorBuilder, Rank, BLOCK_BITS, BLOCK_WORDS, SELECT_BITS};

impl BitVectorBuilder {
    /// Creates an empty builder.
    pub fn new() -> BitVectorBuilder {
        BitVectorBuilder {
            words: Vec::new(),
            n_bits: 0,
        }
    }

    /// Appends a bit.
    ///
    /// Storage grows one whole block at a time, so `build()` never sees a
    /// partial block.
    pub fn add(&mut self, bit: bool) {
        if self.n_bits % BLOCK_BITS == 0 {
            self.words.resize(self.words.len() + BLOCK_WORDS, 0);
        }
        self.n_bits += 1;
        self.set(self.n_bits - 1, bit);
    }

    /// Overwrites the bit at position `i`.
    ///
    /// # Panics
    /// When _`i` >= number of bits added so far_.
    pub fn set(&mut self, i: u64, bit: bool) {
        assert!(
            i < self.n_bits,
            "i = {} must be smaller than {} (number of bits added so far)",
            i,
            self.n_bits
        );
        let word = &mut self.words[(i / 64) as usize];
        if bit {
            *word |= 1 << (i % 64);
        } else {
            *word &= !(1 << (i % 64));
        }
    }

    /// Returns the bit at position `i`.
    ///
    /// # Panics
    /// When _`i` >= number of bits added so far_.
    pub fn get(&self, i: u64) -> bool {
        assert!(
            i < self.n_bits,
            "i = {} must be smaller than {} (number of bits added so far)",
            i,
            self.n_bits
        );
        self.words[(i / 64) as usize] >> (i % 64) & 1 == 1
    }

    /// Number of bits added so far.
    pub fn n_bits(&self) -> u64 {
        self.n_bits
    }

    /// Freezes the bits and computes the rank records and select samples in
    /// _O(number of bits)_.
    ///
    /// The per-block relative counts are independent and are computed in
    /// parallel when the `rayon` feature is enabled. The absolute counts and
    /// the select samples need the running 1-count and follow in a sequential
    /// pass: whenever the count crosses a multiple of 256 inside a word, the
    /// crossing 1-bit is located by lowest-bit extraction and its block id is
    /// sampled.
    pub fn build(self) -> BitVector {
        let n_blocks = self.words.len() / BLOCK_WORDS;

        #[cfg(feature = "rayon")]
        let mut ranks: Vec<Rank> = self.words.par_chunks(BLOCK_WORDS).map(Rank::of_block).collect();
        #[cfg(not(feature = "rayon"))]
        let mut ranks: Vec<Rank> = self.words.chunks(BLOCK_WORDS).map(Rank::of_block).collect();

        let mut selects: Vec<u32> = Vec::new();
        let mut n_ones = 0u64;
        for (block_id, block) in self.words.chunks(BLOCK_WORDS).enumerate() {
            ranks[block_id].set_abs(n_ones);
            for &word in block {
                let new_n_ones = n_ones + u64::from(word.count_ones());
                if (n_ones + SELECT_BITS - 1) / SELECT_BITS
                    != (new_n_ones + SELECT_BITS - 1) / SELECT_BITS
                {
                    // the running count crosses a multiple of 256 in this word
                    let mut count = n_ones;
                    let mut rest = word;
                    while rest != 0 {
                        if count % SELECT_BITS == 0 {
                            selects.push(block_id as u32);
                            break;
                        }
                        rest &= rest - 1;
                        count += 1;
                    }
                }
                n_ones = new_n_ones;
            }
        }

        let mut terminal = Rank::default();
        terminal.set_abs(n_ones);
        ranks.push(terminal);
        selects.push(n_blocks as u32);

        BitVector {
            words: self.words,
            n_bits: self.n_bits,
            ranks,
            selects,
        }
    }
}

impl From<&str> for BitVector {
    /// Builds a bit vector from a string representation.
    ///
    /// - '0' is interpreted as _0_.
    /// - '1' is interpreted as _1_.
    /// - '_' is just ignored.
    ///
    /// # Examples
    /// ```
    /// use louds_trie_rs::BitVector;
    ///
    /// let bv = BitVector::from("01_10");
    /// assert_eq!(bv.get(0), false);
    /// assert_eq!(bv.get(1), true);
    /// assert_eq!(bv.get(2), true);
    /// assert_eq!(bv.get(3), false);
    /// ```
    ///
    /// # Panics
    /// When `s` contains any character other than '0', '1', and '_'.
    fn from(s: &str) -> Self {
        let mut builder = BitVectorBuilder::new();
        for ch in s.chars() {
            match ch {
                '0' => builder.add(false),
                '1' => builder.add(true),
                '_' => (),
                c => panic!("bit string contains invalid character '{}'", c),
            }
        }
        builder.build()
    }
}


#[cfg(test)]
mod set_failure_tests {
    use crate::BitVectorBuilder;

    #[test]
    #[should_panic]
    fn set_on_empty() {
        let mut builder = BitVectorBuilder::new();
        builder.set(0, true);
    }

    #[test]
    #[should_panic]
    fn set_over_upper_bound() {
        let mut builder = BitVectorBuilder::new();
        builder.add(true);
        builder.set(1, true);
    }
}
