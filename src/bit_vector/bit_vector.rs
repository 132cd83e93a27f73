use super::{BitVector, BLOCK_WORDS, RANK_BYTES, SELECT_BITS, SELECT_BYTES, WORD_BYTES};

impl BitVector {
    /// Returns the `i`-th bit.
    ///
    /// # Panics
    /// When _`i` >= length of the bit vector_.
    pub fn get(&self, i: u64) -> bool {
        assert!(
            i < self.n_bits,
            "i = {} must be smaller than {} (length of the bit vector)",
            i,
            self.n_bits
        );
        self.words[(i / 64) as usize] >> (i % 64) & 1 == 1
    }

    /// Returns the number of 1-bits in positions _[0, `i`)_.
    ///
    /// # Panics
    /// When _`i` > length of the bit vector_.
    ///
    /// # Implementation detail
    /// 1. The record of the block containing `i` gives the count before the
    ///    block (`abs`).
    /// 2. Its relative counter for the word containing `i` gives the count
    ///    from the block start to the word start (0 for the first word).
    /// 3. A masked popcount of that word covers the remaining bits.
    pub fn rank1(&self, i: u64) -> u64 {
        assert!(
            i <= self.n_bits,
            "i = {} must not be greater than {} (length of the bit vector)",
            i,
            self.n_bits
        );
        let word_id = (i / 64) as usize;
        // i == n_bits on a block boundary lands one word past the end
        if word_id == self.words.len() {
            return self.n_ones();
        }

        let rank = &self.ranks[word_id / BLOCK_WORDS];
        let mut n_ones = rank.abs();
        let rel_id = word_id % BLOCK_WORDS;
        if rel_id != 0 {
            n_ones += u64::from(rank.rels[rel_id - 1]);
        }
        let mask = (1u64 << (i % 64)) - 1;
        n_ones + u64::from((self.words[word_id] & mask).count_ones())
    }

    /// Returns the position of the `i`-th 1-bit (0-origin): the smallest `p`
    /// with _rank1(`p` + 1) == `i` + 1_.
    ///
    /// # Panics
    /// When _`i` >= total number of 1-bits_.
    ///
    /// # Implementation detail
    /// The select samples bound the candidate blocks to _[selects[i / 256],
    /// selects[i / 256 + 1] + 1)_. Within that range the block is found by a
    /// linear scan over `abs` when the range is small, else by binary search.
    /// The word is picked by the relative counters, and the in-word bit by
    /// clearing the lowest set bits and taking the trailing zero count.
    pub fn select1(&self, i: u64) -> u64 {
        assert!(
            i < self.n_ones(),
            "i = {} must be smaller than {} (total number of 1-bits)",
            i,
            self.n_ones()
        );
        let sample_id = (i / SELECT_BITS) as usize;
        let mut begin = self.selects[sample_id] as usize;
        let mut end = self.selects[sample_id + 1] as usize + 1;

        if begin + 10 >= end {
            while i >= self.ranks[begin + 1].abs() {
                begin += 1;
            }
        } else {
            while begin + 1 < end {
                let middle = (begin + end) / 2;
                if i < self.ranks[middle].abs() {
                    end = middle;
                } else {
                    begin = middle;
                }
            }
        }

        let rank = &self.ranks[begin];
        let mut i = i - rank.abs();
        let mut word_id = begin * BLOCK_WORDS;
        if i < u64::from(rank.rels[1]) {
            if i >= u64::from(rank.rels[0]) {
                word_id += 1;
                i -= u64::from(rank.rels[0]);
            }
        } else if i < u64::from(rank.rels[2]) {
            word_id += 2;
            i -= u64::from(rank.rels[1]);
        } else {
            word_id += 3;
            i -= u64::from(rank.rels[2]);
        }

        // clear the i lowest 1-bits; the answer is the next one
        let mut word = self.words[word_id];
        for _ in 0..i {
            word &= word - 1;
        }
        word_id as u64 * 64 + u64::from(word.trailing_zeros())
    }

    /// Returns the position of the first 1-bit at or after `i`, if any.
    pub fn next_one(&self, i: u64) -> Option<u64> {
        if i >= self.n_bits {
            return None;
        }
        let mut word_id = (i / 64) as usize;
        let word = self.words[word_id] >> (i % 64);
        if word != 0 {
            return Some(i + u64::from(word.trailing_zeros()));
        }
        loop {
            word_id += 1;
            if word_id == self.words.len() {
                return None;
            }
            let word = self.words[word_id];
            if word != 0 {
                return Some(word_id as u64 * 64 + u64::from(word.trailing_zeros()));
            }
        }
    }

    /// Length of the bit vector.
    pub fn n_bits(&self) -> u64 {
        self.n_bits
    }

    /// Total number of 1-bits.
    pub fn n_ones(&self) -> u64 {
        self.ranks[self.ranks.len() - 1].abs()
    }

    /// Accounted storage in bytes: 8 per word, 6 per rank record, 4 per
    /// select sample.
    pub fn size(&self) -> u64 {
        WORD_BYTES * self.words.len() as u64
            + RANK_BYTES * self.ranks.len() as u64
            + SELECT_BYTES * self.selects.len() as u64
    }
}









#[cfg(test)]
mod size_tests {
    use crate::{BitVector, BitVectorBuilder};

    #[test]
    fn empty() {
        // no words, the terminal rank record and the terminal select sample
        let bv = BitVectorBuilder::new().build();
        assert_eq!(bv.size(), 6 + 4);
    }

    #[test]
    fn one_block() {
        // 4 words, 2 rank records, 1 select sample + terminal
        let bv = BitVector::from("1");
        assert_eq!(bv.size(), 4 * 8 + 2 * 6 + 2 * 4);
    }
}
