use super::{Level, LevelBuilder};
use crate::bit_vector::BitVectorBuilder;

impl LevelBuilder {
    pub fn new() -> LevelBuilder {
        LevelBuilder {
            louds: BitVectorBuilder::new(),
            outs: BitVectorBuilder::new(),
            labels: Vec::new(),
            offset: 0,
        }
    }

    /// Freezes both bit vectors. The offset still holds the per-level key
    /// count; `TrieBuilder::build()` turns it into a running total.
    pub fn build(self) -> Level {
        Level {
            louds: self.louds.build(),
            outs: self.outs.build(),
            labels: self.labels,
            offset: self.offset,
        }
    }
}

impl Level {
    /// Storage in bytes: the two bit vectors plus one byte per label.
    pub fn size(&self) -> u64 {
        self.louds.size() + self.outs.size() + self.labels.len() as u64
    }
}
