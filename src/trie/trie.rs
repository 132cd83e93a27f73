use super::{Trie, TrieBuilder};

impl Trie {
    /// Searches `query` and returns its key id: the rank of `query` among the
    /// stored keys, counting from 0. Returns `None` when `query` is not
    /// stored (the NOT_FOUND outcome; the classic encoding of this result is
    /// the integer −1).
    ///
    /// # Examples
    /// ```
    /// use louds_trie_rs::TrieBuilder;
    ///
    /// let mut builder = TrieBuilder::new();
    /// builder.add("add");
    /// builder.add("apl");
    /// builder.add("app");
    /// builder.add("bce");
    /// let trie = builder.build();
    ///
    /// assert_eq!(trie.lookup("app"), Some(2));
    /// assert_eq!(trie.lookup("a"), None);
    /// assert_eq!(trie.lookup("bcd"), None);
    /// ```
    pub fn lookup<K: AsRef<[u8]>>(&self, query: K) -> Option<u64> {
        let query = query.as_ref();
        if query.len() >= self.levels.len() {
            return None;
        }

        let mut node_id = 0u64;
        for (i, &byte) in query.iter().enumerate() {
            let level = &self.levels[i + 1];

            // The node's child block starts right after its closing 1-bit.
            // `node_pos - node_id` counts the 0-bits before it, i.e. the
            // index of its first child.
            let node_pos;
            if node_id != 0 {
                node_pos = level.louds.select1(node_id - 1) + 1;
                node_id = node_pos - node_id;
            } else {
                node_pos = 0;
            }
            let block_end = match level.louds.next_one(node_pos) {
                Some(pos) => pos,
                None => return None,
            };

            let mut begin = node_id;
            let mut end = begin + (block_end - node_pos);
            let mut found = false;
            while begin < end {
                node_id = begin + (end - begin) / 2;
                let label = level.labels[node_id as usize];
                if byte < label {
                    end = node_id;
                } else if byte > label {
                    begin = node_id + 1;
                } else {
                    found = true;
                    break;
                }
            }
            if !found {
                return None;
            }
        }

        let level = &self.levels[query.len()];
        if !level.outs.get(node_id) {
            return None;
        }
        Some(level.offset + level.outs.rank1(node_id))
    }

    /// Builds a new trie holding the union of the keys of `self` and `other`.
    ///
    /// The two sorted key streams are merged, duplicates collapsed, into a
    /// fresh builder, so the result carries ids in the order of the merged
    /// key set.
    ///
    /// # Examples
    /// ```
    /// use louds_trie_rs::TrieBuilder;
    ///
    /// let mut builder = TrieBuilder::new();
    /// builder.add("app");
    /// builder.add("bat");
    /// let left = builder.build();
    ///
    /// let mut builder = TrieBuilder::new();
    /// builder.add("ant");
    /// builder.add("app");
    /// let right = builder.build();
    ///
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.n_keys(), 3);
    /// assert_eq!(merged.lookup("ant"), Some(0));
    /// assert_eq!(merged.lookup("app"), Some(1));
    /// assert_eq!(merged.lookup("bat"), Some(2));
    /// ```
    pub fn merge(&self, other: &Trie) -> Trie {
        let mut builder = TrieBuilder::new();
        let mut left = self.iter();
        let mut right = other.iter();
        let (mut x, mut y) = (left.next(), right.next());
        loop {
            match (x, y) {
                (Some(key_x), Some(key_y)) => {
                    if key_x < key_y {
                        builder.add(&key_x);
                        x = left.next();
                        y = Some(key_y);
                    } else if key_y < key_x {
                        builder.add(&key_y);
                        x = Some(key_x);
                        y = right.next();
                    } else {
                        builder.add(&key_x);
                        x = left.next();
                        y = right.next();
                    }
                }
                (Some(key_x), None) => {
                    builder.add(&key_x);
                    x = left.next();
                    y = None;
                }
                (None, Some(key_y)) => {
                    builder.add(&key_y);
                    x = None;
                    y = right.next();
                }
                (None, None) => break,
            }
        }
        builder.build()
    }

    /// Number of stored keys.
    pub fn n_keys(&self) -> u64 {
        self.n_keys
    }

    /// Number of trie nodes, including the root.
    pub fn n_nodes(&self) -> u64 {
        self.n_nodes
    }

    /// Accounted storage in bytes, summed over the levels.
    pub fn size(&self) -> u64 {
        self.size
    }
}


#[cfg(test)]
mod merge_tests {
    use crate::{Trie, TrieBuilder};

    fn build(keys: &[&str]) -> Trie {
        let mut builder = TrieBuilder::new();
        for key in keys {
            builder.add(key);
        }
        builder.build()
    }

    macro_rules! parameterized_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (keys_left, keys_right, expected): (Vec<&str>, Vec<&str>, Vec<&str>) = $value;
                let merged = build(&keys_left).merge(&build(&keys_right));
                assert_eq!(merged.n_keys(), expected.len() as u64);
                for (id, key) in expected.iter().enumerate() {
                    assert_eq!(merged.lookup(key), Some(id as u64), "key = {:?}", key);
                }
            }
        )*
        }
    }

    parameterized_tests! {
        disjoint: (
            vec!("add", "apl"), vec!("app", "bce"),
            vec!("add", "apl", "app", "bce")
        ),
        interleaved: (
            vec!("adf", "ama", "amb", "cde"), vec!("add", "apl", "app", "bce"),
            vec!("add", "adf", "ama", "amb", "apl", "app", "bce", "cde")
        ),
        overlapping: (
            vec!("app", "bat"), vec!("ant", "app", "cat"),
            vec!("ant", "app", "bat", "cat")
        ),
        left_empty: (vec!(), vec!("a", "b"), vec!("a", "b")),
        right_empty: (vec!("a", "b"), vec!(), vec!("a", "b")),
        both_empty: (vec!(), vec!(), vec!()),
        identical: (vec!("a", "b"), vec!("a", "b"), vec!("a", "b")),
        empty_key_in_left: (vec!("", "b"), vec!("a"), vec!("", "a", "b")),
    }
}

#[cfg(test)]
mod size_tests {
    use crate::TrieBuilder;

    #[test]
    fn grows_with_keys() {
        let small = TrieBuilder::new().build();
        let mut builder = TrieBuilder::new();
        for byte in b'a'..=b'z' {
            builder.add([byte, byte]);
        }
        let large = builder.build();
        assert!(small.size() > 0);
        assert!(large.size() > small.size());
    }
}
