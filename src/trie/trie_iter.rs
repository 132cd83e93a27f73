use super::{Trie, TrieIter};

impl Trie {
    /// Creates an iterator over the stored keys in ascending order.
    ///
    /// # Examples
    /// ```
    /// use louds_trie_rs::TrieBuilder;
    ///
    /// let mut builder = TrieBuilder::new();
    /// builder.add("app");
    /// builder.add("apple");
    /// let trie = builder.build();
    ///
    /// let keys: Vec<Vec<u8>> = trie.iter().collect();
    /// assert_eq!(keys, vec![b"app".to_vec(), b"apple".to_vec()]);
    /// ```
    pub fn iter(&self) -> TrieIter {
        TrieIter {
            trie: self,
            stack: vec![(0, 0)],
            key: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = Vec<u8>;
    type IntoIter = TrieIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for TrieIter<'a> {
    type Item = Vec<u8>;

    /// Pre-order walk; children are expanded with the same child-block
    /// arithmetic as `lookup()`, pushed in reverse so the smallest label
    /// comes out first.
    fn next(&mut self) -> Option<Vec<u8>> {
        while let Some((depth, node_id)) = self.stack.pop() {
            if depth > 0 {
                self.key.truncate(depth - 1);
                self.key
                    .push(self.trie.levels[depth].labels[node_id as usize]);
            }

            let level = &self.trie.levels[depth + 1];
            let node_pos;
            let first_child;
            if node_id != 0 {
                node_pos = level.louds.select1(node_id - 1) + 1;
                first_child = node_pos - node_id;
            } else {
                node_pos = 0;
                first_child = 0;
            }
            if let Some(block_end) = level.louds.next_one(node_pos) {
                let n_children = block_end - node_pos;
                for child_id in (first_child..first_child + n_children).rev() {
                    self.stack.push((depth + 1, child_id));
                }
            }

            if self.trie.levels[depth].outs.get(node_id) {
                return Some(self.key.clone());
            }
        }
        None
    }
}
