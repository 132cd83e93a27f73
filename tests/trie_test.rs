mod trie_feature_test {
    use louds_trie_rs::{Trie, TrieBuilder};
    use rand::prelude::*;

    fn generate_keys(rng: &mut ThreadRng) -> Vec<Vec<u8>> {
        let n_keys = rng.gen_range(0usize, 60);
        let mut keys: Vec<Vec<u8>> = (0..n_keys)
            .map(|_| {
                let len = rng.gen_range(0usize, 9);
                (0..len).map(|_| b'a' + rng.gen_range(0u8, 4)).collect()
            })
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    fn build(keys: &[Vec<u8>]) -> Trie {
        let mut builder = TrieBuilder::new();
        for key in keys {
            builder.add(key);
        }
        builder.build()
    }

    #[test]
    fn fuzzing_test() {
        let samples = 200;
        let mut rng = rand::thread_rng();

        for _ in 0..samples {
            let keys = generate_keys(&mut rng);
            eprintln!("build(): keys = {:?}", keys);
            let trie = build(&keys);

            assert_eq!(trie.n_keys(), keys.len() as u64);

            // every stored key resolves to its rank in insertion order
            for (id, key) in keys.iter().enumerate() {
                assert_eq!(trie.lookup(key), Some(id as u64), "key = {:?}", key);
            }

            // random probes agree with a naive sorted-set lookup; this covers
            // absent keys, strict prefixes of stored keys, and queries deeper
            // than the trie
            for _ in 0..100 {
                let len = rng.gen_range(0usize, 11);
                let query: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0u8, 5)).collect();
                let expected = keys.binary_search(&query).ok().map(|id| id as u64);
                assert_eq!(trie.lookup(&query), expected, "query = {:?}", query);
            }

            // iteration returns exactly the stored keys, in order
            let collected: Vec<Vec<u8>> = trie.iter().collect();
            assert_eq!(collected, keys);
        }
    }

    #[test]
    fn merge_fuzzing_test() {
        let samples = 100;
        let mut rng = rand::thread_rng();

        for _ in 0..samples {
            let keys_left = generate_keys(&mut rng);
            let keys_right = generate_keys(&mut rng);
            let merged = build(&keys_left).merge(&build(&keys_right));

            let mut union = keys_left.clone();
            union.extend(keys_right.iter().cloned());
            union.sort();
            union.dedup();

            assert_eq!(merged.n_keys(), union.len() as u64);
            for (id, key) in union.iter().enumerate() {
                assert_eq!(merged.lookup(key), Some(id as u64), "key = {:?}", key);
            }
            let collected: Vec<Vec<u8>> = merged.iter().collect();
            assert_eq!(collected, union);
        }
    }

    #[test]
    fn long_query_test() {
        let mut builder = TrieBuilder::new();
        builder.add("ab");
        let trie = builder.build();

        assert_eq!(trie.lookup("abc"), None);
        assert_eq!(trie.lookup("abcdefghij"), None);
        assert_eq!(trie.lookup(vec![0xffu8; 1000]), None);
    }

    #[test]
    fn node_count_test() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let keys = generate_keys(&mut rng);
            let trie = build(&keys);

            // 1 (root) + number of distinct non-empty key prefixes
            let mut prefixes: Vec<&[u8]> = keys
                .iter()
                .flat_map(|key| (1..=key.len()).map(move |len| &key[..len]))
                .collect();
            prefixes.sort();
            prefixes.dedup();
            assert_eq!(trie.n_nodes(), 1 + prefixes.len() as u64, "keys = {:?}", keys);
        }
    }
}
