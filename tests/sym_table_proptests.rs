// Differential property tests over the public API.
//
// Property 1: ListTable and HashTable agree.
//  - Model: the list backend is the reference for the hash backend.
//  - Invariant: after every op both return the same result, have the same
//    len, and hold the same set of (key, value) pairs.
//  - Operations: put, replace, remove, get, contains.
//
// Property 2: length invariant.
//  - len() == successful puts - successful removes, for any sequence.
use proptest::prelude::*;
use std::collections::BTreeMap;
use symtable::{HashTable, ListTable, SymTable};

fn snapshot<T: SymTable<Value = u16>>(t: &T) -> BTreeMap<String, u16> {
    t.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

proptest! {
    #[test]
    fn prop_backends_agree(
        keys in 1usize..=40,
        ops in proptest::collection::vec((0u8..5, 0usize..1000, any::<u16>()), 1..300),
    ) {
        let mut list: ListTable<u16> = ListTable::new();
        let mut hash: HashTable<u16> = HashTable::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{}", raw_k % keys);
            match op {
                0 => prop_assert_eq!(list.put(&key, v), hash.put(&key, v)),
                1 => prop_assert_eq!(list.replace(&key, v), hash.replace(&key, v)),
                2 => prop_assert_eq!(list.remove(&key), hash.remove(&key)),
                3 => prop_assert_eq!(list.get(&key), hash.get(&key)),
                4 => prop_assert_eq!(list.contains(&key), hash.contains(&key)),
                _ => unreachable!(),
            }
            prop_assert_eq!(list.len(), hash.len());
        }
        prop_assert_eq!(snapshot(&list), snapshot(&hash));
    }

    #[test]
    fn prop_len_counts_successful_ops(
        ops in proptest::collection::vec((any::<bool>(), "[ab]{0,4}"), 1..200),
    ) {
        let mut t: HashTable<()> = HashTable::new();
        let mut expected = 0usize;
        for (is_put, key) in ops {
            if is_put {
                if t.put(&key, ()).is_ok() {
                    expected += 1;
                }
            } else if t.remove(&key).is_some() {
                expected -= 1;
            }
            prop_assert_eq!(t.len(), expected);
        }
    }
}
