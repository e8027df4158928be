#![cfg(test)]

// Property tests for both backends kept inside the crate so the hash table's
// bucket-placement check can be run after every op.

use crate::hash_table::HashTable;
use crate::list_table::ListTable;
use crate::{PutError, SymTable};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Replace(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    ForEach,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Replace(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::ForEach),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected with DuplicateKey and leave the value alone.
// - `replace`/`remove` return the model's previous value, `None` on a miss.
// - `get`/`contains` parity with the model.
// - `for_each` visits each live binding exactly once with its value.
// - `len`/`is_empty` parity with the model after each op; `check` runs any
//   backend-specific structural checks.
fn run_state_machine<T>(
    pool: &[String],
    ops: Vec<OpI>,
    check: impl Fn(&T),
) -> Result<(), TestCaseError>
where
    T: SymTable<Value = i32>,
{
    let mut sut = T::new();
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let before = model.get(k).copied();
                match sut.put(k, v) {
                    Ok(()) => {
                        prop_assert!(before.is_none(), "put must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(PutError::DuplicateKey) => {
                        prop_assert!(before.is_some(), "duplicate error only when key exists");
                        prop_assert_eq!(sut.get(k).copied(), before);
                    }
                    Err(e) => prop_assert!(false, "unexpected error: {}", e),
                }
            }
            OpI::Replace(i, v) => {
                let k = &pool[i];
                let expected = model.get_mut(k).map(|slot| std::mem::replace(slot, v));
                prop_assert_eq!(sut.replace(k, v), expected);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
            }
            OpI::ForEach => {
                let mut seen: BTreeMap<String, (i32, usize)> = BTreeMap::new();
                sut.for_each(
                    |k, v, seen: &mut BTreeMap<String, (i32, usize)>| {
                        seen.entry(k.to_string()).or_insert((*v, 0)).1 += 1;
                    },
                    &mut seen,
                );
                prop_assert!(seen.values().all(|&(_, n)| n == 1), "visited twice");
                let s: BTreeMap<_, _> = seen.into_iter().map(|(k, (v, _))| (k, v)).collect();
                let m: BTreeMap<_, _> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
        }

        // Post-conditions after each op
        check(&sut);
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let keys: BTreeSet<&str> = sut.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(keys.len(), sut.len(), "iter yielded a duplicate key");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_table_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine::<ListTable<i32>>(&pool, ops, |_| {})?;
    }

    #[test]
    fn prop_hash_table_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine::<HashTable<i32>>(&pool, ops, HashTable::check_invariants)?;
    }
}

// Property: a large batch of distinct keys forces resizes; afterwards every
// key maps to its value, and removing a subset keeps the rest reachable with
// bucket placement intact.
proptest! {
    #![proptest_config(ProptestConfig { cases: 8, .. ProptestConfig::default() })]
    #[test]
    fn prop_hash_table_resize_preserves_entries(
        keys in proptest::collection::btree_set("[a-z0-9]{1,12}", 510..1500),
        stride in 2usize..7,
    ) {
        let mut t: HashTable<usize> = HashTable::new();
        for (i, k) in keys.iter().enumerate() {
            prop_assert!(t.put(k, i).is_ok());
        }
        prop_assert!(t.bucket_count() >= 1021);
        t.check_invariants();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.get(k), Some(&i));
        }
        let buckets = t.bucket_count();
        for (i, k) in keys.iter().enumerate().step_by(stride) {
            prop_assert_eq!(t.remove(k), Some(i));
        }
        prop_assert_eq!(t.bucket_count(), buckets);
        t.check_invariants();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.contains(k), i % stride != 0);
        }
    }
}
