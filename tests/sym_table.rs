// Contract tests run against every backend.
//
// Each test is written once over `T: SymTable` and instantiated for both
// `ListTable` and `HashTable`, so the two backends are held to the same
// observable behavior:
// - Uniqueness: a duplicate put fails and keeps the first value.
// - Round-trip: put then get/contains.
// - Replace/remove return the previous value; misses change nothing.
// - Length: successful puts minus successful removes.
// - Traversal: every binding exactly once, with `extra` passed through.
use std::collections::BTreeMap;
use std::rc::Rc;
use symtable::{HashTable, ListTable, PutError, SymTable};

fn example_scenario<T: SymTable<Value = i32>>() {
    let mut t = T::new();
    assert_eq!(t.put("a", 1), Ok(()));
    assert_eq!(t.put("b", 2), Ok(()));
    assert_eq!(t.put("a", 3), Err(PutError::DuplicateKey));
    assert_eq!(t.len(), 2);
    assert_eq!(t.get("a"), Some(&1));
}

fn put_get_round_trip<T: SymTable<Value = &'static str>>() {
    let mut t = T::new();
    assert!(!t.contains("k"));
    assert_eq!(t.get("k"), None);
    t.put("k", "v").unwrap();
    assert!(t.contains("k"));
    assert_eq!(t.get("k"), Some(&"v"));
    // Keys compare by exact bytes.
    assert!(!t.contains("K"));
    assert!(!t.contains("k "));
}

fn replace_semantics<T: SymTable<Value = i32>>() {
    let mut t = T::new();
    t.put("k", 1).unwrap();
    assert_eq!(t.replace("k", 2), Some(1));
    assert_eq!(t.get("k"), Some(&2));
    assert_eq!(t.len(), 1);
    assert_eq!(t.replace("nope", 9), None);
    assert!(!t.contains("nope"));
    assert_eq!(t.len(), 1);
}

fn remove_semantics<T: SymTable<Value = i32>>() {
    let mut t = T::new();
    t.put("k", 7).unwrap();
    t.put("other", 8).unwrap();
    assert_eq!(t.remove("k"), Some(7));
    assert!(!t.contains("k"));
    assert_eq!(t.len(), 1);
    assert_eq!(t.remove("k"), None);
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("other"), Some(&8));
}

fn length_tracks_successful_ops<T: SymTable<Value = usize>>() {
    let mut t = T::new();
    let mut expected = 0usize;
    for i in 0..300 {
        let k = format!("k{}", i % 200);
        if t.put(&k, i).is_ok() {
            expected += 1;
        }
        if i % 3 == 0 && t.remove(&format!("k{}", i / 2)).is_some() {
            expected -= 1;
        }
        assert_eq!(t.len(), expected);
    }
}

fn for_each_visits_each_once<T: SymTable<Value = u32>>() {
    let mut t = T::new();
    for i in 0..100u32 {
        t.put(&format!("n{i}"), i).unwrap();
    }
    let mut visits: BTreeMap<String, u32> = BTreeMap::new();
    t.for_each(
        |k, v, visits: &mut BTreeMap<String, u32>| {
            assert!(visits.insert(k.to_string(), *v).is_none(), "{k} visited twice");
        },
        &mut visits,
    );
    assert_eq!(visits.len(), 100);
    for (k, v) in &visits {
        assert_eq!(t.get(k), Some(v));
    }

    // An unsized `extra` is passed straight through.
    let mut total = [0u64];
    t.for_each(
        |_, v, acc: &mut [u64]| acc[0] += u64::from(*v),
        &mut total[..],
    );
    assert_eq!(total[0], (0..100u64).sum());
}

fn values_are_not_owned<T: SymTable<Value = Rc<String>>>() {
    let shared = Rc::new(String::from("payload"));
    let mut t = T::new();
    t.put("a", Rc::clone(&shared)).unwrap();
    assert_eq!(Rc::strong_count(&shared), 2);
    // Failed put hands nothing to the table permanently.
    assert!(t.put("a", Rc::clone(&shared)).is_err());
    assert_eq!(Rc::strong_count(&shared), 2);
    let back = t.remove("a").unwrap();
    assert!(Rc::ptr_eq(&back, &shared));
    drop(back);
    assert_eq!(Rc::strong_count(&shared), 1);

    t.put("b", Rc::clone(&shared)).unwrap();
    drop(t);
    assert_eq!(Rc::strong_count(&shared), 1);
}

fn drop_empty<T: SymTable<Value = ()>>() {
    let t = T::new();
    assert!(t.is_empty());
    assert_eq!(t.iter().count(), 0);
    drop(t);
}

macro_rules! contract_tests {
    ($($name:ident => $check:ident),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn list_table() {
                    $check::<ListTable<_>>();
                }

                #[test]
                fn hash_table() {
                    $check::<HashTable<_>>();
                }
            }
        )*
    };
}

contract_tests! {
    example => example_scenario,
    round_trip => put_get_round_trip,
    replace => replace_semantics,
    remove => remove_semantics,
    length => length_tracks_successful_ops,
    traversal => for_each_visits_each_once,
    caller_values => values_are_not_owned,
    destruction => drop_empty,
}
