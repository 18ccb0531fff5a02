#![cfg(test)]

// Property tests for IntKeyHashMap kept inside the crate so they can check
// the chain structure directly after every operation.

use crate::int_key_hash_map::IntKeyHashMap;
use crate::selection::Selection;
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    GetMut(usize, i32),
    // Remove every entry whose value is divisible by the divisor.
    RemoveDivisible(i32),
    // Remove the first entry visited with this key, then stop.
    RemoveFirst(usize),
    // Stop on this key without removing anything.
    FindFirst(usize),
    Grow(usize),
    Clear,
    Snapshot,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i32>, Vec<OpI>)> {
    proptest::collection::vec(any::<i32>(), 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => (idx.clone(), -100i32..100).prop_map(|(i, d)| OpI::GetMut(i, d)),
            1 => (2i32..5).prop_map(OpI::RemoveDivisible),
            1 => idx.clone().prop_map(OpI::RemoveFirst),
            1 => idx.clone().prop_map(OpI::FindFirst),
            1 => (0usize..200).prop_map(OpI::Grow),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Snapshot),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_scenario(
    mut sut: IntKeyHashMap<i32>,
    pool: Vec<i32>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<i32, i32> = HashMap::new();
    for op in ops {
        let cap_before = sut.capacity();
        match op {
            OpI::Put(i, v) => {
                let k = pool[i];
                prop_assert_eq!(sut.put(k, v), model.insert(k, v));
            }
            OpI::Remove(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(&k));
                prop_assert!(sut.get(k).is_none());
            }
            OpI::Get(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.get(k), model.get(&k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            OpI::GetMut(i, d) => {
                let k = pool[i];
                match (sut.get_mut(k), model.get_mut(&k)) {
                    (Some(s), Some(m)) => {
                        *s = s.wrapping_add(d);
                        *m = m.wrapping_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence differs for {}", k),
                }
            }
            OpI::RemoveDivisible(d) => {
                let any = model.values().any(|v| v % d == 0);
                let r = sut.select(|e| Selection::from_flags(e.value() % d == 0, false));
                model.retain(|_, v| *v % d != 0);
                prop_assert_eq!(r, if any { Selection::Match } else { Selection::NoMatch });
            }
            OpI::RemoveFirst(i) => {
                let k = pool[i];
                let mut calls_after_stop = 0;
                let mut stopped = false;
                let r = sut.select(|e| {
                    if stopped {
                        calls_after_stop += 1;
                    }
                    if e.key() == k {
                        stopped = true;
                        Selection::StopMatch
                    } else {
                        Selection::NoMatch
                    }
                });
                prop_assert_eq!(calls_after_stop, 0);
                let expected = model.remove(&k).map(|_| Selection::StopMatch).unwrap_or(Selection::NoMatch);
                prop_assert_eq!(r, expected);
            }
            OpI::FindFirst(i) => {
                let k = pool[i];
                let len = sut.len();
                let r = sut.select(|e| {
                    if e.key() == k { Selection::StopNoMatch } else { Selection::NoMatch }
                });
                let expected = if model.contains_key(&k) { Selection::StopNoMatch } else { Selection::NoMatch };
                prop_assert_eq!(r, expected);
                prop_assert_eq!(sut.len(), len);
            }
            OpI::Grow(n) => {
                sut.grow(n);
                prop_assert!(sut.capacity() >= n);
                if n <= cap_before {
                    prop_assert_eq!(sut.capacity(), cap_before);
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), cap_before);
            }
            OpI::Snapshot => {
                let keys = sut.keys();
                let set: BTreeSet<i32> = keys.iter().copied().collect();
                prop_assert_eq!(set.len(), keys.len(), "duplicate keys in snapshot");
                let m_keys: BTreeSet<i32> = model.keys().copied().collect();
                prop_assert_eq!(set, m_keys);
                let values: Vec<i32> = sut.values().into_iter().copied().collect();
                for (k, v) in keys.iter().zip(&values) {
                    prop_assert_eq!(model.get(k), Some(v));
                }
            }
        }

        // Post-conditions after each op
        sut.assert_consistent();
        prop_assert!(sut.capacity() >= cap_before, "capacity must not shrink");
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

// Property: State-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - `put`/`remove`/`get` return what the model returns (last write wins).
// - `select` verdict handling: bulk removal, remove-first-and-stop, and
//   find-first leave the same contents as the model and report correctly.
// - Growth and clear never lose entries or shrink the table.
// - Every entry stays in its key's bucket and is reachable exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(IntKeyHashMap::new(), pool, ops)?;
    }
}

// Property: Same invariants starting from a tiny table with a high load
// factor, so chains get long and growth fires often.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_long_chains((pool, ops) in arb_scenario()) {
        let sut = IntKeyHashMap::with_capacity_and_load_factor(1, 4.0).unwrap();
        run_scenario(sut, pool, ops)?;
    }
}
