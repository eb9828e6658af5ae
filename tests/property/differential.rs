//! IndexedList against the naive baseline.
//!
//! The two lists relocate elements differently, so positions are not
//! comparable. What must agree: lengths, error outcomes, and the multiset of
//! held values.

use super::common::{fold, ops_strategy, Op};
use proptest::prelude::*;
use slotchain::{IndexedList, NaiveList, PositionalList};

fn sorted<'a>(values: impl Iterator<Item = &'a u32>) -> Vec<u32> {
    let mut v: Vec<u32> = values.copied().collect();
    v.sort_unstable();
    v
}

/// Apply `op` through the shared trait. Returns the removed value, if any.
fn apply<L: PositionalList<u32>>(list: &mut L, op: &Op) -> Option<u32> {
    match *op {
        Op::Insert(raw, value) => {
            list.insert_at(fold(raw, list.len() + 1), value).unwrap();
            None
        }
        Op::Remove(raw) if !list.is_empty() => list.remove_at(fold(raw, list.len())).ok(),
        Op::Get(raw) if !list.is_empty() => {
            assert!(list.get(fold(raw, list.len())).is_ok());
            None
        }
        _ => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Same call sequence, same lengths and same values held.
    #[test]
    fn prop_same_multiset_as_baseline(ops in ops_strategy(150)) {
        let mut indexed: IndexedList<u32> = IndexedList::new();
        let mut naive: NaiveList<u32> = NaiveList::new();

        for op in &ops {
            apply(&mut indexed, op);
            apply(&mut naive, op);
            prop_assert_eq!(PositionalList::len(&indexed), PositionalList::len(&naive));
        }
        prop_assert_eq!(sorted(indexed.iter()), sorted(naive.iter()));
    }

    /// Appends and removals at the end move nothing in either list, so
    /// there the two agree position by position.
    #[test]
    fn prop_tail_operations_agree_positionally(
        values in prop::collection::vec(any::<u32>(), 1..60),
        pops in 0usize..60,
    ) {
        let mut indexed = IndexedList::new();
        let mut naive = NaiveList::new();
        for &v in &values {
            indexed.insert_at(indexed.len(), v).unwrap();
            naive.insert_at(naive.len(), v).unwrap();
        }
        for _ in 0..pops.min(values.len()) {
            let last = indexed.len() - 1;
            prop_assert_eq!(indexed.remove_at(last).unwrap(), naive.remove_at(last).unwrap());
        }
        for i in 0..indexed.len() {
            prop_assert_eq!(indexed.get(i), naive.get(i));
        }
    }
}
