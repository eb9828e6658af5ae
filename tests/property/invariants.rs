//! Structural invariants and the position rules, checked on random inputs.

use super::common::{assert_well_formed, fold, head_filled};
use proptest::prelude::*;
use slotchain::IndexedList;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Head-filling `n` values leaves `[n-1, 0, 1, ..., n-2]`.
    #[test]
    fn prop_head_fill_order(n in 1usize..300) {
        let list = head_filled(n);
        let values = list.to_vec();
        prop_assert_eq!(values[0], n as u64 - 1);
        for (i, &value) in values[1..].iter().enumerate() {
            prop_assert_eq!(value, i as u64);
        }
        assert_well_formed(&list);
    }

    /// Insert then remove at the same index restores the logical view.
    #[test]
    fn prop_insert_then_remove_is_identity(
        values in prop::collection::vec(any::<i64>(), 0..80),
        raw in any::<usize>(),
        extra in any::<i64>(),
    ) {
        let mut list: IndexedList<i64> = values.iter().copied().collect();
        let index = fold(raw, list.len() + 1);

        list.insert_at(index, extra).unwrap();
        prop_assert_eq!(list.remove_at(index).unwrap(), extra);
        prop_assert_eq!(list.to_vec(), values);
        assert_well_formed(&list);
    }

    /// Draining from random positions visits every value exactly once.
    #[test]
    fn prop_drain_returns_everything(
        values in prop::collection::vec(any::<u16>(), 0..100),
        seeds in prop::collection::vec(any::<usize>(), 100),
    ) {
        let mut list: IndexedList<u16> = values.iter().copied().collect();
        let mut drained = Vec::with_capacity(values.len());
        for seed in seeds.iter().take(values.len()) {
            drained.push(list.remove_at(fold(*seed, list.len())).unwrap());
            assert_well_formed(&list);
        }
        prop_assert!(list.is_empty());
        prop_assert!(list.chain().next().is_none());

        let mut expected = values.clone();
        expected.sort_unstable();
        drained.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// Capacity is reused: a list that shrinks and grows again stays valid.
    #[test]
    fn prop_regrowth_after_clear(first in 1usize..50, second in 1usize..50) {
        let mut list = head_filled(first);
        list.clear();
        prop_assert!(list.is_empty());
        for v in 0..second as u64 {
            list.insert_at(0, v).unwrap();
        }
        prop_assert_eq!(list.len(), second);
        assert_well_formed(&list);
    }
}
