//! IndexedList against a `Vec` updated with the same relocation rules.

use super::common::{assert_well_formed, fold, model_insert, model_remove, ops_strategy, Op};
use proptest::prelude::*;
use slotchain::IndexedList;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every call agrees with the model and leaves a well-formed list.
    #[test]
    fn prop_matches_vec_model(ops in ops_strategy(200)) {
        let mut list = IndexedList::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(raw, value) => {
                    let index = fold(raw, model.len() + 1);
                    list.insert_at(index, value).unwrap();
                    model_insert(&mut model, index, value);
                    prop_assert_eq!(list.get(index), Ok(&value));
                }
                Op::Remove(raw) if !model.is_empty() => {
                    let index = fold(raw, model.len());
                    prop_assert_eq!(list.remove_at(index).unwrap(), model_remove(&mut model, index));
                }
                Op::Get(raw) if !model.is_empty() => {
                    let index = fold(raw, model.len());
                    prop_assert_eq!(list.get(index), Ok(&model[index]));
                }
                Op::Remove(_) | Op::Get(_) => {
                    prop_assert!(list.remove_at(0).is_err());
                    prop_assert!(list.get(0).is_err());
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(&list.to_vec(), &model);
            assert_well_formed(&list);
        }
    }

    /// Length is inserts minus removes over any valid sequence.
    #[test]
    fn prop_len_counts_inserts_minus_removes(ops in ops_strategy(300)) {
        let mut list = IndexedList::new();
        let (mut inserts, mut removes) = (0usize, 0usize);

        for op in ops {
            match op {
                Op::Insert(raw, value) => {
                    list.insert_at(fold(raw, list.len() + 1), value).unwrap();
                    inserts += 1;
                }
                Op::Remove(raw) if !list.is_empty() => {
                    list.remove_at(fold(raw, list.len())).unwrap();
                    removes += 1;
                }
                _ => {}
            }
            prop_assert_eq!(list.len(), inserts - removes);
        }
    }

    /// Out-of-range indices fail and change nothing.
    #[test]
    fn prop_out_of_range_is_rejected(values in prop::collection::vec(any::<u8>(), 0..40), extra in 1usize..1000) {
        let mut list: IndexedList<u8> = values.iter().copied().collect();
        let len = list.len();

        prop_assert!(list.get(len + extra - 1).is_err());
        prop_assert!(list.remove_at(len + extra - 1).is_err());
        prop_assert!(list.insert_at(len + extra, 0).is_err());
        prop_assert_eq!(list.to_vec(), values);
        assert_well_formed(&list);
    }
}
