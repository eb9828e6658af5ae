//! The canonical a/b/c walkthrough, checked step by step.

use super::common::assert_well_formed;
use slotchain::{IndexedList, NaiveList, PositionalList};

fn chain(list: &IndexedList<&'static str>) -> Vec<&'static str> {
    list.chain().copied().collect()
}

#[test]
fn insert_a_b_c_then_remove_head() {
    let mut list = IndexedList::new();

    list.insert_at(0, "a").unwrap();
    assert_eq!(list.to_vec(), vec!["a"]);
    assert_eq!(chain(&list), vec!["a"]);

    list.insert_at(1, "b").unwrap();
    assert_eq!(list.to_vec(), vec!["a", "b"]);
    assert_eq!(chain(&list), vec!["b", "a"]);

    list.insert_at(1, "c").unwrap();
    assert_eq!(list.to_vec(), vec!["a", "c", "b"]);
    assert_eq!(chain(&list), vec!["c", "b", "a"]);
    assert_well_formed(&list);

    assert_eq!(list.remove_at(0).unwrap(), "a");
    assert_eq!(list.to_vec(), vec!["b", "c"]);
    assert_eq!(list.len(), 2);
    assert_eq!(chain(&list), vec!["b", "c"]);
    assert_well_formed(&list);

    assert!(list.get(2).is_err());
}

#[test]
fn newest_node_is_always_the_head() {
    let mut list = IndexedList::new();
    for (i, value) in ["x", "y", "z"].into_iter().enumerate() {
        list.insert_at(i / 2, value).unwrap();
        assert_eq!(list.chain().next(), Some(&value));
    }
}

#[test]
fn chain_and_logical_views_hold_the_same_values() {
    let mut list = IndexedList::new();
    for i in 0..20u32 {
        list.insert_at((i as usize * 7) % (list.len() + 1), i).unwrap();
    }
    for i in 0..8 {
        list.remove_at((i * 5) % list.len()).unwrap();
    }

    let mut logical = list.to_vec();
    let mut physical: Vec<u32> = list.chain().copied().collect();
    logical.sort_unstable();
    physical.sort_unstable();
    assert_eq!(logical, physical);
    assert_eq!(list.chain().len(), list.len());
    assert_well_formed(&list);
}

/// Append `n` values, read them front to back, then drain from the tail.
fn append_read_drain<L: PositionalList<u64> + Default>(n: usize) {
    let mut list = L::default();
    for v in 0..n as u64 {
        list.insert_at(list.len(), v).unwrap();
    }
    for i in 0..n {
        assert_eq!(*list.get(i).unwrap(), i as u64, "{} get({})", L::NAME, i);
    }
    for i in (0..n).rev() {
        assert_eq!(list.remove_at(i).unwrap(), i as u64, "{} remove_at({})", L::NAME, i);
    }
    assert!(list.is_empty());
}

#[test]
fn tail_drain_returns_values_in_reverse() {
    append_read_drain::<IndexedList<u64>>(800);
    append_read_drain::<NaiveList<u64>>(800);
}
