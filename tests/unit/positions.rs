//! Which positions move on insert and remove.

use super::common::{assert_well_formed, head_filled, list_of, model_insert, model_remove};
use slotchain::{IndexedList, NaiveList, PositionalList};

#[test]
fn head_insertions_rotate_previous_front_to_the_end() {
    // Each insert at 0 keeps the newest value in front and relocates the
    // previous front to the end: [v(n-1), v0, v1, ..., v(n-2)].
    let list = head_filled(5);
    assert_eq!(list.to_vec(), vec![4, 0, 1, 2, 3]);
    assert_well_formed(&list);
}

#[test]
fn insert_relocates_only_the_displaced_element() {
    let mut list = list_of(&[10, 20, 30, 40]);
    list.insert_at(1, 99).unwrap();
    assert_eq!(list.to_vec(), vec![10, 99, 30, 40, 20]);
}

#[test]
fn remove_moves_last_into_the_gap() {
    let mut list = list_of(&[10, 20, 30, 40]);
    assert_eq!(list.remove_at(1).unwrap(), 20);
    assert_eq!(list.to_vec(), vec![10, 40, 30]);

    assert_eq!(list.remove_at(2).unwrap(), 30);
    assert_eq!(list.to_vec(), vec![10, 40]);
    assert_well_formed(&list);
}

#[test]
fn get_returns_what_was_just_inserted() {
    let mut list = IndexedList::new();
    for i in 0..50usize {
        let index = (i * 31) % (list.len() + 1);
        list.insert_at(index, i).unwrap();
        assert_eq!(list.get(index), Ok(&i));
    }
}

#[test]
fn matches_vec_model_on_a_fixed_sequence() {
    let mut list = IndexedList::new();
    let mut model = Vec::new();
    let script: [(bool, usize); 10] = [
        (true, 0),
        (true, 1),
        (true, 0),
        (true, 2),
        (false, 1),
        (true, 3),
        (false, 0),
        (true, 1),
        (false, 2),
        (false, 0),
    ];
    for (step, (insert, index)) in script.into_iter().enumerate() {
        if insert {
            list.insert_at(index, step).unwrap();
            model_insert(&mut model, index, step);
        } else {
            assert_eq!(list.remove_at(index).unwrap(), model_remove(&mut model, index));
        }
        assert_eq!(list.to_vec(), model);
        assert_well_formed(&list);
    }
}

#[test]
fn baseline_shifts_like_a_vec() {
    let mut naive = NaiveList::new();
    naive.insert_at(0, 'a').unwrap();
    naive.insert_at(1, 'b').unwrap();
    naive.insert_at(1, 'c').unwrap();
    assert_eq!(naive.iter().copied().collect::<Vec<_>>(), vec!['a', 'c', 'b']);
    assert_eq!(naive.remove_at(0).unwrap(), 'a');
    assert_eq!(naive.iter().copied().collect::<Vec<_>>(), vec!['c', 'b']);
}

fn fill<L: PositionalList<u32> + Default>(n: u32) -> L {
    let mut list = L::default();
    for v in 0..n {
        list.insert_at(list.len(), v).unwrap();
    }
    list
}

#[test]
fn appends_agree_across_implementations() {
    let indexed: IndexedList<u32> = fill(16);
    let naive: NaiveList<u32> = fill(16);
    for i in 0..16 {
        assert_eq!(indexed.get(i), naive.get(i));
    }
    assert_eq!(<IndexedList<u32> as PositionalList<u32>>::NAME, "indexed");
    assert_eq!(<NaiveList<u32> as PositionalList<u32>>::NAME, "naive");
}
