//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::list::IndexedList;

/// Panic with a readable message if any invariant is broken.
///
/// This is the canonical implementation used across all tests.
pub fn assert_well_formed<T>(list: &IndexedList<T>) {
    if let Err(err) = list.check_invariants() {
        panic!("IndexedList invariant violated: {}", err);
    }
}

/// Build a list by appending `values` in order.
pub fn list_of<T: Clone>(values: &[T]) -> IndexedList<T> {
    values.iter().cloned().collect()
}

/// Build a list of `n` values the way the timing sweep does: `n` insertions
/// at position 0 with values `0..n`.
pub fn head_filled(n: usize) -> IndexedList<u64> {
    let mut list = IndexedList::with_capacity(n);
    for value in 0..n as u64 {
        list.insert_at(0, value)
            .expect("position 0 is valid for every length");
    }
    list
}

/// Reference model of `insert_at` on a plain `Vec`.
///
/// Appends, then swaps the new element into `index`. The previous occupant
/// of `index` ends up at the end.
pub fn model_insert<T>(model: &mut Vec<T>, index: usize, value: T) {
    model.push(value);
    let last = model.len() - 1;
    model.swap(index, last);
}

/// Reference model of `remove_at` on a plain `Vec`.
///
/// The value swap with the head node is invisible in the logical view: the
/// head's slot is re-pointed at the node now carrying the head's value. What
/// callers observe is a plain swap-remove. Returns the removed value.
pub fn model_remove<T>(model: &mut Vec<T>, index: usize) -> T {
    model.swap_remove(index)
}
