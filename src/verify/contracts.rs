// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked after every mutation.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the call that broke the structure, not somewhere later
//! 3. Touch only the slots the mutation touched, so they stay O(1)
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Checks                                             |
//! |------------------------|----------------------------------------------------|
//! | `check_counts`         | `slots.len() == live nodes`, head iff non-empty    |
//! | `check_slot`           | `arena[slots[i]].slot == i` for one `i`            |
//! | `check_after_insert`   | counts, inserted slot, tail slot, new head         |
//! | `check_after_remove`   | counts, refilled slot                              |
//!
//! The full O(n) walk lives in `IndexedList::check_invariants`.

use crate::list::IndexedList;

/// Node count and head presence agree with `slots`.
#[inline]
pub fn check_counts<T>(list: &IndexedList<T>) {
    debug_assert_eq!(
        list.slot_keys().len(),
        list.arena().len(),
        "Contract violation: slots.len() != live nodes"
    );
    debug_assert_eq!(
        list.is_empty(),
        list.head_key().is_none(),
        "Contract violation: head must exist exactly when the list is non-empty"
    );
}

/// The node at `slots[slot]` records `slot` as its position.
#[inline]
pub fn check_slot<T>(list: &IndexedList<T>, slot: usize) {
    if let Some(&key) = list.slot_keys().get(slot) {
        let recorded = list.arena().get(key).map(|node| node.slot);
        debug_assert_eq!(
            recorded,
            Some(slot),
            "Contract violation: node at slots[{}] records {:?}",
            slot,
            recorded
        );
    }
}

/// After `insert_at(index)`: the new node is the head and sits at `index`,
/// and whatever now sits at the tail knows it.
#[inline]
pub fn check_after_insert<T>(list: &IndexedList<T>, index: usize) {
    check_counts(list);
    check_slot(list, index);
    check_slot(list, list.len().saturating_sub(1));
    debug_assert_eq!(
        list.head_key(),
        list.slot_keys().get(index).copied(),
        "Contract violation: inserted node at slots[{}] is not the physical head",
        index
    );
}

/// After `remove_at(index)`: counts shrank together and, unless the tail was
/// removed, the refilled slot is consistent.
#[inline]
pub fn check_after_remove<T>(list: &IndexedList<T>, index: usize) {
    check_counts(list);
    check_slot(list, index);
    if let Some(head) = list.head_key() {
        let head_slot = list.arena().get(head).map(|node| node.slot);
        debug_assert!(
            head_slot.is_some_and(|slot| list.slot_keys().get(slot) == Some(&head)),
            "Contract violation: head node is not referenced by its recorded slot"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracts_hold_through_mixed_operations() {
        let mut list = IndexedList::new();
        for i in 0..10 {
            list.insert_at(i / 2, i).unwrap();
            check_after_insert(&list, i / 2);
        }
        for i in (0..10).rev() {
            list.remove_at(i / 3).unwrap();
            check_after_remove(&list, i / 3);
        }
        check_counts(&list);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation")]
    fn stale_slot_is_caught() {
        let mut list: IndexedList<u8> = (0..3).collect();
        let (_, slots, arena) = list.raw_parts_mut();
        let key = slots[1];
        arena[key].slot = 2;
        check_slot(&list, 1);
    }
}
