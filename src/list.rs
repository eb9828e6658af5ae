// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A singly linked list with O(1) positional access.
//!
//! A plain linked list needs a walk from the head to reach position `i`. This
//! one keeps a second structure next to the chain: `slots`, an array whose
//! element `i` is the key of the node that currently *represents* logical
//! position `i`. Each node caches its own position in `slots`, so either side
//! can find the other in one step.
//!
//! The trick is that logical order (array order) and physical order (chain
//! order) are allowed to disagree:
//!
//! ```text
//!   slots:  [ k2 ][ k0 ][ k1 ]          logical view:  c  a  b
//!             │     │     │
//!   head ──▶ (k2:c) ──▶ (k1:b) ──▶ (k0:a) ──▶ ∅      physical view: c → b → a
//! ```
//!
//! - **Insertion** always links the new node as the physical head, appends it
//!   to `slots`, and swaps it into position `i`. The element that was at `i`
//!   moves to the end instead of every later element shifting by one.
//! - **Removal** never unlinks an arbitrary node (that would need its
//!   predecessor). It swaps the *values* of the target and the head node, so
//!   the head now carries the doomed value, repoints the head's slot at the
//!   target node, and unlinks the head. The hole left at `i` is filled by the
//!   last slot (swap-and-pop).
//!
//! Both moves relocate at most one unrelated element. Callers must not assume
//! other indices stay put across an insert or remove in the middle; only the
//! multiset of values is preserved.
//!
//! # Invariants
//!
//! 1. `slots.len()` equals the number of live nodes.
//! 2. `arena[slots[i]].slot == i` for every `i`.
//! 3. The chain from `head` visits exactly the nodes in `slots`, once each,
//!    and ends in `None`.
//!
//! [`IndexedList::check_invariants`] verifies all three in O(n). The contracts
//! in `verify::contracts` check the O(1) part after every mutation in debug
//! builds.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::arena::{Node, NodeArena, NodeKey};
use crate::error::{check_index, IndexError, Op};
use crate::verify::{self, contracts, InvariantError};

/// Singly linked list with an auxiliary slot index.
///
/// `get`, `insert_at` and `remove_at` are O(1). See the module docs for how
/// logical positions move under insertion and removal.
#[derive(Clone)]
pub struct IndexedList<T> {
    head: Option<NodeKey>,
    slots: Vec<NodeKey>,
    arena: NodeArena<T>,
}

impl<T> IndexedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            slots: Vec::new(),
            arena: NodeArena::new(),
        }
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: None,
            slots: Vec::with_capacity(capacity),
            arena: NodeArena::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at logical position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        check_index(Op::Get, index, self.len())?;
        Ok(&self.arena[self.slots[index]].value)
    }

    /// Mutable access to the value at logical position `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        check_index(Op::Get, index, self.len())?;
        Ok(&mut self.arena[self.slots[index]].value)
    }

    /// Insert `value` so that `get(index)` returns it.
    ///
    /// `index == len()` appends. Otherwise the element previously at `index`
    /// is relocated to the end; no other element moves.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let len = self.len();
        check_index(Op::Insert, index, len)?;

        self.link_head(value);
        if index != len {
            self.swap_slots(index, len);
        }

        contracts::check_after_insert(self, index);
        log::trace!("insert_at({}) -> len {}", index, self.len());
        Ok(())
    }

    /// Remove and return the value at logical position `index`.
    ///
    /// If `index` is not the last position, the element at the last position
    /// is relocated to `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.len();
        check_index(Op::Remove, index, len)?;

        let target = self.slots[index];
        let Some(head) = self.head else {
            unreachable!("non-empty list without a head node");
        };

        // No pair when the target is the head node itself: nothing to swap.
        if let Some((target_node, head_node)) = self.arena.get2_mut(target, head) {
            // The head node takes over the doomed value; the target node takes
            // over the head's value and the head's logical position.
            std::mem::swap(&mut target_node.value, &mut head_node.value);
            let head_slot = head_node.slot;
            self.assign_slot(head_slot, target);
        }

        let removed = self.arena.remove(head);
        self.head = removed.next;

        let last = len - 1;
        if index != last {
            let moved = self.slots[last];
            self.assign_slot(index, moved);
        }
        self.slots.pop();

        contracts::check_after_remove(self, index);
        log::trace!("remove_at({}) -> len {}", index, self.len());
        Ok(removed.value)
    }

    /// Append `value` at the end (`insert_at(len())`).
    pub fn push(&mut self, value: T) {
        let slot = self.link_head(value);
        contracts::check_after_insert(self, slot);
        log::trace!("push -> len {}", self.len());
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.head = None;
        self.slots.clear();
        self.arena.clear();
    }

    /// Values in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.slots.iter(),
            arena: &self.arena,
        }
    }

    /// Values in physical order, following `next` from the head.
    pub fn chain(&self) -> Chain<'_, T> {
        Chain {
            cursor: self.head,
            remaining: self.len(),
            arena: &self.arena,
        }
    }

    /// Verify every structural invariant. O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        verify::validate(self)
    }

    /// Consume the list, returning values in logical order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out: Vec<Option<T>> = std::iter::repeat_with(|| None).take(self.len()).collect();
        let mut cursor = self.head.take();
        while let Some(key) = cursor {
            let node = self.arena.remove(key);
            cursor = node.next;
            out[node.slot] = Some(node.value);
        }
        out.into_iter().flatten().collect()
    }

    // Store `value` as the new physical head and append it to `slots`.
    // Returns the slot it landed in, which is always the last one.
    fn link_head(&mut self, value: T) -> usize {
        let slot = self.len();
        let key = self.arena.insert(Node::new(value, self.head, slot));
        self.head = Some(key);
        self.slots.push(key);
        slot
    }

    // Single place where a slot and its node's back-pointer are written.
    #[inline]
    fn assign_slot(&mut self, slot: usize, key: NodeKey) {
        self.slots[slot] = key;
        self.arena[key].slot = slot;
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        let (key_a, key_b) = (self.slots[a], self.slots[b]);
        self.assign_slot(a, key_b);
        self.assign_slot(b, key_a);
    }

    pub(crate) fn head_key(&self) -> Option<NodeKey> {
        self.head
    }

    pub(crate) fn slot_keys(&self) -> &[NodeKey] {
        &self.slots
    }

    pub(crate) fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }

    #[cfg(test)]
    pub(crate) fn raw_parts_mut(
        &mut self,
    ) -> (&mut Option<NodeKey>, &mut Vec<NodeKey>, &mut NodeArena<T>) {
        (&mut self.head, &mut self.slots, &mut self.arena)
    }
}

impl<T: Clone> IndexedList<T> {
    /// Copy of the values in logical order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T> Index<usize> for IndexedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for IndexedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for IndexedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Logical-order iterator, see [`IndexedList::iter`].
pub struct Iter<'a, T> {
    keys: std::slice::Iter<'a, NodeKey>,
    arena: &'a NodeArena<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let key = *self.keys.next()?;
        let arena = self.arena;
        Some(&arena[key].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next_back()?;
        let arena = self.arena;
        Some(&arena[key].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Physical-order iterator, see [`IndexedList::chain`].
pub struct Chain<'a, T> {
    cursor: Option<NodeKey>,
    remaining: usize,
    arena: &'a NodeArena<T>,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        let node = &arena[self.cursor?];
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Chain<'_, T> {}
