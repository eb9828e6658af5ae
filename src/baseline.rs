// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A plain singly linked list, used as the comparison baseline.
//!
//! Same contract and errors as [`IndexedList`](crate::IndexedList), but every
//! positional call walks from the head, so `get`, `insert_at` and `remove_at`
//! are O(i). Logical order is physical order: inserting shifts every later
//! element by one, removing unlinks in place.

use std::fmt;

use crate::error::{check_index, IndexError, Op};

type Link<T> = Option<Box<NaiveNode<T>>>;

struct NaiveNode<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list without an index.
pub struct NaiveList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> NaiveList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        check_index(Op::Get, index, self.len)?;
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref());
        }
        match cursor {
            Some(node) => Ok(&node.value),
            None => unreachable!("chain shorter than len"),
        }
    }

    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        check_index(Op::Insert, index, self.len)?;
        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(NaiveNode { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        check_index(Op::Remove, index, self.len)?;
        let link = self.link_at(index);
        let Some(node) = link.take() else {
            unreachable!("chain shorter than len");
        };
        let NaiveNode { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.value)
    }

    // The link that currently points at position `index` (or the tail link
    // when `index == len`). Caller has checked the bound.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => unreachable!("chain shorter than len"),
            }
        }
        cursor
    }
}

impl<T> Default for NaiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the default recursive drop overflows the stack on long chains.
impl<T> Drop for NaiveList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NaiveList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for NaiveList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(NaiveNode { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}
