// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The positional contract shared by every list in the crate.
//!
//! Harness code (the timing sweep, the interactive menu, the benches) drives
//! lists through this trait so the indexed list and the naive baseline run the
//! exact same call sequence.

use crate::baseline::NaiveList;
use crate::error::IndexError;
use crate::list::IndexedList;

/// A sequence `x(0)..x(n-1)` addressed by position.
///
/// `get` and `remove_at` accept `[0, len)`, `insert_at` accepts `[0, len]`.
/// Out-of-range calls return [`IndexError`] and leave the list untouched.
/// Implementations differ in which *other* positions move on insert/remove.
pub trait PositionalList<T> {
    /// Short name for reports and logs.
    const NAME: &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&T, IndexError>;

    fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError>;

    fn remove_at(&mut self, index: usize) -> Result<T, IndexError>;
}

impl<T> PositionalList<T> for IndexedList<T> {
    const NAME: &'static str = "indexed";

    #[inline]
    fn len(&self) -> usize {
        IndexedList::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, IndexError> {
        IndexedList::get(self, index)
    }

    #[inline]
    fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        IndexedList::insert_at(self, index, value)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        IndexedList::remove_at(self, index)
    }
}

impl<T> PositionalList<T> for NaiveList<T> {
    const NAME: &'static str = "naive";

    #[inline]
    fn len(&self) -> usize {
        NaiveList::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, IndexError> {
        NaiveList::get(self, index)
    }

    #[inline]
    fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        NaiveList::insert_at(self, index, value)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        NaiveList::remove_at(self, index)
    }
}
