// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one way a positional call can fail.
//!
//! Every bound check happens before the list is touched, so an `Err` always
//! means "nothing changed". Retrying with a corrected index is safe.

use std::fmt;

/// The positional operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Get,
    Insert,
    Remove,
}

impl Op {
    /// Name used in messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Get => "get",
            Op::Insert => "insert_at",
            Op::Remove => "remove_at",
        }
    }

    /// Exclusive upper bound for an index given the current length.
    ///
    /// Insertion accepts `len` itself (append), the others stop at `len - 1`.
    #[inline]
    pub fn bound(self, len: usize) -> usize {
        match self {
            Op::Insert => len + 1,
            Op::Get | Op::Remove => len,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `get`, `insert_at` and `remove_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// `index` is outside the valid range of `op` for a list of length `len`.
    OutOfRange { op: Op, index: usize, len: usize },
}

impl IndexError {
    /// Index that was rejected.
    pub fn index(&self) -> usize {
        match self {
            IndexError::OutOfRange { index, .. } => *index,
        }
    }

    /// Length of the list at the time of the call.
    pub fn list_len(&self) -> usize {
        match self {
            IndexError::OutOfRange { len, .. } => *len,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::OutOfRange { op, index, len } => match op {
                Op::Insert => write!(
                    f,
                    "{}: index {} out of range (valid: 0..={})",
                    op, index, len
                ),
                Op::Get | Op::Remove if *len == 0 => {
                    write!(f, "{}: index {} out of range (list is empty)", op, index)
                }
                Op::Get | Op::Remove => write!(
                    f,
                    "{}: index {} out of range (valid: 0..{})",
                    op, index, len
                ),
            },
        }
    }
}

impl std::error::Error for IndexError {}

/// Check `index` against the bound of `op`, before any mutation.
#[inline]
pub(crate) fn check_index(op: Op, index: usize, len: usize) -> Result<(), IndexError> {
    if index < op.bound(len) {
        Ok(())
    } else {
        Err(IndexError::OutOfRange { op, index, len })
    }
}
