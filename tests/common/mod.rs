//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test utilities from slotchain::testing
pub use slotchain::testing::{assert_well_formed, head_filled, list_of, model_insert, model_remove};

/// One positional call. Indices are raw; the runner folds them into range.
#[derive(Debug, Clone)]
pub enum Op {
    Insert(usize, u32),
    Remove(usize),
    Get(usize),
}

/// Random operation sequences, insert-heavy so lists actually grow.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => any::<usize>().prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..max_len)
}

/// Fold a raw index into `[0, bound)`. `bound` must be non-zero.
pub fn fold(raw: usize, bound: usize) -> usize {
    raw % bound
}
