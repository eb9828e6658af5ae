// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary positional call sequences.
//!
//! Indices are taken as-is, so out-of-range calls are exercised too. In-range
//! calls must agree with a `Vec` model; out-of-range calls must fail and leave
//! both views untouched. The structural validator runs after every call.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slotchain::testing::{model_insert, model_remove};
use slotchain::IndexedList;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Insert(u8, u16),
    Remove(u8),
    Get(u8),
    Set(u8, u16),
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut list = IndexedList::new();
    let mut model: Vec<u16> = Vec::new();

    for op in ops {
        let chain_before: Vec<u16> = list.chain().copied().collect();
        let len = model.len();

        let changed = match op {
            FuzzOp::Insert(raw, value) => {
                let index = raw as usize;
                let result = list.insert_at(index, value);
                if index <= len {
                    assert!(result.is_ok(), "insert_at({}) failed at len {}", index, len);
                    model_insert(&mut model, index, value);
                    assert_eq!(list.get(index), Ok(&value));
                    true
                } else {
                    assert!(result.is_err());
                    false
                }
            }
            FuzzOp::Remove(raw) => {
                let index = raw as usize;
                let result = list.remove_at(index);
                if index < len {
                    assert_eq!(result, Ok(model_remove(&mut model, index)));
                    true
                } else {
                    assert!(result.is_err());
                    false
                }
            }
            FuzzOp::Get(raw) => {
                let index = raw as usize;
                assert_eq!(list.get(index).ok(), model.get(index));
                false
            }
            FuzzOp::Set(raw, value) => {
                let index = raw as usize;
                match list.get_mut(index) {
                    Ok(slot) => {
                        *slot = value;
                        model[index] = value;
                        true
                    }
                    Err(_) => {
                        assert!(index >= len);
                        false
                    }
                }
            }
        };

        if !changed {
            let chain_after: Vec<u16> = list.chain().copied().collect();
            assert_eq!(chain_before, chain_after);
        }
        assert_eq!(list.to_vec(), model);
        if let Err(err) = list.check_invariants() {
            panic!("invariant violated: {}", err);
        }
    }
});
