// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full structural check of an [`IndexedList`].

use std::collections::HashSet;

use super::InvariantError;
use crate::list::IndexedList;

/// Check every invariant, returning the first violation found.
///
/// Order matters: counts first, then slot back-pointers, then the chain. Once
/// the back-pointers are known to be exact, "is this chain node in `slots`?"
/// reduces to `slots[node.slot] == key`.
pub(crate) fn validate<T>(list: &IndexedList<T>) -> Result<(), InvariantError> {
    let slots = list.slot_keys();
    let arena = list.arena();

    if slots.len() != arena.len() {
        return Err(InvariantError::LengthMismatch {
            slots: slots.len(),
            nodes: arena.len(),
        });
    }

    match (slots.is_empty(), list.head_key()) {
        (true, Some(_)) => return Err(InvariantError::HeadOnEmpty),
        (false, None) => return Err(InvariantError::MissingHead { len: slots.len() }),
        _ => {}
    }

    for (slot, &key) in slots.iter().enumerate() {
        let node = arena.get(key).ok_or(InvariantError::DanglingKey {
            slot,
            key,
        })?;
        if node.slot != slot {
            return Err(InvariantError::SlotMismatch {
                slot,
                recorded: node.slot,
            });
        }
    }

    let mut seen = HashSet::with_capacity(slots.len());
    let mut cursor = list.head_key();
    let mut position = 0;
    while let Some(key) = cursor {
        let unknown = InvariantError::ChainUnknownNode {
            position,
            key,
        };
        let node = arena.get(key).ok_or_else(|| unknown.clone())?;
        if slots.get(node.slot) != Some(&key) {
            return Err(unknown);
        }
        if !seen.insert(key) {
            return Err(InvariantError::ChainCycle {
                position,
                key,
            });
        }
        cursor = node.next;
        position += 1;
    }

    if seen.len() != slots.len() {
        return Err(InvariantError::ChainMissingNode {
            reachable: seen.len(),
            expected: slots.len(),
        });
    }

    Ok(())
}
