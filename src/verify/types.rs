// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Error type for invariant violations found by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `slots` and the arena disagree on how many nodes are alive.
    LengthMismatch { slots: usize, nodes: usize },
    /// The list has elements but no head node.
    MissingHead { len: usize },
    /// The list is empty but still has a head node.
    HeadOnEmpty,
    /// `slots[slot]` holds a key with no live node behind it.
    DanglingKey { slot: usize, key: usize },
    /// The node at `slots[slot]` believes it lives at `recorded`.
    SlotMismatch { slot: usize, recorded: usize },
    /// The chain reaches a node that `slots` does not reference.
    ChainUnknownNode { position: usize, key: usize },
    /// The chain visits the same node twice.
    ChainCycle { position: usize, key: usize },
    /// The chain ends before visiting every node in `slots`.
    ChainMissingNode { reachable: usize, expected: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch { slots, nodes } => {
                write!(f, "slots.len() {} != live nodes {}", slots, nodes)
            }
            InvariantError::MissingHead { len } => {
                write!(f, "list of length {} has no head node", len)
            }
            InvariantError::HeadOnEmpty => write!(f, "empty list still has a head node"),
            InvariantError::DanglingKey { slot, key } => {
                write!(f, "slots[{}] refers to vacant node key {}", slot, key)
            }
            InvariantError::SlotMismatch { slot, recorded } => {
                write!(f, "node at slots[{}] records slot {}", slot, recorded)
            }
            InvariantError::ChainUnknownNode { position, key } => {
                write!(
                    f,
                    "chain position {} reaches node key {} which is not in slots",
                    position, key
                )
            }
            InvariantError::ChainCycle { position, key } => {
                write!(
                    f,
                    "chain revisits node key {} at position {}",
                    key, position
                )
            }
            InvariantError::ChainMissingNode {
                reachable,
                expected,
            } => {
                write!(
                    f,
                    "chain reaches {} nodes but slots holds {}",
                    reachable, expected
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}
