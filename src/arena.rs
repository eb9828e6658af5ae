// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Node storage for the chain.
//!
//! Nodes live in a [`Slab`] and refer to each other by slab key rather than
//! by pointer. Keys of live nodes never move, and a removed node's key is
//! reused by a later insert, so both allocation and release are O(1).
//!
//! Comparing two keys is comparing node identity, which is what removal needs
//! when it asks "is the target the head?".

use slab::Slab;

/// Stable handle to a node: its slab key.
pub(crate) type NodeKey = usize;

/// Every node of one list.
pub(crate) type NodeArena<T> = Slab<Node<T>>;

/// One element of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// Next node in physical order; `None` ends the chain.
    pub(crate) next: Option<NodeKey>,
    /// Position of this node in the list's slot array.
    pub(crate) slot: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<NodeKey>, slot: usize) -> Self {
        Self { value, next, slot }
    }
}
