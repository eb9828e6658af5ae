// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the slot bookkeeping of `IndexedList`.
//!
//! This standalone crate restates the insert/remove algorithm over a
//! fixed-capacity node table (arrays instead of a growable arena) so the
//! model checker can explore every index sequence up to `CAP` elements.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Back-pointers**: the node at `slots[i]` records `i`
//! 2. **Chain**: walking `next` from the head visits each live node once
//! 3. **Insert**: `get(i)` returns the inserted value; the displaced value moves to the end
//! 4. **Remove**: returns `get(i)`; the logical view is a swap-remove of the old one

/// Node table capacity explored by the proofs.
pub const CAP: usize = 4;

/// Arrays-only restatement of the list: `slots` holds node numbers, every
/// node records its slot and its successor in the chain.
#[derive(Debug, Clone)]
pub struct SlotModel {
    len: usize,
    head: Option<usize>,
    slots: [usize; CAP],
    live: [bool; CAP],
    next: [Option<usize>; CAP],
    slot_of: [usize; CAP],
    value: [u32; CAP],
}

impl Default for SlotModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotModel {
    pub fn new() -> Self {
        Self {
            len: 0,
            head: None,
            slots: [0; CAP],
            live: [false; CAP],
            next: [None; CAP],
            slot_of: [0; CAP],
            value: [0; CAP],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        if index < self.len {
            Some(self.value[self.slots[index]])
        } else {
            None
        }
    }

    fn alloc(&self) -> Option<usize> {
        (0..CAP).find(|&n| !self.live[n])
    }

    fn assign(&mut self, slot: usize, node: usize) {
        self.slots[slot] = node;
        self.slot_of[node] = slot;
    }

    /// `false` when `index > len` or the table is full; nothing changes then.
    pub fn insert_at(&mut self, index: usize, value: u32) -> bool {
        if index > self.len {
            return false;
        }
        let Some(node) = self.alloc() else {
            return false;
        };
        let len = self.len;

        self.live[node] = true;
        self.value[node] = value;
        self.next[node] = self.head;
        self.head = Some(node);
        self.assign(len, node);
        self.len += 1;

        if index != len {
            let displaced = self.slots[index];
            self.assign(index, node);
            self.assign(len, displaced);
        }
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        let head = self.head?;
        let target = self.slots[index];

        if target != head {
            self.value.swap(target, head);
            let head_slot = self.slot_of[head];
            self.assign(head_slot, target);
        }

        let removed = self.value[head];
        self.live[head] = false;
        self.head = self.next[head];
        self.next[head] = None;

        let last = self.len - 1;
        if index != last {
            let moved = self.slots[last];
            self.assign(index, moved);
        }
        self.len -= 1;
        Some(removed)
    }

    /// Values in logical order; entries past `len()` are zero.
    pub fn view(&self) -> [u32; CAP] {
        let mut out = [0; CAP];
        for (i, slot) in out.iter_mut().enumerate().take(self.len) {
            *slot = self.value[self.slots[i]];
        }
        out
    }

    /// Full structural check: counts, back-pointers, chain coverage.
    pub fn well_formed(&self) -> bool {
        if self.len > CAP {
            return false;
        }
        let live = self.live.iter().filter(|&&l| l).count();
        if live != self.len || self.head.is_some() != (self.len > 0) {
            return false;
        }
        for i in 0..self.len {
            let node = self.slots[i];
            if !self.live[node] || self.slot_of[node] != i {
                return false;
            }
        }

        let mut seen = [false; CAP];
        let mut cursor = self.head;
        let mut steps = 0;
        while let Some(node) = cursor {
            if steps == CAP || !self.live[node] || seen[node] {
                return false;
            }
            seen[node] = true;
            steps += 1;
            cursor = self.next[node];
        }
        steps == self.len
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Build a list of symbolic length through symbolic insert positions.
    fn symbolic_list() -> SlotModel {
        let mut model = SlotModel::new();
        let count: usize = kani::any_where(|&n| n <= CAP);
        for _ in 0..count {
            let index: usize = kani::any_where(|&i| i <= model.len());
            let value: u32 = kani::any();
            kani::assume(model.insert_at(index, value));
        }
        model
    }

    /// Any reachable list is well formed.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_inserts_preserve_structure() {
        let model = symbolic_list();
        kani::assert(model.well_formed(), "insert sequence broke the structure");
    }

    /// Insert places the value at `index` and moves the old occupant to the end.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_relocation() {
        let mut model = symbolic_list();
        kani::assume(model.len() < CAP);
        let before = model.view();
        let len = model.len();
        let index: usize = kani::any_where(|&i| i <= len);
        let value: u32 = kani::any();

        kani::assert(model.insert_at(index, value), "in-range insert must succeed");
        kani::assert(model.get(index) == Some(value), "get(index) must return the value");
        if index < len {
            kani::assert(model.get(len) == Some(before[index]), "displaced value must be last");
        }
        for i in 0..len {
            if i != index {
                kani::assert(model.get(i) == Some(before[i]), "other positions must not move");
            }
        }
        kani::assert(model.well_formed(), "insert broke the structure");
    }

    /// Remove returns `get(index)` and behaves as a swap-remove.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_remove_is_swap_remove() {
        let mut model = symbolic_list();
        kani::assume(!model.is_empty());
        let before = model.view();
        let len = model.len();
        let index: usize = kani::any_where(|&i| i < len);

        let removed = model.remove_at(index);
        kani::assert(removed == Some(before[index]), "remove must return get(index)");
        kani::assert(model.len() == len - 1, "length must shrink by one");
        if index != len - 1 {
            kani::assert(model.get(index) == Some(before[len - 1]), "last must fill the gap");
        }
        kani::assert(model.well_formed(), "remove broke the structure");
    }

    /// Out-of-range calls change nothing.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_out_of_range_is_inert() {
        let mut model = symbolic_list();
        let before = model.view();
        let len = model.len();
        let index: usize = kani::any_where(|&i| i > len);

        kani::assert(!model.insert_at(index, kani::any()), "insert past len must fail");
        kani::assert(model.remove_at(index - 1).is_none(), "remove at len must fail");
        kani::assert(model.view() == before && model.len() == len, "failed calls mutated");
    }
}
