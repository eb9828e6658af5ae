// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for filling a list and draining it from arbitrary positions.
//!
//! Every value that went in must come out exactly once, and the arena must
//! end up with no live nodes reachable from the head.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slotchain::IndexedList;

fuzz_target!(|input: (Vec<u32>, Vec<u16>)| {
    let (values, picks) = input;
    let mut list: IndexedList<u32> = IndexedList::new();
    for (i, &value) in values.iter().enumerate() {
        let at = picks.get(i).map_or(list.len(), |&p| p as usize % (list.len() + 1));
        list.insert_at(at, value).expect("index folded into range");
    }

    let mut drained = Vec::with_capacity(values.len());
    let mut picks = picks.iter().rev().cycle();
    while !list.is_empty() {
        let pick = picks.next().map_or(0, |&p| p as usize);
        drained.push(list.remove_at(pick % list.len()).expect("index folded into range"));
        if let Err(err) = list.check_invariants() {
            panic!("invariant violated: {}", err);
        }
    }

    assert!(list.chain().next().is_none());
    let mut expected = values;
    expected.sort_unstable();
    drained.sort_unstable();
    assert_eq!(drained, expected);
});
