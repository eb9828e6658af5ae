// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a full validator and runtime contracts.
//!
//! Two complementary approaches to catching bookkeeping bugs:
//!
//! 1. **The validator** (`IndexedList::check_invariants`) walks the whole
//!    structure and reports the first broken invariant as an
//!    [`InvariantError`]. O(n), so tests call it, the hot path never does.
//!
//! 2. **Runtime contracts** that panic in debug builds when the O(1) local
//!    consequences of a mutation do not hold. Zero-cost in release, but catch
//!    a wrong slot write the moment it happens.
//!
//! Use both. The contracts pinpoint the call that broke things; the validator
//! proves nothing else drifted.

mod types;
mod validate;
pub mod contracts;

pub use types::InvariantError;
pub(crate) use validate::validate;
