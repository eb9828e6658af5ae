//! Singly linked list with an auxiliary slot index.
//!
//! This crate provides [`IndexedList`], a singly linked list where `get`,
//! `insert_at` and `remove_at` by logical position all run in O(1). A plain
//! linked list needs an O(i) walk for each of those; here an array of node
//! handles (`slots`) gives direct access, and every mutation keeps that array
//! and the chain in sync with a constant number of swaps.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  arena.rs   │────▶│   list.rs    │────▶│  positional.rs   │
//! │ (NodeArena, │     │ (IndexedList │     │ (PositionalList  │
//! │  NodeKey)   │     │  get/insert/ │     │  trait)          │
//! └─────────────┘     │  remove)     │     └──────────────────┘
//!                     └──────────────┘        ▲          │
//!                            │                │          ▼
//!                            ▼          ┌───────────┐ ┌───────────┐
//! ┌──────────────────────────────────┐  │baseline.rs│ │ timing.rs │
//! │            verify/               │  │(NaiveList)│ │  (sweep)  │
//! │  (validator, InvariantError,     │  └───────────┘ └───────────┘
//! │   debug-build contracts)         │
//! └──────────────────────────────────┘
//! ```
//!
//! # Position semantics
//!
//! Logical positions are not stable the way `Vec` positions are:
//!
//! | Call             | Effect on other positions                           |
//! |------------------|-----------------------------------------------------|
//! | `insert_at(i,v)` | old `x(i)` moves to the end; nothing else moves     |
//! | `remove_at(i)`   | old last element moves to `i`; nothing else moves   |
//!
//! In `Vec` terms: insertion is `push` + `swap(i, last)`, removal is
//! `swap_remove(i)`.
//!
//! # Usage
//!
//! ```
//! use slotchain::IndexedList;
//!
//! let mut list = IndexedList::new();
//! list.insert_at(0, "a").unwrap();
//! list.insert_at(1, "b").unwrap();
//! list.insert_at(1, "c").unwrap();
//! assert_eq!(list.to_vec(), vec!["a", "c", "b"]);
//!
//! assert_eq!(list.remove_at(0).unwrap(), "a");
//! assert_eq!(list.to_vec(), vec!["b", "c"]);
//! assert!(list.get(2).is_err());
//! ```

// Module declarations
mod arena;
pub mod baseline;
mod error;
mod list;
mod positional;
pub mod testing;
pub mod timing;
pub mod verify;

// Re-exports for public API
pub use baseline::NaiveList;
pub use error::{IndexError, Op};
pub use list::{Chain, IndexedList, Iter};
pub use positional::PositionalList;
pub use timing::{OpTimings, SizeRange, TimingConfig, TimingError, TimingReport, TimingRow};
pub use verify::InvariantError;
