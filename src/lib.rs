//! # Introduction
//!
//! `indirection` implements four numeric operations (sum, accumulating sum,
//! swap, factorial) twice, under two parameter-passing disciplines, and ships a
//! driver that records both side by side and replays them in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Layout
//!
//! ```text
//! ops ──► memory ──► snapshot ──► walkthrough ──► ui
//! ```
//!
//! 1. [`ops`]: [`ops::indirect`] takes nullable [`ops::Ptr`]
//!    handles, [`ops::alias`] takes non-null [`ops::Binding`]s. Same arithmetic,
//!    same errors, apart from the null case that only pointers can express.
//! 2. [`memory`]: a frame of named operand cells with virtual stack and heap
//!    addresses, pointer variables and reference bindings.
//! 3. [`snapshot`]: mock terminal and bounded snapshot history.
//! 4. [`walkthrough`]: the recorded scenarios and history navigation.
//! 5. [`config`]: command-line options for the binary.
//! 6. [`ui`]: ratatui step viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use indirection::ops::{alias, indirect, Ptr};
//! use std::cell::Cell;
//!
//! let (a, b, out) = (Cell::new(5), Cell::new(6), Cell::new(0));
//!
//! indirect::accumulate_sum(Ptr::to(&a), Ptr::to(&b), Ptr::to(&out)).unwrap();
//! assert_eq!(out.get(), 11);
//!
//! alias::factorial(&a, &out).unwrap();
//! assert_eq!(out.get(), 120);
//! ```

pub mod config;
pub mod memory;
pub mod ops;
pub mod snapshot;
pub mod ui;
pub mod walkthrough;
