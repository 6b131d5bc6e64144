//! Memory model for the walkthrough
//!
//! This module provides the storage that handles point into:
//! - [`value`]: read-out of a variable ([`value::Value`]) and the [`value::Address`] type
//! - [`stack`]: a function frame owning operand cells, pointer variables and references
//! - [`constants`]: start of the stack and heap address ranges and type sizes
//!
//! # Type Sizes
//!
//! Sizes are fixed and platform-independent:
//! - `int`: 4 bytes
//! - `int*`: 8 bytes
//! - `int&`: no storage; reports the referent's address
//!
//! Every variable is laid out back to back with no padding, so addresses in a
//! frame are deterministic across runs.

pub mod constants;
pub mod stack;
pub mod value;
