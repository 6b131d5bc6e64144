//! Reference-style operations
//!
//! Operands arrive as [`Binding`]s, which cannot be null, so the null-handle
//! failure class does not exist here. That is checked by the compiler rather
//! than at runtime:
//!
//! ```compile_fail
//! use indirection::ops::{alias, Ptr};
//! use std::cell::Cell;
//!
//! let b = Cell::new(1);
//! let _ = alias::sum(Ptr::null(), &b);
//! ```
//!
//! ```compile_fail
//! use indirection::ops::alias;
//! use std::cell::Cell;
//!
//! let b = Cell::new(1);
//! let _ = alias::sum(None, &b);
//! ```
//!
//! Arithmetic and aliasing policy match [`indirect`](super::indirect) exactly.

use super::errors::OpError;
use super::handle::{same_storage, Binding};
use super::{checked_factorial, checked_sum, Operand, ACCUMULATE_SUM, FACTORIAL, SUM};

/// `a + b`
pub fn sum(a: Binding<'_>, b: Binding<'_>) -> Result<Operand, OpError> {
    checked_sum(a.get(), b.get(), SUM)
}

/// `result = a + b`, reading both operands before the write
pub fn accumulate_sum(
    a: Binding<'_>,
    b: Binding<'_>,
    result: Binding<'_>,
) -> Result<(), OpError> {
    let total = checked_sum(a.get(), b.get(), ACCUMULATE_SUM)?;
    result.set(total);
    Ok(())
}

/// Exchange `a` and `b`; a no-op when both are bound to the same storage
pub fn swap(a: Binding<'_>, b: Binding<'_>) {
    a.swap(b);
}

/// `result = n!`. Binding `n` and `result` to one location is rejected.
pub fn factorial(n: Binding<'_>, result: Binding<'_>) -> Result<(), OpError> {
    if same_storage(n, result) {
        return Err(OpError::AliasedOutput {
            operation: FACTORIAL,
            input: "n",
            output: "result",
        });
    }

    result.set(checked_factorial(n.get())?);
    Ok(())
}
