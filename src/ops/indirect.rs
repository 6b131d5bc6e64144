//! Pointer-style operations
//!
//! Every operand and result arrives as a [`Ptr`] that the caller may have left
//! null. Null handles are checked in parameter order before anything is read,
//! so a failing call never writes.

use super::errors::OpError;
use super::handle::{same_storage, Ptr};
use super::{checked_factorial, checked_sum, Operand, ACCUMULATE_SUM, FACTORIAL, SUM, SWAP};

/// `*a + *b`
pub fn sum(a: Ptr<'_>, b: Ptr<'_>) -> Result<Operand, OpError> {
    let a = a.resolve(SUM, "a")?;
    let b = b.resolve(SUM, "b")?;
    checked_sum(a.get(), b.get(), SUM)
}

/// `*result = *a + *b`
///
/// `result` may point at `a` or `b`: both operands are read before the write.
pub fn accumulate_sum(a: Ptr<'_>, b: Ptr<'_>, result: Ptr<'_>) -> Result<(), OpError> {
    let a = a.resolve(ACCUMULATE_SUM, "a")?;
    let b = b.resolve(ACCUMULATE_SUM, "b")?;
    let result = result.resolve(ACCUMULATE_SUM, "result")?;

    let total = checked_sum(a.get(), b.get(), ACCUMULATE_SUM)?;
    result.set(total);
    Ok(())
}

/// Exchange `*a` and `*b`. Swapping a location with itself does nothing.
pub fn swap(a: Ptr<'_>, b: Ptr<'_>) -> Result<(), OpError> {
    let a = a.resolve(SWAP, "a")?;
    let b = b.resolve(SWAP, "b")?;
    a.swap(b);
    Ok(())
}

/// `*result = (*n)!`
///
/// `n` and `result` must not point at the same location; that call is
/// rejected with [`OpError::AliasedOutput`].
pub fn factorial(n: Ptr<'_>, result: Ptr<'_>) -> Result<(), OpError> {
    let n = n.resolve(FACTORIAL, "n")?;
    let result = result.resolve(FACTORIAL, "result")?;
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
