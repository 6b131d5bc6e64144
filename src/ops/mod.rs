//! Numeric operations under two parameter-passing disciplines
//!
//! - [`indirect`]: pointer style, operands arrive as nullable [`Ptr`] handles
//! - [`alias`]: reference style, operands arrive as non-null [`Binding`]s
//! - [`errors`]: the shared [`OpError`] taxonomy
//!
//! # Arithmetic
//!
//! Both components route through [`checked_sum`] and [`checked_factorial`], so the
//! only observable difference between them is the handle kind. Overflow is
//! signalled as [`OpError::ArithmeticOverflow`], never wrapped or saturated.
//!
//! # Aliasing
//!
//! | operation        | pair            | policy                      |
//! |------------------|-----------------|-----------------------------|
//! | `sum`            | a/b             | supported                   |
//! | `accumulate_sum` | any pair        | supported, read before write|
//! | `swap`           | a/b             | no-op                       |
//! | `factorial`      | n/result        | [`OpError::AliasedOutput`]  |
//!
//! Every operation either completes or leaves caller storage untouched.

pub mod alias;
pub mod errors;
pub mod handle;
pub mod indirect;

pub use errors::OpError;
pub use handle::{Binding, Ptr};

/// The fixed-width operand type
pub type Operand = i32;

pub(crate) const SUM: &str = "sum";
pub(crate) const ACCUMULATE_SUM: &str = "accumulate_sum";
pub(crate) const SWAP: &str = "swap";
pub(crate) const FACTORIAL: &str = "factorial";

/// `a + b`, reporting overflow against `operation`
#[inline]
pub(crate) fn checked_sum(
    a: Operand,
    b: Operand,
    operation: &'static str,
) -> Result<Operand, OpError> {
    a.checked_add(b).ok_or_else(|| OpError::ArithmeticOverflow {
        operation,
        detail: format!("{} + {}", a, b),
    })
}

/// Iterative `1 * 2 * ... * n`, with `0! = 1`
pub(crate) fn checked_factorial(n: Operand) -> Result<Operand, OpError> {
    if n < 0 {
        return Err(OpError::NegativeInput {
            operation: FACTORIAL,
            value: n,
        });
    }

    let mut product: Operand = 1;
    for i in 2..=n {
        product = product
            .checked_mul(i)
            .ok_or_else(|| OpError::ArithmeticOverflow {
                operation: FACTORIAL,
                detail: format!("{}! exceeds {}", n, Operand::MAX),
            })?;
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_values() {
        assert_eq!(checked_factorial(0), Ok(1));
        assert_eq!(checked_factorial(1), Ok(1));
        assert_eq!(checked_factorial(5), Ok(120));
        assert_eq!(checked_factorial(12), Ok(479_001_600));
    }

    #[test]
    fn factorial_rejects_negative_and_overflow() {
        assert!(matches!(
            checked_factorial(-3),
            Err(OpError::NegativeInput { value: -3, .. })
        ));
        assert!(matches!(
            checked_factorial(13),
            Err(OpError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn sum_overflow_names_operation() {
        let err = checked_sum(Operand::MAX, 1, ACCUMULATE_SUM).unwrap_err();
        assert_eq!(err.operation(), "accumulate_sum");
        assert_eq!(checked_sum(Operand::MIN, -1, SUM).unwrap_err().operation(), "sum");
    }
}
