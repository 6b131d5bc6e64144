//! Error types for the indirect and alias operations
//!
//! [`OpError`] covers every failure either component can report. All of them are
//! local and recoverable: an operation that returns an error has left every
//! caller-supplied storage location exactly as it found it.

use super::Operand;
use std::fmt;

/// Errors reported by [`indirect`](super::indirect) and [`alias`](super::alias) operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// A required address-like handle was null. Only produced by `indirect`.
    NullHandle {
        operation: &'static str,
        param: &'static str,
    },

    /// `factorial` was asked for a negative operand
    NegativeInput {
        operation: &'static str,
        value: Operand,
    },

    /// Checked arithmetic left the range of [`Operand`]
    ArithmeticOverflow {
        operation: &'static str,
        detail: String,
    },

    /// An input and an output parameter denote the same storage where the
    /// operation forbids it
    AliasedOutput {
        operation: &'static str,
        input: &'static str,
        output: &'static str,
    },
}

impl OpError {
    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            OpError::NullHandle { operation, .. } => operation,
            OpError::NegativeInput { operation, .. } => operation,
            OpError::ArithmeticOverflow { operation, .. } => operation,
            OpError::AliasedOutput { operation, .. } => operation,
        }
    }
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::NullHandle { operation, param } => {
                write!(f, "Null handle passed as '{}' to {}", param, operation)
            }
            OpError::NegativeInput { operation, value } => {
                write!(
                    f,
                    "Negative input {} to {} (operand must be >= 0)",
                    value, operation
                )
            }
            OpError::ArithmeticOverflow { operation, detail } => {
                write!(f, "Integer overflow in {}: {}", operation, detail)
            }
            OpError::AliasedOutput {
                operation,
                input,
                output,
            } => {
                write!(
                    f,
                    "Output '{}' aliases input '{}' in {}",
                    output, input, operation
                )
            }
        }
    }
}

impl std::error::Error for OpError {}
