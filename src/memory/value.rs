//! Displayable values of frame variables
//!
//! Operands themselves live in [`Cell`](std::cell::Cell)s owned by the frame; a
//! [`Value`] is the read-out of one variable at snapshot time.
//!
//! - [`Value::Int`]: an `int` slot
//! - [`Value::Pointer`]: an `int*` holding an address
//! - [`Value::Null`]: an `int*` holding null
//! - [`Value::Alias`]: an `int&`, which has no storage of its own

use crate::ops::Operand;

/// Virtual memory address (64-bit)
pub type Address = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(Operand),
    Pointer(Address),
    Null,
    Alias { referent: String, value: Operand },
}

impl Value {
    /// Get the integer value, following aliases; `None` for pointers
    pub fn as_int(&self) -> Option<Operand> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Alias { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Declared type as it would be written in the listing
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Pointer(_) | Value::Null => "int*",
            Value::Alias { .. } => "int&",
        }
    }
}
