//! Handle kinds
//!
//! - [`Ptr`]: address-like handle, may be null, compared by location
//! - [`Binding`]: alias-like handle, a plain shared reference that is never null
//!
//! Both wrap [`Cell`] so that two handles received by the same call may denote
//! the same storage and still be written through.

use super::errors::OpError;
use super::Operand;
use std::cell::Cell;
use std::fmt;
use std::ptr;

/// Alias-like handle: bound to exactly one storage location for its lifetime
pub type Binding<'a> = &'a Cell<Operand>;

/// Address-like handle to an operand storage location
#[derive(Clone, Copy, Default)]
pub struct Ptr<'a> {
    target: Option<&'a Cell<Operand>>,
}

impl<'a> Ptr<'a> {
    /// The null handle
    pub const fn null() -> Self {
        Ptr { target: None }
    }

    /// Handle to `cell` (the `&x` of pointer style)
    pub const fn to(cell: &'a Cell<Operand>) -> Self {
        Ptr { target: Some(cell) }
    }

    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// Read through the handle; `None` when null
    pub fn load(&self) -> Option<Operand> {
        self.target.map(Cell::get)
    }

    /// Resolve the handle for `operation`, reporting a null one as `param`
    pub(crate) fn resolve(
        self,
        operation: &'static str,
        param: &'static str,
    ) -> Result<&'a Cell<Operand>, OpError> {
        self.target.ok_or(OpError::NullHandle { operation, param })
    }
}

impl<'a> From<&'a Cell<Operand>> for Ptr<'a> {
    fn from(cell: &'a Cell<Operand>) -> Self {
        Ptr::to(cell)
    }
}

impl<'a> From<Option<&'a Cell<Operand>>> for Ptr<'a> {
    fn from(target: Option<&'a Cell<Operand>>) -> Self {
        Ptr { target }
    }
}

impl PartialEq for Ptr<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.target, other.target) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for Ptr<'_> {}

impl fmt::Debug for Ptr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(cell) => write!(f, "Ptr({:p})", cell),
            None => write!(f, "Ptr(null)"),
        }
    }
}

/// Whether two bindings denote the same storage
#[inline]
pub(crate) fn same_storage(a: &Cell<Operand>, b: &Cell<Operand>) -> bool {
    ptr::eq(a, b)
}
