//! Function frame holding the walkthrough's variables
//!
//! This module provides:
//! - [`StackFrame`]: one function's variables, in declaration order
//! - [`LocalVar`]: a named storage location with a virtual address
//! - [`Region`]: whether the storage lives on the stack or the heap
//!
//! # Handles
//!
//! A frame hands out `&Cell<Operand>` for its `int` variables. Any number of
//! those may be live at once, which is what lets a caller pass the same
//! variable as two arguments. Declaring a new variable needs `&mut self`, so
//! the borrow checker ends every outstanding handle before the frame can grow.
//!
//! # Error Handling
//!
//! Methods return `Result<_, String>`; the walkthrough wraps these into its
//! own error type at the scenario boundary.

use super::constants::{HEAP_ADDRESS_START, OPERAND_SIZE, POINTER_SIZE, STACK_ADDRESS_START};
use super::value::{Address, Value};
use crate::ops::{Operand, Ptr};
use rustc_hash::FxHashMap;
use std::cell::Cell;

/// Where a variable's storage lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Stack,
    Heap,
}

#[derive(Debug)]
enum Storage {
    Operand(Cell<Operand>),
    Pointer(Option<Address>),
    Alias(usize), // Index of the referent
}

/// A variable in a frame
#[derive(Debug)]
pub struct LocalVar {
    pub name: String,
    pub address: Address,
    pub region: Region,
    storage: Storage,
}

/// Read-out of one variable for snapshots and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarView {
    pub name: String,
    pub address: Address,
    pub region: Region,
    pub value: Value,
}

/// Stack frame for one walkthrough function
#[derive(Debug)]
pub struct StackFrame {
    pub function_name: String,
    vars: Vec<LocalVar>,
    by_name: FxHashMap<String, usize>,
    by_address: FxHashMap<Address, usize>,
    next_stack_address: Address,
    next_heap_address: Address,
}

impl StackFrame {
    pub fn new(function_name: impl Into<String>) -> Self {
        StackFrame {
            function_name: function_name.into(),
            vars: Vec::new(),
            by_name: FxHashMap::default(),
            by_address: FxHashMap::default(),
            next_stack_address: STACK_ADDRESS_START,
            next_heap_address: HEAP_ADDRESS_START,
        }
    }

    /// Declare `int name = value` on the stack
    pub fn declare_int(&mut self, name: &str, value: Operand) -> Result<Address, String> {
        self.insert(name, Region::Stack, OPERAND_SIZE, Storage::Operand(Cell::new(value)))
    }

    /// Allocate an `int` on the heap (`new int{value}`), labelled `name`
    pub fn allocate_int(&mut self, name: &str, value: Operand) -> Result<Address, String> {
        self.insert(name, Region::Heap, OPERAND_SIZE, Storage::Operand(Cell::new(value)))
    }

    /// Declare `int* name = &target`, or `= nullptr` when `target` is `None`
    pub fn declare_pointer(&mut self, name: &str, target: Option<&str>) -> Result<Address, String> {
        let pointee = match target {
            Some(target) => Some(self.vars[self.resolve_int(target)?].address),
            None => None,
        };
        self.insert(name, Region::Stack, POINTER_SIZE, Storage::Pointer(pointee))
    }

    /// Bind `int& name = referent`. References take no storage of their own and
    /// report the referent's address.
    pub fn bind_reference(&mut self, name: &str, referent: &str) -> Result<Address, String> {
        let index = self.resolve_int(referent)?;
        let target = &self.vars[index];
        let address = target.address;
        let region = target.region;
        self.check_undeclared(name)?;
        self.by_name.insert(name.to_string(), self.vars.len());
        self.vars.push(LocalVar {
            name: name.to_string(),
            address,
            region,
            storage: Storage::Alias(index),
        });
        Ok(address)
    }

    /// The storage an `int` variable or reference names
    pub fn cell(&self, name: &str) -> Option<&Cell<Operand>> {
        let index = self.resolve(name).ok()?;
        match &self.vars[index].storage {
            Storage::Operand(cell) => Some(cell),
            _ => None,
        }
    }

    /// The handle a pointer variable holds. A null pointer, or a name that is
    /// not a pointer, yields [`Ptr::null`].
    pub fn ptr(&self, name: &str) -> Ptr<'_> {
        let pointee = self
            .by_name
            .get(name)
            .and_then(|&index| match self.vars[index].storage {
                Storage::Pointer(Some(address)) => self.cell_at(address),
                _ => None,
            });
        Ptr::from(pointee)
    }

    /// Storage at a virtual address, if an `int` lives there
    pub fn cell_at(&self, address: Address) -> Option<&Cell<Operand>> {
        let index = *self.by_address.get(&address)?;
        match &self.vars[index].storage {
            Storage::Operand(cell) => Some(cell),
            _ => None,
        }
    }

    /// Virtual address of `name` (`&name`)
    pub fn address_of(&self, name: &str) -> Option<Address> {
        self.by_name.get(name).map(|&index| self.vars[index].address)
    }

    /// Current value of an `int` variable or reference
    pub fn read(&self, name: &str) -> Option<Operand> {
        self.cell(name).map(Cell::get)
    }

    /// Read out every variable in declaration order
    pub fn view(&self) -> Vec<VarView> {
        self.vars
            .iter()
            .map(|var| VarView {
                name: var.name.clone(),
                address: var.address,
                region: var.region,
                value: self.value_of(var),
            })
            .collect()
    }

    fn value_of(&self, var: &LocalVar) -> Value {
        match &var.storage {
            Storage::Operand(cell) => Value::Int(cell.get()),
            Storage::Pointer(Some(address)) => Value::Pointer(*address),
            Storage::Pointer(None) => Value::Null,
            Storage::Alias(index) => {
                let referent = &self.vars[*index];
                Value::Alias {
                    referent: referent.name.clone(),
                    value: self.value_of(referent).as_int().unwrap_or_default(),
                }
            }
        }
    }

    /// Index of the variable holding `name`'s storage, following references
    fn resolve(&self, name: &str) -> Result<usize, String> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| format!("Undefined variable '{}'", name))?;
        match self.vars[index].storage {
            Storage::Alias(target) => Ok(target),
            _ => Ok(index),
        }
    }

    /// Like [`resolve`](Self::resolve), but the storage must be an `int`
    fn resolve_int(&self, name: &str) -> Result<usize, String> {
        let index = self.resolve(name)?;
        match self.vars[index].storage {
            Storage::Operand(_) => Ok(index),
            _ => Err(format!("'{}' is not an int", name)),
        }
    }

    fn check_undeclared(&self, name: &str) -> Result<(), String> {
        if self.by_name.contains_key(name) {
            return Err(format!("'{}' is already declared", name));
        }
        Ok(())
    }

    /// Reserve `size` bytes in `region` and add the variable there. Nothing is
    /// reserved when `name` is already taken.
    fn insert(
        &mut self,
        name: &str,
        region: Region,
        size: u64,
        storage: Storage,
    ) -> Result<Address, String> {
        self.check_undeclared(name)?;
        let next = match region {
            Region::Stack => &mut self.next_stack_address,
            Region::Heap => &mut self.next_heap_address,
        };
        let address = *next;
        *next += size;
        let index = self.vars.len();
        self.by_name.insert(name.to_string(), index);
        self.by_address.insert(address, index);
        self.vars.push(LocalVar {
            name: name.to_string(),
            address,
            region,
            storage,
        });
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_addresses_follow_type_sizes() {
        let mut frame = StackFrame::new("f");
        assert_eq!(frame.declare_int("x", 1), Ok(0x4));
        assert_eq!(frame.declare_pointer("p", Some("x")), Ok(0x8));
        assert_eq!(frame.declare_int("y", 2), Ok(0x10));
        assert_eq!(frame.allocate_int("new int", 0), Ok(HEAP_ADDRESS_START));
    }

    #[test]
    fn reference_shares_referent_storage() {
        let mut frame = StackFrame::new("f");
        frame.declare_int("x", 10).unwrap();
        assert_eq!(frame.bind_reference("r", "x"), Ok(0x4));

        let x = frame.cell("x").unwrap();
        let r = frame.cell("r").unwrap();
        assert!(std::ptr::eq(x, r));

        r.set(22);
        assert_eq!(frame.read("x"), Some(22));
        assert_eq!(
            frame.view()[1].value,
            Value::Alias {
                referent: "x".to_string(),
                value: 22
            }
        );
    }

    #[test]
    fn pointer_variable_yields_handle_to_target() {
        let mut frame = StackFrame::new("f");
        frame.declare_int("x", 5).unwrap();
        frame.declare_pointer("p", Some("x")).unwrap();
        frame.declare_pointer("q", None).unwrap();

        assert_eq!(frame.ptr("p"), Ptr::to(frame.cell("x").unwrap()));
        assert!(frame.ptr("q").is_null());
        assert!(frame.ptr("missing").is_null());
        assert_eq!(frame.view()[2].value, Value::Null);
    }

    #[test]
    fn redeclaration_and_unknown_names_are_rejected() {
        let mut frame = StackFrame::new("f");
        frame.declare_int("x", 1).unwrap();
        assert!(frame.declare_int("x", 2).is_err());
        assert!(frame.declare_pointer("p", Some("nope")).is_err());
        assert!(frame.bind_reference("r", "nope").is_err());

        frame.declare_pointer("p", Some("x")).unwrap();
        assert_eq!(
            frame.bind_reference("r", "p"),
            Err("'p' is not an int".to_string())
        );
        assert_eq!(
            frame.declare_pointer("q", Some("p")),
            Err("'p' is not an int".to_string())
        );
        assert_eq!(frame.address_of("r"), None);
        assert_eq!(frame.view().len(), 2);
    }

    #[test]
    fn rejected_declaration_reserves_no_address() {
        let mut frame = StackFrame::new("f");
        assert_eq!(frame.declare_int("x", 1), Ok(0x4));
        assert!(frame.declare_int("x", 2).is_err());
        assert!(frame.declare_pointer("x", None).is_err());
        assert_eq!(frame.declare_int("y", 3), Ok(0x8));

        assert_eq!(frame.allocate_int("h", 0), Ok(HEAP_ADDRESS_START));
        assert!(frame.allocate_int("h", 1).is_err());
        assert_eq!(
            frame.allocate_int("g", 2),
            Ok(HEAP_ADDRESS_START + OPERAND_SIZE)
        );
        assert_eq!(frame.read("x"), Some(1));
    }
}
