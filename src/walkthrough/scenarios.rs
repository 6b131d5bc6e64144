//! The scenarios a walkthrough can record
//!
//! - [`Scenario::Pointer`]: the four operations through `int*` handles
//! - [`Scenario::Reference`]: the same inputs through `int&` bindings
//! - [`Scenario::Edge`]: null handles, negative input, overflow and aliasing,
//!   in both styles side by side
//!
//! Listing lines use C declarations so the frame view and the statements read
//! the same way.

use super::{Walkthrough, WalkthroughError};
use crate::memory::stack::StackFrame;
use crate::memory::value::Address;
use crate::ops::{alias, indirect, OpError, Operand, Ptr};
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Pointer,
    Reference,
    Edge,
}

impl Scenario {
    /// Every scenario, in the order they run by default
    pub const ALL: [Scenario; 3] = [Scenario::Pointer, Scenario::Reference, Scenario::Edge];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Pointer => "pointer",
            Scenario::Reference => "reference",
            Scenario::Edge => "edge",
        }
    }

    fn function_name(&self) -> &'static str {
        match self {
            Scenario::Pointer => "pointer_style",
            Scenario::Reference => "reference_style",
            Scenario::Edge => "edge_cases",
        }
    }

    pub(crate) fn record(&self, walk: &mut Walkthrough) -> Result<(), WalkthroughError> {
        let mut frame = StackFrame::new(self.function_name());
        walk.record(&format!("{}() {{", self.function_name()), &frame)?;
        match self {
            Scenario::Pointer => pointer_style(walk, &mut frame)?,
            Scenario::Reference => reference_style(walk, &mut frame)?,
            Scenario::Edge => edge_cases(walk, &mut frame)?,
        }
        walk.record("}", &frame)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pointer" => Ok(Scenario::Pointer),
            "reference" => Ok(Scenario::Reference),
            "edge" => Ok(Scenario::Edge),
            other => Err(format!("unknown scenario '{}'", other)),
        }
    }
}

fn memory(e: String) -> WalkthroughError {
    WalkthroughError::Memory(e)
}

fn hex(address: Address) -> String {
    format!("0x{:04x}", address)
}

/// Echo text for an operation that is expected to fail in the edge scenario
fn outcome<T: fmt::Display>(result: Result<T, OpError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {}", e),
    }
}

/// Look up a declared `int`. Only fails if the scenario itself is inconsistent.
fn cell<'f>(frame: &'f StackFrame, name: &str) -> Result<&'f Cell<Operand>, WalkthroughError> {
    frame
        .cell(name)
        .ok_or_else(|| memory(format!("'{}' is not an int in {}", name, frame.function_name)))
}

fn pointer_style(walk: &mut Walkthrough, frame: &mut StackFrame) -> Result<(), WalkthroughError> {
    frame.declare_int("aval", 5).map_err(memory)?;
    walk.record("    int aval = 5;", frame)?;
    frame.declare_int("bval", 6).map_err(memory)?;
    walk.record("    int bval = 6;", frame)?;
    frame.declare_pointer("a", Some("aval")).map_err(memory)?;
    walk.record("    int* a = &aval;", frame)?;
    frame.declare_pointer("b", Some("bval")).map_err(memory)?;
    walk.record("    int* b = &bval;", frame)?;
    frame.allocate_int("new int", 0).map_err(memory)?;
    frame.declare_pointer("result", Some("new int")).map_err(memory)?;
    walk.record("    int* result = new int{};", frame)?;

    let frame = &*frame;
    let (a, b, result) = (frame.ptr("a"), frame.ptr("b"), frame.ptr("result"));

    let total = indirect::sum(a, b)?;
    walk.record_echo("    print(sum(a, b));", frame, total.to_string())?;

    indirect::accumulate_sum(a, b, result)?;
    walk.record("    accumulate_sum(a, b, result);", frame)?;
    walk.record_echo("    print(*result);", frame, show(result))?;

    walk.record_echo("    print(*a, *b);", frame, format!("{} {}", show(a), show(b)))?;
    indirect::swap(a, b)?;
    walk.record("    swap(a, b);", frame)?;
    walk.record_echo("    print(*a, *b);", frame, format!("{} {}", show(a), show(b)))?;

    indirect::factorial(a, result)?;
    walk.record("    factorial(a, result);", frame)?;
    walk.record_echo("    print(*result);", frame, show(result))
}

fn reference_style(walk: &mut Walkthrough, frame: &mut StackFrame) -> Result<(), WalkthroughError> {
    frame.declare_int("a", 6).map_err(memory)?;
    walk.record("    int a = 6;", frame)?;
    frame.declare_int("b", 10).map_err(memory)?;
    walk.record("    int b = 10;", frame)?;
    frame.declare_int("answer", 0).map_err(memory)?;
    walk.record("    int answer{};", frame)?;
    let bound = frame.bind_reference("ref", "a").map_err(memory)?;
    walk.record("    int& ref = a;", frame)?;

    let frame = &*frame;
    let a_address = frame
        .address_of("a")
        .ok_or_else(|| memory("'a' has no address".to_string()))?;
    walk.record_echo(
        "    print(&a, &ref);",
        frame,
        format!("{} {}", hex(a_address), hex(bound)),
    )?;

    let (a, b, answer) = (cell(frame, "a")?, cell(frame, "b")?, cell(frame, "answer")?);

    alias::accumulate_sum(a, b, answer)?;
    walk.record("    accumulate_sum(a, b, answer);", frame)?;
    walk.record_echo("    print(answer);", frame, answer.get().to_string())?;

    alias::factorial(a, answer)?;
    walk.record("    factorial(a, answer);", frame)?;
    walk.record_echo("    print(answer);", frame, answer.get().to_string())?;

    walk.record_echo("    print(a, b);", frame, format!("{} {}", a.get(), b.get()))?;
    alias::swap(a, b);
    walk.record("    swap(a, b);", frame)?;
    walk.record_echo("    print(a, b);", frame, format!("{} {}", a.get(), b.get()))
}

fn edge_cases(walk: &mut Walkthrough, frame: &mut StackFrame) -> Result<(), WalkthroughError> {
    frame.declare_int("x", Operand::MAX).map_err(memory)?;
    walk.record(&format!("    int x = {};", Operand::MAX), frame)?;
    frame.declare_int("y", 1).map_err(memory)?;
    walk.record("    int y = 1;", frame)?;
    frame.declare_int("n", -1).map_err(memory)?;
    walk.record("    int n = -1;", frame)?;
    frame.declare_pointer("px", Some("x")).map_err(memory)?;
    walk.record("    int* px = &x;", frame)?;
    frame.declare_pointer("py", Some("y")).map_err(memory)?;
    walk.record("    int* py = &y;", frame)?;
    frame.declare_pointer("pn", Some("n")).map_err(memory)?;
    walk.record("    int* pn = &n;", frame)?;
    frame.declare_pointer("null", None).map_err(memory)?;
    walk.record("    int* null = nullptr;", frame)?;

    let frame = &*frame;
    let (px, py, pn, null) = (frame.ptr("px"), frame.ptr("py"), frame.ptr("pn"), frame.ptr("null"));
    let (x, y, n) = (cell(frame, "x")?, cell(frame, "y")?, cell(frame, "n")?);

    // Null handles only exist on the pointer side
    walk.record_echo("    print(sum(null, py));", frame, outcome(indirect::sum(null, py)))?;

    walk.record_echo("    print(sum(px, py));", frame, outcome(indirect::sum(px, py)))?;
    walk.record_echo("    print(sum(x, y));", frame, outcome(alias::sum(x, y)))?;

    walk.record_echo(
        "    factorial(pn, py);",
        frame,
        outcome(indirect::factorial(pn, py).map(|()| show(py))),
    )?;
    walk.record_echo(
        "    factorial(n, y);",
        frame,
        outcome(alias::factorial(n, y).map(|()| y.get())),
    )?;

    walk.record_echo(
        "    swap(px, px);",
        frame,
        outcome(indirect::swap(px, px).map(|()| show(px))),
    )?;
    alias::swap(x, x);
    walk.record_echo("    swap(x, x);", frame, x.get().to_string())?;

    walk.record_echo(
        "    accumulate_sum(py, py, py);",
        frame,
        outcome(indirect::accumulate_sum(py, py, py).map(|()| show(py))),
    )?;
    walk.record_echo(
        "    accumulate_sum(y, y, y);",
        frame,
        outcome(alias::accumulate_sum(y, y, y).map(|()| y.get())),
    )?;

    walk.record_echo(
        "    factorial(py, py);",
        frame,
        outcome(indirect::factorial(py, py).map(|()| show(py))),
    )?;
    walk.record_echo(
        "    factorial(y, y);",
        frame,
        outcome(alias::factorial(y, y).map(|()| y.get())),
    )
}

/// `*p` for echoing; null prints as `nullptr`
fn show(p: Ptr<'_>) -> String {
    p.load()
        .map_or_else(|| "nullptr".to_string(), |value| value.to_string())
}
