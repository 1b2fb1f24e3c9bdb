//! Two-input gates built from a boolean function.
//!
//! Indeterminate inputs are handled by enumeration: every boolean the unknown
//! inputs could take is tried, and the gate only drives a definite level when
//! all candidates agree. An AND with one input Low therefore reads Low no
//! matter what the other input does, while an XOR with any unknown input is
//! always Indeterminate.

use std::fmt;

use super::LogicCircuit;
use crate::pin::{LogicValue, Pin, SourceValue};

/// A two-input boolean function.
pub type BoolFn = fn(bool, bool) -> bool;

/// Every boolean an input could take.
fn candidates(value: LogicValue) -> &'static [bool] {
    match value.to_bool() {
        Some(true) => &[true],
        Some(false) => &[false],
        None => &[false, true],
    }
}

/// Compute the output drive of a two-input gate.
pub fn evaluate(function: BoolFn, a: LogicValue, b: LogicValue) -> SourceValue {
    let (a_values, b_values) = (candidates(a), candidates(b));
    let first = function(a_values[0], b_values[0]);

    let agree = a_values
        .iter()
        .all(|&x| b_values.iter().all(|&y| function(x, y) == first));

    if agree {
        SourceValue::from_bool(first)
    } else {
        SourceValue::Indeterminate
    }
}

fn and(a: bool, b: bool) -> bool {
    a && b
}

fn or(a: bool, b: bool) -> bool {
    a || b
}

fn xor(a: bool, b: bool) -> bool {
    a != b
}

fn nor(a: bool, b: bool) -> bool {
    !(a || b)
}

fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

/// Named two-input gate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Xor,
    Nor,
    Nand,
}

impl GateKind {
    /// Every gate kind.
    pub const ALL: [GateKind; 5] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Nor,
        GateKind::Nand,
    ];

    /// The boolean function this gate computes.
    pub fn function(self) -> BoolFn {
        match self {
            GateKind::And => and,
            GateKind::Or => or,
            GateKind::Xor => xor,
            GateKind::Nor => nor,
            GateKind::Nand => nand,
        }
    }

    /// Symbol used as the default gate name.
    pub fn symbol(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Nor => "NOR",
            GateKind::Nand => "NAND",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A gate with inputs A and B and one output.
#[derive(Debug)]
pub struct BinaryGate {
    pub name: String,
    function: BoolFn,
    /// [a, b, output]
    pins: [Pin; 3],
}

impl BinaryGate {
    /// Create a gate of a named kind.
    pub fn new(kind: GateKind) -> Self {
        Self::from_fn(kind.symbol(), kind.function())
    }

    /// Create a gate from an arbitrary two-input function.
    pub fn from_fn(name: impl Into<String>, function: BoolFn) -> Self {
        Self {
            name: name.into(),
            function,
            pins: [Pin::input(), Pin::input(), Pin::output()],
        }
    }

    pub fn and() -> Self {
        Self::new(GateKind::And)
    }

    pub fn or() -> Self {
        Self::new(GateKind::Or)
    }

    pub fn xor() -> Self {
        Self::new(GateKind::Xor)
    }

    pub fn nor() -> Self {
        Self::new(GateKind::Nor)
    }

    pub fn nand() -> Self {
        Self::new(GateKind::Nand)
    }

    /// Rename the gate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Input pin A.
    pub fn a(&self) -> &Pin {
        &self.pins[0]
    }

    /// Input pin B.
    pub fn b(&self) -> &Pin {
        &self.pins[1]
    }

    /// Output pin.
    pub fn output(&self) -> &Pin {
        &self.pins[2]
    }
}

impl LogicCircuit for BinaryGate {
    fn name(&self) -> &str {
        &self.name
    }

    fn pins(&self) -> &[Pin] {
        &self.pins
    }

    fn compute(&mut self) {
        let drive = evaluate(self.function, self.a().value(), self.b().value());
        self.output().set_source_value(drive);
    }
}
