//! Single-input elements: inverter and buffer.

use super::LogicCircuit;
use crate::pin::{LogicValue, Pin, SourceValue};

/// An inverter.
#[derive(Debug)]
pub struct Not {
    pub name: String,
    /// [a, output]
    pins: [Pin; 2],
}

impl Not {
    pub fn new() -> Self {
        Self {
            name: "NOT".to_string(),
            pins: [Pin::input(), Pin::output()],
        }
    }

    /// Rename the gate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Input pin.
    pub fn a(&self) -> &Pin {
        &self.pins[0]
    }

    /// Output pin.
    pub fn output(&self) -> &Pin {
        &self.pins[1]
    }
}

impl Default for Not {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicCircuit for Not {
    fn name(&self) -> &str {
        &self.name
    }

    fn pins(&self) -> &[Pin] {
        &self.pins
    }

    fn compute(&mut self) {
        let drive = match self.a().value() {
            LogicValue::Hi => SourceValue::Low,
            LogicValue::Low => SourceValue::Hi,
            LogicValue::Indeterminate => SourceValue::Indeterminate,
        };
        self.output().set_source_value(drive);
    }
}

/// Drives its output with whatever its input measures.
///
/// Useful for isolating two nets: the output follows the input one step
/// later, but nothing driven on the output side reaches the input net.
#[derive(Debug)]
pub struct Buffer {
    pub name: String,
    /// [input, output]
    pins: [Pin; 2],
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            name: "BUF".to_string(),
            pins: [Pin::input(), Pin::output()],
        }
    }

    /// Rename the buffer.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn input(&self) -> &Pin {
        &self.pins[0]
    }

    pub fn output(&self) -> &Pin {
        &self.pins[1]
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicCircuit for Buffer {
    fn name(&self) -> &str {
        &self.name
    }

    fn pins(&self) -> &[Pin] {
        &self.pins
    }

    fn compute(&mut self) {
        let drive = SourceValue::from(self.input().value());
        self.output().set_source_value(drive);
    }
}
