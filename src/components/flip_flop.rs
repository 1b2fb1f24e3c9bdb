//! D flip-flop.

use super::LogicCircuit;
use crate::pin::Pin;

/// A D flip-flop shell.
///
/// Exposes D, Q and Clock pins but holds no state: `compute` leaves every
/// pin as it is, so Q floats unless something else on its net drives it.
#[derive(Debug)]
pub struct DFlipFlop {
    pub name: String,
    /// [d, q, clock]
    pins: [Pin; 3],
}

impl DFlipFlop {
    pub fn new() -> Self {
        Self {
            name: "DFF".to_string(),
            pins: [Pin::input(), Pin::input(), Pin::input()],
        }
    }

    /// Rename the flip-flop.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn d(&self) -> &Pin {
        &self.pins[0]
    }

    pub fn q(&self) -> &Pin {
        &self.pins[1]
    }

    pub fn clock(&self) -> &Pin {
        &self.pins[2]
    }
}

impl Default for DFlipFlop {
    fn default() -> Self {
        Self::new()
    }
}

impl LogicCircuit for DFlipFlop {
    fn name(&self) -> &str {
        &self.name
    }

    fn pins(&self) -> &[Pin] {
        &self.pins
    }

    fn compute(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{LogicValue, SourceValue};

    #[test]
    fn test_flip_flop_does_not_drive() {
        let mut ff = DFlipFlop::new();
        ff.d().set_source_value(SourceValue::Hi);
        ff.clock().set_source_value(SourceValue::Low);

        assert!(ff.propagate());
        ff.compute();
        ff.clock().set_source_value(SourceValue::Hi);
        ff.propagate();
        ff.compute();
        ff.propagate();

        assert_eq!(ff.q().source_value(), SourceValue::Z);
        assert_eq!(ff.q().value(), LogicValue::Indeterminate);
        assert_eq!(ff.d().value(), LogicValue::Hi);
        assert_eq!(ff.clock().value(), LogicValue::Hi);
    }
}
