//! Circuit elements.
//!
//! This module provides the [`LogicCircuit`] capability and the elements
//! that implement it:
//! - Combinational: [`BinaryGate`] (AND, OR, XOR, NOR, NAND), [`Not`], [`Buffer`]
//! - Sequential: [`DFlipFlop`]
//!
//! Each element reads the measured values of its input pins in
//! [`LogicCircuit::compute`] and drives its output pins' source values. The
//! measured values only move in [`LogicCircuit::propagate`], which is what
//! gives every element one step of delay.

mod binary;
mod flip_flop;
mod unary;

pub use binary::{evaluate, BinaryGate, BoolFn, GateKind};
pub use flip_flop::DFlipFlop;
pub use unary::{Buffer, Not};

pub use crate::pin::propagate_voltages;
use crate::pin::Pin;

/// An element with pins that computes outputs from measured inputs.
pub trait LogicCircuit {
    /// Name used in logs and traces.
    fn name(&self) -> &str;

    /// All pins owned by this circuit.
    fn pins(&self) -> &[Pin];

    /// Compute output source values from measured input values.
    ///
    /// Must only write source values of this circuit's own pins.
    fn compute(&mut self);

    /// Update the measured value of every owned pin.
    ///
    /// Returns true if any pin changed. Must not touch source values.
    fn propagate(&mut self) -> bool {
        propagate_voltages(self.pins())
    }
}
