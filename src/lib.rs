//! # Logicnet Core
//!
//! A discrete-time digital logic simulator.
//!
//! This library provides:
//! - Pins wired into nets with three-valued resolution (Hi, Low,
//!   Indeterminate) and high-impedance sources
//! - Contention detection for pins driving against their net
//! - Gates, buffers and flip-flops that treat unknown inputs conservatively
//! - A caller-driven fixed-point loop that reproduces glitches and latch
//!   races instead of hiding them
//!
//! ## Architecture
//!
//! - [`pin`] - Pins, wires and net resolution
//! - [`components`] - The [`LogicCircuit`] capability and circuit elements
//! - [`system`] - The [`LogicSystem`] iteration driver
//! - [`scenarios`] - Reference circuits used by the CLI and tests
//!
//! ## Usage
//!
//! ```
//! use logicnet_core::{BinaryGate, LogicSystem, LogicValue, SourceValue};
//!
//! let nand = BinaryGate::nand();
//! let (a, b, out) = (nand.a().clone(), nand.b().clone(), nand.output().clone());
//!
//! let mut system = LogicSystem::new();
//! system.add(nand);
//!
//! a.set_source_value(SourceValue::Hi);
//! b.set_source_value(SourceValue::Low);
//! while system.iterate() {}
//!
//! assert_eq!(out.value(), LogicValue::Hi);
//! ```
//!
//! ## Simulation Method
//!
//! Every iteration has two phases:
//!
//! 1. Compute: each circuit sets the source values of its outputs from the
//!    measured values of its inputs
//! 2. Propagate: each pin re-resolves its net and caches the result
//!
//! Each gate therefore adds exactly one iteration of delay. There is no
//! built-in iteration bound on [`LogicSystem::iterate`]; use
//! [`LogicSystem::settle`] for a bounded run.

pub mod components;
pub mod error;
pub mod pin;
pub mod scenarios;
pub mod system;

// Re-export main types for convenience
pub use components::{BinaryGate, Buffer, DFlipFlop, GateKind, LogicCircuit, Not};
pub use error::{LogicError, Result};
pub use pin::{LogicValue, Pin, PinId, SourceValue};
pub use system::{CircuitId, LogicSystem, SettleConfig};
