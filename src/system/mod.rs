//! Fixed-point driver for a collection of circuits.
//!
//! ## Iteration
//!
//! Each call to [`LogicSystem::iterate`] runs two phases over the registered
//! circuits, in registration order:
//!
//! 1. Compute: every circuit turns measured input values into output source
//!    values.
//! 2. Propagate: every circuit updates the measured values of its pins from
//!    their nets.
//!
//! Because gates only read measured values, an input change needs one
//! iteration to be measured and another for each gate it passes through.
//! A system is stable once an iteration reports no change. Some circuits,
//! like an SR latch released from its forbidden state, never get there;
//! `iterate` keeps reporting change forever and bounding the run is up to
//! the caller (or [`LogicSystem::settle`]).

mod logic_system;

pub use logic_system::{LogicSystem, SettleConfig};

use std::fmt;

/// Default iteration bound for [`LogicSystem::settle`].
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Identifier of a circuit registered in a [`LogicSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CircuitId(pub usize);

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
