//! Error types for the logicnet simulator.
//!
//! The simulation core itself has no fallible steps: contention and
//! oscillation are domain states, not errors. [`LogicError`] covers wiring
//! misuse, circuit bookkeeping and the bounded settle driver.

use thiserror::Error;

use crate::pin::PinId;
use crate::system::CircuitId;

/// Result type alias using [`LogicError`].
pub type Result<T> = std::result::Result<T, LogicError>;

/// Unified error type for all logicnet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    // ============ Wiring Errors ============
    /// A pin was wired to (or unwired from) itself
    #[error("Pin {pin} cannot be connected to itself")]
    SelfConnection { pin: PinId },

    /// Disconnect requested for a pair that has no direct wire
    #[error("Pins {a} and {b} are not directly connected")]
    NotConnected { a: PinId, b: PinId },

    // ============ System Errors ============
    /// Circuit id not registered in the logic system
    #[error("Circuit {id} not found in logic system")]
    CircuitNotFound { id: CircuitId },

    /// The settle driver hit its iteration bound while values were still changing
    #[error("Logic system did not settle after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    /// Unknown scenario name
    #[error("Unknown scenario '{name}' (expected one of: {expected})")]
    UnknownScenario { name: String, expected: String },

    /// Invalid driver configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LogicError {
    /// Create a not-connected error
    pub fn not_connected(a: PinId, b: PinId) -> Self {
        Self::NotConnected { a, b }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize) -> Self {
        Self::ConvergenceFailure { iterations }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogicError::not_connected(PinId(3), PinId(7));
        assert_eq!(err.to_string(), "Pins P3 and P7 are not directly connected");

        let err = LogicError::convergence_failure(64);
        assert_eq!(
            err.to_string(),
            "Logic system did not settle after 64 iterations"
        );

        let err = LogicError::CircuitNotFound { id: CircuitId(2) };
        assert_eq!(err.to_string(), "Circuit #2 not found in logic system");
    }
}
