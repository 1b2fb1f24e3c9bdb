//! The logic system and its settle driver.

use tracing::{debug, warn};

use super::{CircuitId, DEFAULT_MAX_ITERATIONS};
use crate::components::LogicCircuit;
use crate::error::{LogicError, Result};

/// Configuration for [`LogicSystem::settle`].
#[derive(Debug, Clone)]
pub struct SettleConfig {
    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SettleConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

struct Entry {
    id: CircuitId,
    circuit: Box<dyn LogicCircuit>,
}

/// An ordered collection of interconnected circuits.
#[derive(Default)]
pub struct LogicSystem {
    circuits: Vec<Entry>,
    next_id: usize,
    iterations: usize,
}

impl LogicSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a circuit at the end of the evaluation order.
    pub fn add<C>(&mut self, circuit: C) -> CircuitId
    where
        C: LogicCircuit + 'static,
    {
        self.add_boxed(Box::new(circuit))
    }

    /// Register an already boxed circuit.
    pub fn add_boxed(&mut self, circuit: Box<dyn LogicCircuit>) -> CircuitId {
        let id = CircuitId(self.next_id);
        self.next_id += 1;
        debug!(%id, name = circuit.name(), "circuit added");
        self.circuits.push(Entry { id, circuit });
        id
    }

    /// Remove a circuit, handing it back to the caller.
    ///
    /// Its pins stay wired to the rest of the system for as long as the
    /// returned circuit (or another handle to them) is alive.
    pub fn remove(&mut self, id: CircuitId) -> Result<Box<dyn LogicCircuit>> {
        let idx = self
            .circuits
            .iter()
            .position(|e| e.id == id)
            .ok_or(LogicError::CircuitNotFound { id })?;
        let entry = self.circuits.remove(idx);
        debug!(%id, name = entry.circuit.name(), "circuit removed");
        Ok(entry.circuit)
    }

    /// Get a registered circuit.
    pub fn get(&self, id: CircuitId) -> Option<&dyn LogicCircuit> {
        self.circuits
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.circuit.as_ref())
    }

    /// Iterate circuits in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (CircuitId, &dyn LogicCircuit)> + '_ {
        self.circuits.iter().map(|e| (e.id, e.circuit.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    /// Remove every circuit.
    pub fn clear(&mut self) {
        self.circuits.clear();
    }

    /// Number of iterations run so far.
    pub fn iteration_count(&self) -> usize {
        self.iterations
    }

    /// Run one compute/propagate cycle.
    ///
    /// Returns true if any pin value changed, meaning the system has not
    /// reached a stable state yet.
    pub fn iterate(&mut self) -> bool {
        for entry in &mut self.circuits {
            entry.circuit.compute();
        }

        let mut changed = false;
        for entry in &mut self.circuits {
            changed |= entry.circuit.propagate();
        }

        self.iterations += 1;
        debug!(iteration = self.iterations, changed, "iteration complete");
        changed
    }

    /// Iterate until stable.
    ///
    /// Returns the number of iterations run, including the final one that
    /// reported no change.
    pub fn settle(&mut self, config: &SettleConfig) -> Result<usize> {
        if config.max_iterations == 0 {
            return Err(LogicError::invalid_config("max_iterations must be at least 1"));
        }

        for n in 1..=config.max_iterations {
            if !self.iterate() {
                debug!(iterations = n, "logic system settled");
                return Ok(n);
            }
        }

        warn!(
            iterations = config.max_iterations,
            "logic system still changing at iteration bound"
        );
        Err(LogicError::convergence_failure(config.max_iterations))
    }
}
