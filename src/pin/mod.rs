//! Pins, wires and net resolution.
//!
//! A [`Pin`] is a shared handle to a voltage node. Circuits own the pins they
//! create, and the caller may hold extra handles to drive inputs or observe
//! outputs. Wires hold strong references in both directions, so a pin stays
//! alive for as long as anything on its net does. Two wired pins reference
//! each other and are never freed while the wire exists; call
//! [`Pin::disconnect`] to release a net that is no longer needed.

mod net;
mod types;

pub use net::{is_hi_current, resolve};
pub use types::{LogicValue, PinId, SourceValue};

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::{LogicError, Result};

/// A direct wire to another pin.
struct Wire {
    peer: PinId,
    pin: Rc<RefCell<PinState>>,
}

struct PinState {
    id: PinId,
    source: SourceValue,
    value: LogicValue,
    wires: Vec<Wire>,
}

/// Shared handle to a pin.
///
/// Cloning the handle does not create a new pin; all clones observe and
/// drive the same node. Equality and hashing follow [`PinId`].
///
/// A wired pin is kept alive by its peers, so dropping every handle to a
/// connected pin does not remove it from the net.
#[derive(Clone)]
pub struct Pin {
    inner: Rc<RefCell<PinState>>,
}

impl Pin {
    /// Create a pin driving the given source value.
    pub fn new(source: SourceValue) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PinState {
                id: PinId::next(),
                source,
                value: LogicValue::Indeterminate,
                wires: Vec::new(),
            })),
        }
    }

    /// Create a high-impedance pin, as used for inputs.
    pub fn input() -> Self {
        Self::new(SourceValue::Z)
    }

    /// Create a pin for a computed output.
    pub fn output() -> Self {
        Self::new(SourceValue::Indeterminate)
    }

    /// Get the pin identifier.
    pub fn id(&self) -> PinId {
        self.inner.borrow().id
    }

    /// Get the value this pin drives onto its net.
    pub fn source_value(&self) -> SourceValue {
        self.inner.borrow().source
    }

    /// Set the value this pin drives onto its net.
    ///
    /// The measured value is not touched until the next [`Pin::update`].
    pub fn set_source_value(&self, source: SourceValue) {
        self.inner.borrow_mut().source = source;
    }

    /// Get the measured value as of the last update.
    pub fn value(&self) -> LogicValue {
        self.inner.borrow().value
    }

    /// Returns true if the pin is driving against its net.
    pub fn hi_current(&self) -> bool {
        let state = self.inner.borrow();
        is_hi_current(state.source, state.value)
    }

    /// Wire this pin to another.
    ///
    /// Wiring an already-connected pair is a no-op. The wire keeps `other`
    /// alive until the pair is disconnected.
    pub fn connect(&self, other: &Pin) -> Result<()> {
        let (a, b) = (self.id(), other.id());
        if a == b {
            return Err(LogicError::SelfConnection { pin: a });
        }
        if self.is_connected_to(other) {
            trace!(%a, %b, "pins already connected");
            return Ok(());
        }

        self.inner.borrow_mut().wires.push(Wire {
            peer: b,
            pin: Rc::clone(&other.inner),
        });
        other.inner.borrow_mut().wires.push(Wire {
            peer: a,
            pin: Rc::clone(&self.inner),
        });

        debug!(%a, %b, "connected pins");
        Ok(())
    }

    /// Remove the wire between this pin and another.
    ///
    /// Both references held by the wire are released.
    pub fn disconnect(&self, other: &Pin) -> Result<()> {
        let (a, b) = (self.id(), other.id());
        if a == b {
            return Err(LogicError::SelfConnection { pin: a });
        }
        if !self.is_connected_to(other) {
            return Err(LogicError::not_connected(a, b));
        }

        self.inner.borrow_mut().wires.retain(|w| w.peer != b);
        other.inner.borrow_mut().wires.retain(|w| w.peer != a);

        debug!(%a, %b, "disconnected pins");
        Ok(())
    }

    /// Check for a direct wire to another pin.
    pub fn is_connected_to(&self, other: &Pin) -> bool {
        let peer = other.id();
        self.inner
            .borrow()
            .wires
            .iter()
            .any(|w| w.peer == peer)
    }

    /// Number of direct wires.
    pub fn connection_count(&self) -> usize {
        self.inner.borrow().wires.len()
    }

    /// All pins on this pin's net, including itself.
    ///
    /// The net is recomputed on every call, since wiring may change between
    /// iterations.
    pub fn parallel_pins(&self) -> Vec<Pin> {
        let mut visited = HashSet::new();
        visited.insert(self.id());

        let mut stack = vec![Rc::clone(&self.inner)];
        let mut net = Vec::new();

        while let Some(node) = stack.pop() {
            for wire in node.borrow().wires.iter() {
                if visited.insert(wire.peer) {
                    stack.push(Rc::clone(&wire.pin));
                }
            }
            net.push(Pin { inner: node });
        }

        net
    }

    /// Recompute the measured value from the current net.
    ///
    /// Returns true if the value changed.
    pub fn update(&self) -> bool {
        let resolved = resolve(self.parallel_pins().iter().map(Pin::source_value));

        let mut state = self.inner.borrow_mut();
        if state.value == resolved {
            return false;
        }

        trace!(pin = %state.id, from = %state.value, to = %resolved, "pin value changed");
        state.value = resolved;
        true
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self::input()
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Pin {}

impl Hash for Pin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Pin")
            .field("id", &state.id)
            .field("source", &state.source)
            .field("value", &state.value)
            .field("wires", &state.wires.len())
            .finish()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Update every pin and report whether any measured value changed.
///
/// Every pin is updated, even after a change has been seen.
pub fn propagate_voltages<'a, I>(pins: I) -> bool
where
    I: IntoIterator<Item = &'a Pin>,
{
    pins.into_iter().fold(false, |changed, pin| pin.update() | changed)
}
