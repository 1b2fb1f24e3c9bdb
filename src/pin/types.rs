//! Core value types for pins and nets.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_PIN_ID: AtomicUsize = AtomicUsize::new(0);

/// A process-unique identifier for a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub usize);

impl PinId {
    /// Allocate a fresh identifier.
    pub(crate) fn next() -> Self {
        PinId(NEXT_PIN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Measured logic level of a pin.
///
/// High impedance is never measured: a net with no drivers reads
/// [`LogicValue::Indeterminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicValue {
    /// Not known to be Hi or Low
    #[default]
    Indeterminate,
    /// Hi voltage, logic 1
    Hi,
    /// Low voltage, logic 0
    Low,
}

impl LogicValue {
    /// Map to a boolean, `None` when indeterminate.
    pub fn to_bool(self) -> Option<bool> {
        match self {
            LogicValue::Hi => Some(true),
            LogicValue::Low => Some(false),
            LogicValue::Indeterminate => None,
        }
    }

    /// Check if the value is Hi or Low.
    pub fn is_known(self) -> bool {
        self != LogicValue::Indeterminate
    }
}

impl From<SourceValue> for LogicValue {
    fn from(source: SourceValue) -> Self {
        match source {
            SourceValue::Hi => LogicValue::Hi,
            SourceValue::Low => LogicValue::Low,
            SourceValue::Indeterminate | SourceValue::Z => LogicValue::Indeterminate,
        }
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicValue::Indeterminate => write!(f, "Indeterminate"),
            LogicValue::Hi => write!(f, "Hi"),
            LogicValue::Low => write!(f, "Low"),
        }
    }
}

/// Value a pin drives onto its net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceValue {
    /// Driving, but not known to be Hi or Low
    Indeterminate,
    /// Driving Hi voltage
    Hi,
    /// Driving Low voltage
    Low,
    /// High impedance: not driving the net at all
    Z,
}

impl SourceValue {
    /// Drive level for a boolean result.
    pub fn from_bool(value: bool) -> Self {
        if value {
            SourceValue::Hi
        } else {
            SourceValue::Low
        }
    }

    /// Check if the pin contributes to its net's resolution.
    pub fn is_driving(self) -> bool {
        self != SourceValue::Z
    }
}

impl From<LogicValue> for SourceValue {
    fn from(value: LogicValue) -> Self {
        match value {
            LogicValue::Hi => SourceValue::Hi,
            LogicValue::Low => SourceValue::Low,
            LogicValue::Indeterminate => SourceValue::Indeterminate,
        }
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceValue::Indeterminate => write!(f, "Indeterminate"),
            SourceValue::Hi => write!(f, "Hi"),
            SourceValue::Low => write!(f, "Low"),
            SourceValue::Z => write!(f, "Z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_ids_are_unique() {
        let a = PinId::next();
        let b = PinId::next();
        assert_ne!(a, b);
        assert_eq!(PinId(12).to_string(), "P12");
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(LogicValue::from(SourceValue::Z), LogicValue::Indeterminate);
        assert_eq!(LogicValue::from(SourceValue::Low), LogicValue::Low);
        assert_eq!(SourceValue::from(LogicValue::Hi), SourceValue::Hi);
        assert_eq!(
            SourceValue::from(LogicValue::Indeterminate),
            SourceValue::Indeterminate
        );
        assert_eq!(LogicValue::Hi.to_bool(), Some(true));
        assert_eq!(LogicValue::Indeterminate.to_bool(), None);
        assert_eq!(LogicValue::default(), LogicValue::Indeterminate);
    }
}
