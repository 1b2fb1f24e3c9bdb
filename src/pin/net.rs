//! Net resolution rules.
//!
//! A net is every pin reachable through direct wires. All of its members
//! observe the same measured value, derived from the source values they
//! drive:
//!
//! 1. High-impedance (`Z`) sources are ignored.
//! 2. A net with no remaining drivers floats and reads `Indeterminate`.
//! 3. If every driver agrees, the net reads that value.
//! 4. Disagreeing drivers are in contention and the net reads `Indeterminate`.

use super::types::{LogicValue, SourceValue};

/// Resolve the measured value of a net from the source values on it.
pub fn resolve<I>(sources: I) -> LogicValue
where
    I: IntoIterator<Item = SourceValue>,
{
    let mut drivers = sources.into_iter().filter(|s| s.is_driving());

    let first = match drivers.next() {
        Some(first) => first,
        None => return LogicValue::Indeterminate,
    };

    if drivers.all(|s| s == first) {
        LogicValue::from(first)
    } else {
        LogicValue::Indeterminate
    }
}

/// Check whether a driver is fighting its net.
///
/// True when the pin drives the opposite level of what the net reads, or
/// when it drives anything at all onto a net that resolved to
/// `Indeterminate`.
pub fn is_hi_current(source: SourceValue, value: LogicValue) -> bool {
    match (source, value) {
        (SourceValue::Z, _) => false,
        (SourceValue::Hi, LogicValue::Low) | (SourceValue::Low, LogicValue::Hi) => true,
        (_, LogicValue::Indeterminate) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::pin::SourceValue::{Hi, Low, Z};

    #[test]
    fn test_floating_net() {
        assert_eq!(resolve(Vec::<SourceValue>::new()), LogicValue::Indeterminate);
        assert_eq!(resolve([Z, Z, Z]), LogicValue::Indeterminate);
    }

    #[test]
    fn test_agreeing_drivers() {
        assert_eq!(resolve([Z, Hi, Z, Hi]), LogicValue::Hi);
        assert_eq!(resolve([Low]), LogicValue::Low);
        assert_eq!(
            resolve([SourceValue::Indeterminate, Z]),
            LogicValue::Indeterminate
        );
    }

    #[test]
    fn test_contention() {
        assert_eq!(resolve([Hi, Hi, Hi, Low]), LogicValue::Indeterminate);
        assert_eq!(
            resolve([Hi, SourceValue::Indeterminate]),
            LogicValue::Indeterminate
        );
    }

    #[test]
    fn test_hi_current() {
        assert!(is_hi_current(Hi, LogicValue::Low));
        assert!(is_hi_current(Low, LogicValue::Hi));
        assert!(is_hi_current(Low, LogicValue::Indeterminate));
        assert!(is_hi_current(SourceValue::Indeterminate, LogicValue::Indeterminate));
        assert!(!is_hi_current(Hi, LogicValue::Hi));
        assert!(!is_hi_current(Z, LogicValue::Indeterminate));
        assert!(!is_hi_current(Z, LogicValue::Hi));
    }

    fn source_value() -> impl Strategy<Value = SourceValue> {
        prop_oneof![
            Just(SourceValue::Indeterminate),
            Just(Hi),
            Just(Low),
            Just(Z),
        ]
    }

    proptest! {
        #[test]
        fn prop_resolution_ignores_order(mut sources in prop::collection::vec(source_value(), 0..12)) {
            let forward = resolve(sources.iter().copied());
            sources.reverse();
            prop_assert_eq!(forward, resolve(sources.iter().copied()));
        }

        #[test]
        fn prop_z_never_affects_resolution(
            sources in prop::collection::vec(source_value(), 0..12),
            extra in 0usize..5,
        ) {
            let base = resolve(sources.iter().copied());
            let padded = sources.iter().copied().chain(std::iter::repeat(Z).take(extra));
            prop_assert_eq!(base, resolve(padded));
        }
    }
}
