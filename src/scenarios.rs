//! Reference circuits.
//!
//! Small, fully wired systems that exercise the parts of the simulator that
//! are easy to get subtly wrong: gate delay producing a glitch pulse, and a
//! cross-coupled latch that oscillates when released from its forbidden
//! state. The CLI runs these by name.

use std::fmt;
use std::str::FromStr;

use crate::components::{BinaryGate, Not};
use crate::error::{LogicError, Result};
use crate::pin::{LogicValue, Pin, SourceValue};
use crate::system::{LogicSystem, SettleConfig};

/// Rising-edge detector.
///
/// ```text
/// A --+--------------| AND |--- out
///     +--- NOT ------|     |
/// ```
///
/// The inverter's delay makes both AND inputs Hi for one iteration after
/// A rises, giving a single Hi pulse on the output.
pub struct EdgeDetector {
    pub system: LogicSystem,
    /// AND input A, driven directly by the caller.
    pub input: Pin,
    pub output: Pin,
}

impl EdgeDetector {
    pub fn build() -> Result<Self> {
        let and = BinaryGate::and();
        let not = Not::new();

        and.a().connect(not.a())?;
        not.output().connect(and.b())?;

        let input = and.a().clone();
        let output = and.output().clone();

        let mut system = LogicSystem::new();
        system.add(and);
        system.add(not);

        Ok(Self {
            system,
            input,
            output,
        })
    }
}

/// SR latch from two cross-coupled NOR gates.
///
/// `q` is the first gate's output, `q_bar` the second's. `reset` is the
/// first gate's free input and `set` the second's.
pub struct SrLatch {
    pub system: LogicSystem,
    pub reset: Pin,
    pub set: Pin,
    pub q: Pin,
    pub q_bar: Pin,
}

impl SrLatch {
    pub fn build() -> Result<Self> {
        let nor1 = BinaryGate::nor().with_name("NOR1");
        let nor2 = BinaryGate::nor().with_name("NOR2");

        nor1.output().connect(nor2.a())?;
        nor2.output().connect(nor1.b())?;

        let reset = nor1.a().clone();
        let set = nor2.b().clone();
        let q = nor1.output().clone();
        let q_bar = nor2.output().clone();

        let mut system = LogicSystem::new();
        system.add(nor1);
        system.add(nor2);

        Ok(Self {
            system,
            reset,
            set,
            q,
            q_bar,
        })
    }

    /// Drive both control inputs.
    pub fn drive(&self, reset: SourceValue, set: SourceValue) {
        self.reset.set_source_value(reset);
        self.set.set_source_value(set);
    }
}

/// A named reference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Settle the edge detector Low, then raise its input.
    EdgeDetector,
    /// Hold the SR latch in its forbidden state, then release both inputs.
    SrLatchRace,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::EdgeDetector, Scenario::SrLatchRace];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::EdgeDetector => "edge-detector",
            Scenario::SrLatchRace => "sr-latch-race",
        }
    }

    /// Prepare the circuit, apply the stimulus and record `steps` iterations.
    pub fn run(self, steps: usize, config: &SettleConfig) -> Result<Trace> {
        match self {
            Scenario::EdgeDetector => {
                let mut ckt = EdgeDetector::build()?;
                ckt.input.set_source_value(SourceValue::Low);
                ckt.system.settle(config)?;

                ckt.input.set_source_value(SourceValue::Hi);
                let watched = [("A", ckt.input.clone()), ("OUT", ckt.output.clone())];
                Ok(Trace::record(self, &mut ckt.system, &watched, steps))
            }
            Scenario::SrLatchRace => {
                let mut ckt = SrLatch::build()?;
                ckt.drive(SourceValue::Hi, SourceValue::Hi);
                ckt.system.settle(config)?;

                ckt.drive(SourceValue::Low, SourceValue::Low);
                let watched = [("Q", ckt.q.clone()), ("Q'", ckt.q_bar.clone())];
                Ok(Trace::record(self, &mut ckt.system, &watched, steps))
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scenario {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == s)
            .ok_or_else(|| LogicError::UnknownScenario {
                name: s.to_string(),
                expected: Scenario::ALL.map(Scenario::name).join(", "),
            })
    }
}

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub iteration: usize,
    pub changed: bool,
    pub values: Vec<(String, LogicValue)>,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  {}",
            self.iteration,
            if self.changed { "changed" } else { "stable " }
        )?;
        for (label, value) in &self.values {
            write!(f, "  {}={}", label, value)?;
        }
        Ok(())
    }
}

/// Iteration-by-iteration record of a scenario run.
#[derive(Debug, Clone)]
pub struct Trace {
    pub scenario: Scenario,
    pub steps: Vec<TraceStep>,
}

impl Trace {
    fn record(
        scenario: Scenario,
        system: &mut LogicSystem,
        watched: &[(&str, Pin)],
        steps: usize,
    ) -> Self {
        let steps = (1..=steps)
            .map(|iteration| {
                let changed = system.iterate();
                let values = watched
                    .iter()
                    .map(|(label, pin)| (label.to_string(), pin.value()))
                    .collect();
                TraceStep {
                    iteration,
                    changed,
                    values,
                }
            })
            .collect();
        Self { scenario, steps }
    }

    /// Values of one watched pin across the run.
    pub fn column(&self, label: &str) -> Vec<LogicValue> {
        self.steps
            .iter()
            .filter_map(|s| s.values.iter().find(|(l, _)| l == label).map(|(_, v)| *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::pin::LogicValue::{Hi, Indeterminate, Low};

    #[test]
    fn test_edge_detector_pulse() {
        let EdgeDetector {
            mut system,
            input,
            output,
        } = EdgeDetector::build().unwrap();

        input.set_source_value(SourceValue::Low);

        // Propagate input
        assert!(system.iterate());

        assert!(system.iterate());
        assert_eq!(output.value(), Low);

        assert!(!system.iterate());
        assert!(!system.iterate());

        input.set_source_value(SourceValue::Hi);

        // Propagate input
        assert!(system.iterate());

        // Hi pulse
        assert!(system.iterate());
        assert_eq!(output.value(), Hi);

        assert!(system.iterate());
        assert_eq!(output.value(), Low);

        assert!(!system.iterate());
        assert!(!system.iterate());
        assert_eq!(output.value(), Low);
    }

    #[test]
    fn test_sr_latch_sequence() {
        let latch = SrLatch::build().unwrap();
        let mut w = latch.system;
        let (q, q_bar) = (&latch.q, &latch.q_bar);
        let drive = |r, s| {
            latch.reset.set_source_value(r);
            latch.set.set_source_value(s);
        };
        let expect = |q_val, q_bar_val| {
            assert_eq!(q.value(), q_val);
            assert_eq!(q_bar.value(), q_bar_val);
        };

        // Power up
        w.iterate();
        expect(Indeterminate, Indeterminate);

        // Reset
        drive(SourceValue::Hi, SourceValue::Low);
        w.iterate();
        assert_eq!(q.value(), Indeterminate);
        w.iterate();
        expect(Low, Indeterminate);
        w.iterate();
        expect(Low, Hi);

        // Hold
        drive(SourceValue::Low, SourceValue::Low);
        for _ in 0..3 {
            w.iterate();
            expect(Low, Hi);
        }

        // Forbidden state
        drive(SourceValue::Hi, SourceValue::Hi);
        w.iterate();
        w.iterate();
        w.iterate();
        expect(Low, Low);

        // Release both inputs at once
        drive(SourceValue::Low, SourceValue::Low);
        w.iterate();
        for _ in 0..2 {
            assert!(w.iterate());
            expect(Hi, Hi);
            assert!(w.iterate());
            expect(Low, Low);
        }

        // Set
        drive(SourceValue::Low, SourceValue::Hi);
        w.iterate();
        w.iterate();
        w.iterate();
        expect(Hi, Low);

        assert!(!w.iterate());
        expect(Hi, Low);
    }

    #[test]
    fn test_sr_latch_race_never_settles() {
        let mut latch = SrLatch::build().unwrap();
        latch.drive(SourceValue::Hi, SourceValue::Hi);
        latch.system.settle(&SettleConfig::default()).unwrap();

        latch.drive(SourceValue::Low, SourceValue::Low);
        let err = latch
            .system
            .settle(&SettleConfig::new().with_max_iterations(100))
            .unwrap_err();
        assert_eq!(err, LogicError::convergence_failure(100));
    }

    #[test]
    fn test_edge_detector_trace() {
        let trace = Scenario::EdgeDetector
            .run(5, &SettleConfig::default())
            .unwrap();

        let changed: Vec<bool> = trace.steps.iter().map(|s| s.changed).collect();
        assert_eq!(changed, [true, true, true, false, false]);
        assert_eq!(trace.column("OUT"), [Low, Hi, Low, Low, Low]);
        assert_eq!(trace.column("A"), [Hi; 5]);
    }

    #[test]
    fn test_sr_latch_race_trace() {
        let trace = Scenario::SrLatchRace
            .run(6, &SettleConfig::default())
            .unwrap();

        assert!(trace.steps.iter().all(|s| s.changed));
        assert_eq!(trace.column("Q"), [Low, Hi, Low, Hi, Low, Hi]);
        assert_eq!(trace.column("Q'"), trace.column("Q"));
    }

    #[test]
    fn test_scenario_names() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        }
        let err = "ring-oscillator".parse::<Scenario>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown scenario 'ring-oscillator' (expected one of: edge-detector, sr-latch-race)"
        );
    }

    #[test]
    fn test_trace_step_display() {
        let step = TraceStep {
            iteration: 3,
            changed: true,
            values: vec![("Q".to_string(), Hi), ("Q'".to_string(), Low)],
        };
        assert_eq!(step.to_string(), "   3  changed  Q=Hi  Q'=Low");
    }
}
