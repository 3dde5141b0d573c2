use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::types::DurationPeriod;

/// Which query an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    FakeDrivers,
    FaithfulPassengers,
    FrequentPassengers,
    SmartPassengers,
    MostFrequentPeriod,
    ParetoPrinciple,
}

impl QueryKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FakeDrivers => "fake_drivers",
            Self::FaithfulPassengers => "faithful_passengers",
            Self::FrequentPassengers => "frequent_passengers",
            Self::SmartPassengers => "smart_passengers",
            Self::MostFrequentPeriod => "most_frequent_period",
            Self::ParetoPrinciple => "pareto_principle",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact description of a query result, carried by [`QueryEvent::Finished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Number of drivers/passengers returned.
    Members(usize),
    Period(Option<DurationPeriod>),
    Verdict(bool),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Members(n) => write!(f, "members={n}"),
            Self::Period(Some(p)) => write!(f, "period={p}"),
            Self::Period(None) => f.write_str("period=none"),
            Self::Verdict(v) => write!(f, "verdict={v}"),
        }
    }
}

/// Events emitted by [`super::RideQueryEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    Started {
        query: QueryKind,
        trips: usize,
    },
    Finished {
        query: QueryKind,
        elapsed: Duration,
        outcome: QueryOutcome,
    },
}

/// Observer hook for query events.
pub trait QueryObserver: Send + Sync {
    fn on_event(&self, event: &QueryEvent);
}

/// Prints one line per event to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl QueryObserver for StdErrObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::Started { query, trips } => {
                eprintln!("[query][start] {query} trips={trips}");
            }
            QueryEvent::Finished {
                query,
                elapsed,
                outcome,
            } => {
                eprintln!("[query][done] {query} {outcome} elapsed={elapsed:?}");
            }
        }
    }
}

/// Forwards events to the `tracing` ecosystem at `debug` level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl QueryObserver for TracingObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::Started { query, trips } => {
                tracing::debug!(query = query.name(), trips, "query started");
            }
            QueryEvent::Finished {
                query,
                elapsed,
                outcome,
            } => {
                tracing::debug!(
                    query = query.name(),
                    elapsed_us = elapsed.as_micros() as u64,
                    outcome = %outcome,
                    "query finished"
                );
            }
        }
    }
}

/// Fans every event out to a list of observers, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn QueryObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn QueryObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl QueryObserver for CompositeObserver {
    fn on_event(&self, event: &QueryEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}
