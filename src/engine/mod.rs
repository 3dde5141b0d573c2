//! A configurable front end for the functions in [`crate::queries`].
//!
//! [`RideQueryEngine`] adds two things on top of the pure query functions:
//!
//! - [`QueryOptions`]: period width and Pareto rule, validated once at construction
//! - observer hooks ([`QueryObserver`]) receiving a started/finished event per query
//!
//! The engine never holds a dataset; every call borrows the [`TaxiPark`] it runs against.
//!
//! ```rust
//! use std::sync::Arc;
//! use taxi_park::engine::{QueryOptions, RideQueryEngine, TracingObserver};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::builder()
//!     .driver("alice")
//!     .passenger("carol")
//!     .trip(Trip::new(Driver::new("alice"), [Passenger::new("carol")], 14, 11.0, None))
//!     .build();
//!
//! let engine = RideQueryEngine::new(QueryOptions::default())
//!     .unwrap()
//!     .with_observer(Arc::new(TracingObserver));
//! let period = engine.most_frequent_period(&park).unwrap();
//! assert_eq!((period.start(), period.end()), (10, 19));
//! ```

mod observer;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{ParkError, ParkResult};
use crate::queries::{self, DEFAULT_PERIOD_WIDTH, ParetoRule};
use crate::types::{Driver, DurationPeriod, Passenger, TaxiPark};

pub use observer::{
    CompositeObserver, QueryEvent, QueryKind, QueryObserver, QueryOutcome, StdErrObserver,
    TracingObserver,
};

/// Configuration for the [`RideQueryEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Bucket width in minutes for the duration-period query.
    pub period_width: u32,
    /// Group size and income threshold for the Pareto check.
    pub pareto: ParetoRule,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            period_width: DEFAULT_PERIOD_WIDTH,
            pareto: ParetoRule::default(),
        }
    }
}

impl QueryOptions {
    pub fn validate(&self) -> ParkResult<()> {
        if self.period_width == 0 {
            return Err(invalid("period_width must be > 0"));
        }
        if self.pareto.driver_divisor == 0 {
            return Err(invalid("pareto.driver_divisor must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.pareto.income_share) {
            return Err(invalid(format!(
                "pareto.income_share must be within [0, 1], got {}",
                self.pareto.income_share
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ParkError {
    ParkError::InvalidOptions {
        message: message.into(),
    }
}

/// Runs the ride queries with a fixed set of [`QueryOptions`] and an optional observer.
#[derive(Clone)]
pub struct RideQueryEngine {
    opts: QueryOptions,
    observer: Option<Arc<dyn QueryObserver>>,
}

impl RideQueryEngine {
    /// Create an engine, rejecting out-of-range options.
    pub fn new(opts: QueryOptions) -> ParkResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            observer: None,
        })
    }

    /// Attach an observer for query events.
    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &QueryOptions {
        &self.opts
    }

    pub fn fake_drivers(&self, park: &TaxiPark) -> BTreeSet<Driver> {
        self.run(
            QueryKind::FakeDrivers,
            park,
            queries::find_fake_drivers,
            |r: &BTreeSet<Driver>| QueryOutcome::Members(r.len()),
        )
    }

    pub fn faithful_passengers(&self, park: &TaxiPark, min_trips: usize) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::FaithfulPassengers,
            park,
            |p| queries::find_faithful_passengers(p, min_trips),
            |r: &BTreeSet<Passenger>| QueryOutcome::Members(r.len()),
        )
    }

    pub fn frequent_passengers(&self, park: &TaxiPark, driver: &Driver) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::FrequentPassengers,
            park,
            |p| queries::find_frequent_passengers(p, driver),
            |r: &BTreeSet<Passenger>| QueryOutcome::Members(r.len()),
        )
    }

    pub fn smart_passengers(&self, park: &TaxiPark) -> BTreeSet<Passenger> {
        self.run(
            QueryKind::SmartPassengers,
            park,
            queries::find_smart_passengers,
            |r: &BTreeSet<Passenger>| QueryOutcome::Members(r.len()),
        )
    }

    pub fn most_frequent_period(&self, park: &TaxiPark) -> Option<DurationPeriod> {
        let width = self.opts.period_width;
        self.run(
            QueryKind::MostFrequentPeriod,
            park,
            |p| queries::most_frequent_duration_period(p, width),
            |r: &Option<DurationPeriod>| QueryOutcome::Period(*r),
        )
    }

    pub fn pareto_principle(&self, park: &TaxiPark) -> bool {
        let rule = self.opts.pareto;
        self.run(
            QueryKind::ParetoPrinciple,
            park,
            |p| queries::check_pareto_rule(p, &rule),
            |r: &bool| QueryOutcome::Verdict(*r),
        )
    }

    fn run<T>(
        &self,
        query: QueryKind,
        park: &TaxiPark,
        f: impl FnOnce(&TaxiPark) -> T,
        describe: impl FnOnce(&T) -> QueryOutcome,
    ) -> T {
        let start = Instant::now();
        self.emit(QueryEvent::Started {
            query,
            trips: park.trip_count(),
        });

        let out = f(park);

        if self.observer.is_some() {
            self.emit(QueryEvent::Finished {
                query,
                elapsed: start.elapsed(),
                outcome: describe(&out),
            });
        }
        out
    }

    fn emit(&self, event: QueryEvent) {
        if let Some(o) = &self.observer {
            o.on_event(&event);
        }
    }
}

impl Default for RideQueryEngine {
    fn default() -> Self {
        Self {
            opts: QueryOptions::default(),
            observer: None,
        }
    }
}
