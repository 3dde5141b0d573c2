//! `taxi-park` is a small library of read-only queries over an in-memory ride-sharing dataset
//! ([`types::TaxiPark`]), plus an unrelated string classifier ([`nice_string`]).
//!
//! The dataset is built by the caller (by hand, through [`types::TaxiParkBuilder`], or by
//! deserializing it with `serde`) and every query borrows it immutably. Nothing here performs I/O
//! or keeps state between calls, so any number of threads can query the same park at once.
//!
//! ## Ride queries
//!
//! - [`queries::find_fake_drivers`]: registered drivers with no trips
//! - [`queries::find_faithful_passengers`]: passengers with at least N trips
//! - [`queries::find_frequent_passengers`]: passengers a given driver took more than once
//! - [`queries::find_smart_passengers`]: passengers with more discounted than full-price trips
//! - [`queries::find_the_most_frequent_trip_duration_period`]: most common 10-minute bucket
//! - [`queries::check_pareto_principle`]: do the top 20% of drivers earn 80% of the income?
//!
//! ```rust
//! use taxi_park::queries::{check_pareto_principle, find_smart_passengers};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::builder()
//!     .drivers(["d0", "d1", "d2", "d3", "d4"])
//!     .passengers(["p0", "p1"])
//!     .trip(Trip::new(Driver::new("d0"), [Passenger::new("p0")], 10, 90.0, Some(0.2)))
//!     .trip(Trip::new(Driver::new("d1"), [Passenger::new("p1")], 25, 10.0, None))
//!     .build();
//!
//! assert!(check_pareto_principle(&park));
//! assert_eq!(find_smart_passengers(&park).len(), 1);
//! ```
//!
//! ## Engine
//!
//! [`engine::RideQueryEngine`] wraps the same queries with validated [`engine::QueryOptions`]
//! (period width, Pareto rule) and observer hooks for logging ([`engine::StdErrObserver`],
//! [`engine::TracingObserver`]).
//!
//! ## Modules
//!
//! - [`types`]: drivers, passengers, trips and the park itself
//! - [`queries`]: the pure query functions
//! - [`engine`]: configurable query runner with observer hooks
//! - [`nice_string`]: the "nice string" classifier
//! - [`error`]: error type for validation and option checks

pub mod engine;
pub mod error;
pub mod nice_string;
pub mod queries;
pub mod types;

pub use error::{ParkError, ParkResult};
