//! Read-only aggregate queries over a [`crate::types::TaxiPark`].
//!
//! Every function here borrows the park immutably, has no side effects apart from `tracing`
//! records, and returns the same result when called twice on the same data.
//!
//! - [`find_fake_drivers()`]: drivers without a single trip
//! - [`find_faithful_passengers()`]: passengers with at least N trips
//! - [`find_frequent_passengers()`]: passengers a given driver took more than once
//! - [`find_smart_passengers()`]: passengers who mostly rode with a discount
//! - [`find_the_most_frequent_trip_duration_period()`]: most common 10-minute duration bucket
//! - [`check_pareto_principle()`]: do 20% of drivers earn 80% of the income?
//!
//! ## Example
//!
//! ```rust
//! use taxi_park::queries::{find_fake_drivers, find_faithful_passengers};
//! use taxi_park::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::builder()
//!     .drivers(["alice", "bob"])
//!     .passengers(["carol", "dave"])
//!     .trip(Trip::new(Driver::new("alice"), [Passenger::new("carol")], 12, 9.5, None))
//!     .trip(Trip::new(Driver::new("alice"), [Passenger::new("carol"), Passenger::new("dave")], 31, 20.0, Some(0.1)))
//!     .build();
//!
//! assert_eq!(find_fake_drivers(&park).into_iter().collect::<Vec<_>>(), vec![Driver::new("bob")]);
//! assert_eq!(find_faithful_passengers(&park, 2).len(), 1);
//! ```

pub mod drivers;
pub mod durations;
pub mod passengers;

pub use drivers::{
    ParetoRule, check_pareto_principle, check_pareto_rule, driver_incomes, find_fake_drivers,
};
pub use durations::{
    DEFAULT_PERIOD_WIDTH, duration_histogram, find_the_most_frequent_trip_duration_period,
    most_frequent_duration_period,
};
pub use passengers::{find_faithful_passengers, find_frequent_passengers, find_smart_passengers};
