//! Core data model for the ride-sharing dataset.
//!
//! A [`TaxiPark`] owns every [`Driver`] and [`Passenger`] plus the ordered list of [`Trip`]s they
//! took part in. Queries in [`crate::queries`] only ever borrow a park immutably.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParkError, ParkResult};

/// A driver, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver {
    pub name: String,
}

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A passenger, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passenger {
    pub name: String,
}

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single ride: one driver, the passengers on board, and what it cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub driver: Driver,
    pub passengers: BTreeSet<Passenger>,
    /// Duration in whole minutes.
    pub duration: u32,
    pub cost: f64,
    /// `None` and `Some(0.0)` both mean "no discount".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Trip {
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration: u32,
        cost: f64,
        discount: Option<f64>,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount,
        }
    }

    /// Returns `true` if the discount is present and strictly positive.
    pub fn is_discounted(&self) -> bool {
        self.discount.unwrap_or(0.0) > 0.0
    }

    /// The `width`-minute bucket this trip's duration falls into.
    ///
    /// # Panics
    ///
    /// Panics if `width == 0`.
    pub fn duration_period(&self, width: u32) -> DurationPeriod {
        DurationPeriod::containing(self.duration, width)
    }
}

/// An inclusive range of trip durations in minutes, e.g. `20..=29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DurationPeriod {
    start: u32,
    end: u32,
}

impl DurationPeriod {
    /// Create a period covering `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "period end {end} precedes start {start}");
        Self { start, end }
    }

    /// The bucket of size `width` that `minutes` falls into, aligned to multiples of `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width == 0`.
    pub fn containing(minutes: u32, width: u32) -> Self {
        assert!(width > 0, "period width must be > 0");
        let start = minutes / width * width;
        Self {
            start,
            end: start.saturating_add(width - 1),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, minutes: u32) -> bool {
        (self.start..=self.end).contains(&minutes)
    }
}

impl fmt::Display for DurationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The full dataset: every known driver and passenger, and the trips between them.
///
/// Construction through [`TaxiPark::new`] performs no checks. Call [`TaxiPark::validate`] (or use
/// [`TaxiParkBuilder::build_validated`]) when the data comes from an untrusted source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    pub all_drivers: BTreeSet<Driver>,
    pub all_passengers: BTreeSet<Passenger>,
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    pub fn new(
        all_drivers: impl IntoIterator<Item = Driver>,
        all_passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: all_drivers.into_iter().collect(),
            all_passengers: all_passengers.into_iter().collect(),
            trips,
        }
    }

    pub fn builder() -> TaxiParkBuilder {
        TaxiParkBuilder::default()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Sum of `cost` over all trips.
    pub fn total_cost(&self) -> f64 {
        self.trips.iter().map(|t| t.cost).sum()
    }

    /// Trips driven by `driver`, in dataset order.
    pub fn trips_by<'a>(&'a self, driver: &'a Driver) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |t| &t.driver == driver)
    }

    /// Check that every trip references known people and carries sane amounts.
    ///
    /// Returns the first violation found, scanning trips in order.
    pub fn validate(&self) -> ParkResult<()> {
        for (idx, trip) in self.trips.iter().enumerate() {
            if !self.all_drivers.contains(&trip.driver) {
                return Err(ParkError::UnknownDriver {
                    trip: idx,
                    driver: trip.driver.name.clone(),
                });
            }
            if let Some(p) = trip
                .passengers
                .iter()
                .find(|p| !self.all_passengers.contains(*p))
            {
                return Err(ParkError::UnknownPassenger {
                    trip: idx,
                    passenger: p.name.clone(),
                });
            }
            check_amount(idx, "cost", trip.cost)?;
            if let Some(discount) = trip.discount {
                check_amount(idx, "discount", discount)?;
            }
        }
        Ok(())
    }
}

fn check_amount(trip: usize, field: &'static str, value: f64) -> ParkResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParkError::InvalidAmount { trip, field, value })
    }
}

/// Fluent construction of a [`TaxiPark`].
///
/// Drivers and passengers referenced by [`TaxiParkBuilder::trip`] are *not* registered
/// automatically; register them with [`TaxiParkBuilder::driver`] / [`TaxiParkBuilder::passenger`].
#[derive(Debug, Clone, Default)]
pub struct TaxiParkBuilder {
    drivers: BTreeSet<Driver>,
    passengers: BTreeSet<Passenger>,
    trips: Vec<Trip>,
}

impl TaxiParkBuilder {
    pub fn driver(mut self, name: impl Into<String>) -> Self {
        self.drivers.insert(Driver::new(name));
        self
    }

    pub fn drivers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drivers.extend(names.into_iter().map(Driver::new));
        self
    }

    pub fn passenger(mut self, name: impl Into<String>) -> Self {
        self.passengers.insert(Passenger::new(name));
        self
    }

    pub fn passengers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passengers.extend(names.into_iter().map(Passenger::new));
        self
    }

    pub fn trip(mut self, trip: Trip) -> Self {
        self.trips.push(trip);
        self
    }

    pub fn trips(mut self, trips: impl IntoIterator<Item = Trip>) -> Self {
        self.trips.extend(trips);
        self
    }

    pub fn build(self) -> TaxiPark {
        TaxiPark {
            all_drivers: self.drivers,
            all_passengers: self.passengers,
            trips: self.trips,
        }
    }

    pub fn build_validated(self) -> ParkResult<TaxiPark> {
        let park = self.build();
        park.validate()?;
        Ok(park)
    }
}
