//! Passenger-centric queries.
//!
//! A passenger is counted once for every trip whose passenger set contains them.

use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;

use crate::types::{Driver, Passenger, TaxiPark, Trip};

fn trips_per_passenger<'a, I>(trips: I) -> HashMap<&'a Passenger, usize>
where
    I: IntoIterator<Item = &'a Trip>,
{
    trips.into_iter().flat_map(|t| t.passengers.iter()).counts()
}

/// Passengers who took part in at least `min_trips` trips.
///
/// With `min_trips == 0` every registered passenger qualifies.
pub fn find_faithful_passengers(park: &TaxiPark, min_trips: usize) -> BTreeSet<Passenger> {
    let counts = trips_per_passenger(&park.trips);
    park.all_passengers
        .iter()
        .filter(|p| counts.get(*p).copied().unwrap_or(0) >= min_trips)
        .cloned()
        .collect()
}

/// Passengers that `driver` took on more than one trip.
pub fn find_frequent_passengers(park: &TaxiPark, driver: &Driver) -> BTreeSet<Passenger> {
    trips_per_passenger(park.trips_by(driver))
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(p, _)| p.clone())
        .collect()
}

/// Passengers with strictly more discounted than undiscounted trips.
pub fn find_smart_passengers(park: &TaxiPark) -> BTreeSet<Passenger> {
    let (discounted, full_price): (Vec<&Trip>, Vec<&Trip>) =
        park.trips.iter().partition(|t| t.is_discounted());
    let discounted = trips_per_passenger(discounted);
    let full_price = trips_per_passenger(full_price);

    tracing::trace!(
        discounted = discounted.len(),
        full_price = full_price.len(),
        "partitioned passengers by discount"
    );

    park.all_passengers
        .iter()
        .filter(|p| {
            let d = discounted.get(*p).copied().unwrap_or(0);
            let u = full_price.get(*p).copied().unwrap_or(0);
            d > u
        })
        .cloned()
        .collect()
}
