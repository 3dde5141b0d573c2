//! Trip duration bucketing.

use std::collections::BTreeMap;

use crate::types::{DurationPeriod, TaxiPark};

/// Default bucket width in minutes: `0..9`, `10..19`, `20..29`, ...
pub const DEFAULT_PERIOD_WIDTH: u32 = 10;

/// The 10-minute period that the most trips fall into.
///
/// Returns `None` if there are no trips. When several periods share the highest count, the one
/// with the lowest start wins.
pub fn find_the_most_frequent_trip_duration_period(park: &TaxiPark) -> Option<DurationPeriod> {
    most_frequent_duration_period(park, DEFAULT_PERIOD_WIDTH)
}

/// [`find_the_most_frequent_trip_duration_period`] with a custom bucket width.
///
/// # Panics
///
/// Panics if `width == 0`.
pub fn most_frequent_duration_period(park: &TaxiPark, width: u32) -> Option<DurationPeriod> {
    let histogram = duration_histogram(park, width);
    // ascending scan: only a strictly larger count replaces the current best
    histogram
        .into_iter()
        .fold(None, |best: Option<(DurationPeriod, usize)>, (period, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((period, n)),
        })
        .map(|(period, _)| period)
}

/// Number of trips per non-empty period, ordered by period start.
pub fn duration_histogram(park: &TaxiPark, width: u32) -> BTreeMap<DurationPeriod, usize> {
    let mut histogram = BTreeMap::new();
    for trip in &park.trips {
        *histogram.entry(trip.duration_period(width)).or_insert(0) += 1;
    }
    histogram
}
