//! Driver-centric queries: idle drivers and the income concentration (Pareto) check.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::types::{Driver, TaxiPark};

/// Parameters of the "top X% of drivers earn Y% of income" check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParetoRule {
    /// The top group is `all_drivers.len() / driver_divisor` drivers (integer division).
    pub driver_divisor: usize,
    /// Fraction of total income the top group must reach, in `[0, 1]`.
    pub income_share: f64,
}

impl Default for ParetoRule {
    fn default() -> Self {
        Self {
            driver_divisor: 5,
            income_share: 0.8,
        }
    }
}

/// Drivers registered in the park that drove no trips at all.
pub fn find_fake_drivers(park: &TaxiPark) -> BTreeSet<Driver> {
    let active: BTreeSet<&Driver> = park.trips.iter().map(|t| &t.driver).collect();
    park.all_drivers
        .iter()
        .filter(|d| !active.contains(d))
        .cloned()
        .collect()
}

/// Every registered driver with the summed `cost` of their trips, highest income first.
///
/// Drivers with equal income keep the order of [`TaxiPark::all_drivers`] (i.e. by name), so the
/// result is deterministic.
pub fn driver_incomes(park: &TaxiPark) -> Vec<(Driver, f64)> {
    let mut income: HashMap<&Driver, f64> = HashMap::with_capacity(park.all_drivers.len());
    for trip in &park.trips {
        *income.entry(&trip.driver).or_insert(0.0) += trip.cost;
    }

    let mut table: Vec<(Driver, f64)> = park
        .all_drivers
        .iter()
        .map(|d| (d.clone(), income.get(d).copied().unwrap_or(0.0)))
        .collect();
    // stable: ties stay in name order
    table.sort_by(|a, b| b.1.total_cmp(&a.1));
    table
}

/// Do the top 20% of drivers earn at least 80% of the total income?
///
/// Returns `false` when there are no trips.
pub fn check_pareto_principle(park: &TaxiPark) -> bool {
    check_pareto_rule(park, &ParetoRule::default())
}

/// [`check_pareto_principle`] with a custom [`ParetoRule`].
///
/// # Panics
///
/// Panics if `rule.driver_divisor == 0`. Use [`crate::engine::QueryOptions::validate`] to reject
/// such rules up front.
pub fn check_pareto_rule(park: &TaxiPark, rule: &ParetoRule) -> bool {
    if park.trips.is_empty() {
        return false;
    }
    assert!(rule.driver_divisor > 0, "driver_divisor must be > 0");

    let top_count = park.all_drivers.len() / rule.driver_divisor;
    let top_income: f64 = driver_incomes(park)
        .iter()
        .take(top_count)
        .map(|(_, income)| income)
        .sum();
    let total = park.total_cost();

    tracing::trace!(top_count, top_income, total, "pareto check");
    top_income >= total * rule.income_share
}

#[cfg(test)]
mod tests {
    use super::{
        ParetoRule, check_pareto_principle, check_pareto_rule, driver_incomes, find_fake_drivers,
    };
    use crate::types::{Driver, Passenger, TaxiPark, Trip};

    fn trip(driver: &str, cost: f64) -> Trip {
        Trip::new(Driver::new(driver), [Passenger::new("p")], 10, cost, None)
    }

    fn park(drivers: &[&str], trips: Vec<Trip>) -> TaxiPark {
        TaxiPark::builder()
            .drivers(drivers.iter().copied())
            .passenger("p")
            .trips(trips)
            .build()
    }

    #[test]
    fn fake_drivers_are_those_without_trips() {
        let p = park(&["d1", "d2", "d3"], vec![trip("d1", 1.0), trip("d2", 1.0), trip("d1", 1.0)]);
        let fake: Vec<_> = find_fake_drivers(&p).into_iter().collect();
        assert_eq!(fake, vec![Driver::new("d3")]);
    }

    #[test]
    fn fake_drivers_without_trips_is_everyone() {
        let p = park(&["d1", "d2"], vec![]);
        assert_eq!(find_fake_drivers(&p).len(), 2);
        assert!(find_fake_drivers(&TaxiPark::default()).is_empty());
    }

    #[test]
    fn incomes_sorted_descending_with_name_tie_break() {
        let p = park(
            &["a", "b", "c", "d"],
            vec![trip("c", 5.0), trip("b", 2.0), trip("a", 2.0), trip("c", 1.0)],
        );
        let table = driver_incomes(&p);
        let names: Vec<&str> = table.iter().map(|(d, _)| d.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b", "d"]);
        assert_eq!(table[0].1, 6.0);
        assert_eq!(table[3].1, 0.0);
    }

    #[test]
    fn pareto_false_without_trips() {
        let p = park(&["d1", "d2", "d3", "d4", "d5"], vec![]);
        assert!(!check_pareto_principle(&p));
    }

    #[test]
    fn pareto_exactly_eighty_percent_holds() {
        let p = park(
            &["d1", "d2", "d3", "d4", "d5"],
            vec![trip("d1", 80.0), trip("d2", 10.0), trip("d3", 10.0)],
        );
        assert!(check_pareto_principle(&p));
    }

    #[test]
    fn pareto_just_under_eighty_percent_fails() {
        let p = park(
            &["d1", "d2", "d3", "d4", "d5"],
            vec![trip("d1", 79.999), trip("d2", 10.0), trip("d3", 10.001)],
        );
        assert!(!check_pareto_principle(&p));
    }

    #[test]
    fn pareto_with_fewer_than_five_drivers_has_empty_top_group() {
        let p = park(&["d1", "d2"], vec![trip("d1", 100.0)]);
        assert!(!check_pareto_principle(&p));

        let free = park(&["d1"], vec![trip("d1", 0.0)]);
        assert!(check_pareto_principle(&free));
    }

    #[test]
    fn custom_rule_changes_group_size_and_threshold() {
        let p = park(&["d1", "d2"], vec![trip("d1", 60.0), trip("d2", 40.0)]);
        let half = ParetoRule {
            driver_divisor: 2,
            income_share: 0.6,
        };
        assert!(check_pareto_rule(&p, &half));
        let strict = ParetoRule {
            income_share: 0.61,
            ..half
        };
        assert!(!check_pareto_rule(&p, &strict));
    }
}
