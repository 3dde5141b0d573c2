use std::collections::BTreeSet;

use taxi_park::queries::{
    check_pareto_principle, find_fake_drivers, find_faithful_passengers, find_frequent_passengers,
    find_smart_passengers, find_the_most_frequent_trip_duration_period,
};
use taxi_park::types::{Driver, DurationPeriod, Passenger, TaxiPark, Trip};

fn driver(i: usize) -> Driver {
    Driver::new(format!("D-{i}"))
}

fn passenger(i: usize) -> Passenger {
    Passenger::new(format!("P-{i}"))
}

fn trip(d: usize, ps: &[usize], duration: u32, cost: f64, discount: Option<f64>) -> Trip {
    Trip::new(
        driver(d),
        ps.iter().map(|i| passenger(*i)),
        duration,
        cost,
        discount,
    )
}

fn park(drivers: usize, passengers: usize, trips: Vec<Trip>) -> TaxiPark {
    TaxiPark::new(
        (0..drivers).map(driver),
        (0..passengers).map(passenger),
        trips,
    )
}

fn sample_park() -> TaxiPark {
    park(
        5,
        4,
        vec![
            trip(0, &[0, 1], 5, 20.0, None),
            trip(0, &[0], 7, 15.0, Some(0.3)),
            trip(1, &[0, 2], 15, 12.0, Some(0.1)),
            trip(0, &[1, 2], 25, 30.0, Some(0.0)),
            trip(2, &[3], 26, 10.0, Some(0.4)),
        ],
    )
}

#[test]
fn fake_drivers_are_drivers_without_trips() {
    let p = park(3, 1, vec![trip(0, &[0], 1, 1.0, None), trip(1, &[0], 1, 1.0, None)]);
    assert_eq!(find_fake_drivers(&p), BTreeSet::from([driver(2)]));
    assert_eq!(
        find_fake_drivers(&sample_park()),
        BTreeSet::from([driver(3), driver(4)])
    );
}

#[test]
fn faithful_passengers_count_distinct_trips() {
    let p = park(
        1,
        3,
        vec![trip(0, &[0, 1], 1, 1.0, None), trip(0, &[0], 1, 1.0, None)],
    );
    assert_eq!(find_faithful_passengers(&p, 2), BTreeSet::from([passenger(0)]));
    assert_eq!(find_faithful_passengers(&p, 0).len(), 3);
}

#[test]
fn frequent_passengers_of_a_driver() {
    let p = sample_park();
    assert_eq!(
        find_frequent_passengers(&p, &driver(0)),
        BTreeSet::from([passenger(0), passenger(1)])
    );
    assert!(find_frequent_passengers(&p, &driver(4)).is_empty());
}

#[test]
fn smart_passengers_in_sample() {
    // P-0: 2 discounted / 1 full, P-1: 0 / 2, P-2: 1 / 1, P-3: 1 / 0
    assert_eq!(
        find_smart_passengers(&sample_park()),
        BTreeSet::from([passenger(0), passenger(3)])
    );
}

#[test]
fn most_frequent_period_never_picks_a_non_maximum() {
    // buckets: 0..9 x2, 10..19 x1, 20..29 x2
    let p = sample_park();
    let period = find_the_most_frequent_trip_duration_period(&p).unwrap();
    assert_ne!(period, DurationPeriod::new(10, 19));
    assert!(period == DurationPeriod::new(0, 9) || period == DurationPeriod::new(20, 29));
    assert_eq!(period, DurationPeriod::new(0, 9));

    assert_eq!(find_the_most_frequent_trip_duration_period(&park(1, 1, vec![])), None);
}

#[test]
fn pareto_boundary() {
    let exact = park(
        5,
        1,
        vec![trip(0, &[0], 1, 80.0, None), trip(1, &[0], 1, 20.0, None)],
    );
    assert!(check_pareto_principle(&exact));

    let under = park(
        5,
        1,
        vec![trip(0, &[0], 1, 79.999, None), trip(1, &[0], 1, 20.001, None)],
    );
    assert!(!check_pareto_principle(&under));

    assert!(!check_pareto_principle(&park(5, 1, vec![])));
}

#[test]
fn pareto_top_group_is_a_fifth_of_all_drivers() {
    // 10 drivers -> top 2 (D-3, D-7) earn 88 of 100
    let mut trips = vec![
        trip(3, &[0], 1, 45.0, None),
        trip(7, &[0], 1, 40.0, None),
    ];
    trips.extend((0..5).map(|d| trip(d, &[0], 1, 3.0, None)));
    let p = park(10, 1, trips);
    assert!(check_pareto_principle(&p));
}

#[test]
fn queries_are_idempotent() {
    let p = sample_park();
    let before = p.clone();

    assert_eq!(find_fake_drivers(&p), find_fake_drivers(&p));
    assert_eq!(find_faithful_passengers(&p, 2), find_faithful_passengers(&p, 2));
    assert_eq!(
        find_frequent_passengers(&p, &driver(0)),
        find_frequent_passengers(&p, &driver(0))
    );
    assert_eq!(find_smart_passengers(&p), find_smart_passengers(&p));
    assert_eq!(
        find_the_most_frequent_trip_duration_period(&p),
        find_the_most_frequent_trip_duration_period(&p)
    );
    assert_eq!(check_pareto_principle(&p), check_pareto_principle(&p));

    assert_eq!(p, before);
}

#[test]
fn park_deserializes_from_json() {
    let p: TaxiPark = serde_json::from_value(serde_json::json!({
        "all_drivers": ["D-0", "D-1"],
        "all_passengers": ["P-0", "P-1"],
        "trips": [
            { "driver": "D-0", "passengers": ["P-0", "P-1"], "duration": 12, "cost": 9.5 },
            { "driver": "D-0", "passengers": ["P-0"], "duration": 18, "cost": 4.0, "discount": 0.25 }
        ]
    }))
    .unwrap();

    p.validate().unwrap();
    assert_eq!(p.trip_count(), 2);
    assert_eq!(p.trips[0].discount, None);
    assert_eq!(find_fake_drivers(&p), BTreeSet::from([driver(1)]));
    assert_eq!(
        find_the_most_frequent_trip_duration_period(&p),
        Some(DurationPeriod::new(10, 19))
    );
}
