//! Property tests over the three dispatch stages.

use std::collections::BTreeSet;

use proptest::prelude::*;
use u_dispatch::config::default_network;
use u_dispatch::error::DispatchError;
use u_dispatch::evaluation::invoice;
use u_dispatch::models::{CostRates, ParcelRecord, SelectedBatch, VehicleCapacity};
use u_dispatch::routing::plan;
use u_dispatch::selection::select;

const CITIES: [&str; 6] = ["Hanoi", "HCMC", "Da Nang", "Nha Trang", "Hai Phong", "Dalat"];

fn parcel_strategy() -> impl Strategy<Value = (f64, f64, usize)> {
    (0.0..600.0f64, prop_oneof![Just(0.0), 0.0..300.0f64], 0..CITIES.len())
}

fn records(raw: &[(f64, f64, usize)]) -> Vec<ParcelRecord> {
    raw.iter()
        .enumerate()
        .map(|(i, &(w, v, c))| ParcelRecord::new(format!("P{i}"), "goods", w, v, CITIES[c]))
        .collect()
}

fn batch_of(records: &[ParcelRecord]) -> SelectedBatch {
    let mut b = SelectedBatch::new();
    for r in records {
        b.push(r.clone());
    }
    b
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn selection_respects_capacity(
        raw in prop::collection::vec(parcel_strategy(), 0..30),
        max_weight in 1.0..1000.0f64,
        max_volume in 1.0..1000.0f64,
    ) {
        let cap = VehicleCapacity::new(max_weight, max_volume).unwrap();
        let batch = select(&records(&raw), &cap);
        let weight: f64 = batch.parcels().iter().map(|p| p.weight()).sum();
        let volume: f64 = batch.parcels().iter().map(|p| p.volume()).sum();
        prop_assert!(weight <= max_weight + 1e-9);
        prop_assert!(volume <= max_volume + 1e-9);
        prop_assert_eq!(batch.len() + batch.rejected().len(), raw.len());
    }

    #[test]
    fn selection_is_deterministic(
        raw in prop::collection::vec(parcel_strategy(), 0..30),
    ) {
        let cap = VehicleCapacity::new(500.0, 2000.0).unwrap();
        let input = records(&raw);
        prop_assert_eq!(select(&input, &cap), select(&input, &cap));
    }

    #[test]
    fn selection_loads_in_density_order(
        raw in prop::collection::vec(parcel_strategy(), 0..30),
    ) {
        let cap = VehicleCapacity::new(500.0, 2000.0).unwrap();
        let batch = select(&records(&raw), &cap);
        for pair in batch.parcels().windows(2) {
            prop_assert!(pair[0].density() >= pair[1].density());
        }
    }

    #[test]
    fn route_visits_each_destination_once(
        raw in prop::collection::vec(parcel_strategy(), 0..30),
    ) {
        let table = default_network();
        let input = records(&raw);
        let route = plan(&batch_of(&input), &table, "Hanoi").unwrap();

        let expected: BTreeSet<&str> = input
            .iter()
            .map(|p| p.destination())
            .collect();
        let visited: Vec<&str> = route.deliveries().iter().map(String::as_str).collect();
        let visited_set: BTreeSet<&str> = visited.iter().copied().collect();

        prop_assert_eq!(visited.len(), visited_set.len());
        prop_assert_eq!(visited_set, expected);
        prop_assert_eq!(route.stops().first().map(String::as_str), Some("Hanoi"));
        prop_assert_eq!(route.stops().last().map(String::as_str), Some("Hanoi"));

        let legs: f64 = route
            .stops()
            .windows(2)
            .map(|w| table.get(&w[0], &w[1]).unwrap())
            .sum();
        prop_assert!((legs - route.total_distance()).abs() < 1e-9);
    }

    #[test]
    fn invoice_keeps_rows_and_order(
        raw in prop::collection::vec(parcel_strategy(), 0..30),
    ) {
        let input = records(&raw);
        let rows = invoice(&input, &default_network(), "Hanoi", &CostRates::default());
        prop_assert_eq!(rows.len(), input.len());
        for (row, parcel) in rows.iter().zip(&input) {
            prop_assert_eq!(row.parcel_id.as_str(), parcel.id());
            prop_assert!(row.total_cost >= 0.0);
        }
    }
}

#[test]
fn reference_selection_scenario() {
    let cap = VehicleCapacity::new(500.0, 2000.0).unwrap();
    let input = vec![
        ParcelRecord::new("1", "a", 300.0, 100.0, "HCMC"),
        ParcelRecord::new("2", "b", 250.0, 50.0, "Da Nang"),
    ];
    let batch = select(&input, &cap);
    let ids: Vec<&str> = batch.parcels().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn reference_route_scenario() {
    let batch = batch_of(&[
        ParcelRecord::new("1", "a", 1.0, 1.0, "HCMC"),
        ParcelRecord::new("2", "b", 1.0, 1.0, "Da Nang"),
    ]);
    let route = plan(&batch, &default_network(), "Hanoi").unwrap();
    assert_eq!(route.stops(), &["Hanoi", "Da Nang", "HCMC", "Hanoi"]);
    assert_eq!(route.total_distance(), 3350.0);
}

#[test]
fn reference_unknown_city_scenario() {
    let table = u_dispatch::distance::DistanceTable::builder()
        .symmetric("Hanoi", "HCMC", 1700.0)
        .build()
        .unwrap();
    let batch = batch_of(&[ParcelRecord::new("1", "a", 1.0, 1.0, "Hue")]);
    match plan(&batch, &table, "Hanoi") {
        Err(DispatchError::Lookup { city }) => assert_eq!(city, "Hue"),
        other => panic!("expected lookup error, got {other:?}"),
    }
}

#[test]
fn reference_invoice_scenario() {
    let rows = invoice(
        &[ParcelRecord::new("1", "a", 10.0, 5.0, "Da Nang")],
        &default_network(),
        "Hanoi",
        &CostRates::new(50.0, 20.0, 100.0).unwrap(),
    );
    assert_eq!(rows[0].weight_cost, 400_000.0);
    assert_eq!(rows[0].volume_cost, 80_000.0);
    assert_eq!(rows[0].distance_cost, 80_000.0);
    assert_eq!(rows[0].total_cost, 560_000.0);
}
