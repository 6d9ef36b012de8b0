//! Nearest-neighbor delivery tour.
//!
//! Builds a single closed tour greedily: starting from the depot, always
//! travel to the nearest city not yet visited, then return to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of distinct destination cities.
//!
//! # Reference
//!
//! The simplest constructive TSP heuristic. It gives no optimality
//! guarantee; tours are typically 15-25% longer than optimal.

use std::collections::BTreeSet;

use tracing::{debug, instrument, trace};

use crate::distance::DistanceTable;
use crate::error::{DispatchError, Result};
use crate::models::{Route, SelectedBatch};

/// Plans the delivery tour for a loaded batch.
///
/// The tour starts at `depot`, visits every distinct destination of
/// `selected` exactly once, and returns to `depot`. Several parcels bound for
/// the same city produce a single stop. Parcels addressed to the depot itself
/// make the depot a stop too, reached first at zero distance. A batch without
/// destinations yields [`Route::depot_only`] whether or not the depot is in
/// `table`.
///
/// When two candidates are equally near, the one whose identifier sorts
/// first wins.
///
/// # Errors
///
/// Returns [`DispatchError::Lookup`] if any destination, or the depot of a
/// non-empty batch, is not a city of `table`.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::models::{ParcelRecord, SelectedBatch};
/// use u_dispatch::routing::plan;
///
/// let table = DistanceTable::builder()
///     .symmetric("Hanoi", "HCMC", 1700.0)
///     .symmetric("Hanoi", "Da Nang", 800.0)
///     .symmetric("Da Nang", "HCMC", 850.0)
///     .build()
///     .unwrap();
///
/// let mut batch = SelectedBatch::new();
/// batch.push(ParcelRecord::new("1", "a", 1.0, 1.0, "HCMC"));
/// batch.push(ParcelRecord::new("2", "b", 1.0, 1.0, "Da Nang"));
///
/// let route = plan(&batch, &table, "Hanoi").unwrap();
/// assert_eq!(route.stops(), &["Hanoi", "Da Nang", "HCMC", "Hanoi"]);
/// assert_eq!(route.total_distance(), 3350.0);
/// ```
pub fn plan(selected: &SelectedBatch, table: &DistanceTable, depot: &str) -> Result<Route> {
    plan_destinations(selected.destinations(), table, depot)
}

/// Plans a tour over an arbitrary list of destination cities.
///
/// Same semantics as [`plan`]; duplicates are visited once.
#[instrument(level = "debug", skip(destinations, table))]
pub fn plan_destinations<'a>(
    destinations: impl IntoIterator<Item = &'a str>,
    table: &DistanceTable,
    depot: &str,
) -> Result<Route> {
    // Ordered by index, which is lexicographic city order.
    let mut unvisited = BTreeSet::new();
    for city in destinations {
        let idx = table
            .index_of(city)
            .ok_or_else(|| DispatchError::lookup(city))?;
        unvisited.insert(idx);
    }

    if unvisited.is_empty() {
        debug!("no destinations, route stays at depot");
        return Ok(Route::depot_only(depot));
    }

    let depot_idx = table
        .index_of(depot)
        .ok_or_else(|| DispatchError::lookup(depot))?;

    let mut stops = Vec::with_capacity(unvisited.len() + 2);
    stops.push(depot.to_string());
    let mut current = depot_idx;
    let mut total_distance = 0.0;

    while let Some(next) = table.nearest_neighbor(current, unvisited.iter().copied()) {
        let leg = table.get_index(current, next);
        trace!(from = table.city(current), to = table.city(next), leg, "move");
        total_distance += leg;
        stops.push(table.city(next).to_string());
        unvisited.remove(&next);
        current = next;
    }

    total_distance += table.get_index(current, depot_idx);
    stops.push(depot.to_string());

    debug!(stops = stops.len() - 2, total_distance, "route planned");
    Ok(Route::from_parts(stops, total_distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParcelRecord;

    fn vietnam() -> DistanceTable {
        DistanceTable::builder()
            .symmetric("Hanoi", "HCMC", 1700.0)
            .symmetric("Hanoi", "Da Nang", 800.0)
            .symmetric("Hanoi", "Nha Trang", 1300.0)
            .symmetric("Hanoi", "Hai Phong", 100.0)
            .symmetric("Hanoi", "Dalat", 1400.0)
            .symmetric("HCMC", "Da Nang", 850.0)
            .symmetric("HCMC", "Nha Trang", 400.0)
            .symmetric("HCMC", "Hai Phong", 1600.0)
            .symmetric("HCMC", "Dalat", 300.0)
            .symmetric("Da Nang", "Nha Trang", 550.0)
            .symmetric("Da Nang", "Hai Phong", 900.0)
            .symmetric("Da Nang", "Dalat", 600.0)
            .symmetric("Nha Trang", "Hai Phong", 1250.0)
            .symmetric("Nha Trang", "Dalat", 250.0)
            .symmetric("Hai Phong", "Dalat", 1350.0)
            .build()
            .expect("complete table")
    }

    fn batch(destinations: &[&str]) -> SelectedBatch {
        let mut b = SelectedBatch::new();
        for (i, d) in destinations.iter().enumerate() {
            b.push(ParcelRecord::new(i.to_string(), "p", 1.0, 1.0, *d));
        }
        b
    }

    #[test]
    fn test_two_city_tour() {
        let route = plan(&batch(&["HCMC", "Da Nang"]), &vietnam(), "Hanoi").expect("planned");
        assert_eq!(route.stops(), &["Hanoi", "Da Nang", "HCMC", "Hanoi"]);
        // 800 + 850 + 1700
        assert!((route.total_distance() - 3350.0).abs() < 1e-10);
    }

    #[test]
    fn test_all_cities() {
        let route = plan(
            &batch(&["HCMC", "Da Nang", "Nha Trang", "Hai Phong", "Dalat"]),
            &vietnam(),
            "Hanoi",
        )
        .expect("planned");
        // Hanoi→Hai Phong(100)→Da Nang(900)→Nha Trang(550)→Dalat(250)→HCMC(300)→Hanoi(1700)
        assert_eq!(
            route.stops(),
            &["Hanoi", "Hai Phong", "Da Nang", "Nha Trang", "Dalat", "HCMC", "Hanoi"]
        );
        assert!((route.total_distance() - 3800.0).abs() < 1e-10);
    }

    #[test]
    fn test_duplicates_visited_once() {
        let route = plan(&batch(&["Dalat", "Dalat", "Dalat"]), &vietnam(), "Hanoi").expect("planned");
        assert_eq!(route.stops(), &["Hanoi", "Dalat", "Hanoi"]);
        assert!((route.total_distance() - 2800.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_batch_stays_at_depot() {
        let route = plan(&SelectedBatch::new(), &vietnam(), "Hanoi").expect("planned");
        assert_eq!(route.stops(), &["Hanoi"]);
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_depot_destination_is_a_stop() {
        let route = plan(&batch(&["Hanoi"]), &vietnam(), "Hanoi").expect("planned");
        assert_eq!(route.stops(), &["Hanoi", "Hanoi", "Hanoi"]);
        assert_eq!(route.deliveries(), &["Hanoi".to_string()]);
        assert_eq!(route.total_distance(), 0.0);

        let route = plan(&batch(&["Hai Phong", "Hanoi"]), &vietnam(), "Hanoi").expect("planned");
        assert_eq!(route.stops(), &["Hanoi", "Hanoi", "Hai Phong", "Hanoi"]);
        assert!(route.deliveries().iter().any(|c| c == "Hanoi"));
        assert!((route.total_distance() - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_batch_with_unknown_depot() {
        let route = plan(&SelectedBatch::new(), &vietnam(), "Z").expect("no lookup needed");
        assert_eq!(route.stops(), &["Z"]);
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_unknown_destination_fails() {
        let table = DistanceTable::builder()
            .symmetric("Hanoi", "HCMC", 1700.0)
            .build()
            .expect("complete");
        let err = plan(&batch(&["HCMC", "Hue"]), &table, "Hanoi").expect_err("Hue unknown");
        assert!(matches!(err, DispatchError::Lookup { ref city } if city == "Hue"));
    }

    #[test]
    fn test_unknown_depot_fails() {
        let err = plan(&batch(&["HCMC"]), &vietnam(), "Hue").expect_err("depot unknown");
        assert!(matches!(err, DispatchError::Lookup { ref city } if city == "Hue"));
    }

    #[test]
    fn test_tie_broken_by_city_name() {
        let table = DistanceTable::builder()
            .symmetric("Depot", "Zeta", 10.0)
            .symmetric("Depot", "Alpha", 10.0)
            .symmetric("Alpha", "Zeta", 4.0)
            .build()
            .expect("complete");
        let route = plan(&batch(&["Zeta", "Alpha"]), &table, "Depot").expect("planned");
        assert_eq!(route.stops(), &["Depot", "Alpha", "Zeta", "Depot"]);
        assert!((route.total_distance() - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_plan_destinations_directly() {
        let route = plan_destinations(["Nha Trang", "HCMC"], &vietnam(), "HCMC").expect("planned");
        assert_eq!(route.stops(), &["HCMC", "Nha Trang", "HCMC"]);
        assert!((route.total_distance() - 800.0).abs() < 1e-10);
    }
}
