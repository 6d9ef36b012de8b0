//! Density-ordered first-fit loading.
//!
//! Ranks parcels by weight-to-volume ratio (densest first) and loads each one
//! whose weight and volume still fit in the vehicle. A parcel that does not
//! fit is skipped and later, lighter-ranked parcels are still tried.
//!
//! # Complexity
//!
//! O(n log n) for the sort plus O(n) for the scan.
//!
//! This is a greedy heuristic for the two-dimensional knapsack; it can
//! strand feasible combinations and makes no optimality claim.

use tracing::{debug, instrument, trace};

use crate::models::{ParcelRecord, SelectedBatch, VehicleCapacity};

/// Selects the parcels to load onto the vehicle.
///
/// Parcels are ranked by [`ParcelRecord::density`] descending. The sort is
/// stable, so parcels of equal density keep their input order. Each parcel is
/// accepted iff adding its weight and volume keeps both running totals within
/// `capacity`.
///
/// An empty input yields an empty batch, and a parcel that alone exceeds the
/// capacity is simply left behind.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{ParcelRecord, VehicleCapacity};
/// use u_dispatch::selection::select;
///
/// let parcels = vec![
///     ParcelRecord::new("1", "Rice", 300.0, 100.0, "HCMC"),
///     ParcelRecord::new("2", "Steel", 250.0, 50.0, "Da Nang"),
/// ];
/// let cap = VehicleCapacity::new(500.0, 2000.0).unwrap();
///
/// let batch = select(&parcels, &cap);
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.parcels()[0].destination(), "Da Nang");
/// ```
#[instrument(level = "debug", skip_all, fields(candidates = records.len()))]
pub fn select(records: &[ParcelRecord], capacity: &VehicleCapacity) -> SelectedBatch {
    let mut ranked: Vec<(f64, &ParcelRecord)> = records.iter().map(|p| (p.density(), p)).collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut batch = SelectedBatch::new();
    for (density, parcel) in ranked {
        let weight = batch.total_weight() + parcel.weight();
        let volume = batch.total_volume() + parcel.volume();
        if capacity.admits(weight, volume) {
            trace!(parcel = parcel.id(), density, "loaded");
            batch.push(parcel.clone());
        } else {
            trace!(parcel = parcel.id(), density, weight, volume, "does not fit");
            batch.reject(parcel.id());
        }
    }

    debug!(
        loaded = batch.len(),
        left_behind = batch.rejected().len(),
        weight = batch.total_weight(),
        volume = batch.total_volume(),
        "selection complete"
    );
    batch
}
