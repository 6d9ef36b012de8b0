//! Selected batch type.

use serde::Serialize;

use super::ParcelRecord;

/// The parcels loaded onto the vehicle, in loading order.
///
/// Also keeps the identifiers of parcels that were considered but left
/// behind, so callers can report them.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{ParcelRecord, SelectedBatch};
///
/// let mut batch = SelectedBatch::new();
/// batch.push(ParcelRecord::new("P1", "Rice", 250.0, 50.0, "Da Nang"));
/// batch.reject("P2");
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.total_weight(), 250.0);
/// assert_eq!(batch.rejected(), &["P2".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectedBatch {
    parcels: Vec<ParcelRecord>,
    rejected: Vec<String>,
    total_weight: f64,
    total_volume: f64,
}

impl SelectedBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a loaded parcel and updates the running totals.
    pub fn push(&mut self, parcel: ParcelRecord) {
        self.total_weight += parcel.weight();
        self.total_volume += parcel.volume();
        self.parcels.push(parcel);
    }

    /// Records a parcel that did not fit.
    pub fn reject(&mut self, parcel_id: impl Into<String>) {
        self.rejected.push(parcel_id.into());
    }

    /// Loaded parcels in loading order.
    pub fn parcels(&self) -> &[ParcelRecord] {
        &self.parcels
    }

    /// Identifiers of parcels left behind, in evaluation order.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Number of loaded parcels.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// Returns `true` if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Summed weight of the loaded parcels.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Summed volume of the loaded parcels.
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Iterates over destination cities in loading order (with repeats).
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.parcels.iter().map(|p| p.destination())
    }
}
