//! Parcel record type.

use serde::{Deserialize, Serialize};

/// A parcel awaiting dispatch.
///
/// Records are immutable once built; every stage reads them through the
/// accessors and none of them mutates a record.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::ParcelRecord;
///
/// let p = ParcelRecord::new("P1", "Rice", 300.0, 100.0, "HCMC");
/// assert_eq!(p.id(), "P1");
/// assert_eq!(p.destination(), "HCMC");
/// assert!((p.density() - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelRecord {
    id: String,
    name: String,
    weight: f64,
    volume: f64,
    destination: String,
}

impl ParcelRecord {
    /// Creates a new parcel record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        volume: f64,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            volume,
            destination: destination.into(),
        }
    }

    /// Identifier, unique within a batch.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Destination city identifier.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Weight-to-volume ratio used to rank parcels for loading.
    ///
    /// A zero volume is treated as a volume of 1, so the density of a
    /// volumeless parcel equals its weight.
    pub fn density(&self) -> f64 {
        let divisor = if self.volume == 0.0 { 1.0 } else { self.volume };
        self.weight / divisor
    }
}
