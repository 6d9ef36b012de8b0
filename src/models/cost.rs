//! Cost rates and invoice rows.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// Proportional pricing constants.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::CostRates;
///
/// let rates = CostRates::new(50.0, 20.0, 100.0).unwrap();
/// assert_eq!(rates.per_kg_km(), 50.0);
/// assert!(CostRates::new(-1.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRates")]
pub struct CostRates {
    per_kg_km: f64,
    per_m3_km: f64,
    per_km: f64,
}

#[derive(Deserialize)]
struct RawRates {
    per_kg_km: f64,
    per_m3_km: f64,
    per_km: f64,
}

impl TryFrom<RawRates> for CostRates {
    type Error = DispatchError;

    fn try_from(raw: RawRates) -> Result<Self> {
        Self::new(raw.per_kg_km, raw.per_m3_km, raw.per_km)
    }
}

impl CostRates {
    /// Creates rates; every rate must be finite and non-negative.
    pub fn new(per_kg_km: f64, per_m3_km: f64, per_km: f64) -> Result<Self> {
        for (field, value) in [
            ("per_kg_km", per_kg_km),
            ("per_m3_km", per_m3_km),
            ("per_km", per_km),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DispatchError::config(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }
        Ok(Self {
            per_kg_km,
            per_m3_km,
            per_km,
        })
    }

    /// Rate per kilogram per kilometer.
    pub fn per_kg_km(&self) -> f64 {
        self.per_kg_km
    }

    /// Rate per cubic meter per kilometer.
    pub fn per_m3_km(&self) -> f64 {
        self.per_m3_km
    }

    /// Flat rate per kilometer.
    pub fn per_km(&self) -> f64 {
        self.per_km
    }
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            per_kg_km: 50.0,
            per_m3_km: 20.0,
            per_km: 100.0,
        }
    }
}

/// One invoice line for a single parcel.
///
/// Money fields are rounded to two decimals. `total_cost` is rounded from the
/// sum of the unrounded components, so it can differ by a cent from the sum
/// of the displayed components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRow {
    /// Parcel identifier.
    pub parcel_id: String,
    /// Parcel display name.
    pub name: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Volume in cubic meters.
    pub volume: f64,
    /// Destination city.
    pub destination: String,
    /// Weight × distance × per-kg-km rate.
    pub weight_cost: f64,
    /// Volume × distance × per-m³-km rate.
    pub volume_cost: f64,
    /// Distance × per-km rate.
    pub distance_cost: f64,
    /// Sum of the three components.
    pub total_cost: f64,
}
