//! Vehicle capacity limits.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// Weight and volume limits of the single delivery vehicle.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::VehicleCapacity;
///
/// let cap = VehicleCapacity::new(500.0, 2000.0).unwrap();
/// assert_eq!(cap.max_weight(), 500.0);
/// assert!(cap.admits(250.0, 50.0));
/// assert!(!cap.admits(550.0, 150.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCapacity")]
pub struct VehicleCapacity {
    max_weight: f64,
    max_volume: f64,
}

#[derive(Deserialize)]
struct RawCapacity {
    max_weight: f64,
    max_volume: f64,
}

impl TryFrom<RawCapacity> for VehicleCapacity {
    type Error = DispatchError;

    fn try_from(raw: RawCapacity) -> Result<Self> {
        Self::new(raw.max_weight, raw.max_volume)
    }
}

impl VehicleCapacity {
    /// Creates a capacity; both limits must be positive and finite.
    pub fn new(max_weight: f64, max_volume: f64) -> Result<Self> {
        if !(max_weight.is_finite() && max_weight > 0.0) {
            return Err(DispatchError::config(
                "max_weight",
                format!("must be a positive number, got {max_weight}"),
            ));
        }
        if !(max_volume.is_finite() && max_volume > 0.0) {
            return Err(DispatchError::config(
                "max_volume",
                format!("must be a positive number, got {max_volume}"),
            ));
        }
        Ok(Self {
            max_weight,
            max_volume,
        })
    }

    /// Maximum load weight in kilograms.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Maximum load volume in cubic meters.
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Returns `true` if a load of the given totals fits.
    pub fn admits(&self, weight: f64, volume: f64) -> bool {
        weight <= self.max_weight && volume <= self.max_volume
    }
}

impl Default for VehicleCapacity {
    fn default() -> Self {
        Self {
            max_weight: 500.0,
            max_volume: 2000.0,
        }
    }
}
