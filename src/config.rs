//! Process-wide dispatch configuration.
//!
//! Bundles the depot, vehicle capacity, cost rates and distance table. The
//! built-in default is the Hanoi network with the standard truck and tariff;
//! any field can be overridden from a JSON document such as
//!
//! ```json
//! {
//!   "depot": "Hanoi",
//!   "capacity": { "max_weight": 500, "max_volume": 2000 },
//!   "rates": { "per_kg_km": 50, "per_m3_km": 20, "per_km": 100 },
//!   "distances": { "Hanoi": { "HCMC": 1700 }, "HCMC": { "Hanoi": 1700 } }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::distance::DistanceTable;
use crate::error::{DispatchError, Result};
use crate::models::{CostRates, VehicleCapacity};

/// Depot of the built-in network.
pub const DEFAULT_DEPOT: &str = "Hanoi";

/// Road distances (km) of the built-in network, one entry per city pair.
const DEFAULT_DISTANCES: [(&str, &str, f64); 15] = [
    ("Hanoi", "HCMC", 1700.0),
    ("Hanoi", "Da Nang", 800.0),
    ("Hanoi", "Nha Trang", 1300.0),
    ("Hanoi", "Hai Phong", 100.0),
    ("Hanoi", "Dalat", 1400.0),
    ("HCMC", "Da Nang", 850.0),
    ("HCMC", "Nha Trang", 400.0),
    ("HCMC", "Hai Phong", 1600.0),
    ("HCMC", "Dalat", 300.0),
    ("Da Nang", "Nha Trang", 550.0),
    ("Da Nang", "Hai Phong", 900.0),
    ("Da Nang", "Dalat", 600.0),
    ("Nha Trang", "Hai Phong", 1250.0),
    ("Nha Trang", "Dalat", 250.0),
    ("Hai Phong", "Dalat", 1350.0),
];

/// Builds the distance table of the built-in network.
pub fn default_network() -> DistanceTable {
    DEFAULT_DISTANCES
        .iter()
        .fold(DistanceTable::builder(), |b, &(from, to, km)| {
            b.symmetric(from, to, km)
        })
        .build()
        .expect("built-in network is complete and symmetric")
}

/// Configuration shared by every dispatch stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// City where every route starts and ends.
    pub depot: String,
    /// Vehicle limits.
    pub capacity: VehicleCapacity,
    /// Pricing constants.
    pub rates: CostRates,
    /// City-to-city distances.
    pub distances: DistanceTable,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT.to_string(),
            capacity: VehicleCapacity::default(),
            rates: CostRates::default(),
            distances: default_network(),
        }
    }
}

impl DispatchConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DispatchError::config("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| DispatchError::config("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            depot = %config.depot,
            cities = config.distances.size(),
            "loaded dispatch configuration"
        );
        Ok(config)
    }

    /// Checks cross-field constraints: the depot must be a city of the table.
    pub fn validate(&self) -> Result<()> {
        if !self.distances.contains(&self.depot) {
            return Err(DispatchError::config(
                "depot",
                format!("depot `{}` is not a city of the distance table", self.depot),
            ));
        }
        Ok(())
    }
}
