//! Delivery route type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// An ordered city tour that starts and ends at the depot.
///
/// A route with at least one delivery stop looks like
/// `[depot, s1, ..., sn, depot]`. A route with no stops is the single
/// element `[depot]` with zero distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Route;
///
/// let route = Route::depot_only("Hanoi");
/// assert_eq!(route.stops(), &["Hanoi".to_string()]);
/// assert_eq!(route.total_distance(), 0.0);
/// assert_eq!(route.num_deliveries(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    stops: Vec<String>,
    total_distance: f64,
}

#[derive(Deserialize)]
struct RawRoute {
    stops: Vec<String>,
    total_distance: f64,
}

impl TryFrom<RawRoute> for Route {
    type Error = DispatchError;

    fn try_from(raw: RawRoute) -> Result<Self> {
        if !(raw.total_distance.is_finite() && raw.total_distance >= 0.0) {
            return Err(DispatchError::config(
                "total_distance",
                format!("must be a non-negative number, got {}", raw.total_distance),
            ));
        }
        match raw.stops.as_slice() {
            [] => return Err(DispatchError::config("stops", "route has no depot")),
            [_] if raw.total_distance != 0.0 => {
                return Err(DispatchError::config(
                    "total_distance",
                    "a depot-only route has zero distance",
                ));
            }
            [_, _] => {
                return Err(DispatchError::config(
                    "stops",
                    "a route leaving the depot needs at least one stop",
                ));
            }
            [first, .., last] if first != last => {
                return Err(DispatchError::config(
                    "stops",
                    format!("route starts at {first} but ends at {last}"),
                ));
            }
            _ => {}
        }
        Ok(Self::from_parts(raw.stops, raw.total_distance))
    }
}

impl Route {
    /// Creates the degenerate route that never leaves the depot.
    pub fn depot_only(depot: impl Into<String>) -> Self {
        Self {
            stops: vec![depot.into()],
            total_distance: 0.0,
        }
    }

    /// Creates a route from its full stop sequence and distance.
    pub(crate) fn from_parts(stops: Vec<String>, total_distance: f64) -> Self {
        Self {
            stops,
            total_distance,
        }
    }

    /// Full stop sequence, including the depot at both ends.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Delivery cities in visiting order (depot excluded).
    pub fn deliveries(&self) -> &[String] {
        if self.stops.len() <= 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of delivery cities.
    pub fn num_deliveries(&self) -> usize {
        self.deliveries().len()
    }

    /// The depot this route starts from.
    pub fn depot(&self) -> &str {
        &self.stops[0]
    }

    /// Sum of the tabulated distances between consecutive stops, in km.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stops.join(" → "))
    }
}
