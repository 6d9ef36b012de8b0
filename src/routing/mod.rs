//! Delivery tour construction.
//!
//! - [`plan`]: Nearest-neighbor tour over a batch's distinct destinations, O(n²)
//! - [`plan_destinations`]: Same heuristic over an explicit list of cities

mod nearest_neighbor;

pub use nearest_neighbor::{plan, plan_destinations};
