//! Domain model types for single-vehicle dispatch.
//!
//! Provides the core abstractions: parcels with weight, volume and a
//! destination, the vehicle's two-dimensional capacity, the batch loaded
//! onto it, the delivery route, and the pricing types used for invoicing.

mod batch;
mod capacity;
mod cost;
mod parcel;
mod route;

pub use batch::SelectedBatch;
pub use capacity::VehicleCapacity;
pub use cost::{CostRates, CostRow};
pub use parcel::ParcelRecord;
pub use route::Route;
