//! # u-dispatch
//!
//! Single-vehicle parcel dispatch: decides which parcels fit on the truck,
//! in which order to deliver them, and what each delivery costs.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (ParcelRecord, VehicleCapacity, SelectedBatch, Route, CostRow)
//! - [`distance`]: City-keyed, explicitly symmetric distance table
//! - [`selection`]: Density-ranked first-fit loading under weight and volume limits
//! - [`routing`]: Nearest-neighbor delivery tour from and back to the depot
//! - [`evaluation`]: Per-parcel invoice pricing
//! - [`dispatch`]: The three stages composed over one configuration
//! - [`config`]: Depot, capacity, rates and distances, loadable from JSON
//! - [`adapter`]: CSV input, console output and sample batches
//! - [`error`]: Error type shared by all of the above

pub mod adapter;
pub mod config;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod routing;
pub mod selection;
