//! City distance tables.
//!
//! Provides a dense, explicitly symmetric distance table keyed by city
//! identifier, and a builder that validates completeness.

mod table;

pub use table::{DistanceTable, DistanceTableBuilder, NestedDistances};
