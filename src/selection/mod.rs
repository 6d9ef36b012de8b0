//! Capacity-constrained parcel selection.
//!
//! - [`select`]: Density-ranked first-fit loading under weight and volume limits, O(n log n)

mod density_greedy;

pub use density_greedy::select;
