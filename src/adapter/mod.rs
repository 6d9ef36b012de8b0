//! Input and output collaborators around the dispatch core.
//!
//! The core only sees [`ParcelRecord`]s going in and [`Route`]s and
//! [`CostRow`]s coming out; these traits are the seams where loaders and
//! renderers plug in.
//!
//! - [`CsvRecordSource`]: Parcel records from CSV with schema checks
//! - [`ConsolePresenter`]: Text rendering of selections, routes and invoices
//! - [`sample_records`]: Reproducible random parcel batches

mod console;
mod csv_source;
mod sample;

pub use console::ConsolePresenter;
pub use csv_source::{write_records, CsvRecordSource};
pub use sample::sample_records;

use crate::error::Result;
use crate::models::{CostRow, ParcelRecord, Route, SelectedBatch};

/// Supplies the parcel batch to dispatch.
///
/// Implementations are responsible for schema validation and report missing
/// or malformed fields as [`DispatchError::Configuration`](crate::error::DispatchError::Configuration).
pub trait RecordSource {
    /// Loads every parcel record of the batch.
    fn load_records(&mut self) -> Result<Vec<ParcelRecord>>;
}

impl RecordSource for Vec<ParcelRecord> {
    fn load_records(&mut self) -> Result<Vec<ParcelRecord>> {
        Ok(self.clone())
    }
}

/// Consumes dispatch results for display or export.
pub trait Presenter {
    /// Shows the loaded parcels, or that none fit.
    fn present_selection(&mut self, batch: &SelectedBatch) -> Result<()>;

    /// Shows the delivery tour and its length.
    fn present_route(&mut self, route: &Route) -> Result<()>;

    /// Shows the invoice rows.
    fn present_invoice(&mut self, rows: &[CostRow]) -> Result<()>;
}
