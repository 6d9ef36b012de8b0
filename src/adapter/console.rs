//! Plain-text presentation of dispatch results.

use std::io::Write;

use super::Presenter;
use crate::error::Result;
use crate::evaluation::invoice_total;
use crate::models::{CostRow, Route, SelectedBatch};

const INVOICE_HEADINGS: [&str; 9] = [
    "Parcel ID",
    "Name",
    "Weight (kg)",
    "Volume (m³)",
    "Destination",
    "Weight Cost (VND)",
    "Volume Cost (VND)",
    "Distance Cost (VND)",
    "Total Cost (VND)",
];

const COLUMN_WIDTH: usize = 20;

/// Writes selections, routes and invoices as console text.
///
/// # Examples
///
/// ```
/// use u_dispatch::adapter::{ConsolePresenter, Presenter};
/// use u_dispatch::models::Route;
///
/// let mut out = Vec::new();
/// ConsolePresenter::new(&mut out)
///     .present_route(&Route::depot_only("Hanoi"))
///     .unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Total Distance: 0 km"));
/// ```
pub struct ConsolePresenter<W> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    /// Wraps an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_cells<'c>(&mut self, cells: impl IntoIterator<Item = &'c str>) -> Result<()> {
        let line: Vec<String> = cells
            .into_iter()
            .map(|c| format!("{c:<COLUMN_WIDTH$}"))
            .collect();
        writeln!(self.out, "{}", line.join(" | ").trim_end())?;
        Ok(())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present_selection(&mut self, batch: &SelectedBatch) -> Result<()> {
        if batch.is_empty() {
            writeln!(self.out, "No parcels could be selected within truck capacity.")?;
            return Ok(());
        }
        writeln!(self.out, "Selected Parcels:")?;
        for p in batch.parcels() {
            writeln!(
                self.out,
                "{}: Weight={}kg, Volume={}m³",
                p.destination(),
                p.weight(),
                p.volume()
            )?;
        }
        writeln!(
            self.out,
            "Load: {}kg, {}m³ ({} left behind)",
            batch.total_weight(),
            batch.total_volume(),
            batch.rejected().len()
        )?;
        Ok(())
    }

    fn present_route(&mut self, route: &Route) -> Result<()> {
        writeln!(self.out, "Delivery Route: {route}")?;
        writeln!(self.out, "Total Distance: {} km", route.total_distance())?;
        Ok(())
    }

    fn present_invoice(&mut self, rows: &[CostRow]) -> Result<()> {
        self.write_cells(INVOICE_HEADINGS)?;
        let rule = "-".repeat(INVOICE_HEADINGS.len() * (COLUMN_WIDTH + 3) - 3);
        writeln!(self.out, "{rule}")?;
        for row in rows {
            let cells = [
                row.parcel_id.clone(),
                row.name.clone(),
                row.weight.to_string(),
                row.volume.to_string(),
                row.destination.clone(),
                format!("{:.2}", row.weight_cost),
                format!("{:.2}", row.volume_cost),
                format!("{:.2}", row.distance_cost),
                format!("{:.2}", row.total_cost),
            ];
            self.write_cells(cells.iter().map(String::as_str))?;
        }
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Total (VND): {:.2}", invoice_total(rows))?;
        Ok(())
    }
}
