//! Per-parcel delivery pricing.

use tracing::{debug, instrument, warn};

use crate::distance::DistanceTable;
use crate::models::{CostRates, CostRow, ParcelRecord};

/// Prices parcels by weight, volume and their destination's distance from
/// the depot.
///
/// Pricing is lenient about unknown cities: a destination (or depot) missing
/// from the table is priced at distance 0 rather than failing. Route planning
/// treats the same situation as an error.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceTable;
/// use u_dispatch::evaluation::InvoiceCalculator;
/// use u_dispatch::models::{CostRates, ParcelRecord};
///
/// let table = DistanceTable::builder()
///     .symmetric("Hanoi", "Da Nang", 800.0)
///     .build()
///     .unwrap();
/// let rates = CostRates::new(50.0, 20.0, 100.0).unwrap();
///
/// let calculator = InvoiceCalculator::new(&table, "Hanoi", &rates);
/// let row = calculator.price(&ParcelRecord::new("P1", "Tea", 10.0, 5.0, "Da Nang"));
/// assert_eq!(row.weight_cost, 400_000.0);
/// assert_eq!(row.volume_cost, 80_000.0);
/// assert_eq!(row.distance_cost, 80_000.0);
/// assert_eq!(row.total_cost, 560_000.0);
/// ```
pub struct InvoiceCalculator<'a> {
    table: &'a DistanceTable,
    depot: &'a str,
    rates: &'a CostRates,
}

impl<'a> InvoiceCalculator<'a> {
    /// Creates a calculator for the given pricing data.
    pub fn new(table: &'a DistanceTable, depot: &'a str, rates: &'a CostRates) -> Self {
        Self {
            table,
            depot,
            rates,
        }
    }

    /// Distance billed for a destination: the depot distance, or 0 if the
    /// table does not know the city.
    pub fn billed_distance(&self, destination: &str) -> f64 {
        match self.table.get(self.depot, destination) {
            Some(d) => d,
            None => {
                warn!(
                    destination,
                    depot = self.depot,
                    "destination not in distance table, billing zero distance"
                );
                0.0
            }
        }
    }

    /// Builds the invoice row for one parcel.
    pub fn price(&self, parcel: &ParcelRecord) -> CostRow {
        let distance = self.billed_distance(parcel.destination());

        let weight_cost = parcel.weight() * distance * self.rates.per_kg_km();
        let volume_cost = parcel.volume() * distance * self.rates.per_m3_km();
        let distance_cost = distance * self.rates.per_km();
        // Summed before rounding.
        let total_cost = weight_cost + volume_cost + distance_cost;

        CostRow {
            parcel_id: parcel.id().to_string(),
            name: parcel.name().to_string(),
            weight: parcel.weight(),
            volume: parcel.volume(),
            destination: parcel.destination().to_string(),
            weight_cost: round_money(weight_cost),
            volume_cost: round_money(volume_cost),
            distance_cost: round_money(distance_cost),
            total_cost: round_money(total_cost),
        }
    }

    /// Prices every record, preserving input order.
    #[instrument(level = "debug", skip_all, fields(records = records.len()))]
    pub fn invoice(&self, records: &[ParcelRecord]) -> Vec<CostRow> {
        let rows: Vec<CostRow> = records.iter().map(|p| self.price(p)).collect();
        debug!(total = invoice_total(&rows), "invoice computed");
        rows
    }
}

/// Prices every record against its destination's depot distance.
///
/// One row per input record, in input order. See [`InvoiceCalculator`].
pub fn invoice(
    records: &[ParcelRecord],
    table: &DistanceTable,
    depot: &str,
    rates: &CostRates,
) -> Vec<CostRow> {
    InvoiceCalculator::new(table, depot, rates).invoice(records)
}

/// Sum of the rounded `total_cost` column, rounded to two decimals.
pub fn invoice_total(rows: &[CostRow]) -> f64 {
    round_money(rows.iter().map(|r| r.total_cost).sum())
}

/// Rounds a money amount to two decimals, halves away from zero.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
