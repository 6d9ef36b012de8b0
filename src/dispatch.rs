//! End-to-end dispatch of one parcel batch.

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::DispatchConfig;
use crate::error::Result;
use crate::evaluation::{invoice, invoice_total};
use crate::models::{CostRow, ParcelRecord, Route, SelectedBatch};
use crate::routing::plan;
use crate::selection::select;

/// Everything computed for one batch of parcels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchPlan {
    /// Parcels loaded onto the vehicle.
    pub selected: SelectedBatch,
    /// Delivery tour for the loaded parcels.
    pub route: Route,
    /// One priced row per input parcel, loaded or not.
    pub invoice: Vec<CostRow>,
}

impl DispatchPlan {
    /// Sum of all invoice totals.
    pub fn invoice_total(&self) -> f64 {
        invoice_total(&self.invoice)
    }
}

/// Loads, routes and prices a batch.
///
/// Routing only sees the loaded parcels, while the invoice covers every
/// input record.
///
/// # Errors
///
/// Propagates the lookup error of route planning when a loaded parcel's
/// destination is not in the configured table.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::DispatchConfig;
/// use u_dispatch::dispatch::dispatch;
/// use u_dispatch::models::ParcelRecord;
///
/// let records = vec![
///     ParcelRecord::new("1", "Rice", 300.0, 100.0, "HCMC"),
///     ParcelRecord::new("2", "Steel", 250.0, 50.0, "Da Nang"),
/// ];
/// let plan = dispatch(&records, &DispatchConfig::default()).unwrap();
/// assert_eq!(plan.selected.len(), 1);
/// assert_eq!(plan.route.to_string(), "Hanoi → Da Nang → Hanoi");
/// assert_eq!(plan.invoice.len(), 2);
/// ```
#[instrument(level = "info", skip_all, fields(records = records.len(), depot = %config.depot))]
pub fn dispatch(records: &[ParcelRecord], config: &DispatchConfig) -> Result<DispatchPlan> {
    let selected = select(records, &config.capacity);
    let route = plan(&selected, &config.distances, &config.depot)?;
    let invoice = invoice(records, &config.distances, &config.depot, &config.rates);

    info!(
        loaded = selected.len(),
        stops = route.num_deliveries(),
        distance_km = route.total_distance(),
        "dispatch planned"
    );

    Ok(DispatchPlan {
        selected,
        route,
        invoice,
    })
}
