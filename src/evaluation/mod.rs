//! Cost evaluation.
//!
//! Prices each parcel from its weight, volume and depot distance.

mod invoice;

pub use invoice::{invoice, invoice_total, round_money, InvoiceCalculator};
