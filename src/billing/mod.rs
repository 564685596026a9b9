//! Invoice billing: status partitions, collection rate and invoice totals

mod invoice;
mod summary;
mod totals;
pub mod loader;

pub use invoice::{filter_invoices, Invoice, InvoiceLineItem, InvoiceStatus, ParseStatusError, StatusFilter};
pub use summary::{summarize, BillingSummary};
pub use totals::{compute_totals, InvoiceTotals, TaxPolicy};
pub use loader::{load_invoices, load_invoices_from_reader, LoadError};
