//! Clinic Analytics - billing aggregation and investment projection engines
//!
//! This library provides:
//! - Per-status invoice summaries with an exact-decimal collection rate
//! - Invoice totalling from line items with configurable sales tax
//! - CSV invoice snapshot loading
//! - Monthly-compounding investment projections with yearly reporting
//! - The calculator's calling boundary (caller text to validated parameters)
//! - Parallel scenario sweeps

pub mod billing;
pub mod calculator;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use billing::{summarize, BillingSummary, Invoice, InvoiceStatus, StatusFilter, TaxPolicy};
pub use calculator::{CalculatorDefaults, CalculatorParams, CalculatorView};
pub use projection::{project, ProjectionInput, ProjectionResult, YearlyDataPoint};
pub use scenario::ScenarioRunner;
