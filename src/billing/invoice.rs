//! Invoice snapshot records as handed over by the billing workflow

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::totals::{compute_totals, TaxPolicy};

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    /// Lowercase name used in snapshots and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    /// Pending and overdue invoices are still owed
    pub fn is_unpaid(&self) -> bool {
        matches!(self, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown invoice status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// A single billed service on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// `unit_price * quantity`
    pub total_price: Decimal,
    pub service_date: NaiveDate,
    pub provider_name: String,
}

impl InvoiceLineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        service_date: NaiveDate,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total_price: unit_price * Decimal::from(quantity),
            service_date,
            provider_name: provider_name.into(),
        }
    }
}

/// Read-only invoice snapshot
///
/// `total` is expected to be non-negative; the aggregator does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<InvoiceLineItem>,
}

impl Invoice {
    /// Create an untaxed invoice carrying only its total
    pub fn new(
        invoice_number: impl Into<String>,
        status: InvoiceStatus,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        total: Decimal,
    ) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            status,
            issue_date,
            due_date,
            subtotal: total,
            tax: Decimal::ZERO,
            total,
            line_items: Vec::new(),
        }
    }

    /// Create an invoice whose amounts are derived from its line items
    pub fn from_line_items(
        invoice_number: impl Into<String>,
        status: InvoiceStatus,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        line_items: Vec<InvoiceLineItem>,
        tax_policy: &TaxPolicy,
    ) -> Self {
        let totals = compute_totals(&line_items, tax_policy);
        Self {
            invoice_number: invoice_number.into(),
            status,
            issue_date,
            due_date,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            line_items,
        }
    }

    /// Whole days past the due date as of `as_of`
    ///
    /// Zero when not yet due, and always zero for paid or cancelled invoices.
    pub fn days_past_due(&self, as_of: NaiveDate) -> i64 {
        if !self.status.is_unpaid() {
            return 0;
        }
        (as_of - self.due_date).num_days().max(0)
    }
}

/// Invoice list filter taken from the `status` query parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InvoiceStatus),
    /// Text that names no status; matches nothing
    Unrecognized(String),
}

impl StatusFilter {
    /// Interpret caller text. Missing means `All`.
    ///
    /// Names match exactly, so `"PENDING"` is unrecognized here even though
    /// the snapshot loader accepts it.
    pub fn from_query(text: Option<&str>) -> Self {
        match text {
            None => StatusFilter::All,
            Some("all") => StatusFilter::All,
            Some(t) => match InvoiceStatus::ALL.into_iter().find(|status| status.as_str() == t) {
                Some(status) => StatusFilter::Only(status),
                None => StatusFilter::Unrecognized(t.to_string()),
            },
        }
    }

    pub fn matches(&self, status: InvoiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }

    /// Echo value for the list view
    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
            StatusFilter::Unrecognized(text) => text,
        }
    }
}

/// Invoices passing `filter`, in input order
pub fn filter_invoices<'a>(invoices: &'a [Invoice], filter: &StatusFilter) -> Vec<&'a Invoice> {
    invoices.iter().filter(|inv| filter.matches(inv.status)).collect()
}
