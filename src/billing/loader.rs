//! Load invoice snapshots from CSV
//!
//! Expected header: `InvoiceNumber,Status,IssueDate,DueDate,Subtotal,Tax,Total`
//! with ISO dates and plain decimal amounts.

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::info;
use rust_decimal::Decimal;
use thiserror::Error;

use super::invoice::{Invoice, InvoiceStatus, ParseStatusError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read invoice snapshot: {0}")]
    Csv(#[from] csv::Error),

    #[error("invoice {invoice_number}: {source}")]
    Status {
        invoice_number: String,
        #[source]
        source: ParseStatusError,
    },

    #[error("invoice {invoice_number}: bad {column} amount {text:?}: {source}")]
    Amount {
        invoice_number: String,
        column: &'static str,
        text: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("invoice {invoice_number}: negative total {total}")]
    NegativeTotal { invoice_number: String, total: Decimal },
}

/// Raw CSV row matching the snapshot columns
///
/// Amounts stay text until `Decimal::from_str` so no digit passes through a float.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InvoiceNumber")]
    invoice_number: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "IssueDate")]
    issue_date: NaiveDate,
    #[serde(rename = "DueDate")]
    due_date: NaiveDate,
    #[serde(rename = "Subtotal")]
    subtotal: String,
    #[serde(rename = "Tax")]
    tax: String,
    #[serde(rename = "Total")]
    total: String,
}

impl CsvRow {
    fn amount(&self, column: &'static str, text: &str) -> Result<Decimal, LoadError> {
        Decimal::from_str(text).map_err(|source| LoadError::Amount {
            invoice_number: self.invoice_number.clone(),
            column,
            text: text.to_string(),
            source,
        })
    }

    fn into_invoice(self) -> Result<Invoice, LoadError> {
        let status = self
            .status
            .parse::<InvoiceStatus>()
            .map_err(|source| LoadError::Status {
                invoice_number: self.invoice_number.clone(),
                source,
            })?;
        let subtotal = self.amount("Subtotal", &self.subtotal)?;
        let tax = self.amount("Tax", &self.tax)?;
        let total = self.amount("Total", &self.total)?;

        if total < Decimal::ZERO {
            return Err(LoadError::NegativeTotal {
                invoice_number: self.invoice_number,
                total,
            });
        }

        Ok(Invoice {
            invoice_number: self.invoice_number,
            status,
            issue_date: self.issue_date,
            due_date: self.due_date,
            subtotal,
            tax,
            total,
            line_items: Vec::new(),
        })
    }
}

/// Load all invoices from a CSV file
pub fn load_invoices<P: AsRef<Path>>(path: P) -> Result<Vec<Invoice>, LoadError> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let invoices = read_rows(reader)?;
    info!("loaded {} invoices from {}", invoices.len(), path.display());
    Ok(invoices)
}

/// Load invoices from any reader (e.g., string buffer, network stream)
pub fn load_invoices_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Invoice>, LoadError> {
    read_rows(ReaderBuilder::new().trim(Trim::All).from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Invoice>, LoadError> {
    let mut invoices = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        invoices.push(row.into_invoice()?);
    }

    Ok(invoices)
}
