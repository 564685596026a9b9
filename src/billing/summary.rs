//! Per-status invoice aggregation for the billing dashboard

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoice::{Invoice, InvoiceStatus};

/// Counts and sums over an invoice snapshot
///
/// All amounts are exact decimal sums. `collection_rate` is a percentage and
/// is left unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Pending plus overdue
    pub unpaid_count: usize,
    pub unpaid_amount: Decimal,

    pub overdue_count: usize,
    pub overdue_amount: Decimal,

    pub paid_count: usize,
    pub paid_amount: Decimal,

    /// Sum over every invoice, cancelled included
    pub total_revenue: Decimal,

    /// `paid_amount / total_revenue * 100`, or zero without revenue
    pub collection_rate: Decimal,
}

impl BillingSummary {
    fn add(&mut self, invoice: &Invoice) {
        if invoice.status.is_unpaid() {
            self.unpaid_count += 1;
            self.unpaid_amount += invoice.total;
        }
        match invoice.status {
            InvoiceStatus::Overdue => {
                self.overdue_count += 1;
                self.overdue_amount += invoice.total;
            }
            InvoiceStatus::Paid => {
                self.paid_count += 1;
                self.paid_amount += invoice.total;
            }
            InvoiceStatus::Pending | InvoiceStatus::Cancelled => {}
        }
        self.total_revenue += invoice.total;
    }

    fn finish(mut self) -> Self {
        self.collection_rate = if self.total_revenue > Decimal::ZERO {
            self.paid_amount * Decimal::ONE_HUNDRED / self.total_revenue
        } else {
            Decimal::ZERO
        };
        self
    }
}

/// Summarize an invoice snapshot
pub fn summarize<'a, I>(invoices: I) -> BillingSummary
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut count = 0usize;
    let summary = invoices
        .into_iter()
        .fold(BillingSummary::default(), |mut acc, invoice| {
            count += 1;
            acc.add(invoice);
            acc
        })
        .finish();

    debug!(
        "summarized {} invoices: revenue={} paid={} collection_rate={}",
        count, summary.total_revenue, summary.paid_amount, summary.collection_rate
    );
    summary
}
