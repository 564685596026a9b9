//! Subtotal, tax and total for an invoice built from line items

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::invoice::InvoiceLineItem;

/// Sales tax applied to invoice subtotals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Fractional rate, e.g. 0.08 for 8%
    pub rate: Decimal,

    /// Decimal places the tax is rounded to
    pub scale: u32,
}

impl TaxPolicy {
    pub fn new(rate: Decimal, scale: u32) -> Self {
        Self { rate, scale }
    }

    /// Tax owed on `subtotal`, rounded half-to-even at `scale`
    pub fn tax_on(&self, subtotal: Decimal) -> Decimal {
        (subtotal * self.rate).round_dp_with_strategy(self.scale, RoundingStrategy::MidpointNearestEven)
    }
}

impl Default for TaxPolicy {
    /// 8% rounded to cents
    fn default() -> Self {
        Self {
            rate: dec!(0.08),
            scale: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Sum line items and apply tax
pub fn compute_totals(line_items: &[InvoiceLineItem], policy: &TaxPolicy) -> InvoiceTotals {
    let subtotal: Decimal = line_items.iter().map(|item| item.total_price).sum();
    let tax = policy.tax_on(subtotal);

    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(unit_price: Decimal, quantity: u32) -> InvoiceLineItem {
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        InvoiceLineItem::new("service", quantity, unit_price, day, "Dr. Smith")
    }

    #[test]
    fn test_default_policy_totals() {
        let items = vec![item(dec!(150.00), 1), item(dec!(250.00), 2)];
        let totals = compute_totals(&items, &TaxPolicy::default());

        assert_eq!(totals.subtotal, dec!(650.00));
        assert_eq!(totals.tax, dec!(52.00));
        assert_eq!(totals.total, dec!(702.00));
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let items = vec![item(dec!(75.00), 1), item(dec!(35.00), 1), item(dec!(95.00), 1)];
        let totals = compute_totals(&items, &TaxPolicy::default());

        // 205.00 * 0.08 = 16.40
        assert_eq!(totals.tax, dec!(16.40));

        let totals = compute_totals(&[item(dec!(12.34), 1)], &TaxPolicy::default());
        // 0.9872 -> 0.99
        assert_eq!(totals.tax, dec!(0.99));
        assert_eq!(totals.tax.scale(), 2);
    }

    #[test]
    fn test_midpoint_rounds_to_even() {
        let policy = TaxPolicy::new(dec!(0.05), 2);
        assert_eq!(policy.tax_on(dec!(0.50)), dec!(0.02));
        assert_eq!(policy.tax_on(dec!(0.70)), dec!(0.04));
    }

    #[test]
    fn test_no_line_items() {
        let totals = compute_totals(&[], &TaxPolicy::default());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
