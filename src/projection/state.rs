//! Running balances carried from month to month

use super::engine::ProjectionInput;

/// State of an investment at a month boundary
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Months elapsed (0 before the first month)
    pub month: u64,

    /// Current balance
    pub balance: f64,

    /// Initial investment plus every contribution made so far
    pub cumulative_contributions: f64,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            month: 0,
            balance: input.initial_investment,
            cumulative_contributions: input.initial_investment,
        }
    }

    /// Advance one month: grow the opening balance, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, monthly_contribution: f64) {
        self.month += 1;
        self.balance = self.balance * (1.0 + monthly_rate) + monthly_contribution;
        self.cumulative_contributions += monthly_contribution;
    }

    /// Whole years elapsed
    pub fn year(&self) -> u32 {
        (self.month / 12) as u32
    }

    /// True right after the 12th, 24th, ... month
    pub fn at_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }
}
