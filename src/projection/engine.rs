//! Monthly compounding projection with annual reporting

use log::debug;
use serde::{Deserialize, Serialize};

use super::state::ProjectionState;
use super::yearly::{growth_multiple, ProjectionResult, YearlyDataPoint};

/// Parameters for a projection run
///
/// Amounts are expected to be finite and non-negative, and the return above
/// -100%. The calling boundary enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Balance at month 0
    pub initial_investment: f64,

    /// Added at the end of every month
    pub monthly_contribution: f64,

    /// Nominal annual return in percent (10.0 = 10%); negative values model losses
    pub annual_return_percent: f64,

    /// Number of whole years to project
    pub years: u32,
}

impl ProjectionInput {
    pub fn new(
        initial_investment: f64,
        monthly_contribution: f64,
        annual_return_percent: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            annual_return_percent,
            years,
        }
    }

    /// Monthly rate as a decimal: percent / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 100.0 / 12.0
    }

    pub fn total_months(&self) -> u64 {
        self.years as u64 * 12
    }

    /// Same parameters with a different annual return
    pub fn with_return(&self, annual_return_percent: f64) -> Self {
        Self {
            annual_return_percent,
            ..*self
        }
    }
}

/// Run a projection
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let monthly_rate = input.monthly_rate();
    let mut state = ProjectionState::from_input(input);
    let mut yearly_data = Vec::new();

    for _month in 1..=input.total_months() {
        state.advance_month(monthly_rate, input.monthly_contribution);

        if state.at_year_end() {
            yearly_data.push(YearlyDataPoint {
                year: state.year(),
                value_at_year_end: state.balance,
                cumulative_contributions: state.cumulative_contributions,
            });
        }
    }

    let final_value = state.balance;
    let total_contributions = state.cumulative_contributions;

    debug!(
        "projected {} years at {}%: final_value={:.2} contributions={:.2}",
        input.years, input.annual_return_percent, final_value, total_contributions
    );

    ProjectionResult {
        final_value,
        total_contributions,
        interest_earned: final_value - total_contributions,
        growth_multiple: growth_multiple(final_value, total_contributions, input.initial_investment),
        yearly_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn default_input() -> ProjectionInput {
        ProjectionInput::new(10_000.0, 500.0, 10.0, 30)
    }

    /// Closed form for growth-then-contribution compounding
    fn future_value(input: &ProjectionInput) -> f64 {
        let r = input.monthly_rate();
        let n = input.total_months() as i32;
        let growth = (1.0 + r).powi(n);
        if r == 0.0 {
            input.initial_investment + input.monthly_contribution * n as f64
        } else {
            input.initial_investment * growth + input.monthly_contribution * (growth - 1.0) / r
        }
    }

    #[test]
    fn test_default_projection() {
        let input = default_input();
        let result = project(&input);

        assert_eq!(result.yearly_data.len(), 30);
        for (i, point) in result.yearly_data.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
        }
        for pair in result.yearly_data.windows(2) {
            assert!(pair[1].value_at_year_end > pair[0].value_at_year_end);
        }

        let last = result.yearly_data.last().unwrap();
        assert_eq!(last.value_at_year_end, result.final_value);
        assert_eq!(last.cumulative_contributions, result.total_contributions);

        assert_relative_eq!(result.final_value, future_value(&input), max_relative = 1e-9);
        assert_relative_eq!(result.total_contributions, 10_000.0 + 500.0 * 360.0);
        assert_relative_eq!(
            result.interest_earned,
            result.final_value - result.total_contributions
        );
        assert_relative_eq!(
            result.growth_multiple,
            result.final_value / result.total_contributions
        );
    }

    #[test]
    fn test_zero_years() {
        let input = ProjectionInput::new(2_500.0, 500.0, 7.0, 0);
        let result = project(&input);

        assert!(result.yearly_data.is_empty());
        assert_eq!(result.final_value, 2_500.0);
        assert_eq!(result.total_contributions, 2_500.0);
        assert_eq!(result.interest_earned, 0.0);
        assert_eq!(result.growth_multiple, 1.0);
    }

    #[test]
    fn test_no_growth_no_contribution() {
        for years in [1, 5, 40] {
            let result = project(&ProjectionInput::new(10_000.0, 0.0, 0.0, years));
            assert_eq!(result.final_value, 10_000.0);
            assert_eq!(result.yearly_data.len(), years as usize);
        }
    }

    #[test]
    fn test_pure_compounding() {
        let input = ProjectionInput::new(1_000.0, 0.0, 12.0, 1);
        let result = project(&input);
        assert_relative_eq!(result.final_value, 1_000.0 * 1.01_f64.powi(12), max_relative = 1e-12);
        assert_relative_eq!(result.total_contributions, 1_000.0);
    }

    #[test]
    fn test_negative_return() {
        let input = ProjectionInput::new(10_000.0, 0.0, -20.0, 3);
        let result = project(&input);

        assert!(result.final_value < 10_000.0);
        assert!(result.interest_earned < 0.0);
        for pair in result.yearly_data.windows(2) {
            assert!(pair[1].value_at_year_end < pair[0].value_at_year_end);
        }
        assert_relative_eq!(result.final_value, future_value(&input), max_relative = 1e-9);
    }

    #[test]
    fn test_contributions_only() {
        let input = ProjectionInput::new(0.0, 100.0, 0.0, 2);
        let result = project(&input);
        assert_abs_diff_eq!(result.final_value, 2_400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.growth_multiple, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nothing_invested() {
        let result = project(&ProjectionInput::new(0.0, 0.0, 10.0, 5));
        assert_eq!(result.final_value, 0.0);
        assert_eq!(result.growth_multiple, 0.0);
    }
}
