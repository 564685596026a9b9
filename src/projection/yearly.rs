//! Projection output structures

use std::io;

use serde::{Deserialize, Serialize};

/// Snapshot at a whole-year boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyDataPoint {
    /// 1-indexed year
    pub year: u32,
    pub value_at_year_end: f64,
    pub cumulative_contributions: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_value: f64,

    /// Initial investment plus all monthly contributions
    pub total_contributions: f64,

    /// `final_value - total_contributions`
    pub interest_earned: f64,

    pub growth_multiple: f64,

    /// One point per elapsed year, in order
    pub yearly_data: Vec<YearlyDataPoint>,
}

impl ProjectionResult {
    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            years: self.yearly_data.len() as u32,
            final_value: self.final_value,
            total_contributions: self.total_contributions,
            interest_earned: self.interest_earned,
            growth_multiple: self.growth_multiple,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_value: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
    pub growth_multiple: f64,
}

/// Final value over what was put in
///
/// Falls back to the initial investment when nothing was contributed, and to
/// zero when neither is positive.
pub fn growth_multiple(final_value: f64, total_contributions: f64, initial_investment: f64) -> f64 {
    if total_contributions > 0.0 {
        final_value / total_contributions
    } else if initial_investment > 0.0 {
        final_value / initial_investment
    } else {
        0.0
    }
}

#[derive(Serialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "ValueAtYearEnd")]
    value_at_year_end: String,
    #[serde(rename = "CumulativeContributions")]
    cumulative_contributions: String,
}

/// Write the yearly series as CSV, amounts to cents
pub fn write_yearly_csv<W: io::Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    for point in &result.yearly_data {
        wtr.serialize(CsvRow {
            year: point.year,
            value_at_year_end: format!("{:.2}", point.value_at_year_end),
            cumulative_contributions: format!("{:.2}", point.cumulative_contributions),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
