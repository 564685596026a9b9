//! Calling boundary for the investment calculator
//!
//! Caller text arrives under the keys `initial`, `monthly`, `return` and
//! `years`. Each field is parsed on its own; anything missing, unparseable or
//! out of range falls back to the configured default, so building params never
//! fails.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projection::{project, ProjectionInput, YearlyDataPoint};

pub const INITIAL_KEY: &str = "initial";
pub const MONTHLY_KEY: &str = "monthly";
pub const RETURN_KEY: &str = "return";
pub const YEARS_KEY: &str = "years";

/// Longest horizon accepted from caller text
pub const MAX_YEARS: u32 = 100;

/// Default calculator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub years: u32,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            initial_investment: 10_000.0,
            monthly_contribution: 500.0,
            annual_return_percent: 10.0,
            years: 30,
        }
    }
}

impl CalculatorDefaults {
    pub fn to_input(&self) -> ProjectionInput {
        ProjectionInput::new(
            self.initial_investment,
            self.monthly_contribution,
            self.annual_return_percent,
            self.years,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field}: {text:?} is not a number")]
    NotANumber { field: &'static str, text: String },

    #[error("{field}: {text:?} is not a whole number of years")]
    NotAnInteger { field: &'static str, text: String },

    #[error("{field}: {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Read access to raw query parameters
pub trait QuerySource {
    fn get_param(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> QuerySource for HashMap<String, String, S> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl QuerySource for BTreeMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, ParamError> {
    let value: f64 = text.trim().parse().map_err(|_| ParamError::NotANumber {
        field,
        text: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParamError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Parse a money amount: finite and non-negative
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64, ParamError> {
    let value = parse_number(field, text)?;
    if value < 0.0 {
        return Err(ParamError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Parse an annual return in percent: finite and above -100
pub fn parse_return_percent(field: &'static str, text: &str) -> Result<f64, ParamError> {
    let value = parse_number(field, text)?;
    if value <= -100.0 {
        return Err(ParamError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Parse a whole number of years in `0..=MAX_YEARS`
pub fn parse_years(field: &'static str, text: &str) -> Result<u32, ParamError> {
    let years: u32 = text.trim().parse().map_err(|_| ParamError::NotAnInteger {
        field,
        text: text.to_string(),
    })?;
    if years > MAX_YEARS {
        return Err(ParamError::OutOfRange {
            field,
            value: f64::from(years),
        });
    }
    Ok(years)
}

fn field_or_default<Q, T, F>(query: &Q, field: &'static str, default: T, parse: F) -> T
where
    Q: QuerySource + ?Sized,
    T: Copy + std::fmt::Display,
    F: Fn(&'static str, &str) -> Result<T, ParamError>,
{
    match query.get_param(field) {
        None => default,
        Some(text) => parse(field, text).unwrap_or_else(|err| {
            warn!("{}; using default {}", err, default);
            default
        }),
    }
}

/// Validated calculator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorParams {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub annual_return_percent: f64,
    pub years: u32,
}

impl CalculatorParams {
    /// Resolve params from caller text, defaulting field by field
    pub fn from_query<Q: QuerySource + ?Sized>(query: &Q, defaults: &CalculatorDefaults) -> Self {
        Self {
            initial_investment: field_or_default(query, INITIAL_KEY, defaults.initial_investment, parse_amount),
            monthly_contribution: field_or_default(query, MONTHLY_KEY, defaults.monthly_contribution, parse_amount),
            annual_return_percent: field_or_default(
                query,
                RETURN_KEY,
                defaults.annual_return_percent,
                parse_return_percent,
            ),
            years: field_or_default(query, YEARS_KEY, defaults.years, parse_years),
        }
    }

    pub fn into_input(self) -> ProjectionInput {
        ProjectionInput::new(
            self.initial_investment,
            self.monthly_contribution,
            self.annual_return_percent,
            self.years,
        )
    }
}

impl From<CalculatorDefaults> for CalculatorParams {
    fn from(defaults: CalculatorDefaults) -> Self {
        Self {
            initial_investment: defaults.initial_investment,
            monthly_contribution: defaults.monthly_contribution,
            annual_return_percent: defaults.annual_return_percent,
            years: defaults.years,
        }
    }
}

/// Everything the calculator page renders
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub annual_return: f64,
    pub years: u32,
    pub final_value: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
    pub growth_multiple: f64,
    pub yearly_data: Vec<YearlyDataPoint>,
    /// `yearly_data` pre-encoded for embedding in a chart script
    pub yearly_data_json: String,
}

impl CalculatorView {
    /// Project `params` and assemble the view
    pub fn build(params: CalculatorParams) -> serde_json::Result<Self> {
        let result = project(&params.into_input());
        let yearly_data_json = serde_json::to_string(&result.yearly_data)?;

        Ok(Self {
            initial_investment: params.initial_investment,
            monthly_contribution: params.monthly_contribution,
            annual_return: params.annual_return_percent,
            years: params.years,
            final_value: result.final_value,
            total_contributions: result.total_contributions,
            interest_earned: result.interest_earned,
            growth_multiple: result.growth_multiple,
            yearly_data: result.yearly_data,
            yearly_data_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let params = CalculatorParams::from_query(&query(&[]), &CalculatorDefaults::default());
        assert_eq!(params, CalculatorParams::from(CalculatorDefaults::default()));
        assert_eq!(params.initial_investment, 10_000.0);
        assert_eq!(params.monthly_contribution, 500.0);
        assert_eq!(params.annual_return_percent, 10.0);
        assert_eq!(params.years, 30);
    }

    #[test]
    fn test_overrides() {
        let q = query(&[("initial", "2500"), ("monthly", " 250.5 "), ("return", "-3"), ("years", "12")]);
        let params = CalculatorParams::from_query(&q, &CalculatorDefaults::default());
        assert_eq!(params.initial_investment, 2_500.0);
        assert_eq!(params.monthly_contribution, 250.5);
        assert_eq!(params.annual_return_percent, -3.0);
        assert_eq!(params.years, 12);
    }

    #[test]
    fn test_bad_fields_fall_back_independently() {
        let q = query(&[("initial", "lots"), ("monthly", "100"), ("return", "NaN"), ("years", "7.5")]);
        let params = CalculatorParams::from_query(&q, &CalculatorDefaults::default());
        assert_eq!(params.initial_investment, 10_000.0);
        assert_eq!(params.monthly_contribution, 100.0);
        assert_eq!(params.annual_return_percent, 10.0);
        assert_eq!(params.years, 30);
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(parse_amount("initial", "-1"), Err(ParamError::OutOfRange { .. })));
        assert!(matches!(parse_amount("initial", "inf"), Err(ParamError::OutOfRange { .. })));
        assert!(matches!(parse_return_percent("return", "-100"), Err(ParamError::OutOfRange { .. })));
        assert_eq!(parse_return_percent("return", "-99.5").unwrap(), -99.5);
        assert!(matches!(parse_years("years", "-4"), Err(ParamError::NotAnInteger { .. })));
        assert_eq!(parse_years("years", "0").unwrap(), 0);
        assert_eq!(parse_years("years", "100").unwrap(), MAX_YEARS);
        assert!(matches!(parse_years("years", "101"), Err(ParamError::OutOfRange { .. })));
    }

    #[test]
    fn test_huge_years_falls_back() {
        let q = query(&[("years", "4294967295"), ("initial", "100")]);
        let params = CalculatorParams::from_query(&q, &CalculatorDefaults::default());
        assert_eq!(params.years, 30);
        assert_eq!(params.initial_investment, 100.0);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = CalculatorDefaults {
            initial_investment: 1.0,
            monthly_contribution: 2.0,
            annual_return_percent: 3.0,
            years: 4,
        };
        let params = CalculatorParams::from_query(&BTreeMap::<String, String>::new(), &defaults);
        assert_eq!(params.into_input(), defaults.to_input());
    }

    #[test]
    fn test_view_embeds_yearly_json() {
        let q = query(&[("years", "2"), ("return", "0"), ("initial", "100"), ("monthly", "10")]);
        let params = CalculatorParams::from_query(&q, &CalculatorDefaults::default());
        let view = CalculatorView::build(params).unwrap();

        assert_eq!(view.years, 2);
        assert_eq!(view.yearly_data.len(), 2);
        assert_eq!(view.final_value, 340.0);

        let decoded: Vec<YearlyDataPoint> = serde_json::from_str(&view.yearly_data_json).unwrap();
        assert_eq!(decoded, view.yearly_data);
    }
}
