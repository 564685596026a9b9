use std::collections::HashMap;

use approx::assert_relative_eq;
use clinic_analytics::{project, CalculatorDefaults, CalculatorParams, CalculatorView, ProjectionInput};

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_default_calculator_page() {
    let params = CalculatorParams::from_query(&query(&[]), &CalculatorDefaults::default());
    let view = CalculatorView::build(params).unwrap();

    assert_eq!(view.years, 30);
    assert_eq!(view.yearly_data.len(), 30);
    assert_eq!(view.yearly_data.last().unwrap().value_at_year_end, view.final_value);
    assert_relative_eq!(view.total_contributions, 190_000.0);
    // 10k at 10% with 500/month for 30 years lands a little over 1.3M
    assert!(view.final_value > 1_300_000.0 && view.final_value < 1_350_000.0);
    assert_relative_eq!(view.interest_earned, view.final_value - view.total_contributions);
}

#[test]
fn test_garbage_query_matches_defaults() {
    let garbage = query(&[("initial", "ten"), ("monthly", ""), ("return", "x%"), ("years", "thirty")]);
    let from_garbage = CalculatorParams::from_query(&garbage, &CalculatorDefaults::default());
    let from_empty = CalculatorParams::from_query(&query(&[]), &CalculatorDefaults::default());
    assert_eq!(from_garbage, from_empty);
}

#[test]
fn test_view_serializes_for_template() {
    let params = CalculatorParams::from_query(&query(&[("years", "3")]), &CalculatorDefaults::default());
    let view = CalculatorView::build(params).unwrap();

    let json: serde_json::Value = serde_json::to_value(&view).unwrap();
    assert_eq!(json["years"], 3);
    assert_eq!(json["yearly_data"].as_array().unwrap().len(), 3);
    assert_eq!(json["yearly_data"][0]["year"], 1);
    assert!(json["yearly_data_json"].as_str().unwrap().starts_with('['));
}

#[test]
fn test_yearly_series_invariants() {
    for years in [0u32, 1, 7, 25] {
        let result = project(&ProjectionInput::new(5_000.0, 200.0, 6.5, years));
        assert_eq!(result.yearly_data.len(), years as usize);
        for (i, point) in result.yearly_data.iter().enumerate() {
            assert_eq!(point.year as usize, i + 1);
        }
        if years == 0 {
            assert_eq!(result.final_value, 5_000.0);
        }
    }
}
