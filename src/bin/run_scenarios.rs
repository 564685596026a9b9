//! Compare projections across a range of annual returns
//!
//! Usage: cargo run --bin run_scenarios -- --rates 0,4,7,10 --years 40
//!
//! Base flags go through the calculator's calling boundary, so bad values fall
//! back to defaults. A bad rate aborts the sweep.

use std::collections::HashMap;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_analytics::calculator::{parse_return_percent, ParamError, INITIAL_KEY, MONTHLY_KEY, RETURN_KEY, YEARS_KEY};
use clinic_analytics::{CalculatorDefaults, CalculatorParams, ProjectionInput, ScenarioRunner};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "run_scenarios", about = "Sweep annual returns over a base projection")]
struct Args {
    /// Annual returns in percent, comma separated
    #[arg(long, value_delimiter = ',', default_value = "0,2,4,6,8,10,12")]
    rates: Vec<String>,

    /// Initial investment (default 10000)
    #[arg(long)]
    initial: Option<String>,

    /// Monthly contribution (default 500)
    #[arg(long)]
    monthly: Option<String>,

    /// Whole years to project (default 30)
    #[arg(long)]
    years: Option<String>,
}

impl Args {
    fn base_input(&self) -> ProjectionInput {
        let query: HashMap<String, String> = [
            (INITIAL_KEY, &self.initial),
            (MONTHLY_KEY, &self.monthly),
            (YEARS_KEY, &self.years),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect();

        CalculatorParams::from_query(&query, &CalculatorDefaults::default()).into_input()
    }

    fn parsed_rates(&self) -> Result<Vec<f64>, ParamError> {
        self.rates
            .iter()
            .map(|text| parse_return_percent(RETURN_KEY, text))
            .collect()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let base = args.base_input();
    let rates = args.parsed_rates().context("invalid --rates")?;

    let start = Instant::now();
    let runner = ScenarioRunner::with_input(base);
    let results = runner.sweep_returns(&rates);
    info!("ran {} scenarios in {:?}", results.len(), start.elapsed());

    println!(
        "Base: initial ${:.2}, monthly ${:.2}, {} years\n",
        base.initial_investment, base.monthly_contribution, base.years
    );
    println!("{:>8} {:>18} {:>18} {:>18} {:>8}", "Return", "Final Value", "Contributions", "Interest", "Multiple");
    println!("{}", "-".repeat(74));
    for (rate, result) in &results {
        let summary = result.summary();
        println!(
            "{:>7}% {:>18.2} {:>18.2} {:>18.2} {:>7.2}x",
            rate, summary.final_value, summary.total_contributions, summary.interest_earned, summary.growth_multiple
        );
    }

    Ok(())
}
