//! Investment calculator CLI
//!
//! Flags take raw text and go through the same calling boundary as the web
//! calculator, so bad values fall back to defaults instead of aborting.

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_analytics::calculator::{INITIAL_KEY, MONTHLY_KEY, RETURN_KEY, YEARS_KEY};
use clinic_analytics::projection::write_yearly_csv;
use clinic_analytics::{project, CalculatorDefaults, CalculatorParams, CalculatorView};

#[derive(Debug, Parser)]
#[command(name = "clinic_analytics", about = "Project an investment with monthly contributions")]
struct Args {
    /// Initial investment (default 10000)
    #[arg(long)]
    initial: Option<String>,

    /// Monthly contribution (default 500)
    #[arg(long)]
    monthly: Option<String>,

    /// Annual return in percent (default 10)
    #[arg(long = "return")]
    annual_return: Option<String>,

    /// Whole years to project (default 30)
    #[arg(long)]
    years: Option<String>,

    /// Print the calculator view as JSON
    #[arg(long)]
    json: bool,

    /// Write the yearly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Args {
    fn query(&self) -> HashMap<String, String> {
        [
            (INITIAL_KEY, &self.initial),
            (MONTHLY_KEY, &self.monthly),
            (RETURN_KEY, &self.annual_return),
            (YEARS_KEY, &self.years),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = CalculatorParams::from_query(&args.query(), &CalculatorDefaults::default());

    if args.json {
        let view = CalculatorView::build(params).context("failed to encode yearly data")?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_table(&params);
    }

    if let Some(path) = &args.csv {
        let result = project(&params.into_input());
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        write_yearly_csv(&result, file).with_context(|| format!("unable to write {}", path.display()))?;
        eprintln!("Yearly data written to: {}", path.display());
    }

    Ok(())
}

fn print_table(params: &CalculatorParams) {
    let result = project(&params.into_input());

    println!("Investment Projection");
    println!("=====================\n");
    println!("  Initial Investment:   ${:.2}", params.initial_investment);
    println!("  Monthly Contribution: ${:.2}", params.monthly_contribution);
    println!("  Annual Return:        {}%", params.annual_return_percent);
    println!("  Years:                {}", params.years);
    println!();

    println!("{:>5} {:>18} {:>18} {:>18}", "Year", "Value", "Contributions", "Interest");
    println!("{}", "-".repeat(62));
    for point in &result.yearly_data {
        println!(
            "{:>5} {:>18.2} {:>18.2} {:>18.2}",
            point.year,
            point.value_at_year_end,
            point.cumulative_contributions,
            point.value_at_year_end - point.cumulative_contributions,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final Value:          ${:.2}", summary.final_value);
    println!("  Total Contributions:  ${:.2}", summary.total_contributions);
    println!("  Interest Earned:      ${:.2}", summary.interest_earned);
    println!("  Growth Multiple:      {:.2}x", summary.growth_multiple);
}
