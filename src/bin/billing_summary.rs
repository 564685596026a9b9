//! Summarize a CSV invoice snapshot for the billing dashboard
//!
//! Usage: cargo run --bin billing_summary -- data/invoices_sample.csv --status pending

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use clinic_analytics::billing::{filter_invoices, load_invoices};
use clinic_analytics::{summarize, BillingSummary, Invoice, StatusFilter};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "billing_summary", about = "Summarize invoices by status")]
struct Args {
    /// CSV snapshot with InvoiceNumber,Status,IssueDate,DueDate,Subtotal,Tax,Total
    path: PathBuf,

    /// Only list invoices with this status ("all" lists everything)
    #[arg(long)]
    status: Option<String>,

    /// Reference date for aging, YYYY-MM-DD (default today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Mirrors the invoice list page: filtered rows plus the unfiltered summary
#[derive(Debug, Serialize)]
struct Report<'a> {
    status_filter: &'a str,
    invoices: Vec<&'a Invoice>,
    summary: BillingSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let invoices = load_invoices(&args.path)
        .with_context(|| format!("failed to load invoices from {}", args.path.display()))?;

    let filter = StatusFilter::from_query(args.status.as_deref());
    let summary = summarize(&invoices);
    let listed = filter_invoices(&invoices, &filter);

    if args.json {
        let report = Report {
            status_filter: filter.as_str(),
            invoices: listed,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:<14} {:<10} {:>12} {:>12}", "Invoice", "Status", "Due", "Total");
    println!("{}", "-".repeat(51));
    for invoice in &listed {
        println!(
            "{:<14} {:<10} {:>12} {:>12.2}",
            invoice.invoice_number, invoice.status, invoice.due_date.to_string(), invoice.total
        );
    }
    println!("({} of {} invoices, filter: {})", listed.len(), invoices.len(), filter.as_str());

    println!("\nSummary:");
    println!("  Unpaid:          {:>4}  ${:.2}", summary.unpaid_count, summary.unpaid_amount);
    println!("  Overdue:         {:>4}  ${:.2}", summary.overdue_count, summary.overdue_amount);
    println!("  Paid:            {:>4}  ${:.2}", summary.paid_count, summary.paid_amount);
    println!("  Total Revenue:         ${:.2}", summary.total_revenue);
    println!("  Collection Rate:       {:.1}%", summary.collection_rate);

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    if let Some(oldest) = invoices.iter().max_by_key(|inv| inv.days_past_due(as_of)) {
        let days = oldest.days_past_due(as_of);
        if days > 0 {
            println!("  Oldest Past Due:       {} ({} days)", oldest.invoice_number, days);
        }
    }

    Ok(())
}
