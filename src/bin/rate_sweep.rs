//! Sweep the calculator across a grid of annual rates and horizons
//!
//! Prints the final figures per (rate, horizon) pair and writes them to CSV

use anyhow::Context;
use clap::Parser;
use kaizen::projection::{monthly_rate, PerformanceMetrics, ProjectionInput};
use kaizen::ScenarioRunner;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "rate_sweep", about = "Compound projections over a grid of rates and horizons")]
struct Args {
    #[arg(long, default_value_t = 1000.0)]
    initial: f64,

    #[arg(long, default_value_t = 500.0)]
    monthly: f64,

    /// Annual rates in percent
    #[arg(long, value_delimiter = ',', default_value = "6,8,10,12,14")]
    rates: Vec<f64>,

    /// Horizons in months
    #[arg(long, value_delimiter = ',', default_value = "12,24,60,120")]
    months: Vec<u32>,

    #[arg(long, default_value = "rate_sweep_output.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    annual_rate_pct: f64,
    months: u32,
    final_amount: f64,
    total_invested: f64,
    total_interest: f64,
    total_return_pct: Option<f64>,
    doubling_time_months: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let mut rows = Vec::with_capacity(args.rates.len() * args.months.len());
    for &rate in &args.rates {
        let base = ProjectionInput::with_annual_percent(args.initial, args.monthly, rate, 1);
        let runner = ScenarioRunner::new(base);
        let results = runner
            .sweep_horizons(&args.months)
            .with_context(|| format!("Projection failed at {}% a year", rate))?;

        for result in &results {
            let metrics = PerformanceMetrics::from_result(result, monthly_rate(rate));
            rows.push(SweepRow {
                annual_rate_pct: rate,
                months: result.periods,
                final_amount: result.final_amount,
                total_invested: result.total_invested,
                total_interest: result.total_interest,
                total_return_pct: metrics.total_return_pct,
                doubling_time_months: metrics.doubling_time_months,
            });
        }
    }

    println!("Ran {} projections in {:?}", rows.len(), start.elapsed());
    println!(
        "{:>7} {:>6} {:>14} {:>14} {:>14} {:>9}",
        "Rate%", "Months", "Final", "Invested", "Interest", "Return%"
    );
    println!("{}", "-".repeat(69));
    for row in &rows {
        println!(
            "{:>7.2} {:>6} {:>14.2} {:>14.2} {:>14.2} {:>9}",
            row.annual_rate_pct,
            row.months,
            row.final_amount,
            row.total_invested,
            row.total_interest,
            row.total_return_pct.map_or("n/a".to_string(), |p| format!("{:.2}", p)),
        );
    }

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {:?}", args.output))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("\nResults written to: {}", args.output.display());
    Ok(())
}
