use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regime_cli::scenario;
use regime_core::compare;
use regime_core::currency::format_inr;
use regime_core::models::BreakdownLine;

/// Compare old and new regime income tax for taxpayer scenarios.
///
/// Reads one scenario per CSV row (see the scenario module docs for the
/// column list), computes both regimes, and prints the breakdowns and
/// recommendations for each.
#[derive(Parser, Debug)]
#[command(name = "regime-compare")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing taxpayer scenarios
    #[arg(short, long)]
    file: PathBuf,

    /// Only print the verdict and recommendations, skipping the breakdowns
    #[arg(short, long, default_value_t = false)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scenarios = scenario::load_from_file(&args.file)
        .with_context(|| format!("Failed to load scenarios from: {}", args.file.display()))?;

    println!("Loaded {} scenario(s) from {}", scenarios.len(), args.file.display());

    for (index, input) in scenarios.iter().enumerate() {
        let result = compare(input);

        println!();
        println!("=== Scenario {} ===", index + 1);

        if !args.summary {
            print_breakdown("Old regime", &result.old_regime_breakdown);
            print_breakdown("New regime", &result.new_regime_breakdown);
        }

        println!();
        println!("Recommendations:");
        for (n, recommendation) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", n + 1, recommendation);
        }
    }

    Ok(())
}

fn print_breakdown(title: &str, lines: &[BreakdownLine]) {
    println!();
    println!("{title}:");
    for line in lines {
        println!("  {:<30} {:>14}", line.label, format_inr(line.amount));
    }
}
