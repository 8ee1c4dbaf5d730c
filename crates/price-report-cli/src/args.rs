use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "price-report")]
#[command(about = "Summarize product counts and price ranges per price category")]
#[command(version)]
pub struct Cli {
    /// Inventory file (`~` expands to the home directory)
    pub input: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: $PRICE_REPORT_CONFIG if set)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum quantity for a product to be reported (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    pub min_quantity: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
