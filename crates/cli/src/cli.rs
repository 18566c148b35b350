//! CLI argument definitions using clap.

use std::path::PathBuf;

use bigdecimal::BigDecimal;
use clap::{Parser, Subcommand, ValueEnum};

/// Ratelab CLI - Simulate adaptive-curve interest rate markets
#[derive(Parser, Debug)]
#[command(name = "ratelab")]
#[command(about = "CLI tool for simulating adaptive-curve interest rate markets", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare accrual periods against a single accrual over the full duration
    Compare(CompareArgs),
    /// Simulate one market at a single accrual period
    Run(RunArgs),
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Duration of the simulation in weeks
    #[arg(long, default_value_t = 10)]
    pub weeks: u64,

    /// Accrual periods to compare, in seconds (comma separated)
    #[arg(long, value_delimiter = ',', default_value = "1000000,600000,200000,20000")]
    pub periods: Vec<u64>,

    /// Decimal digits of working precision (lower is faster)
    #[arg(long, default_value_t = 128, value_parser = clap::value_parser!(u64).range(1..=2048))]
    pub precision: u64,

    /// Initial rate at target utilization, per year (2 means 200%)
    #[arg(long, default_value = "2")]
    pub initial_rate: BigDecimal,

    /// File to write the serialized run series to
    #[arg(long, default_value = "compounds.json")]
    pub out: PathBuf,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Duration of the simulation in weeks
    #[arg(long, default_value_t = 10)]
    pub weeks: u64,

    /// Accrual period in seconds
    #[arg(long)]
    pub period: u64,

    /// Decimal digits of working precision (lower is faster)
    #[arg(long, default_value_t = 128, value_parser = clap::value_parser!(u64).range(1..=2048))]
    pub precision: u64,

    /// Initial rate at target utilization, per year (2 means 200%)
    #[arg(long, default_value = "2")]
    pub initial_rate: BigDecimal,

    /// Number of evenly spaced history rows to report
    #[arg(long, default_value_t = 10)]
    pub samples: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
