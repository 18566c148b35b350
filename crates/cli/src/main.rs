//! Ratelab CLI - Simulate adaptive-curve interest rate markets.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_compare, run_simulation};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare(args) => {
            run_compare(&args, cli.format)?;
        }
        Commands::Run(args) => {
            run_simulation(&args, cli.format)?;
        }
    }

    Ok(())
}
