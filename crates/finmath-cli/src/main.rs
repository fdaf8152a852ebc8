//! FinMath CLI - time-value-of-money calculator.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session
//! finmath
//!
//! # Monthly payment on a 30-year mortgage of 350,000 at 3.625%
//! finmath eval pmt 350000 360 0.003020833333333333
//!
//! # Sinking fund with a starting balance, as JSON
//! finmath --format json eval pmtfs 5000 500 5 0.07
//!
//! # Available formulas
//! finmath list
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod formula;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::execute(&settings)?,
        Commands::Eval(args) => commands::eval::execute(args, &settings)?,
        Commands::List => commands::list::execute(settings.format)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only calculator output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
