//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::commands::EvalArgs;

/// FinMath - time-value-of-money calculator
///
/// Without a command, starts an interactive session reading from standard input.
#[derive(Parser)]
#[command(name = "finmath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value = "table", global = true, env = "FINMATH_FORMAT")]
    pub format: OutputFormat,

    /// How results are reduced to cents
    #[arg(short, long, value_enum, default_value = "nearest", global = true, env = "FINMATH_ROUNDING")]
    pub rounding: RoundingMode,

    /// Report infinite or NaN results as errors
    #[arg(long, global = true, env = "FINMATH_STRICT")]
    pub strict: bool,

    /// Suppress prompts in interactive mode
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Collects the flags that shape evaluation and output.
    pub fn settings(&self) -> Settings {
        Settings {
            format: self.format,
            rounding: self.rounding,
            strict: self.strict,
            quiet: self.quiet,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Evaluate a single formula and exit
    Eval(EvalArgs),

    /// List the available formulas
    List,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Cent rounding applied to displayed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round to the nearest cent (RTC)
    #[default]
    Nearest,
    /// Truncate toward zero (FTC)
    Truncate,
}

impl RoundingMode {
    /// Applies the rounding helper for this mode.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Nearest => finmath::rtc(value),
            Self::Truncate => finmath::ftc(value),
        }
    }

    /// Short name of the helper, as shown next to rounded results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nearest => "RTC",
            Self::Truncate => "FTC",
        }
    }
}

/// Evaluation and output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub rounding: RoundingMode,
    pub strict: bool,
    pub quiet: bool,
}
