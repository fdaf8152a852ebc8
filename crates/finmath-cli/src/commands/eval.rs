//! Eval command implementation.
//!
//! Evaluates one formula from command-line values and exits.

use anyhow::Result;
use clap::Args;

use crate::cli::{OutputFormat, Settings};
use crate::commands::{evaluate, parse_arguments, Evaluation};
use crate::error::CliError;
use crate::formula::Formula;
use crate::output::{format_cents, format_raw, print_header, print_output, print_single, KeyValue};

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Formula to evaluate (see `finmath list`)
    pub formula: String,

    /// Values in the formula's parameter order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, settings: &Settings) -> Result<()> {
    let formula =
        Formula::from_name(&args.formula).ok_or_else(|| CliError::UnknownCommand(args.formula.clone()))?;

    let tokens: Vec<&str> = args.values.iter().map(String::as_str).collect();
    let values = parse_arguments(formula, &tokens)?;
    let evaluation = evaluate(formula, &values, settings)?;

    match settings.format {
        OutputFormat::Table => {
            print_header(&format!("{} ({})", formula.label(), formula.description()));
            print_output(&rows(formula, &values, &evaluation), settings.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&evaluation, settings.format)?,
        OutputFormat::Minimal => println!("{}", format_cents(evaluation.rounded)),
    }

    Ok(())
}

/// Table rows: one per input, then the raw and rounded result.
fn rows(formula: Formula, values: &[f64], evaluation: &Evaluation) -> Vec<KeyValue> {
    let mut rows: Vec<KeyValue> = formula
        .params()
        .iter()
        .zip(values)
        .map(|(name, value)| KeyValue::new(*name, value.to_string()))
        .collect();

    rows.push(KeyValue::new(evaluation.function, format_raw(evaluation.value)));
    rows.push(KeyValue::new(
        format!("{}({})", evaluation.rounding.label(), evaluation.function),
        format_cents(evaluation.rounded),
    ));
    rows
}
