//! List command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::formula::Formula;
use crate::output::{print_header, print_output};

/// One registry entry for display.
#[derive(Debug, Serialize, Tabled)]
pub struct FormulaRow {
    #[tabled(rename = "Command")]
    pub command: &'static str,
    #[tabled(rename = "Function")]
    pub function: &'static str,
    #[tabled(rename = "Parameters")]
    pub parameters: String,
    #[tabled(rename = "Description")]
    pub description: &'static str,
}

impl From<Formula> for FormulaRow {
    fn from(formula: Formula) -> Self {
        Self {
            command: formula.name(),
            function: formula.label(),
            parameters: formula.params().join(", "),
            description: formula.description(),
        }
    }
}

/// Execute the list command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<FormulaRow> = Formula::all().iter().copied().map(FormulaRow::from).collect();

    if format == OutputFormat::Table {
        print_header("Available Formulas");
    }
    print_output(&rows, format)
}
