//! CLI command implementations.

pub mod eval;
pub mod list;
pub mod repl;

pub use eval::EvalArgs;

use serde::Serialize;
use tracing::debug;

use crate::cli::{RoundingMode, Settings};
use crate::error::{CliError, CliResult};
use crate::formula::Formula;
use crate::output::{format_cents, format_raw};

/// Parses whitespace-separated tokens as the formula's values.
///
/// The count is checked against the formula's arity before any token is parsed.
pub fn parse_arguments(formula: Formula, tokens: &[&str]) -> CliResult<Vec<f64>> {
    formula.check_arity(tokens.len())?;
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| CliError::InvalidNumber((*token).to_string()))
        })
        .collect()
}

/// The outcome of evaluating one formula.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub command: &'static str,
    pub function: &'static str,
    pub inputs: String,
    pub value: f64,
    pub rounded: f64,
    pub rounding: RoundingMode,
}

impl Evaluation {
    /// One-line summary, e.g. `PMT: 1596.179557 RTC(PMT): 1596.18`.
    pub fn summary(&self) -> String {
        format!(
            "{function}: {raw} {helper}({function}): {cents}",
            function = self.function,
            raw = format_raw(self.value),
            helper = self.rounding.label(),
            cents = format_cents(self.rounded),
        )
    }
}

/// Evaluates a formula on parsed values using the configured rounding and strictness.
pub fn evaluate(formula: Formula, args: &[f64], settings: &Settings) -> CliResult<Evaluation> {
    let value = if settings.strict {
        formula.evaluate_checked(args)?
    } else {
        formula.evaluate(args)?
    };
    let rounded = settings.rounding.apply(value);
    debug!(command = formula.name(), ?args, value, rounded, "evaluated");

    Ok(Evaluation {
        command: formula.name(),
        function: formula.label(),
        inputs: args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        value,
        rounded,
        rounding: settings.rounding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let args = parse_arguments(Formula::Payment, &["350000", "360", "0.0030208333"]).unwrap();
        assert_eq!(args, vec![350000.0, 360.0, 0.0030208333]);
    }

    #[test]
    fn test_parse_arguments_counts_before_parsing() {
        let err = parse_arguments(Formula::SinkingFundWithStart, &["5000", "abc"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::ArgumentCount {
                expected: 4,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_arguments_rejects_non_numeric() {
        let err = parse_arguments(Formula::RoundToCent, &["12,50"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber(ref token) if token == "12,50"));
    }

    #[test]
    fn test_evaluate_summary() {
        let settings = Settings::default();
        let evaluation =
            evaluate(Formula::SinkingFund, &[5000.0, 5.0, 0.07], &settings).unwrap();
        assert_eq!(evaluation.rounded, 869.45);
        assert!(evaluation.summary().starts_with("PMTF: 869.45"));
        assert!(evaluation.summary().ends_with("RTC(PMTF): 869.45"));
        assert_eq!(evaluation.inputs, "5000 5 0.07");
    }

    #[test]
    fn test_evaluate_truncating() {
        let settings = Settings {
            rounding: RoundingMode::Truncate,
            ..Settings::default()
        };
        let evaluation = evaluate(Formula::Payment, &[350_000.0, 360.0, 0.03625 / 12.0], &settings)
            .unwrap();
        assert_eq!(evaluation.rounded, 1596.17);
        assert!(evaluation.summary().ends_with("FTC(PMT): 1596.17"));
    }

    #[test]
    fn test_evaluate_strict() {
        let lenient = evaluate(Formula::FutureValue, &[100.0, 12.0, 0.0], &Settings::default())
            .unwrap();
        assert!(lenient.value.is_nan());
        assert_eq!(lenient.summary(), "FV: NaN RTC(FV): NaN");

        let strict = Settings {
            strict: true,
            ..Settings::default()
        };
        let err = evaluate(Formula::FutureValue, &[100.0, 12.0, 0.0], &strict).unwrap_err();
        assert!(matches!(err, CliError::Domain(_)));
    }
}
