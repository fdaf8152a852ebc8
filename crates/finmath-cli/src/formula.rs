//! Registry of the formulas the CLI can evaluate.
//!
//! Each [`Formula`] maps a command name to one library function together with its declared
//! parameters. Arity is checked before the function is called.

use finmath::{checked, rounding, valuation};

use crate::error::{CliError, CliResult};

/// A callable formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    CompoundInterest,
    PresentValue,
    FutureValue,
    Payment,
    SinkingFund,
    SinkingFundWithStart,
    GradientPayment,
    GradientPresentValue,
    RoundToCent,
    TruncateToCent,
}

const ALL: [Formula; 10] = [
    Formula::Payment,
    Formula::SinkingFund,
    Formula::SinkingFundWithStart,
    Formula::GradientPayment,
    Formula::GradientPresentValue,
    Formula::CompoundInterest,
    Formula::PresentValue,
    Formula::FutureValue,
    Formula::RoundToCent,
    Formula::TruncateToCent,
];

const PERIODS: &str = "# of periods";
const RATE: &str = "rate per period";

impl Formula {
    /// Every formula, in help order.
    pub fn all() -> &'static [Self] {
        &ALL
    }

    /// Looks up a formula by command name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        ALL.iter().copied().find(|formula| formula.name() == name)
    }

    /// Command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CompoundInterest => "ci",
            Self::PresentValue => "pv",
            Self::FutureValue => "fv",
            Self::Payment => "pmt",
            Self::SinkingFund => "pmtf",
            Self::SinkingFundWithStart => "pmtfs",
            Self::GradientPayment => "pmtg",
            Self::GradientPresentValue => "pvg",
            Self::RoundToCent => "rtc",
            Self::TruncateToCent => "ftc",
        }
    }

    /// Function name used in results and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::CompoundInterest => "CompoundInterest",
            Self::PresentValue => "PV",
            Self::FutureValue => "FV",
            Self::Payment => "PMT",
            Self::SinkingFund => "PMTF",
            Self::SinkingFundWithStart => "PMTFS",
            Self::GradientPayment => "PMTG",
            Self::GradientPresentValue => "PVG",
            Self::RoundToCent => "RTC",
            Self::TruncateToCent => "FTC",
        }
    }

    /// Parameter names, in argument order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::CompoundInterest => &["start value", PERIODS, RATE],
            Self::PresentValue | Self::FutureValue => &["rent", PERIODS, RATE],
            Self::Payment => &["PV", PERIODS, RATE],
            Self::SinkingFund => &["FV", PERIODS, RATE],
            Self::SinkingFundWithStart => &["FV", "SV", PERIODS, RATE],
            Self::GradientPayment | Self::GradientPresentValue => &["gradient", PERIODS, RATE],
            Self::RoundToCent | Self::TruncateToCent => &["value"],
        }
    }

    /// Number of values the formula takes.
    pub fn arity(self) -> usize {
        self.params().len()
    }

    /// One-line description for help output.
    pub fn description(self) -> &'static str {
        match self {
            Self::CompoundInterest => "value of a lump sum after compounding (F/P, i, n)",
            Self::PresentValue => "present worth of a series of equal payments (P/A, i, n)",
            Self::FutureValue => "future worth of a series of equal payments (F/A, i, n)",
            Self::Payment => "periodic payment to repay a loan (A/P, i, n)",
            Self::SinkingFund => "periodic deposit to reach a target (A/F, i, n)",
            Self::SinkingFundWithStart => "periodic deposit to reach a target with a starting balance",
            Self::GradientPayment => "uniform payment equal to an arithmetic gradient (A/G, i, n)",
            Self::GradientPresentValue => "present worth of an arithmetic gradient (P/G, i, n)",
            Self::RoundToCent => "round to the nearest cent",
            Self::TruncateToCent => "truncate to the cent",
        }
    }

    /// Prompt asking for the formula's values, e.g. `Enter PV, # of periods and rate per period`.
    pub fn prompt(self) -> String {
        match self.params() {
            [] => "Enter values".to_string(),
            [only] => format!("Enter {only}"),
            [init @ .., last] => format!("Enter {} and {last}", init.join(", ")),
        }
    }

    /// Fails with [`CliError::ArgumentCount`] unless exactly `arity` values are given.
    pub fn check_arity(self, actual: usize) -> CliResult<()> {
        if actual == self.arity() {
            Ok(())
        } else {
            Err(CliError::ArgumentCount {
                command: self.name(),
                expected: self.arity(),
                actual,
            })
        }
    }

    /// Evaluates the formula, returning infinity or NaN outside its domain.
    pub fn evaluate(self, args: &[f64]) -> CliResult<f64> {
        self.check_arity(args.len())?;
        let value = match self {
            Self::CompoundInterest => valuation::compound_interest(args[0], args[1], args[2]),
            Self::PresentValue => valuation::pv(args[0], args[1], args[2]),
            Self::FutureValue => valuation::fv(args[0], args[1], args[2]),
            Self::Payment => valuation::pmt(args[0], args[1], args[2]),
            Self::SinkingFund => valuation::pmtf(args[0], args[1], args[2]),
            Self::SinkingFundWithStart => valuation::pmtfs(args[0], args[1], args[2], args[3]),
            Self::GradientPayment => valuation::pmtg(args[0], args[1], args[2]),
            Self::GradientPresentValue => valuation::pvg(args[0], args[1], args[2]),
            Self::RoundToCent => rounding::rtc(args[0]),
            Self::TruncateToCent => rounding::ftc(args[0]),
        };
        Ok(value)
    }

    /// Evaluates the formula, rejecting infinite or NaN results.
    pub fn evaluate_checked(self, args: &[f64]) -> CliResult<f64> {
        self.check_arity(args.len())?;
        let value = match self {
            Self::CompoundInterest => checked::compound_interest(args[0], args[1], args[2]),
            Self::PresentValue => checked::pv(args[0], args[1], args[2]),
            Self::FutureValue => checked::fv(args[0], args[1], args[2]),
            Self::Payment => checked::pmt(args[0], args[1], args[2]),
            Self::SinkingFund => checked::pmtf(args[0], args[1], args[2]),
            Self::SinkingFundWithStart => checked::pmtfs(args[0], args[1], args[2], args[3]),
            Self::GradientPayment => checked::pmtg(args[0], args[1], args[2]),
            Self::GradientPresentValue => checked::pvg(args[0], args[1], args[2]),
            Self::RoundToCent => checked::rtc(args[0]),
            Self::TruncateToCent => checked::ftc(args[0]),
        }?;
        Ok(value)
    }
}
