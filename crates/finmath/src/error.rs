//! Error types for checked formula evaluation.

use thiserror::Error;

/// A specialized Result type for checked formula evaluation.
pub type DomainResult<T> = Result<T, DomainError>;

/// A formula was evaluated outside the domain where it yields a finite value.
///
/// The unchecked functions never produce this; they return the IEEE-754 special value
/// instead. Only the wrappers in [`crate::checked`] construct it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The result is not a number (e.g. `0 / 0`, or a negative base raised to a
    /// fractional power).
    #[error("{function} is undefined for the given inputs (result is NaN)")]
    NotANumber {
        /// Name of the formula that was evaluated.
        function: &'static str,
    },

    /// The result diverged to positive or negative infinity.
    #[error("{function} diverges for the given inputs (result is {value})")]
    Infinite {
        /// Name of the formula that was evaluated.
        function: &'static str,
        /// The infinite value, preserving its sign.
        value: f64,
    },
}

impl DomainError {
    /// Classifies a formula result, passing finite values through untouched.
    pub fn classify(function: &'static str, value: f64) -> DomainResult<f64> {
        if value.is_nan() {
            Err(Self::NotANumber { function })
        } else if value.is_infinite() {
            Err(Self::Infinite { function, value })
        } else {
            Ok(value)
        }
    }

    /// Name of the formula that produced the error.
    #[must_use]
    pub fn function(&self) -> &'static str {
        match self {
            Self::NotANumber { function } | Self::Infinite { function, .. } => function,
        }
    }
}
