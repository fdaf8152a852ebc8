//! Checked variants of every formula.
//!
//! The functions in [`crate::valuation`] and [`crate::rounding`] follow IEEE-754 semantics and
//! return infinity or NaN outside their domain. The wrappers here evaluate exactly the same
//! arithmetic and classify a non-finite result as a [`DomainError`], for callers that want to
//! fail fast rather than inspect special values.
//!
//! ```rust
//! use finmath::checked;
//! use finmath::DomainError;
//!
//! assert!(checked::pmt(350_000.0, 360.0, 0.03625 / 12.0).is_ok());
//! assert!(matches!(
//!     checked::pv(1200.0, 180.0, 0.0),
//!     Err(DomainError::NotANumber { function: "PV" })
//! ));
//! ```

use crate::error::{DomainError, DomainResult};
use crate::{rounding, valuation};

fn check(function: &'static str, value: f64) -> DomainResult<f64> {
    let result = DomainError::classify(function, value);
    if let Err(ref err) = result {
        log::debug!("{err}");
    }
    result
}

/// Checked [`valuation::compound_interest`].
pub fn compound_interest(start: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check(
        "CompoundInterest",
        valuation::compound_interest(start, periods, rate),
    )
}

/// Checked [`valuation::pv`].
pub fn pv(rent: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PV", valuation::pv(rent, periods, rate))
}

/// Checked [`valuation::fv`].
pub fn fv(rent: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("FV", valuation::fv(rent, periods, rate))
}

/// Checked [`valuation::pmt`].
pub fn pmt(pv: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PMT", valuation::pmt(pv, periods, rate))
}

/// Checked [`valuation::pmtf`].
pub fn pmtf(fv: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PMTF", valuation::pmtf(fv, periods, rate))
}

/// Checked [`valuation::pmtfs`].
pub fn pmtfs(fv: f64, sv: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PMTFS", valuation::pmtfs(fv, sv, periods, rate))
}

/// Checked [`valuation::pmtg`].
pub fn pmtg(gradient: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PMTG", valuation::pmtg(gradient, periods, rate))
}

/// Checked [`valuation::pvg`].
pub fn pvg(gradient: f64, periods: f64, rate: f64) -> DomainResult<f64> {
    check("PVG", valuation::pvg(gradient, periods, rate))
}

/// Checked [`rounding::rtc`].
pub fn rtc(v: f64) -> DomainResult<f64> {
    check("RTC", rounding::rtc(v))
}

/// Checked [`rounding::ftc`].
pub fn ftc(v: f64) -> DomainResult<f64> {
    check("FTC", rounding::ftc(v))
}
