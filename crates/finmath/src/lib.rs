//! # FinMath
//!
//! Closed-form time-value-of-money formulas for engineering economics.
//!
//! This crate provides:
//!
//! - **Valuation**: Compound interest, annuity present/future value, amortized payment,
//!   sinking fund payment, and arithmetic gradient factors
//! - **Rounding**: Round-to-cent and truncate-to-cent helpers
//! - **Checked**: Opt-in wrappers that classify non-finite results as [`DomainError`]
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: No state, no I/O, safe to call from any thread
//! - **IEEE-754 Semantics**: Invalid domains (e.g. a zero rate) surface as infinity or NaN,
//!   never as a panic
//! - **Bit Compatibility**: Results match the classic `f64` formulas exactly, including their
//!   rounding asymmetries
//!
//! Everything is computed in `f64`. Use it with reservation for computations that require
//! arbitrary precision.
//!
//! ## Example
//!
//! ```rust
//! use finmath::prelude::*;
//!
//! // 30-year mortgage of 350,000 at 3.625% annual, paid monthly.
//! let payment = pmt(350_000.0, 360.0, 0.03625 / 12.0);
//! assert_eq!(rtc(payment), 1596.18);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod checked;
pub mod error;
pub mod rounding;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DomainError, DomainResult};
    pub use crate::rounding::{ftc, rtc};
    pub use crate::valuation::{compound_interest, fv, pmt, pmtf, pmtfs, pmtg, pv, pvg};
}

pub use error::{DomainError, DomainResult};
pub use rounding::{ftc, rtc};
pub use valuation::{compound_interest, fv, pmt, pmtf, pmtfs, pmtg, pv, pvg};
