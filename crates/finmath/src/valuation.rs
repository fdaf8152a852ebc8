//! Time-value-of-money valuation formulas.
//!
//! Each function is a closed-form engineering economics factor evaluated in `f64`:
//!
//! | Function | Factor | Meaning |
//! |----------|--------|---------|
//! | [`compound_interest`] | (F/P, i, n) | Single payment compound amount |
//! | [`pv`] | (P/A, i, n) | Series present worth |
//! | [`fv`] | (F/A, i, n) | Series compound amount |
//! | [`pmt`] | (A/P, i, n) | Capital recovery |
//! | [`pmtf`] | (A/F, i, n) | Sinking fund |
//! | [`pmtg`] | (A/G, i, n) | Arithmetic gradient uniform series |
//! | [`pvg`] | (P/G, i, n) | Arithmetic gradient present worth |
//!
//! `rate` is the rate per period and `periods` the number of periods; both are plain
//! `f64` and `periods` acts as a continuous exponent.
//!
//! # Zero Rate
//!
//! Every factor except [`compound_interest`] divides by `rate`. At `rate == 0.0` the result is
//! infinity or NaN. The zero-rate limit (e.g. `rent * periods` for [`pv`]) is deliberately not
//! substituted; callers that need it must special-case it themselves, or use
//! [`crate::checked`] to detect the singularity.

/// Value of `start` after `periods` accruing interest at `rate`.
///
/// A.k.a. single payment compound amount (F/P, i, n). Pass a negative `periods` for the
/// reverse, single payment present worth (P/F, i, n).
///
/// `rate == -1.0` with positive `periods` yields `0`. `rate < -1.0` with non-integer
/// `periods` yields NaN.
///
/// # Example
///
/// ```rust
/// use finmath::compound_interest;
///
/// assert_eq!(compound_interest(1000.0, 2.0, 0.2), 1440.0);
/// ```
#[inline]
pub fn compound_interest(start: f64, periods: f64, rate: f64) -> f64 {
    start * (1.0 + rate).powf(periods)
}

/// Amount to put down now in order to receive `rent` for `periods` periods at `rate`.
///
/// A.k.a. series present worth (P/A, i, n).
///
/// # Example
///
/// Receiving 1200 monthly over 15 years on an instrument earning 4.5% annually:
///
/// ```rust
/// use finmath::{pv, rtc};
///
/// assert_eq!(rtc(pv(1200.0, 15.0 * 12.0, 0.045 / 12.0)), 156864.12);
/// ```
#[inline]
pub fn pv(rent: f64, periods: f64, rate: f64) -> f64 {
    rent / rate * (1.0 - (1.0 + rate).powf(-periods))
}

/// Future value of `rent` paid each period for `periods` periods earning `rate`.
///
/// A.k.a. series compound amount (F/A, i, n). For any non-zero rate,
/// `fv(a, n, r) == pv(a, n, r) * (1 + r)^n` up to floating-point error.
#[inline]
pub fn fv(rent: f64, periods: f64, rate: f64) -> f64 {
    ((1.0 + rate).powf(periods) - 1.0) / rate * rent
}

/// Periodic payment that repays `pv` over `periods` at `rate`.
///
/// A.k.a. capital recovery (A/P, i, n), the inverse of [`pv`]. This is the payment on a
/// fixed-rate mortgage: for a 30-year loan paid monthly at 4.5%, `periods = 360` and
/// `rate = 0.045 / 12`.
#[inline]
pub fn pmt(pv: f64, periods: f64, rate: f64) -> f64 {
    pv * rate / (1.0 - (1.0 + rate).powf(-periods))
}

/// Periodic deposit required to reach `fv` after `periods` earning `rate` each period.
///
/// A.k.a. sinking fund (A/F, i, n). Undefined (NaN) when `rate == 0.0` or `periods == 0.0`.
#[inline]
pub fn pmtf(fv: f64, periods: f64, rate: f64) -> f64 {
    fv * rate / ((1.0 + rate).powf(periods) - 1.0)
}

/// Sinking fund payment when a starting balance `sv` already earns the same `rate`.
///
/// The accrued value of `sv` is subtracted from the target before computing [`pmtf`]. A
/// negative result means the starting balance alone overshoots `fv`.
///
/// # Example
///
/// ```rust
/// use finmath::{pmtfs, rtc};
///
/// assert_eq!(rtc(pmtfs(5000.0, 500.0, 5.0, 0.07)), 747.51);
/// ```
#[inline]
pub fn pmtfs(fv: f64, sv: f64, periods: f64, rate: f64) -> f64 {
    let accrued = compound_interest(sv, periods, rate);
    pmtf(fv - accrued, periods, rate)
}

/// Uniform payment equivalent to costs growing by `gradient` each period.
///
/// A.k.a. arithmetic gradient uniform series (A/G, i, n), or the annual worth of an
/// arithmetic gradient. If maintenance grows by 250 per period and money earns 1% per
/// period for 10 periods, the equivalent payment is `pmtg(250.0, 10.0, 0.01)`.
#[inline]
pub fn pmtg(gradient: f64, periods: f64, rate: f64) -> f64 {
    let x = (1.0 + rate).powf(periods);
    gradient * ((x - rate * periods - 1.0) / (rate * x - rate))
}

/// Present worth of a series growing or shrinking by `gradient` each period.
///
/// A.k.a. arithmetic gradient present worth (P/G, i, n).
#[inline]
pub fn pvg(gradient: f64, periods: f64, rate: f64) -> f64 {
    let x = (1.0 + rate).powf(periods);
    gradient * ((x - rate * periods - 1.0) / (rate * rate * x))
}
