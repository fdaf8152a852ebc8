//! Cent rounding helpers.
//!
//! Both helpers scale by 100, round to an integer, and scale back. They are exact
//! reproductions of the classic formulas, so they inherit binary floating-point quirks:
//! `1.115` rounds up because `1.115 * 100.0` evaluates to exactly `111.5`.

/// Rounds `v` to the nearest cent, ties toward positive infinity.
///
/// Computed as `floor(v * 100 + 0.5) / 100`. This is not symmetric under negation:
/// `rtc(0.125) == 0.13` but `rtc(-0.125) == -0.12`.
///
/// # Example
///
/// ```rust
/// use finmath::rtc;
///
/// assert_eq!(rtc(1.115), 1.12);
/// assert_eq!(rtc(1.113), 1.11);
/// ```
#[inline]
pub fn rtc(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}

/// Truncates `v` to the cent, toward zero.
///
/// Computed as `trunc(v * 100) / 100`, so it always reduces magnitude: `ftc(-1.119)` is
/// `-1.11`, not `-1.12`.
#[inline]
pub fn ftc(v: f64) -> f64 {
    (v * 100.0).trunc() / 100.0
}
