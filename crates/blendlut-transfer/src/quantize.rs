//! Quantization of normalized values onto integer code values.
//!
//! Rounding is half-up, `floor(x + 0.5)`, not Rust's `f64::round`
//! (half away from zero) and not banker's rounding. The two differ for
//! negative halves, which do occur: `encode(0)` is negative on the
//! power-law curve.

/// Rounds half-up: `floor(x + 0.5)`.
///
/// Saturates at the `i64` range; NaN maps to 0.
///
/// # Example
///
/// ```rust
/// use blendlut_transfer::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(2.49), 2);
/// ```
#[inline]
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Scales a normalized value by `max_value`, rounds half-up and clamps
/// to `[0, max_value]`.
///
/// # Example
///
/// ```rust
/// use blendlut_transfer::quantize;
///
/// assert_eq!(quantize(0.5, 31), 16);
/// assert_eq!(quantize(-0.055, 31), 0);
/// assert_eq!(quantize(1.2, 31), 31);
/// ```
#[inline]
pub fn quantize(normalized: f64, max_value: u32) -> u32 {
    let scaled = normalized * max_value as f64;
    round_half_up(scaled).clamp(0, max_value as i64) as u32
}
