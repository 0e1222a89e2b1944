//! Power-law transfer function with a fixed offset.
//!
//! This is the sRGB-style curve without the linear toe segment:
//!
//! ```text
//! encode(L) = (1 + a) * L^(1/gamma) - a
//! decode(V) = ((V + a) / (1 + a))^gamma
//! ```
//!
//! with `a = 0.055`. A single gamma drives both directions.
//!
//! Note that `encode(0)` is `-a`, not zero. The table builder clamps, so
//! the first table entry still lands on 0.
//!
//! # Range
//!
//! - Input: [0, 1]
//! - Output: [-a, 1] for encode, [(a/(1+a))^gamma, 1] for decode

use crate::TransferFunction;

/// Offset `a` of the power-law family.
pub const POWER_LAW_OFFSET: f64 = 0.055;

/// Gamma used when none is given explicitly.
pub const DEFAULT_GAMMA: f64 = 2.4;

/// Power-law curve parameterized by its gamma exponent.
///
/// # Example
///
/// ```rust
/// use blendlut_transfer::{PowerLaw, TransferFunction};
///
/// let curve = PowerLaw::new(2.4);
/// assert!((curve.encode(1.0) - 1.0).abs() < 1e-12);
/// assert!((curve.decode(1.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    /// Gamma exponent. Expected to be positive; not checked.
    pub gamma: f64,
}

impl PowerLaw {
    /// Creates a curve with the given gamma.
    pub const fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Default for PowerLaw {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}

impl TransferFunction for PowerLaw {
    #[inline]
    fn encode(&self, linear: f64) -> f64 {
        (1.0 + POWER_LAW_OFFSET) * linear.powf(1.0 / self.gamma) - POWER_LAW_OFFSET
    }

    #[inline]
    fn decode(&self, encoded: f64) -> f64 {
        ((encoded + POWER_LAW_OFFSET) / (1.0 + POWER_LAW_OFFSET)).powf(self.gamma)
    }

    fn name(&self) -> String {
        format!("power-law (gamma {:?})", self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_endpoints() {
        let curve = PowerLaw::new(2.4);
        assert_abs_diff_eq!(curve.encode(0.0), -POWER_LAW_OFFSET, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.encode(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.decode(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        let curve = PowerLaw::new(2.2);
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = curve.encode(curve.decode(v));
            assert_abs_diff_eq!(v, back, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_midpoint_darkens() {
        // Encoded mid-grey decodes to roughly a fifth of full intensity.
        let linear = PowerLaw::new(2.4).decode(0.5);
        assert_abs_diff_eq!(linear, 0.214, epsilon = 0.01);
    }

    #[test]
    fn test_monotonic() {
        let curve = PowerLaw::new(2.4);
        let mut prev_enc = f64::NEG_INFINITY;
        let mut prev_dec = f64::NEG_INFINITY;
        for i in 0..=255 {
            let x = i as f64 / 255.0;
            let enc = curve.encode(x);
            let dec = curve.decode(x);
            assert!(enc >= prev_enc, "encode not monotonic at {}", x);
            assert!(dec >= prev_dec, "decode not monotonic at {}", x);
            prev_enc = enc;
            prev_dec = dec;
        }
    }

    #[test]
    fn test_default_gamma() {
        assert_eq!(PowerLaw::default().gamma, DEFAULT_GAMMA);
    }
}
