//! Forward and inverse transfer curves quantized to code values.
//!
//! A pair of 1D tables over the `2^bits` code values of a [`BitDepth`]:
//!
//! - `forward[v]`: encoded code value for linear intensity `v / max`
//! - `inverse[v]`: linear intensity for encoded `v / max`, scaled back to
//!   `[0, max]` (not a `[0, 1]` fraction)
//!
//! Every entry is rounded half-up and clamped to `[0, max]`.

use crate::{BitDepth, CurveMode, LutError, LutResult};
use blendlut_transfer::{quantize, PowerLaw, TransferFunction};
use tracing::trace;

/// Quantized forward/inverse curve pair for one bit depth.
///
/// # Example
///
/// ```rust
/// use blendlut_lut::{BitDepth, TransferCurves};
/// use blendlut_transfer::PowerLaw;
///
/// let curves = TransferCurves::build(BitDepth::Eight, &PowerLaw::new(2.4));
/// assert_eq!(curves.forward()[0], 0);
/// assert_eq!(curves.forward()[255], 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCurves {
    depth: BitDepth,
    forward: Vec<u8>,
    inverse: Vec<u8>,
}

impl TransferCurves {
    /// Identity curves: both tables are `0..=max`.
    pub fn identity(depth: BitDepth) -> Self {
        let ramp: Vec<u8> = (0..depth.size()).map(|v| v as u8).collect();
        Self {
            depth,
            forward: ramp.clone(),
            inverse: ramp,
        }
    }

    /// Samples `transfer` at every code value of `depth`.
    pub fn build<T: TransferFunction + ?Sized>(depth: BitDepth, transfer: &T) -> Self {
        let max = depth.max_value();
        let scale = max as f64;

        let forward = (0..=max)
            .map(|v| quantize(transfer.encode(v as f64 / scale), max) as u8)
            .collect();
        let inverse = (0..=max)
            .map(|v| quantize(transfer.decode(v as f64 / scale), max) as u8)
            .collect();

        trace!(curve = %transfer.name(), bits = depth.bits(), "sampled transfer curves");

        Self {
            depth,
            forward,
            inverse,
        }
    }

    /// Builds the curves selected by `mode`.
    ///
    /// [`CurveMode::Linear`] yields exact identity tables without sampling.
    pub fn for_mode(depth: BitDepth, mode: CurveMode) -> Self {
        match mode {
            CurveMode::Linear => Self::identity(depth),
            CurveMode::Gamma(gamma) => Self::build(depth, &PowerLaw::new(gamma)),
        }
    }

    /// Wraps precomputed tables after checking length and range.
    pub fn from_parts(depth: BitDepth, forward: Vec<u8>, inverse: Vec<u8>) -> LutResult<Self> {
        for table in [&forward, &inverse] {
            check_table(depth, table)?;
        }
        Ok(Self {
            depth,
            forward,
            inverse,
        })
    }

    /// Bit depth the curves were built for.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Linear -> encoded table.
    #[inline]
    pub fn forward(&self) -> &[u8] {
        &self.forward
    }

    /// Encoded -> linear table.
    #[inline]
    pub fn inverse(&self) -> &[u8] {
        &self.inverse
    }

    /// True when both tables are the identity ramp.
    pub fn is_identity(&self) -> bool {
        let ramp = |t: &[u8]| t.iter().enumerate().all(|(i, &v)| i == v as usize);
        ramp(&self.forward) && ramp(&self.inverse)
    }
}

fn check_table(depth: BitDepth, table: &[u8]) -> LutResult<()> {
    if table.len() != depth.size() {
        return Err(LutError::CurveLength {
            expected: depth.size(),
            found: table.len(),
        });
    }
    let max = depth.max_value();
    if let Some((index, &value)) = table.iter().enumerate().find(|(_, v)| **v as u32 > max) {
        return Err(LutError::ValueOutOfRange { index, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blendlut_transfer::Identity;

    fn is_non_decreasing(t: &[u8]) -> bool {
        t.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_identity_mode() {
        for depth in BitDepth::ALL {
            let curves = TransferCurves::for_mode(depth, CurveMode::Linear);
            assert!(curves.is_identity());
            assert_eq!(curves.forward().len(), depth.size());
            // The generic sampling path must agree with the shortcut.
            assert_eq!(curves, TransferCurves::build(depth, &Identity));
        }
    }

    #[test]
    fn test_endpoints() {
        for depth in BitDepth::ALL {
            for gamma in [1.0, 1.8, 2.2, 2.4, 3.0] {
                let c = TransferCurves::for_mode(depth, CurveMode::Gamma(gamma));
                let max = depth.max_value() as usize;
                assert_eq!(c.forward()[0], 0, "fwd[0] gamma {}", gamma);
                assert_eq!(c.forward()[max] as usize, max, "fwd[max] gamma {}", gamma);
                assert_eq!(c.inverse()[max] as usize, max, "inv[max] gamma {}", gamma);
            }
            for gamma in [2.2, 2.4, 2.8, 3.0] {
                let c = TransferCurves::for_mode(depth, CurveMode::Gamma(gamma));
                assert_eq!(c.inverse()[0], 0, "inv[0] gamma {}", gamma);
            }
        }
    }

    #[test]
    fn test_low_gamma_lifts_black() {
        // The offset survives decoding when gamma is small:
        // (0.055 / 1.055)^1 * 31 = 1.62 -> 2
        let c = TransferCurves::for_mode(BitDepth::Five, CurveMode::Gamma(1.0));
        assert_eq!(c.inverse()[0], 2);
    }

    #[test]
    fn test_monotonic_for_gamma_at_least_one() {
        for depth in BitDepth::ALL {
            for gamma in [1.0, 1.5, 2.2, 2.4, 2.8] {
                let c = TransferCurves::for_mode(depth, CurveMode::Gamma(gamma));
                assert!(is_non_decreasing(c.forward()), "fwd gamma {}", gamma);
                assert!(is_non_decreasing(c.inverse()), "inv gamma {}", gamma);
            }
        }
    }

    #[test]
    fn test_inverse_midpoint_8bit() {
        // ((128/255 + 0.055) / 1.055)^2.4 * 255 = 55.04
        let c = TransferCurves::for_mode(BitDepth::Eight, CurveMode::Gamma(2.4));
        assert_eq!(c.inverse()[128], 55);
    }

    #[test]
    fn test_known_5bit_values() {
        // fwd[1]: (1.055 * (1/31)^(1/2.4) - 0.055) * 31 = 6.12 -> 6
        // inv[16]: ((16/31 + 0.055) / 1.055)^2.4 * 31 = 7.11 -> 7
        let c = TransferCurves::for_mode(BitDepth::Five, CurveMode::Gamma(2.4));
        assert_eq!(c.forward()[1], 6);
        assert_eq!(c.inverse()[16], 7);
    }

    #[test]
    fn test_from_parts_validation() {
        let ok = TransferCurves::from_parts(BitDepth::Five, vec![0; 32], vec![31; 32]);
        assert!(ok.is_ok());

        let short = TransferCurves::from_parts(BitDepth::Five, vec![0; 31], vec![0; 32]);
        assert!(matches!(
            short,
            Err(LutError::CurveLength { expected: 32, found: 31 })
        ));

        let mut inv = vec![0u8; 32];
        inv[4] = 32;
        let high = TransferCurves::from_parts(BitDepth::Five, vec![0; 32], inv);
        assert!(matches!(
            high,
            Err(LutError::ValueOutOfRange { index: 4, value: 32, max: 31 })
        ));
    }
}
