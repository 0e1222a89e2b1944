//! Identity transfer function.
//!
//! Used for linear blending, where encoded values already are linear light.

use crate::TransferFunction;

/// Pass-through curve: `encode(x) = decode(x) = x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl TransferFunction for Identity {
    #[inline]
    fn encode(&self, linear: f64) -> f64 {
        linear
    }

    #[inline]
    fn decode(&self, encoded: f64) -> f64 {
        encoded
    }

    fn name(&self) -> String {
        "identity".to_string()
    }
}
