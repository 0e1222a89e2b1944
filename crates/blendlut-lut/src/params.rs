//! Generation parameters.
//!
//! Everything that influences the generated table lives in
//! [`GenerationParams`]. Two runs with equal parameters emit identical
//! bytes.

use crate::BitDepth;
use blendlut_transfer::DEFAULT_GAMMA;

/// How encoded values relate to linear light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveMode {
    /// Encoded values are linear already; curves are the identity.
    Linear,
    /// Power-law curve with the given gamma.
    Gamma(f64),
}

impl CurveMode {
    /// Gamma reported for this mode. `Linear` reports [`DEFAULT_GAMMA`],
    /// which has no effect on the table.
    pub fn gamma(self) -> f64 {
        match self {
            Self::Linear => DEFAULT_GAMMA,
            Self::Gamma(g) => g,
        }
    }

    /// True for [`CurveMode::Linear`].
    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }
}

/// Default weight of the second blend operand.
pub const DEFAULT_RATIO: f64 = 0.5;

/// Full set of inputs for one table generation.
///
/// # Example
///
/// ```rust
/// use blendlut_lut::{BitDepth, CurveMode, GenerationParams};
///
/// let params = GenerationParams::new(BitDepth::Six, CurveMode::Gamma(2.2))
///     .with_ratio(0.75);
/// assert_eq!(params.identifier(), "lut_blend_6b");
/// assert_eq!(params.descriptive_name(), "srgb_blend_g22_6b");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Channel bit depth
    pub depth: BitDepth,
    /// Transfer curve selection
    pub mode: CurveMode,
    /// Weight of the second operand, nominally in [0, 1]
    pub ratio: f64,
    /// Identifier override for the emitted 2D array
    pub name: Option<String>,
    /// Also emit the 1D forward and inverse curves
    pub emit_curves: bool,
}

impl GenerationParams {
    /// Creates parameters with the default ratio, canonical name and no
    /// 1D curves.
    pub fn new(depth: BitDepth, mode: CurveMode) -> Self {
        Self {
            depth,
            mode,
            ratio: DEFAULT_RATIO,
            name: None,
            emit_curves: false,
        }
    }

    /// Sets the mix ratio. Not range checked.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Overrides the emitted array identifier.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enables emission of the 1D curves.
    pub fn with_curves(mut self, emit: bool) -> Self {
        self.emit_curves = emit;
        self
    }

    /// Identifier of the emitted 2D array.
    ///
    /// Always `lut_blend_<bits>b` unless overridden, whatever the gamma,
    /// mode or ratio. Consumers that need several variants side by side
    /// must pass a name or keep the outputs apart.
    pub fn identifier(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => canonical_name(self.depth),
        }
    }

    /// Name derived from the curve parameters.
    ///
    /// `linear_blend_<bits>b` or `srgb_blend_g<round(gamma*10)>_<bits>b`.
    /// Informational only; never used as the default identifier.
    pub fn descriptive_name(&self) -> String {
        match self.mode {
            CurveMode::Linear => format!("linear_blend_{}b", self.depth),
            CurveMode::Gamma(g) => {
                format!("srgb_blend_g{}_{}b", (g * 10.0).round_ties_even() as i64, self.depth)
            }
        }
    }
}

/// Canonical identifier of the 2D blend array.
pub fn canonical_name(depth: BitDepth) -> String {
    format!("lut_blend_{}b", depth)
}

/// Identifier of the 1D forward (linear -> encoded) array.
pub fn forward_name(depth: BitDepth) -> String {
    format!("lut_fwd_{}b", depth)
}

/// Identifier of the 1D inverse (encoded -> linear) array.
pub fn inverse_name(depth: BitDepth) -> String {
    format!("lut_rev_{}b", depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_ignores_curve_params() {
        let a = GenerationParams::new(BitDepth::Five, CurveMode::Linear);
        let b = GenerationParams::new(BitDepth::Five, CurveMode::Gamma(2.2)).with_ratio(0.8);
        assert_eq!(a.identifier(), "lut_blend_5b");
        assert_eq!(a.identifier(), b.identifier());
    }

    #[test]
    fn test_name_override() {
        let p = GenerationParams::new(BitDepth::Eight, CurveMode::Linear).with_name("my_lut");
        assert_eq!(p.identifier(), "my_lut");
    }

    #[test]
    fn test_descriptive_name() {
        let p = GenerationParams::new(BitDepth::Eight, CurveMode::Linear);
        assert_eq!(p.descriptive_name(), "linear_blend_8b");
        let p = GenerationParams::new(BitDepth::Five, CurveMode::Gamma(2.4));
        assert_eq!(p.descriptive_name(), "srgb_blend_g24_5b");
    }

    #[test]
    fn test_linear_reports_default_gamma() {
        assert_eq!(CurveMode::Linear.gamma(), DEFAULT_GAMMA);
        assert!(CurveMode::Linear.is_linear());
        assert!(!CurveMode::Gamma(1.8).is_linear());
    }
}
