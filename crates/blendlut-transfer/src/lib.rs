//! # blendlut-transfer
//!
//! Transfer functions used to build blend lookup tables.
//!
//! A transfer function maps between linear light and the encoded
//! (gamma-corrected) values that are actually stored in a framebuffer.
//! Blending two encoded pixels correctly means decoding both, mixing in
//! linear light, then encoding the result again.
//!
//! # Terminology
//!
//! - **Encode** (OETF direction): Linear -> Encoded
//! - **Decode** (EOTF direction): Encoded -> Linear
//! - **Gamma**: The exponent of the power-law curve
//!
//! # Supported Transfer Functions
//!
//! | Function | Formula (encode) | Range |
//! |----------|------------------|-------|
//! | [`PowerLaw`] | `(1 + a) * x^(1/gamma) - a`, `a = 0.055` | [0, 1] |
//! | [`Identity`] | `x` | [0, 1] |
//!
//! Both implement [`TransferFunction`], so table builders stay agnostic of
//! the curve family. Adding another family (PQ, HLG, ...) means adding one
//! more implementation; nothing downstream changes.
//!
//! # Usage
//!
//! ```rust
//! use blendlut_transfer::{PowerLaw, TransferFunction};
//!
//! let curve = PowerLaw::new(2.4);
//! let linear = curve.decode(0.5);
//! let encoded = curve.encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `blendlut-lut` - Curve building and blend table composition

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod power;
pub mod identity;
pub mod quantize;

pub use power::{PowerLaw, POWER_LAW_OFFSET, DEFAULT_GAMMA};
pub use identity::Identity;
pub use quantize::{round_half_up, quantize};

/// A pair of mappings between linear light and encoded values.
///
/// Inputs and outputs are normalized to `[0, 1]`, although implementations
/// are not required to clamp. Callers quantize and clamp afterwards.
pub trait TransferFunction {
    /// Linear -> Encoded.
    fn encode(&self, linear: f64) -> f64;

    /// Encoded -> Linear.
    fn decode(&self, encoded: f64) -> f64;

    /// Short human readable name, used in diagnostics.
    fn name(&self) -> String;
}
