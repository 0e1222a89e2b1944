//! # blendlut-lut
//!
//! Precomputed 2D lookup tables for gamma-correct blending of two encoded
//! channel values.
//!
//! Blending encoded (gamma-corrected) values directly darkens midtones.
//! The correct result decodes both inputs to linear light, mixes them and
//! encodes the mix again. This crate bakes that whole operation into an
//! `N x N` byte table for a fixed bit depth and mix ratio, so consumers
//! only do one lookup per channel.
//!
//! # Pipeline
//!
//! 1. [`TransferCurves`] - forward and inverse curves, quantized
//! 2. [`BlendTable`] - `table[a][b] = fwd[trunc(inv[a]*(1-r) + inv[b]*r)]`
//! 3. [`emit`] - C header text
//!
//! # Usage
//!
//! ```rust
//! use blendlut_lut::{generate, BitDepth, CurveMode, GenerationParams};
//!
//! let params = GenerationParams::new(BitDepth::Five, CurveMode::Linear);
//! let lut = generate(&params);
//! assert_eq!(lut.table.get(10, 20), 15);
//! ```
//!
//! # Dependencies
//!
//! - [`blendlut-transfer`] - Transfer functions and quantization
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `blendlut-cli` - The `gen-lut` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod depth;
mod curve;
mod blend;
mod params;
mod pipeline;
mod error;
pub mod emit;

pub use depth::BitDepth;
pub use curve::TransferCurves;
pub use blend::{BlendTable, mix_index};
pub use params::{CurveMode, GenerationParams, DEFAULT_RATIO, canonical_name, forward_name, inverse_name};
pub use pipeline::{BlendLut, generate};
pub use error::{LutError, LutResult};
