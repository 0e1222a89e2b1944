//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Bit depth outside of the supported set.
    #[error("unsupported bit depth {0} (expected 5, 6 or 8)")]
    UnsupportedBitDepth(u32),

    /// Bit depth string that is not a number at all.
    #[error("invalid bit depth '{0}'")]
    InvalidBitDepth(String),

    /// Curve length does not match the bit depth.
    #[error("invalid curve length: expected {expected}, found {found}")]
    CurveLength {
        /// Entries required by the bit depth
        expected: usize,
        /// Entries supplied
        found: usize,
    },

    /// Curve entry above the maximum code value.
    #[error("curve value {value} at index {index} exceeds maximum {max}")]
    ValueOutOfRange {
        /// Position in the curve
        index: usize,
        /// Offending value
        value: u8,
        /// Maximum code value for the bit depth
        max: u32,
    },

    /// I/O error while emitting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
