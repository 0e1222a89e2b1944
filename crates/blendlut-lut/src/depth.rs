//! Supported channel bit depths.

use crate::{LutError, LutResult};
use std::fmt;
use std::str::FromStr;

/// Bits per channel of the encoded pixels a table is built for.
///
/// Defines the table domain: `size() = 2^bits` code values per channel,
/// `max_value() = size() - 1`.
///
/// # Example
///
/// ```rust
/// use blendlut_lut::BitDepth;
///
/// let depth = BitDepth::from_bits(6).unwrap();
/// assert_eq!(depth.size(), 64);
/// assert_eq!(depth.max_value(), 63);
/// assert!(BitDepth::from_bits(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 5 bits (32 levels), e.g. RGB555/565 red and blue
    #[default]
    Five,
    /// 6 bits (64 levels), e.g. RGB565 green
    Six,
    /// 8 bits (256 levels)
    Eight,
}

impl BitDepth {
    /// All supported depths, ascending.
    pub const ALL: [BitDepth; 3] = [BitDepth::Five, BitDepth::Six, BitDepth::Eight];

    /// Looks up a depth by its bit count.
    pub fn from_bits(bits: u32) -> LutResult<Self> {
        match bits {
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(LutError::UnsupportedBitDepth(other)),
        }
    }

    /// Bit count.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Number of code values per channel.
    #[inline]
    pub const fn size(self) -> usize {
        1 << self.bits()
    }

    /// Largest code value.
    #[inline]
    pub const fn max_value(self) -> u32 {
        (1 << self.bits()) - 1
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = LutError;

    fn try_from(bits: u32) -> LutResult<Self> {
        Self::from_bits(bits)
    }
}

impl FromStr for BitDepth {
    type Err = LutError;

    fn from_str(s: &str) -> LutResult<Self> {
        let bits: u32 = s
            .trim()
            .parse()
            .map_err(|_| LutError::InvalidBitDepth(s.to_string()))?;
        Self::from_bits(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(BitDepth::Five.max_value(), 31);
        assert_eq!(BitDepth::Six.max_value(), 63);
        assert_eq!(BitDepth::Eight.max_value(), 255);
        assert_eq!(BitDepth::Eight.size(), 256);
    }

    #[test]
    fn test_parse() {
        assert_eq!("8".parse::<BitDepth>().unwrap(), BitDepth::Eight);
        assert!(matches!(
            "7".parse::<BitDepth>(),
            Err(LutError::UnsupportedBitDepth(7))
        ));
        assert!(matches!(
            "five".parse::<BitDepth>(),
            Err(LutError::InvalidBitDepth(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for depth in BitDepth::ALL {
            assert_eq!(depth.to_string().parse::<BitDepth>().unwrap(), depth);
        }
    }

    #[test]
    fn test_default_is_five() {
        assert_eq!(BitDepth::default(), BitDepth::Five);
    }
}
