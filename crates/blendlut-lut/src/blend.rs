//! Two-operand blend table.
//!
//! For encoded inputs `a` and `b` the table stores
//!
//! ```text
//! table[a][b] = forward[trunc(inverse[a] * (1 - r) + inverse[b] * r)]
//! ```
//!
//! i.e. both operands are decoded, mixed in linear light with weight `r`
//! on the second one, and re-encoded. The mix index is truncated toward
//! zero, not rounded.

use crate::{BitDepth, TransferCurves};

/// Square blend table, row-major, indexed by `[a][b]`.
///
/// # Example
///
/// ```rust
/// use blendlut_lut::{BitDepth, BlendTable, TransferCurves};
///
/// let curves = TransferCurves::identity(BitDepth::Five);
/// let table = BlendTable::compose(&curves, 0.5);
/// assert_eq!(table.get(10, 20), 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlendTable {
    depth: BitDepth,
    ratio: f64,
    data: Vec<u8>,
}

impl BlendTable {
    /// Composes the full table from a curve pair and a mix ratio.
    ///
    /// `ratio` is not range checked. Mixes falling outside `[0, max]`
    /// (ratios below 0 or above 1) are clamped before the forward lookup.
    pub fn compose(curves: &TransferCurves, ratio: f64) -> Self {
        let depth = curves.depth();
        let size = depth.size();
        let max = depth.max_value();
        let fwd = curves.forward();
        let inv = curves.inverse();

        let mut data = Vec::with_capacity(size * size);
        for &ra in inv {
            for &rb in inv {
                data.push(fwd[mix_index(ra, rb, ratio, max)]);
            }
        }

        Self { depth, ratio, data }
    }

    /// Bit depth of both operands.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Mix ratio baked into the table.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Table dimension (rows == columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.depth.size()
    }

    /// Blended value for first operand `a` and second operand `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> u8 {
        self.row(a)[b]
    }

    /// All blended values for first operand `a`.
    #[inline]
    pub fn row(&self, a: usize) -> &[u8] {
        let size = self.size();
        &self.data[a * size..(a + 1) * size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.size())
    }

    /// Row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Linear-light mix of two decoded operands as a forward-table index.
///
/// Truncates toward zero (integer cast semantics), then clamps to
/// `[0, max]`. Float overshoot, extrapolating ratios and NaN all land in
/// range; NaN maps to 0.
#[inline]
pub fn mix_index(a: u8, b: u8, ratio: f64, max: u32) -> usize {
    let mix = a as f64 * (1.0 - ratio) + b as f64 * ratio;
    (mix as i64).clamp(0, max as i64) as usize
}
