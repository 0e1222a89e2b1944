//! Curves -> blend table.

use crate::{BlendTable, GenerationParams, TransferCurves};
use tracing::debug;

/// Everything a generation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendLut {
    /// Forward and inverse curves the table was composed from
    pub curves: TransferCurves,
    /// The 2D blend table
    pub table: BlendTable,
}

/// Builds the curves for `params` and composes the blend table.
///
/// Pure and deterministic: equal parameters give equal output.
pub fn generate(params: &GenerationParams) -> BlendLut {
    let curves = TransferCurves::for_mode(params.depth, params.mode);
    debug!(
        bits = params.depth.bits(),
        gamma = params.mode.gamma(),
        linear = params.mode.is_linear(),
        "built transfer curves"
    );

    let table = BlendTable::compose(&curves, params.ratio);
    debug!(
        size = table.size(),
        ratio = params.ratio,
        variant = %params.descriptive_name(),
        "composed blend table"
    );

    BlendLut { curves, table }
}
