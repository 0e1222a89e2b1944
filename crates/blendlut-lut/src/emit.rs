//! C header emission.
//!
//! Renders tables as `static const unsigned char` array declarations with
//! uppercase two-digit hex literals, 16 per line.
//!
//! # Format
//!
//! ```text
//! // Auto-generated with gen-lut
//! // 2D blend table: array[a][b] = fwd_avg(inv[a], inv[b])
//! // gamma = 2.4, linear = false, bits = 5, mix ratio = 0.5
//!
//! #pragma once
//! static const unsigned char lut_blend_5b[32][32] = {
//!   {
//!     0x00,0x03,...,0x0F,
//!     0x10,0x11,...,0x16
//!   },
//!   ...
//!   {
//!     ...
//!   }
//! };
//! ```
//!
//! 1D arrays (`--emit-curves`) use `", "` between values and a two-space
//! indent; 2D rows use a bare `","` and a four-space indent.

use crate::{forward_name, inverse_name, BlendLut, BlendTable, GenerationParams, LutResult};
use std::io::Write;

/// Values per output line.
pub const VALUES_PER_LINE: usize = 16;

/// Tool name recorded in the banner.
pub const GENERATOR: &str = "gen-lut";

/// Writes the complete header: banner, pragma, optional 1D curves and the
/// 2D blend table.
///
/// # Example
///
/// ```rust
/// use blendlut_lut::{emit, generate, BitDepth, CurveMode, GenerationParams};
///
/// let params = GenerationParams::new(BitDepth::Five, CurveMode::Linear);
/// let lut = generate(&params);
/// let mut out = Vec::new();
/// emit::write_header(&mut out, &params, &lut).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("static const unsigned char lut_blend_5b[32][32] = {"));
/// ```
pub fn write_header<W: Write>(
    writer: &mut W,
    params: &GenerationParams,
    lut: &BlendLut,
) -> LutResult<()> {
    write_banner(writer, params)?;
    writeln!(writer, "#pragma once")?;

    if params.emit_curves {
        write_1d(writer, &forward_name(params.depth), lut.curves.forward())?;
        write_1d(writer, &inverse_name(params.depth), lut.curves.inverse())?;
    }

    write_2d(writer, &params.identifier(), &lut.table)
}

/// Writes the three comment lines describing the parameters, followed by
/// a blank line.
pub fn write_banner<W: Write>(writer: &mut W, params: &GenerationParams) -> LutResult<()> {
    writeln!(writer, "// Auto-generated with {}", GENERATOR)?;
    writeln!(writer, "// 2D blend table: array[a][b] = fwd_avg(inv[a], inv[b])")?;
    writeln!(
        writer,
        "// gamma = {:?}, linear = {}, bits = {}, mix ratio = {:?}",
        params.mode.gamma(),
        params.mode.is_linear(),
        params.depth,
        params.ratio
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Writes a 1D byte array.
pub fn write_1d<W: Write>(writer: &mut W, name: &str, values: &[u8]) -> LutResult<()> {
    writeln!(writer, "static const unsigned char {}[{}] = {{", name, values.len())?;
    write_lines(writer, values, "  ", ", ")?;
    writeln!(writer, "}};")?;
    Ok(())
}

/// Writes a 2D byte array, one brace block per row.
pub fn write_2d<W: Write>(writer: &mut W, name: &str, table: &BlendTable) -> LutResult<()> {
    let size = table.size();
    writeln!(writer, "static const unsigned char {}[{}][{}] = {{", name, size, size)?;
    for (r, row) in table.rows().enumerate() {
        writeln!(writer, "  {{")?;
        write_lines(writer, row, "    ", ",")?;
        let trail = if r + 1 < size { "," } else { "" };
        writeln!(writer, "  }}{}", trail)?;
    }
    writeln!(writer, "}};")?;
    Ok(())
}

/// Hex lines of at most [`VALUES_PER_LINE`] values; every line except the
/// last ends with a comma.
fn write_lines<W: Write>(writer: &mut W, values: &[u8], indent: &str, sep: &str) -> LutResult<()> {
    let lines = values.chunks(VALUES_PER_LINE);
    let count = lines.len();
    for (i, chunk) in lines.enumerate() {
        let hexes: Vec<String> = chunk.iter().map(|v| format!("0x{:02X}", v)).collect();
        let trail = if i + 1 < count { "," } else { "" };
        writeln!(writer, "{}{}{}", indent, hexes.join(sep), trail)?;
    }
    Ok(())
}
