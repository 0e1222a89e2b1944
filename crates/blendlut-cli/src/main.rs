//! gen-lut - gamma-correct blend LUT generator
//!
//! Prints a C header with a 2D table `array[a][b]` holding the blend of
//! encoded channel values `a` and `b`, mixed in linear light.

use anyhow::{Context, Result};
use blendlut_lut::{emit, generate, BitDepth, CurveMode, GenerationParams};
use clap::{ArgGroup, Parser};
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gen-lut")]
#[command(author, version, about = "Generate gamma-correct 2D blend LUT headers")]
#[command(long_about = "
Generates a C header with a precomputed blend table for encoded (gamma
corrected) channel values. Each entry is the encoded result of decoding
both operands, mixing them in linear light and encoding again.

The table is printed to stdout; redirect it to a file.

Examples:
  gen-lut --gamma 2.4 > lut_blend_5b.h
  gen-lut --gamma 2.2 --bits 6 --ratio 0.75 > lut_blend_6b.h
  gen-lut --linear --bits 8 > lut_blend_8b.h
  gen-lut --gamma 2.4 --emit-curves --name lut_blend_srgb_5b > blend.h
")]
#[command(group(ArgGroup::new("mode").required(true).args(["gamma", "linear"])))]
struct Cli {
    /// Gamma value (e.g. 2.4)
    #[arg(long, allow_negative_numbers = true)]
    gamma: Option<f64>,

    /// Use identity curves (no gamma transform)
    #[arg(long)]
    linear: bool,

    /// Mix ratio of the second (current frame) operand
    #[arg(long, default_value_t = blendlut_lut::DEFAULT_RATIO, allow_negative_numbers = true)]
    ratio: f64,

    /// Bit depth: 5, 6 or 8
    #[arg(long, default_value = "5")]
    bits: BitDepth,

    /// Also emit the 1D forward and inverse curves
    #[arg(long)]
    emit_curves: bool,

    /// Identifier of the 2D array (default: lut_blend_<bits>b)
    #[arg(long)]
    name: Option<String>,

    /// Verbose diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn params(&self) -> GenerationParams {
        let mode = match self.gamma {
            Some(gamma) if !self.linear => CurveMode::Gamma(gamma),
            _ => CurveMode::Linear,
        };
        let mut params = GenerationParams::new(self.bits, mode)
            .with_ratio(self.ratio)
            .with_curves(self.emit_curves);
        if let Some(name) = &self.name {
            params = params.with_name(name.clone());
        }
        params
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

fn run(params: &GenerationParams) -> Result<()> {
    debug!(?params, "generation parameters");
    let lut = generate(params);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    emit::write_header(&mut writer, params, &lut).context("Failed to write table")?;
    writer.flush().context("Failed to flush output")?;

    info!(name = %params.identifier(), entries = lut.table.as_slice().len(), "table written");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli.params())
}
