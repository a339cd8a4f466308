//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Convert raster images into the renderer's raw sidecar formats: a packed
/// RGB565 pixel buffer (`.rgb565`) and a 1-bit-per-pixel opacity bitmask
/// (`.bmi`), written next to each input.
#[derive(Parser, Debug)]
#[command(name = "lcdpack", version)]
pub struct Args {
    /// Input image files (any format the decoder recognizes)
    pub inputs: Vec<PathBuf>,

    /// Scan this directory (non-recursively) for inputs in addition to any
    /// files given directly
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// File extension to match when scanning with --dir
    #[arg(long, default_value = "png")]
    pub ext: String,

    /// Also write a <name>.json sidecar recording dimensions and output sizes
    #[arg(long)]
    pub metadata: bool,

    /// Print per-file diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
