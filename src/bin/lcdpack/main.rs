//! lcdpack - batch raster image to LCD sidecar converter
//!
//! Each input produces two raw binary files next to it, named by replacing
//! the input's extension: `<name>.rgb565` (packed pixel buffer) and
//! `<name>.bmi` (opacity bitmask). Failures are reported per file; the run
//! continues past them and exits nonzero at the end if any input failed.

mod args;

use args::Args;
use clap::Parser;

use lcdpack::batch::{self, Options};

fn main() -> Result<(), String> {
    let args = Args::parse();

    let mut inputs = args.inputs.clone();
    if let Some(ref dir) = args.dir {
        inputs.extend(batch::scan_directory(dir, &args.ext)?);
    }
    if inputs.is_empty() {
        return Err("no input files (pass image paths, or --dir to scan)".to_string());
    }

    let options = Options {
        metadata: args.metadata,
        verbose: args.verbose,
    };

    let reports = batch::process_batch(&inputs, &options);

    let mut failures = 0usize;
    for report in &reports {
        match &report.result {
            Ok(converted) => {
                println!("+ {}", converted.pixel_path.display());
                println!("+ {}", converted.mask_path.display());
            }
            Err(e) => {
                failures += 1;
                eprintln!("! {}: {}", report.input.display(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} inputs failed", failures, reports.len()));
    }

    Ok(())
}
