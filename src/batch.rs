//! Batch conversion driver.
//!
//! One call per run: [`process_batch`] takes an explicit list of input paths
//! and converts each independently. A file that fails to decode or write
//! reports its error and does not stop the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::decode;
use crate::format;
use crate::output::{self, MASK_EXT, PIXEL_EXT};

/// Per-run conversion options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Also write a `<name>.json` metadata sidecar per image.
    pub metadata: bool,
    /// Print per-file diagnostics to stderr.
    pub verbose: bool,
}

/// Successful conversion of one input image.
pub struct ConvertedFile {
    pub pixel_path: PathBuf,
    pub mask_path: PathBuf,
    pub width: usize,
    pub height: usize,
}

/// Outcome of one input in a batch.
pub struct FileReport {
    pub input: PathBuf,
    pub result: Result<ConvertedFile, String>,
}

/// Convert a single image into its `.rgb565` and `.bmi` sidecars.
pub fn process_image(input: &Path, options: &Options) -> Result<ConvertedFile, String> {
    let decoded = decode::load_rgba_from_path(input)?;

    let pixel_data = format::encode_rgb565(&decoded.rgba, decoded.width, decoded.height);
    let mask_data = format::encode_alpha_mask(&decoded.rgba, decoded.width, decoded.height);

    if options.verbose {
        eprintln!(
            "{}: {}x{}, {} pixel bytes, {} mask bytes",
            input.display(),
            decoded.width,
            decoded.height,
            pixel_data.len(),
            mask_data.len()
        );
    }

    let pixel_path = output::sidecar_path(input, PIXEL_EXT);
    let mask_path = output::sidecar_path(input, MASK_EXT);

    output::write_atomic(&pixel_path, &pixel_data)?;
    output::write_atomic(&mask_path, &mask_data)?;

    if options.metadata {
        let name = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let metadata_path = output::sidecar_path(input, "json");
        output::write_metadata(
            &metadata_path,
            name,
            decoded.width,
            decoded.height,
            &[
                ("pixels", pixel_path.as_path(), pixel_data.len()),
                ("mask", mask_path.as_path(), mask_data.len()),
            ],
        )?;
    }

    Ok(ConvertedFile {
        pixel_path,
        mask_path,
        width: decoded.width,
        height: decoded.height,
    })
}

/// Convert every input, isolating failures per file.
pub fn process_batch(inputs: &[PathBuf], options: &Options) -> Vec<FileReport> {
    inputs
        .iter()
        .map(|input| FileReport {
            input: input.clone(),
            result: process_image(input, options),
        })
        .collect()
}

/// List the files in `dir` (non-recursively) whose extension matches `ext`,
/// case-insensitively, sorted by path for a deterministic batch order.
pub fn scan_directory(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(ext))
            .unwrap_or(false);
        if matches {
            inputs.push(path);
        }
    }

    inputs.sort();
    Ok(inputs)
}
