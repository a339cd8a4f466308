//! Image decoding to row-major RGBA8888.
//!
//! Thin wrapper over the `image` crate: any self-describing raster format it
//! recognizes is accepted and converted to 8-bit RGBA. Sources without an
//! alpha channel decode with alpha 255 everywhere, so downstream masks come
//! out fully opaque.

use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// Result of decoding an image: dimensions plus interleaved RGBA8888 data
/// (RGBARGBA..., 4 bytes per pixel, top-to-bottom, left-to-right).
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Load an image from a file path and convert to RGBA8888.
pub fn load_rgba_from_path<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let reader = ImageReader::open(path.as_ref())
        .map_err(|e| format!("Failed to open {}: {}", path.as_ref().display(), e))?
        .with_guessed_format()
        .map_err(|e| format!("Failed to detect format of {}: {}", path.as_ref().display(), e))?;

    let image = reader
        .decode()
        .map_err(|e| format!("Failed to decode {}: {}", path.as_ref().display(), e))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}

/// Load an image from an in-memory byte buffer and convert to RGBA8888.
pub fn load_rgba_from_bytes(data: &[u8]) -> Result<DecodedImage, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to detect format: {}", e))?;

    let image = reader
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}
