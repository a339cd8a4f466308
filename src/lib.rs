//! lcdpack - raster image to LCD sidecar converter
//!
//! Converts RGBA raster images into the two flat binary buffers the display
//! renderer memory-maps at runtime: a packed RGB565-style pixel buffer
//! (`.rgb565`) and a 1-bit-per-pixel opacity bitmask (`.bmi`).
//!
//! The codec functions in [`format`] are pure; decoding, file writing, and
//! batch orchestration live in their own modules so the format arithmetic
//! stays independently testable.

pub mod batch;
pub mod decode;
pub mod format;
pub mod output;
