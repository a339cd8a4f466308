//! Output format encoding modules.
//!
//! This module contains:
//! - `rgb565`: RGB565-style pixel buffer encoding (the renderer's color plane)
//! - `mask`: 1-bit-per-pixel opacity bitmask encoding (the renderer's skip plane)

pub mod mask;
pub mod rgb565;

// Re-export the whole-image encoders at the format level
pub use mask::{encode_alpha_mask, pack_alpha_mask};
pub use rgb565::{encode_rgb565, quantize_rgb565};
