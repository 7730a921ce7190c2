//! Pixel grids consumed and produced by synthesis
//!
//! This module contains the three buffers of a synthesis run:
//! - The read-only grayscale depth map
//! - The read-only repeating color pattern
//! - The flat output buffer resolved in place

/// Grayscale depth map storage
pub mod depth;
/// Flat row-major output buffer
pub mod output;
/// Repeating color pattern storage and random generation
pub mod pattern;

pub use depth::DepthMap;
pub use output::OutputBuffer;
pub use pattern::PatternBuffer;

/// One RGB pixel
pub type Rgb = [u8; 3];
