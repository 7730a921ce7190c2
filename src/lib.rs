//! Single image random dot stereogram (SIRDS) synthesis
//!
//! A grayscale depth map is turned into a flat color image that shows depth
//! when viewed with the right eye convergence. The leftmost columns of every
//! output row are seeded from a repeating pattern; every other pixel copies a
//! pixel resolved earlier in the same row, at a distance set by the depth.

#![forbid(unsafe_code)]

/// Synthesis configuration and the row-resolution algorithm
pub mod algorithm;
/// Input/output operations, configuration defaults and error handling
pub mod io;
/// Floored modulo and depth-to-displacement arithmetic
pub mod math;
/// Depth, pattern and output pixel buffers
pub mod spatial;

pub use algorithm::{Direction, SynthesisConfig, Synthesizer, synthesize};
pub use io::error::{ConfigurationWarning, Result, SynthesisError};
pub use spatial::{DepthMap, OutputBuffer, PatternBuffer, Rgb};
