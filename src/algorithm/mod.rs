//! Stereogram synthesis algorithm and its configuration

/// Synthesis parameters, eye convergence direction and sanity checks
pub mod config;
/// Seed tiling and left-to-right displacement chain resolution
pub mod synthesizer;

pub use config::{Direction, SynthesisConfig};
pub use synthesizer::{Synthesizer, synthesize};
