//! Input/output collaborators around the synthesis core

/// Command-line interface and batch processing
pub mod cli;
/// Default parameters and naming conventions
pub mod configuration;
/// Error types and warnings
pub mod error;
/// Depth map and pattern decoding, stereogram encoding
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
