//! Default parameters and naming conventions

/// Number of distinct 8-bit depth levels
pub const DEPTH_LEVELS: usize = 256;

/// Largest representable depth sample
pub const MAX_DEPTH: u8 = u8::MAX;

// Default values for configurable parameters
/// Width of one repetition of the pattern, in pixels
pub const DEFAULT_PATTERN_WIDTH: usize = 140;

/// Displacement in pixels per unit of depth
///
/// Keeps `round(255 * scale)` well below [`DEFAULT_PATTERN_WIDTH`].
pub const DEFAULT_SCALE: f64 = 0.25;

/// Fixed seed for reproducible random patterns
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to stereogram output filenames
pub const OUTPUT_SUFFIX: &str = "_sirds";
/// Suffix added to saved pattern filenames
pub const PATTERN_SUFFIX: &str = "_pattern";
/// Extension of every file written
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sirds=info";
