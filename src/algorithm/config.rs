//! Synthesis parameters and their sanity checks

use crate::io::configuration::{DEFAULT_PATTERN_WIDTH, DEFAULT_SCALE};
use crate::io::error::{ConfigurationWarning, Result, invalid_parameter};
use crate::math::displacement::max_offset;

/// Eye convergence convention, selecting the sign of the displacement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    /// Eyes focus behind the image plane; positive offsets
    #[default]
    WallEyed = 1,
    /// Eyes focus in front of the image plane; negative offsets
    CrossEyed = -1,
}

impl Direction {
    /// `+1` for wall-eyed, `-1` for cross-eyed
    pub const fn sign(self) -> i8 {
        self as i8
    }
}

/// Immutable parameters of one synthesis run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthesisConfig {
    /// Width of one pattern period in pixels (`Pw`)
    pub pattern_width: usize,
    /// Displacement in pixels per unit of depth
    pub scale: f64,
    /// Eye convergence convention
    pub direction: Direction,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            pattern_width: DEFAULT_PATTERN_WIDTH,
            scale: DEFAULT_SCALE,
            direction: Direction::WallEyed,
        }
    }
}

impl SynthesisConfig {
    /// Create a configuration
    pub const fn new(pattern_width: usize, scale: f64, direction: Direction) -> Self {
        Self {
            pattern_width,
            scale,
            direction,
        }
    }

    /// Reject values a caller should never hand to the synthesizer
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the pattern width is zero or the scale is
    /// not a finite positive number
    pub fn validate(&self) -> Result<()> {
        if self.pattern_width == 0 {
            return Err(invalid_parameter(
                "pattern_width",
                &self.pattern_width,
                &"must be greater than zero",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be a finite number greater than zero",
            ));
        }
        Ok(())
    }

    /// Largest displacement any depth sample produces, `round(255 * scale)`
    pub fn max_offset(&self) -> i64 {
        max_offset(self.scale)
    }

    /// Report a displacement range that can exceed one pattern period
    pub fn check(&self) -> Option<ConfigurationWarning> {
        let max_offset = self.max_offset();
        let period = i64::try_from(self.pattern_width).unwrap_or(i64::MAX);
        (max_offset >= period).then_some(ConfigurationWarning::DisplacementExceedsPeriod {
            max_offset,
            pattern_width: self.pattern_width,
        })
    }

    /// Width of the stereogram produced for a depth map of `depth_width` columns
    pub const fn output_width(&self, depth_width: usize) -> usize {
        depth_width + self.pattern_width
    }
}
