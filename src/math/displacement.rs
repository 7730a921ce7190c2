//! Depth-to-displacement conversion

use crate::algorithm::config::Direction;
use crate::io::configuration::{DEPTH_LEVELS, MAX_DEPTH};

/// Horizontal source offset for one depth sample
///
/// `round(direction * scale * depth)`, rounding half away from zero.
pub fn depth_offset(depth: u8, scale: f64, direction: Direction) -> i64 {
    (f64::from(direction.sign()) * scale * f64::from(depth)).round() as i64
}

/// Largest offset magnitude any depth sample can produce, `round(255 * scale)`
pub fn max_offset(scale: f64) -> i64 {
    (scale * f64::from(MAX_DEPTH)).round() as i64
}

/// Offsets for every possible depth sample under one configuration
///
/// The per-pixel loop looks offsets up instead of multiplying and rounding.
#[derive(Debug, Clone)]
pub struct DisplacementTable {
    offsets: [i64; DEPTH_LEVELS],
}

impl DisplacementTable {
    /// Precompute the offset of each depth level
    pub fn new(scale: f64, direction: Direction) -> Self {
        let mut offsets = [0; DEPTH_LEVELS];
        for (depth, offset) in (0..=MAX_DEPTH).zip(offsets.iter_mut()) {
            *offset = depth_offset(depth, scale, direction);
        }
        Self { offsets }
    }

    /// Offset for a depth sample
    pub fn offset(&self, depth: u8) -> i64 {
        self.offsets.get(usize::from(depth)).copied().unwrap_or(0)
    }

    /// Largest offset magnitude in the table
    pub fn max_magnitude(&self) -> i64 {
        self.offsets.iter().map(|o| o.saturating_abs()).max().unwrap_or(0)
    }
}
