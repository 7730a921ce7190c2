//! Grayscale depth map where intensity encodes height above the background

use crate::io::error::{Result, dimension_mismatch};
use ndarray::{Array2, ArrayView1};

/// Immutable 8-bit depth samples, indexed `(row, col)` internally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    samples: Array2<u8>,
}

impl DepthMap {
    /// Wrap an existing `(height, width)` array
    pub fn from_array(samples: Array2<u8>) -> Self {
        let samples = if samples.is_standard_layout() {
            samples
        } else {
            samples.as_standard_layout().into_owned()
        };
        Self { samples }
    }

    /// Build from row-major samples
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `samples.len() != width * height`
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let len = samples.len();
        Array2::from_shape_vec((height, width), samples)
            .map(Self::from_array)
            .map_err(|e| {
                dimension_mismatch(
                    "depth map",
                    &format!("{len} samples cannot fill {width}x{height}: {e}"),
                )
            })
    }

    /// Depth map of a single constant depth
    pub fn uniform(width: usize, height: usize, depth: u8) -> Self {
        Self {
            samples: Array2::from_elem((height, width), depth),
        }
    }

    /// Number of columns (`Dw`)
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// Number of rows (`Dh`)
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// Check whether the map has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Depth at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.samples.get((y, x)).copied()
    }

    /// Samples of row `y`, or `None` past the last row
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, u8>> {
        (y < self.height()).then(|| self.samples.row(y))
    }

    /// Underlying `(height, width)` array
    pub const fn samples(&self) -> &Array2<u8> {
        &self.samples
    }
}
