//! Repeating color pattern seeding the left edge of every stereogram row

use crate::io::error::{Result, dimension_mismatch};
use crate::spatial::Rgb;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Immutable RGB pattern, indexed `(row, col)` internally
///
/// The pattern may be shorter than the depth map; synthesis tiles it
/// vertically. Only the leftmost `pattern_width` columns are ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBuffer {
    pixels: Array2<Rgb>,
}

impl PatternBuffer {
    /// Wrap an existing `(height, width)` array
    pub fn from_array(pixels: Array2<Rgb>) -> Self {
        let pixels = if pixels.is_standard_layout() {
            pixels
        } else {
            pixels.as_standard_layout().into_owned()
        };
        Self { pixels }
    }

    /// Build from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `pixels.len() != width * height`
    pub fn from_raw(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let len = pixels.len();
        Array2::from_shape_vec((height, width), pixels)
            .map(Self::from_array)
            .map_err(|e| {
                dimension_mismatch(
                    "pattern buffer",
                    &format!("{len} pixels cannot fill {width}x{height}: {e}"),
                )
            })
    }

    /// Uniform random noise, each pixel an independent RGB triple
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        Self {
            pixels: Array2::from_shape_fn((height, width), |_| rng.random::<Rgb>()),
        }
    }

    /// Reproducible random noise for a given seed
    pub fn random_seeded(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(width, height, &mut rng)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows (`Ph`)
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get((y, x)).copied()
    }

    /// Pixel at column `x` of output row `y`, repeating the pattern vertically
    pub fn tiled(&self, x: usize, y: usize) -> Option<Rgb> {
        let height = self.height();
        if height == 0 {
            return None;
        }
        self.get(x, y % height)
    }

    /// Underlying `(height, width)` array
    pub const fn pixels(&self) -> &Array2<Rgb> {
        &self.pixels
    }
}
