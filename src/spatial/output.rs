//! Flat row-major stereogram buffer
//!
//! Cells start unresolved (black) except for the seed columns. Synthesis
//! resolves each row left to right and never rewrites a resolved cell, so
//! every read targets a column strictly left of the one being written.

use crate::spatial::Rgb;
use std::slice::ChunksExactMut;

/// Output pixels of one synthesis run, `width * height` cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl OutputBuffer {
    /// Allocate an unresolved buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width * height],
        }
    }

    /// Number of columns (`Dw + Pw`)
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (`Dh`)
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        let start = y.checked_mul(self.width)?;
        self.pixels.get(start..start + self.width)
    }

    /// Mutable rows, top to bottom
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Rgb> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable pixels in row-major order
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Interleaved `RGBRGB...` bytes for encoders
    pub fn into_raw_rgb(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }
}
