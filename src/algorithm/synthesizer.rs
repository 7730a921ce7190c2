//! Stereogram synthesis: seed tiling followed by left-to-right chain resolution
//!
//! Every output row starts with `pattern_width` seed columns copied from the
//! pattern. Each remaining column `x + pattern_width` takes the color already
//! resolved at `x + offset(depth[x])`, so the repetition period shrinks where
//! the depth map rises. Candidates left of the row are folded back into the
//! seed region with a floored modulo. Rows never read each other, which lets
//! [`Synthesizer::synthesize_parallel`] hand disjoint row bands to workers.

use crate::algorithm::config::SynthesisConfig;
use crate::io::error::{ConfigurationWarning, Result, computation_error, dimension_mismatch};
use crate::math::displacement::DisplacementTable;
use crate::math::modulo::wrap_column;
use crate::spatial::{DepthMap, OutputBuffer, PatternBuffer, Rgb};
use ndarray::ArrayView1;
use std::num::NonZeroUsize;
use std::time::Instant;

/// Synthesizes stereograms for one immutable configuration
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthesisConfig,
    table: DisplacementTable,
}

impl Synthesizer {
    /// Prepare a synthesizer, logging any configuration warning
    pub fn new(config: SynthesisConfig) -> Self {
        if let Some(warning) = config.check() {
            tracing::warn!(%warning, "stereogram may be visually incoherent");
        }
        Self {
            table: DisplacementTable::new(config.scale, config.direction),
            config,
        }
    }

    /// Configuration this synthesizer was built with
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize every row on the calling thread
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` before allocating anything if the depth map
    /// is empty, the pattern width is zero, or the pattern is empty or narrower
    /// than the pattern width
    pub fn synthesize(&self, depth: &DepthMap, pattern: &PatternBuffer) -> Result<OutputBuffer> {
        self.synthesize_with_warnings(depth, pattern, NonZeroUsize::MIN)
            .map(|(output, _)| output)
    }

    /// Synthesize with rows split into contiguous bands across `workers` threads
    ///
    /// The result is identical to [`Self::synthesize`] for any worker count.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` under the same conditions as
    /// [`Self::synthesize`], or `Computation` if a worker thread panics
    pub fn synthesize_parallel(
        &self,
        depth: &DepthMap,
        pattern: &PatternBuffer,
        workers: NonZeroUsize,
    ) -> Result<OutputBuffer> {
        self.synthesize_with_warnings(depth, pattern, workers)
            .map(|(output, _)| output)
    }

    /// Synthesize and return every non-fatal condition met along the way
    ///
    /// The warnings hold the configuration check followed by the number of
    /// reads that reached unresolved columns, when there were any. One worker
    /// runs on the calling thread.
    ///
    /// # Errors
    ///
    /// Same as [`Self::synthesize_parallel`]
    pub fn synthesize_with_warnings(
        &self,
        depth: &DepthMap,
        pattern: &PatternBuffer,
        workers: NonZeroUsize,
    ) -> Result<(OutputBuffer, Vec<ConfigurationWarning>)> {
        self.check_dimensions(depth, pattern)?;

        let start = Instant::now();
        let mut output = self.allocate(depth);
        let degenerate: usize = if workers.get() == 1 {
            output
                .rows_mut()
                .enumerate()
                .map(|(y, row)| self.fill_row(row, y, depth, pattern))
                .sum()
        } else {
            self.fill_bands(&mut output, depth, pattern, workers)?
        };
        self.report(degenerate, start);

        let warnings = self
            .config
            .check()
            .into_iter()
            .chain((degenerate > 0).then_some(ConfigurationWarning::UnresolvedReads {
                count: degenerate,
            }))
            .collect();
        Ok((output, warnings))
    }

    fn fill_bands(
        &self,
        output: &mut OutputBuffer,
        depth: &DepthMap,
        pattern: &PatternBuffer,
        workers: NonZeroUsize,
    ) -> Result<usize> {
        let width = output.width();
        let rows_per_band = depth.height().div_ceil(workers.get().min(depth.height()));

        let bands: Vec<std::thread::Result<usize>> = std::thread::scope(|scope| {
            let handles: Vec<_> = output
                .pixels_mut()
                .chunks_mut(rows_per_band * width)
                .enumerate()
                .map(|(band, pixels)| {
                    scope.spawn(move || {
                        let first_row = band * rows_per_band;
                        pixels
                            .chunks_exact_mut(width)
                            .enumerate()
                            .map(|(offset, row)| {
                                self.fill_row(row, first_row + offset, depth, pattern)
                            })
                            .sum::<usize>()
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut degenerate = 0;
        for (band, result) in bands.into_iter().enumerate() {
            degenerate += result.map_err(|_worker_panic| {
                computation_error("parallel synthesis", &format!("row band {band} panicked"))
            })?;
        }
        Ok(degenerate)
    }

    fn check_dimensions(&self, depth: &DepthMap, pattern: &PatternBuffer) -> Result<()> {
        let pattern_width = self.config.pattern_width;
        if pattern_width == 0 {
            return Err(dimension_mismatch(
                "pattern width",
                &"pattern width must be greater than zero",
            ));
        }
        if depth.width() == 0 || depth.height() == 0 {
            return Err(dimension_mismatch(
                "depth map",
                &format!("depth map is {}x{}", depth.width(), depth.height()),
            ));
        }
        if pattern.height() == 0 {
            return Err(dimension_mismatch(
                "pattern buffer",
                &"pattern buffer has zero height",
            ));
        }
        if pattern.width() < pattern_width {
            return Err(dimension_mismatch(
                "pattern buffer",
                &format!(
                    "pattern buffer is {} pixels wide, narrower than pattern width {pattern_width}",
                    pattern.width()
                ),
            ));
        }
        Ok(())
    }

    fn allocate(&self, depth: &DepthMap) -> OutputBuffer {
        OutputBuffer::new(self.config.output_width(depth.width()), depth.height())
    }

    // Seeds and resolves output row `y`, returning its degenerate read count
    fn fill_row(
        &self,
        row: &mut [Rgb],
        y: usize,
        depth: &DepthMap,
        pattern: &PatternBuffer,
    ) -> usize {
        let pattern_width = self.config.pattern_width;
        for (x, cell) in row.iter_mut().take(pattern_width).enumerate() {
            if let Some(color) = pattern.tiled(x, y) {
                *cell = color;
            }
        }

        depth.row(y).map_or(0, |depth_row| {
            resolve_row(row, depth_row, pattern_width, &self.table)
        })
    }

    fn report(&self, degenerate: usize, start: Instant) {
        if degenerate > 0 {
            tracing::warn!(
                degenerate,
                max_offset = self.config.max_offset(),
                pattern_width = self.config.pattern_width,
                "displacement reached unresolved columns; folded into the seed region"
            );
        }
        tracing::debug!(elapsed = ?start.elapsed(), "synthesis complete");
    }
}

/// Resolve one seeded row in place, strictly left to right
///
/// `row` must already hold the seed colors in its first `pattern_width`
/// columns. Column `x + pattern_width` is written with the color at
/// `x + offset(depth_row[x])`. Negative candidates, and candidates at or past
/// the column being written, are folded into `[0, pattern_width)`; the latter
/// are degenerate and counted in the return value. Candidates saturate at the
/// `i64` range, so any finite scale resolves. Columns past
/// `depth_row.len() + pattern_width` continue the chain one period back.
pub fn resolve_row(
    row: &mut [Rgb],
    depth_row: ArrayView1<'_, u8>,
    pattern_width: usize,
    table: &DisplacementTable,
) -> usize {
    let mut degenerate = 0;

    for (x, &sample) in depth_row.iter().enumerate() {
        let target = x + pattern_width;
        let candidate = i64::try_from(x)
            .unwrap_or(i64::MAX)
            .saturating_add(table.offset(sample));

        let source = match usize::try_from(candidate) {
            Ok(column) if column < target => Some(column),
            Ok(_) => {
                degenerate += 1;
                wrap_column(candidate, pattern_width)
            }
            Err(_) => wrap_column(candidate, pattern_width),
        };
        debug_assert!(source.is_none_or(|column| column < target));

        let value = source.and_then(|column| row.get(column).copied());
        if let (Some(value), Some(cell)) = (value, row.get_mut(target)) {
            *cell = value;
        }
    }

    fill_trailing(row, depth_row.len() + pattern_width, pattern_width);
    degenerate
}

// No-op when the row is exactly `depth width + pattern width` wide
fn fill_trailing(row: &mut [Rgb], resolved: usize, pattern_width: usize) {
    for x in resolved..row.len() {
        let value = x
            .checked_sub(pattern_width)
            .and_then(|column| row.get(column).copied());
        if let (Some(value), Some(cell)) = (value, row.get_mut(x)) {
            *cell = value;
        }
    }
}

/// Synthesize a stereogram in one call
///
/// # Errors
///
/// Returns `DimensionMismatch` if the buffers cannot be synthesized; see
/// [`Synthesizer::synthesize`]
pub fn synthesize(
    depth: &DepthMap,
    pattern: &PatternBuffer,
    config: &SynthesisConfig,
) -> Result<OutputBuffer> {
    Synthesizer::new(*config).synthesize(depth, pattern)
}
