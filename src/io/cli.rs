//! Command-line interface for turning depth maps into stereograms

use crate::algorithm::{Direction, SynthesisConfig, Synthesizer};
use crate::io::configuration::{
    DEFAULT_PATTERN_WIDTH, DEFAULT_SCALE, DEFAULT_SEED, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    PATTERN_SUFFIX,
};
use crate::io::error::{Result, SynthesisError, path_error};
use crate::io::image::{export_output, export_pattern, load_depth_map, load_pattern_image};
use crate::io::progress::ProgressManager;
use crate::spatial::PatternBuffer;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parse a pattern width, rejecting zero
///
/// # Errors
///
/// Returns a message if the value is not a positive integer
pub fn parse_pattern_width(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("pattern width must be greater than zero".to_string()),
        Ok(width) => Ok(width),
        Err(e) => Err(format!("'{value}' is not a pattern width: {e}")),
    }
}

/// Parse a displacement scale, rejecting non-positive and non-finite values
///
/// # Errors
///
/// Returns a message if the value is not a finite number greater than zero
pub fn parse_scale(value: &str) -> std::result::Result<f64, String> {
    let scale = value
        .parse::<f64>()
        .map_err(|e| format!("'{value}' is not a scale: {e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a finite number greater than zero, got {scale}"))
    }
}

#[derive(Parser)]
#[command(name = "sirds")]
#[command(
    author,
    version,
    about = "Generate single image random dot stereograms from depth maps"
)]
/// Command-line arguments for the stereogram tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Depth map image, or directory of PNG depth maps
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output path (single depth map only; defaults to <input>_sirds.png)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Width of one pattern repetition in pixels
    #[arg(short, long, default_value_t = DEFAULT_PATTERN_WIDTH, value_parser = parse_pattern_width)]
    pub pattern_width: usize,

    /// Displacement in pixels per unit of depth
    #[arg(short, long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    pub scale: f64,

    /// Generate for cross-eyed viewing instead of wall-eyed
    #[arg(short = 'x', long)]
    pub cross_eyed: bool,

    /// Image to repeat instead of random dots (used as-is, at least pattern-width wide)
    #[arg(long, value_name = "IMAGE")]
    pub pattern: Option<PathBuf>,

    /// Random seed for reproducible dot patterns
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also save the pattern next to each output (<input>_pattern.png)
    #[arg(long)]
    pub save_pattern: bool,

    /// Worker threads splitting each image by rows
    #[arg(short = 'j', long)]
    pub threads: Option<NonZeroUsize>,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Eye convergence selected on the command line
    pub const fn direction(&self) -> Direction {
        if self.cross_eyed {
            Direction::CrossEyed
        } else {
            Direction::WallEyed
        }
    }

    /// Synthesis parameters selected on the command line
    pub const fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig::new(self.pattern_width, self.scale, self.direction())
    }
}

/// Orchestrates batch synthesis of depth map files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Synthesize stereograms according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or target validation fails, or if
    /// any depth map cannot be loaded, synthesized or saved
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.synthesis_config();
        config.validate()?;

        if self.cli.output.is_some() && self.cli.target.is_dir() {
            return Err(path_error(
                &self.cli.target,
                "--output requires a single depth map target, not a directory",
            ));
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let supplied_pattern = self
            .cli
            .pattern
            .as_deref()
            .map(load_pattern_image)
            .transpose()?;
        let synthesizer = Synthesizer::new(config);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &synthesizer, supplied_pattern.as_ref())?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| SynthesisError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_depth_map_candidate(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                target,
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            tracing::info!(
                input = %input_path.display(),
                "skipping, output exists"
            );
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        synthesizer: &Synthesizer,
        supplied_pattern: Option<&PatternBuffer>,
    ) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let depth = load_depth_map(input_path)?.depth;

        let generated;
        let pattern = if let Some(pattern) = supplied_pattern {
            pattern
        } else {
            generated = PatternBuffer::random_seeded(
                synthesizer.config().pattern_width,
                depth.height(),
                self.cli.seed,
            );
            &generated
        };

        if self.cli.save_pattern {
            export_pattern(pattern, &get_pattern_path(input_path))?;
        }

        let output = match self.cli.threads {
            Some(workers) if workers.get() > 1 => {
                synthesizer.synthesize_parallel(&depth, pattern, workers)?
            }
            _ => synthesizer.synthesize(&depth, pattern)?,
        };
        let (width, height) = (output.width(), output.height());

        export_output(output, &output_path)?;

        tracing::info!(
            input = %input_path.display(),
            output = %output_path.display(),
            width,
            height,
            elapsed = ?start_time.elapsed(),
            "stereogram written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }

        Ok(())
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| get_output_path(input_path))
    }
}

fn with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{OUTPUT_EXTENSION}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Default stereogram path for a depth map, `<stem>_sirds.png`
pub fn get_output_path(input_path: &Path) -> PathBuf {
    with_suffix(input_path, OUTPUT_SUFFIX)
}

/// Saved pattern path for a depth map, `<stem>_pattern.png`
pub fn get_pattern_path(input_path: &Path) -> PathBuf {
    with_suffix(input_path, PATTERN_SUFFIX)
}

/// Check whether a directory entry should be treated as a depth map
///
/// Only PNG files are considered, and files this tool wrote are excluded.
pub fn is_depth_map_candidate(path: &Path) -> bool {
    let is_png = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
    let is_generated = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(PATTERN_SUFFIX));
    path.is_file() && is_png && !is_generated
}
