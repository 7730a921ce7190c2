//! Batch progress display for directory runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many depth maps of a batch have been synthesized
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    total_elapsed: Duration,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
            total_elapsed: Duration::ZERO,
        }
    }

    /// Set the number of files in the batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
        self.completed = 0;
        self.total_elapsed = Duration::ZERO;
    }

    /// Show the file currently being synthesized
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark a file as synthesized
    pub fn complete_file(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.total_elapsed += elapsed;
        self.bar.inc(1);
    }

    /// Number of files completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Time spent synthesizing completed files
    pub const fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Summary shown when the batch ends
    pub fn summary(&self) -> String {
        format!(
            "{} stereogram(s) in {:.2?}",
            self.completed, self.total_elapsed
        )
    }

    /// Leave the batch summary on the bar
    pub fn finish(&self) {
        self.bar.finish_with_message(self.summary());
    }
}
