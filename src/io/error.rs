//! Error types and non-fatal warnings for stereogram synthesis

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Failed to load a depth map or pattern image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Buffer dimensions cannot be synthesized without out-of-range indexing
    ///
    /// Raised before any output buffer is allocated when:
    /// - The pattern width is zero
    /// - The pattern buffer has zero height or is narrower than the pattern width
    /// - The depth map has zero width or height
    DimensionMismatch {
        /// Which buffer or parameter is at fault
        buffer: &'static str,
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Computation could not be completed
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DimensionMismatch { buffer, reason } => {
                write!(f, "Dimension mismatch in {buffer}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<image::ImageError> for SynthesisError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Non-fatal condition reported to the caller while synthesis proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationWarning {
    /// The largest depth-induced displacement reaches a full pattern period
    ///
    /// Synthesis still runs, but depth swings can reference columns that are
    /// not resolved yet and the output may look incoherent.
    DisplacementExceedsPeriod {
        /// `round(255 * scale)`
        max_offset: i64,
        /// Configured pattern width
        pattern_width: usize,
    },

    /// Some displacements pointed at columns not resolved yet
    ///
    /// Those reads were folded into the seed region instead.
    UnresolvedReads {
        /// Number of folded reads across the whole image
        count: usize,
    },
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisplacementExceedsPeriod {
                max_offset,
                pattern_width,
            } => write!(
                f,
                "maximum displacement {max_offset} is not smaller than pattern width {pattern_width}; \
                 lower the scale or widen the pattern"
            ),
            Self::UnresolvedReads { count } => write!(
                f,
                "{count} reads reached unresolved columns and were folded into the seed region"
            ),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dimension mismatch error
pub fn dimension_mismatch(buffer: &'static str, reason: &impl ToString) -> SynthesisError {
    SynthesisError::DimensionMismatch {
        buffer,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SynthesisError {
    SynthesisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable target or output path
pub fn path_error(path: &std::path::Path, msg: &str) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter: "path",
        value: path.display().to_string(),
        reason: msg.to_string(),
    }
}
