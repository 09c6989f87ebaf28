//! Error types and context management for level building

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all level-building operations
#[derive(Debug)]
pub enum LevelError {
    /// Quadrant has no rows or no columns
    EmptyGrid,

    /// Quadrant rows differ in length
    RaggedRow {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Authored integer does not map to any tile category
    UnknownCategory {
        /// The unmapped value
        value: i64,
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
    },

    /// Text quadrant contains a token that is not an integer
    Parse {
        /// One-based line number in the source text
        line: usize,
        /// The offending token
        token: String,
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

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Path of the JSON document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "Quadrant grid is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Quadrant is not rectangular: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::UnknownCategory { value, row, col } => {
                write!(f, "Unknown tile category {value} at row {row}, column {col}")
            }
            Self::Parse { line, token } => {
                write!(f, "Invalid tile token '{token}' on line {line}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Serialization { path, source } => {
                write!(f, "JSON error in '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for level-building results
pub type Result<T> = std::result::Result<T, LevelError>;

const UNKNOWN_PATH: &str = "<unknown>";

impl From<std::io::Error> for LevelError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

/// Enriches path-carrying errors with the file being processed
pub trait WithPath<T> {
    /// Fill in the path of errors converted without one
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<LevelError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                LevelError::FileSystem { path: slot, .. }
                | LevelError::Serialization { path: slot, .. }
                | LevelError::ImageExport { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    path.clone_into(slot);
                }
                _ => {}
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
