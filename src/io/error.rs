//! Error types for pattern parsing, layout transforms and catalog I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern and layout operations
#[derive(Debug)]
pub enum CanvasError {
    /// Pattern description contained no bracketed matrix rows
    EmptyPattern,

    /// Matrix rows have inconsistent lengths
    IrregularMatrix {
        /// Index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Matrix entry does not address a slot inside one block
    SlotOutOfRange {
        /// The offending matrix entry
        slot: usize,
        /// Number of tile slots per block
        number_of_tiles: usize,
    },

    /// Required key missing from a pattern description resource
    MissingField {
        /// Name of the missing key
        field: &'static str,
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

    /// Tile index arithmetic exceeded the available tile count
    TileIndexOutOfRange {
        /// The computed tile index
        index: usize,
        /// Number of tiles available
        available: usize,
    },

    /// Block placement fell outside the allocated canvas
    ///
    /// Happens when the round-to-nearest height calculation allocates fewer
    /// block rows than the placement loop needs (fractional block-row counts
    /// below one half).
    CanvasOverflow {
        /// Destination column
        x: usize,
        /// Destination row
        y: usize,
        /// Allocated canvas dimensions (rows, cols)
        canvas: (usize, usize),
    },

    /// Catalog lookup found no pattern with the requested name
    PatternNotFound {
        /// The requested pattern name
        name: String,
    },

    /// A pattern description file failed to parse during a catalog load
    PatternFile {
        /// Path to the offending file
        path: PathBuf,
        /// Description of the underlying parse failure
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

    /// Failed to save a canvas preview image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => {
                write!(f, "Pattern description contains no bracketed rows")
            }
            Self::IrregularMatrix {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Matrix row {row} has {found} entries, expected {expected}"
                )
            }
            Self::SlotOutOfRange {
                slot,
                number_of_tiles,
            } => {
                write!(
                    f,
                    "Matrix entry {slot} is outside the block range 0..{number_of_tiles}"
                )
            }
            Self::MissingField { field } => {
                write!(f, "Pattern description is missing the '{field}' key")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileIndexOutOfRange { index, available } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds ({available} tiles available)"
                )
            }
            Self::CanvasOverflow { x, y, canvas } => {
                write!(
                    f,
                    "Block placement at ({x}, {y}) falls outside the {}x{} canvas",
                    canvas.0, canvas.1
                )
            }
            Self::PatternNotFound { name } => {
                write!(f, "No pattern named '{name}' in the catalog")
            }
            Self::PatternFile { path, reason } => {
                write!(
                    f,
                    "Failed to parse pattern file '{}': {reason}",
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern and layout results
pub type Result<T> = std::result::Result<T, CanvasError>;

impl From<std::io::Error> for CanvasError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CanvasError {
    CanvasError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the offending path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> CanvasError {
    CanvasError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
