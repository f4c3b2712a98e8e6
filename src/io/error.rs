//! Error types for carving, searching, and file output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// A move string character outside the `RLUD` alphabet
    InvalidDirection {
        /// The offending character
        found: char,
        /// Zero-based index within the move string
        index: usize,
    },

    /// Board data doesn't meet structural requirements
    InvalidMazeData {
        /// Description of what's wrong with the board
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

    /// The frontier drained without reaching the finish
    ///
    /// Carved boards are spanning trees and always solvable; this occurs
    /// only for hand-built boards whose finish is sealed off.
    NoPath {
        /// Sequences expanded before the frontier drained
        expansions: usize,
        /// Board dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// The expansion budget ran out before the finish was reached
    ExpansionLimit {
        /// Configured expansion budget
        limit: usize,
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
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { found, index } => {
                write!(f, "Direction '{found}' at move {index} is not a valid direction")
            }
            Self::InvalidMazeData { reason } => {
                write!(f, "Invalid maze data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoPath {
                expansions,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "No path to the finish after {expansions} expansions (board {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "Search stopped at the expansion budget of {limit}")
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
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze operation results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
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
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a concrete path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::{MazeError, invalid_parameter};

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("rows", &0usize, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'rows' = '0': must be at least 1"
        );
    }

    #[test]
    fn test_file_system_source_is_exposed() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MazeError = io.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
