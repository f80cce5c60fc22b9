//! Error types for pluto-io.

use std::path::PathBuf;

use crate::grid::Axis;

/// Error type for all fallible operations in the pluto-io crate.
///
/// Covers I/O failures, malformed lines in any of the supported text
/// formats, structural problems in `pluto.ini` files, and grid invariant
/// violations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps any other failure to read or write a file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying operating-system error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a line has the wrong number of fields or a field
    /// fails numeric parsing.
    #[error("malformed input at {}:{line}: {reason}", path.display())]
    Malformed {
        /// File containing the offending line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Returned when a grid file ends before an axis block is complete.
    #[error(
        "truncated grid file {}: axis {axis} declares {expected} point(s), found {got}",
        path.display()
    )]
    Truncated {
        /// Grid file being read.
        path: PathBuf,
        /// Axis whose block was cut short.
        axis: Axis,
        /// Declared point count.
        expected: usize,
        /// Data lines actually present.
        got: usize,
    },

    /// Returned when a key-value line appears before any `[section]` header.
    #[error("key-value pair outside of any section at {}:{line}", path.display())]
    KeyOutsideSection {
        /// Configuration file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },

    /// Returned when a configuration value cannot be converted to the
    /// requested type.
    #[error("invalid value '{value}' for [{section}] {key}: {reason}")]
    InvalidValue {
        /// Section holding the key.
        section: String,
        /// Key that was looked up.
        key: String,
        /// Raw value found in the document.
        value: String,
        /// Conversion error message.
        reason: String,
    },

    /// Returned when one or more grid invariants fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a geometry label is not one PLUTO understands.
    #[error("unknown geometry: {name:?}")]
    UnknownGeometry {
        /// Label as given by the caller.
        name: String,
    },
}

impl IoError {
    /// Maps a `std::io::Error` for `path`, singling out missing files.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound { path }
        } else {
            IoError::Io { path, source }
        }
    }
}
