//! Error types for deltaq-io.

use std::path::PathBuf;

use deltaq_series::SeriesError;

/// Error type for all fallible operations in the deltaq-io crate.
///
/// This enum covers missing files, underlying I/O failures, row-level
/// parse errors with their location, and validation failures raised by
/// the series model once a file has been read.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error from the operating system while reading or writing.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when one row of a text file cannot be parsed.
    #[error("{}: row {row}: {reason}", path.display())]
    ParseRow {
        /// Path to the offending file.
        path: PathBuf,
        /// 1-based row number.
        row: usize,
        /// Description of the parse failure.
        reason: String,
    },

    /// Wraps a validation error from the series model.
    #[error("invalid series in {}: {source}", path.display())]
    Series {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying series validation failure.
        #[source]
        source: SeriesError,
    },
}
