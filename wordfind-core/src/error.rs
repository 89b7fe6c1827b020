//! Error types for document search

use thiserror::Error;

/// Error type for document search operations
///
/// Every variant is fatal for the run: no partial result is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The document package could not be opened or read
    #[error("malformed document package: {0}")]
    Package(String),

    /// The package has no `word/document.xml` entry
    #[error("document body not found in package: {0}")]
    MissingBody(String),

    /// The document XML is malformed
    #[error("failed to parse document XML at byte {position}: {reason}")]
    Parse {
        /// Byte position in the XML where parsing stopped
        position: usize,
        /// What went wrong
        reason: String,
    },

    /// The XML parsed but is not a WordprocessingML document body
    #[error("unexpected root element `{0}`, expected a WordprocessingML document")]
    UnexpectedRoot(String),

    /// The word list is not valid UTF-8
    #[error("word list is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Parallel execution error
    #[error("parallel execution failed: {0}")]
    Parallel(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => Error::MissingBody(err.to_string()),
            zip::result::ZipError::Io(io) => Error::Io(io),
            other => Error::Package(other.to_string()),
        }
    }
}

/// Result type for document search operations
pub type Result<T> = std::result::Result<T, Error>;
