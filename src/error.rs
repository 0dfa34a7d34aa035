//! Error types for the Folio library.
//!
//! All fallible internal operations return [`Result`], whose error type is
//! [`FolioError`]. The public text-processing entry points never surface
//! these errors; they degrade instead (see [`crate::processor`]).
//!
//! # Examples
//!
//! ```
//! use folio::error::{FolioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FolioError::config("data_dir must be a directory"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O errors (reading or writing the resource cache, catalog files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Linguistic resource errors (missing or malformed stopword/lexicon data)
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named input (such as a catalog file) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        FolioError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FolioError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FolioError::Config(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        FolioError::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FolioError::resource("stopwords missing");
        assert_eq!(error.to_string(), "Resource error: stopwords missing");

        let error = FolioError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = FolioError::config("bad value");
        assert_eq!(error.to_string(), "Configuration error: bad value");

        let error = FolioError::not_found("catalog.json");
        assert_eq!(error.to_string(), "Not found: catalog.json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let folio_error = FolioError::from(io_error);

        match folio_error {
            FolioError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
