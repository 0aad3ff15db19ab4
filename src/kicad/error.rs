//! Error types for KiCad library output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for KiCad library operations.
pub type KicadResult<T> = Result<T, KicadError>;

/// Errors that can occur while writing a footprint library.
#[derive(Debug, Error)]
pub enum KicadError {
    /// Failed to create the library directory.
    #[error("Failed to create library directory: {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write a footprint file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl KicadError {
    /// Creates a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
