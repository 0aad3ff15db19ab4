//! Error types for mta100-footprints.

use std::path::PathBuf;

use thiserror::Error;

use crate::kicad::KicadError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while generating footprints.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The part number does not belong to any supported connector family.
    #[error("unknown connector family for part number '{part_number}'")]
    UnknownFamily {
        /// The unmatched part number.
        part_number: String,
    },

    /// The part descriptor has impossible dimensions.
    #[error("invalid part '{part_number}': {message}")]
    InvalidPart {
        /// Part number of the rejected descriptor.
        part_number: String,
        /// Description of what's wrong.
        message: String,
    },

    /// Writing the footprint library failed.
    #[error(transparent)]
    Kicad(#[from] KicadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("invalid setting"));
    }

    #[test]
    fn unknown_family_display() {
        let error = GenerateError::UnknownFamily {
            part_number: "123456-7".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unknown connector family for part number '123456-7'"
        );
    }

    #[test]
    fn kicad_error_is_transparent() {
        let inner = KicadError::file_write(
            "/out/x.kicad_mod",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        let error = GenerateError::from(inner);
        assert!(error.to_string().starts_with("Failed to write file"));
    }
}
