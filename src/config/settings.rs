//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::kicad::Line;
use crate::mta100::{GeneratorOptions, PartDescriptor};

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Directory the footprint libraries are written into.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Emit purpose text placeholders. Default: true.
    #[serde(default = "default_true")]
    pub purpose_labels: bool,

    /// Style settings.
    #[serde(default)]
    pub style: StyleConfig,

    /// Parts to generate instead of the built-in table.
    #[serde(default)]
    pub parts: Option<Vec<PartDescriptor>>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            _schema: None,
            _comment: None,
            output_dir: None,
            purpose_labels: default_true(),
            style: StyleConfig::default(),
            parts: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style.validate()?;

        if let Some(parts) = &self.parts {
            if parts.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "parts list is empty".to_string(),
                });
            }
            for part in parts {
                part.validate().map_err(|e| ConfigError::ValidationError {
                    message: e.to_string(),
                })?;
            }
        }

        Ok(())
    }

    /// Options passed to every footprint generator.
    #[must_use]
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            purpose_labels: self.purpose_labels,
            style: self.style.clone(),
        }
    }

    /// Output directory, defaulting to the current directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Parts to generate: the configured list or the built-in table.
    #[must_use]
    pub fn parts(&self) -> Vec<PartDescriptor> {
        self.parts
            .clone()
            .unwrap_or_else(crate::mta100::standard_parts)
    }
}

const fn default_true() -> bool {
    true
}

/// Line widths for generated footprints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Silkscreen line width in mm.
    #[serde(default = "default_silkscreen_width")]
    pub silkscreen_line_width: f64,

    /// Fabrication drawing line width in mm.
    #[serde(default = "default_fabrication_width")]
    pub fabrication_line_width: f64,

    /// Courtyard line width in mm.
    #[serde(default = "default_courtyard_width")]
    pub courtyard_line_width: f64,
}

impl StyleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let widths = [
            ("silkscreen_line_width", self.silkscreen_line_width),
            ("fabrication_line_width", self.fabrication_line_width),
            ("courtyard_line_width", self.courtyard_line_width),
        ];
        for (name, width) in widths {
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be positive, got {width}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            silkscreen_line_width: default_silkscreen_width(),
            fabrication_line_width: default_fabrication_width(),
            courtyard_line_width: default_courtyard_width(),
        }
    }
}

const fn default_silkscreen_width() -> f64 {
    Line::DEFAULT_WIDTH
}

const fn default_fabrication_width() -> f64 {
    0.10
}

const fn default_courtyard_width() -> f64 {
    0.05
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
