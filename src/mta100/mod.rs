//! TE Connectivity MTA-100 header footprints.
//!
//! Two families are supported, both on a 2.54 mm pitch:
//!
//! - [`Family::Straight`] (647050): vertical headers with a retention peg
//! - [`Family::RightAngle`] (640455): polarized right angle headers
//!
//! Each part descriptor is resolved to its family once; an unknown part
//! number is an error rather than being skipped.
//!
//! # Example
//!
//! ```
//! use mta100_footprints::mta100::{generate, GeneratorOptions, PartDescriptor};
//!
//! let part = PartDescriptor::new("647050-2", 2, 5.08);
//! let fp = generate(&part, &GeneratorOptions::default()).unwrap();
//!
//! assert_eq!(fp.name, "mta100_01x2_P2.54_647050-2");
//! assert_eq!(fp.pads().count(), 2);
//! ```

pub mod outline;
pub mod parts;
pub mod right_angle;
pub mod straight;

use std::path::{Path, PathBuf};

pub use parts::{standard_parts, Family, PartDescriptor};

use crate::config::StyleConfig;
use crate::error::GenerateError;
use crate::kicad::{Footprint, FootprintLib};

/// Options applied to every generated footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Emit `${Purpose}` text placeholders for the connector and each pin.
    pub purpose_labels: bool,

    /// Line widths.
    pub style: StyleConfig,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            purpose_labels: true,
            style: StyleConfig::default(),
        }
    }
}

/// Creates a footprint with the family's name and metadata filled in.
pub(crate) fn new_footprint(family: Family, part: &PartDescriptor) -> Footprint {
    let mut fp = Footprint::new(family.footprint_name(part));
    fp.description = family.description(part);
    fp.tags = family.tags().to_string();
    fp.attributes.push("through_hole".to_string());
    fp
}

impl Family {
    /// Generates the footprint of `part` with this family's layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is invalid.
    pub fn generate(
        self,
        part: &PartDescriptor,
        options: &GeneratorOptions,
    ) -> Result<Footprint, GenerateError> {
        part.validate()?;

        let footprint = match self {
            Self::Straight => straight::generate(part, options),
            Self::RightAngle => right_angle::generate(part, options),
        };

        tracing::debug!(
            part = %part.part_number,
            family = %self,
            name = %footprint.name,
            "Generated footprint"
        );

        Ok(footprint)
    }
}

/// Generates the footprint for one part.
///
/// # Errors
///
/// Returns an error if the part number matches no family or the
/// descriptor is invalid.
pub fn generate(
    part: &PartDescriptor,
    options: &GeneratorOptions,
) -> Result<Footprint, GenerateError> {
    Family::resolve(&part.part_number)?.generate(part, options)
}

/// Generates every part and groups the footprints by library.
///
/// Libraries appear in the order their first part does.
///
/// # Errors
///
/// Returns the first generation error; no library is returned in that case.
pub fn build_libraries(
    parts: &[PartDescriptor],
    options: &GeneratorOptions,
) -> Result<Vec<FootprintLib>, GenerateError> {
    let mut libraries: Vec<FootprintLib> = Vec::new();

    for part in parts {
        let family = Family::resolve(&part.part_number)?;
        let footprint = family.generate(part, options)?;

        let index = match libraries
            .iter()
            .position(|lib| lib.name() == family.library_name())
        {
            Some(index) => index,
            None => {
                libraries.push(FootprintLib::new(family.library_name()));
                libraries.len() - 1
            }
        };
        libraries[index].add(footprint);
    }

    Ok(libraries)
}

/// Generates every part and writes the libraries under `output_dir`.
///
/// Returns the paths of the written footprint files.
///
/// # Errors
///
/// Returns an error if a part cannot be generated or a file cannot be
/// written.
pub fn generate_all(
    parts: &[PartDescriptor],
    options: &GeneratorOptions,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let libraries = build_libraries(parts, options)?;

    let mut paths = Vec::new();
    for library in &libraries {
        paths.extend(library.write(output_dir)?);
    }

    tracing::info!(
        parts = parts.len(),
        files = paths.len(),
        output = %output_dir.display(),
        "Generation complete"
    );

    Ok(paths)
}
