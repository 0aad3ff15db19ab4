//! Part descriptors and connector families.

use std::fmt;

use serde::Deserialize;

use crate::error::GenerateError;
use crate::mta100::outline::{FIRST_PAD_X, PITCH};

/// Tolerance used when comparing descriptor dimensions (mm).
const DIMENSION_EPSILON: f64 = 1e-6;

/// Input parameters for one connector footprint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartDescriptor {
    /// Manufacturer part number, e.g. `647050-2`.
    #[serde(alias = "partno")]
    pub part_number: String,

    /// Number of pin positions.
    pub positions: u32,

    /// Body length along the pin row (mm).
    #[serde(alias = "l")]
    pub length: f64,

    /// Retention tab width (mm). Only meaningful together with `gap`.
    #[serde(default, alias = "w", skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<f64>,

    /// Clearance between split retention tabs (mm).
    #[serde(default, alias = "g", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

impl PartDescriptor {
    /// Creates a descriptor with a single retention tab.
    #[must_use]
    pub fn new(part_number: impl Into<String>, positions: u32, length: f64) -> Self {
        Self {
            part_number: part_number.into(),
            positions,
            length,
            tab_width: None,
            gap: None,
        }
    }

    /// Returns the descriptor with split retention tabs separated by `gap`.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Returns the descriptor with the given tab width.
    #[must_use]
    pub fn with_tab_width(mut self, width: f64) -> Self {
        self.tab_width = Some(width);
        self
    }

    /// Checks that the pads and tabs fit on the body.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidPart`] describing the first problem found.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let invalid = |message: String| GenerateError::InvalidPart {
            part_number: self.part_number.clone(),
            message,
        };

        if self.positions < 2 {
            return Err(invalid(format!(
                "needs at least 2 positions, got {}",
                self.positions
            )));
        }

        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(invalid(format!(
                "body length must be positive, got {}",
                self.length
            )));
        }

        let row_length = f64::from(self.positions) * PITCH;
        if self.length + DIMENSION_EPSILON < row_length {
            return Err(invalid(format!(
                "body length {} is shorter than the {} position pin row ({row_length:.2} mm)",
                self.length, self.positions
            )));
        }

        if let Some(gap) = self.gap {
            let max_gap = 2.0f64.mul_add(-FIRST_PAD_X, self.length);
            if !gap.is_finite() || gap <= 0.0 || gap >= max_gap {
                return Err(invalid(format!(
                    "tab gap must be between 0 and {max_gap:.2} mm, got {gap}"
                )));
            }
        }

        if let Some(width) = self.tab_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(invalid(format!("tab width must be positive, got {width}")));
            }
        }

        Ok(())
    }
}

/// Supported MTA-100 header families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 647050: straight headers with retention peg.
    Straight,
    /// 640455: polarized right angle headers.
    RightAngle,
}

impl Family {
    /// Every supported family.
    pub const ALL: [Self; 2] = [Self::Straight, Self::RightAngle];

    /// Part number series identifying the family.
    #[must_use]
    pub const fn series(self) -> &'static str {
        match self {
            Self::Straight => "647050",
            Self::RightAngle => "640455",
        }
    }

    /// Resolves the family from a part number.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnknownFamily`] if no family series occurs
    /// in the part number.
    pub fn resolve(part_number: &str) -> Result<Self, GenerateError> {
        Self::ALL
            .into_iter()
            .find(|family| part_number.contains(family.series()))
            .ok_or_else(|| GenerateError::UnknownFamily {
                part_number: part_number.to_string(),
            })
    }

    /// Name of the footprint library the family is written to.
    #[must_use]
    pub const fn library_name(self) -> &'static str {
        "Connector_MTA-100"
    }

    /// Footprint name for a part of this family.
    #[must_use]
    pub fn footprint_name(self, part: &PartDescriptor) -> String {
        format!("mta100_01x{}_P2.54_{}", part.positions, part.part_number)
    }

    /// Footprint description for a part of this family.
    #[must_use]
    pub fn description(self, part: &PartDescriptor) -> String {
        let kind = match self {
            Self::Straight => "Headers with retention peg, straight angle",
            Self::RightAngle => "polarized headers, right angle",
        };
        format!(
            "MTA-100 {kind}, {} positions. Part code {}",
            part.positions, part.part_number
        )
    }

    /// Search tags for the family.
    #[must_use]
    pub const fn tags(self) -> &'static str {
        match self {
            Self::Straight => "MTA-100 2.54mm header single row",
            Self::RightAngle => "MTA-100 2.54mm header single row polarized",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight ({})", self.series()),
            Self::RightAngle => write!(f, "right angle ({})", self.series()),
        }
    }
}

/// Built-in part table: `(part number, positions, body length, tab gap)`.
///
/// The `-9` parts are listed twice; the second write reproduces the first.
const STANDARD_PARTS: [(&str, u32, f64, Option<f64>); 18] = [
    ("647050-2", 2, 5.08, None),
    ("647050-3", 3, 7.62, None),
    ("647050-4", 4, 10.16, None),
    ("647050-5", 5, 12.7, None),
    ("647050-6", 6, 15.24, None),
    ("647050-7", 7, 17.78, None),
    ("647050-8", 8, 20.32, Some(2.54)),
    ("647050-9", 9, 22.86, Some(5.08)),
    ("647050-9", 9, 22.86, Some(5.08)),
    ("640455-2", 2, 5.08, None),
    ("640455-3", 3, 7.62, None),
    ("640455-4", 4, 10.16, None),
    ("640455-5", 5, 12.7, None),
    ("640455-6", 6, 15.24, None),
    ("640455-7", 7, 17.78, None),
    ("640455-8", 8, 20.32, None),
    ("640455-9", 9, 22.86, None),
    ("640455-9", 9, 22.86, None),
];

/// Returns the built-in MTA-100 part table.
#[must_use]
pub fn standard_parts() -> Vec<PartDescriptor> {
    STANDARD_PARTS
        .iter()
        .map(|&(part_number, positions, length, gap)| PartDescriptor {
            part_number: part_number.to_string(),
            positions,
            length,
            tab_width: None,
            gap,
        })
        .collect()
}
