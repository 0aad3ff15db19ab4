//! KiCad footprint file format handling.
//!
//! This module produces `.kicad_mod` footprint files and `.pretty` library
//! directories:
//!
//! ```text
//! Connector_MTA-100.pretty/
//! ├── mta100_01x2_P2.54_647050-2.kicad_mod
//! ├── mta100_01x3_P2.54_647050-3.kicad_mod
//! └── ...
//! ```
//!
//! A footprint file is a single S-expression: name, metadata, labels and
//! then one graphic per primitive. Every graphic carries a UUID derived
//! from the footprint name and its position in the list (see [`ident`]), so
//! regenerating a footprint reproduces the same file byte for byte.

pub mod error;
pub mod ident;
pub mod primitives;
pub mod sexpr;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use uuid::Uuid;

pub use error::{KicadError, KicadResult};
pub use primitives::{
    connected_lines, Arc, Circle, HorizontalJustify, Label, LabelKind, Layer, Line, Pad, PadRect,
    Point, Primitive, Rect, Shape, Text, VerticalJustify,
};
pub use sexpr::SExpr;

/// Footprint file format version written to every file.
pub const FORMAT_VERSION: &str = "20240108";

/// Extension of footprint files.
pub const FOOTPRINT_EXTENSION: &str = "kicad_mod";

/// Extension of footprint library directories.
pub const LIBRARY_EXTENSION: &str = "pretty";

/// Generator name written to every file.
pub const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// A complete KiCad footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    /// Footprint name (e.g., `mta100_01x2_P2.54_647050-2`).
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Space-separated search tags.
    pub tags: String,

    /// Footprint attributes (e.g., `through_hole`).
    pub attributes: Vec<String>,

    /// Properties and text placeholders, in emission order.
    pub labels: Vec<Label>,

    /// Graphic primitives, in emission order.
    pub shapes: Vec<Shape>,
}

impl Footprint {
    /// Creates a new empty footprint with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: String::new(),
            attributes: Vec::new(),
            labels: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Adds a label to the footprint.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Adds a primitive to the footprint.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Adds several primitives to the footprint.
    pub fn extend_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Returns the footprint with every primitive emitted relative to `origin`.
    ///
    /// Labels are positioned by their generator and are left unchanged.
    #[must_use]
    pub fn anchored(self, origin: Point) -> Self {
        Self {
            shapes: self
                .shapes
                .into_iter()
                .map(|shape| shape.anchored(origin))
                .collect(),
            ..self
        }
    }

    /// Iterates over the circular pads.
    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.shapes.iter().filter_map(Shape::as_pad)
    }

    /// Returns the identifiers stamped on the primitives, in emission order.
    ///
    /// Salts start at 1 and follow the order of [`Footprint::shapes`].
    #[must_use]
    pub fn graphic_ids(&self) -> Vec<Uuid> {
        (1..=self.shapes.len())
            .map(|salt| ident::make_uuid(&self.name, salt))
            .collect()
    }

    /// Builds the S-expression for the whole footprint.
    #[must_use]
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = vec![
            SExpr::str(self.name.as_str()),
            SExpr::node("version", [SExpr::sym(FORMAT_VERSION)]),
            SExpr::node("generator", [SExpr::sym(GENERATOR)]),
            SExpr::node("descr", [SExpr::str(self.description.as_str())]),
            SExpr::node("tags", [SExpr::str(self.tags.as_str())]),
        ];

        if !self.attributes.is_empty() {
            items.push(SExpr::node(
                "attr",
                self.attributes.iter().map(|attr| SExpr::sym(attr.as_str())),
            ));
        }

        items.extend(self.labels.iter().map(Label::to_sexpr));
        items.extend(
            self.shapes
                .iter()
                .zip(self.graphic_ids())
                .map(|(shape, id)| shape.graphic(id)),
        );

        SExpr::node("footprint", items)
    }

    /// Renders the footprint as `.kicad_mod` file contents.
    #[must_use]
    pub fn to_kicad_string(&self) -> String {
        self.to_sexpr().to_pretty_string()
    }

    /// Returns the file name of this footprint inside a library directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{FOOTPRINT_EXTENSION}", self.name)
    }
}

/// Writes a single footprint into `dir`, returning the file path.
///
/// The directory must already exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_footprint(dir: &Path, footprint: &Footprint) -> KicadResult<PathBuf> {
    let path = dir.join(footprint.file_name());
    std::fs::write(&path, footprint.to_kicad_string())
        .map_err(|e| KicadError::file_write(&path, e))?;

    tracing::debug!(
        path = %path.display(),
        shapes = footprint.shapes.len(),
        "Wrote footprint"
    );

    Ok(path)
}

/// A `.pretty` footprint library.
#[derive(Debug, Clone, Default)]
pub struct FootprintLib {
    /// Library name, without the `.pretty` extension.
    name: String,

    /// Footprints in the library.
    footprints: Vec<Footprint>,
}

impl FootprintLib {
    /// Creates a new empty library.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            footprints: Vec::new(),
        }
    }

    /// Returns the library name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the directory name, e.g. `Connector_MTA-100.pretty`.
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("{}.{LIBRARY_EXTENSION}", self.name)
    }

    /// Adds a footprint to the library.
    pub fn add(&mut self, footprint: Footprint) {
        self.footprints.push(footprint);
    }

    /// Returns the number of footprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    /// Returns true if the library holds no footprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    /// Writes the library under `root`, creating `<root>/<name>.pretty` if needed.
    ///
    /// Returns the paths written, one per footprint, in insertion order. A
    /// footprint whose name repeats overwrites the earlier file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a file cannot
    /// be written. Files written before the failure are left in place.
    pub fn write(&self, root: impl AsRef<Path>) -> KicadResult<Vec<PathBuf>> {
        let dir = root.as_ref().join(self.dir_name());
        std::fs::create_dir_all(&dir).map_err(|e| KicadError::create_dir(&dir, e))?;

        let mut seen = HashSet::new();
        let mut paths = Vec::with_capacity(self.footprints.len());
        for footprint in &self.footprints {
            if !seen.insert(footprint.name.as_str()) {
                tracing::warn!(name = %footprint.name, "Footprint listed twice, overwriting");
            }
            paths.push(write_footprint(&dir, footprint)?);
        }

        tracing::info!(
            path = %dir.display(),
            count = self.footprints.len(),
            "Wrote footprint library"
        );

        Ok(paths)
    }
}
