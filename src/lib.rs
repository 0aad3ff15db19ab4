//! mta100-footprints: KiCad footprint generator for MTA-100 connector headers
//!
//! This library computes the outline, silkscreen, courtyard and pads of TE
//! Connectivity MTA-100 headers and writes them as `.kicad_mod` files.
//!
//! # Architecture
//!
//! - **Primitives**: lines, rectangles, pads and text that serialise
//!   themselves relative to a local origin
//! - **Footprints**: named records of metadata, labels and primitives, with
//!   deterministic identifiers so regenerated files are byte-identical
//! - **Part families**: parametric layouts for straight and right angle
//!   headers, selected from the part number
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`kicad`] — KiCad footprint format and library output
//! - [`mta100`] — MTA-100 part families and the built-in part table

pub mod config;
pub mod error;
pub mod kicad;
pub mod mta100;
