//! Body geometry shared by every MTA-100 header.
//!
//! Coordinates are in millimetres with the origin on the top-left corner of
//! the body and Y growing downwards. The body is a rectangle of the part's
//! length by [`BODY_DEPTH`], with its top-right corner chamfered.
//!
//! ```text
//!  (0,0) ______________ (L-1,0)
//!       |              \
//!       |               | (L,1)
//!       |               |
//!       |_______________| (L,6.35)
//! ```

use std::f64::consts::PI;

use crate::config::StyleConfig;
use crate::kicad::{connected_lines, Label, Layer, Point, Rect, Shape};
use crate::mta100::parts::PartDescriptor;

/// Pin pitch (mm).
pub const PITCH: f64 = 2.54;

/// X coordinate of the leftmost pad centre (mm).
pub const FIRST_PAD_X: f64 = 1.27;

/// Body depth across the pin row (mm).
pub const BODY_DEPTH: f64 = 6.35;

/// Size of the chamfer on the top-right body corner (mm).
pub const CHAMFER: f64 = 1.0;

/// Height of the pin row including the standoff (mm).
pub const PIN_ROW_HEIGHT: f64 = 7.62;

/// Courtyard clearance around the body (mm).
pub const COURTYARD_MARGIN: f64 = 0.5;

/// Silkscreen clearance outside the body (mm).
pub const SILK_MARGIN: f64 = 0.1;

/// Pad land diameter (mm).
pub const PAD_DIAMETER: f64 = 1.85;

/// Pad drill diameter (mm).
pub const PAD_DRILL: f64 = 1.1;

/// Y coordinate of the pad row on straight headers (mm).
pub const PAD_ROW_Y: f64 = 2.87;

/// Distance of the retention tabs from each body end (mm).
const TAB_INSET: f64 = 1.27;

/// Depth of the retention tab marker below the body top edge (mm).
const TAB_DEPTH: f64 = PAD_ROW_Y - 0.64 - 0.64 / 2.0;

/// Pin-row standoff above the body (mm).
fn standoff() -> f64 {
    PIN_ROW_HEIGHT - BODY_DEPTH
}

/// Shift of the silkscreen chamfer end points along the body edges:
/// `SILK_MARGIN * tan(11.25°)`.
fn sloped_margin() -> f64 {
    SILK_MARGIN * (PI / 16.0).tan()
}

/// Centre X of the pad at `index`, counted from the left.
#[must_use]
pub fn pad_x(index: u32) -> f64 {
    f64::from(index).mul_add(PITCH, FIRST_PAD_X)
}

/// Pin number of the pad at `index`; pins are numbered right to left.
#[must_use]
pub const fn pin_number(positions: u32, index: u32) -> u32 {
    positions - index
}

/// Fabrication outline, courtyard and silkscreen outline for a body of `length`.
#[must_use]
pub fn body(length: f64, style: &StyleConfig) -> Vec<Shape> {
    let mut shapes = connected_lines(
        Layer::FrontFab,
        &[
            Point::new(0.0, 0.0),
            Point::new(length - CHAMFER, 0.0),
            Point::new(length, CHAMFER),
            Point::new(length, BODY_DEPTH),
            Point::new(0.0, BODY_DEPTH),
        ],
        style.fabrication_line_width,
        true,
    );

    shapes.push(courtyard(length, style).into());

    let s = SILK_MARGIN;
    let sm = sloped_margin();
    shapes.extend(connected_lines(
        Layer::FrontSilkscreen,
        &[
            Point::new(-s, -s),
            Point::new(length - CHAMFER + sm, -s),
            Point::new(length + s, CHAMFER - sm),
            Point::new(length + s, BODY_DEPTH + s),
            Point::new(-s, BODY_DEPTH + s),
        ],
        style.silkscreen_line_width,
        true,
    ));

    shapes
}

/// Courtyard rectangle around the body and pin-row standoff.
#[must_use]
pub fn courtyard(length: f64, style: &StyleConfig) -> Rect {
    let m = standoff();
    Rect::new(
        Layer::FrontCourtyard,
        (-COURTYARD_MARGIN, -m - COURTYARD_MARGIN),
        (
            length + COURTYARD_MARGIN,
            PIN_ROW_HEIGHT + COURTYARD_MARGIN - m / 2.0,
        ),
        style.courtyard_line_width,
    )
}

/// Filled silkscreen markers for the retention tabs.
///
/// Without a gap there is one tab spanning the body. A gap splits it into
/// two tabs whose inner edges sit `gap / 2` either side of the body centre.
/// A gap together with an explicit tab width produces no marker.
#[must_use]
pub fn tab_markers(part: &PartDescriptor, style: &StyleConfig) -> Vec<Shape> {
    let length = part.length;
    let top = -SILK_MARGIN;
    let bottom = TAB_DEPTH - SILK_MARGIN;
    let tab = |left: f64, right: f64| -> Shape {
        Rect::filled(
            Layer::FrontSilkscreen,
            (left, top),
            (right, bottom),
            style.silkscreen_line_width,
        )
        .into()
    };

    match (part.gap, part.tab_width) {
        (None, _) => vec![tab(TAB_INSET, length - TAB_INSET)],
        (Some(gap), None) => {
            let centre = length / 2.0;
            vec![
                tab(TAB_INSET, centre - gap / 2.0),
                tab(centre + gap / 2.0, length - TAB_INSET),
            ]
        }
        (Some(_), Some(_)) => {
            tracing::debug!(
                part = %part.part_number,
                "Tab width given with a gap, no retention tab marker"
            );
            Vec::new()
        }
    }
}

/// Reference designator property.
#[must_use]
pub fn reference_label(at: Point) -> Label {
    Label::property("Reference", "Ref**", Layer::FrontSilkscreen, at, -90.0)
}

/// Placeholder for the connector's overall purpose.
#[must_use]
pub fn purpose_label(at: Point) -> Label {
    Label::user(
        "${Purpose}",
        "label_purpose",
        Layer::FrontSilkscreen,
        at,
        0.0,
    )
    .with_font(1.2, 0.2)
}

/// Placeholder for the purpose of one pin, rotated to run along the pin.
#[must_use]
pub fn purpose_pin_label(pin: u32, at: Point) -> Label {
    Label::user(
        format!("${{Purpose Pin{pin}}}"),
        format!("purpose_pin_{pin}"),
        Layer::FrontSilkscreen,
        at,
        90.0,
    )
}
