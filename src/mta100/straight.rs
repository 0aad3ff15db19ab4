//! 647050 straight headers with retention peg.
//!
//! Pads sit on a single row inside the body outline and the footprint
//! origin is the top-left body corner.

use crate::kicad::{Footprint, Pad, Point};
use crate::mta100::outline::{self, pad_x, pin_number, PAD_DIAMETER, PAD_DRILL, PAD_ROW_Y};
use crate::mta100::parts::{Family, PartDescriptor};
use crate::mta100::{new_footprint, GeneratorOptions};

const REFERENCE_AT: Point = Point::new(-0.9525, 6.6675);
const PURPOSE_Y: f64 = 7.62;
const PIN_LABEL_Y: f64 = -0.3175;

/// Generates the footprint of a straight header.
#[must_use]
pub fn generate(part: &PartDescriptor, options: &GeneratorOptions) -> Footprint {
    let mut fp = new_footprint(Family::Straight, part);

    fp.add_label(outline::reference_label(REFERENCE_AT));
    if options.purpose_labels {
        fp.add_label(outline::purpose_label(Point::new(part.length * 0.5, PURPOSE_Y)));
    }

    fp.extend_shapes(outline::body(part.length, &options.style));
    fp.extend_shapes(outline::tab_markers(part, &options.style));

    for index in 0..part.positions {
        let pin = pin_number(part.positions, index);
        let x = pad_x(index);
        if options.purpose_labels {
            fp.add_label(outline::purpose_pin_label(pin, Point::new(x, PIN_LABEL_Y)));
        }
        fp.add_shape(Pad::through_hole(pin, (x, PAD_ROW_Y), PAD_DIAMETER, PAD_DRILL));
    }

    fp
}
