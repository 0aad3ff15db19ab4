//! 640455 polarized right angle headers.
//!
//! The leads leave the body at the top edge and bend down into a pad row
//! in front of it. The footprint is anchored on the first placed pad (the
//! highest pin number), which is the mechanical reference of the part.

use crate::kicad::{Footprint, Layer, Line, Pad, Point};
use crate::mta100::outline::{self, pad_x, pin_number, PAD_DIAMETER, PAD_DRILL};
use crate::mta100::parts::{Family, PartDescriptor};
use crate::mta100::{new_footprint, GeneratorOptions};

/// Y coordinate of the pad row (mm).
pub const PAD_ROW_Y: f64 = -2.985;

/// Y coordinate where the lead bend marker starts (mm).
const LEAD_BEND_Y: f64 = -1.8;

const REFERENCE_AT: Point = Point::new(-2.2225, 9.525);
const PURPOSE_Y: f64 = 10.4775;
const PIN_LABEL_Y: f64 = -0.9525;

/// Generates the footprint of a right angle header.
///
/// Labels are placed relative to the first pad; every primitive is built
/// in body coordinates and re-anchored on that pad at the end.
#[must_use]
pub fn generate(part: &PartDescriptor, options: &GeneratorOptions) -> Footprint {
    let origin = Point::new(pad_x(0), PAD_ROW_Y);
    let mut fp = new_footprint(Family::RightAngle, part);

    fp.add_label(outline::reference_label(REFERENCE_AT));

    fp.extend_shapes(outline::body(part.length, &options.style));
    fp.extend_shapes(outline::tab_markers(part, &options.style));

    for index in 0..part.positions {
        let pin = pin_number(part.positions, index);
        let x = pad_x(index);
        fp.add_shape(Pad::through_hole(pin, (x, PAD_ROW_Y), PAD_DIAMETER, PAD_DRILL));
        if options.purpose_labels {
            fp.add_label(outline::purpose_pin_label(
                pin,
                Point::new(x - origin.x, PIN_LABEL_Y),
            ));
        }
        fp.add_shape(Line::new(
            Layer::FrontSilkscreen,
            (x, LEAD_BEND_Y),
            (x, 0.0),
            options.style.silkscreen_line_width,
        ));
    }

    if options.purpose_labels {
        fp.add_label(outline::purpose_label(Point::new(
            part.length.mul_add(0.5, -origin.x),
            PURPOSE_Y,
        )));
    }

    fp.anchored(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kicad::Primitive;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_pad_is_origin() {
        let part = PartDescriptor::new("640455-4", 4, 10.16);
        let fp = generate(&part, &GeneratorOptions::default());

        let first = fp.pads().next().unwrap();
        assert_eq!(first.number, 4);
        let at = first.pos(first.center);
        assert!(approx_eq(at.x, 0.0));
        assert!(approx_eq(at.y, 0.0));

        let origin = Point::new(1.27, -2.985);
        assert!(fp.shapes.iter().all(|s| s.origin() == origin));
    }

    #[test]
    fn every_pad_has_a_lead_bend() {
        let part = PartDescriptor::new("640455-3", 3, 7.62);
        let fp = generate(&part, &GeneratorOptions::default());

        // Body (11) and tab (1), then pad/lead pairs.
        let tail = &fp.shapes[12..];
        assert_eq!(tail.len(), 6);
        for pair in tail.chunks(2) {
            let pad = pair[0].as_pad().unwrap();
            let lead = pair[1].as_line().unwrap();
            assert_eq!(lead.layer, Layer::FrontSilkscreen);
            assert!(approx_eq(lead.start.x, pad.center.x));
            assert!(approx_eq(lead.start.y, -1.8));
            assert!(approx_eq(lead.end.y, 0.0));
        }
    }

    #[test]
    fn labels_are_relative_to_first_pad() {
        let part = PartDescriptor::new("640455-2", 2, 5.08);
        let fp = generate(&part, &GeneratorOptions::default());

        // Reference, pin 2, pin 1, purpose.
        assert_eq!(fp.labels.len(), 4);
        assert!(approx_eq(fp.labels[0].at.x, -2.2225));
        assert_eq!(fp.labels[1].text, "${Purpose Pin2}");
        assert!(approx_eq(fp.labels[1].at.x, 0.0));
        assert!(approx_eq(fp.labels[2].at.x, 2.54));
        assert!(approx_eq(fp.labels[2].at.y, -0.9525));
        assert_eq!(fp.labels[3].text, "${Purpose}");
        assert!(approx_eq(fp.labels[3].at.x, 1.27));
        assert!(approx_eq(fp.labels[3].at.y, 10.4775));
    }
}
