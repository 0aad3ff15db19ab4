//! Footprint generation tests for both MTA-100 families.
//!
//! These tests check the serialised S-expression of generated footprints:
//! pad numbering, retention tab selection, re-anchoring and identifiers.

use std::collections::HashSet;

use mta100_footprints::kicad::SExpr;
use mta100_footprints::mta100::{generate, standard_parts, GeneratorOptions, PartDescriptor};

/// Helper to compare floats with tolerance.
fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Returns the numeric arguments of the child list headed by `key`.
fn numbers(expr: &SExpr, key: &str) -> Vec<f64> {
    expr.get(key)
        .and_then(SExpr::as_list)
        .map(|items| items.iter().filter_map(SExpr::as_number).collect())
        .unwrap_or_default()
}

/// Returns the first string argument of the child list headed by `key`.
fn string_arg<'a>(expr: &'a SExpr, key: &str) -> Option<&'a str> {
    expr.get(key)?.as_list()?.get(1)?.as_str()
}

fn footprint(part: &PartDescriptor) -> SExpr {
    generate(part, &GeneratorOptions::default())
        .expect("generation failed")
        .to_sexpr()
}

fn filled_silk_rects(expr: &SExpr) -> Vec<&SExpr> {
    expr.get_all("fp_rect")
        .into_iter()
        .filter(|rect| rect.get("fill").map(ToString::to_string).as_deref() == Some("(fill solid)"))
        .filter(|rect| string_arg(rect, "layer") == Some("F.SilkS"))
        .collect()
}

#[test]
fn test_647050_2_pads() {
    let expr = footprint(&PartDescriptor::new("647050-2", 2, 5.08));

    let items = expr.as_list().unwrap();
    assert_eq!(items[1].as_str(), Some("mta100_01x2_P2.54_647050-2"));

    let pads = expr.get_all("pad");
    assert_eq!(pads.len(), 2);

    let numbers_of: Vec<&str> = pads
        .iter()
        .map(|pad| pad.as_list().unwrap()[1].as_str().unwrap())
        .collect();
    assert_eq!(numbers_of, ["2", "1"]);

    let pad2 = numbers(pads[0], "at");
    let pad1 = numbers(pads[1], "at");
    assert!(approx_eq(pad2[0], 1.27, 1e-9));
    assert!(approx_eq(pad1[0], 3.81, 1e-9));
    assert!(approx_eq(pad2[1], 2.87, 1e-9));
    assert!(approx_eq(pad1[1], 2.87, 1e-9));

    for pad in &pads {
        assert_eq!(numbers(pad, "size"), [1.85, 1.85]);
        assert_eq!(numbers(pad, "drill"), [1.1]);
        assert_eq!(
            pad.get("layers").unwrap().to_string(),
            "(layers \"*.Cu\" \"*.Mask\")"
        );
    }
}

#[test]
fn test_pin_numbering_right_to_left() {
    for part in standard_parts()
        .iter()
        .filter(|p| p.part_number.starts_with("647050"))
    {
        let fp = generate(part, &GeneratorOptions::default()).unwrap();
        let pads: Vec<_> = fp.pads().collect();
        assert_eq!(pads.len(), part.positions as usize);

        let leftmost = pads
            .iter()
            .min_by(|a, b| a.center.x.total_cmp(&b.center.x))
            .unwrap();
        let rightmost = pads
            .iter()
            .max_by(|a, b| a.center.x.total_cmp(&b.center.x))
            .unwrap();

        assert_eq!(leftmost.number, part.positions);
        assert!(approx_eq(leftmost.center.x, 1.27, 1e-9));
        assert_eq!(rightmost.number, 1);
        assert!(approx_eq(
            rightmost.center.x,
            f64::from(part.positions - 1).mul_add(2.54, 1.27),
            1e-9
        ));
    }
}

#[test]
fn test_single_tab_without_gap() {
    let expr = footprint(&PartDescriptor::new("647050-7", 7, 17.78));
    assert_eq!(filled_silk_rects(&expr).len(), 1);
}

#[test]
fn test_split_tabs_with_gap() {
    let length = 20.32;
    let gap = 2.54;
    let expr = footprint(&PartDescriptor::new("647050-8", 8, length).with_gap(gap));

    let tabs = filled_silk_rects(&expr);
    assert_eq!(tabs.len(), 2);

    let left_inner = numbers(tabs[0], "end")[0];
    let right_inner = numbers(tabs[1], "start")[0];
    let centre = length / 2.0;
    assert!(approx_eq(centre - left_inner, gap / 2.0, 1e-6));
    assert!(approx_eq(right_inner - centre, gap / 2.0, 1e-6));
}

#[test]
fn test_right_angle_is_anchored_on_first_pad() {
    let part = PartDescriptor::new("640455-5", 5, 12.7);
    let expr = footprint(&part);

    let pads = expr.get_all("pad");
    assert_eq!(pads.len(), 5);
    assert_eq!(pads[0].as_list().unwrap()[1].as_str(), Some("5"));
    assert_eq!(numbers(pads[0], "at"), [0.0, 0.0]);

    for (i, pad) in pads.iter().enumerate() {
        let at = numbers(pad, "at");
        assert!(approx_eq(at[0], 2.54 * i as f64, 1e-6));
        assert!(approx_eq(at[1], 0.0, 1e-6));
    }

    // The body corner moves by the same offset as the pads.
    let fab = expr
        .get_all("fp_line")
        .into_iter()
        .find(|line| string_arg(line, "layer") == Some("F.Fab"))
        .unwrap();
    let start = numbers(fab, "start");
    assert!(approx_eq(start[0], -1.27, 1e-6));
    assert!(approx_eq(start[1], 2.985, 1e-6));
}

#[test]
fn test_right_angle_lead_bends() {
    let expr = footprint(&PartDescriptor::new("640455-2", 2, 5.08));

    let bends: Vec<_> = expr
        .get_all("fp_line")
        .into_iter()
        .filter(|line| {
            let start = numbers(line, "start");
            let end = numbers(line, "end");
            approx_eq(start[0], end[0], 1e-9) && approx_eq(end[1] - start[1], 1.8, 1e-6)
        })
        .collect();
    assert_eq!(bends.len(), 2);
}

#[test]
fn test_default_silkscreen_stroke_widths() {
    let stroke = "(stroke (width 0.2) (type default))";

    let straight = footprint(&PartDescriptor::new("647050-2", 2, 5.08));
    let tabs = filled_silk_rects(&straight);
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].get("stroke").unwrap().to_string(), stroke);

    let right_angle = footprint(&PartDescriptor::new("640455-2", 2, 5.08));
    let silk_lines: Vec<_> = right_angle
        .get_all("fp_line")
        .into_iter()
        .filter(|line| string_arg(line, "layer") == Some("F.SilkS"))
        .collect();
    // Five outline segments and two lead bends.
    assert_eq!(silk_lines.len(), 7);
    for line in silk_lines {
        assert_eq!(line.get("stroke").unwrap().to_string(), stroke);
    }

    let lead_bend = right_angle
        .get_all("fp_line")
        .into_iter()
        .find(|line| {
            let start = numbers(line, "start");
            approx_eq(start[0], 2.54, 1e-6) && approx_eq(start[1], 1.185, 1e-6)
        })
        .unwrap();
    let end = numbers(lead_bend, "end");
    assert!(approx_eq(end[0], 2.54, 1e-6));
    assert!(approx_eq(end[1], 2.985, 1e-6));
    assert_eq!(lead_bend.get("stroke").unwrap().to_string(), stroke);
}

#[test]
fn test_identifiers_unique_within_footprint() {
    for part in standard_parts() {
        let expr = footprint(&part);
        let ids: Vec<&str> = expr
            .as_list()
            .unwrap()
            .iter()
            .filter_map(|item| string_arg(item, "uuid"))
            .collect();

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate id in {}", part.part_number);
    }
}

#[test]
fn test_generation_is_deterministic() {
    for part in standard_parts() {
        let first = generate(&part, &GeneratorOptions::default()).unwrap();
        let second = generate(&part, &GeneratorOptions::default()).unwrap();
        assert_eq!(first.to_kicad_string(), second.to_kicad_string());
    }
}

#[test]
fn test_first_graphic_identifier() {
    let expr = footprint(&PartDescriptor::new("647050-2", 2, 5.08));
    let first_line = expr.get("fp_line").unwrap();
    assert_eq!(
        string_arg(first_line, "uuid"),
        Some("0713af47-cd24-40a3-b278-05793e603567")
    );
}

#[test]
fn test_purpose_labels_toggle() {
    let part = PartDescriptor::new("640455-3", 3, 7.62);

    let with = generate(&part, &GeneratorOptions::default())
        .unwrap()
        .to_kicad_string();
    assert!(with.contains("\"${Purpose}\""));
    assert!(with.contains("\"${Purpose Pin1}\""));

    let options = GeneratorOptions {
        purpose_labels: false,
        ..GeneratorOptions::default()
    };
    let without = generate(&part, &options).unwrap().to_kicad_string();
    assert!(!without.contains("${Purpose"));
    assert!(without.contains("(property \"Reference\" \"Ref**\""));
}

#[test]
fn test_unknown_family_is_rejected() {
    let result = generate(
        &PartDescriptor::new("1-1234567-2", 2, 5.08),
        &GeneratorOptions::default(),
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("unknown connector family"));
}
