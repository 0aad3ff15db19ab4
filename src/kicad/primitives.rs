//! Footprint primitive types for `.kicad_mod` files.
//!
//! Primitives are built with absolute drawing-plane coordinates. Each one
//! also carries an origin, and emits its coordinates relative to it, so a
//! whole footprint can be re-anchored on a pad by [`Shape::anchored`]
//! without touching the layout math that produced it.

use std::ops::{Add, Sub};

use uuid::Uuid;

use super::sexpr::SExpr;

/// A 2D point in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// The drawing-plane origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Board layers used by footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    /// Front silkscreen (`F.SilkS`).
    #[default]
    FrontSilkscreen,
    /// Front fabrication drawing (`F.Fab`).
    FrontFab,
    /// Front courtyard (`F.CrtYd`).
    FrontCourtyard,
    /// Back silkscreen (`B.SilkS`).
    BackSilkscreen,
    /// Back fabrication drawing (`B.Fab`).
    BackFab,
    /// Back courtyard (`B.CrtYd`).
    BackCourtyard,
}

impl Layer {
    /// Returns the KiCad layer name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontSilkscreen => "F.SilkS",
            Self::FrontFab => "F.Fab",
            Self::FrontCourtyard => "F.CrtYd",
            Self::BackSilkscreen => "B.SilkS",
            Self::BackFab => "B.Fab",
            Self::BackCourtyard => "B.CrtYd",
        }
    }

    fn to_sexpr(self) -> SExpr {
        SExpr::node("layer", [SExpr::str(self.as_str())])
    }
}

/// Horizontal text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalJustify {
    /// Anchor on the left edge.
    #[default]
    Left,
    /// Anchor on the centre.
    Center,
    /// Anchor on the right edge.
    Right,
}

impl HorizontalJustify {
    /// Returns the KiCad keyword, or `None` for the implicit centre.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("left"),
            Self::Center => None,
            Self::Right => Some("right"),
        }
    }
}

/// Vertical text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalJustify {
    /// Anchor on the top edge.
    Top,
    /// Anchor on the middle.
    Middle,
    /// Anchor on the bottom edge.
    #[default]
    Bottom,
}

impl VerticalJustify {
    /// Returns the KiCad keyword, or `None` for the implicit middle.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Top => Some("top"),
            Self::Middle => None,
            Self::Bottom => Some("bottom"),
        }
    }
}

/// Common behaviour of every drawable primitive.
pub trait Primitive {
    /// Local origin the primitive is emitted relative to.
    fn origin(&self) -> Point;

    /// Translates an absolute coordinate into origin-relative coordinates.
    fn pos(&self, p: Point) -> Point {
        p - self.origin()
    }

    /// Builds the S-expression for this primitive, stamped with `uuid`.
    fn graphic(&self, uuid: Uuid) -> SExpr;
}

fn xy(head: &str, p: Point) -> SExpr {
    SExpr::node(head, [SExpr::num(p.x), SExpr::num(p.y)])
}

fn stroke(width: f64, style: &str) -> SExpr {
    SExpr::node(
        "stroke",
        [
            SExpr::node("width", [SExpr::num(width)]),
            SExpr::node("type", [SExpr::sym(style)]),
        ],
    )
}

fn uuid_node(uuid: Uuid) -> SExpr {
    SExpr::node("uuid", [SExpr::str(uuid.to_string())])
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Layer the line is drawn on.
    pub layer: Layer,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke width (mm).
    pub width: f64,
    /// Local origin.
    pub origin: Point,
}

impl Line {
    /// Default stroke width (mm).
    pub const DEFAULT_WIDTH: f64 = 0.2;

    /// Creates a line segment.
    #[must_use]
    pub fn new(layer: Layer, start: impl Into<Point>, end: impl Into<Point>, width: f64) -> Self {
        Self {
            layer,
            start: start.into(),
            end: end.into(),
            width,
            origin: Point::ZERO,
        }
    }
}

impl Primitive for Line {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "fp_line",
            [
                xy("start", self.pos(self.start)),
                xy("end", self.pos(self.end)),
                stroke(self.width, "default"),
                self.layer.to_sexpr(),
                uuid_node(uuid),
            ],
        )
    }
}

/// A circle given by its centre and a point on its circumference.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Layer the circle is drawn on.
    pub layer: Layer,
    /// Centre point.
    pub center: Point,
    /// A point on the circumference.
    pub end: Point,
    /// Stroke style keyword (`default`, `dash`, `dot`, ...).
    pub style: String,
    /// Local origin.
    pub origin: Point,
}

impl Circle {
    /// Creates a circle with the default stroke style.
    #[must_use]
    pub fn new(layer: Layer, center: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            layer,
            center: center.into(),
            end: end.into(),
            style: "default".to_string(),
            origin: Point::ZERO,
        }
    }

    /// Returns the circle with the given stroke style.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

impl Primitive for Circle {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "fp_circle",
            [
                xy("center", self.pos(self.center)),
                xy("end", self.pos(self.end)),
                stroke(Line::DEFAULT_WIDTH, &self.style),
                SExpr::node("fill", [SExpr::sym("none")]),
                self.layer.to_sexpr(),
                uuid_node(uuid),
            ],
        )
    }
}

/// A three-point arc.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Layer the arc is drawn on.
    pub layer: Layer,
    /// Start point.
    pub start: Point,
    /// A point on the arc between start and end.
    pub middle: Point,
    /// End point.
    pub end: Point,
    /// Local origin.
    pub origin: Point,
}

impl Arc {
    /// Creates an arc through `start`, `middle` and `end`.
    #[must_use]
    pub fn new(
        layer: Layer,
        start: impl Into<Point>,
        middle: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        Self {
            layer,
            start: start.into(),
            middle: middle.into(),
            end: end.into(),
            origin: Point::ZERO,
        }
    }
}

impl Primitive for Arc {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "fp_arc",
            [
                xy("start", self.pos(self.start)),
                xy("mid", self.pos(self.middle)),
                xy("end", self.pos(self.end)),
                stroke(Line::DEFAULT_WIDTH, "default"),
                self.layer.to_sexpr(),
                uuid_node(uuid),
            ],
        )
    }
}

/// An axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Layer the rectangle is drawn on.
    pub layer: Layer,
    /// First corner.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Stroke width (mm).
    pub width: f64,
    /// Whether the interior is filled.
    pub filled: bool,
    /// Local origin.
    pub origin: Point,
}

impl Rect {
    /// Creates an outlined rectangle.
    #[must_use]
    pub fn new(layer: Layer, start: impl Into<Point>, end: impl Into<Point>, width: f64) -> Self {
        Self {
            layer,
            start: start.into(),
            end: end.into(),
            width,
            filled: false,
            origin: Point::ZERO,
        }
    }

    /// Creates a solid-filled rectangle.
    #[must_use]
    pub fn filled(
        layer: Layer,
        start: impl Into<Point>,
        end: impl Into<Point>,
        width: f64,
    ) -> Self {
        Self {
            filled: true,
            ..Self::new(layer, start, end, width)
        }
    }

    const fn fill_mode(&self) -> &'static str {
        if self.filled {
            "solid"
        } else {
            "none"
        }
    }
}

impl Primitive for Rect {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "fp_rect",
            [
                xy("start", self.pos(self.start)),
                xy("end", self.pos(self.end)),
                stroke(self.width, "default"),
                SExpr::node("fill", [SExpr::sym(self.fill_mode())]),
                self.layer.to_sexpr(),
                uuid_node(uuid),
            ],
        )
    }
}

/// A free text item on a graphic layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Layer the text is drawn on.
    pub layer: Layer,
    /// Anchor position.
    pub position: Point,
    /// Text content.
    pub text: String,
    /// Glyph height and width (mm).
    pub size: f64,
    /// Stroke thickness (mm).
    pub thickness: f64,
    /// Horizontal justification.
    pub justify_h: HorizontalJustify,
    /// Vertical justification.
    pub justify_v: VerticalJustify,
    /// Local origin.
    pub origin: Point,
}

impl Text {
    /// Creates a left/bottom justified text item of size 1 mm.
    #[must_use]
    pub fn new(layer: Layer, position: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            layer,
            position: position.into(),
            text: text.into(),
            size: 1.0,
            thickness: 0.1,
            justify_h: HorizontalJustify::default(),
            justify_v: VerticalJustify::default(),
            origin: Point::ZERO,
        }
    }

    /// Returns the text with the given justification.
    #[must_use]
    pub fn justified(mut self, h: HorizontalJustify, v: VerticalJustify) -> Self {
        self.justify_h = h;
        self.justify_v = v;
        self
    }

    fn justify(&self) -> Option<SExpr> {
        let keywords: Vec<SExpr> = [self.justify_h.keyword(), self.justify_v.keyword()]
            .into_iter()
            .flatten()
            .map(SExpr::sym)
            .collect();
        (!keywords.is_empty()).then(|| SExpr::node("justify", keywords))
    }
}

impl Primitive for Text {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        let mut effects = vec![font(self.size, self.thickness)];
        effects.extend(self.justify());

        SExpr::node(
            "fp_text",
            [
                SExpr::sym("user"),
                SExpr::str(self.text.as_str()),
                xy("at", self.pos(self.position)),
                SExpr::node("effects", effects),
                self.layer.to_sexpr(),
                uuid_node(uuid),
            ],
        )
    }
}

fn font(size: f64, thickness: f64) -> SExpr {
    SExpr::node(
        "font",
        [
            SExpr::node("size", [SExpr::num(size), SExpr::num(size)]),
            SExpr::node("thickness", [SExpr::num(thickness)]),
        ],
    )
}

fn pad_layers() -> SExpr {
    SExpr::node("layers", [SExpr::str("*.Cu"), SExpr::str("*.Mask")])
}

/// A circular through-hole pad on all copper and mask layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    /// Pin number.
    pub number: u32,
    /// Pad centre.
    pub center: Point,
    /// Land diameter (mm).
    pub size: f64,
    /// Drill diameter (mm).
    pub drill: f64,
    /// Local origin.
    pub origin: Point,
}

impl Pad {
    /// Creates a circular through-hole pad.
    #[must_use]
    pub fn through_hole(number: u32, center: impl Into<Point>, size: f64, drill: f64) -> Self {
        Self {
            number,
            center: center.into(),
            size,
            drill,
            origin: Point::ZERO,
        }
    }
}

impl Primitive for Pad {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "pad",
            [
                SExpr::str(self.number.to_string()),
                SExpr::sym("thru_hole"),
                SExpr::sym("circle"),
                xy("at", self.pos(self.center)),
                SExpr::node("size", [SExpr::num(self.size), SExpr::num(self.size)]),
                SExpr::node("drill", [SExpr::num(self.drill)]),
                pad_layers(),
                SExpr::node("remove_unused_layers", [SExpr::sym("no")]),
                uuid_node(uuid),
            ],
        )
    }
}

/// A rectangular through-hole pad on all copper and mask layers.
#[derive(Debug, Clone, PartialEq)]
pub struct PadRect {
    /// Pin number.
    pub number: u32,
    /// Pad centre.
    pub center: Point,
    /// Land width (mm).
    pub width: f64,
    /// Land height (mm).
    pub height: f64,
    /// Drill diameter (mm).
    pub drill: f64,
    /// Local origin.
    pub origin: Point,
}

impl PadRect {
    /// Creates a rectangular through-hole pad.
    #[must_use]
    pub fn through_hole(
        number: u32,
        center: impl Into<Point>,
        width: f64,
        height: f64,
        drill: f64,
    ) -> Self {
        Self {
            number,
            center: center.into(),
            width,
            height,
            drill,
            origin: Point::ZERO,
        }
    }
}

impl Primitive for PadRect {
    fn origin(&self) -> Point {
        self.origin
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        SExpr::node(
            "pad",
            [
                SExpr::str(self.number.to_string()),
                SExpr::sym("thru_hole"),
                SExpr::sym("rect"),
                xy("at", self.pos(self.center)),
                SExpr::node("size", [SExpr::num(self.width), SExpr::num(self.height)]),
                SExpr::node("drill", [SExpr::num(self.drill)]),
                pad_layers(),
                SExpr::node("remove_unused_layers", [SExpr::sym("no")]),
                uuid_node(uuid),
            ],
        )
    }
}

/// Any footprint primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Line segment.
    Line(Line),
    /// Circle.
    Circle(Circle),
    /// Three-point arc.
    Arc(Arc),
    /// Rectangle.
    Rect(Rect),
    /// Free text.
    Text(Text),
    /// Circular pad.
    Pad(Pad),
    /// Rectangular pad.
    PadRect(PadRect),
}

impl Shape {
    /// Returns a copy of the shape emitted relative to `origin`.
    #[must_use]
    pub fn anchored(self, origin: Point) -> Self {
        match self {
            Self::Line(s) => Self::Line(Line { origin, ..s }),
            Self::Circle(s) => Self::Circle(Circle { origin, ..s }),
            Self::Arc(s) => Self::Arc(Arc { origin, ..s }),
            Self::Rect(s) => Self::Rect(Rect { origin, ..s }),
            Self::Text(s) => Self::Text(Text { origin, ..s }),
            Self::Pad(s) => Self::Pad(Pad { origin, ..s }),
            Self::PadRect(s) => Self::PadRect(PadRect { origin, ..s }),
        }
    }

    /// Returns the circular pad, if the shape is one.
    #[must_use]
    pub const fn as_pad(&self) -> Option<&Pad> {
        match self {
            Self::Pad(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the rectangle, if the shape is one.
    #[must_use]
    pub const fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the line, if the shape is one.
    #[must_use]
    pub const fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Primitive {
        match self {
            Self::Line(s) => s,
            Self::Circle(s) => s,
            Self::Arc(s) => s,
            Self::Rect(s) => s,
            Self::Text(s) => s,
            Self::Pad(s) => s,
            Self::PadRect(s) => s,
        }
    }
}

impl Primitive for Shape {
    fn origin(&self) -> Point {
        self.inner().origin()
    }

    fn graphic(&self, uuid: Uuid) -> SExpr {
        self.inner().graphic(uuid)
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

impl_from_primitive!(Line, Circle, Arc, Rect, Text, Pad, PadRect);

/// Builds a polyline of [`Line`]s through `points`.
///
/// With `closed`, a final segment joins the last point back to the first.
#[must_use]
pub fn connected_lines(layer: Layer, points: &[Point], width: f64, closed: bool) -> Vec<Shape> {
    let mut lines: Vec<Shape> = points
        .windows(2)
        .map(|pair| Shape::from(Line::new(layer, pair[0], pair[1], width)))
        .collect();

    if closed && points.len() > 2 {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            lines.push(Shape::from(Line::new(layer, last, first, width)));
        }
    }

    lines
}

/// Kind of footprint-level label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelKind {
    /// A footprint property such as `Reference`.
    Property {
        /// Property name.
        key: String,
    },
    /// A user text item.
    User,
}

/// A footprint-level text label.
///
/// Unlike [`Text`], labels belong to the footprint header and carry an
/// identifier keyed by what they mean instead of where they were emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Property or user text.
    pub kind: LabelKind,
    /// Displayed value.
    pub text: String,
    /// Position, already relative to the footprint origin.
    pub at: Point,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Layer the label is drawn on.
    pub layer: Layer,
    /// Glyph size (mm).
    pub size: f64,
    /// Stroke thickness (mm).
    pub thickness: f64,
    /// Optional horizontal justification.
    pub justify: Option<HorizontalJustify>,
    /// Key the label identifier is derived from.
    pub id_key: String,
}

impl Label {
    /// Creates a property label, keyed `label_<key>_<value>`.
    #[must_use]
    pub fn property(
        key: impl Into<String>,
        value: impl Into<String>,
        layer: Layer,
        at: impl Into<Point>,
        rotation: f64,
    ) -> Self {
        let key = key.into();
        let text = value.into();
        Self {
            id_key: format!("label_{key}_{text}"),
            kind: LabelKind::Property { key },
            text,
            at: at.into(),
            rotation,
            layer,
            size: 1.0,
            thickness: 0.15,
            justify: Some(HorizontalJustify::Left),
        }
    }

    /// Creates a user text label with an explicit identifier key.
    #[must_use]
    pub fn user(
        text: impl Into<String>,
        id_key: impl Into<String>,
        layer: Layer,
        at: impl Into<Point>,
        rotation: f64,
    ) -> Self {
        Self {
            kind: LabelKind::User,
            text: text.into(),
            at: at.into(),
            rotation,
            layer,
            size: 1.0,
            thickness: 0.15,
            justify: Some(HorizontalJustify::Left),
            id_key: id_key.into(),
        }
    }

    /// Returns the label with the given font and no justification.
    #[must_use]
    pub fn with_font(mut self, size: f64, thickness: f64) -> Self {
        self.size = size;
        self.thickness = thickness;
        self.justify = None;
        self
    }

    /// Builds the S-expression for this label.
    #[must_use]
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = match &self.kind {
            LabelKind::Property { key } => {
                vec![SExpr::str(key.as_str()), SExpr::str(self.text.as_str())]
            }
            LabelKind::User => vec![SExpr::sym("user"), SExpr::str(self.text.as_str())],
        };

        let mut effects = vec![font(self.size, self.thickness)];
        if let Some(keyword) = self.justify.and_then(HorizontalJustify::keyword) {
            effects.push(SExpr::node("justify", [SExpr::sym(keyword)]));
        }

        items.extend([
            SExpr::node(
                "at",
                [
                    SExpr::num(self.at.x),
                    SExpr::num(self.at.y),
                    SExpr::num(self.rotation),
                ],
            ),
            uuid_node(super::ident::label_uuid(&self.id_key)),
            self.layer.to_sexpr(),
            SExpr::node("effects", effects),
        ]);

        let head = match self.kind {
            LabelKind::Property { .. } => "property",
            LabelKind::User => "fp_text",
        };
        SExpr::node(head, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_uuid() -> Uuid {
        Uuid::nil()
    }

    #[test]
    fn line_graphic() {
        let line = Line::new(Layer::FrontFab, (0.0, 0.0), (4.08, 0.0), 0.1);
        let expr = line.graphic(test_uuid());
        assert_eq!(
            expr.to_string(),
            "(fp_line (start 0 0) (end 4.08 0) (stroke (width 0.1) (type default)) \
             (layer \"F.Fab\") (uuid \"00000000-0000-0000-0000-000000000000\"))"
        );
    }

    #[test]
    fn rect_fill_modes() {
        let outline = Rect::new(Layer::FrontCourtyard, (0.0, 0.0), (1.0, 1.0), 0.05);
        let solid = Rect::filled(Layer::FrontSilkscreen, (0.0, 0.0), (1.0, 1.0), 0.12);
        assert_eq!(
            outline.graphic(test_uuid()).get("fill").unwrap().to_string(),
            "(fill none)"
        );
        assert_eq!(
            solid.graphic(test_uuid()).get("fill").unwrap().to_string(),
            "(fill solid)"
        );
    }

    #[test]
    fn pad_graphic() {
        let pad = Pad::through_hole(2, (1.27, 2.87), 1.85, 1.1);
        let expr = pad.graphic(test_uuid());
        assert_eq!(
            expr.to_string(),
            "(pad \"2\" thru_hole circle (at 1.27 2.87) (size 1.85 1.85) (drill 1.1) \
             (layers \"*.Cu\" \"*.Mask\") (remove_unused_layers no) \
             (uuid \"00000000-0000-0000-0000-000000000000\"))"
        );
    }

    #[test]
    fn rect_pad_graphic() {
        let pad = PadRect::through_hole(1, (0.0, 0.0), 1.7, 2.0, 1.0);
        let expr = pad.graphic(test_uuid());
        let items = expr.as_list().unwrap();
        assert_eq!(items[3].as_sym(), Some("rect"));
        assert_eq!(expr.get("size").unwrap().to_string(), "(size 1.7 2)");
    }

    #[test]
    fn circle_and_arc_graphics() {
        let circle = Circle::new(Layer::FrontFab, (1.0, 1.0), (2.0, 1.0)).with_style("dash");
        let expr = circle.graphic(test_uuid());
        assert_eq!(expr.head(), Some("fp_circle"));
        assert_eq!(
            expr.get("stroke").unwrap().to_string(),
            "(stroke (width 0.2) (type dash))"
        );

        let arc = Arc::new(Layer::FrontSilkscreen, (0.0, 0.0), (1.0, 1.0), (2.0, 0.0));
        let expr = arc.graphic(test_uuid());
        assert_eq!(expr.get("mid").unwrap().to_string(), "(mid 1 1)");
    }

    #[test]
    fn text_justification() {
        let text = Text::new(Layer::FrontSilkscreen, (1.0, 2.0), "X");
        let expr = text.graphic(test_uuid());
        assert_eq!(
            expr.get("effects").unwrap().get("justify").unwrap().to_string(),
            "(justify left bottom)"
        );

        let centred = Text::new(Layer::FrontSilkscreen, (1.0, 2.0), "X")
            .justified(HorizontalJustify::Center, VerticalJustify::Top);
        let expr = centred.graphic(test_uuid());
        assert_eq!(
            expr.get("effects").unwrap().get("justify").unwrap().to_string(),
            "(justify top)"
        );

        let middle = Text::new(Layer::FrontSilkscreen, (1.0, 2.0), "X")
            .justified(HorizontalJustify::Center, VerticalJustify::Middle);
        let expr = middle.graphic(test_uuid());
        assert!(expr.get("effects").unwrap().get("justify").is_none());
    }

    #[test]
    fn anchored_shapes_emit_relative_coordinates() {
        let pad: Shape = Pad::through_hole(3, (1.27, -2.985), 1.85, 1.1).into();
        let line: Shape = Line::new(Layer::FrontSilkscreen, (3.81, -1.8), (3.81, 0.0), 0.12).into();
        let origin = Point::new(1.27, -2.985);

        let pad = pad.anchored(origin);
        let line = line.anchored(origin);

        assert_eq!(pad.graphic(test_uuid()).get("at").unwrap().to_string(), "(at 0 0)");
        assert_eq!(
            line.graphic(test_uuid()).get("start").unwrap().to_string(),
            "(start 2.54 1.185)"
        );
        // Absolute coordinates are untouched.
        assert_eq!(pad.as_pad().unwrap().center, origin);
    }

    #[test]
    fn connected_lines_open_and_closed() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        assert_eq!(connected_lines(Layer::FrontFab, &points, 0.1, false).len(), 2);

        let closed = connected_lines(Layer::FrontFab, &points, 0.1, true);
        assert_eq!(closed.len(), 3);
        let last = closed[2].as_line().unwrap();
        assert_eq!(last.start, points[2]);
        assert_eq!(last.end, points[0]);
    }

    #[test]
    fn property_label() {
        let label = Label::property(
            "Reference",
            "Ref**",
            Layer::FrontSilkscreen,
            (-0.9525, 6.6675),
            -90.0,
        );
        let expr = label.to_sexpr();
        assert_eq!(
            expr.to_string(),
            "(property \"Reference\" \"Ref**\" (at -0.9525 6.6675 -90) \
             (uuid \"d9174c77-8ba4-469a-83de-756dc2a5a63d\") (layer \"F.SilkS\") \
             (effects (font (size 1 1) (thickness 0.15)) (justify left)))"
        );
    }

    #[test]
    fn user_label_without_justify() {
        let label = Label::user(
            "${Purpose}",
            "label_purpose",
            Layer::FrontSilkscreen,
            (2.54, 7.62),
            0.0,
        )
        .with_font(1.2, 0.2);
        let expr = label.to_sexpr();
        assert_eq!(expr.head(), Some("fp_text"));
        assert_eq!(
            expr.get("effects").unwrap().to_string(),
            "(effects (font (size 1.2 1.2) (thickness 0.2)))"
        );
        assert_eq!(
            expr.get("uuid").unwrap().to_string(),
            "(uuid \"d7000f2e-1f94-4e3e-9648-2867d78d7753\")"
        );
    }
}
