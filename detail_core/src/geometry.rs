//! # Drawing Primitives
//!
//! Plain geometric value types emitted by the detailing pipeline. The engine
//! has no file-format knowledge: a drawing sink consumes the ordered
//! [`Primitive`] list and serializes it to whatever vector format it likes.
//!
//! ## Conventions
//!
//! - Model space: +x right, −y down; a section's origin is its top-left corner.
//! - Angles are in degrees, 0° = +x axis, counter-clockwise increasing.
//!   Arcs sweep from `start_angle_deg` to `end_angle_deg`; the enclosing
//!   primitive carries the sweep direction where it matters (seismic hooks).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Tolerance for coordinate comparisons. Layout coordinates are produced by
/// identical arithmetic per layer, so this only has to absorb float noise.
pub const COORD_EPSILON: f64 = 1e-6;

/// A 2D point in model space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Return this point translated by (dx, dy)
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Whether two points coincide within [`COORD_EPSILON`]
    pub fn approx_eq(&self, other: &Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Whether two coordinates coincide within [`COORD_EPSILON`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= COORD_EPSILON
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Line { start, end }
    }
}

/// An open or closed polyline (closed by repeating the first point,
/// matching lightweight-polyline semantics in CAD formats)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Polyline { points }
    }

    /// Closed rectangle outline from the top-left corner, width to the
    /// right and height downward (five points, first repeated)
    pub fn rectangle(top_left: Point, width: f64, height: f64) -> Self {
        Polyline::new(vec![
            top_left,
            top_left.offset(width, 0.0),
            top_left.offset(width, -height),
            top_left.offset(0.0, -height),
            top_left,
        ])
    }
}

/// A circular arc. Angles in degrees, 0° = +x, counter-clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle_deg: f64, end_angle_deg: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle_deg,
            end_angle_deg,
        }
    }
}

/// A full circle (longitudinal bar cross-sections)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }
}

/// A text placement (the sink chooses font and styling)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    pub height: f64,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, position: Point, height: f64) -> Self {
        TextLabel {
            text: text.into(),
            position,
            height,
        }
    }
}

/// A linear dimension between two points, with the dimension line placed
/// through `base` and an override label (e.g., "b", "h")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearDim {
    pub base: Point,
    pub p1: Point,
    pub p2: Point,
    pub label: String,
}

/// Drawing layer a primitive belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Detail viewport frame
    DetailArea,
    /// Titles and notes
    Text,
    /// Concrete section outline
    Column,
    /// Reinforcement (bars, hoop, crossties, hooks)
    Rebar,
}

impl Layer {
    /// Layer name as exposed to the drawing sink
    pub fn name(&self) -> &'static str {
        match self {
            Layer::DetailArea => "DetailArea",
            Layer::Text => "Text",
            Layer::Column => "Column",
            Layer::Rebar => "Rebar",
        }
    }
}

/// The geometric payload of a primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Line(Line),
    Polyline(Polyline),
    /// Arc with explicit sweep direction (false = clockwise from start to end)
    Arc { arc: Arc, counter_clockwise: bool },
    /// Bar section; `filled` asks the sink for a solid hatch
    Circle { circle: Circle, filled: bool },
    Text(TextLabel),
    LinearDim(LinearDim),
}

/// One entry in the ordered primitive list handed to the drawing sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
}

impl Primitive {
    pub fn line(layer: Layer, line: Line) -> Self {
        Primitive { layer, shape: Shape::Line(line) }
    }

    pub fn polyline(layer: Layer, polyline: Polyline) -> Self {
        Primitive { layer, shape: Shape::Polyline(polyline) }
    }

    pub fn arc(layer: Layer, arc: Arc, counter_clockwise: bool) -> Self {
        Primitive { layer, shape: Shape::Arc { arc, counter_clockwise } }
    }

    pub fn circle(layer: Layer, circle: Circle, filled: bool) -> Self {
        Primitive { layer, shape: Shape::Circle { circle, filled } }
    }

    pub fn text(layer: Layer, text: TextLabel) -> Self {
        Primitive { layer, shape: Shape::Text(text) }
    }

    pub fn linear_dim(layer: Layer, dim: LinearDim) -> Self {
        Primitive { layer, shape: Shape::LinearDim(dim) }
    }
}
