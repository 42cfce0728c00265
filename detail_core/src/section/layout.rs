//! # Section Layout
//!
//! Places every longitudinal bar of a rectangular tied column and builds the
//! perimeter hoop geometry: leg lines (drawn as inner/outer offset pairs to
//! show the physical bar thickness), four corner arcs tangent to the corner
//! bars, and the single splice hook at the top-left corner where the open
//! hoop closes.
//!
//! ## Placement
//!
//! The section origin is its top-left corner; +x right, −y down. Bars along
//! the height direction are placed as left/right pairs at evenly spaced
//! y-coordinates; bars along the width direction fill the top and bottom
//! rows between the corner pairs. With `n` bars per direction the spacing
//! denominator is `n - 1`, which is why counts below 2 are rejected at
//! validation.

use serde::{Deserialize, Serialize};

use crate::errors::DetailResult;
use crate::geometry::{Arc, Line, Point, Polyline};
use crate::rebar::BarCatalog;
use crate::section::{BarSpacing, FaceCoordinates, LongitudinalBar, SectionInput};

/// Hook tails are drawn as a thin 4-point outline: out along the tail
/// direction, across by the tie thickness, and back.
pub(crate) fn hook_tail_outline(start: Point, direction: Point, step: Point, length: f64) -> Polyline {
    let p1 = start.offset(direction.x * length, direction.y * length);
    let p2 = p1 + step;
    let p3 = p2.offset(-direction.x * length, -direction.y * length);
    Polyline::new(vec![start, p1, p2, p3])
}

/// One hoop side: two parallel lines, the outer at `cover` from the face
/// and the inner at `cover + stirrup diameter`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoopLeg {
    pub inner: Line,
    pub outer: Line,
}

/// The splice hook closing the open hoop at the top-left corner: a 180°
/// arc continued by two 45° tail outlines extending in opposite directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpliceHook {
    pub arc: Arc,
    pub tail_a: Polyline,
    pub tail_b: Polyline,
}

/// Complete perimeter hoop geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoopGeometry {
    pub left_leg: HoopLeg,
    pub right_leg: HoopLeg,
    pub top_leg: HoopLeg,
    pub bottom_leg: HoopLeg,
    /// Quarter-circle corner arcs: top-left, top-right, bottom-left,
    /// bottom-right, each of radius `stirrup diameter + bar radius`
    pub corner_arcs: [Arc; 4],
    pub splice_hook: SpliceHook,
}

/// Layout output: bars in placement order plus hoop geometry and the face
/// coordinates the resolver and synthesizer work from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub outline: Polyline,
    pub bars: Vec<LongitudinalBar>,
    pub hoop: HoopGeometry,
    pub faces: FaceCoordinates,
    pub spacing: BarSpacing,
}

/// Compute bar positions and hoop geometry for one section.
pub fn layout_section(
    input: &SectionInput,
    catalog: &BarCatalog,
    origin: Point,
) -> DetailResult<SectionLayout> {
    input.validate()?;

    let db = catalog.diameter_mm(input.longitudinal_bar)?;
    let ds = catalog.diameter_mm(input.stirrup_bar)?;

    let inset = input.cover_mm + ds + db / 2.0;
    let faces = FaceCoordinates {
        top_y: origin.y - inset,
        bottom_y: origin.y - input.height_mm + inset,
        left_x: origin.x + inset,
        right_x: origin.x + input.width_mm - inset,
    };

    let along_height_center =
        (input.height_mm - 2.0 * input.cover_mm - 2.0 * ds - db) / (input.bars_along_height - 1) as f64;
    let along_width_center =
        (input.width_mm - 2.0 * input.cover_mm - 2.0 * ds - db) / (input.bars_along_width - 1) as f64;
    let spacing = BarSpacing {
        along_height_center,
        along_height_clear: along_height_center - db,
        along_width_center,
        along_width_clear: along_width_center - db,
    };

    let mut bars = Vec::with_capacity(input.total_bars() as usize);
    let mut next_id = 0u32;
    let mut place = |center: Point, is_corner: bool, bars: &mut Vec<LongitudinalBar>| {
        next_id += 1;
        bars.push(LongitudinalBar {
            id: next_id,
            center,
            diameter: db,
            is_corner,
            is_supported: is_corner,
            has_crosstie: false,
        });
    };

    // Left/right pairs down the height; first and last rows are the corners
    for row in 0..input.bars_along_height {
        let y = faces.top_y - row as f64 * along_height_center;
        let is_corner = row == 0 || row == input.bars_along_height - 1;
        place(Point::new(faces.left_x, y), is_corner, &mut bars);
        place(Point::new(faces.right_x, y), is_corner, &mut bars);
    }

    // Interior top/bottom bars; the end positions are already taken by the
    // corner pairs above
    for col in 1..input.bars_along_width - 1 {
        let x = faces.left_x + col as f64 * along_width_center;
        place(Point::new(x, faces.top_y), false, &mut bars);
        place(Point::new(x, faces.bottom_y), false, &mut bars);
    }

    let hoop = build_hoop(input, origin, db, ds, &faces);
    let outline = Polyline::rectangle(origin, input.width_mm, input.height_mm);

    Ok(SectionLayout {
        outline,
        bars,
        hoop,
        faces,
        spacing,
    })
}

fn build_hoop(
    input: &SectionInput,
    origin: Point,
    db: f64,
    ds: f64,
    faces: &FaceCoordinates,
) -> HoopGeometry {
    let cover = input.cover_mm;

    // Vertical legs span between the top/bottom bar rows; horizontal legs
    // between the left/right bar columns, so each leg ends where the corner
    // arc takes over
    let left_leg = HoopLeg {
        inner: Line::new(
            Point::new(origin.x + cover + ds, faces.top_y),
            Point::new(origin.x + cover + ds, faces.bottom_y),
        ),
        outer: Line::new(
            Point::new(origin.x + cover, faces.top_y),
            Point::new(origin.x + cover, faces.bottom_y),
        ),
    };
    let right_leg = HoopLeg {
        inner: Line::new(
            Point::new(origin.x + input.width_mm - cover - ds, faces.top_y),
            Point::new(origin.x + input.width_mm - cover - ds, faces.bottom_y),
        ),
        outer: Line::new(
            Point::new(origin.x + input.width_mm - cover, faces.top_y),
            Point::new(origin.x + input.width_mm - cover, faces.bottom_y),
        ),
    };
    let top_leg = HoopLeg {
        inner: Line::new(
            Point::new(faces.left_x, origin.y - cover - ds),
            Point::new(faces.right_x, origin.y - cover - ds),
        ),
        outer: Line::new(
            Point::new(faces.left_x, origin.y - cover),
            Point::new(faces.right_x, origin.y - cover),
        ),
    };
    let bottom_leg = HoopLeg {
        inner: Line::new(
            Point::new(faces.left_x, origin.y - input.height_mm + cover + ds),
            Point::new(faces.right_x, origin.y - input.height_mm + cover + ds),
        ),
        outer: Line::new(
            Point::new(faces.left_x, origin.y - input.height_mm + cover),
            Point::new(faces.right_x, origin.y - input.height_mm + cover),
        ),
    };

    let radius = ds + db / 2.0;
    let top_left = Point::new(faces.left_x, faces.top_y);
    let top_right = Point::new(faces.right_x, faces.top_y);
    let bottom_left = Point::new(faces.left_x, faces.bottom_y);
    let bottom_right = Point::new(faces.right_x, faces.bottom_y);

    let corner_arcs = [
        Arc::new(top_left, radius, 90.0, 180.0),
        Arc::new(top_right, radius, 0.0, 90.0),
        Arc::new(bottom_left, radius, 180.0, 270.0),
        Arc::new(bottom_right, radius, 270.0, 360.0),
    ];

    HoopGeometry {
        left_leg,
        right_leg,
        top_leg,
        bottom_leg,
        corner_arcs,
        splice_hook: build_splice_hook(top_left, radius, db, ds),
    }
}

/// The splice hook sits on the top-left corner bar: a 180° arc (45°→225°)
/// and two tails at 45° of length `3·db`, one from each free end of the
/// open hoop, extending in opposite directions.
fn build_splice_hook(center: Point, radius: f64, db: f64, ds: f64) -> SpliceHook {
    let arc = Arc::new(center, radius, 45.0, 225.0);

    let cos_45 = std::f64::consts::FRAC_1_SQRT_2;
    let sin_45 = cos_45;
    let tail_length = 3.0 * db;

    // Lower free end: starts on the bar surface below-left of center,
    // runs down-right, thickness step away from the bar
    let tail_a = hook_tail_outline(
        center.offset(-cos_45 * db / 2.0, -sin_45 * db / 2.0),
        Point::new(cos_45, -sin_45),
        Point::new(-cos_45 * ds, -sin_45 * ds),
        tail_length,
    );

    // Upper free end: starts above-right of center, same direction,
    // thickness step on the opposite side
    let tail_b = hook_tail_outline(
        center.offset(cos_45 * db / 2.0, sin_45 * db / 2.0),
        Point::new(cos_45, -sin_45),
        Point::new(cos_45 * ds, sin_45 * ds),
        tail_length,
    );

    SpliceHook { arc, tail_a, tail_b }
}
