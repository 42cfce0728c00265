//! # CrossTie Synthesizer
//!
//! Emits one supplementary crosstie for every bar the resolver flagged,
//! connecting it to its mirror bar on the opposite face at the same
//! coordinate. The tie body is drawn as two parallel lines one tie diameter
//! apart (physical bar thickness), and each end gets a 135° seismic hook:
//! an arc wrapping the anchor bar plus a straight tail outline at 45°,
//! oriented so the two hooks of a tie open away from each other.
//!
//! All four hook variants (top/bottom for vertical ties, left/right for
//! horizontal ones) go through one shared constructor; only the start
//! angles, sweep direction, and tail vectors differ per end.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::errors::{DetailError, DetailResult};
use crate::geometry::{approx_eq, Arc, Line, Point, Polyline};
use crate::section::layout::hook_tail_outline;
use crate::section::{FaceAxis, FaceCoordinates, LongitudinalBar};

/// A 135° seismic hook at one crosstie end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    /// Arc wrapping the anchor bar, radius `tie diameter + bar radius`
    pub arc: Arc,
    /// Straight tail outline tangent to the arc's terminal point
    pub tail: Polyline,
    /// Sweep direction for the drawing sink
    pub counter_clockwise: bool,
}

/// A supplementary tie connecting two mirror bars on opposite faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTie {
    /// Direction the tie runs in
    pub axis: FaceAxis,
    /// Id of the flagged bar the tie was generated for
    pub anchor_a: u32,
    /// Id of its mirror bar on the opposite face
    pub anchor_b: u32,
    /// Tie body line tangent to the bar surfaces
    pub near_line: Line,
    /// Parallel line one tie diameter away
    pub far_line: Line,
    /// End hooks, anchor A first
    pub hooks: [Hook; 2],
}

/// Synthesize crossties for every flagged bar on the top and left layers.
///
/// Both anchor bars of each emitted tie are marked `has_crosstie` and
/// `is_supported` (the resolver only walks the top/left layers; their
/// mirrors are restrained by the same tie).
pub fn synthesize_crossties(
    bars: &mut [LongitudinalBar],
    faces: &FaceCoordinates,
    tie_diameter: f64,
) -> DetailResult<Vec<CrossTie>> {
    let mut ties = Vec::new();

    // Vertical ties: flagged bars on the top row, mirrors on the bottom row
    let mut top: Vec<usize> = (0..bars.len())
        .filter(|&i| approx_eq(bars[i].center.y, faces.top_y) && bars[i].has_crosstie)
        .collect();
    top.sort_by(|&a, &b| bars[a].center.x.total_cmp(&bars[b].center.x));

    for i in top {
        let mirror = find_mirror(bars, FaceAxis::Vertical, i, faces)?;
        ties.push(vertical_tie(&bars[i], &bars[mirror], tie_diameter));
        bars[mirror].has_crosstie = true;
        bars[mirror].is_supported = true;
    }

    // Horizontal ties: flagged bars on the left column, mirrors on the right
    let mut left: Vec<usize> = (0..bars.len())
        .filter(|&i| approx_eq(bars[i].center.x, faces.left_x) && bars[i].has_crosstie)
        .collect();
    left.sort_by(|&a, &b| bars[a].center.y.total_cmp(&bars[b].center.y));

    for i in left {
        let mirror = find_mirror(bars, FaceAxis::Horizontal, i, faces)?;
        ties.push(horizontal_tie(&bars[i], &bars[mirror], tie_diameter));
        bars[mirror].has_crosstie = true;
        bars[mirror].is_supported = true;
    }

    Ok(ties)
}

/// Find the bar on the opposite face at the matching coordinate.
///
/// The layout places face layers symmetrically, so a missing mirror means
/// the bar list was tampered with — an internal error, not an input error.
fn find_mirror(
    bars: &[LongitudinalBar],
    axis: FaceAxis,
    index: usize,
    faces: &FaceCoordinates,
) -> DetailResult<usize> {
    let center = bars[index].center;
    let found = match axis {
        FaceAxis::Vertical => (0..bars.len()).find(|&j| {
            approx_eq(bars[j].center.y, faces.bottom_y) && approx_eq(bars[j].center.x, center.x)
        }),
        FaceAxis::Horizontal => (0..bars.len()).find(|&j| {
            approx_eq(bars[j].center.x, faces.right_x) && approx_eq(bars[j].center.y, center.y)
        }),
    };
    found.ok_or_else(|| {
        DetailError::internal(format!(
            "no mirror bar for bar {} at ({}, {})",
            bars[index].id, center.x, center.y
        ))
    })
}

fn vertical_tie(top: &LongitudinalBar, bottom: &LongitudinalBar, ds: f64) -> CrossTie {
    let r = top.radius();
    let x = top.center.x;

    // Body tangent to the left of the bars, thickness toward the outside
    let near_line = Line::new(
        Point::new(x - r, top.center.y),
        Point::new(x - r, bottom.center.y),
    );
    let far_line = Line::new(
        Point::new(x - r - ds, top.center.y),
        Point::new(x - r - ds, bottom.center.y),
    );

    let cos_45 = FRAC_1_SQRT_2;
    let tail_length = 3.0 * ds;
    let radius = ds + r;

    // Top hook: clockwise 180°→45°, tail running down-right from the bar
    // surface, opening away from the tie line
    let top_hook = Hook {
        arc: Arc::new(top.center, radius, 180.0, 45.0),
        tail: hook_tail_outline(
            top.center.offset(cos_45 * r, cos_45 * r),
            Point::new(cos_45, -cos_45),
            Point::new(cos_45 * ds, cos_45 * ds),
            tail_length,
        ),
        counter_clockwise: false,
    };

    // Bottom hook: clockwise 315°→180°, tail running up-right
    let bottom_hook = Hook {
        arc: Arc::new(bottom.center, radius, 315.0, 180.0),
        tail: hook_tail_outline(
            bottom.center.offset(cos_45 * r, -cos_45 * r),
            Point::new(cos_45, cos_45),
            Point::new(cos_45 * ds, -cos_45 * ds),
            tail_length,
        ),
        counter_clockwise: false,
    };

    CrossTie {
        axis: FaceAxis::Vertical,
        anchor_a: top.id,
        anchor_b: bottom.id,
        near_line,
        far_line,
        hooks: [top_hook, bottom_hook],
    }
}

fn horizontal_tie(left: &LongitudinalBar, right: &LongitudinalBar, ds: f64) -> CrossTie {
    let r = left.radius();
    let y = left.center.y;

    // Body tangent above the bars, thickness offset downward
    let near_line = Line::new(
        Point::new(left.center.x, y - r),
        Point::new(right.center.x, y - r),
    );
    let far_line = Line::new(
        Point::new(left.center.x, y - r - ds),
        Point::new(right.center.x, y - r - ds),
    );

    let cos_45 = FRAC_1_SQRT_2;
    let tail_length = 3.0 * ds;
    let radius = ds + r;

    // Left hook: counter-clockwise 135°→270°, tail running up-right
    let left_hook = Hook {
        arc: Arc::new(left.center, radius, 135.0, 270.0),
        tail: hook_tail_outline(
            left.center.offset(-cos_45 * r, cos_45 * r),
            Point::new(cos_45, cos_45),
            Point::new(-cos_45 * ds, cos_45 * ds),
            tail_length,
        ),
        counter_clockwise: true,
    };

    // Right hook: counter-clockwise 270°→45°, tail running up-left
    let right_hook = Hook {
        arc: Arc::new(right.center, radius, 270.0, 45.0),
        tail: hook_tail_outline(
            right.center.offset(cos_45 * r, cos_45 * r),
            Point::new(-cos_45, cos_45),
            Point::new(cos_45 * ds, cos_45 * ds),
            tail_length,
        ),
        counter_clockwise: true,
    };

    CrossTie {
        axis: FaceAxis::Horizontal,
        anchor_a: left.id,
        anchor_b: right.id,
        near_line,
        far_line,
        hooks: [left_hook, right_hook],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces() -> FaceCoordinates {
        FaceCoordinates {
            top_y: 0.0,
            bottom_y: -469.2,
            left_x: 0.0,
            right_x: 469.2,
        }
    }

    fn bar(id: u32, x: f64, y: f64, flagged: bool) -> LongitudinalBar {
        LongitudinalBar {
            id,
            center: Point::new(x, y),
            diameter: 25.4,
            is_corner: false,
            is_supported: flagged,
            has_crosstie: flagged,
        }
    }

    /// Corners plus one flagged midpoint bar on the top and left faces
    fn bars() -> Vec<LongitudinalBar> {
        vec![
            bar(1, 0.0, 0.0, false),
            bar(2, 469.2, 0.0, false),
            bar(3, 0.0, -469.2, false),
            bar(4, 469.2, -469.2, false),
            bar(5, 234.6, 0.0, true),
            bar(6, 234.6, -469.2, false),
            bar(7, 0.0, -234.6, true),
            bar(8, 469.2, -234.6, false),
        ]
    }

    #[test]
    fn test_ties_connect_mirror_bars() {
        let mut bars = bars();
        let ties = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();
        assert_eq!(ties.len(), 2);

        let vertical = &ties[0];
        assert_eq!(vertical.axis, FaceAxis::Vertical);
        assert_eq!((vertical.anchor_a, vertical.anchor_b), (5, 6));

        let horizontal = &ties[1];
        assert_eq!(horizontal.axis, FaceAxis::Horizontal);
        assert_eq!((horizontal.anchor_a, horizontal.anchor_b), (7, 8));
    }

    #[test]
    fn test_mirror_bars_get_flagged() {
        let mut bars = bars();
        synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();
        let mirror = bars.iter().find(|b| b.id == 6).unwrap();
        assert!(mirror.has_crosstie);
        assert!(mirror.is_supported);
    }

    #[test]
    fn test_no_flags_no_geometry() {
        let mut bars: Vec<_> = bars().into_iter().map(|mut b| {
            b.has_crosstie = false;
            b
        }).collect();
        let ties = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();
        assert!(ties.is_empty());
    }

    #[test]
    fn test_vertical_tie_body_geometry() {
        let mut bars = bars();
        let ties = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();
        let tie = &ties[0];

        // Tangent to the bar surface, offset by the tie diameter
        assert!(approx_eq(tie.near_line.start.x, 234.6 - 12.7));
        assert!(approx_eq(tie.far_line.start.x, 234.6 - 12.7 - 12.7));
        assert!(approx_eq(tie.near_line.start.y, 0.0));
        assert!(approx_eq(tie.near_line.end.y, -469.2));
    }

    #[test]
    fn test_hook_arcs_wrap_anchor_bars() {
        let mut bars = bars();
        let ties = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();
        let radius = 12.7 + 25.4 / 2.0;

        let tie = &ties[0];
        assert!(tie.hooks[0].arc.center.approx_eq(&Point::new(234.6, 0.0)));
        assert!(tie.hooks[1].arc.center.approx_eq(&Point::new(234.6, -469.2)));
        for hook in &tie.hooks {
            assert!(approx_eq(hook.arc.radius, radius));
            assert!(!hook.counter_clockwise);
        }

        // Horizontal hooks sweep the other way
        for hook in &ties[1].hooks {
            assert!(hook.counter_clockwise);
        }
    }

    #[test]
    fn test_hook_tails_open_away_from_each_other() {
        let mut bars = bars();
        let ties = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap();

        // Vertical tie: top tail heads down (-y), bottom tail heads up (+y)
        let tie = &ties[0];
        let top_run = tie.hooks[0].tail.points[1] - tie.hooks[0].tail.points[0];
        let bottom_run = tie.hooks[1].tail.points[1] - tie.hooks[1].tail.points[0];
        assert!(top_run.y < 0.0 && bottom_run.y > 0.0);

        // Tail length is 3 tie diameters at 45°
        let length = (top_run.x * top_run.x + top_run.y * top_run.y).sqrt();
        assert!(approx_eq(length, 3.0 * 12.7));
        assert!(approx_eq(top_run.x.abs(), top_run.y.abs()));
    }

    #[test]
    fn test_missing_mirror_is_internal_error() {
        let mut bars = vec![bar(1, 100.0, 0.0, true)];
        let err = synthesize_crossties(&mut bars, &faces(), 12.7).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
