//! # Lateral Support Resolver
//!
//! Decides which non-corner bars on a face layer are close enough to a
//! laterally supported bar (hoop corner or already-placed crosstie) and
//! which need a supplementary crosstie of their own, per the ACI 318-19
//! lateral support rule.
//!
//! The resolution is a greedy fixed-point loop, not a global optimizer: a
//! newly supported bar changes the eligibility of its neighbors, so passes
//! repeat until one adds nothing. Termination is guaranteed because the
//! supported set only grows and is bounded by the layer size. The two axes
//! resolve completely independently — support in one direction has no
//! bearing on the other.

use crate::geometry::approx_eq;
use crate::section::{FaceAxis, FaceCoordinates, LongitudinalBar};

/// Resolve lateral support for one axis, updating `is_supported` and
/// `has_crosstie` in place. Returns the number of bars flagged for a tie.
///
/// [`FaceAxis::Vertical`] resolves the top bar row (distances along x);
/// [`FaceAxis::Horizontal`] resolves the left bar column (distances along
/// y). The opposite layers mirror these by construction and are flagged by
/// the crosstie synthesizer when the ties are emitted.
pub fn resolve_lateral_support(
    bars: &mut [LongitudinalBar],
    axis: FaceAxis,
    faces: &FaceCoordinates,
    max_unsupported: f64,
) -> usize {
    let (layer_coord, layer_of, key_of): (f64, fn(&LongitudinalBar) -> f64, fn(&LongitudinalBar) -> f64) =
        match axis {
            FaceAxis::Vertical => (faces.top_y, |bar| bar.center.y, |bar| bar.center.x),
            FaceAxis::Horizontal => (faces.left_x, |bar| bar.center.x, |bar| bar.center.y),
        };

    // Indices of this layer's bars, sorted along the layer axis
    let mut layer: Vec<usize> = (0..bars.len())
        .filter(|&i| approx_eq(layer_of(&bars[i]), layer_coord))
        .collect();
    layer.sort_by(|&a, &b| key_of(&bars[a]).total_cmp(&key_of(&bars[b])));

    let mut flagged = 0;
    let mut changed = true;
    while changed {
        changed = false;

        let supported_keys: Vec<f64> = layer
            .iter()
            .filter(|&&i| bars[i].is_supported)
            .map(|&i| key_of(&bars[i]))
            .collect();

        for &i in &layer {
            if bars[i].is_supported {
                continue;
            }
            let key = key_of(&bars[i]);
            let min_distance = supported_keys
                .iter()
                .map(|s| (key - s).abs())
                .fold(f64::INFINITY, f64::min);

            if min_distance > max_unsupported {
                bars[i].has_crosstie = true;
                bars[i].is_supported = true;
                flagged += 1;
                changed = true;
            }
        }
    }

    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn faces() -> FaceCoordinates {
        FaceCoordinates {
            top_y: 0.0,
            bottom_y: -500.0,
            left_x: 0.0,
            right_x: 500.0,
        }
    }

    fn bar(id: u32, x: f64, y: f64, is_corner: bool) -> LongitudinalBar {
        LongitudinalBar {
            id,
            center: Point::new(x, y),
            diameter: 25.4,
            is_corner,
            is_supported: is_corner,
            has_crosstie: false,
        }
    }

    /// Top row: corners at 0 and 500, interior bars at 125/250/375
    fn top_row() -> Vec<LongitudinalBar> {
        vec![
            bar(1, 0.0, 0.0, true),
            bar(2, 500.0, 0.0, true),
            bar(3, 125.0, 0.0, false),
            bar(4, 250.0, 0.0, false),
            bar(5, 375.0, 0.0, false),
        ]
    }

    #[test]
    fn test_close_spacing_needs_no_ties() {
        let mut bars = top_row();
        let flagged = resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 150.0);
        assert_eq!(flagged, 1); // only the middle bar is 250 from a corner
        assert!(bars.iter().find(|b| b.id == 4).unwrap().has_crosstie);
        assert!(!bars.iter().find(|b| b.id == 3).unwrap().has_crosstie);
        assert!(!bars.iter().find(|b| b.id == 5).unwrap().has_crosstie);
    }

    #[test]
    fn test_tight_limit_flags_all_interior() {
        let mut bars = top_row();
        let flagged = resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 100.0);
        assert_eq!(flagged, 3);
        assert!(bars.iter().all(|b| b.is_supported));
    }

    #[test]
    fn test_sparse_row_flags_both_interior_bars() {
        // Corners at 0/900, interior at 300 and 600. With a 250 limit both
        // interior bars are out of reach of any corner and get ties.
        let mut bars = vec![
            bar(1, 0.0, 0.0, true),
            bar(2, 900.0, 0.0, true),
            bar(3, 300.0, 0.0, false),
            bar(4, 600.0, 0.0, false),
        ];
        let flagged = resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 250.0);
        assert_eq!(flagged, 2);
    }

    #[test]
    fn test_idempotent() {
        let mut bars = top_row();
        resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 100.0);
        let snapshot = bars.clone();
        let flagged = resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 100.0);
        assert_eq!(flagged, 0);
        assert_eq!(bars, snapshot);
    }

    #[test]
    fn test_flagged_bars_exceeded_limit_beforehand() {
        let original = top_row();
        let mut bars = original.clone();
        let limit = 150.0;
        resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), limit);

        let initially_supported: Vec<f64> = original
            .iter()
            .filter(|b| b.is_supported)
            .map(|b| b.center.x)
            .collect();

        for (before, after) in original.iter().zip(&bars) {
            let min_dist = initially_supported
                .iter()
                .map(|s| (before.center.x - s).abs())
                .fold(f64::INFINITY, f64::min);
            if after.has_crosstie {
                assert!(min_dist > limit);
            } else if !before.is_supported {
                // Left untied: some bar supported after resolution is in reach
                let reachable = bars
                    .iter()
                    .filter(|b| b.is_supported)
                    .any(|b| (b.center.x - before.center.x).abs() <= limit && b.id != before.id);
                assert!(reachable);
            }
        }
    }

    #[test]
    fn test_axes_resolve_independently() {
        // Left column sparse, top row tight: only the horizontal axis
        // should add ties
        let mut bars = vec![
            bar(1, 0.0, 0.0, true),
            bar(2, 500.0, 0.0, true),
            bar(3, 0.0, -500.0, true),
            bar(4, 500.0, -500.0, true),
            bar(5, 250.0, 0.0, false),
            bar(6, 0.0, -250.0, false),
        ];
        resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces(), 300.0);
        assert!(!bars.iter().find(|b| b.id == 5).unwrap().has_crosstie);

        resolve_lateral_support(&mut bars, FaceAxis::Horizontal, &faces(), 200.0);
        assert!(bars.iter().find(|b| b.id == 6).unwrap().has_crosstie);
    }
}
