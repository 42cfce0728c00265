//! # Confinement Formulas
//!
//! Pure, stateless implementations of the ACI 318-19 confinement criteria for
//! tied columns in special moment frames:
//!
//! - maximum unsupported bar spacing hx (25.7.2.3 / 18.7.5.2)
//! - hoop spacing inside the critical end region (18.7.5.3)
//! - critical-region length Lo (18.7.5.1)
//! - required crosstie leg count across a face
//!
//! Every function takes an explicit [`UnitSystem`] and returns values in that
//! same system; all divisors are fixed code constants, so no user input can
//! cause a division by zero. The tabular export path builds a per-section
//! [`ConfinementResult`] via [`for_section`] from the same inputs the layout
//! pipeline consumes, without depending on its output.

use serde::{Deserialize, Serialize};

use crate::errors::{DetailError, DetailResult};
use crate::rebar::BarCatalog;
use crate::section::SectionInput;
use crate::units::{UnitSystem, GRADE_80_FY_MPA};

/// Maximum center-to-center spacing hx between laterally supported bars:
/// `2·db + 2 × (max clear support distance)` — 150 mm or 6 in of clear
/// distance on either side of the supported bar.
pub fn max_unsupported_spacing(long_bar_diameter: f64, unit: UnitSystem) -> f64 {
    2.0 * long_bar_diameter + 2.0 * unit.max_clear_support_distance()
}

/// The three hoop-spacing criteria of ACI 318-19 18.7.5.3 plus their
/// governing minimum, kept for audit output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoopSpacingResult {
    /// Criterion (a): one quarter of the minimum member dimension
    pub criterion_a: f64,
    /// Criterion (b): 6·db, or 5·db for Grade 80 longitudinal steel
    pub criterion_b: f64,
    /// Criterion (c): Eq. 18.7.5.3c, clamped to the code bounds
    pub criterion_c: f64,
    /// Governing spacing: min(a, b, c)
    pub governing: f64,
}

/// Maximum hoop spacing inside the critical end region.
///
/// `fy_mpa` is the longitudinal yield strength in MPa regardless of the
/// length unit system (use [`crate::units::ksi_to_mpa`] for US-customary
/// material data); `hx` is the maximum spacing of laterally supported bars,
/// in the active length unit.
pub fn hoop_spacing(
    minor_dimension: f64,
    smallest_long_diameter: f64,
    fy_mpa: f64,
    hx: f64,
    unit: UnitSystem,
) -> HoopSpacingResult {
    let criterion_a = minor_dimension / 4.0;

    let criterion_b = if fy_mpa >= GRADE_80_FY_MPA {
        5.0 * smallest_long_diameter
    } else {
        6.0 * smallest_long_diameter
    };

    // Eq. 18.7.5.3c: so = c1 + (c2 - hx)/3, not greater than the upper
    // bound and need not be less than the lower bound.
    let k = unit.hoop_spacing_constants();
    let raw_c = k.c1 + (k.c2 - hx) / 3.0;
    let criterion_c = raw_c.max(k.lower_bound).min(k.upper_bound);

    let governing = criterion_a.min(criterion_b).min(criterion_c);

    HoopSpacingResult {
        criterion_a,
        criterion_b,
        criterion_c,
        governing,
    }
}

/// Critical-region length Lo over which the tighter hoop spacing applies:
/// the largest of the larger section dimension, one sixth of the clear
/// story height, and 450 mm / 18 in.
pub fn critical_region_length(larger_dimension: f64, clear_height: f64, unit: UnitSystem) -> f64 {
    larger_dimension
        .max(clear_height / 6.0)
        .max(unit.min_critical_region_length())
}

/// Crosstie legs required across one face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegCount {
    /// Total tie legs crossing the face, perimeter hoop included
    pub total_legs: u32,
    /// Interior legs beyond the two hoop legs
    pub interior_legs: u32,
    /// Resulting center-to-center leg spacing (0.0 in the degenerate case)
    pub actual_spacing: f64,
}

/// Number of tie legs required across a face so that no leg spacing exceeds
/// `max_unsupported`.
///
/// The effective span is measured center-to-center between the two hoop
/// legs: `face_dimension − 2·cover − tie_diameter`. A non-positive span is
/// a degenerate no-op (the perimeter hoop already covers the face); a span
/// within `max_unsupported` needs only the two hoop legs.
pub fn required_leg_count(
    face_dimension: f64,
    cover: f64,
    tie_diameter: f64,
    max_unsupported: f64,
    unit: UnitSystem,
) -> DetailResult<LegCount> {
    if max_unsupported <= 0.0 {
        return Err(DetailError::invalid_section(
            "max_unsupported",
            max_unsupported.to_string(),
            format!("Maximum unsupported spacing must be positive ({unit})"),
        ));
    }

    let effective_span = face_dimension - 2.0 * cover - tie_diameter;

    if effective_span <= 0.0 {
        return Ok(LegCount {
            total_legs: 2,
            interior_legs: 0,
            actual_spacing: 0.0,
        });
    }

    if effective_span <= max_unsupported {
        return Ok(LegCount {
            total_legs: 2,
            interior_legs: 0,
            actual_spacing: effective_span,
        });
    }

    let spans = (effective_span / max_unsupported).ceil();
    let total_legs = spans as u32 + 1;

    Ok(LegCount {
        total_legs,
        interior_legs: total_legs - 2,
        actual_spacing: effective_span / spans,
    })
}

/// Per-section confinement quantities for the tabular export sink.
///
/// Plain numeric records with no identity; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfinementResult {
    /// Maximum spacing hx of laterally supported bars
    pub max_unsupported_spacing: f64,
    /// Hoop spacing in the critical region with audit criteria
    pub hoop_spacing: HoopSpacingResult,
    /// Critical-region length Lo
    pub critical_region_length: f64,
    /// Tie legs required across the width face
    pub legs_along_width: LegCount,
    /// Tie legs required across the height face
    pub legs_along_height: LegCount,
}

/// Compute all confinement quantities for one section.
///
/// `SectionInput` dimensions are millimeters, so the result is in
/// millimeters as well; `clear_height_mm` is the clear story height used
/// for Lo. Independent of the layout pipeline's output.
pub fn for_section(
    input: &SectionInput,
    clear_height_mm: f64,
    catalog: &BarCatalog,
) -> DetailResult<ConfinementResult> {
    input.validate()?;

    let unit = UnitSystem::Millimeter;
    let db = catalog.diameter_mm(input.longitudinal_bar)?;
    let ds = catalog.diameter_mm(input.stirrup_bar)?;

    let hx = max_unsupported_spacing(db, unit);
    let spacing = hoop_spacing(input.minor_dimension(), db, input.fy_mpa, hx, unit);
    let lo = critical_region_length(input.larger_dimension(), clear_height_mm, unit);

    Ok(ConfinementResult {
        max_unsupported_spacing: hx,
        hoop_spacing: spacing,
        critical_region_length: lo,
        legs_along_width: required_leg_count(input.width_mm, input.cover_mm, ds, hx, unit)?,
        legs_along_height: required_leg_count(input.height_mm, input.cover_mm, ds, hx, unit)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebar::BarSize;
    use crate::section::SectionInput;

    fn test_section() -> SectionInput {
        SectionInput {
            label: "C-60x60".to_string(),
            width_mm: 600.0,
            height_mm: 600.0,
            cover_mm: 40.0,
            fc_mpa: 28.0,
            fy_mpa: 420.0,
            longitudinal_bar: BarSize::No8,
            stirrup_bar: BarSize::No4,
            bars_along_height: 4,
            bars_along_width: 4,
        }
    }

    #[test]
    fn test_max_unsupported_spacing() {
        // 2 * 25.4 + 2 * 150 = 350.8 mm
        assert!((max_unsupported_spacing(25.4, UnitSystem::Millimeter) - 350.8).abs() < 1e-9);
        // 2 * 1.0 + 2 * 6 = 14 in
        assert_eq!(max_unsupported_spacing(1.0, UnitSystem::Inch), 14.0);
    }

    #[test]
    fn test_hoop_spacing_criteria() {
        let result = hoop_spacing(600.0, 25.4, 420.0, 350.8, UnitSystem::Millimeter);
        assert_eq!(result.criterion_a, 150.0);
        // Grade 60: 6 * 25.4 = 152.4
        assert!((result.criterion_b - 152.4).abs() < 1e-9);
        // 100 + (350 - 350.8)/3 = 99.73 -> clamped up to 100
        assert_eq!(result.criterion_c, 100.0);
        assert_eq!(result.governing, 100.0);
    }

    #[test]
    fn test_hoop_spacing_grade_80() {
        let result = hoop_spacing(600.0, 25.4, 550.0, 200.0, UnitSystem::Millimeter);
        assert!((result.criterion_b - 5.0 * 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_hoop_spacing_monotonic_in_hx() {
        let mut previous = f64::INFINITY;
        for hx in [50.0, 150.0, 250.0, 350.0, 450.0] {
            let result = hoop_spacing(600.0, 25.4, 420.0, hx, UnitSystem::Millimeter);
            assert!(result.governing <= previous);
            assert!(result.governing <= 600.0 / 4.0);
            previous = result.governing;
        }
    }

    #[test]
    fn test_hoop_spacing_upper_clamp() {
        // Tiny hx would push criterion (c) above the 150 mm cap
        let result = hoop_spacing(2000.0, 43.0, 420.0, 10.0, UnitSystem::Millimeter);
        assert_eq!(result.criterion_c, 150.0);
    }

    #[test]
    fn test_critical_region_length() {
        // Larger dimension governs
        assert_eq!(critical_region_length(600.0, 3000.0, UnitSystem::Millimeter), 600.0);
        // Clear height / 6 governs
        assert_eq!(critical_region_length(500.0, 4200.0, UnitSystem::Millimeter), 700.0);
        // Fixed minimum governs
        assert_eq!(critical_region_length(300.0, 2400.0, UnitSystem::Millimeter), 450.0);
        assert_eq!(critical_region_length(10.0, 60.0, UnitSystem::Inch), 18.0);
    }

    #[test]
    fn test_leg_count_short_span() {
        // Span within hx -> perimeter hoop legs suffice
        let legs = required_leg_count(300.0, 40.0, 12.7, 350.8, UnitSystem::Millimeter).unwrap();
        assert_eq!(legs.total_legs, 2);
        assert_eq!(legs.interior_legs, 0);
        assert!((legs.actual_spacing - 207.3).abs() < 1e-9);
    }

    #[test]
    fn test_leg_count_interior_legs() {
        // 600 - 80 - 12.7 = 507.3; ceil(507.3 / 350.8) = 2 spans -> 3 legs
        let legs = required_leg_count(600.0, 40.0, 12.7, 350.8, UnitSystem::Millimeter).unwrap();
        assert_eq!(legs.total_legs, 3);
        assert_eq!(legs.interior_legs, 1);
        assert!((legs.actual_spacing - 507.3 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_leg_count_degenerate_span() {
        let legs = required_leg_count(80.0, 40.0, 12.7, 350.8, UnitSystem::Millimeter).unwrap();
        assert_eq!(legs.total_legs, 2);
        assert_eq!(legs.interior_legs, 0);
        assert_eq!(legs.actual_spacing, 0.0);
    }

    #[test]
    fn test_leg_count_invalid_hx() {
        let err = required_leg_count(600.0, 40.0, 12.7, 0.0, UnitSystem::Millimeter).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION");
    }

    #[test]
    fn test_for_section() {
        let result = for_section(&test_section(), 3000.0, BarCatalog::standard()).unwrap();
        assert!((result.max_unsupported_spacing - 350.8).abs() < 1e-9);
        assert_eq!(result.critical_region_length, 600.0);
        assert_eq!(result.legs_along_width.total_legs, 3);
        assert_eq!(result.legs_along_height.total_legs, 3);
    }

    #[test]
    fn test_result_round_trip_preserves_minimum() {
        let result = for_section(&test_section(), 3000.0, BarCatalog::standard()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ConfinementResult = serde_json::from_str(&json).unwrap();

        let s = roundtrip.hoop_spacing;
        assert_eq!(s.governing, s.criterion_a.min(s.criterion_b).min(s.criterion_c));
        assert_eq!(result, roundtrip);
    }
}
