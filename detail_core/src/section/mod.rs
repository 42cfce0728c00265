//! # Section Detailing Pipeline
//!
//! Everything that turns a rectangular tied-column cross-section into
//! reinforcement geometry:
//!
//! - [`layout`] - longitudinal bar placement and perimeter hoop synthesis
//! - [`support`] - lateral support fixed-point resolver
//! - [`crossties`] - supplementary crosstie and seismic hook synthesis
//!
//! The pipeline runs Layout → Resolver → Synthesizer; [`detail_section`] is
//! the one-call entry point producing a [`SectionDrawing`]. Each call is a
//! deterministic function of its inputs with no shared mutable state, so
//! independent sections can be processed in parallel by the caller.

pub mod crossties;
pub mod layout;
pub mod support;

use serde::{Deserialize, Serialize};

use crate::errors::{DetailError, DetailResult};
use crate::geometry::Point;
use crate::rebar::{BarCatalog, BarSize};

// Re-export commonly used types
pub use crossties::{CrossTie, Hook};
pub use layout::{HoopGeometry, HoopLeg, SectionLayout, SpliceHook};

/// Input parameters for one rectangular tied-column section.
///
/// All dimensions are millimeters; strengths are MPa. Bar counts are per
/// direction: `bars_along_height` pairs sit on the left/right faces,
/// `bars_along_width` define the top/bottom faces (the two shared corner
/// bars included).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "width_mm": 600.0,
///   "height_mm": 600.0,
///   "cover_mm": 40.0,
///   "fc_mpa": 28.0,
///   "fy_mpa": 420.0,
///   "longitudinal_bar": "No8",
///   "stirrup_bar": "No4",
///   "bars_along_height": 4,
///   "bars_along_width": 4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label for this section detail (e.g., "C-1", "60x60")
    pub label: String,

    /// Outer concrete width (mm)
    pub width_mm: f64,

    /// Outer concrete height (mm)
    pub height_mm: f64,

    /// Clear cover to the stirrup (mm)
    pub cover_mm: f64,

    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Longitudinal steel yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Longitudinal bar size
    pub longitudinal_bar: BarSize,

    /// Perimeter hoop / crosstie bar size
    pub stirrup_bar: BarSize,

    /// Bar pairs along the height direction (left and right faces), >= 2
    pub bars_along_height: u32,

    /// Bars along the width direction (top and bottom faces), >= 2
    pub bars_along_width: u32,
}

impl SectionInput {
    /// Validate input parameters.
    ///
    /// Bar counts below 2 are rejected outright — a face needs two bars to
    /// anchor the hoop corners, and the interior spacing formula divides by
    /// `n - 1`. Clamping would silently alter engineering intent.
    pub fn validate(&self) -> DetailResult<()> {
        if self.width_mm <= 0.0 {
            return Err(DetailError::invalid_section(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if self.height_mm <= 0.0 {
            return Err(DetailError::invalid_section(
                "height_mm",
                self.height_mm.to_string(),
                "Height must be positive",
            ));
        }
        if self.cover_mm <= 0.0 {
            return Err(DetailError::invalid_section(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover must be positive",
            ));
        }
        if self.bars_along_height < 2 {
            return Err(DetailError::invalid_section(
                "bars_along_height",
                self.bars_along_height.to_string(),
                "At least 2 bars required along the height direction",
            ));
        }
        if self.bars_along_width < 2 {
            return Err(DetailError::invalid_section(
                "bars_along_width",
                self.bars_along_width.to_string(),
                "At least 2 bars required along the width direction",
            ));
        }
        Ok(())
    }

    /// Smaller of the two section dimensions (mm)
    pub fn minor_dimension(&self) -> f64 {
        self.width_mm.min(self.height_mm)
    }

    /// Larger of the two section dimensions (mm)
    pub fn larger_dimension(&self) -> f64 {
        self.width_mm.max(self.height_mm)
    }

    /// Total longitudinal bar count: `2·nH + 2·(nW - 2)`
    pub fn total_bars(&self) -> u32 {
        2 * self.bars_along_height + 2 * (self.bars_along_width - 2)
    }
}

/// One longitudinal bar placed in the section.
///
/// Created by the layout; only the resolver and the crosstie synthesizer
/// mutate the support flags afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalBar {
    /// 1-based id in placement order
    pub id: u32,
    /// Bar center in model space
    pub center: Point,
    /// Bar diameter (mm)
    pub diameter: f64,
    /// Sits at a hoop corner (always laterally supported)
    pub is_corner: bool,
    /// Laterally restrained by a hoop corner or a crosstie
    pub is_supported: bool,
    /// A supplementary crosstie terminates at this bar
    pub has_crosstie: bool,
}

impl LongitudinalBar {
    /// Bar radius (mm)
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Principal direction a crosstie runs in.
///
/// Vertical ties run along the height direction and restrain bars on the
/// top/bottom face layers; horizontal ties run along the width and restrain
/// the left/right face layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceAxis {
    Vertical,
    Horizontal,
}

/// Center-line coordinates of the four bar face layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceCoordinates {
    /// y of the top bar row centers
    pub top_y: f64,
    /// y of the bottom bar row centers
    pub bottom_y: f64,
    /// x of the left bar column centers
    pub left_x: f64,
    /// x of the right bar column centers
    pub right_x: f64,
}

/// Center-to-center and clear bar spacings per direction, kept for the
/// export path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    /// Center spacing of the left/right face pairs (along height)
    pub along_height_center: f64,
    /// Clear spacing along height (center spacing minus one diameter)
    pub along_height_clear: f64,
    /// Center spacing of the top/bottom face bars (along width)
    pub along_width_center: f64,
    /// Clear spacing along width
    pub along_width_clear: f64,
}

/// Fully resolved reinforcement geometry for one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDrawing {
    /// Closed section outline
    pub outline: crate::geometry::Polyline,
    /// All longitudinal bars with final support flags
    pub bars: Vec<LongitudinalBar>,
    /// Perimeter hoop geometry
    pub hoop: HoopGeometry,
    /// Supplementary crossties (empty when the hoop corners suffice)
    pub crossties: Vec<CrossTie>,
    /// Bar face layer coordinates
    pub faces: FaceCoordinates,
    /// Bar spacings per direction
    pub spacing: BarSpacing,
}

/// Run the full detailing pipeline for one section placed at `origin`
/// (top-left corner of the concrete outline).
pub fn detail_section(
    input: &SectionInput,
    catalog: &BarCatalog,
    origin: Point,
) -> DetailResult<SectionDrawing> {
    let layout = layout::layout_section(input, catalog, origin)?;

    let SectionLayout {
        outline,
        mut bars,
        hoop,
        faces,
        spacing,
    } = layout;

    let db = catalog.diameter_mm(input.longitudinal_bar)?;
    let ds = catalog.diameter_mm(input.stirrup_bar)?;
    let hx_max = crate::confinement::max_unsupported_spacing(db, crate::units::UnitSystem::Millimeter);

    support::resolve_lateral_support(&mut bars, FaceAxis::Vertical, &faces, hx_max);
    support::resolve_lateral_support(&mut bars, FaceAxis::Horizontal, &faces, hx_max);

    let crossties = crossties::synthesize_crossties(&mut bars, &faces, ds)?;

    Ok(SectionDrawing {
        outline,
        bars,
        hoop,
        crossties,
        faces,
        spacing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> SectionInput {
        SectionInput {
            label: "C-1".to_string(),
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
    fn test_validation_rejects_single_bar_face() {
        let mut input = test_input();
        input.bars_along_width = 1;
        let err = input.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION");
    }

    #[test]
    fn test_validation_rejects_nonpositive_dimensions() {
        let mut input = test_input();
        input.height_mm = 0.0;
        assert!(input.validate().is_err());

        let mut input = test_input();
        input.cover_mm = -5.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_total_bars() {
        assert_eq!(test_input().total_bars(), 12);

        let mut input = test_input();
        input.bars_along_height = 2;
        input.bars_along_width = 2;
        assert_eq!(input.total_bars(), 4);
    }

    #[test]
    fn test_full_pipeline_close_spacing_needs_no_ties() {
        // 600x600 with 4 bars per direction: 156.4 mm bar spacing, well
        // within hx_max = 350.8 mm, so the hoop corners restrain everything
        let drawing = detail_section(&test_input(), BarCatalog::standard(), Point::new(0.0, 0.0)).unwrap();
        assert_eq!(drawing.bars.len(), 12);
        assert!(drawing.crossties.is_empty());
        assert!(drawing.bars.iter().all(|bar| !bar.has_crosstie));
    }

    #[test]
    fn test_full_pipeline_wide_face_gets_ties() {
        // 900 mm wide with only a midpoint bar on the top/bottom faces:
        // 384.6 mm to the nearest corner exceeds hx_max = 350.8 mm
        let mut input = test_input();
        input.width_mm = 900.0;
        input.bars_along_height = 3;
        input.bars_along_width = 3;

        let drawing = detail_section(&input, BarCatalog::standard(), Point::new(0.0, 0.0)).unwrap();
        assert_eq!(drawing.bars.len(), 8);
        // One vertical tie connecting the top/bottom midpoint bars
        assert_eq!(drawing.crossties.len(), 1);
        assert_eq!(drawing.crossties[0].axis, FaceAxis::Vertical);
        // Both anchors carry the tie; the left/right midpoint bars sit
        // 234.6 mm from their corners and need none
        let tied = drawing.bars.iter().filter(|bar| bar.has_crosstie).count();
        assert_eq!(tied, 2);
    }

    #[test]
    fn test_input_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.width_mm, roundtrip.width_mm);
        assert_eq!(input.longitudinal_bar, roundtrip.longitudinal_bar);
    }
}
