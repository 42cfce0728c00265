//! # Unit System
//!
//! The engine computes in a single length unit system per call: millimeters
//! (primary, matching the metric detailing workflow) or inches. All
//! code-mandated constants in the confinement formulas depend on the active
//! system, so each pure function takes an explicit [`UnitSystem`] and returns
//! values in that same system.
//!
//! Stress values (fy, f'c) are carried in MPa internally; a ksi conversion
//! helper is provided for models extracted in US customary units.
//!
//! ## Example
//!
//! ```rust
//! use detail_core::units::{ksi_to_mpa, UnitSystem};
//!
//! let unit: UnitSystem = "millimeter".parse().unwrap();
//! assert_eq!(unit.max_clear_support_distance(), 150.0);
//!
//! // Grade 60 rebar
//! assert!((ksi_to_mpa(60.0) - 413.69).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DetailError;

/// Conversion factor from ksi to MPa
pub const KSI_TO_MPA: f64 = 6.89476;

/// Yield strength threshold for Grade 80 reinforcement (MPa). At or above
/// this value the hoop spacing criterion (b) drops from 6db to 5db.
pub const GRADE_80_FY_MPA: f64 = 550.0;

/// Convert a stress in ksi to MPa
pub fn ksi_to_mpa(ksi: f64) -> f64 {
    ksi * KSI_TO_MPA
}

/// Length unit system for the confinement formulas.
///
/// The choice only affects the fixed code constants (maximum clear support
/// distance, minimum critical-region length, hoop spacing clamp bounds);
/// the geometry pipeline itself is unit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Millimeters (metric detailing)
    #[default]
    Millimeter,
    /// Inches (US customary detailing)
    Inch,
}

/// Unit-dependent constants for the hoop spacing criterion (c):
/// `clamp(c1 + (c2 - hx) / 3, lower, upper)` per ACI 318-19 Eq. 18.7.5.3c.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoopSpacingConstants {
    /// Additive constant c1
    pub c1: f64,
    /// Constant c2 from which hx is subtracted
    pub c2: f64,
    /// The result need not be taken smaller than this
    pub lower_bound: f64,
    /// The result shall not exceed this
    pub upper_bound: f64,
}

impl UnitSystem {
    /// All unit systems
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Millimeter, UnitSystem::Inch];

    /// Maximum clear distance from an unsupported bar to a laterally
    /// supported bar (ACI 318-19 25.7.2.3): 150 mm / 6 in.
    pub fn max_clear_support_distance(&self) -> f64 {
        match self {
            UnitSystem::Millimeter => 150.0,
            UnitSystem::Inch => 6.0,
        }
    }

    /// Fixed minimum for the critical-region length Lo: 450 mm / 18 in.
    pub fn min_critical_region_length(&self) -> f64 {
        match self {
            UnitSystem::Millimeter => 450.0,
            UnitSystem::Inch => 18.0,
        }
    }

    /// Constants for hoop spacing criterion (c) in this unit system
    pub fn hoop_spacing_constants(&self) -> HoopSpacingConstants {
        match self {
            UnitSystem::Millimeter => HoopSpacingConstants {
                c1: 100.0,
                c2: 350.0,
                lower_bound: 100.0,
                upper_bound: 150.0,
            },
            UnitSystem::Inch => HoopSpacingConstants {
                c1: 4.0,
                c2: 14.0,
                lower_bound: 4.0,
                upper_bound: 6.0,
            },
        }
    }

    /// Get display token (the canonical serialized form)
    pub fn token(&self) -> &'static str {
        match self {
            UnitSystem::Millimeter => "millimeter",
            UnitSystem::Inch => "inch",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "millimeter" | "mm" => Ok(UnitSystem::Millimeter),
            "inch" | "in" => Ok(UnitSystem::Inch),
            other => Err(DetailError::unknown_unit(other)),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
