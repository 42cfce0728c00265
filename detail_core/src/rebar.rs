//! # Bar Catalog
//!
//! Standard US rebar size designations (#2 through #14) with nominal
//! diameters and areas in millimeters, per the imperial bar series used by
//! the structural model.
//!
//! The catalog is an immutable lookup table constructed once and passed by
//! reference into every component; [`BarCatalog::standard`] returns a
//! process-wide instance. Custom catalogs (e.g., soft-metric diameters) can
//! be built with [`BarCatalog::from_entries`] — a lookup of a designator
//! absent from such a catalog fails with `UnknownBarSize` rather than
//! falling back to the standard values.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::{DetailError, DetailResult};

/// Standard rebar size designation (US bar numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// #2 (6.35 mm)
    No2,
    /// #3 (9.525 mm)
    No3,
    /// #4 (12.7 mm)
    #[default]
    No4,
    /// #5 (15.875 mm)
    No5,
    /// #6 (19.05 mm)
    No6,
    /// #7 (22.225 mm)
    No7,
    /// #8 (25.4 mm)
    No8,
    /// #9 (28.65 mm)
    No9,
    /// #10 (32.26 mm)
    No10,
    /// #11 (35.81 mm)
    No11,
    /// #14 (43.0 mm)
    No14,
}

impl BarSize {
    /// All catalog sizes in ascending order
    pub const ALL: [BarSize; 11] = [
        BarSize::No2,
        BarSize::No3,
        BarSize::No4,
        BarSize::No5,
        BarSize::No6,
        BarSize::No7,
        BarSize::No8,
        BarSize::No9,
        BarSize::No10,
        BarSize::No11,
        BarSize::No14,
    ];

    /// Get the "#N" designation string
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::No2 => "#2",
            BarSize::No3 => "#3",
            BarSize::No4 => "#4",
            BarSize::No5 => "#5",
            BarSize::No6 => "#6",
            BarSize::No7 => "#7",
            BarSize::No8 => "#8",
            BarSize::No9 => "#9",
            BarSize::No10 => "#10",
            BarSize::No11 => "#11",
            BarSize::No14 => "#14",
        }
    }
}

impl FromStr for BarSize {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        for size in BarSize::ALL {
            if size.designation() == token {
                return Ok(size);
            }
        }
        Err(DetailError::unknown_bar_size(token))
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

/// Nominal properties of one bar size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarProperties {
    /// Nominal diameter (mm)
    pub diameter_mm: f64,
    /// Nominal cross-sectional area (mm²)
    pub area_mm2: f64,
}

/// Immutable bar size lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarCatalog {
    bars: HashMap<BarSize, BarProperties>,
}

static STANDARD_CATALOG: Lazy<BarCatalog> = Lazy::new(|| {
    BarCatalog::from_entries([
        (BarSize::No2, BarProperties { diameter_mm: 6.350, area_mm2: 32.0 }),
        (BarSize::No3, BarProperties { diameter_mm: 9.525, area_mm2: 71.0 }),
        (BarSize::No4, BarProperties { diameter_mm: 12.7, area_mm2: 129.0 }),
        (BarSize::No5, BarProperties { diameter_mm: 15.875, area_mm2: 199.0 }),
        (BarSize::No6, BarProperties { diameter_mm: 19.05, area_mm2: 284.0 }),
        (BarSize::No7, BarProperties { diameter_mm: 22.225, area_mm2: 387.0 }),
        (BarSize::No8, BarProperties { diameter_mm: 25.40, area_mm2: 510.0 }),
        (BarSize::No9, BarProperties { diameter_mm: 28.65, area_mm2: 645.0 }),
        (BarSize::No10, BarProperties { diameter_mm: 32.26, area_mm2: 819.0 }),
        (BarSize::No11, BarProperties { diameter_mm: 35.81, area_mm2: 1006.0 }),
        (BarSize::No14, BarProperties { diameter_mm: 43.00, area_mm2: 1452.0 }),
    ])
});

impl BarCatalog {
    /// The standard catalog, built once at first use. Safe for concurrent
    /// reads; never mutated after construction.
    pub fn standard() -> &'static BarCatalog {
        &STANDARD_CATALOG
    }

    /// Build a catalog from explicit entries
    pub fn from_entries(entries: impl IntoIterator<Item = (BarSize, BarProperties)>) -> Self {
        BarCatalog {
            bars: entries.into_iter().collect(),
        }
    }

    /// Look up the properties for a bar size
    pub fn properties(&self, size: BarSize) -> DetailResult<BarProperties> {
        self.bars
            .get(&size)
            .copied()
            .ok_or_else(|| DetailError::unknown_bar_size(size.designation()))
    }

    /// Look up the nominal diameter (mm) for a bar size
    pub fn diameter_mm(&self, size: BarSize) -> DetailResult<f64> {
        Ok(self.properties(size)?.diameter_mm)
    }

    /// Look up the nominal area (mm²) for a bar size
    pub fn area_mm2(&self, size: BarSize) -> DetailResult<f64> {
        Ok(self.properties(size)?.area_mm2)
    }

    /// Number of sizes in this catalog
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
