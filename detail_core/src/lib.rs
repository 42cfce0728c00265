//! # detail_core - Column Reinforcement Detailing Engine
//!
//! `detail_core` computes the reinforcement detailing of rectangular tied
//! concrete columns: longitudinal bar positions and lateral support status,
//! perimeter hoop geometry with its seismic splice hook, supplementary
//! crossties with 135° hooks, and the ACI 318-19 confinement quantities
//! (hoop spacing in the critical region, critical-region length Lo, and
//! required tie leg counts).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions from section inputs to geometry and
//!   numeric records; sections are independent and safe to process in
//!   parallel
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **No I/O**: the drawing sink and tabular export sink consume plain
//!   value types; the engine has no file-format knowledge
//!
//! ## Quick Start
//!
//! ```rust
//! use detail_core::detail::Detail;
//! use detail_core::geometry::Point;
//! use detail_core::rebar::{BarCatalog, BarSize};
//! use detail_core::section::SectionInput;
//!
//! let input = SectionInput {
//!     label: "C-1".to_string(),
//!     width_mm: 600.0,
//!     height_mm: 600.0,
//!     cover_mm: 40.0,
//!     fc_mpa: 28.0,
//!     fy_mpa: 420.0,
//!     longitudinal_bar: BarSize::No8,
//!     stirrup_bar: BarSize::No4,
//!     bars_along_height: 4,
//!     bars_along_width: 4,
//! };
//!
//! // Geometry for the drawing sink
//! let detail = Detail::new("C-1", Point::new(100.0, 100.0), 3000.0, 3000.0);
//! let primitives = detail.assemble(&input, BarCatalog::standard()).unwrap();
//!
//! // Confinement record for the tabular export sink
//! let confinement = detail_core::confinement::for_section(&input, 3000.0, BarCatalog::standard()).unwrap();
//! assert!(confinement.hoop_spacing.governing <= input.minor_dimension() / 4.0);
//! ```
//!
//! ## Modules
//!
//! - [`section`] - bar layout, lateral support resolution, crosstie synthesis
//! - [`confinement`] - pure ACI 318-19 confinement formulas
//! - [`detail`] - detail viewport assembly for the drawing sink
//! - [`geometry`] - drawing primitive value types
//! - [`rebar`] - standard bar size catalog
//! - [`units`] - unit system and code constants
//! - [`errors`] - structured error types

pub mod confinement;
pub mod detail;
pub mod errors;
pub mod geometry;
pub mod rebar;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use confinement::ConfinementResult;
pub use detail::Detail;
pub use errors::{DetailError, DetailResult};
pub use rebar::{BarCatalog, BarSize};
pub use section::{SectionDrawing, SectionInput};
pub use units::UnitSystem;
