//! # Detail Assembler
//!
//! Places one finished section drawing inside a named detail viewport and
//! flattens everything into a single ordered primitive list for the drawing
//! sink. This is coordinate translation and ordering only — every geometric
//! quantity is computed by the section pipeline.
//!
//! ## Example
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
//! let detail = Detail::new("C-1", Point::new(100.0, 100.0), 3000.0, 3000.0);
//! let primitives = detail.assemble(&input, BarCatalog::standard()).unwrap();
//! assert!(!primitives.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::DetailResult;
use crate::geometry::{Circle, Layer, LinearDim, Point, Polyline, Primitive, TextLabel};
use crate::rebar::BarCatalog;
use crate::section::{detail_section, SectionInput};

/// Title text height
const TITLE_HEIGHT: f64 = 50.0;
/// Scale note text height
const SCALE_NOTE_HEIGHT: f64 = 30.0;
/// Scale note content
const SCALE_NOTE: &str = "SCALE 1:10";
/// Offset of the dimension lines from the section outline
const DIM_OFFSET: f64 = 180.0;

/// A named detail viewport on the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    /// Detail name rendered as the title (e.g., the section label)
    pub name: String,
    /// Top-left corner of the viewport frame
    pub origin: Point,
    /// Frame width
    pub width: f64,
    /// Frame height
    pub height: f64,
}

impl Detail {
    /// Create a new detail viewport
    pub fn new(name: impl Into<String>, origin: Point, width: f64, height: f64) -> Self {
        Detail {
            name: name.into(),
            origin,
            width,
            height,
        }
    }

    /// Closed frame outline
    pub fn frame_outline(&self) -> Polyline {
        Polyline::rectangle(self.origin, self.width, self.height)
    }

    /// Center point of the viewport
    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y - self.height / 2.0)
    }

    /// Top-left origin for a section of the given size, centered in the frame
    pub fn section_origin(&self, section_width: f64, section_height: f64) -> Point {
        let center = self.center();
        Point::new(center.x - section_width / 2.0, center.y + section_height / 2.0)
    }

    /// Title anchor below the section
    fn title_position(&self, section_origin: Point, section_width: f64, section_height: f64) -> Point {
        Point::new(
            section_origin.x + section_width / 2.0 - 100.0,
            section_origin.y - section_height - 380.0,
        )
    }

    /// Run the section pipeline and return the ordered primitive list:
    /// frame, title block, section outline, dimensions, bars, hoop,
    /// splice hook, crossties, hooks.
    pub fn assemble(&self, input: &SectionInput, catalog: &BarCatalog) -> DetailResult<Vec<Primitive>> {
        let section_origin = self.section_origin(input.width_mm, input.height_mm);
        let drawing = detail_section(input, catalog, section_origin)?;

        let mut primitives = Vec::new();

        // Frame and title block
        primitives.push(Primitive::polyline(Layer::DetailArea, self.frame_outline()));
        let title = self.title_position(section_origin, input.width_mm, input.height_mm);
        primitives.push(Primitive::text(
            Layer::Text,
            TextLabel::new(self.name.clone(), title, TITLE_HEIGHT),
        ));
        primitives.push(Primitive::polyline(
            Layer::Text,
            Polyline::new(vec![title.offset(0.0, -10.0), title.offset(200.0, -10.0)]),
        ));
        primitives.push(Primitive::text(
            Layer::Text,
            TextLabel::new(SCALE_NOTE, title.offset(0.0, -45.0), SCALE_NOTE_HEIGHT),
        ));

        // Concrete outline with width/height dimensions off the bottom-left
        // corner (outline points: tl, tr, br, bl, tl)
        primitives.push(Primitive::polyline(Layer::Column, drawing.outline.clone()));
        let bottom_left = drawing.outline.points[3];
        let bottom_right = drawing.outline.points[2];
        let top_left = drawing.outline.points[0];
        primitives.push(Primitive::linear_dim(
            Layer::Column,
            LinearDim {
                base: bottom_left.offset(0.0, -DIM_OFFSET),
                p1: bottom_left,
                p2: bottom_right,
                label: "b".to_string(),
            },
        ));
        primitives.push(Primitive::linear_dim(
            Layer::Column,
            LinearDim {
                base: bottom_left.offset(-DIM_OFFSET, 0.0),
                p1: bottom_left,
                p2: top_left,
                label: "h".to_string(),
            },
        ));

        // Longitudinal bars as filled circles
        for bar in &drawing.bars {
            primitives.push(Primitive::circle(
                Layer::Rebar,
                Circle::new(bar.center, bar.radius()),
                true,
            ));
        }

        // Hoop legs, inner and outer lines per side
        let hoop = &drawing.hoop;
        for leg in [&hoop.left_leg, &hoop.right_leg, &hoop.top_leg, &hoop.bottom_leg] {
            primitives.push(Primitive::line(Layer::Rebar, leg.inner));
            primitives.push(Primitive::line(Layer::Rebar, leg.outer));
        }

        // Corner arcs and the splice hook
        for arc in &hoop.corner_arcs {
            primitives.push(Primitive::arc(Layer::Rebar, *arc, true));
        }
        primitives.push(Primitive::arc(Layer::Rebar, hoop.splice_hook.arc, true));
        primitives.push(Primitive::polyline(Layer::Rebar, hoop.splice_hook.tail_a.clone()));
        primitives.push(Primitive::polyline(Layer::Rebar, hoop.splice_hook.tail_b.clone()));

        // Crosstie bodies first, then their hooks
        for tie in &drawing.crossties {
            primitives.push(Primitive::line(Layer::Rebar, tie.near_line));
            primitives.push(Primitive::line(Layer::Rebar, tie.far_line));
        }
        for tie in &drawing.crossties {
            for hook in &tie.hooks {
                primitives.push(Primitive::arc(Layer::Rebar, hook.arc, hook.counter_clockwise));
                primitives.push(Primitive::polyline(Layer::Rebar, hook.tail.clone()));
            }
        }

        Ok(primitives)
    }
}
