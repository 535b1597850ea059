//! The segmentation pipeline.
//!
//! Stages run in a fixed order over one immutable [`SegmentContext`]:
//!
//! 1. lasso ownership ([`lasso`]) and hulls of the owned ink ([`hull`])
//! 2. column dividers ([`columns`]) built from gaps, forced group separators
//!    and width uniformity ([`dividers`], [`uniformity`])
//! 3. row dividers per column ([`rows`])
//! 4. column/row balancing ([`balance`])
//! 5. cells and reading-order assembly ([`grid`], [`assemble`])
//!
//! Every stage refers to strokes by index into the caller's slice.

pub mod assemble;
pub mod balance;
pub mod bounds;
pub mod columns;
pub mod context;
pub mod defaults;
pub mod dividers;
pub mod grid;
pub mod hull;
pub mod lasso;
pub mod rows;
pub mod uniformity;

use glam::dvec2;

use crate::config::SegmenterConfig;
use crate::errors::{ConfigError, InputError};
use crate::log::debug;
use crate::render::{divider_svg, lasso_svg};
use crate::types::{Axis, DividerLine, LassoPolygon, Stroke};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use assemble::{AnnotatedLasso, AnnotatedStroke, CharacterSlot, DividerSet, Segmentation};

use assemble::{annotate_lassos, assemble, single_character};
use context::SegmentContext;
use defaults::DIVIDER_PADDING;
use rows::ColumnLayout;

/// One page of ink to segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SegmentInput {
    pub strokes: Vec<Stroke>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lassos: Vec<LassoPolygon>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Only consulted for the single-character shortcut when it equals 1.
    #[cfg_attr(feature = "serde", serde(default = "unbounded"))]
    pub max_characters: usize,
}

#[cfg(feature = "serde")]
fn unbounded() -> usize {
    usize::MAX
}

impl SegmentInput {
    pub fn new(strokes: Vec<Stroke>, canvas_width: f64, canvas_height: f64) -> Self {
        SegmentInput {
            strokes,
            lassos: Vec::new(),
            canvas_width,
            canvas_height,
            max_characters: usize::MAX,
        }
    }

    pub fn with_lassos(mut self, lassos: Vec<LassoPolygon>) -> Self {
        self.lassos = lassos;
        self
    }

    pub fn with_max_characters(mut self, max_characters: usize) -> Self {
        self.max_characters = max_characters;
        self
    }

    /// Check the canvas, the character bound and every coordinate.
    pub fn validate(&self) -> Result<(), InputError> {
        for (dimension, value) in [("width", self.canvas_width), ("height", self.canvas_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InputError::InvalidCanvas { dimension, value });
            }
        }
        if self.max_characters == 0 {
            return Err(InputError::ZeroMaxCharacters);
        }
        for (stroke, s) in self.strokes.iter().enumerate() {
            if let Some(point) = s.points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(InputError::NonFinitePoint { stroke, point });
            }
        }
        for (lasso, l) in self.lassos.iter().enumerate() {
            if let Some(vertex) = l.points.iter().position(|v| !(v.x.is_finite() && v.y.is_finite())) {
                return Err(InputError::NonFiniteVertex { lasso, vertex });
            }
        }
        Ok(())
    }
}

/// Splits vertical Japanese handwriting into per-character slots.
///
/// Immutable after construction; one instance can serve any number of
/// threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Segmenter { config })
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Run the whole pipeline. Fails only when `input` does not validate.
    pub fn segment<'a>(&self, input: &'a SegmentInput) -> Result<Segmentation<'a>, InputError> {
        input.validate()?;
        let (width, height) = (input.canvas_width, input.canvas_height);
        let strokes = input.strokes.as_slice();

        let groups = lasso::resolve_groups(strokes, &input.lassos, self.config.lasso_containment_threshold);
        let protected = hull::protected_bounds(&groups, strokes);
        let lassos = annotate_lassos(&input.lassos, &protected);
        debug!(strokes = strokes.len(), lassos = lassos.len(), "protected groups resolved");

        if strokes.is_empty() {
            return Ok(Segmentation { lassos, ..Segmentation::default() });
        }

        let lasso_svg = lasso_svg(width, height, &lassos);

        if input.max_characters == 1 {
            debug!("single character expected, skipping dividers");
            let (characters, strokes) = single_character(strokes);
            let dividers = DividerSet::default();
            return Ok(Segmentation {
                characters,
                strokes,
                lassos,
                divider_svg: divider_svg(width, height, &dividers),
                dividers,
                lasso_svg,
            });
        }

        let ctx = SegmentContext::new(strokes, &self.config, dvec2(width, height), &protected);
        debug!(char_width = ctx.char_size.x, char_height = ctx.char_size.y, "character size");

        let cuts = columns::find_column_cuts(&ctx);
        let layout = balance::balance(&ctx, rows::layout_rows(&ctx, cuts));
        let cells = grid::build_cells(&ctx, &layout);
        let dividers = divider_lines(&ctx, &layout);

        let (characters, strokes) = assemble(strokes, cells);
        debug!(
            characters = characters.len(),
            columns = layout.columns.len(),
            unplaced = strokes.iter().filter(|s| !s.is_placed()).count(),
            "segmentation done"
        );

        Ok(Segmentation {
            characters,
            strokes,
            lassos,
            divider_svg: divider_svg(width, height, &dividers),
            dividers,
            lasso_svg,
        })
    }
}

/// Column dividers overhang the ink by [`DIVIDER_PADDING`]; row dividers span
/// their column.
fn divider_lines(ctx: &SegmentContext<'_>, layout: &ColumnLayout) -> DividerSet {
    let (top, bottom) = (ctx.extent.min_y - DIVIDER_PADDING, ctx.extent.max_y + DIVIDER_PADDING);
    let columns = layout
        .cuts
        .iter()
        .map(|c| DividerLine::new(Axis::X, c.at, top, bottom, c.mandatory))
        .collect();
    let rows = layout
        .columns
        .iter()
        .map(|column| {
            let (left, right) = column.span;
            column
                .rows
                .iter()
                .map(|r| DividerLine::new(Axis::Y, r.at, left, right, r.mandatory))
                .collect()
        })
        .collect();
    DividerSet { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn segmenter_is_shareable() {
        assert_send_sync::<Segmenter>();
    }

    #[test]
    fn rejects_bad_config() {
        let config = SegmenterConfig { max_size_ratio: f64::NAN, ..SegmenterConfig::default() };
        assert!(matches!(
            Segmenter::new(config),
            Err(ConfigError::NotFinite { field: "maxSizeRatio", .. })
        ));
    }

    #[test]
    fn rejects_bad_input() {
        let segmenter = Segmenter::default();

        let input = SegmentInput::new(Vec::new(), 0.0, 100.0);
        assert_eq!(
            segmenter.segment(&input),
            Err(InputError::InvalidCanvas { dimension: "width", value: 0.0 })
        );

        let input = SegmentInput::new(Vec::new(), 100.0, 100.0).with_max_characters(0);
        assert_eq!(segmenter.segment(&input), Err(InputError::ZeroMaxCharacters));

        let input = SegmentInput::new(
            vec![Stroke::default(), Stroke::from_xy(&[(0.0, 0.0), (f64::INFINITY, 1.0)])],
            100.0,
            100.0,
        );
        assert_eq!(
            segmenter.segment(&input),
            Err(InputError::NonFinitePoint { stroke: 1, point: 1 })
        );

        let input = SegmentInput::new(Vec::new(), 100.0, 100.0)
            .with_lassos(vec![LassoPolygon::from_xy(&[(0.0, f64::NAN)])]);
        assert_eq!(
            segmenter.segment(&input),
            Err(InputError::NonFiniteVertex { lasso: 0, vertex: 0 })
        );
    }

    #[test]
    fn only_empty_strokes_are_all_unplaced() {
        let input = SegmentInput::new(vec![Stroke::default(), Stroke::default()], 100.0, 100.0);
        let out = Segmenter::default().segment(&input).unwrap();
        assert!(out.characters.is_empty());
        assert_eq!(out.strokes.len(), 2);
        assert!(out.strokes.iter().all(|s| s.character_index.is_none()));
        assert!(out.dividers.is_empty());
        assert!(!out.divider_svg.is_empty());
    }
}
