//! Per-call working set shared read-only by the divider stages.

use glam::{DVec2, dvec2};

use crate::config::SegmenterConfig;
use crate::types::{Axis, Bounds, Stroke};

use super::bounds::{StrokeBounds, char_size_estimate, stroke_bounds};
use super::hull::ProtectedBound;

/// Everything the divider stages derive once from the input.
///
/// Stages refer to strokes by their index into `strokes`; nothing here is
/// mutated after construction.
pub struct SegmentContext<'a> {
    pub strokes: &'a [Stroke],
    pub config: &'a SegmenterConfig,
    /// One entry per input stroke, empty strokes included.
    pub bounds: Vec<StrokeBounds>,
    /// Indices of non-empty strokes; the only ones that take part in geometry.
    pub ink: Vec<usize>,
    /// Box around all ink.
    pub extent: Bounds,
    /// Estimated character width (x) and height (y).
    pub char_size: DVec2,
    pub protected: &'a [ProtectedBound],
}

impl<'a> SegmentContext<'a> {
    pub fn new(
        strokes: &'a [Stroke],
        config: &'a SegmenterConfig,
        canvas: DVec2,
        protected: &'a [ProtectedBound],
    ) -> Self {
        let bounds = stroke_bounds(strokes);
        let ink: Vec<usize> = (0..strokes.len()).filter(|&i| !strokes[i].is_empty()).collect();

        let mut extent = Bounds::new();
        for &i in &ink {
            extent.expand_bounds(&bounds[i].bounds);
        }

        let char_size = dvec2(
            char_size_estimate(ink.iter().map(|&i| &bounds[i]), Axis::X, canvas.x, config),
            char_size_estimate(ink.iter().map(|&i| &bounds[i]), Axis::Y, canvas.y, config),
        );

        SegmentContext {
            strokes,
            config,
            bounds,
            ink,
            extent: extent.or_zero(),
            char_size,
            protected,
        }
    }

    /// Smallest gap on `axis` that opens a new column (X) or row (Y).
    pub fn min_gap(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.char_size.x * self.config.min_column_gap_ratio,
            Axis::Y => self.char_size.y * self.config.min_row_gap_ratio,
        }
    }

    pub fn stroke_refs(&self, indices: &[usize]) -> Vec<&StrokeBounds> {
        indices.iter().map(|&i| &self.bounds[i]).collect()
    }

    /// Union box of the given strokes, zero when there are none.
    pub fn union_of(&self, indices: &[usize]) -> Bounds {
        let mut b = Bounds::new();
        for &i in indices {
            b.expand_bounds(&self.bounds[i].bounds);
        }
        b.or_zero()
    }

    /// Hull boxes of the non-degenerate protected bounds.
    pub fn keepouts(&self) -> Vec<Bounds> {
        self.protected
            .iter()
            .filter(|p| !p.is_degenerate())
            .map(|p| p.bounds)
            .collect()
    }

    /// Protected boxes restricted to `members`: for every non-degenerate bound
    /// owning at least one of them, the box of those owned strokes.
    pub fn keepouts_within(&self, members: &[usize]) -> Vec<Bounds> {
        self.protected
            .iter()
            .filter(|p| !p.is_degenerate())
            .filter_map(|p| {
                let owned: Vec<usize> = p
                    .strokes
                    .iter()
                    .copied()
                    .filter(|s| members.contains(s))
                    .collect();
                (!owned.is_empty()).then(|| self.union_of(&owned))
            })
            .collect()
    }
}
