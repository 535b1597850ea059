//! Per-stroke boxes and the character size estimate.

use glam::DVec2;

use crate::config::SegmenterConfig;
use crate::types::{Axis, Bounds, Stroke};

use super::defaults::{FALLBACK_CHAR_SIZE_RATIO, MIN_STROKE_EXTENT};

/// Bounding box of one input stroke.
///
/// `center` is the box midpoint, not the centroid of the samples. Empty
/// strokes get an all-zero box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeBounds {
    pub index: usize,
    pub bounds: Bounds,
    pub center: DVec2,
}

impl StrokeBounds {
    pub fn of(index: usize, stroke: &Stroke) -> Self {
        let bounds = Bounds::of_points(stroke.points.iter().map(|p| p.pos()));
        StrokeBounds {
            index,
            bounds,
            center: bounds.center(),
        }
    }

    #[inline]
    pub fn center_on(&self, axis: Axis) -> f64 {
        axis.of(self.center)
    }
}

/// One pass over every stroke.
pub fn stroke_bounds(strokes: &[Stroke]) -> Vec<StrokeBounds> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, s)| StrokeBounds::of(i, s))
        .collect()
}

/// Expected character size on `axis`, used as the unit for "is this gap a break".
///
/// Median of the stroke extents above [`MIN_STROKE_EXTENT`], scaled by the
/// configured multiplier and clamped to a fraction of `canvas_dim`.
pub fn char_size_estimate<'a, I>(
    strokes: I,
    axis: Axis,
    canvas_dim: f64,
    config: &SegmenterConfig,
) -> f64
where
    I: IntoIterator<Item = &'a StrokeBounds>,
{
    let mut extents: Vec<f64> = strokes
        .into_iter()
        .map(|sb| sb.bounds.size(axis))
        .filter(|&e| e > MIN_STROKE_EXTENT)
        .collect();

    let Some(median) = median(&mut extents) else {
        return canvas_dim * FALLBACK_CHAR_SIZE_RATIO;
    };

    let lo = canvas_dim * config.min_char_size_ratio;
    let hi = canvas_dim * config.max_char_size_ratio;
    (median * config.char_size_multiplier).clamp(lo, hi)
}

/// Median of `values`, averaging the middle pair for even counts. Sorts in place.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
