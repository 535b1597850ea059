//! Pass 1: column dividers and the Japanese column assignment.

use crate::log::debug;
use crate::types::Axis;

use super::context::SegmentContext;
use super::dividers::{Cut, find_gap_cuts, insert_group_cuts};
use super::uniformity::enforce_uniformity;

/// Column dividers for the whole canvas: X gaps, forced group separators,
/// then width uniformity.
pub fn find_column_cuts(ctx: &SegmentContext<'_>) -> Vec<Cut> {
    let keepouts = ctx.keepouts();
    let ink = ctx.stroke_refs(&ctx.ink);

    let gaps = find_gap_cuts(&ink, Axis::X, ctx.min_gap(Axis::X), &keepouts);
    let forced = insert_group_cuts(&gaps, &keepouts, Axis::X);
    let cuts = enforce_uniformity(
        &forced,
        ctx.extent.min_x,
        ctx.extent.max_x,
        Axis::X,
        &keepouts,
        ctx.config.max_size_ratio,
    );

    debug!(
        gaps = gaps.len(),
        forced = forced.len() - gaps.len(),
        columns = cuts.len() + 1,
        "column dividers"
    );
    cuts
}

/// Number of dividers strictly left of `x`.
pub fn physical_column(cuts: &[Cut], x: f64) -> usize {
    cuts.iter().filter(|c| c.at < x).count()
}

/// Convert a left-to-right column to reading order, rightmost first.
pub fn japanese_column(physical: usize, total: usize) -> usize {
    total - 1 - physical
}

/// Ink strokes grouped by Japanese column. Every column the dividers define
/// is present, even when no stroke lands in it.
pub fn assign_columns(ctx: &SegmentContext<'_>, cuts: &[Cut]) -> Vec<Vec<usize>> {
    let total = cuts.len() + 1;
    let mut columns = vec![Vec::new(); total];
    for &i in &ctx.ink {
        let physical = physical_column(cuts, ctx.bounds[i].center.x);
        columns[japanese_column(physical, total)].push(i);
    }
    columns
}
