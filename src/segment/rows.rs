//! Pass 2: row dividers inside each column.

use crate::log::{debug, trace};
use crate::types::Axis;

use super::columns::{assign_columns, japanese_column};
use super::context::SegmentContext;
use super::dividers::{Cut, find_gap_cuts, insert_group_cuts};
use super::uniformity::enforce_uniformity;

/// One column with its rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Reading-order position, 0 is rightmost.
    pub index: usize,
    /// Ink strokes whose center falls in this column, input order.
    pub strokes: Vec<usize>,
    /// Physical X range the column's row dividers span.
    pub span: (f64, f64),
    pub rows: Vec<Cut>,
}

impl Column {
    /// Row count as the balancer sees it; an empty column has none.
    pub fn row_count(&self) -> usize {
        if self.strokes.is_empty() { 0 } else { self.rows.len() + 1 }
    }
}

/// Column dividers plus every column's rows, in reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    pub cuts: Vec<Cut>,
    pub columns: Vec<Column>,
}

impl ColumnLayout {
    pub fn max_rows(&self) -> usize {
        self.columns.iter().map(Column::row_count).max().unwrap_or(0)
    }
}

/// Assign strokes to columns and run the row pass in each.
pub fn layout_rows(ctx: &SegmentContext<'_>, cuts: Vec<Cut>) -> ColumnLayout {
    let total = cuts.len() + 1;
    let columns = assign_columns(ctx, &cuts)
        .into_iter()
        .enumerate()
        .map(|(index, strokes)| {
            let physical = japanese_column(index, total);
            row_pass(ctx, &cuts, index, physical, strokes)
        })
        .collect();

    ColumnLayout { cuts, columns }
}

fn row_pass(
    ctx: &SegmentContext<'_>,
    cuts: &[Cut],
    index: usize,
    physical: usize,
    strokes: Vec<usize>,
) -> Column {
    let ink = ctx.union_of(&strokes);

    let left = physical.checked_sub(1).map_or(ink.min_x, |p| cuts[p].at);
    let right = cuts.get(physical).map_or(ink.max_x, |c| c.at);

    if strokes.is_empty() {
        trace!(column = index, "empty column");
        return Column { index, strokes, span: (left, right), rows: Vec::new() };
    }

    let keepouts = ctx.keepouts_within(&strokes);
    let members = ctx.stroke_refs(&strokes);

    let gaps = find_gap_cuts(&members, Axis::Y, ctx.min_gap(Axis::Y), &keepouts);
    let forced = insert_group_cuts(&gaps, &keepouts, Axis::Y);
    let rows = enforce_uniformity(
        &forced,
        ink.min_y,
        ink.max_y,
        Axis::Y,
        &keepouts,
        ctx.config.max_size_ratio,
    );

    debug!(column = index, strokes = strokes.len(), rows = rows.len() + 1, "row dividers");
    Column { index, strokes, span: (left, right), rows }
}
