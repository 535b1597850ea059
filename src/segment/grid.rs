//! Final dividers to discrete stroke cells.

use crate::types::Bounds;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::context::SegmentContext;
use super::defaults::CELL_PADDING;
use super::rows::ColumnLayout;

/// One candidate character region. Only non-empty cells are ever built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridCell {
    /// Reading-order column, 0 is rightmost.
    pub column: usize,
    /// Row within the column, 0 is topmost.
    pub row: usize,
    pub stroke_indices: Vec<usize>,
    /// Tight box over the member strokes' points.
    pub bounds: Bounds,
}

/// Cut every column into row bands and keep the bands that hold ink.
///
/// Bands run from the column's topmost ink minus [`CELL_PADDING`], through
/// each row divider, to its bottommost ink plus the same padding. A stroke
/// falls in the band containing its center-Y.
pub fn build_cells(ctx: &SegmentContext<'_>, layout: &ColumnLayout) -> Vec<GridCell> {
    let mut cells = Vec::new();

    for column in &layout.columns {
        if column.strokes.is_empty() {
            continue;
        }
        let ink = ctx.union_of(&column.strokes);
        let (top, bottom) = (ink.min_y - CELL_PADDING, ink.max_y + CELL_PADDING);

        let mut bands: Vec<Vec<usize>> = vec![Vec::new(); column.rows.len() + 1];
        for &s in &column.strokes {
            let cy = ctx.bounds[s].center.y;
            if cy < top || cy > bottom {
                continue;
            }
            let row = column.rows.iter().filter(|c| c.at < cy).count();
            bands[row].push(s);
        }

        for (row, members) in bands.into_iter().enumerate() {
            if members.is_empty() {
                continue;
            }
            let bounds = ctx.union_of(&members);
            cells.push(GridCell {
                column: column.index,
                row,
                stroke_indices: members,
                bounds,
            });
        }
    }

    cells
}
