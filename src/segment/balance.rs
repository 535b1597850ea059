//! Column/row balancing.
//!
//! Vertical text never has more columns than the deepest column has rows;
//! more columns than that means a character was split sideways.

use crate::log::debug;

use super::context::SegmentContext;
use super::defaults::MAX_BALANCE_ITERATIONS;
use super::dividers::Cut;
use super::rows::{ColumnLayout, layout_rows};

/// Index of the divider whose two neighbouring columns are the narrowest
/// pair, measured between the content edges `lo` and `hi`. Mandatory dividers
/// are candidates too; only uniformity merging spares them.
pub fn narrowest_pair(cuts: &[Cut], lo: f64, hi: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for k in 0..cuts.len() {
        let prev = if k == 0 { lo } else { cuts[k - 1].at };
        let next = cuts.get(k + 1).map_or(hi, |c| c.at);
        let width = next - prev;
        if best.is_none_or(|(_, w)| width < w) {
            best = Some((k, width));
        }
    }
    best.map(|(k, _)| k)
}

/// Merge the narrowest column pairs until the column count no longer exceeds
/// the deepest column's row count, redoing the row pass after every merge.
///
/// Capped at [`MAX_BALANCE_ITERATIONS`] merges.
pub fn balance(ctx: &SegmentContext<'_>, layout: ColumnLayout) -> ColumnLayout {
    let mut layout = layout;

    for _iteration in 0..MAX_BALANCE_ITERATIONS {
        let columns = layout.cuts.len() + 1;
        let max_rows = layout.max_rows();
        if columns <= max_rows {
            break;
        }

        let Some(k) = narrowest_pair(&layout.cuts, ctx.extent.min_x, ctx.extent.max_x) else {
            debug!(columns, max_rows, "no column dividers left");
            break;
        };

        debug!(
            iteration = _iteration,
            columns,
            max_rows,
            at = layout.cuts[k].at,
            mandatory = layout.cuts[k].mandatory,
            "merging columns"
        );
        let mut cuts = layout.cuts.clone();
        cuts.remove(k);
        layout = layout_rows(ctx, cuts);
    }

    layout
}
