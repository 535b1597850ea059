//! Gap-based divider search and forced dividers between protected groups.
//!
//! Both work on a single axis, so the column pass (X) and the per-column row
//! pass (Y) share them.

use crate::log::trace;
use crate::types::{Axis, Bounds};

use super::bounds::StrokeBounds;
use super::defaults::{NEAR_DIVIDER_DISTANCE, SIDE_BY_SIDE_OVERLAP, STACKED_OVERLAP};

/// A divider position on one axis, before it is given a span on the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cut {
    pub at: f64,
    /// Separates protected groups; never merged away.
    pub mandatory: bool,
}

impl Cut {
    pub fn natural(at: f64) -> Self {
        Cut { at, mandatory: false }
    }

    pub fn mandatory(at: f64) -> Self {
        Cut { at, mandatory: true }
    }
}

/// Sort ascending by position.
pub(crate) fn sorted(mut cuts: Vec<Cut>) -> Vec<Cut> {
    cuts.sort_by(|a, b| a.at.total_cmp(&b.at));
    cuts
}

fn vetoed(keepouts: &[Bounds], axis: Axis, at: f64) -> bool {
    keepouts.iter().any(|k| k.strictly_contains(axis, at))
}

/// Natural dividers: midpoints of gaps of at least `min_gap` between strokes
/// that are consecutive in center order on `axis`.
///
/// Candidates falling strictly inside a protected box are rejected.
pub fn find_gap_cuts(
    strokes: &[&StrokeBounds],
    axis: Axis,
    min_gap: f64,
    keepouts: &[Bounds],
) -> Vec<Cut> {
    let mut ordered: Vec<&StrokeBounds> = strokes.to_vec();
    ordered.sort_by(|a, b| a.center_on(axis).total_cmp(&b.center_on(axis)));

    let mut cuts = Vec::new();
    for pair in ordered.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let gap = next.bounds.min(axis) - current.bounds.max(axis);
        if gap < min_gap {
            continue;
        }
        let at = (current.bounds.max(axis) + next.bounds.min(axis)) / 2.0;
        if vetoed(keepouts, axis, at) {
            trace!(?axis, at, "gap divider vetoed by protected bound");
            continue;
        }
        cuts.push(Cut::natural(at));
    }

    let mut cuts = sorted(cuts);
    cuts.dedup_by(|a, b| a.at == b.at);
    cuts
}

/// Overlap of `[a0, a1]` and `[b0, b1]`, zero when disjoint.
fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Force a divider between protected boxes that sit side by side on `axis`
/// without a natural gap divider between them.
///
/// Pairs are taken in order of their minimum on `axis`. A pair needs a divider
/// when it overlaps on the perpendicular axis by more than
/// [`SIDE_BY_SIDE_OVERLAP`] of the smaller box; a pair that doesn't, and
/// overlaps on `axis` by more than [`STACKED_OVERLAP`], is stacked and left to
/// the orthogonal pass. The divider goes at the middle of the gap, unless an
/// existing divider is within [`NEAR_DIVIDER_DISTANCE`], which is then marked
/// mandatory instead.
pub fn insert_group_cuts(cuts: &[Cut], keepouts: &[Bounds], axis: Axis) -> Vec<Cut> {
    let mut out = cuts.to_vec();
    if keepouts.len() < 2 {
        return out;
    }

    let perp = axis.perpendicular();
    let mut boxes = keepouts.to_vec();
    boxes.sort_by(|a, b| a.min(axis).total_cmp(&b.min(axis)));

    for pair in boxes.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);

        let primary = overlap(a.min(axis), a.max(axis), b.min(axis), b.max(axis));
        let smaller_primary = a.size(axis).min(b.size(axis));
        let across = overlap(a.min(perp), a.max(perp), b.min(perp), b.max(perp));
        let smaller_across = a.size(perp).min(b.size(perp));

        let side_by_side = across > SIDE_BY_SIDE_OVERLAP * smaller_across;
        if !side_by_side && primary > STACKED_OVERLAP * smaller_primary {
            continue;
        }

        let (lo, hi) = (a.max(axis), b.min(axis));
        if hi <= lo {
            // Interleaved on this axis; no straight divider separates them.
            continue;
        }
        let mid = (lo + hi) / 2.0;
        if vetoed(keepouts, axis, mid) {
            continue;
        }

        let nearest = out
            .iter()
            .enumerate()
            .filter(|(_, c)| (c.at - mid).abs() <= NEAR_DIVIDER_DISTANCE)
            .min_by(|(_, c), (_, d)| (c.at - mid).abs().total_cmp(&(d.at - mid).abs()))
            .map(|(i, _)| i);
        match nearest {
            Some(i) => out[i].mandatory = true,
            None => {
                trace!(?axis, at = mid, "forced divider between protected groups");
                out.push(Cut::mandatory(mid));
            }
        }
    }

    sorted(out)
}
