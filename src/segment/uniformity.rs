//! Iterative split/merge correction of cell sizes along one axis.

use crate::log::{debug, trace};
use crate::types::{Axis, Bounds};

use super::defaults::MAX_UNIFORMITY_ITERATIONS;
use super::dividers::{Cut, sorted};

/// Sizes of the cells between `lo`, each cut, and `hi`.
pub fn cell_sizes(cuts: &[Cut], lo: f64, hi: f64) -> Vec<f64> {
    let edges: Vec<f64> = std::iter::once(lo)
        .chain(cuts.iter().map(|c| c.at))
        .chain(std::iter::once(hi))
        .collect();
    edges.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Largest over smallest cell size.
///
/// A single cell is perfectly uniform. A non-positive smallest cell gives an
/// infinite ratio, so some repair is always attempted.
pub fn size_ratio(sizes: &[f64]) -> f64 {
    if sizes.len() < 2 {
        return 1.0;
    }
    let max = sizes.iter().copied().fold(f64::MIN, f64::max);
    let min = sizes.iter().copied().fold(f64::MAX, f64::min);
    if min <= 0.0 {
        return f64::INFINITY;
    }
    max / min
}

/// Index of the first cell whose size is extreme under `better`.
fn extreme_cell(sizes: &[f64], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0;
    for (i, &s) in sizes.iter().enumerate().skip(1) {
        if better(s, sizes[best]) {
            best = i;
        }
    }
    best
}

/// Bring the largest/smallest cell ratio down to `max_ratio`.
///
/// Each round evaluates bisecting the largest cell (skipped when the midpoint
/// would cut a protected box) and deleting either non-mandatory divider next to
/// the smallest cell, then keeps whichever gives the lowest ratio. Stops when
/// the ratio is acceptable, when no candidate improves it, or after
/// [`MAX_UNIFORMITY_ITERATIONS`] rounds. Returns a new snapshot.
pub fn enforce_uniformity(
    cuts: &[Cut],
    lo: f64,
    hi: f64,
    axis: Axis,
    keepouts: &[Bounds],
    max_ratio: f64,
) -> Vec<Cut> {
    let mut current = sorted(cuts.to_vec());

    // Only read by the logging macros, which vanish without `tracing`.
    for _iteration in 0..MAX_UNIFORMITY_ITERATIONS {
        let sizes = cell_sizes(&current, lo, hi);
        let ratio = size_ratio(&sizes);
        if ratio <= max_ratio {
            debug!(?axis, iteration = _iteration, ratio, "cell sizes uniform");
            return current;
        }

        let mut candidates: Vec<Vec<Cut>> = Vec::with_capacity(3);

        let largest = extreme_cell(&sizes, |a, b| a > b);
        let start = if largest == 0 { lo } else { current[largest - 1].at };
        let end = if largest < current.len() { current[largest].at } else { hi };
        let mid = (start + end) / 2.0;
        if keepouts.iter().any(|k| k.strictly_contains(axis, mid)) {
            trace!(?axis, at = mid, "split vetoed by protected bound");
        } else {
            let mut split = current.clone();
            split.push(Cut::natural(mid));
            candidates.push(sorted(split));
        }

        let smallest = extreme_cell(&sizes, |a, b| a < b);
        let neighbours = [smallest.checked_sub(1), Some(smallest).filter(|&k| k < current.len())];
        for k in neighbours.into_iter().flatten() {
            if current[k].mandatory {
                continue;
            }
            let mut merged = current.clone();
            merged.remove(k);
            candidates.push(merged);
        }

        let best = candidates
            .into_iter()
            .map(|c| (size_ratio(&cell_sizes(&c, lo, hi)), c))
            .fold(None::<(f64, Vec<Cut>)>, |acc, (r, c)| match acc {
                Some((best_r, _)) if best_r <= r => acc,
                _ => Some((r, c)),
            });

        match best {
            Some((r, next)) if r < ratio => {
                trace!(?axis, iteration = _iteration, from = ratio, to = r, "uniformity repair applied");
                current = next;
            }
            _ => {
                debug!(?axis, iteration = _iteration, ratio, "no repair improves uniformity");
                return current;
            }
        }
    }

    debug!(?axis, "uniformity iteration cap reached");
    current
}
