//! Lasso containment and ownership resolution.

use glam::DVec2;

use crate::log::{debug, trace};
use crate::types::{LassoPolygon, Stroke};

/// Strokes claimed by one lasso after overlap resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedGroup {
    /// Position of the owning lasso in the input.
    pub lasso_index: usize,
    /// Owned stroke indices, ascending.
    pub strokes: Vec<usize>,
}

/// Ray-casting point-in-polygon test with a ray along +X.
///
/// Odd crossing count means inside. Rings with fewer than three vertices
/// contain nothing.
pub fn point_in_polygon(p: DVec2, ring: &[DVec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Fraction of the stroke's points inside `ring`; zero for an empty stroke.
pub fn containment_fraction(stroke: &Stroke, ring: &[DVec2]) -> f64 {
    if stroke.is_empty() {
        return 0.0;
    }
    let inside = stroke
        .points
        .iter()
        .filter(|p| point_in_polygon(p.pos(), ring))
        .count();
    inside as f64 / stroke.len() as f64
}

/// Strokes a single lasso claims on its own, before any overlap resolution.
pub fn claimed_strokes(strokes: &[Stroke], lasso: &LassoPolygon, threshold: f64) -> Vec<usize> {
    if lasso.is_degenerate() {
        return Vec::new();
    }
    let ring: Vec<DVec2> = lasso.points.iter().map(|&v| v.into()).collect();
    strokes
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty() && containment_fraction(s, &ring) >= threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Partition the claimed strokes among lassos, processing them in input order.
///
/// A later lasso takes a stroke away from an earlier owner. An owner left with
/// nothing is deleted, and a lasso that never claims anything never becomes a
/// group, so every stroke ends up in at most one group.
pub fn resolve_groups(
    strokes: &[Stroke],
    lassos: &[LassoPolygon],
    threshold: f64,
) -> Vec<ProtectedGroup> {
    let mut owner: Vec<Option<usize>> = vec![None; strokes.len()];
    let mut groups: Vec<ProtectedGroup> = Vec::new();

    for (lasso_index, lasso) in lassos.iter().enumerate() {
        let claimed = claimed_strokes(strokes, lasso, threshold);
        if claimed.is_empty() {
            trace!(lasso_index, "lasso claims no strokes");
            continue;
        }

        for &s in &claimed {
            if let Some(previous) = owner[s] {
                trace!(stroke = s, from = previous, to = lasso_index, "stroke stolen");
                if let Some(group) = groups.iter_mut().find(|g| g.lasso_index == previous) {
                    group.strokes.retain(|&x| x != s);
                }
            }
            owner[s] = Some(lasso_index);
        }
        groups.retain(|g| !g.strokes.is_empty());

        groups.push(ProtectedGroup {
            lasso_index,
            strokes: claimed,
        });
    }

    debug!(lassos = lassos.len(), groups = groups.len(), "resolved protected groups");
    groups
}
