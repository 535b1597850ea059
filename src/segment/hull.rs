//! Convex hulls of protected groups.
//!
//! The hull shrink-wraps a group's ink, so dividers are vetoed against where
//! the user actually wrote rather than the rough lasso they drew around it.

use glam::DVec2;

use crate::types::{Axis, Bounds, Stroke};

use super::lasso::ProtectedGroup;

/// A protected group together with the hull of its ink.
#[derive(Clone, Debug, PartialEq)]
pub struct ProtectedBound {
    pub lasso_index: usize,
    pub strokes: Vec<usize>,
    /// Counter-clockwise hull vertices.
    pub hull: Vec<DVec2>,
    /// Axis-aligned box of `hull`.
    pub bounds: Bounds,
}

impl ProtectedBound {
    pub fn build(group: &ProtectedGroup, strokes: &[Stroke]) -> Self {
        let points: Vec<DVec2> = group
            .strokes
            .iter()
            .flat_map(|&i| strokes[i].points.iter().map(|p| p.pos()))
            .collect();
        let hull = convex_hull(&points);
        let bounds = Bounds::of_points(hull.iter().copied());
        ProtectedBound {
            lasso_index: group.lasso_index,
            strokes: group.strokes.clone(),
            hull,
            bounds,
        }
    }

    /// Fewer than three hull vertices: tracked for membership, ignored by vetoes.
    pub fn is_degenerate(&self) -> bool {
        self.hull.len() < 3
    }

    /// Whether a divider at `position` on `axis` would cut through this bound.
    pub fn vetoes(&self, axis: Axis, position: f64) -> bool {
        !self.is_degenerate() && self.bounds.strictly_contains(axis, position)
    }
}

/// Hull every group, keeping group order.
pub fn protected_bounds(groups: &[ProtectedGroup], strokes: &[Stroke]) -> Vec<ProtectedBound> {
    groups
        .iter()
        .map(|g| ProtectedBound::build(g, strokes))
        .collect()
}

/// Z component of `(a - o) × (b - o)`; positive for a left turn.
#[inline]
fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
    (a - o).perp_dot(b - o)
}

/// Andrew's monotone chain.
///
/// Returns the hull counter-clockwise (in a Y-up frame) without repeating the
/// first vertex. Collinear points are dropped. Inputs with at most two distinct
/// points come back as those points in input order.
pub fn convex_hull(points: &[DVec2]) -> Vec<DVec2> {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(3);
    for &p in points {
        if !distinct.contains(&p) {
            distinct.push(p);
            if distinct.len() == 3 {
                break;
            }
        }
    }
    if distinct.len() < 3 {
        return distinct;
    }

    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();

    let mut lower: Vec<DVec2> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<DVec2> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
