//! Ink and geometry primitives shared by every pipeline stage.
//!
//! Coordinates are canvas units with Y growing downwards, as delivered by the
//! host's pointer events.

use glam::{DVec2, dvec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sample of a stroke. `t` is carried through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub t: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Point { x, y, t }
    }

    #[inline]
    pub fn pos(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

/// An ordered run of samples from pen-down to pen-up. May be empty.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Stroke { points }
    }

    /// Build a stroke from `(x, y)` pairs, numbering `t` by sample index.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Stroke {
            points: xy
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| Point::new(x, y, i as f64))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// A lasso polygon vertex.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }
}

impl From<DVec2> for Vertex {
    fn from(v: DVec2) -> Self {
        Vertex { x: v.x, y: v.y }
    }
}

impl From<Vertex> for DVec2 {
    fn from(v: Vertex) -> Self {
        dvec2(v.x, v.y)
    }
}

/// A user-drawn grouping ring. Only meaningful with at least three vertices.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LassoPolygon {
    pub points: Vec<Vertex>,
}

impl LassoPolygon {
    pub fn new(points: Vec<Vertex>) -> Self {
        LassoPolygon { points }
    }

    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        LassoPolygon {
            points: xy.iter().map(|&(x, y)| Vertex::new(x, y)).collect(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

/// The two divider orientations.
///
/// `Axis::X` measures along the horizontal axis, so its dividers are vertical
/// column boundaries; `Axis::Y` dividers are horizontal row boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    #[inline]
    pub fn of(self, v: DVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::ZERO
    }
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    };

    /// Create an empty box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        }
    }

    /// Box around `points`, or `Bounds::ZERO` when there are none.
    pub fn of_points<I: IntoIterator<Item = DVec2>>(points: I) -> Bounds {
        let mut b = Bounds::new();
        for p in points {
            b.expand_point(p);
        }
        b.or_zero()
    }

    /// Check if the box is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn or_zero(self) -> Bounds {
        if self.is_empty() { Bounds::ZERO } else { self }
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn expand_bounds(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> DVec2 {
        dvec2((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
        }
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    /// Extent along `axis`
    pub fn size(&self, axis: Axis) -> f64 {
        self.max(axis) - self.min(axis)
    }

    /// True when `v` lies strictly between the box edges on `axis`.
    pub fn strictly_contains(&self, axis: Axis, v: f64) -> bool {
        v > self.min(axis) && v < self.max(axis)
    }
}

/// An axis-aligned divider. Column dividers are vertical lines `x = intercept`
/// spanning `start..end` in Y; row dividers are horizontal lines `y = intercept`
/// spanning `start..end` in X. `slope` is always zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DividerLine {
    pub axis: Axis,
    pub slope: f64,
    pub intercept: f64,
    pub start: f64,
    pub end: f64,
    /// Separates two protected groups; uniformity merging never removes it.
    pub mandatory: bool,
}

impl DividerLine {
    pub fn new(axis: Axis, intercept: f64, start: f64, end: f64, mandatory: bool) -> Self {
        DividerLine {
            axis,
            slope: 0.0,
            intercept,
            start,
            end,
            mandatory,
        }
    }

    /// Canvas endpoints `(x1, y1, x2, y2)` of the line.
    pub fn endpoints(&self) -> (f64, f64, f64, f64) {
        match self.axis {
            Axis::X => (self.intercept, self.start, self.intercept, self.end),
            Axis::Y => (self.start, self.intercept, self.end, self.intercept),
        }
    }
}
