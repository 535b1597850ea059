//! Fixed algorithm constants (canvas units unless noted)

/// Stroke extents at or below this are dots and ticks, ignored when sizing characters.
pub const MIN_STROKE_EXTENT: f64 = 5.0;
/// Character size used when no stroke survives the extent filter, as a fraction of the canvas.
pub const FALLBACK_CHAR_SIZE_RATIO: f64 = 0.15;

/// Column dividers overhang the ink's Y extent by this much at both ends.
pub const DIVIDER_PADDING: f64 = 10.0;
/// Row bands are widened by this much beyond a column's outermost ink.
pub const CELL_PADDING: f64 = 5.0;

/// Two protected bounds are side-by-side when their perpendicular overlap exceeds
/// this fraction of the smaller perpendicular size.
pub const SIDE_BY_SIDE_OVERLAP: f64 = 0.3;
/// Otherwise they are stacked when their primary overlap exceeds this fraction.
pub const STACKED_OVERLAP: f64 = 0.5;
/// A forced divider is not added when an existing divider lies this close.
pub const NEAR_DIVIDER_DISTANCE: f64 = 10.0;

/// Upper bound on split/merge rounds in the uniformity enforcer. Guarantees
/// termination on pathological input; an unconverged grid is still returned.
pub const MAX_UNIFORMITY_ITERATIONS: usize = 10;
/// Upper bound on column merges in the column/row balancer.
pub const MAX_BALANCE_ITERATIONS: usize = 10;
