//! Diagram rendering for segmentation results.

mod svg;

pub use svg::{LASSO_HUES, divider_svg, lasso_hue, lasso_svg};
