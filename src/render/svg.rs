//! SVG overlays in canvas coordinates.

use std::fmt::{self, Write};

use crate::segment::{AnnotatedLasso, DividerSet};
use crate::types::Axis;

const COLUMN_STROKE: &str = "rgb(220,38,38)";
const ROW_STROKE: &str = "rgb(37,99,235)";

/// Hue per lasso, cycled by lasso index.
pub const LASSO_HUES: [u16; 24] = [
    0, 15, 30, 45, 60, 75, 90, 105, 120, 135, 150, 165, 180, 195, 210, 225, 240, 255, 270, 285,
    300, 315, 330, 345,
];

pub fn lasso_hue(lasso_index: usize) -> u16 {
    LASSO_HUES[lasso_index % LASSO_HUES.len()]
}

fn header(svg: &mut String, width: f64, height: f64) -> fmt::Result {
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    )
}

fn write_dividers(svg: &mut String, width: f64, height: f64, dividers: &DividerSet) -> fmt::Result {
    header(svg, width, height)?;
    for line in dividers.iter() {
        let (class, color) = match line.axis {
            Axis::X => ("column-divider", COLUMN_STROKE),
            Axis::Y => ("row-divider", ROW_STROKE),
        };
        let dash = if line.mandatory { r#" stroke-dasharray="6,4""# } else { "" };
        let (x1, y1, x2, y2) = line.endpoints();
        writeln!(
            svg,
            r#"  <line class="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2"{}/>"#,
            class, x1, y1, x2, y2, color, dash
        )?;
    }
    write!(svg, "</svg>")
}

fn write_lassos(svg: &mut String, width: f64, height: f64, lassos: &[AnnotatedLasso<'_>]) -> fmt::Result {
    header(svg, width, height)?;
    for lasso in lassos {
        let hue = lasso_hue(lasso.lasso_index);
        let mut points = String::new();
        for (i, v) in lasso.hull.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            write!(points, "{:.2},{:.2}", v.x, v.y)?;
        }
        writeln!(
            svg,
            r#"  <polygon class="lasso-hull" points="{}" fill="hsl({},70%,50%)" fill-opacity="0.25" stroke="hsl({},70%,50%)" stroke-width="2"/>"#,
            points, hue, hue
        )?;
    }
    write!(svg, "</svg>")
}

/// Column dividers in red, row dividers in blue; mandatory ones dashed.
pub fn divider_svg(width: f64, height: f64, dividers: &DividerSet) -> String {
    let mut svg = String::new();
    match write_dividers(&mut svg, width, height, dividers) {
        Ok(()) => svg,
        Err(_) => String::new(),
    }
}

/// Translucent hull per annotated lasso. Empty string when there are none.
pub fn lasso_svg(width: f64, height: f64, lassos: &[AnnotatedLasso<'_>]) -> String {
    if lassos.is_empty() {
        return String::new();
    }
    let mut svg = String::new();
    match write_lassos(&mut svg, width, height, lassos) {
        Ok(()) => svg,
        Err(_) => String::new(),
    }
}
