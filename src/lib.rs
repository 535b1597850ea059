//! Character segmentation for vertical Japanese handwriting.
//!
//! Strokes are split into columns read right to left, each column into rows
//! read top to bottom, and every non-empty cell becomes one character slot.
//! Lassos drawn by the user keep their strokes together.
//!
//! ```
//! use tategaki::{SegmentInput, Segmenter, Stroke};
//!
//! let strokes = vec![
//!     Stroke::from_xy(&[(100.0, 50.0), (100.0, 110.0)]),
//!     Stroke::from_xy(&[(100.0, 200.0), (100.0, 260.0)]),
//! ];
//! let input = SegmentInput::new(strokes, 400.0, 400.0);
//! let result = Segmenter::default().segment(&input)?;
//! assert_eq!(result.characters.len(), 2);
//! # Ok::<(), tategaki::InputError>(())
//! ```

pub mod config;
pub mod errors;
pub mod log;
pub mod render;
pub mod segment;
pub mod types;

pub use config::SegmenterConfig;
pub use errors::{ConfigError, Error, InputError, Result};
pub use segment::{
    AnnotatedLasso, AnnotatedStroke, CharacterSlot, DividerSet, SegmentInput, Segmentation,
    Segmenter,
};
pub use types::{Axis, Bounds, DividerLine, LassoPolygon, Point, Stroke, Vertex};

/// Segment `input` with the default configuration.
pub fn segment(input: &SegmentInput) -> Result<Segmentation<'_>> {
    Ok(Segmenter::default().segment(input)?)
}

/// Segment `input` with `config`, validating both.
pub fn segment_with(config: SegmenterConfig, input: &SegmentInput) -> Result<Segmentation<'_>> {
    Ok(Segmenter::new(config)?.segment(input)?)
}
