//! Error types with diagnostics using miette
//!
//! The pipeline itself never fails. These errors reject bad configuration
//! and malformed input at the boundary, before any segmentation runs.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while validating a [`SegmenterConfig`](crate::SegmenterConfig)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    #[diagnostic(code(tategaki::config::not_finite))]
    NotFinite { field: &'static str, value: f64 },

    #[error("`{field}` must be greater than zero, got {value}")]
    #[diagnostic(code(tategaki::config::not_positive))]
    NotPositive { field: &'static str, value: f64 },

    #[error("`lassoContainmentThreshold` must lie in (0, 1], got {value}")]
    #[diagnostic(
        code(tategaki::config::threshold_out_of_range),
        help("0.5 claims a stroke once half of its points fall inside the lasso")
    )]
    ThresholdOutOfRange { value: f64 },

    #[error("`minCharSizeRatio` ({min}) exceeds `maxCharSizeRatio` ({max})")]
    #[diagnostic(code(tategaki::config::inverted_char_size_clamp))]
    InvertedCharSizeClamp { min: f64, max: f64 },
}

// ============================================================================
// Input Errors
// ============================================================================

/// Errors raised while validating a [`SegmentInput`](crate::SegmentInput)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("canvas {dimension} must be a positive finite number, got {value}")]
    #[diagnostic(code(tategaki::input::invalid_canvas))]
    InvalidCanvas { dimension: &'static str, value: f64 },

    #[error("maxCharacters must be at least 1")]
    #[diagnostic(
        code(tategaki::input::zero_max_characters),
        help("pass 1 to force a single character, or any larger bound otherwise")
    )]
    ZeroMaxCharacters,

    #[error("stroke {stroke} point {point} has a non-finite coordinate")]
    #[diagnostic(code(tategaki::input::non_finite_point))]
    NonFinitePoint { stroke: usize, point: usize },

    #[error("lasso {lasso} vertex {vertex} has a non-finite coordinate")]
    #[diagnostic(code(tategaki::input::non_finite_vertex))]
    NonFiniteVertex { lasso: usize, vertex: usize },
}

// ============================================================================
// Crate Error
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
