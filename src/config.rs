//! Segmenter configuration.

use crate::errors::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable ratios, resolved once per [`Segmenter`](crate::Segmenter).
///
/// Every field is optional on the wire; missing fields take the defaults below.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SegmenterConfig {
    /// Minimum horizontal gap, as a fraction of the character width, that opens a column.
    pub min_column_gap_ratio: f64,
    /// Minimum vertical gap, as a fraction of the character height, that opens a row.
    pub min_row_gap_ratio: f64,
    /// Median stroke extent is multiplied by this to estimate a character's size.
    pub char_size_multiplier: f64,
    /// Lower clamp of the character size, as a fraction of the canvas dimension.
    pub min_char_size_ratio: f64,
    /// Upper clamp of the character size, as a fraction of the canvas dimension.
    pub max_char_size_ratio: f64,
    /// Largest tolerated ratio between the biggest and smallest cell on one axis.
    pub max_size_ratio: f64,
    /// Fraction of a stroke's points that must be inside a lasso for it to be claimed.
    pub lasso_containment_threshold: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            min_column_gap_ratio: 0.25,
            min_row_gap_ratio: 0.25,
            char_size_multiplier: 2.0,
            min_char_size_ratio: 0.08,
            max_char_size_ratio: 0.40,
            max_size_ratio: 2.0,
            lasso_containment_threshold: 0.5,
        }
    }
}

impl SegmenterConfig {
    /// Reject NaN, infinite, and non-positive ratios, thresholds outside `(0, 1]`,
    /// and an inverted character-size clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("minColumnGapRatio", self.min_column_gap_ratio),
            ("minRowGapRatio", self.min_row_gap_ratio),
            ("charSizeMultiplier", self.char_size_multiplier),
            ("minCharSizeRatio", self.min_char_size_ratio),
            ("maxCharSizeRatio", self.max_char_size_ratio),
            ("maxSizeRatio", self.max_size_ratio),
            ("lassoContainmentThreshold", self.lasso_containment_threshold),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.lasso_containment_threshold > 1.0 {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.lasso_containment_threshold,
            });
        }

        if self.min_char_size_ratio > self.max_char_size_ratio {
            return Err(ConfigError::InvertedCharSizeClamp {
                min: self.min_char_size_ratio,
                max: self.max_char_size_ratio,
            });
        }

        Ok(())
    }
}
