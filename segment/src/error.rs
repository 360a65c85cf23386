//! Error types for the segmentation crate.

use thiserror::Error;

/// Errors that can occur while segmenting text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The raw text was empty once trimmed.
    ///
    /// Callers must not build a grid or report from this run and should keep
    /// whatever they displayed before.
    #[error("paste some text before splitting")]
    EmptyInput,

    /// A deserialized document does not have the nine-cell layout.
    #[error("malformed grid document: {reason}")]
    MalformedGrid {
        /// Which layout rule was broken.
        reason: &'static str,
    },

    /// Length thresholds violate `hard_min <= sweet_min < sweet_max <= hard_max`.
    #[error(
        "invalid thresholds: need hard_min <= sweet_min < sweet_max <= hard_max, \
         got hard_min={hard_min} sweet_min={sweet_min} sweet_max={sweet_max} hard_max={hard_max}"
    )]
    InvalidThresholds {
        /// Lower bound of the sweet spot.
        sweet_min: usize,
        /// Upper bound of the sweet spot.
        sweet_max: usize,
        /// Lower hard limit.
        hard_min: usize,
        /// Upper hard limit.
        hard_max: usize,
    },
}

/// Result type alias for segmentation operations.
pub type Result<T> = std::result::Result<T, SegmentError>;
