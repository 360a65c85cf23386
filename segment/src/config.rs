//! Configuration for segmentation runs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentError};

/// Default document heading used in the Markdown export.
pub const DEFAULT_HEADING: &str = "Sweet-Length Nine Grid";

/// Default filler text for padding cells.
pub const DEFAULT_PLACEHOLDER: &str =
    "(reserved cell) Room for a key quote, a counterexample, a follow-up question or an action item.";

/// Default maximum number of graphemes in a cell's display title.
pub const DEFAULT_TITLE_WIDTH: usize = 22;

/// Inclusive length ranges used to judge chunk sizes.
///
/// Lengths are visible lengths, see [`visible_length`](crate::visible_length).
/// The ranges always satisfy `hard_min <= sweet_min < sweet_max <= hard_max`;
/// both [`Thresholds::new`] and deserialization enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    /// Lower bound of the sweet spot.
    pub(crate) sweet_min: usize,
    /// Upper bound of the sweet spot.
    pub(crate) sweet_max: usize,
    /// Chunks shorter than this are out of range.
    pub(crate) hard_min: usize,
    /// Chunks longer than this are out of range. Also the splitting ceiling.
    pub(crate) hard_max: usize,
}

#[derive(Deserialize, JsonSchema)]
struct RawThresholds {
    sweet_min: usize,
    sweet_max: usize,
    hard_min: usize,
    hard_max: usize,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = SegmentError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Self::new(raw.sweet_min, raw.sweet_max, raw.hard_min, raw.hard_max)
    }
}

impl Thresholds {
    /// Sweet spot 75-1200, hard limits 50-1500.
    pub const DEFAULT: Self = Self {
        sweet_min: 75,
        sweet_max: 1200,
        hard_min: 50,
        hard_max: 1500,
    };

    /// Creates validated thresholds.
    ///
    /// # Errors
    /// Returns [`SegmentError::InvalidThresholds`] unless
    /// `hard_min <= sweet_min < sweet_max <= hard_max`.
    pub const fn new(
        sweet_min: usize,
        sweet_max: usize,
        hard_min: usize,
        hard_max: usize,
    ) -> Result<Self> {
        if hard_min <= sweet_min && sweet_min < sweet_max && sweet_max <= hard_max {
            Ok(Self {
                sweet_min,
                sweet_max,
                hard_min,
                hard_max,
            })
        } else {
            Err(SegmentError::InvalidThresholds {
                sweet_min,
                sweet_max,
                hard_min,
                hard_max,
            })
        }
    }

    /// Lower bound of the sweet spot.
    #[must_use]
    pub const fn sweet_min(&self) -> usize {
        self.sweet_min
    }

    /// Upper bound of the sweet spot.
    #[must_use]
    pub const fn sweet_max(&self) -> usize {
        self.sweet_max
    }

    /// Lower hard limit.
    #[must_use]
    pub const fn hard_min(&self) -> usize {
        self.hard_min
    }

    /// Upper hard limit.
    #[must_use]
    pub const fn hard_max(&self) -> usize {
        self.hard_max
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for a segmentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SegmentConfig {
    /// Length thresholds for splitting and classification.
    pub thresholds: Thresholds,
    /// Maximum graphemes shown in a cell title before it gets an ellipsis.
    pub title_width: usize,
    /// Heading of the Markdown export.
    pub heading: String,
    /// Body of the cells added when the input yields fewer than eight chunks.
    pub placeholder: String,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::DEFAULT,
            title_width: DEFAULT_TITLE_WIDTH,
            heading: DEFAULT_HEADING.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl SegmentConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for custom configuration.
    #[must_use]
    pub fn builder() -> SegmentConfigBuilder {
        SegmentConfigBuilder::new()
    }
}

/// Builder for [`SegmentConfig`].
#[derive(Debug, Default)]
pub struct SegmentConfigBuilder {
    config: SegmentConfig,
}

impl SegmentConfigBuilder {
    /// Creates a new configuration builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SegmentConfig::default(),
        }
    }

    /// Sets the length thresholds.
    #[must_use]
    pub const fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Sets the title width in graphemes.
    #[must_use]
    pub const fn title_width(mut self, width: usize) -> Self {
        self.config.title_width = width;
        self
    }

    /// Sets the Markdown heading.
    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.config.heading = heading.into();
        self
    }

    /// Sets the filler text of padding cells.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = text.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> SegmentConfig {
        self.config
    }
}
