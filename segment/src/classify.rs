//! Three-tier length classification.

use core::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Thresholds;

/// Length label of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Inside the sweet spot.
    Sweet,
    /// Outside the sweet spot but within the hard limits.
    Usable,
    /// Below the lower or above the upper hard limit.
    OutOfRange,
}

impl Classification {
    /// Short label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweet => "sweet",
            Self::Usable => "usable",
            Self::OutOfRange => "out-of-range",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Thresholds {
    /// Labels a visible length.
    ///
    /// Every length maps to exactly one label; all bounds are inclusive.
    #[must_use]
    pub const fn classify(&self, len: usize) -> Classification {
        if self.sweet_min <= len && len <= self.sweet_max {
            Classification::Sweet
        } else if len < self.hard_min || len > self.hard_max {
            Classification::OutOfRange
        } else {
            Classification::Usable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Thresholds = Thresholds::DEFAULT;

    #[test]
    fn closed_boundaries() {
        assert_eq!(T.classify(75), Classification::Sweet);
        assert_eq!(T.classify(1200), Classification::Sweet);
        assert_eq!(T.classify(74), Classification::Usable);
        assert_eq!(T.classify(1201), Classification::Usable);
        assert_eq!(T.classify(50), Classification::Usable);
        assert_eq!(T.classify(1500), Classification::Usable);
        assert_eq!(T.classify(49), Classification::OutOfRange);
        assert_eq!(T.classify(1501), Classification::OutOfRange);
        assert_eq!(T.classify(0), Classification::OutOfRange);
    }

    #[test]
    fn sweet_wins_when_ranges_touch() {
        let t = Thresholds::new(10, 20, 10, 20).unwrap();
        assert_eq!(t.classify(10), Classification::Sweet);
        assert_eq!(t.classify(20), Classification::Sweet);
        assert_eq!(t.classify(9), Classification::OutOfRange);
        assert_eq!(t.classify(21), Classification::OutOfRange);
    }

    #[test]
    fn every_length_gets_one_label() {
        let mut seen = [0usize; 3];
        for len in 0..=2000 {
            match T.classify(len) {
                Classification::Sweet => seen[0] += 1,
                Classification::Usable => seen[1] += 1,
                Classification::OutOfRange => seen[2] += 1,
            }
        }
        assert_eq!(seen, [1126, 25 + 300, 50 + 500]);
    }

    #[test]
    fn labels() {
        assert_eq!(Classification::OutOfRange.to_string(), "out-of-range");
        assert_eq!(Classification::Usable.label(), "usable");
    }
}
