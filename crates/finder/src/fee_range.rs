//! Tuition fee buckets.
//!
//! Fees are not a discrete facet; each course is tested against a labelled
//! range instead. Bounded ranges are inclusive at both ends, so a fee sitting
//! exactly on a shared boundary (25000, 30000) belongs to both neighbours.
//! The open-ended range starts strictly above its bound.

use serde::{Deserialize, Serialize};

/// A labelled tuition fee range in NZD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRange {
    /// Selector key shown to users, e.g. "NZD 25,000 - 30,000"
    pub label: String,
    pub min: u64,
    /// Inclusive upper bound, `None` for unbounded
    #[serde(default)]
    pub max: Option<u64>,
    /// When set, a fee equal to `min` is outside the range
    #[serde(default)]
    pub min_exclusive: bool,
}

impl FeeRange {
    /// Range with inclusive bounds on both ends
    pub fn between(label: impl Into<String>, min: u64, max: u64) -> Self {
        Self {
            label: label.into(),
            min,
            max: Some(max),
            min_exclusive: false,
        }
    }

    /// Unbounded range of fees strictly greater than `min`
    pub fn above(label: impl Into<String>, min: u64) -> Self {
        Self {
            label: label.into(),
            min,
            max: None,
            min_exclusive: true,
        }
    }

    pub fn contains(&self, fee: u64) -> bool {
        let above_min = if self.min_exclusive {
            fee > self.min
        } else {
            fee >= self.min
        };
        above_min && self.max.is_none_or(|max| fee <= max)
    }
}

/// The four ranges offered on the course finder page.
pub fn default_fee_ranges() -> Vec<FeeRange> {
    vec![
        FeeRange::between("Under NZD 25,000", 0, 25_000),
        FeeRange::between("NZD 25,000 - 30,000", 25_000, 30_000),
        FeeRange::between("NZD 30,000 - 35,000", 30_000, 35_000),
        FeeRange::above("Above NZD 35,000", 35_000),
    ]
}

/// Find a range by its label
pub fn find_fee_range<'a>(ranges: &'a [FeeRange], label: &str) -> Option<&'a FeeRange> {
    ranges.iter().find(|range| range.label == label)
}
