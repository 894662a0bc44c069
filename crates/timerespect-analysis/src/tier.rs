//! Confidence tiers
//!
//! A coarse, ordinal view of the poll count behind an estimate, used for the
//! tier distribution and for labelling games in reports.

use std::fmt;

use serde::Serialize;

/// Ordinal bucket of the poll count backing an estimate.
///
/// ```text
/// polls      tier
/// (0, 10]    Unreliable
/// (10, 50]   Weak
/// (50, 200]  Moderate
/// (200, ∞)   Strong
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfidenceTier {
    Unreliable,
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl ConfidenceTier {
    pub const ALL: [Self; 4] = [Self::Unreliable, Self::Weak, Self::Moderate, Self::Strong];

    /// Buckets a poll count using right-closed intervals.
    ///
    /// ```
    /// use timerespect_analysis::tier::ConfidenceTier;
    ///
    /// assert_eq!(ConfidenceTier::from_poll_count(10), ConfidenceTier::Unreliable);
    /// assert_eq!(ConfidenceTier::from_poll_count(11), ConfidenceTier::Weak);
    /// assert_eq!(ConfidenceTier::from_poll_count(200), ConfidenceTier::Moderate);
    /// assert_eq!(ConfidenceTier::from_poll_count(201), ConfidenceTier::Strong);
    /// ```
    #[must_use]
    pub fn from_poll_count(poll_count: u32) -> Self {
        match poll_count {
            0..=10 => Self::Unreliable,
            11..=50 => Self::Weak,
            51..=200 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Unreliable => "Unreliable",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    /// Human-readable poll range of the tier.
    #[must_use]
    pub fn poll_range(self) -> &'static str {
        match self {
            Self::Unreliable => "1-10",
            Self::Weak => "11-50",
            Self::Moderate => "51-200",
            Self::Strong => ">200",
        }
    }
}
