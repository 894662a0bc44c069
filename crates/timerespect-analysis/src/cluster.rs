//! Quantile clusters over (confidence, adjusted time)
//!
//! ```text
//!  confidence
//!      ^
//!  Q70 |  Hidden Gems   |            | Verified Epics
//!      |----------------+------------+----------------
//!      |                  Standard
//!      |----------------+------------+----------------
//!  Q30 |                |            | Overhyped
//!      +-------------------------------------------------> adjusted time
//!                      Q30          Q70
//! ```
//!
//! Every game starts as [`Cluster::Standard`]; the remaining rules are applied
//! in order with last match wins. The rules are disjoint, so the order only
//! matters for readability.

use std::fmt;

use serde::Serialize;
use timerespect_stats::{descriptive, percentiles::Percentiles};

use crate::enrich::{EnrichedGame, EnrichedTable};

const LOW_QUANTILE: f64 = 30.0;
const HIGH_QUANTILE: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Cluster {
    #[serde(rename = "Hidden Gems")]
    HiddenGems,
    #[serde(rename = "Verified Epics")]
    VerifiedEpics,
    Overhyped,
    Standard,
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl Cluster {
    pub const ALL: [Self; 4] = [
        Self::HiddenGems,
        Self::VerifiedEpics,
        Self::Overhyped,
        Self::Standard,
    ];

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::HiddenGems => "Hidden Gems",
            Self::VerifiedEpics => "Verified Epics",
            Self::Overhyped => "Overhyped",
            Self::Standard => "Standard",
        }
    }
}

/// 30th and 70th percentiles of confidence and adjusted time over a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClusterThresholds {
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub adjusted_low: f64,
    pub adjusted_high: f64,
}

impl ClusterThresholds {
    #[must_use]
    pub fn from_table(table: &EnrichedTable) -> Self {
        let quantiles = |value: fn(&EnrichedGame) -> f64| {
            let values = table.iter().map(value).collect::<Vec<_>>();
            let percentiles = Percentiles::new(&values, &[LOW_QUANTILE, HIGH_QUANTILE]);
            let at = |p| percentiles.get(p).unwrap_or(f64::NAN);
            (at(LOW_QUANTILE), at(HIGH_QUANTILE))
        };
        let (confidence_low, confidence_high) = quantiles(|g| g.confidence_score);
        let (adjusted_low, adjusted_high) = quantiles(|g| g.adjusted_time_cost);
        Self {
            confidence_low,
            confidence_high,
            adjusted_low,
            adjusted_high,
        }
    }

    #[must_use]
    pub fn classify(&self, game: &EnrichedGame) -> Cluster {
        let high_conf = game.confidence_score > self.confidence_high;
        let low_conf = game.confidence_score < self.confidence_low;
        let low_time = game.adjusted_time_cost < self.adjusted_low;
        let high_time = game.adjusted_time_cost > self.adjusted_high;

        let mut cluster = Cluster::Standard;
        if high_conf && low_time {
            cluster = Cluster::HiddenGems;
        }
        if low_conf && high_time {
            cluster = Cluster::Overhyped;
        }
        if high_conf && high_time {
            cluster = Cluster::VerifiedEpics;
        }
        cluster
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub cluster: Cluster,
    pub count: usize,
    pub mean_adjusted_time: f64,
    pub mean_confidence: f64,
    pub mean_polls: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterAnalysis {
    pub thresholds: ClusterThresholds,
    /// Non-empty clusters in [`Cluster::ALL`] order.
    pub clusters: Vec<ClusterSummary>,
}

#[must_use]
pub fn cluster_analysis(table: &EnrichedTable) -> ClusterAnalysis {
    let thresholds = ClusterThresholds::from_table(table);
    let assigned = table
        .iter()
        .map(|game| (thresholds.classify(game), game))
        .collect::<Vec<_>>();

    let clusters = Cluster::ALL
        .iter()
        .filter_map(|&cluster| {
            let members = assigned
                .iter()
                .filter(|(c, _)| *c == cluster)
                .map(|(_, game)| *game)
                .collect::<Vec<_>>();
            let mean_of = |value: fn(&EnrichedGame) -> f64| {
                descriptive::mean(members.iter().map(|g| value(g)))
            };
            Some(ClusterSummary {
                cluster,
                count: members.len(),
                mean_adjusted_time: mean_of(|g| g.adjusted_time_cost)?,
                mean_confidence: mean_of(|g| g.confidence_score)?,
                mean_polls: mean_of(EnrichedGame::poll_weight)?,
            })
        })
        .collect();

    ClusterAnalysis {
        thresholds,
        clusters,
    }
}
