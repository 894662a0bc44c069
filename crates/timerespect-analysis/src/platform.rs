//! Per-platform completion time

use std::collections::BTreeMap;

use serde::Serialize;
use timerespect_stats::descriptive;

use crate::enrich::{EnrichedGame, EnrichedTable};

pub const DEFAULT_MIN_PLATFORM_GAMES: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformAggregate {
    pub platform: String,
    /// Plain (unweighted) median of reported hours.
    pub median_hours: f64,
    /// Plain median of confidence scores.
    pub median_confidence: f64,
    pub total_polls: u64,
    pub count: usize,
}

/// Platforms with at least `min_games` games, shortest median first.
#[must_use]
pub fn platform_analysis(table: &EnrichedTable, min_games: usize) -> Vec<PlatformAggregate> {
    let mut groups = BTreeMap::<&str, Vec<&EnrichedGame>>::new();
    for game in table.iter() {
        groups.entry(&game.primary_platform).or_default().push(game);
    }

    let mut platforms = groups
        .into_iter()
        .filter(|(_, members)| members.len() >= min_games)
        .map(|(platform, members)| PlatformAggregate {
            platform: platform.to_owned(),
            median_hours: descriptive::median(members.iter().map(|g| g.hours())).unwrap_or(0.0),
            median_confidence: descriptive::median(members.iter().map(|g| g.confidence_score))
                .unwrap_or(0.0),
            total_polls: members.iter().map(|g| u64::from(g.poll_count())).sum(),
            count: members.len(),
        })
        .collect::<Vec<_>>();
    platforms.sort_by(|a, b| a.median_hours.total_cmp(&b.median_hours));
    platforms
}
