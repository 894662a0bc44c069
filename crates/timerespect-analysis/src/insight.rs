//! Headline comparison of reported and confidence-adjusted completion time

use serde::Serialize;
use timerespect_stats::{descriptive, weighted::weighted_median_by};

use crate::{
    enrich::{EnrichedGame, EnrichedTable},
    ingest::percentage,
};

/// Games with fewer polls than this are counted as unreliable.
pub const UNRELIABLE_POLL_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreInsight {
    pub game_count: usize,
    /// Poll-weighted median of reported hours.
    pub weighted_raw_median: f64,
    /// Poll-weighted median of adjusted time.
    pub weighted_adjusted_median: f64,
    /// `weighted_raw_median - weighted_adjusted_median`.
    pub difference: f64,
    /// Difference as a percentage of the raw median (0 when the raw median is 0).
    pub pct_noise: f64,
    /// Percentage of games backed by fewer than [`UNRELIABLE_POLL_THRESHOLD`] polls.
    pub unreliable_pct: f64,
    pub avg_misrep_risk: f64,
}

/// Poll-weighted medians of (raw hours, adjusted time) over `games`.
///
/// Both are 0 when `games` is empty.
pub(crate) fn weighted_time_medians<'a, I>(games: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a EnrichedGame>,
    I::IntoIter: Clone,
{
    let games = games.into_iter();
    let raw = weighted_median_by(games.clone().map(|g| (g.hours(), g.poll_weight())));
    let adjusted = weighted_median_by(games.map(|g| (g.adjusted_time_cost, g.poll_weight())));
    (raw, adjusted)
}

/// `100 * difference / raw`, or 0 when `raw` is 0.
pub(crate) fn noise_percentage(raw: f64, adjusted: f64) -> f64 {
    if raw == 0.0 {
        0.0
    } else {
        100.0 * (raw - adjusted) / raw
    }
}

#[must_use]
pub fn core_insight(table: &EnrichedTable) -> CoreInsight {
    let (raw, adjusted) = weighted_time_medians(table.games());
    let unreliable = table
        .iter()
        .filter(|g| g.poll_count() < UNRELIABLE_POLL_THRESHOLD)
        .count();
    CoreInsight {
        game_count: table.len(),
        weighted_raw_median: raw,
        weighted_adjusted_median: adjusted,
        difference: raw - adjusted,
        pct_noise: noise_percentage(raw, adjusted),
        unreliable_pct: percentage(unreliable, table.len()),
        avg_misrep_risk: descriptive::mean(table.iter().map(|g| g.misrepresentation_risk))
            .unwrap_or(0.0),
    }
}
