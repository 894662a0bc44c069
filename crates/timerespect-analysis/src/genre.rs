//! Per-genre comparison of reported and adjusted time
//!
//! Games are grouped by primary genre. Genres with fewer than `min_games`
//! members are dropped before ranking, so ranks only compare genres that are
//! reported on.
//!
//! ```text
//! raw_rank      = average rank of raw_median among surviving genres (1 = shortest)
//! adjusted_rank = average rank of adjusted_median
//! rank_shift    = trunc(raw_rank - adjusted_rank)
//! honesty_score = 1 / (1 + |adjusted_median - raw_median|)
//! ```
//!
//! A negative rank shift means the genre moves towards the long end once thin
//! reporting is penalized.

use std::collections::BTreeMap;

use serde::Serialize;
use timerespect_stats::{descriptive, rank::average_ranks, weighted::weighted_median_by};

use crate::enrich::{EnrichedGame, EnrichedTable};

pub const DEFAULT_MIN_GENRE_GAMES: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreAggregate {
    pub genre: String,
    /// Poll-weighted median of reported hours.
    pub raw_median: f64,
    /// Poll-weighted median of adjusted time.
    pub adjusted_median: f64,
    pub count: usize,
    pub total_polls: u64,
    pub avg_reliability: f64,
    pub avg_risk: f64,
    /// `adjusted_median - raw_median`.
    pub perception_gap: f64,
    pub honesty_score: f64,
    pub raw_rank: f64,
    pub adjusted_rank: f64,
    pub rank_shift: i64,
}

impl GenreAggregate {
    fn from_members(genre: &str, members: &[&EnrichedGame]) -> Self {
        let raw_median = weighted_median_by(members.iter().map(|g| (g.hours(), g.poll_weight())));
        let adjusted_median =
            weighted_median_by(members.iter().map(|g| (g.adjusted_time_cost, g.poll_weight())));
        let perception_gap = adjusted_median - raw_median;
        Self {
            genre: genre.to_owned(),
            raw_median,
            adjusted_median,
            count: members.len(),
            total_polls: members.iter().map(|g| u64::from(g.poll_count())).sum(),
            avg_reliability: descriptive::mean(members.iter().map(|g| g.reliability))
                .unwrap_or(0.0),
            avg_risk: descriptive::mean(members.iter().map(|g| g.misrepresentation_risk))
                .unwrap_or(0.0),
            perception_gap,
            honesty_score: honesty_score(perception_gap),
            raw_rank: 0.0,
            adjusted_rank: 0.0,
            rank_shift: 0,
        }
    }
}

/// `1 / (1 + |gap|)`, in `(0, 1]` and equal to 1 only for a zero gap.
///
/// ```
/// use timerespect_analysis::genre::honesty_score;
///
/// assert_eq!(honesty_score(0.0), 1.0);
/// assert_eq!(honesty_score(-1.0), 0.5);
/// ```
#[must_use]
pub fn honesty_score(perception_gap: f64) -> f64 {
    1.0 / (1.0 + perception_gap.abs())
}

/// Aggregates genres with at least `min_games` members, sorted ascending by
/// adjusted median.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn genre_analysis(table: &EnrichedTable, min_games: usize) -> Vec<GenreAggregate> {
    let mut groups = BTreeMap::<&str, Vec<&EnrichedGame>>::new();
    for game in table.iter() {
        groups.entry(&game.primary_genre).or_default().push(game);
    }

    let group_count = groups.len();
    let mut genres = groups
        .into_iter()
        .filter(|(_, members)| members.len() >= min_games)
        .map(|(genre, members)| GenreAggregate::from_members(genre, &members))
        .collect::<Vec<_>>();

    let raw_medians = genres.iter().map(|g| g.raw_median).collect::<Vec<_>>();
    let adjusted_medians = genres.iter().map(|g| g.adjusted_median).collect::<Vec<_>>();
    let raw_ranks = average_ranks(&raw_medians);
    let adjusted_ranks = average_ranks(&adjusted_medians);
    for ((genre, raw_rank), adjusted_rank) in
        genres.iter_mut().zip(raw_ranks).zip(adjusted_ranks)
    {
        genre.raw_rank = raw_rank;
        genre.adjusted_rank = adjusted_rank;
        genre.rank_shift = (raw_rank - adjusted_rank) as i64;
    }

    genres.sort_by(|a, b| a.adjusted_median.total_cmp(&b.adjusted_median));
    log::debug!(
        "Genre analysis: {} of {group_count} genres have at least {min_games} games",
        genres.len()
    );
    genres
}
