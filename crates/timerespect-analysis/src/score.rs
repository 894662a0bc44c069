//! Time Respect Score (TRS)
//!
//! The score rewards short games whose estimate is well measured and close to
//! the typical time of their genre:
//!
//! ```text
//! TRS = 0.4 * length + 0.4 * confidence + 0.2 * genre_fit
//!
//! length     = 1 / (1 + hours / median_hours)           (0, 1]
//! confidence = reliability                              [0, 1]
//! genre_fit  = 1 / (1 + |adjusted - genre_median|)      (0, 1]
//! ```
//!
//! `median_hours` is the plain median of raw hours over the table and
//! `genre_median` the poll-weighted median of adjusted time over all games
//! sharing the primary genre. With weights summing to one the score lies in
//! `(0, 1]`.
//!
//! Scoring sits behind [`RespectScorer`], so alternative formulas can be
//! plugged into [`EnrichedTable::with_scorer`](crate::enrich::EnrichedTable::with_scorer)
//! without touching the leaderboard code.

use std::collections::BTreeMap;

use timerespect_stats::{descriptive, weighted::weighted_median_by};

use crate::enrich::EnrichedGame;

/// Population context shared by every score computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreContext {
    /// Plain median of raw hours over the population.
    pub median_hours: f64,
    /// Poll-weighted median of adjusted time, per primary genre.
    genre_adjusted_medians: BTreeMap<String, f64>,
}

impl ScoreContext {
    #[must_use]
    pub fn from_games(games: &[EnrichedGame]) -> Self {
        let median_hours =
            descriptive::median(games.iter().map(EnrichedGame::hours)).unwrap_or(0.0);

        let mut by_genre = BTreeMap::<&str, Vec<(f64, f64)>>::new();
        for game in games {
            by_genre
                .entry(&game.primary_genre)
                .or_default()
                .push((game.adjusted_time_cost, game.poll_weight()));
        }
        let genre_adjusted_medians = by_genre
            .into_iter()
            .map(|(genre, pairs)| (genre.to_owned(), weighted_median_by(pairs)))
            .collect();

        Self {
            median_hours,
            genre_adjusted_medians,
        }
    }

    /// Weighted median of adjusted time for `genre`, if any game has it.
    #[must_use]
    pub fn genre_adjusted_median(&self, genre: &str) -> Option<f64> {
        self.genre_adjusted_medians.get(genre).copied()
    }

    #[must_use]
    pub fn genre_count(&self) -> usize {
        self.genre_adjusted_medians.len()
    }
}

/// Strategy computing a game's Time Respect Score.
pub trait RespectScorer {
    fn score(&self, game: &EnrichedGame, context: &ScoreContext) -> f64;
}

/// Weighted sum of the length, confidence, and genre-fit terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedRespectScorer {
    pub length_weight: f64,
    pub confidence_weight: f64,
    pub genre_fit_weight: f64,
}

impl Default for WeightedRespectScorer {
    fn default() -> Self {
        Self {
            length_weight: 0.4,
            confidence_weight: 0.4,
            genre_fit_weight: 0.2,
        }
    }
}

impl WeightedRespectScorer {
    /// Decreases with `hours`; equals 0.5 at the population median.
    ///
    /// ```
    /// use timerespect_analysis::score::WeightedRespectScorer;
    ///
    /// assert_eq!(WeightedRespectScorer::length_term(10.0, 10.0), 0.5);
    /// assert!(WeightedRespectScorer::length_term(5.0, 10.0) > 0.5);
    /// ```
    #[must_use]
    pub fn length_term(hours: f64, median_hours: f64) -> f64 {
        let scale = if median_hours > 0.0 { median_hours } else { 1.0 };
        1.0 / (1.0 + hours / scale)
    }

    /// Increases with reliability.
    #[must_use]
    pub fn confidence_term(reliability: f64) -> f64 {
        reliability.clamp(0.0, 1.0)
    }

    /// Increases as the adjusted time approaches the genre median.
    #[must_use]
    pub fn genre_fit_term(adjusted_time_cost: f64, genre_adjusted_median: f64) -> f64 {
        1.0 / (1.0 + (adjusted_time_cost - genre_adjusted_median).abs())
    }
}

impl RespectScorer for WeightedRespectScorer {
    fn score(&self, game: &EnrichedGame, context: &ScoreContext) -> f64 {
        let genre_median = context
            .genre_adjusted_median(&game.primary_genre)
            .unwrap_or(game.adjusted_time_cost);
        self.length_weight * Self::length_term(game.hours(), context.median_hours)
            + self.confidence_weight * Self::confidence_term(game.reliability)
            + self.genre_fit_weight * Self::genre_fit_term(game.adjusted_time_cost, genre_median)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        enrich::EnrichedTable,
        test_util::{game, table},
    };

    #[test]
    fn test_terms_are_monotonic() {
        assert!(
            WeightedRespectScorer::length_term(5.0, 20.0)
                > WeightedRespectScorer::length_term(50.0, 20.0)
        );
        assert!(
            WeightedRespectScorer::confidence_term(0.9)
                > WeightedRespectScorer::confidence_term(0.2)
        );
        assert!(
            WeightedRespectScorer::genre_fit_term(10.0, 10.5)
                > WeightedRespectScorer::genre_fit_term(10.0, 14.0)
        );
        assert_eq!(WeightedRespectScorer::genre_fit_term(7.0, 7.0), 1.0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let table = table(vec![
            game("Short", "Puzzle", 2.0, 3000),
            game("Long", "RPG", 90.0, 2),
            game("Mid", "RPG", 25.0, 120),
            game("Tiny", "Puzzle", 0.5, 1),
        ]);
        for g in table.iter() {
            assert!(g.time_respect_score > 0.0 && g.time_respect_score <= 1.0);
        }
    }

    #[test]
    fn test_short_and_well_measured_scores_higher() {
        let table = table(vec![
            game("Short", "Action", 5.0, 2000),
            game("Long", "Action", 80.0, 2000),
            game("Unmeasured", "Action", 5.0, 2),
        ]);
        let score = |name: &str| {
            table
                .iter()
                .find(|g| g.name() == name)
                .unwrap()
                .time_respect_score
        };
        assert!(score("Short") > score("Long"));
        assert!(score("Short") > score("Unmeasured"));
    }

    #[test]
    fn test_genre_medians_are_poll_weighted() {
        let table = table(vec![
            game("A", "RPG", 30.0, 1000),
            game("B", "RPG", 60.0, 1),
            game("C", "RPG", 60.0, 1),
        ]);
        let context = ScoreContext::from_games(table.games());
        let expected = table.games()[0].adjusted_time_cost;
        assert_eq!(context.genre_adjusted_median("RPG"), Some(expected));
        assert_eq!(context.genre_adjusted_median("Puzzle"), None);
        assert_eq!(context.median_hours, 60.0);
    }

    #[derive(Debug)]
    struct HoursOnly;

    impl RespectScorer for HoursOnly {
        fn score(&self, game: &EnrichedGame, _context: &ScoreContext) -> f64 {
            -game.hours()
        }
    }

    #[test]
    fn test_custom_scorer_is_used() {
        let records = vec![game("A", "RPG", 30.0, 10), game("B", "RPG", 3.0, 10)];
        let table = EnrichedTable::with_scorer(records, &HoursOnly);
        assert_eq!(table.games()[0].time_respect_score, -30.0);
        assert_eq!(table.games()[1].time_respect_score, -3.0);
    }
}
