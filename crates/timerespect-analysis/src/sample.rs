//! Reproducible random subsets for scatter plots

use rand::{SeedableRng, seq::index};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::{
    enrich::{EnrichedGame, EnrichedTable},
    zone::Zone,
};

pub const DEFAULT_SAMPLE_SIZE: usize = 5000;
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

impl EnrichedTable {
    /// Draws up to `size` games uniformly without replacement.
    ///
    /// The result keeps table order and depends only on the table and `seed`.
    /// Tables with at most `size` games are returned whole.
    ///
    /// ```
    /// use timerespect_analysis::{EnrichedTable, GameRecord};
    ///
    /// let records = (1..=100)
    ///     .map(|i| GameRecord {
    ///         name: format!("Game {i}"),
    ///         main_story_hours: f64::from(i),
    ///         main_story_poll_count: i,
    ///         genre_list: None,
    ///         platform_list: None,
    ///     })
    ///     .collect();
    /// let table = EnrichedTable::new(records);
    ///
    /// let a = table.sample(10, 42);
    /// let b = table.sample(10, 42);
    /// assert_eq!(a.len(), 10);
    /// assert!(a.iter().zip(&b).all(|(x, y)| x.name() == y.name()));
    /// ```
    #[must_use]
    pub fn sample(&self, size: usize, seed: u64) -> Vec<&EnrichedGame> {
        let games = self.games();
        if games.len() <= size {
            return games.iter().collect();
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut indices = index::sample(&mut rng, games.len(), size).into_vec();
        indices.sort_unstable();
        indices.into_iter().map(|i| &games[i]).collect()
    }
}

/// The per-game fields plotted by trust-time scatter charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    pub name: String,
    pub main_story_hours: f64,
    pub adjusted_time_cost: f64,
    pub confidence_score: f64,
    pub main_story_poll_count: u32,
    pub primary_genre: String,
    pub zone: Zone,
    pub time_respect_score: f64,
}

impl From<&EnrichedGame> for SamplePoint {
    fn from(game: &EnrichedGame) -> Self {
        Self {
            name: game.name().to_owned(),
            main_story_hours: game.hours(),
            adjusted_time_cost: game.adjusted_time_cost,
            confidence_score: game.confidence_score,
            main_story_poll_count: game.poll_count(),
            primary_genre: game.primary_genre.clone(),
            zone: game.zone,
            time_respect_score: game.time_respect_score,
        }
    }
}

#[must_use]
pub fn sample_points(table: &EnrichedTable, size: usize, seed: u64) -> Vec<SamplePoint> {
    table.sample(size, seed).into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{game, table};

    fn numbered(count: u32) -> EnrichedTable {
        table(
            (0..count)
                .map(|i| game(&format!("{i:04}"), "RPG", 1.0 + f64::from(i), 10))
                .collect(),
        )
    }

    #[test]
    fn test_sample_is_reproducible() {
        let table = numbered(500);
        let names = |seed| {
            table
                .sample(50, seed)
                .into_iter()
                .map(|g| g.name().to_owned())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(DEFAULT_SAMPLE_SEED), names(DEFAULT_SAMPLE_SEED));
        assert_ne!(names(1), names(2));
    }

    #[test]
    fn test_sample_keeps_table_order_without_duplicates() {
        let table = numbered(300);
        let sample = table.sample(120, 7);
        assert_eq!(sample.len(), 120);
        // names are zero-padded, so table order is lexical order
        assert!(sample.windows(2).all(|w| w[0].name() < w[1].name()));
    }

    #[test]
    fn test_small_table_is_returned_whole() {
        let table = numbered(30);
        assert_eq!(table.sample(DEFAULT_SAMPLE_SIZE, DEFAULT_SAMPLE_SEED).len(), 30);
        assert_eq!(sample_points(&table, 30, 0).len(), 30);
        assert!(table.sample(0, 0).is_empty());
    }
}
