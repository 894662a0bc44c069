//! Thinly reported games whose adjusted time most exceeds their claim

use serde::Serialize;

use crate::{
    enrich::{EnrichedGame, EnrichedTable},
    zone::Zone,
};

/// Games need fewer polls than this to be considered.
pub const DEFAULT_MAX_POLLS: u32 = 20;
pub const DEFAULT_ILLUSION_TOP_N: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IllusionGame {
    pub name: String,
    pub main_story_hours: f64,
    pub adjusted_time_cost: f64,
    pub main_story_poll_count: u32,
    pub perception_gap: f64,
    pub primary_genre: String,
    pub zone: Zone,
}

impl From<&EnrichedGame> for IllusionGame {
    fn from(game: &EnrichedGame) -> Self {
        Self {
            name: game.name().to_owned(),
            main_story_hours: game.hours(),
            adjusted_time_cost: game.adjusted_time_cost,
            main_story_poll_count: game.poll_count(),
            perception_gap: game.perception_gap,
            primary_genre: game.primary_genre.clone(),
            zone: game.zone,
        }
    }
}

/// Up to `top_n` games with fewer than `max_polls` polls, largest perception
/// gap first.
#[must_use]
pub fn illusion_games(table: &EnrichedTable, max_polls: u32, top_n: usize) -> Vec<IllusionGame> {
    let mut candidates = table
        .iter()
        .filter(|g| g.poll_count() < max_polls)
        .collect::<Vec<_>>();
    candidates.sort_by(|a, b| b.perception_gap.total_cmp(&a.perception_gap));
    candidates.into_iter().take(top_n).map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{game, table};

    #[test]
    fn test_largest_gaps_among_thin_games() {
        let table = table(vec![
            game("Thin long", "RPG", 60.0, 1),
            game("Thin short", "RPG", 5.0, 2),
            game("Borderline", "RPG", 90.0, 20),
            game("Dense", "RPG", 90.0, 1000),
            game("Thin mid", "RPG", 30.0, 1),
        ]);
        let games = illusion_games(&table, DEFAULT_MAX_POLLS, 2);
        let names = games.iter().map(|g| g.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Thin long", "Thin mid"]);
        assert_eq!(games[0].zone, Zone::FalseEpic);
        assert!(games[0].perception_gap > games[1].perception_gap);
    }

    #[test]
    fn test_no_candidates() {
        let table = table(vec![game("Dense", "RPG", 90.0, 1000)]);
        assert!(illusion_games(&table, DEFAULT_MAX_POLLS, DEFAULT_ILLUSION_TOP_N).is_empty());
    }
}
