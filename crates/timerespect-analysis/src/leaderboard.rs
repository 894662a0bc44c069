//! Best and worst games by Time Respect Score

use serde::Serialize;

use crate::enrich::{EnrichedGame, EnrichedTable};

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_BOTTOM_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub main_story_hours: f64,
    pub main_story_poll_count: u32,
    pub primary_genre: String,
    pub time_respect_score: f64,
}

impl From<&EnrichedGame> for LeaderboardEntry {
    fn from(game: &EnrichedGame) -> Self {
        Self {
            name: game.name().to_owned(),
            main_story_hours: game.hours(),
            main_story_poll_count: game.poll_count(),
            primary_genre: game.primary_genre.clone(),
            time_respect_score: game.time_respect_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    /// Highest scores first.
    pub top: Vec<LeaderboardEntry>,
    /// Lowest scores first.
    pub bottom: Vec<LeaderboardEntry>,
}

/// The `top_n` highest and `bottom_n` lowest scoring games.
///
/// Games with equal scores keep their table order in both lists.
#[must_use]
pub fn trs_leaderboard(table: &EnrichedTable, top_n: usize, bottom_n: usize) -> Leaderboard {
    let mut ascending = table.iter().collect::<Vec<_>>();
    ascending.sort_by(|a, b| a.time_respect_score.total_cmp(&b.time_respect_score));
    let mut descending = table.iter().collect::<Vec<_>>();
    descending.sort_by(|a, b| b.time_respect_score.total_cmp(&a.time_respect_score));

    Leaderboard {
        top: descending.into_iter().take(top_n).map(Into::into).collect(),
        bottom: ascending.into_iter().take(bottom_n).map(Into::into).collect(),
    }
}
