//! Time-respect analysis of crowd-sourced game completion times
//!
//! This crate turns a raw export of "how long to beat" estimates into an
//! enriched table and a set of read-only aggregates that separate how long a
//! game *claims* to take from how much of that claim is backed by reports.
//!
//! # Overview
//!
//! ```text
//! CSV export
//!   ↓ ingest: type filter → polls > 0 → hours > 0 → drop above P99(hours)
//! cleaned GameRecords (+ CleaningReport)
//!   ↓ enrich: population scalars → per-record metrics → respect score
//! EnrichedTable (read-only)
//!   ├→ insight::core_insight
//!   ├→ genre::genre_analysis
//!   ├→ sensitivity::sensitivity_analysis / explore_threshold
//!   ├→ distribution::zone_distribution / tier_distribution
//!   ├→ leaderboard::trs_leaderboard
//!   ├→ illusion::illusion_games
//!   ├→ platform::platform_analysis
//!   ├→ cluster::cluster_analysis
//!   └→ EnrichedTable::sample
//! ```
//!
//! Every aggregate is a pure function of the table; recomputing it twice yields
//! identical results. Weighted statistics always use the poll count as the
//! weight, so a heavily reported game outweighs many thinly reported ones.
//!
//! # Modules
//!
//! - [`record`]: Input rows and cleaned records
//! - [`ingest`]: CSV loading and the ordered cleaning filters
//! - [`enrich`]: Per-record metric derivation and [`EnrichedTable`]
//! - [`score`]: The pluggable Time Respect Score
//! - [`tier`], [`zone`]: Ordinal classifications of a record
//! - [`insight`], [`genre`], [`sensitivity`], [`distribution`], [`leaderboard`],
//!   [`illusion`], [`platform`], [`cluster`]: Aggregates over the table
//! - [`sample`]: Reproducible random subsets
//!
//! # Examples
//!
//! ```
//! use timerespect_analysis::{genre::genre_analysis, insight::core_insight, record::GameRecord};
//! use timerespect_analysis::EnrichedTable;
//!
//! let records = (1..=40)
//!     .map(|i| GameRecord {
//!         name: format!("Game {i}"),
//!         main_story_hours: f64::from(i),
//!         main_story_poll_count: i * 3,
//!         genre_list: Some("Action, Adventure".to_owned()),
//!         platform_list: Some("PC".to_owned()),
//!     })
//!     .collect();
//! let table = EnrichedTable::new(records);
//!
//! let insight = core_insight(&table);
//! assert!(insight.weighted_adjusted_median < insight.weighted_raw_median);
//!
//! let genres = genre_analysis(&table, 30);
//! assert_eq!(genres.len(), 1);
//! assert_eq!(genres[0].genre, "Action");
//! ```

pub use self::{
    enrich::{EnrichedGame, EnrichedTable},
    ingest::{CleaningReport, LoadError, LoadOptions, load_and_clean, load_and_clean_with},
    record::GameRecord,
};

pub mod cluster;
pub mod distribution;
pub mod enrich;
pub mod genre;
pub mod illusion;
pub mod ingest;
pub mod insight;
pub mod leaderboard;
pub mod platform;
pub mod record;
pub mod sample;
pub mod score;
pub mod sensitivity;
pub mod tier;
pub mod zone;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{enrich::EnrichedTable, record::GameRecord};

    pub(crate) fn game(name: &str, genre_list: &str, hours: f64, polls: u32) -> GameRecord {
        GameRecord {
            name: name.to_owned(),
            main_story_hours: hours,
            main_story_poll_count: polls,
            genre_list: Some(genre_list.to_owned()),
            platform_list: Some("PC".to_owned()),
        }
    }

    pub(crate) fn table(records: Vec<GameRecord>) -> EnrichedTable {
        EnrichedTable::new(records)
    }
}
