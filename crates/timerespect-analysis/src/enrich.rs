//! Per-record metric derivation
//!
//! # Pipeline
//!
//! Enrichment runs in three phases so that every population-dependent value
//! is frozen before it is applied to individual records:
//!
//! ```text
//! cleaned records
//!   ↓ phase 1: PopulationStats (max confidence, total polls)
//!   ↓ phase 2: per-record fields (confidence, adjusted time, reliability, zone, ...)
//!   ↓ phase 3: ScoreContext (median hours, genre medians) → time_respect_score
//! EnrichedTable
//! ```
//!
//! # Derived Fields
//!
//! | field                    | formula                                   |
//! |--------------------------|-------------------------------------------|
//! | `confidence_score`       | `ln(1 + polls)`                           |
//! | `adjusted_time_cost`     | `hours / confidence_score`                |
//! | `reliability`            | `confidence_score / max(confidence_score)`|
//! | `misrepresentation_risk` | `exp(-polls / 50)`                        |
//! | `perception_gap`         | `adjusted_time_cost - hours`              |
//! | `statistical_weight`     | `polls / sum(polls)`                      |
//! | `stability_index`        | `confidence_score / (adjusted + 1)`       |
//!
//! The table is read-only once built; every aggregate borrows it immutably.

use serde::Serialize;

use crate::{
    ingest::CleaningReport,
    record::GameRecord,
    score::{RespectScorer, ScoreContext, WeightedRespectScorer},
    tier::ConfidenceTier,
    zone::{self, Zone},
};

/// Poll count at which the misrepresentation risk has decayed to `1/e`.
pub const MISREPRESENTATION_DECAY_POLLS: f64 = 50.0;

/// `ln(1 + poll_count)`.
///
/// ```
/// use timerespect_analysis::enrich::confidence_score;
///
/// assert_eq!(confidence_score(0), 0.0);
/// assert!((confidence_score(1) - 2.0_f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn confidence_score(poll_count: u32) -> f64 {
    f64::from(poll_count).ln_1p()
}

/// `exp(-poll_count / 50)`.
#[must_use]
pub fn misrepresentation_risk(poll_count: u32) -> f64 {
    (-f64::from(poll_count) / MISREPRESENTATION_DECAY_POLLS).exp()
}

/// Population scalars computed in a full pass before per-record derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationStats {
    pub count: usize,
    /// Largest confidence score in the population (0 for an empty population).
    pub max_confidence: f64,
    /// Sum of poll counts over the population.
    pub total_polls: u64,
}

impl PopulationStats {
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let max_confidence = records
            .iter()
            .map(|record| confidence_score(record.main_story_poll_count))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0);
        let total_polls = records
            .iter()
            .map(|record| u64::from(record.main_story_poll_count))
            .sum();
        Self {
            count: records.len(),
            max_confidence,
            total_polls,
        }
    }
}

/// A cleaned game with every derived field.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedGame {
    #[serde(flatten)]
    pub record: GameRecord,
    pub primary_genre: String,
    pub primary_platform: String,
    pub confidence_score: f64,
    pub adjusted_time_cost: f64,
    pub reliability: f64,
    pub misrepresentation_risk: f64,
    pub perception_gap: f64,
    pub statistical_weight: f64,
    pub stability_index: f64,
    pub confidence_tier: ConfidenceTier,
    pub zone: Zone,
    pub time_respect_score: f64,
}

impl EnrichedGame {
    /// Phase 2 derivation: everything except the respect score.
    #[expect(clippy::cast_precision_loss)]
    fn derive(record: GameRecord, population: &PopulationStats) -> Self {
        let polls = record.main_story_poll_count;
        let hours = record.main_story_hours;
        let confidence_score = confidence_score(polls);
        let adjusted_time_cost = hours / confidence_score;
        Self {
            primary_genre: record.primary_genre().to_owned(),
            primary_platform: record.primary_platform().to_owned(),
            confidence_score,
            adjusted_time_cost,
            reliability: confidence_score / population.max_confidence,
            misrepresentation_risk: misrepresentation_risk(polls),
            perception_gap: adjusted_time_cost - hours,
            statistical_weight: f64::from(polls) / population.total_polls as f64,
            stability_index: confidence_score / (adjusted_time_cost + 1.0),
            confidence_tier: ConfidenceTier::from_poll_count(polls),
            zone: zone::classify(confidence_score, hours),
            time_respect_score: 0.0,
            record,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        self.record.main_story_hours
    }

    #[must_use]
    pub fn poll_count(&self) -> u32 {
        self.record.main_story_poll_count
    }

    /// Poll count as a weight for weighted statistics.
    #[must_use]
    pub fn poll_weight(&self) -> f64 {
        f64::from(self.record.main_story_poll_count)
    }
}

/// The cleaned and enriched dataset every aggregate reads from.
#[derive(Debug, Clone)]
pub struct EnrichedTable {
    games: Vec<EnrichedGame>,
    population: PopulationStats,
    cleaning: Option<CleaningReport>,
}

impl EnrichedTable {
    /// Enriches already-cleaned records using the default respect scorer.
    #[must_use]
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self::with_scorer(records, &WeightedRespectScorer::default())
    }

    /// Enriches already-cleaned records, scoring them with `scorer`.
    #[must_use]
    pub fn with_scorer<S>(records: Vec<GameRecord>, scorer: &S) -> Self
    where
        S: RespectScorer + ?Sized,
    {
        let population = PopulationStats::from_records(&records);
        log::debug!(
            "Population: {} games, max confidence {:.3}, {} polls",
            population.count,
            population.max_confidence,
            population.total_polls
        );

        let mut games = records
            .into_iter()
            .map(|record| EnrichedGame::derive(record, &population))
            .collect::<Vec<_>>();

        let context = ScoreContext::from_games(&games);
        let scores = games
            .iter()
            .map(|game| scorer.score(game, &context))
            .collect::<Vec<_>>();
        for (game, score) in games.iter_mut().zip(scores) {
            game.time_respect_score = score;
        }
        log::debug!(
            "Scored {} games (median hours {:.2}, {} genres)",
            games.len(),
            context.median_hours,
            context.genre_count()
        );

        Self {
            games,
            population,
            cleaning: None,
        }
    }

    /// Attaches the report of the cleaning run that produced the records.
    #[must_use]
    pub fn with_cleaning(mut self, report: CleaningReport) -> Self {
        self.cleaning = Some(report);
        self
    }

    #[must_use]
    pub fn games(&self) -> &[EnrichedGame] {
        &self.games
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedGame> + Clone + '_ {
        self.games.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn population(&self) -> &PopulationStats {
        &self.population
    }

    /// Cleaning report, if the table was built by the ingestion pipeline.
    #[must_use]
    pub fn cleaning(&self) -> Option<&CleaningReport> {
        self.cleaning.as_ref()
    }

    /// Games backed by at least `min_polls` reports.
    pub fn with_min_polls(
        &self,
        min_polls: u32,
    ) -> impl Iterator<Item = &EnrichedGame> + Clone + '_ {
        self.games
            .iter()
            .filter(move |game| game.poll_count() >= min_polls)
    }
}
