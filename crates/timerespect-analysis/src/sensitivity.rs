//! Stability of the headline gap under minimum-poll filters
//!
//! For each threshold `t`, the subset of games with at least `t` polls is
//! summarized with the same weighted medians as the core insight. Subsets of
//! [`MIN_SUBSET_SIZE`] games or fewer are considered too small to report.

use serde::Serialize;

use crate::{
    enrich::EnrichedTable,
    ingest::percentage,
    insight::{noise_percentage, weighted_time_medians},
};

pub const DEFAULT_THRESHOLDS: [u32; 6] = [1, 5, 10, 20, 50, 100];

/// A subset must hold strictly more games than this to be reported.
pub const MIN_SUBSET_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityPoint {
    pub threshold: u32,
    pub game_count: usize,
    pub weighted_raw_median: f64,
    pub weighted_adjusted_median: f64,
    /// `weighted_raw_median - weighted_adjusted_median`.
    pub gap: f64,
    pub pct_noise: f64,
    /// Subset size as a percentage of the whole table.
    pub pct_retained: f64,
}

/// Summarizes the subset with at least `min_polls` polls.
///
/// Returns `None` when the subset holds [`MIN_SUBSET_SIZE`] games or fewer.
#[must_use]
pub fn explore_threshold(table: &EnrichedTable, min_polls: u32) -> Option<SensitivityPoint> {
    let game_count = table.with_min_polls(min_polls).count();
    if game_count <= MIN_SUBSET_SIZE {
        log::debug!("Threshold {min_polls}: only {game_count} games, skipped");
        return None;
    }
    let (raw, adjusted) = weighted_time_medians(table.with_min_polls(min_polls));
    Some(SensitivityPoint {
        threshold: min_polls,
        game_count,
        weighted_raw_median: raw,
        weighted_adjusted_median: adjusted,
        gap: raw - adjusted,
        pct_noise: noise_percentage(raw, adjusted),
        pct_retained: percentage(game_count, table.len()),
    })
}

/// One point per threshold whose subset is large enough, in the given order.
#[must_use]
pub fn sensitivity_analysis(table: &EnrichedTable, thresholds: &[u32]) -> Vec<SensitivityPoint> {
    thresholds
        .iter()
        .filter_map(|&threshold| explore_threshold(table, threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{game, table};

    fn spread_table() -> EnrichedTable {
        // poll counts 1..=400, hours shrinking as reporting grows
        table(
            (1..=400)
                .map(|i| game(&format!("G{i}"), "RPG", 100.0 / f64::from(i).sqrt(), i))
                .collect(),
        )
    }

    #[test]
    fn test_retention_is_non_increasing() {
        let points = sensitivity_analysis(&spread_table(), &DEFAULT_THRESHOLDS);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].pct_retained, 100.0);
        assert!(
            points
                .windows(2)
                .all(|w| w[0].pct_retained >= w[1].pct_retained)
        );
    }

    #[test]
    fn test_small_subsets_are_skipped() {
        let table = spread_table();
        // 101 games have at least 300 polls, 100 have at least 301
        assert_eq!(explore_threshold(&table, 300).map(|p| p.game_count), Some(101));
        assert_eq!(explore_threshold(&table, 301), None);
        let points = sensitivity_analysis(&table, &[301, 1, 500]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].threshold, 1);
    }

    #[test]
    fn test_point_fields() {
        let table = spread_table();
        let point = explore_threshold(&table, 100).unwrap();
        assert_eq!(point.game_count, 301);
        let gap = point.weighted_raw_median - point.weighted_adjusted_median;
        assert!((point.gap - gap).abs() < 1e-12);
        assert!((point.pct_retained - 75.25).abs() < 1e-12);
        assert!(point.pct_noise > 0.0);
    }

    #[test]
    fn test_empty_table_has_no_points() {
        assert!(sensitivity_analysis(&table(vec![]), &DEFAULT_THRESHOLDS).is_empty());
    }
}
