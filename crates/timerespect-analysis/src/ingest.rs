//! Ingestion and cleaning of the source table
//!
//! # Cleaning Pipeline
//!
//! Each step is an irreversible filter; a row failing a step is dropped, not
//! flagged:
//!
//! ```text
//! raw rows
//!   ↓ 1. record_type == "game"
//!   ↓ 2. poll count present and > 0
//!   ↓ 3. hours present and > 0
//!   ↓ 4. hours <= P99(hours of step 3 output)
//! cleaned records
//! ```
//!
//! The 99th percentile uses linear interpolation between closest ranks (see
//! [`compute_percentile`]) and is computed exactly once, so cleaning the same
//! input twice yields identical output.
//!
//! # Examples
//!
//! ```no_run
//! use timerespect_analysis::ingest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = ingest::load_and_clean("hltb_dataset.csv")?;
//! if let Some(report) = table.cleaning() {
//!     println!(
//!         "kept {} of {} rows ({:.1}% dropped)",
//!         report.cleaned_count, report.raw_count, report.dropped_pct
//!     );
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::Serialize;
use timerespect_stats::percentiles::compute_percentile;

use crate::{
    enrich::EnrichedTable,
    record::{GameRecord, RawRecord, UNKNOWN_LABEL},
};

/// Columns that must be present in the source header.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "type",
    "main_story",
    "main_story_polled",
    "genres",
    "platform",
    "name",
];

/// The only record type kept by cleaning.
pub const GAME_RECORD_TYPE: &str = "game";

/// Percentile above which completion times are treated as outliers.
pub const OUTLIER_PERCENTILE: f64 = 99.0;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open source file {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to read source table")]
    Read { source: csv::Error },
    #[display("source table is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Options controlling how the source table is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Row counts recorded while cleaning, for the "sample loss" narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningReport {
    /// Rows read from the source.
    pub raw_count: usize,
    /// Rows left after keeping only games.
    pub games_count: usize,
    /// Rows left after requiring a positive poll count.
    pub with_polls_count: usize,
    /// Rows left after requiring positive hours.
    pub with_hours_count: usize,
    /// 99th percentile of hours over the step 3 output (`None` if it was empty).
    pub hours_p99: Option<f64>,
    /// Rows left after outlier removal.
    pub cleaned_count: usize,
    /// Rows removed as outliers (`with_hours_count - cleaned_count`).
    pub outlier_count: usize,
    /// Outliers as a percentage of the step 3 output.
    pub outlier_pct: f64,
    /// Rows removed by all steps (`raw_count - cleaned_count`).
    pub dropped_count: usize,
    /// Removed rows as a percentage of the raw row count.
    pub dropped_pct: f64,
}

impl CleaningReport {
    fn new(
        raw_count: usize,
        games_count: usize,
        with_polls_count: usize,
        with_hours_count: usize,
        hours_p99: Option<f64>,
        cleaned_count: usize,
    ) -> Self {
        let outlier_count = with_hours_count - cleaned_count;
        let dropped_count = raw_count - cleaned_count;
        Self {
            raw_count,
            games_count,
            with_polls_count,
            with_hours_count,
            hours_p99,
            cleaned_count,
            outlier_count,
            outlier_pct: percentage(outlier_count, with_hours_count),
            dropped_count,
            dropped_pct: percentage(dropped_count, raw_count),
        }
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Loads, cleans, and enriches the source table at `path` with default options.
pub fn load_and_clean<P>(path: P) -> Result<EnrichedTable, LoadError>
where
    P: AsRef<Path>,
{
    load_and_clean_with(path, &LoadOptions::default())
}

/// Loads, cleans, and enriches the source table at `path`.
pub fn load_and_clean_with<P>(path: P, options: &LoadOptions) -> Result<EnrichedTable, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::info!("Loading source table from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let raw = read_raw_records(BufReader::new(file), options)?;
    Ok(clean_and_enrich(raw))
}

/// Runs cleaning and enrichment over rows that were already read.
#[must_use]
pub fn clean_and_enrich(raw: Vec<RawRecord>) -> EnrichedTable {
    let (records, report) = clean_records(raw);
    EnrichedTable::new(records).with_cleaning(report)
}

/// Reads every row of a delimited table with a header line.
///
/// All [`REQUIRED_COLUMNS`] must appear in the header; extra columns are
/// ignored. Cells are trimmed before parsing.
pub fn read_raw_records<R>(reader: R, options: &LoadOptions) -> Result<Vec<RawRecord>, LoadError>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Read { source })?;
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(LoadError::MissingColumn { column });
    }

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<RawRecord>, _>>()
        .map_err(|source| LoadError::Read { source })?;
    log::debug!("Read {} raw rows", rows.len());
    Ok(rows)
}

/// Applies the four cleaning steps in order.
///
/// Poll counts are truncated toward zero before the positivity check, so a
/// count written as `0.5` is dropped rather than rounded up. Non-finite cells
/// (`inf`, `NaN`) count as missing. A missing name becomes [`UNKNOWN_LABEL`].
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn clean_records(raw: Vec<RawRecord>) -> (Vec<GameRecord>, CleaningReport) {
    let raw_count = raw.len();

    let games = raw
        .into_iter()
        .filter(|row| row.record_type.as_deref() == Some(GAME_RECORD_TYPE))
        .collect::<Vec<_>>();
    let games_count = games.len();

    let with_polls = games
        .into_iter()
        .filter_map(|row| {
            let polls = row
                .main_story_poll_count
                .filter(|polls| polls.is_finite())?
                .trunc();
            (polls >= 1.0).then(|| (row, polls.min(f64::from(u32::MAX)) as u32))
        })
        .collect::<Vec<_>>();
    let with_polls_count = with_polls.len();

    let with_hours = with_polls
        .into_iter()
        .filter_map(|(row, polls)| {
            let hours = row
                .main_story_hours
                .filter(|hours| hours.is_finite() && *hours > 0.0)?;
            Some(GameRecord {
                name: row
                    .name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_owned()),
                main_story_hours: hours,
                main_story_poll_count: polls,
                genre_list: row.genre_list,
                platform_list: row.platform_list,
            })
        })
        .collect::<Vec<_>>();
    let with_hours_count = with_hours.len();

    let mut hours = with_hours
        .iter()
        .map(|record| record.main_story_hours)
        .collect::<Vec<_>>();
    hours.sort_by(f64::total_cmp);
    let hours_p99 = (!hours.is_empty()).then(|| compute_percentile(&hours, OUTLIER_PERCENTILE));

    let cleaned = match hours_p99 {
        Some(cutoff) => with_hours
            .into_iter()
            .filter(|record| record.main_story_hours <= cutoff)
            .collect::<Vec<_>>(),
        None => with_hours,
    };

    let report = CleaningReport::new(
        raw_count,
        games_count,
        with_polls_count,
        with_hours_count,
        hours_p99,
        cleaned.len(),
    );
    log::info!(
        "Cleaned {} of {} rows ({} outliers above P99={:.2}h)",
        report.cleaned_count,
        report.raw_count,
        report.outlier_count,
        report.hours_p99.unwrap_or(f64::NAN),
    );
    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const HEADER: &str = "name,type,main_story,main_story_polled,genres,platform";

    fn raw(record_type: &str, hours: Option<f64>, polls: Option<f64>) -> RawRecord {
        RawRecord {
            name: Some(format!("{record_type}-{hours:?}-{polls:?}")),
            record_type: Some(record_type.to_owned()),
            main_story_hours: hours,
            main_story_poll_count: polls,
            genre_list: Some("Action".to_owned()),
            platform_list: Some("PC".to_owned()),
        }
    }

    fn hundred_games() -> Vec<RawRecord> {
        (1..=100)
            .map(|i| raw("game", Some(f64::from(i)), Some(10.0)))
            .collect()
    }

    #[test]
    fn test_steps_filter_in_order() {
        let mut rows = hundred_games();
        rows.push(raw("dlc", Some(5.0), Some(10.0)));
        rows.push(raw("game", Some(5.0), None));
        rows.push(raw("game", Some(5.0), Some(0.0)));
        rows.push(raw("game", None, Some(3.0)));
        rows.push(raw("game", Some(0.0), Some(3.0)));

        let (cleaned, report) = clean_records(rows);
        assert_eq!(report.raw_count, 105);
        assert_eq!(report.games_count, 104);
        assert_eq!(report.with_polls_count, 102);
        assert_eq!(report.with_hours_count, 100);
        // P99 of 1..=100 with linear interpolation is 99.01
        let p99 = report.hours_p99.unwrap();
        assert!((p99 - 99.01).abs() < 1e-9);
        assert_eq!(report.cleaned_count, 99);
        assert_eq!(report.outlier_count, 1);
        assert_eq!(report.dropped_count, 6);
        assert_eq!(cleaned.len(), 99);
        assert!(cleaned.iter().all(|r| r.main_story_hours <= p99));
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let rows = hundred_games();
        let (first, first_report) = clean_records(rows.clone());
        let (second, second_report) = clean_records(rows);
        assert_eq!(first, second);
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn test_fractional_poll_counts_are_truncated() {
        let (cleaned, _) = clean_records(vec![
            raw("game", Some(5.0), Some(0.5)),
            raw("game", Some(5.0), Some(12.9)),
        ]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].main_story_poll_count, 12);
    }

    #[test]
    fn test_non_finite_cells_are_dropped() {
        let mut rows = hundred_games();
        rows.push(raw("game", Some(f64::INFINITY), Some(10.0)));
        rows.push(raw("game", Some(f64::INFINITY), Some(10.0)));
        rows.push(raw("game", Some(f64::NAN), Some(10.0)));
        rows.push(raw("game", Some(5.0), Some(f64::INFINITY)));
        rows.push(raw("game", Some(5.0), Some(f64::NAN)));

        let (cleaned, report) = clean_records(rows);
        assert_eq!(report.with_polls_count, 103);
        assert_eq!(report.with_hours_count, 100);
        let p99 = report.hours_p99.unwrap();
        assert!((p99 - 99.01).abs() < 1e-9);
        assert_eq!(cleaned.len(), 99);
    }

    #[test]
    fn test_infinite_hours_read_from_text() {
        let mut data = format!("{HEADER}\n");
        for i in 1..=99 {
            data.push_str(&format!("Game {i},game,{i},4,RPG,PC\n"));
        }
        data.push_str("Broken A,game,inf,4,RPG,PC\n");
        data.push_str("Broken B,game,inf,4,RPG,PC\n");
        let rows = read_raw_records(data.as_bytes(), &LoadOptions::default()).unwrap();
        let (cleaned, report) = clean_records(rows);
        assert!(report.hours_p99.is_some_and(f64::is_finite));
        assert_eq!(report.with_hours_count, 99);
        assert_eq!(cleaned.len(), report.cleaned_count);
        assert!(cleaned.len() >= 98);
    }

    #[test]
    fn test_blank_name_becomes_unknown() {
        let mut row = raw("game", Some(5.0), Some(3.0));
        row.name = None;
        let mut blank = raw("game", Some(6.0), Some(3.0));
        blank.name = Some("  ".to_owned());
        let (cleaned, _) = clean_records(vec![row, blank]);
        assert!(cleaned.iter().all(|r| r.name == UNKNOWN_LABEL));
    }

    #[test]
    fn test_empty_input() {
        let (cleaned, report) = clean_records(vec![]);
        assert!(cleaned.is_empty());
        assert_eq!(report.hours_p99, None);
        assert_eq!(report.dropped_pct, 0.0);
    }

    #[test]
    fn test_read_rows_with_missing_cells() {
        let data = format!(
            "{HEADER},extra\n\
             Hades,game,22.5,1500,\"Action, Roguelike\",PC,x\n\
             Hollow Knight,game,27,,Metroidvania,,y\n\
             Expansion,dlc,4.0,20,,Switch,z\n"
        );
        let rows = read_raw_records(data.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].genre_list.as_deref(), Some("Action, Roguelike"));
        assert_eq!(rows[0].main_story_poll_count, Some(1500.0));
        assert_eq!(rows[1].main_story_hours, Some(27.0));
        assert_eq!(rows[1].main_story_poll_count, None);
        assert_eq!(rows[1].platform_list, None);
        assert_eq!(rows[2].record_type.as_deref(), Some("dlc"));
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "name;type;main_story;main_story_polled;genres;platform\n\
                    Tetris;game;1.5;40;Puzzle;Game Boy\n";
        let options = LoadOptions { delimiter: b';' };
        let rows = read_raw_records(data.as_bytes(), &options).unwrap();
        assert_eq!(rows[0].platform_list.as_deref(), Some("Game Boy"));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let data = "name,type,main_story,genres,platform\nA,game,3,RPG,PC\n";
        let err = read_raw_records(data.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: "main_story_polled"
            }
        ));
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let data = format!("{HEADER}\nA,game,lots,3,RPG,PC\n");
        let err = read_raw_records(data.as_bytes(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_and_clean(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn test_load_and_clean_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for i in 1..=50 {
            writeln!(file, "Game {i},game,{i},{},RPG,PC", i * 3).unwrap();
        }
        writeln!(file, "Some DLC,dlc,2,10,RPG,PC").unwrap();
        file.flush().unwrap();

        let table = load_and_clean(file.path()).unwrap();
        let report = table.cleaning().unwrap();
        assert_eq!(report.raw_count, 51);
        assert_eq!(report.with_hours_count, 50);
        assert_eq!(table.len(), report.cleaned_count);
        assert_eq!(table.len(), 49);
    }

    #[test]
    fn test_heavily_polled_rows_drive_the_insight() {
        let mut data = format!("{HEADER}\n");
        for i in 0..150 {
            data.push_str(&format!("Thin {i},game,50,5,RPG,PC\n"));
        }
        for i in 0..50 {
            data.push_str(&format!("Dense {i},game,10.0,500.0,Action,PC\n"));
        }
        let rows = read_raw_records(data.as_bytes(), &LoadOptions::default()).unwrap();
        let table = clean_and_enrich(rows);
        assert_eq!(table.len(), 200);
        let insight = crate::insight::core_insight(&table);
        assert_eq!(insight.weighted_raw_median, 10.0);
    }
}
