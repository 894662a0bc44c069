//! Source rows and cleaned game records
//!
//! # Source Columns
//!
//! ```text
//! column             field                    notes
//! -----------------  -----------------------  ------------------------------
//! name               name                     display name, not unique
//! type               record_type              only "game" survives cleaning
//! main_story         main_story_hours         reported completion hours
//! main_story_polled  main_story_poll_count    number of community reports
//! genres             genre_list               comma-separated, optional
//! platform           platform_list            comma-separated, optional
//! ```
//!
//! Empty cells deserialize to `None`. Columns not listed above are ignored.

use serde::{Deserialize, Serialize};

/// Label used when a genre or platform list is absent.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A single row of the source table, before any filtering.
///
/// Every field is optional so that incomplete rows can be read and then
/// dropped by the cleaning pipeline instead of aborting ingestion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(rename = "main_story", default)]
    pub main_story_hours: Option<f64>,
    /// Poll count as written in the source. Spreadsheet exports frequently
    /// store it as a real number (`12.0`), so it is read as one.
    #[serde(rename = "main_story_polled", default)]
    pub main_story_poll_count: Option<f64>,
    #[serde(rename = "genres", default)]
    pub genre_list: Option<String>,
    #[serde(rename = "platform", default)]
    pub platform_list: Option<String>,
}

/// A game that passed every cleaning step.
///
/// `main_story_hours` and `main_story_poll_count` are both strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub name: String,
    pub main_story_hours: f64,
    pub main_story_poll_count: u32,
    pub genre_list: Option<String>,
    pub platform_list: Option<String>,
}

impl GameRecord {
    /// First genre of the genre list, or [`UNKNOWN_LABEL`].
    ///
    /// ```
    /// use timerespect_analysis::record::GameRecord;
    ///
    /// let record = GameRecord {
    ///     name: "Celeste".to_owned(),
    ///     main_story_hours: 8.0,
    ///     main_story_poll_count: 1200,
    ///     genre_list: Some(" Platform, Indie".to_owned()),
    ///     platform_list: None,
    /// };
    /// assert_eq!(record.primary_genre(), "Platform");
    /// assert_eq!(record.primary_platform(), "Unknown");
    /// ```
    #[must_use]
    pub fn primary_genre(&self) -> &str {
        primary_label(self.genre_list.as_deref())
    }

    /// First platform of the platform list, or [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn primary_platform(&self) -> &str {
        primary_label(self.platform_list.as_deref())
    }
}

/// Returns the first comma-separated token of `list`, trimmed.
///
/// Absent lists and blank leading tokens both map to [`UNKNOWN_LABEL`].
#[must_use]
pub fn primary_label(list: Option<&str>) -> &str {
    list.and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
}
