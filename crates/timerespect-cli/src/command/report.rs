//! Full dashboard
//!
//! The table is loaded once and every section reads the same enriched table.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use timerespect_analysis::{
    CleaningReport,
    cluster::{ClusterAnalysis, cluster_analysis},
    distribution::{TierCount, ZoneCount, tier_distribution, zone_distribution},
    genre::{DEFAULT_MIN_GENRE_GAMES, GenreAggregate, genre_analysis},
    illusion::{DEFAULT_ILLUSION_TOP_N, DEFAULT_MAX_POLLS, IllusionGame, illusion_games},
    insight::{CoreInsight, core_insight},
    leaderboard::{DEFAULT_BOTTOM_N, DEFAULT_TOP_N, Leaderboard, trs_leaderboard},
    platform::{DEFAULT_MIN_PLATFORM_GAMES, PlatformAggregate, platform_analysis},
    sensitivity::{DEFAULT_THRESHOLDS, SensitivityPoint, sensitivity_analysis},
};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub common: CommonArg,
}

#[derive(Debug, Serialize)]
struct Dashboard {
    generated_at: DateTime<Utc>,
    source: PathBuf,
    cleaning: Option<CleaningReport>,
    insight: CoreInsight,
    genres: Vec<GenreAggregate>,
    sensitivity: Vec<SensitivityPoint>,
    zones: Vec<ZoneCount>,
    tiers: Vec<TierCount>,
    leaderboard: Leaderboard,
    illusions: Vec<IllusionGame>,
    platforms: Vec<PlatformAggregate>,
    clusters: ClusterAnalysis,
}

impl Dashboard {
    fn build(arg: &CommonArg, cache: &mut TableCache) -> anyhow::Result<Self> {
        let table = cache.load(&arg.source, &arg.load_options())?;
        Ok(Self {
            generated_at: Utc::now(),
            source: arg.source.clone(),
            cleaning: table.cleaning().cloned(),
            insight: core_insight(&table),
            genres: genre_analysis(&table, DEFAULT_MIN_GENRE_GAMES),
            sensitivity: sensitivity_analysis(&table, &DEFAULT_THRESHOLDS),
            zones: zone_distribution(&table),
            tiers: tier_distribution(&table),
            leaderboard: trs_leaderboard(&table, DEFAULT_TOP_N, DEFAULT_BOTTOM_N),
            illusions: illusion_games(&table, DEFAULT_MAX_POLLS, DEFAULT_ILLUSION_TOP_N),
            platforms: platform_analysis(&table, DEFAULT_MIN_PLATFORM_GAMES),
            clusters: cluster_analysis(&table),
        })
    }

    fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "How Long To Beat: Time Respect Report")?;
        writeln!(out, "Source   : {}", self.source.display())?;
        writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out)?;

        if let Some(cleaning) = &self.cleaning {
            table::print_cleaning(out, cleaning)?;
            writeln!(out)?;
        }
        table::print_insight(out, &self.insight)?;
        writeln!(out)?;
        table::print_genres(out, &self.genres)?;
        writeln!(out)?;
        table::print_sensitivity(out, &self.sensitivity)?;
        writeln!(out)?;
        table::print_zones(out, &self.zones)?;
        writeln!(out)?;
        table::print_tiers(out, &self.tiers)?;
        writeln!(out)?;
        table::print_leaderboard(out, &self.leaderboard)?;
        writeln!(out)?;
        table::print_illusions(out, &self.illusions)?;
        writeln!(out)?;
        table::print_platforms(out, &self.platforms)?;
        writeln!(out)?;
        table::print_clusters(out, &self.clusters)
    }
}

pub(crate) fn run(arg: &ReportArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let dashboard = Dashboard::build(&arg.common, cache)?;
    arg.common.emit(&dashboard, |out, dashboard| dashboard.print(out))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_source(path: &std::path::Path) {
        let mut data = String::from("name,type,main_story,main_story_polled,genres,platform\n");
        for i in 1..=120_u32 {
            let genre = if i % 2 == 0 { "Action" } else { "\"RPG, Fantasy\"" };
            data.push_str(&format!("Game {i},game,{},{},{genre},PC\n", f64::from(i) / 2.0, i));
        }
        data.push_str("Bonus Pack,dlc,2,40,Action,PC\n");
        fs::write(path, data).unwrap();
    }

    #[test]
    fn test_dashboard_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        write_source(&path);
        let common = CommonArg {
            source: path,
            delimiter: b',',
            json: false,
            output: None,
        };

        let mut cache = TableCache::new();
        let dashboard = Dashboard::build(&common, &mut cache).unwrap();
        let cleaning = dashboard.cleaning.as_ref().unwrap();
        assert_eq!(cleaning.raw_count, 121);
        assert_eq!(cleaning.games_count, 120);
        assert_eq!(dashboard.insight.game_count, cleaning.cleaned_count);
        assert_eq!(dashboard.genres.len(), 2);
        assert_eq!(dashboard.platforms.len(), 1);
        assert_eq!(dashboard.tiers.len(), 4);
        assert_eq!(dashboard.leaderboard.top.len(), DEFAULT_TOP_N);

        let mut text = Vec::new();
        dashboard.print(&mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        for title in ["Cleaning", "Core Insight", "Genres", "Clusters"] {
            assert!(text.contains(title), "missing section {title}");
        }
    }

    #[test]
    fn test_dashboard_json() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("games.csv");
        let output = dir.path().join("report.json");
        write_source(&source);
        let arg = ReportArg {
            common: CommonArg {
                source,
                delimiter: b',',
                json: true,
                output: Some(output.clone()),
            },
        };

        run(&arg, &mut TableCache::new()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["insight"]["game_count"], value["cleaning"]["cleaned_count"]);
        assert!(value["zones"].is_array());
        assert!(value["tiers"][0]["tier"] == "Unreliable");
    }
}
