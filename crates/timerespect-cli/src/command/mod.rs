use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use timerespect_analysis::LoadOptions;

use crate::{cache::TableCache, util::Output};

use self::{
    clusters::ClustersArg, explore::ExploreArg, genres::GenresArg, illusions::IllusionsArg,
    insight::InsightArg, leaderboard::LeaderboardArg, platforms::PlatformsArg, report::ReportArg,
    sample::SampleArg, sensitivity::SensitivityArg, zones::ZonesArg,
};

mod clusters;
mod explore;
mod genres;
mod illusions;
mod insight;
mod leaderboard;
mod platforms;
mod report;
mod sample;
mod sensitivity;
mod table;
mod zones;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which report to produce
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the full dashboard (every section)
    Report(#[clap(flatten)] ReportArg),
    /// Weighted raw vs adjusted medians and the cleaning summary
    Insight(#[clap(flatten)] InsightArg),
    /// Per-genre medians, honesty scores, and rank shifts
    Genres(#[clap(flatten)] GenresArg),
    /// Headline gap under increasing minimum-poll filters
    Sensitivity(#[clap(flatten)] SensitivityArg),
    /// Trust-time zone and confidence tier distributions
    Zones(#[clap(flatten)] ZonesArg),
    /// Best and worst games by Time Respect Score
    Leaderboard(#[clap(flatten)] LeaderboardArg),
    /// Thinly reported games with the largest perception gap
    Illusions(#[clap(flatten)] IllusionsArg),
    /// Per-platform completion time
    Platforms(#[clap(flatten)] PlatformsArg),
    /// Quantile clusters over confidence and adjusted time
    Clusters(#[clap(flatten)] ClustersArg),
    /// Headline gap for a single minimum-poll filter
    Explore(#[clap(flatten)] ExploreArg),
    /// Seeded random sample of games for plotting
    Sample(#[clap(flatten)] SampleArg),
}

/// Arguments shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct CommonArg {
    /// Path to the source CSV file
    pub source: PathBuf,

    /// Field delimiter of the source file (single ASCII character, or `tab`)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Emit the result as pretty-printed JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CommonArg {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
        }
    }

    /// Writes `value` as JSON or through the text printer, per `--json`.
    pub fn emit<T, F>(&self, value: &T, print_text: F) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&mut Output, &T) -> std::io::Result<()>,
    {
        let mut output = Output::from_output_path(self.output.clone())?;
        if self.json {
            output.write_json(value)
        } else {
            output.write_text(|out| print_text(out, value))
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
        },
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mut cache = TableCache::new();
    match args.mode {
        Mode::Report(arg) => report::run(&arg, &mut cache)?,
        Mode::Insight(arg) => insight::run(&arg, &mut cache)?,
        Mode::Genres(arg) => genres::run(&arg, &mut cache)?,
        Mode::Sensitivity(arg) => sensitivity::run(&arg, &mut cache)?,
        Mode::Zones(arg) => zones::run(&arg, &mut cache)?,
        Mode::Leaderboard(arg) => leaderboard::run(&arg, &mut cache)?,
        Mode::Illusions(arg) => illusions::run(&arg, &mut cache)?,
        Mode::Platforms(arg) => platforms::run(&arg, &mut cache)?,
        Mode::Clusters(arg) => clusters::run(&arg, &mut cache)?,
        Mode::Explore(arg) => explore::run(&arg, &mut cache)?,
        Mode::Sample(arg) => sample::run(&arg, &mut cache)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_delimiter_parsing() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn test_subcommand_arguments() {
        let args = CommandArgs::try_parse_from([
            "timerespect",
            "sensitivity",
            "games.csv",
            "--thresholds",
            "1,10,100",
            "--json",
        ])
        .unwrap();
        let Mode::Sensitivity(arg) = args.mode else {
            panic!("expected the sensitivity subcommand");
        };
        assert_eq!(arg.thresholds, vec![1, 10, 100]);
        assert!(arg.common.json);
        assert_eq!(arg.common.delimiter, b',');
        assert_eq!(arg.common.source, PathBuf::from("games.csv"));
    }

    #[test]
    fn test_explore_requires_min_polls() {
        assert!(CommandArgs::try_parse_from(["timerespect", "explore", "games.csv"]).is_err());
        assert!(
            CommandArgs::try_parse_from(["timerespect", "explore", "games.csv", "--min-polls", "5"])
                .is_ok()
        );
    }
}
