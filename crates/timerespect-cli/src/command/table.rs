//! Text rendering of the report sections
//!
//! Every printer writes a titled, fixed-width table so that sections line up
//! when the dashboard prints them one after another.

use std::io::{self, Write};

use timerespect_analysis::{
    CleaningReport,
    cluster::ClusterAnalysis,
    distribution::{TierCount, ZoneCount},
    genre::GenreAggregate,
    illusion::IllusionGame,
    insight::CoreInsight,
    leaderboard::{Leaderboard, LeaderboardEntry},
    platform::PlatformAggregate,
    sample::SamplePoint,
    sensitivity::SensitivityPoint,
};

const NAME_WIDTH: usize = 32;

fn print_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn print_separator<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "  {}", "-".repeat(width))
}

/// Shortens `name` to the name column, marking the cut with `~`.
fn fit_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_owned()
    } else {
        let mut short = name.chars().take(NAME_WIDTH - 1).collect::<String>();
        short.push('~');
        short
    }
}

pub(super) fn print_cleaning<W: Write>(out: &mut W, report: &CleaningReport) -> io::Result<()> {
    print_title(out, "Cleaning")?;
    writeln!(out, "  Rows read            : {:>8}", report.raw_count)?;
    writeln!(out, "  Games                : {:>8}", report.games_count)?;
    writeln!(out, "  With poll count      : {:>8}", report.with_polls_count)?;
    writeln!(out, "  With main story time : {:>8}", report.with_hours_count)?;
    match report.hours_p99 {
        Some(p99) => writeln!(
            out,
            "  Outliers (> {p99:.1}h) : {:>8} ({:.1}%)",
            report.outlier_count, report.outlier_pct
        )?,
        None => writeln!(out, "  Outliers             :      N/A")?,
    }
    writeln!(
        out,
        "  Kept                 : {:>8} ({:.1}% of rows dropped)",
        report.cleaned_count, report.dropped_pct
    )
}

pub(super) fn print_insight<W: Write>(out: &mut W, insight: &CoreInsight) -> io::Result<()> {
    print_title(out, "Core Insight")?;
    writeln!(out, "  Games                      : {}", insight.game_count)?;
    writeln!(
        out,
        "  Weighted median (reported) : {:.2}h",
        insight.weighted_raw_median
    )?;
    writeln!(
        out,
        "  Weighted median (adjusted) : {:.2}h",
        insight.weighted_adjusted_median
    )?;
    writeln!(
        out,
        "  Difference                 : {:.2}h ({:.1}% noise)",
        insight.difference, insight.pct_noise
    )?;
    writeln!(
        out,
        "  Unreliable estimates       : {:.1}%",
        insight.unreliable_pct
    )?;
    writeln!(
        out,
        "  Mean misrepresentation risk: {:.3}",
        insight.avg_misrep_risk
    )
}

pub(super) fn print_genres<W: Write>(out: &mut W, genres: &[GenreAggregate]) -> io::Result<()> {
    print_title(out, "Genres (sorted by adjusted median)")?;
    if genres.is_empty() {
        return writeln!(out, "  No genre has enough games.");
    }
    writeln!(
        out,
        "  {:<20} {:>6} {:>9} {:>9} {:>9} {:>9} {:>8} {:>6}",
        "Genre", "Games", "Polls", "Raw(h)", "Adj(h)", "Gap(h)", "Honesty", "Shift"
    )?;
    print_separator(out, 83)?;
    for genre in genres {
        writeln!(
            out,
            "  {:<20} {:>6} {:>9} {:>9.2} {:>9.2} {:>+9.2} {:>8.3} {:>+6}",
            genre.genre,
            genre.count,
            genre.total_polls,
            genre.raw_median,
            genre.adjusted_median,
            genre.perception_gap,
            genre.honesty_score,
            genre.rank_shift,
        )?;
    }
    Ok(())
}

pub(super) fn print_sensitivity<W: Write>(
    out: &mut W,
    points: &[SensitivityPoint],
) -> io::Result<()> {
    print_title(out, "Sensitivity to Minimum Polls")?;
    if points.is_empty() {
        return writeln!(out, "  No threshold retains enough games.");
    }
    writeln!(
        out,
        "  {:>9} {:>8} {:>9} {:>9} {:>9} {:>8} {:>9}",
        "MinPolls", "Games", "Raw(h)", "Adj(h)", "Gap(h)", "Noise%", "Retained"
    )?;
    print_separator(out, 67)?;
    for point in points {
        writeln!(
            out,
            "  {:>9} {:>8} {:>9.2} {:>9.2} {:>9.2} {:>7.1}% {:>8.1}%",
            point.threshold,
            point.game_count,
            point.weighted_raw_median,
            point.weighted_adjusted_median,
            point.gap,
            point.pct_noise,
            point.pct_retained,
        )?;
    }
    Ok(())
}

pub(super) fn print_zones<W: Write>(out: &mut W, zones: &[ZoneCount]) -> io::Result<()> {
    print_title(out, "Trust-Time Zones")?;
    writeln!(out, "  {:<16} {:>8} {:>7}", "Zone", "Games", "Share")?;
    print_separator(out, 33)?;
    for zone in zones {
        writeln!(
            out,
            "  {:<16} {:>8} {:>6.1}%",
            zone.zone.to_str(),
            zone.count,
            zone.pct
        )?;
    }
    Ok(())
}

pub(super) fn print_tiers<W: Write>(out: &mut W, tiers: &[TierCount]) -> io::Result<()> {
    print_title(out, "Confidence Tiers")?;
    writeln!(
        out,
        "  {:<12} {:>8} {:>8} {:>7}",
        "Tier", "Polls", "Games", "Share"
    )?;
    print_separator(out, 38)?;
    for tier in tiers {
        writeln!(
            out,
            "  {:<12} {:>8} {:>8} {:>6.1}%",
            tier.tier.to_str(),
            tier.poll_range,
            tier.count,
            tier.pct
        )?;
    }
    Ok(())
}

fn print_leaderboard_entries<W: Write>(
    out: &mut W,
    entries: &[LeaderboardEntry],
) -> io::Result<()> {
    writeln!(
        out,
        "  {:<NAME_WIDTH$} {:>8} {:>8} {:<16} {:>6}",
        "Game", "Hours", "Polls", "Genre", "TRS"
    )?;
    print_separator(out, NAME_WIDTH + 42)?;
    for entry in entries {
        writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>8.1} {:>8} {:<16} {:>6.3}",
            fit_name(&entry.name),
            entry.main_story_hours,
            entry.main_story_poll_count,
            entry.primary_genre,
            entry.time_respect_score,
        )?;
    }
    Ok(())
}

pub(super) fn print_leaderboard<W: Write>(out: &mut W, board: &Leaderboard) -> io::Result<()> {
    print_title(out, "Time Respect Score: Most Respectful")?;
    print_leaderboard_entries(out, &board.top)?;
    writeln!(out)?;
    print_title(out, "Time Respect Score: Least Respectful")?;
    print_leaderboard_entries(out, &board.bottom)
}

pub(super) fn print_illusions<W: Write>(out: &mut W, games: &[IllusionGame]) -> io::Result<()> {
    print_title(out, "Illusion Games (largest perception gap)")?;
    if games.is_empty() {
        return writeln!(out, "  No thinly reported games.");
    }
    writeln!(
        out,
        "  {:<NAME_WIDTH$} {:>8} {:>8} {:>6} {:>8} {:<16}",
        "Game", "Hours", "Adj(h)", "Polls", "Gap(h)", "Zone"
    )?;
    print_separator(out, NAME_WIDTH + 51)?;
    for game in games {
        writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>8.1} {:>8.1} {:>6} {:>+8.1} {:<16}",
            fit_name(&game.name),
            game.main_story_hours,
            game.adjusted_time_cost,
            game.main_story_poll_count,
            game.perception_gap,
            game.zone.to_str(),
        )?;
    }
    Ok(())
}

pub(super) fn print_platforms<W: Write>(
    out: &mut W,
    platforms: &[PlatformAggregate],
) -> io::Result<()> {
    print_title(out, "Platforms (sorted by median hours)")?;
    if platforms.is_empty() {
        return writeln!(out, "  No platform has enough games.");
    }
    writeln!(
        out,
        "  {:<24} {:>7} {:>10} {:>9} {:>10}",
        "Platform", "Games", "Polls", "Median(h)", "MedianConf"
    )?;
    print_separator(out, 64)?;
    for platform in platforms {
        writeln!(
            out,
            "  {:<24} {:>7} {:>10} {:>9.2} {:>10.3}",
            platform.platform,
            platform.count,
            platform.total_polls,
            platform.median_hours,
            platform.median_confidence,
        )?;
    }
    Ok(())
}

pub(super) fn print_clusters<W: Write>(out: &mut W, analysis: &ClusterAnalysis) -> io::Result<()> {
    print_title(out, "Clusters")?;
    let t = &analysis.thresholds;
    writeln!(
        out,
        "  Confidence Q30/Q70: {:.3} / {:.3}   Adjusted time Q30/Q70: {:.2}h / {:.2}h",
        t.confidence_low, t.confidence_high, t.adjusted_low, t.adjusted_high
    )?;
    writeln!(
        out,
        "  {:<16} {:>8} {:>10} {:>10} {:>10}",
        "Cluster", "Games", "Adj(h)", "Conf", "Polls"
    )?;
    print_separator(out, 58)?;
    for summary in &analysis.clusters {
        writeln!(
            out,
            "  {:<16} {:>8} {:>10.2} {:>10.3} {:>10.1}",
            summary.cluster.to_str(),
            summary.count,
            summary.mean_adjusted_time,
            summary.mean_confidence,
            summary.mean_polls,
        )?;
    }
    Ok(())
}

pub(super) fn print_explore<W: Write>(
    out: &mut W,
    min_polls: u32,
    point: Option<&SensitivityPoint>,
) -> io::Result<()> {
    print_title(out, &format!("Games with at least {min_polls} polls"))?;
    let Some(point) = point else {
        return writeln!(out, "  Not enough games at this threshold.");
    };
    writeln!(
        out,
        "  Games                      : {} ({:.1}% retained)",
        point.game_count, point.pct_retained
    )?;
    writeln!(
        out,
        "  Weighted median (reported) : {:.2}h",
        point.weighted_raw_median
    )?;
    writeln!(
        out,
        "  Weighted median (adjusted) : {:.2}h",
        point.weighted_adjusted_median
    )?;
    writeln!(
        out,
        "  Gap                        : {:.2}h ({:.1}% noise)",
        point.gap, point.pct_noise
    )
}

pub(super) fn print_sample<W: Write>(out: &mut W, points: &[SamplePoint]) -> io::Result<()> {
    print_title(out, &format!("Sample ({} games)", points.len()))?;
    writeln!(
        out,
        "  {:<NAME_WIDTH$} {:>8} {:>8} {:>6} {:>7} {:<16}",
        "Game", "Hours", "Adj(h)", "Conf", "Polls", "Zone"
    )?;
    print_separator(out, NAME_WIDTH + 50)?;
    for point in points {
        writeln!(
            out,
            "  {:<NAME_WIDTH$} {:>8.1} {:>8.2} {:>6.2} {:>7} {:<16}",
            fit_name(&point.name),
            point.main_story_hours,
            point.adjusted_time_cost,
            point.confidence_score,
            point.main_story_poll_count,
            point.zone.to_str(),
        )?;
    }
    Ok(())
}
