use clap::Args;
use timerespect_analysis::leaderboard::{DEFAULT_BOTTOM_N, DEFAULT_TOP_N, trs_leaderboard};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct LeaderboardArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Number of highest scoring games to list
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Number of lowest scoring games to list
    #[arg(long, default_value_t = DEFAULT_BOTTOM_N)]
    pub bottom: usize,
}

pub(crate) fn run(arg: &LeaderboardArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let board = trs_leaderboard(&enriched, arg.top, arg.bottom);
    arg.common.emit(&board, table::print_leaderboard)
}
