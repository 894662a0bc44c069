use clap::Args;
use timerespect_analysis::illusion::{DEFAULT_ILLUSION_TOP_N, DEFAULT_MAX_POLLS, illusion_games};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct IllusionsArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Only consider games with fewer polls than this
    #[arg(long, default_value_t = DEFAULT_MAX_POLLS)]
    pub max_polls: u32,

    /// Number of games to list
    #[arg(long, default_value_t = DEFAULT_ILLUSION_TOP_N)]
    pub top: usize,
}

pub(crate) fn run(arg: &IllusionsArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let games = illusion_games(&enriched, arg.max_polls, arg.top);
    arg.common.emit(games.as_slice(), table::print_illusions)
}
