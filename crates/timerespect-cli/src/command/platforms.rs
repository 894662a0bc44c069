use clap::Args;
use timerespect_analysis::platform::{DEFAULT_MIN_PLATFORM_GAMES, platform_analysis};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct PlatformsArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Minimum number of games for a platform to be listed
    #[arg(long, default_value_t = DEFAULT_MIN_PLATFORM_GAMES)]
    pub min_games: usize,
}

pub(crate) fn run(arg: &PlatformsArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let platforms = platform_analysis(&enriched, arg.min_games);
    arg.common.emit(platforms.as_slice(), table::print_platforms)
}
