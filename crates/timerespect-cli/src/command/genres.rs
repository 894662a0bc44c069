use clap::Args;
use timerespect_analysis::genre::{DEFAULT_MIN_GENRE_GAMES, genre_analysis};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct GenresArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Minimum number of games for a genre to be listed
    #[arg(long, default_value_t = DEFAULT_MIN_GENRE_GAMES)]
    pub min_games: usize,
}

pub(crate) fn run(arg: &GenresArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let genres = genre_analysis(&enriched, arg.min_games);
    arg.common.emit(genres.as_slice(), table::print_genres)
}
