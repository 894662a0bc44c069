use clap::Args;
use timerespect_analysis::sensitivity::explore_threshold;

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExploreArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Keep only games with at least this many polls
    #[arg(long)]
    pub min_polls: u32,
}

pub(crate) fn run(arg: &ExploreArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let point = explore_threshold(&enriched, arg.min_polls);
    arg.common.emit(&point, |out, point| {
        table::print_explore(out, arg.min_polls, point.as_ref())
    })
}
