use clap::Args;
use timerespect_analysis::cluster::cluster_analysis;

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct ClustersArg {
    #[clap(flatten)]
    pub common: CommonArg,
}

pub(crate) fn run(arg: &ClustersArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    arg.common.emit(&cluster_analysis(&enriched), table::print_clusters)
}
