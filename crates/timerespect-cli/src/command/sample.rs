use clap::Args;
use timerespect_analysis::sample::{DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE, sample_points};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Maximum number of games to draw
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub size: usize,

    /// Random seed; the same seed and source always give the same sample
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SEED)]
    pub seed: u64,
}

pub(crate) fn run(arg: &SampleArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let points = sample_points(&enriched, arg.size, arg.seed);
    log::info!("Sampled {} of {} games (seed {})", points.len(), enriched.len(), arg.seed);
    arg.common.emit(points.as_slice(), table::print_sample)
}
