use clap::Args;
use timerespect_analysis::sensitivity::{DEFAULT_THRESHOLDS, sensitivity_analysis};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct SensitivityArg {
    #[clap(flatten)]
    pub common: CommonArg,

    /// Minimum poll counts to evaluate (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_THRESHOLDS)]
    pub thresholds: Vec<u32>,
}

pub(crate) fn run(arg: &SensitivityArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let points = sensitivity_analysis(&enriched, &arg.thresholds);
    arg.common.emit(points.as_slice(), table::print_sensitivity)
}
