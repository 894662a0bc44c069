use std::io::Write as _;

use clap::Args;
use serde::Serialize;
use timerespect_analysis::distribution::{
    TierCount, ZoneCount, tier_distribution, zone_distribution,
};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct ZonesArg {
    #[clap(flatten)]
    pub common: CommonArg,
}

#[derive(Debug, Serialize)]
struct ZonesOutput {
    zones: Vec<ZoneCount>,
    tiers: Vec<TierCount>,
}

pub(crate) fn run(arg: &ZonesArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let output = ZonesOutput {
        zones: zone_distribution(&enriched),
        tiers: tier_distribution(&enriched),
    };
    arg.common.emit(&output, |out, output| {
        table::print_zones(out, &output.zones)?;
        writeln!(out)?;
        table::print_tiers(out, &output.tiers)
    })
}
