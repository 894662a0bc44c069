use std::io::Write as _;

use clap::Args;
use serde::Serialize;
use timerespect_analysis::{
    CleaningReport,
    insight::{CoreInsight, core_insight},
};

use crate::cache::TableCache;

use super::{CommonArg, table};

#[derive(Debug, Clone, Args)]
pub(crate) struct InsightArg {
    #[clap(flatten)]
    pub common: CommonArg,
}

#[derive(Debug, Serialize)]
struct InsightOutput<'a> {
    cleaning: Option<&'a CleaningReport>,
    insight: CoreInsight,
}

pub(crate) fn run(arg: &InsightArg, cache: &mut TableCache) -> anyhow::Result<()> {
    let enriched = cache.load(&arg.common.source, &arg.common.load_options())?;
    let output = InsightOutput {
        cleaning: enriched.cleaning(),
        insight: core_insight(&enriched),
    };
    arg.common.emit(&output, |out, output| {
        if let Some(report) = output.cleaning {
            table::print_cleaning(out, report)?;
            writeln!(out)?;
        }
        table::print_insight(out, &output.insight)
    })
}
