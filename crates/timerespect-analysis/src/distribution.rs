//! Counts of games per zone and per confidence tier

use serde::Serialize;

use crate::{enrich::EnrichedTable, ingest::percentage, tier::ConfidenceTier, zone::Zone};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCount {
    pub zone: Zone,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCount {
    pub tier: ConfidenceTier,
    pub poll_range: &'static str,
    pub count: usize,
    pub pct: f64,
}

/// Zones present in the table, by descending count.
///
/// Zones with equal counts keep their [`Zone::ALL`] order; absent zones are
/// omitted.
#[must_use]
pub fn zone_distribution(table: &EnrichedTable) -> Vec<ZoneCount> {
    let mut counts = Zone::ALL
        .iter()
        .map(|&zone| {
            let count = table.iter().filter(|g| g.zone == zone).count();
            ZoneCount {
                zone,
                count,
                pct: percentage(count, table.len()),
            }
        })
        .filter(|entry| entry.count > 0)
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Every tier in tier order, including empty ones.
#[must_use]
pub fn tier_distribution(table: &EnrichedTable) -> Vec<TierCount> {
    ConfidenceTier::ALL
        .iter()
        .map(|&tier| {
            let count = table.iter().filter(|g| g.confidence_tier == tier).count();
            TierCount {
                tier,
                poll_range: tier.poll_range(),
                count,
                pct: percentage(count, table.len()),
            }
        })
        .collect()
}
