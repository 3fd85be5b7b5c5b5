//! Per-segment aggregation — group classified rows and compute counts and
//! metric means.

use std::collections::BTreeMap;

use audience_core::types::{ClassifiedRow, Segment, SegmentStats};
use tracing::debug;

#[derive(Default)]
struct Accumulator {
    size: u64,
    engagement_sum: f64,
    profitability_sum: f64,
}

/// Group rows by segment and compute size and arithmetic means per group.
/// Only segments present in the input produce a stats entry; output is
/// sorted in rule order (the `Ord` on [`Segment`]), which is stable
/// run-to-run. Empty input yields an empty vector.
pub fn aggregate_segments(rows: &[ClassifiedRow]) -> Vec<SegmentStats> {
    let mut groups: BTreeMap<Segment, Accumulator> = BTreeMap::new();

    for classified in rows {
        let acc = groups.entry(classified.segment).or_default();
        acc.size += 1;
        acc.engagement_sum += classified.row.engagement_score;
        acc.profitability_sum += classified.row.profitability_score;
    }

    let stats: Vec<SegmentStats> = groups
        .into_iter()
        .map(|(segment, acc)| SegmentStats {
            segment,
            size: acc.size,
            avg_engagement: acc.engagement_sum / acc.size as f64,
            avg_profitability: acc.profitability_sum / acc.size as f64,
        })
        .collect();

    debug!(segments = stats.len(), "aggregation complete");
    stats
}
