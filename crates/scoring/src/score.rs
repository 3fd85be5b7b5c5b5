//! Segment scoring — normalize aggregated metrics against the per-column
//! maximum and blend them into one overall score.

use audience_core::types::{ScoredSegment, SegmentStats};
use tracing::debug;

const ENGAGEMENT_WEIGHT: f64 = 0.5;
const PROFITABILITY_WEIGHT: f64 = 0.5;

/// Attach normalized scores to each segment's stats.
///
/// `conv_pot` and `profitability` divide each column by its maximum over
/// the present segments, so both land in [0, 1] and the best segment per
/// column scores 1.0. A single present segment therefore scores 1.0 on
/// both. If a column's maximum is not strictly positive the division is
/// undefined; every segment then gets 0.0 for that column. Empty stats
/// yield an empty result.
pub fn score_segments(stats: &[SegmentStats]) -> Vec<ScoredSegment> {
    if stats.is_empty() {
        return Vec::new();
    }

    let max_engagement = column_max(stats.iter().map(|s| s.avg_engagement));
    let max_profitability = column_max(stats.iter().map(|s| s.avg_profitability));

    let scored: Vec<ScoredSegment> = stats
        .iter()
        .map(|s| {
            let conv_pot = normalize(s.avg_engagement, max_engagement);
            let profitability = normalize(s.avg_profitability, max_profitability);
            ScoredSegment {
                segment: s.segment,
                size: s.size,
                avg_engagement: s.avg_engagement,
                avg_profitability: s.avg_profitability,
                conv_pot,
                profitability,
                overall_score: ENGAGEMENT_WEIGHT * conv_pot
                    + PROFITABILITY_WEIGHT * profitability,
            }
        })
        .collect();

    debug!(segments = scored.len(), "scoring complete");
    scored
}

/// Column maximum. `f64::max` skips NaN operands, so a NaN mean cannot
/// poison the column.
fn column_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}
