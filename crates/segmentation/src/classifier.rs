//! Segment classifier — applies the rule table to input rows.

use audience_core::types::{ClassifiedRow, InputRow, Segment};
use tracing::debug;

use crate::rules::RULES;

/// Assign a segment to a single row. First matching rule wins; the table's
/// catch-all guarantees a result for every row, including rows with NaN
/// metrics.
pub fn classify_row(row: &InputRow) -> Segment {
    for rule in &RULES {
        if (rule.predicate)(row) {
            return rule.segment;
        }
    }
    // Unreachable: the final rule matches unconditionally.
    Segment::OtherBucket
}

/// Classify a batch of rows, preserving input order. The input is not
/// mutated; each output row carries a copy of its source row.
pub fn classify_rows(rows: &[InputRow]) -> Vec<ClassifiedRow> {
    let classified: Vec<ClassifiedRow> = rows
        .iter()
        .map(|row| ClassifiedRow {
            row: row.clone(),
            segment: classify_row(row),
        })
        .collect();
    debug!(rows = classified.len(), "classification complete");
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(aov: f64, engagement: f64) -> InputRow {
        InputRow {
            user_id: "u1".to_string(),
            avg_order_value: aov,
            engagement_score: engagement,
            profitability_score: 0.5,
        }
    }

    #[test]
    fn test_high_aov_boundary_is_strict() {
        // Exactly 3000 fails rule 1 and satisfies rule 2's range check.
        assert_eq!(classify_row(&row(3000.0, 0.9)), Segment::MidAovEngaged);
        assert_eq!(classify_row(&row(3001.0, 0.9)), Segment::HighAovAbandoners);
    }

    #[test]
    fn test_mid_aov_lower_boundary_is_strict() {
        // Exactly 1000 fails rule 2 even with high engagement.
        assert_eq!(classify_row(&row(1000.0, 0.9)), Segment::OtherBucket);
        assert_eq!(classify_row(&row(1000.01, 0.9)), Segment::MidAovEngaged);
    }

    #[test]
    fn test_engagement_boundary_is_strict() {
        assert_eq!(classify_row(&row(1500.0, 0.5)), Segment::OtherBucket);
        assert_eq!(classify_row(&row(1500.0, 0.51)), Segment::MidAovEngaged);
    }

    #[test]
    fn test_low_aov_falls_through() {
        assert_eq!(classify_row(&row(500.0, 0.99)), Segment::OtherBucket);
        assert_eq!(classify_row(&row(0.0, 0.0)), Segment::OtherBucket);
    }

    #[test]
    fn test_nan_routes_to_other_bucket() {
        assert_eq!(classify_row(&row(f64::NAN, 0.9)), Segment::OtherBucket);
        assert_eq!(classify_row(&row(1500.0, f64::NAN)), Segment::OtherBucket);
    }

    #[test]
    fn test_totality_over_extreme_inputs() {
        // Every row maps to one of the three buckets; no panics, no gaps.
        for aov in [f64::NEG_INFINITY, -1.0, 0.0, 999.9, 5000.0, f64::INFINITY, f64::NAN] {
            for eng in [f64::NEG_INFINITY, 0.0, 0.5, 1.0, f64::NAN] {
                let segment = classify_row(&row(aov, eng));
                assert!(Segment::ALL.contains(&segment));
            }
        }
    }

    #[test]
    fn test_batch_preserves_order_and_count() {
        let rows = vec![row(5000.0, 0.9), row(1200.0, 0.6), row(100.0, 0.1)];
        let classified = classify_rows(&rows);
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].segment, Segment::HighAovAbandoners);
        assert_eq!(classified[1].segment, Segment::MidAovEngaged);
        assert_eq!(classified[2].segment, Segment::OtherBucket);
        assert_eq!(classified[1].row, rows[1]);
    }
}
