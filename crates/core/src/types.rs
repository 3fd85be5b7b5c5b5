//! Shared data types for the audience strategy pipeline.

use serde::{Deserialize, Serialize};

/// One customer cart-abandonment event as supplied by the ingestion
/// boundary. All fields are required; a row missing any of them never
/// reaches the classifier (see [`crate::error::AudienceError::Schema`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRow {
    /// Opaque identifier, used only for counting. Uniqueness is not
    /// required for correctness.
    pub user_id: String,
    /// Average order value in currency units, non-negative.
    pub avg_order_value: f64,
    /// Interaction-intensity proxy, expected in [0, 1] but not enforced.
    pub engagement_score: f64,
    /// Expected-margin proxy, expected in [0, 1] but not enforced.
    pub profitability_score: f64,
}

/// The fixed audience buckets. Declaration order matches rule evaluation
/// order, and `Ord` follows it, so grouped output sorts the way the rules
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Segment {
    #[serde(rename = "High AOV Abandoners")]
    HighAovAbandoners,
    #[serde(rename = "Mid AOV Engaged")]
    MidAovEngaged,
    #[serde(rename = "Other Bucket")]
    OtherBucket,
}

impl Segment {
    /// All segments, in rule order.
    pub const ALL: [Segment; 3] = [
        Segment::HighAovAbandoners,
        Segment::MidAovEngaged,
        Segment::OtherBucket,
    ];

    /// Human-readable name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Segment::HighAovAbandoners => "High AOV Abandoners",
            Segment::MidAovEngaged => "Mid AOV Engaged",
            Segment::OtherBucket => "Other Bucket",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An input row with its assigned segment. Exactly one segment per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    pub row: InputRow,
    pub segment: Segment,
}

/// Aggregated metrics for one segment present in the data. Segments with
/// no matching rows produce no stats entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStats {
    pub segment: Segment,
    pub size: u64,
    pub avg_engagement: f64,
    pub avg_profitability: f64,
}

/// Segment stats with normalized scores attached. `conv_pot` and
/// `profitability` are each in [0, 1]; `overall_score` is their
/// equal-weighted blend, hence also in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSegment {
    pub segment: Segment,
    pub size: u64,
    pub avg_engagement: f64,
    pub avg_profitability: f64,
    pub conv_pot: f64,
    pub profitability: f64,
    pub overall_score: f64,
}

/// One row of the final strategy table. Field order and serialized names
/// are part of the contract with the export collaborator and must not
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Segment Name")]
    pub segment_name: String,
    #[serde(rename = "Rules Applied")]
    pub rules_applied: String,
    #[serde(rename = "Size")]
    pub size: u64,
    #[serde(rename = "Conv_Pot")]
    pub conv_pot: f64,
    #[serde(rename = "Profitability")]
    pub profitability: f64,
    #[serde(rename = "Overall Score")]
    pub overall_score: f64,
    #[serde(rename = "Valid")]
    pub valid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_serialized_names_match_display() {
        for segment in Segment::ALL {
            let json = serde_json::to_value(segment).unwrap();
            assert_eq!(json.as_str().unwrap(), segment.name());
        }
    }

    #[test]
    fn test_segment_order_follows_rule_order() {
        assert!(Segment::HighAovAbandoners < Segment::MidAovEngaged);
        assert!(Segment::MidAovEngaged < Segment::OtherBucket);
    }

    #[test]
    fn test_report_row_column_names() {
        let row = ReportRow {
            segment_name: "Other Bucket".to_string(),
            rules_applied: "ELSE".to_string(),
            size: 1,
            conv_pot: 1.0,
            profitability: 1.0,
            overall_score: 1.0,
            valid: "No".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "Segment Name",
            "Rules Applied",
            "Size",
            "Conv_Pot",
            "Profitability",
            "Overall Score",
            "Valid",
        ] {
            assert!(keys.contains(&expected), "missing column {expected}");
        }
    }
}
