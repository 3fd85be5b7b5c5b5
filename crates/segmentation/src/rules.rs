//! The fixed segmentation rule table — single source of truth for both
//! classification and the report's rule descriptions.

use audience_core::types::{InputRow, Segment};

/// One ordered segmentation rule. The predicate decides membership; the
/// description is the exact string the final report attaches to the
/// segment.
pub struct SegmentRule {
    pub segment: Segment,
    pub description: &'static str,
    pub predicate: fn(&InputRow) -> bool,
}

/// Rules in evaluation order; first match wins. The final rule matches
/// unconditionally, so evaluation is total. All numeric comparisons are
/// strict, and a NaN metric compares false everywhere, so rows with
/// undefined values fall through to the catch-all bucket.
pub const RULES: [SegmentRule; 3] = [
    SegmentRule {
        segment: Segment::HighAovAbandoners,
        description: "AOV > 3000",
        predicate: |row| row.avg_order_value > 3000.0,
    },
    SegmentRule {
        segment: Segment::MidAovEngaged,
        description: "1000 < AOV <= 3000 & Engagement > 0.5",
        predicate: |row| {
            row.avg_order_value > 1000.0
                && row.avg_order_value <= 3000.0
                && row.engagement_score > 0.5
        },
    },
    SegmentRule {
        segment: Segment::OtherBucket,
        description: "ELSE",
        predicate: |_| true,
    },
];

/// Rule description for a segment, or `None` if the table does not cover
/// it. A miss means the classifier and the table have drifted apart.
pub fn description_for(segment: Segment) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| rule.segment == segment)
        .map(|rule| rule.description)
}
