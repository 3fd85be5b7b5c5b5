//! Report assembly — attaches rule descriptions and the validity flag,
//! and projects scored segments into the final column layout.

use audience_core::error::{AudienceError, AudienceResult};
use audience_core::types::{ReportRow, ScoredSegment};
use audience_segmentation::rules::description_for;

/// Segments below this size are flagged `Valid = "No"`. A demo-quality
/// heuristic, not a statistically derived cutoff.
pub const MIN_VALID_SEGMENT_SIZE: u64 = 10;

/// Project scored segments into [`ReportRow`]s. The rule description comes
/// from the segmentation rule table; a segment the table does not cover is
/// an internal-consistency defect and fails the whole run.
pub fn assemble_report(scored: &[ScoredSegment]) -> AudienceResult<Vec<ReportRow>> {
    scored
        .iter()
        .map(|s| {
            let rules_applied = description_for(s.segment)
                .ok_or(AudienceError::UnknownSegment(s.segment))?;
            Ok(ReportRow {
                segment_name: s.segment.name().to_string(),
                rules_applied: rules_applied.to_string(),
                size: s.size,
                conv_pot: s.conv_pot,
                profitability: s.profitability,
                overall_score: s.overall_score,
                valid: if s.size >= MIN_VALID_SEGMENT_SIZE {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                },
            })
        })
        .collect()
}
