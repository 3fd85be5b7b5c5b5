//! Pipeline entry point — classify, aggregate, score, and assemble in one
//! synchronous pass.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use audience_core::error::AudienceResult;
use audience_core::types::{InputRow, ReportRow};
use audience_scoring::{aggregate_segments, score_segments};
use audience_segmentation::classify_rows;

use crate::assembler::assemble_report;

/// Output of one pipeline run. The export collaborator serializes `rows`
/// only; the surrounding fields describe the run itself.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub generated_at: DateTime<Utc>,
    pub input_rows: usize,
    pub rows: Vec<ReportRow>,
}

/// Run the full pipeline over an input table. Stages execute strictly in
/// sequence and each consumes the previous stage's complete output; the
/// input is never mutated. Zero input rows is a defined path and produces
/// an empty report.
pub fn run_pipeline(rows: &[InputRow]) -> AudienceResult<StrategyReport> {
    let classified = classify_rows(rows);
    let stats = aggregate_segments(&classified);
    let scored = score_segments(&stats);
    let report_rows = assemble_report(&scored)?;

    info!(
        input_rows = rows.len(),
        segments = report_rows.len(),
        "pipeline run complete"
    );

    Ok(StrategyReport {
        generated_at: Utc::now(),
        input_rows: rows.len(),
        rows: report_rows,
    })
}
