//! CSV boundary — ingestion of cart-abandonment events and export of the
//! strategy table. Parsing failures abort the run before classification.

use std::path::Path;

use audience_core::error::{AudienceError, AudienceResult};
use audience_core::types::{InputRow, ReportRow};

/// Read input rows from a CSV file with a `user_id,avg_order_value,
/// engagement_score,profitability_score` header. Any missing field or
/// non-numeric value in a numeric column is a schema error; no partial
/// result is returned.
pub fn read_input(path: &Path) -> AudienceResult<Vec<InputRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<InputRow>().enumerate() {
        let row = record.map_err(|e| {
            AudienceError::Schema(format!("row {}: {e}", index + 1))
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write the strategy table to a CSV file, headers and column order per
/// the export contract. An empty report writes the header row only.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> AudienceResult<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    // Header written explicitly so an empty report still carries it.
    writer.write_record([
        "Segment Name",
        "Rules Applied",
        "Size",
        "Conv_Pot",
        "Profitability",
        "Overall Score",
        "Valid",
    ])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Plain-text rendering of the strategy table for stdout.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:<40} {:>6} {:>10} {:>14} {:>14} {:>6}\n",
        "Segment Name", "Rules Applied", "Size", "Conv_Pot", "Profitability", "Overall Score", "Valid"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<22} {:<40} {:>6} {:>10.4} {:>14.4} {:>14.4} {:>6}\n",
            row.segment_name,
            row.rules_applied,
            row.size,
            row.conv_pot,
            row.profitability,
            row.overall_score,
            row.valid
        ));
    }
    out
}
