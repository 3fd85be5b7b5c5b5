//! Segment-level analytics — per-segment aggregation and max-normalized
//! scoring of the classified rows.

pub mod aggregate;
pub mod score;

pub use aggregate::aggregate_segments;
pub use score::score_segments;
