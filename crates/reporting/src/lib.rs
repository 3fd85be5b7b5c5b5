//! Audience strategy reporting — assembles the final scorecard table and
//! composes the full classification pipeline.

pub mod assembler;
pub mod pipeline;

pub use assembler::{assemble_report, MIN_VALID_SEGMENT_SIZE};
pub use pipeline::{run_pipeline, StrategyReport};
