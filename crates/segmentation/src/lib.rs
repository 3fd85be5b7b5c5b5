//! Row-level audience segmentation — ordered rule evaluation assigning
//! exactly one segment to every cart-abandonment event.

pub mod classifier;
pub mod rules;

pub use classifier::{classify_row, classify_rows};
pub use rules::{description_for, SegmentRule, RULES};
