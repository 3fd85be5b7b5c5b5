use thiserror::Error;

use crate::types::Segment;

pub type AudienceResult<T> = Result<T, AudienceError>;

#[derive(Error, Debug)]
pub enum AudienceError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required field is missing or non-numeric in a numeric column.
    /// Raised by the ingestion boundary before classification; the run
    /// aborts with no partial results.
    #[error("Input schema error: {0}")]
    Schema(String),

    /// The rule table does not cover a segment the classifier produced.
    /// Internal-consistency defect, not a data error.
    #[error("No rule registered for segment '{0}'")]
    UnknownSegment(Segment),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AudienceError::Config("missing value".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing value");
    }

    #[test]
    fn test_unknown_segment_names_the_segment() {
        let err = AudienceError::UnknownSegment(Segment::OtherBucket);
        assert!(err.to_string().contains("Other Bucket"));
    }
}
