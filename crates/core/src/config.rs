use serde::Deserialize;

use crate::error::{AudienceError, AudienceResult};

/// Application configuration. Loaded from environment variables with the
/// prefix `AUDIENCE_STRATEGY__`; CLI flags override individual fields
/// after load.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// CSV file with cart-abandonment events.
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Destination for the strategy table.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_input_path() -> String {
    "cart_events.csv".to_string()
}

fn default_output_path() -> String {
    "audience_strategy.csv".to_string()
}

fn default_log_filter() -> String {
    "audience_strategy=info,audience_reporting=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> AudienceResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("AUDIENCE_STRATEGY")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| AudienceError::Config(e.to_string()))
    }
}
