//! Audience Strategy — segments cart-abandonment events into audience
//! buckets and emits a ranked per-segment scorecard.
//!
//! Main entry point: reads the input CSV, runs the pipeline, writes the
//! strategy table.

mod io;

use std::path::PathBuf;

use audience_core::config::AppConfig;
use audience_reporting::run_pipeline;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "audience-strategy")]
#[command(about = "Cart-abandonment audience segmentation and scoring")]
#[command(version)]
struct Cli {
    /// Input CSV with cart-abandonment events (overrides config)
    #[arg(long, env = "AUDIENCE_STRATEGY__INPUT_PATH")]
    input: Option<String>,

    /// Output CSV for the strategy table (overrides config)
    #[arg(long, env = "AUDIENCE_STRATEGY__OUTPUT_PATH")]
    output: Option<String>,

    /// Skip printing the strategy table to stdout
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

/// Tracing filter for this run: RUST_LOG wins, otherwise the configured
/// filter applies.
fn resolve_log_filter(rust_log: Option<&str>, config: &AppConfig) -> String {
    match rust_log {
        Some(filter) if !filter.is_empty() => filter.to_string(),
        _ => config.log_filter.clone(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration before tracing init so the configured filter can
    // take effect; a load failure is reported once the subscriber is up.
    let (mut config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(resolve_log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            &config,
        )))
        .init();

    if let Some(e) = config_err {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    // Apply CLI overrides
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    info!(
        input = %config.input_path,
        output = %config.output_path,
        "Audience Strategy starting"
    );

    let rows = io::read_input(&PathBuf::from(&config.input_path))?;
    info!(rows = rows.len(), "Input loaded");

    let report = run_pipeline(&rows)?;

    io::write_report(&PathBuf::from(&config.output_path), &report.rows)?;
    info!(
        segments = report.rows.len(),
        output = %config.output_path,
        "Strategy table written"
    );

    if !cli.quiet {
        print!("{}", io::render_table(&report.rows));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_configured_filter() {
        let config = AppConfig::default();
        assert_eq!(resolve_log_filter(Some("debug"), &config), "debug");
    }

    #[test]
    fn test_configured_filter_applies_without_rust_log() {
        let mut config = AppConfig::default();
        config.log_filter = "audience_reporting=trace".to_string();
        assert_eq!(
            resolve_log_filter(None, &config),
            "audience_reporting=trace"
        );
    }

    #[test]
    fn test_empty_rust_log_falls_back_to_config() {
        let config = AppConfig::default();
        assert_eq!(resolve_log_filter(Some(""), &config), config.log_filter);
    }
}
