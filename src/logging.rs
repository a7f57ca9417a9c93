use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_FILTER: &str = "focustimer=info";

/// Pick the log filter: RUST_LOG, then config, then the default
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send logs to a file; the terminal belongs to the dashboard
pub fn init_file_logging(path: &Path, configured: Option<&str>) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}

/// Log warnings and errors to stderr, for one-shot commands
pub fn init_stderr_logging(configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
