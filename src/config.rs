use crate::domain::{TimerConfig, TimerError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Work phase length in minutes
    #[serde(default = "default_work_minutes")]
    pub work_minutes: i64,
    /// Break phase length in minutes
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
    /// Ring the bell when a work phase completes
    #[serde(default = "default_chime")]
    pub chime: bool,
    /// Where history and logs live. Defaults to ~/.focustimer
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Log filter directive, e.g. "focustimer=debug". RUST_LOG wins if set.
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_work_minutes() -> i64 {
    25
}

fn default_break_minutes() -> i64 {
    5
}

fn default_chime() -> bool {
    true
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            chime: default_chime(),
            data_dir: None,
            log_level: None,
        }
    }
}

impl FocusConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("focustimer")
            .join("config.toml"))
    }

    /// Load config from the default location. Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Fold command-line flags over the file settings
    pub fn apply_overrides(
        &mut self,
        work_minutes: Option<i64>,
        break_minutes: Option<i64>,
        silent: bool,
    ) {
        if let Some(minutes) = work_minutes {
            self.work_minutes = minutes;
        }
        if let Some(minutes) = break_minutes {
            self.break_minutes = minutes;
        }
        if silent {
            self.chime = false;
        }
    }

    /// Validated phase lengths
    pub fn timer_config(&self) -> Result<TimerConfig, TimerError> {
        TimerConfig::from_minutes(self.work_minutes, self.break_minutes)
    }
}
