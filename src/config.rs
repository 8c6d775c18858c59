//! Configuration handling for the coupon editor

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const DEFAULT_LOG_FILTER: &str = "coupon_form=info";

/// User configuration for the editor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// chrono format string used to render the due date
    pub date_format: Option<String>,
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "coupon", "coupon-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
