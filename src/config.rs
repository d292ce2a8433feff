// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LinkHubError, Result};

pub const CONFIG_ENV_VAR: &str = "LINKHUB_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./linkhub.yaml";

/// Which fallback screen the root error boundary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    #[default]
    Links,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display_name: String,
    pub taglines: Vec<String>,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub fallback: FallbackKind,
    pub haptics: bool,
    pub frame_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: "Chiesa Anugrah Dwitama".to_string(),
            taglines: vec![
                "Welcome to my digital universe! 🌟".to_string(),
                "Connect with me across all platforms".to_string(),
            ],
            db_path: PathBuf::from("./db/linkhub.db"),
            log_dir: PathBuf::from("./logs"),
            fallback: FallbackKind::Links,
            haptics: true,
            frame_rate: 30.0,
        }
    }
}

impl AppConfig {
    /// Load from `$LINKHUB_CONFIG`, else `./linkhub.yaml`. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.frame_rate > 0.0 && self.frame_rate <= 240.0) {
            return Err(LinkHubError::InvalidConfig(format!(
                "frame_rate must be in (0, 240], got {}",
                self.frame_rate
            )));
        }
        if self.display_name.trim().is_empty() {
            return Err(LinkHubError::InvalidConfig("display_name must not be empty".to_string()));
        }
        Ok(())
    }
}
