//! Loading service configuration (level thresholds + prompt templates) from TOML.
//!
//! Expected schema (every table and key is optional):
//!
//! ```toml
//! [level]
//! advanced_min_score = 7.0
//! advanced_max_time = 80.0
//! beginner_max_score = 3.0
//! beginner_min_time = 300.0
//!
//! [prompts]
//! doubt_chatbot = "Answer the student's question: {question}"
//! ```

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::level::{LevelPolicy, PolicyError};
use crate::prompts::Prompts;

pub const CONFIG_PATH_ENV: &str = "COURSEGEN_CONFIG_PATH";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub level: LevelPolicy,
  #[serde(default)]
  pub prompts: Prompts,
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse TOML: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("invalid [level] table: {0}")]
  Policy(#[from] PolicyError),
}

impl AppConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    let cfg: AppConfig = toml::from_str(s)?;
    cfg.level.validate()?;
    Ok(cfg)
  }
}

/// Load `AppConfig` from the file named by `COURSEGEN_CONFIG_PATH`.
/// Missing variable means defaults; any IO, parse or policy error is logged
/// and also falls back to defaults.
pub fn load_config_from_env() -> AppConfig {
  let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
    info!(target: "coursegen_backend", "No {} set; using built-in thresholds and prompts", CONFIG_PATH_ENV);
    return AppConfig::default();
  };
  match std::fs::read_to_string(&path) {
    Ok(s) => match AppConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "coursegen_backend", %path, "Loaded service config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "coursegen_backend", %path, error = %e, "Rejected TOML config; using defaults");
        AppConfig::default()
      }
    },
    Err(e) => {
      error!(target: "coursegen_backend", %path, error = %e, "Failed to read TOML config file; using defaults");
      AppConfig::default()
    }
  }
}
