//! Configuration
//!
//! Every field has a default, so an empty YAML document (or a file that sets
//! only a few keys) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastGraphConfig {
    pub loader: LoaderConfig,
    pub survey: SurveyConfig,
}

impl CastGraphConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Record format settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field separator between the grouping and its subjects
    pub delimiter: char,
    /// Strip surrounding whitespace from every field
    pub trim: bool,
    /// Ignore lines that are empty after trimming
    pub skip_blank_lines: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: '/',
            trim: true,
            skip_blank_lines: true,
        }
    }
}

/// Budgeted survey settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Wall-clock budget; no new query starts after it runs out
    pub budget_secs: u64,
    /// Run queries on the rayon thread pool
    pub parallel: bool,
}

impl SurveyConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_secs(self.budget_secs)
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            budget_secs: 60,
            parallel: false,
        }
    }
}
