//! Configuration loading
//!
//! Settings live in `~/.config/tasklens/config.toml`. The location can be
//! overridden with `--config PATH` or the `TASKLENS_CONFIG` environment
//! variable. A missing global file means defaults; a missing explicit file
//! is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::ports::DEFAULT_LOCALE;
use crate::core::services::{ExtractionSettings, RiskSettings};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TASKLENS_CONFIG";

const APP_DIR: &str = "tasklens";
const CONFIG_FILE: &str = "config.toml";

/// Complete tasklens configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction pipeline settings
    pub extraction: ExtractionConfig,
    /// Risk assessor settings
    pub risk: RiskConfig,
    /// Validation oracle settings
    pub oracle: OracleConfig,
    /// Historical store settings
    pub history: HistoryConfig,
}

/// `[extraction]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Locale handed to the date parser
    pub locale: String,
    /// Attach entity annotations to candidates
    pub entities: bool,
    /// Per-candidate oracle timeout
    pub oracle_timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            entities: true,
            oracle_timeout_secs: 10,
        }
    }
}

/// `[risk]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Similarity a past task must exceed to count as a repeat
    pub similarity_threshold: f64,
    /// Past tasks compared per assessment
    pub history_limit: usize,
    /// Per-query store timeout
    pub store_timeout_secs: u64,
    /// Score negative sentiment
    pub sentiment: bool,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            history_limit: 10,
            store_timeout_secs: 5,
            sentiment: true,
        }
    }
}

/// `[oracle]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Consult the oracle (needs the `llm` feature)
    pub enabled: bool,
    /// Server URL
    pub base_url: String,
    /// Model name
    pub model: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        }
    }
}

/// `[history]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// JSON snapshot of past tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Default config file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    /// Load and validate the file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Config file in effect: explicit path, then `TASKLENS_CONFIG`, then
    /// the default location if it exists
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let path = Self::default_path();
        path.exists().then_some(path)
    }

    /// Load the config in effect, or defaults when there is none
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::locate(explicit) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("no config file, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Reject settings that would make runs meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.oracle_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("oracle"));
        }
        self.risk_settings().validate()
    }

    /// Pipeline settings derived from `[extraction]`
    #[must_use]
    pub fn extraction_settings(&self) -> ExtractionSettings {
        ExtractionSettings {
            locale: self.extraction.locale.clone(),
            oracle_timeout: Duration::from_secs(self.extraction.oracle_timeout_secs),
        }
    }

    /// Assessor settings derived from `[risk]`
    #[must_use]
    pub const fn risk_settings(&self) -> RiskSettings {
        RiskSettings {
            similarity_threshold: self.risk.similarity_threshold,
            history_limit: self.risk.history_limit,
            store_timeout: Duration::from_secs(self.risk.store_timeout_secs),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
