//! Environment-backed configuration.
//!
//! All settings have defaults. Override with `SEMALIGN_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::ranking::DEFAULT_TOP_K;

/// Process configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SEMALIGN_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the sentence-embedding model files. `None` runs the
    /// embedder in stub mode.
    pub model_dir: Option<PathBuf>,

    /// Default target-fields JSON path. Default: `./target_fields.json`.
    pub targets_path: PathBuf,

    /// Default number of top matches to return. Default: `3`.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: None,
            targets_path: PathBuf::from("./target_fields.json"),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_MODEL_DIR: &'static str = "SEMALIGN_MODEL_DIR";
    const ENV_TARGETS_PATH: &'static str = "SEMALIGN_TARGETS_PATH";
    const ENV_TOP_K: &'static str = "SEMALIGN_TOP_K";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let targets_path =
            Self::parse_path_from_env(Self::ENV_TARGETS_PATH, defaults.targets_path);
        let top_k = Self::parse_top_k_from_env(defaults.top_k)?;

        Ok(Self {
            model_dir,
            targets_path,
            top_k,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_optional_path_from_env(name: &'static str) -> Option<PathBuf> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_path_from_env(name: &'static str, default: PathBuf) -> PathBuf {
        Self::parse_optional_path_from_env(name).unwrap_or(default)
    }

    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        let Ok(raw) = env::var(Self::ENV_TOP_K) else {
            return Ok(default);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(default);
        }

        let top_k = raw
            .parse::<usize>()
            .map_err(|source| ConfigError::TopKParseError {
                value: raw.to_string(),
                source,
            })?;

        if top_k == 0 {
            return Err(ConfigError::InvalidTopK {
                value: raw.to_string(),
            });
        }

        Ok(top_k)
    }
}
