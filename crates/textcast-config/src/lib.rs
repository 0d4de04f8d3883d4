//! # textcast-config
//!
//! Layered configuration loading for textcast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TEXTCAST_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `textcast.toml`
//! 4. User-level `~/.config/textcast/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TEXTCAST_SYNTHESIS__VOICE_ID` -> `synthesis.voice_id`,
//! `TEXTCAST_ANALYSIS__INDEX_ID` -> `analysis.index_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use textcast_config::TextcastConfig;
//!
//! let config = TextcastConfig::load_with_dotenv(None).expect("config");
//! config.ensure_ready().expect("analysis and synthesis configured");
//! println!("voice: {}", config.synthesis.voice_id);
//! ```

mod analysis;
mod aws;
mod error;
mod general;
mod storage;
mod synthesis;

pub use analysis::AnalysisConfig;
pub use aws::AwsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use synthesis::SynthesisConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-local config, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "textcast.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TEXTCAST_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextcastConfig {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TextcastConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type, or [`ConfigError::InvalidValue`] if `explicit` names a missing file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: "--config".into(),
                    reason: format!("file not found: {}", path.display()),
                });
            }
        }
        Self::figment(explicit).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if any) before building the
    /// figment, so its values feed the environment layer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check that every section needed by `tcast process` is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the first missing section,
    /// or [`ConfigError::InvalidValue`] for a local backend without a root.
    pub fn ensure_ready(&self) -> Result<(), ConfigError> {
        if !self.analysis.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "analysis".into(),
            });
        }
        if !self.synthesis.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "synthesis".into(),
            });
        }
        if self.storage.backend == StorageBackend::Local && self.storage.local_root.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.local_root".into(),
                reason: "required when storage.backend = \"local\"".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("textcast").join("config.toml"))
    }
}
