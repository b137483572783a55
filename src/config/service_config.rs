//! Service configuration: server, adjustment rule and preprocessing artifact.
//!
//! Every section carries `#[serde(default)]`, so an empty file is a valid
//! config equal to [`ServiceConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::adjustment::AdjustmentRule;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "GRADE_CONFIG";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the grade adjustment service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Grade adjustment thresholds and bounds
    #[serde(default)]
    pub rule: AdjustmentRule,

    /// Encoder/scaler artifact location
    #[serde(default)]
    pub preprocessing: PreprocessingConfig,
}

impl ServiceConfig {
    /// Load configuration using the standard search order.
    ///
    /// An explicit path is authoritative: failing to load it is an error.
    /// Files found through `$GRADE_CONFIG` or the working directory fall
    /// back to the next source with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_with(explicit, env_path.as_deref(), Path::new("."))
    }

    /// Search order of [`ServiceConfig::load`] with the environment lookup
    /// and working directory supplied by the caller.
    pub fn load_with(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), "Loaded config from --config");
            return Ok(config);
        }

        // 1. Check env var
        if let Some(p) = env_path {
            if p.exists() {
                match Self::load_from_file(p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {}", CONFIG_ENV_VAR);
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %p.display(), "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./grade_config.toml
        let local = cwd.join(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(path = %local.display(), "Loaded config from working directory");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load local config, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Run range checks, collecting every failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = super::validation::validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Serialize back to TOML (used for `--print-config`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, `HOST:PORT`
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

/// Preprocessing artifact configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingConfig {
    /// JSON file holding encoder classes and scaler range
    pub artifact_path: PathBuf,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from(defaults::PREPROCESSING_ARTIFACT),
        }
    }
}
