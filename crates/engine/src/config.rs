//! Paginator configuration via `pagewalk.toml`
//!
//! Only limits are configurable. Missing fields take their defaults, so an
//! empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use pagewalk_core::{PageRequest, SortDirection};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "pagewalk.toml";

/// Default page size when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 20;

/// Largest page a request may ask for.
pub const DEFAULT_MAX_LIMIT: usize = 1000;

/// Errors loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("config file '{}': {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config file '{}': {reason}", .path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// Config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(String),

    /// Values are inconsistent
    #[error("invalid config: {reason}")]
    Invalid {
        /// What is wrong
        reason: String,
    },
}

/// Paginator configuration loaded from `pagewalk.toml`.
///
/// # Example
///
/// ```toml
/// default_limit = 20
/// max_limit = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used by [`PaginationConfig::request`].
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Requests with a larger limit are rejected.
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_max_limit() -> usize {
    DEFAULT_MAX_LIMIT
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl PaginationConfig {
    /// Check that the limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `default_limit` is zero or larger
    /// than `max_limit`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid {
                reason: "default_limit must be at least 1".to_string(),
            });
        }
        if self.default_limit > self.max_limit {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "default_limit ({}) exceeds max_limit ({})",
                    self.default_limit, self.max_limit
                ),
            });
        }
        Ok(())
    }

    /// First-page request using the configured default limit
    pub fn request(&self, sort_column: impl Into<String>, direction: SortDirection) -> PageRequest {
        PageRequest::new(sort_column, direction, self.default_limit)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# pagewalk configuration
#
# Page size used when a request does not specify one.
default_limit = 20

# Requests asking for more items per page are rejected.
max_limit = 1000
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: PaginationConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
