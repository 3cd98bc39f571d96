//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load `explicit` when given, otherwise search the default locations.
    ///
    /// An explicit file that fails to load is an error. Default locations
    /// that fail are skipped and reported in [`Resolved::skipped`], since
    /// logging is not set up yet when this runs.
    pub fn resolve(explicit: Option<&Path>) -> Result<Resolved, ConfigError> {
        match explicit {
            Some(path) => Ok(Resolved {
                config: Self::load_with_env(path)?,
                source: Some(path.to_path_buf()),
                skipped: Vec::new(),
            }),
            None => Ok(Self::load_first(&default_paths())),
        }
    }

    /// Load the first candidate that exists and parses, or fall back to
    /// defaults with environment overrides
    pub fn load_first(candidates: &[PathBuf]) -> Resolved {
        let mut skipped = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return Resolved { config, source: Some(path.clone()), skipped };
                }
                Err(e) => skipped.push(e),
            }
        }

        Resolved { config: Self::from_env(), source: None, skipped }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ACTIVITY_BOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("ACTIVITY_BOARD_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = Some(secs);
            }
        }

        if let Ok(level) = std::env::var("ACTIVITY_BOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ACTIVITY_BOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where the configuration came from
#[derive(Debug)]
pub struct Resolved {
    pub config: Config,
    /// File the config was read from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Files found but not loadable, in search order
    pub skipped: Vec<ConfigError>,
}

/// Default config file locations, most specific first
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("activity-board").join("config.toml"));
    }
    paths.push(PathBuf::from("/etc/activity-board/config.toml"));
    paths.push(PathBuf::from("./config.toml"));
    paths
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity Board Configuration
#
# Environment variables override these settings:
# - ACTIVITY_BOARD_API_URL
# - ACTIVITY_BOARD_REQUEST_TIMEOUT
# - ACTIVITY_BOARD_LOG_LEVEL
# - ACTIVITY_BOARD_LOG_FORMAT

[api]
# Base URL of the activities backend
base_url = "http://localhost:8000"

# Request timeout in seconds (requests never time out when unset)
# request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout(), None);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://board.test\"\nrequest_timeout_secs = 3").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://board.test");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/activity-board.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_skips_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\nbase_url = ").unwrap();
        std::fs::write(&good, "[logging]\nlevel = \"debug\"\n").unwrap();

        let resolved = Config::load_first(&[dir.path().join("missing.toml"), broken.clone(), good.clone()]);

        assert_eq!(resolved.source, Some(good));
        assert_eq!(resolved.skipped.len(), 1);
        assert!(matches!(
            &resolved.skipped[0],
            ConfigError::Parse { path, .. } if path == &broken
        ));
    }

    #[test]
    fn test_load_first_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = Config::load_first(&[dir.path().join("config.toml")]);
        assert_eq!(resolved.source, None);
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn test_resolve_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, "[api\n").unwrap();
        assert!(matches!(
            Config::resolve(Some(path.as_path())),
            Err(ConfigError::Parse { .. })
        ));

        std::fs::write(&path, "[api]\nrequest_timeout_secs = 7\n").unwrap();
        let resolved = Config::resolve(Some(path.as_path())).unwrap();
        assert_eq!(resolved.source, Some(path));
        assert!(resolved.skipped.is_empty());
    }
}
