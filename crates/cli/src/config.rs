//! CLI configuration
//!
//! Sources, later ones winning: built-in defaults, a TOML file, `ESSAYS_*`
//! environment variables. Command-line flags are applied on top by `main`.

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Where the persisted username and log file live
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "essays", "essays")
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Default location of the config file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("essays.toml"))
    }

    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicit `path` must exist; the default path is used only if present.
    /// The result is not validated, so callers can apply overrides first.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Start with defaults
        builder = builder.add_source(Config::try_from(&ClientConfig::default())?);

        match path {
            Some(path) => builder = builder.add_source(File::from(path)),
            None => {
                if let Some(default) = Self::default_path().filter(|p| p.exists()) {
                    builder = builder.add_source(File::from(default).required(false));
                }
            }
        }

        // Add environment variables with ESSAYS_ prefix (can override file settings)
        builder = builder.add_source(Environment::with_prefix("ESSAYS").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Message("base_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured data directory, else the platform data dir, else `./data`
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essays.toml");
        std::fs::write(
            &path,
            "base_url = \"https://essays.example.com\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://essays.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_override_replaces_invalid_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essays.toml");
        std::fs::write(&path, "base_url = \"ftp://bad\"\ntimeout_secs = 0\n").unwrap();

        let mut config = ClientConfig::load(Some(&path)).unwrap();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:9000".into();
        config.timeout_secs = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ClientConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ClientConfig {
            base_url: "ftp://example.com".into(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        config.base_url = "http://example.com".into();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = ClientConfig {
            data_dir: Some(PathBuf::from("/tmp/essays-test")),
            ..ClientConfig::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/essays-test"));
    }
}
