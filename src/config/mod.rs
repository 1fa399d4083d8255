//! Configuration for the SIP API.
//!
//! Settings come from layered `.env` files plus the process environment,
//! all under a `SIP_` prefix, and land in a typed [`AppConfig`].

use std::{collections::BTreeMap, env, net::SocketAddr, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration derived from `SIP_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_api_bind_addr")]
    pub api_bind_addr: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Directory holding the SQLite store. Created on demand when the
    /// store is opened.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_db_acquire_timeout_ms")]
    pub db_acquire_timeout_ms: u64,
}

fn default_profile() -> String {
    "local".to_string()
}

fn default_api_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_db_max_connections() -> u32 {
    10
}

fn default_db_acquire_timeout_ms() -> u64 {
    5000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            api_bind_addr: default_api_bind_addr(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            data_dir: default_data_dir(),
            db_max_connections: default_db_max_connections(),
            db_acquire_timeout_ms: default_db_acquire_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// The configured bind address, parsed.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.api_bind_addr.parse()
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("sip.db")
    }

    /// SQLite connection URL. `mode=rwc` creates the file if missing,
    /// but not the parent directory.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.db_path().display())
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(source) = self.bind_addr() {
            return Err(ConfigError::InvalidBindAddr {
                value: self.api_bind_addr.clone(),
                source,
            });
        }
        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidPoolSize {
                value: self.db_max_connections,
            });
        }
        Ok(())
    }
}

/// Ways configuration loading can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
    #[error("bind address '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("db max connections must be at least 1, got {value}")]
    InvalidPoolSize { value: u32 },
}

/// Loads [`AppConfig`] from layered `.env` files and `SIP_*` env vars.
///
/// Layer order, later wins: `.env`, `.env.local`, `.env.<profile>`,
/// `.env.<profile>.local`, then the process environment.
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// A loader rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// A loader rooted at `base_dir` (tests point this at a tempdir).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let (mut layered, profile_hint) = self.env_layers()?;

        // Process environment is the last layer.
        for (key, value) in env::vars() {
            if let Some(name) = key.strip_prefix("SIP_") {
                layered.insert(name.to_string(), value);
            }
        }

        let mut config = AppConfig {
            profile: profile_hint,
            ..AppConfig::default()
        };
        if let Some(value) = take(&mut layered, "PROFILE") {
            config.profile = value;
        }
        if let Some(value) = take(&mut layered, "API_BIND_ADDR") {
            config.api_bind_addr = value;
        }
        if let Some(value) = take(&mut layered, "LOG_LEVEL") {
            config.log_level = value;
        }
        if let Some(value) = take(&mut layered, "LOG_FORMAT") {
            config.log_format = value;
        }
        if let Some(value) = take(&mut layered, "DATA_DIR") {
            config.data_dir = PathBuf::from(value);
        }
        // Unparseable numbers keep their defaults.
        if let Some(n) = take(&mut layered, "DB_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
            config.db_max_connections = n;
        }
        if let Some(n) = take(&mut layered, "DB_ACQUIRE_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.db_acquire_timeout_ms = n;
        }

        config.validate()?;
        Ok(config)
    }

    fn env_layers(&self) -> Result<(BTreeMap<String, String>, String), ConfigError> {
        let mut values = BTreeMap::new();

        for name in [".env", ".env.local"] {
            self.merge_env_file(self.base_dir.join(name), &mut values)?;
        }

        // The profile decides which profile-specific files apply; the
        // process environment may pick it before any file does.
        let profile = env::var("SIP_PROFILE")
            .ok()
            .or_else(|| values.get("PROFILE").cloned())
            .unwrap_or_else(default_profile);

        for name in [format!(".env.{profile}"), format!(".env.{profile}.local")] {
            self.merge_env_file(self.base_dir.join(name), &mut values)?;
        }

        Ok((values, profile))
    }

    fn merge_env_file(
        &self,
        path: PathBuf,
        values: &mut BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            // Absent layers are skipped, any other failure is fatal.
            Err(dotenvy::Error::Io(ref io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                return Ok(());
            }
            Err(source) => return Err(ConfigError::EnvFile { path, source }),
        };

        for item in iter {
            let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                path: path.clone(),
                source,
            })?;
            if let Some(name) = key.strip_prefix("SIP_") {
                values.insert(name.to_string(), value);
            }
        }
        Ok(())
    }
}

fn take(values: &mut BTreeMap<String, String>, key: &str) -> Option<String> {
    values.remove(key).filter(|v| !v.is_empty())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite_store() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.profile, "local");
        assert_eq!(cfg.api_bind_addr, "0.0.0.0:3001");
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.database_url(), "sqlite://data/sip.db?mode=rwc");
    }

    #[test]
    fn database_url_follows_data_dir() {
        let cfg = AppConfig {
            data_dir: PathBuf::from("/tmp/sip-test"),
            ..AppConfig::default()
        };
        assert_eq!(cfg.db_path(), PathBuf::from("/tmp/sip-test/sip.db"));
        assert_eq!(cfg.database_url(), "sqlite:///tmp/sip-test/sip.db?mode=rwc");
    }

    #[test]
    fn validate_rejects_malformed_bind_addr() {
        let cfg = AppConfig {
            api_bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn validate_rejects_empty_pool() {
        let cfg = AppConfig {
            db_max_connections: 0,
            ..AppConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPoolSize { value: 0 }));
    }
}
