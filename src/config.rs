// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Layered server configuration.
//!
//! Sources, lowest to highest priority:
//!
//! | Layer | Example |
//! |-------|---------|
//! | Built-in defaults | `server.port = 8000` |
//! | `registry.toml` in the working directory | `[database]`<br>`url = "postgres://..."` |
//! | `REGISTRY_*` environment variables, `__` between sections | `REGISTRY_SERVER__PORT=9000` |
//! | `DATABASE_URL` | `postgres://app:secret@db/registry` |
//!
//! A `.env` file is loaded into the environment first by
//! [`Config::load_with_dotenv`].

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml}
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "registry.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "REGISTRY_";

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        field:  &'static str,
        reason: &'static str
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub log: LogConfig
}

/// HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000
        }
    }
}

/// PostgreSQL connection. Without a URL the in-memory store is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url:             Option<String>,
    pub max_connections: u32,
    /// Apply embedded migrations on startup.
    pub run_migrations:  bool
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url:             None,
            max_connections: 5,
            run_migrations:  true
        }
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` takes precedence.
    pub filter: String
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "company_registry=info,tower_http=info".to_string()
        }
    }
}

impl Config {
    /// Load configuration from defaults, file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` into the environment, then [`Config::load`].
    ///
    /// A missing `.env` is not an error; an unreadable or malformed one is.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Err(err) if !err.not_found() => return Err(err.into()),
            _ => {}
        }
        Self::load()
    }

    /// Provider chain, exposed so tests can inspect or extend it.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL"])
                    .map(|_| "database.url".into())
            )
    }

    /// `host:port` the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Database URL, if one is configured and not blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field:  "server.host",
                reason: "must not be empty"
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field:  "database.max_connections",
                reason: "must be at least 1"
            });
        }
        Ok(())
    }
}
