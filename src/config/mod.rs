//! Configuration loading and management
//!
//! Configuration comes from a YAML file or from environment variables; any
//! missing section or field falls back to its default.
//!
//! ```yaml
//! api:
//!   host: 0.0.0.0
//!   port: 3000
//! storage:
//!   backend: mongodb
//! mongodb:
//!   address: localhost
//!   port: 27017
//!   database: bank
//! ```

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    /// Address to bind, `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Which account store backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Mongodb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "mongodb" => Ok(StorageBackend::Mongodb),
            _ => Err(ConfigError::InvalidValue {
                key: "STORAGE_BACKEND".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Account store settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// JSON file of accounts loaded into the in-memory store at startup
    pub seed_file: Option<PathBuf>,
}

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub address: String,
    pub port: u16,
    pub database: String,

    /// Collection holding the accounts
    pub collection: String,
}

impl MongoConfig {
    /// `mongodb://address:port/database`
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}/{}", self.address, self.port, self.database)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 27017,
            database: "bank".to_string(),
            collection: "users".to_string(),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub mongodb: MongoConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// | Variable          | Field              |
    /// |-------------------|--------------------|
    /// | `PORT`            | `api.port`         |
    /// | `DB_DOMAIN`       | `mongodb.address`  |
    /// | `DB_PORT`         | `mongodb.port`     |
    /// | `DB_NAME`         | `mongodb.database` |
    /// | `STORAGE_BACKEND` | `storage.backend`  |
    /// | `SEED_FILE`       | `storage.seed_file`|
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.api.port = parse_port("PORT", &port)?;
        }
        if let Some(address) = lookup("DB_DOMAIN") {
            self.mongodb.address = address;
        }
        if let Some(port) = lookup("DB_PORT") {
            self.mongodb.port = parse_port("DB_PORT", &port)?;
        }
        if let Some(database) = lookup("DB_NAME") {
            self.mongodb.database = database;
        }
        if let Some(backend) = lookup("STORAGE_BACKEND") {
            self.storage.backend = backend.parse()?;
        }
        if let Some(seed_file) = lookup("SEED_FILE") {
            self.storage.seed_file = Some(PathBuf::from(seed_file));
        }
        Ok(())
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
