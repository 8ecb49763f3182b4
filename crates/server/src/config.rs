//! Configuration loading
//!
//! A JSON file supplies the base configuration (every field has a default),
//! then command-line / environment overrides are applied on top.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 40001 },
//!   "access": { "operators": [1001], "viewers": [1001, 2002] },
//!   "storage": { "backend": "mongo", "mongo_uri": "mongodb://127.0.0.1:27017",
//!                "database": "warden_db", "seed": true },
//!   "symbols": { "default_limit": "100" }
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use warden_core::DEFAULT_SYMBOL_LIMIT;

use crate::application::UserId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Can't parse {source_name}: '{value}' is not an integer id")]
    InvalidIdList { source_name: String, value: String },

    #[error("Invalid listen address '{0}', expected host:port")]
    InvalidAddress(String),

    #[error("Unknown storage backend '{0}', expected 'memory' or 'mongo'")]
    UnknownBackend(String),
}

/// Root configuration for the Warden service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardenConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub access: AccessConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub symbols: SymbolSettings,
}

impl WardenConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line / environment overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(addr) = overrides.addr {
            let (host, port) = parse_addr(&addr)?;
            if let Some(host) = host {
                self.server.host = host;
            }
            self.server.port = port;
        }
        if let Some(operators) = overrides.operators {
            self.access.operators = parse_id_list("USER_OPERATORS_LIST", &operators)?;
        }
        if let Some(viewers) = overrides.viewers {
            self.access.viewers = parse_id_list("USER_VIEWERS_LIST", &viewers)?;
        }
        if let Some(backend) = overrides.backend {
            self.storage.backend = backend.parse()?;
        }
        if let Some(uri) = overrides.mongo_uri {
            self.storage.mongo_uri = uri;
        }
        if let Some(database) = overrides.database {
            self.storage.database = database;
        }
        if let Some(seed) = overrides.seed {
            self.storage.seed = seed;
        }
        Ok(self)
    }
}

/// Overrides collected from the command line and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Listen address, `host:port` or `:port`
    pub addr: Option<String>,
    /// Comma-separated operator ids
    pub operators: Option<String>,
    /// Comma-separated viewer ids
    pub viewers: Option<String>,
    pub backend: Option<String>,
    pub mongo_uri: Option<String>,
    pub database: Option<String>,
    pub seed: Option<bool>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    40001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Caller ids resolved before the service is built
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default)]
    pub operators: Vec<UserId>,
    #[serde(default)]
    pub viewers: Vec<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Mongo,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Mongo => write!(f, "mongo"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_mongo_uri")]
    pub mongo_uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    /// Reset and load the starter set at startup
    #[serde(default)]
    pub seed: bool,
}

fn default_mongo_uri() -> String {
    "mongodb://127.0.0.1:27017".to_string()
}

fn default_database() -> String {
    "warden_db".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            mongo_uri: default_mongo_uri(),
            database: default_database(),
            seed: false,
        }
    }
}

/// Defaults applied to newly prepared symbols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolSettings {
    #[serde(default = "default_limit")]
    pub default_limit: Decimal,
}

fn default_limit() -> Decimal {
    DEFAULT_SYMBOL_LIMIT
}

impl Default for SymbolSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

/// Parse a comma-separated id list; blank items are skipped
pub fn parse_id_list(source_name: &str, src: &str) -> Result<Vec<UserId>, ConfigError> {
    src.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<UserId>()
                .map_err(|_| ConfigError::InvalidIdList {
                    source_name: source_name.to_string(),
                    value: s.to_string(),
                })
        })
        .collect()
}

fn parse_addr(addr: &str) -> Result<(Option<String>, u16), ConfigError> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| ConfigError::InvalidAddress(addr.to_string()))?;
    let port = port
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidAddress(addr.to_string()))?;
    let host = (!host.is_empty()).then(|| host.to_string());
    Ok((host, port))
}
