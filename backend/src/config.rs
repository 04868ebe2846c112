//! Server configuration.
//!
//! Values are resolved from, in increasing precedence:
//! 1. Built-in defaults
//! 2. A TOML file (`fundspark.toml`, or the path in `FUNDSPARK_CONFIG`)
//! 3. Process environment (`HOST`, `PORT`, `ALLOWED_ORIGINS`)
//!
//! A `.env` file in the working directory is merged into the process
//! environment first by [`load_dotenv`].
//!
//! # Example file
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! allowed_origins = ["http://localhost:3000"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
pub const DEFAULT_CONFIG_FILE: &str = "fundspark.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to make cross-origin requests with credentials.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

/// On-disk configuration layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
}

/// `[server]` table of the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub allowed_origins: Option<Vec<String>>,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Split a comma-separated origin list, trimming entries and dropping empty ones.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load `.env` from the working directory if one exists.
///
/// Variables already present in the environment are not overridden.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl ServerConfig {
    /// Apply the `[server]` table of a config file on top of `self`.
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        let settings = file.server;
        if let Some(host) = settings.host {
            self.host = host;
        }
        if let Some(port) = settings.port {
            self.port = port;
        }
        if let Some(origins) = settings.allowed_origins {
            self.allowed_origins = origins
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        self
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Taking a lookup function keeps this testable without touching the
    /// process environment.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.allowed_origins = parse_origins(&origins);
        }
        Ok(self)
    }

    /// Resolve configuration from defaults, the config file and the environment.
    ///
    /// The config file is optional unless `FUNDSPARK_CONFIG` names one
    /// explicitly, in which case a missing file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var("FUNDSPARK_CONFIG").ok().map(PathBuf::from);
        let mut config = Self::default();

        match explicit {
            Some(path) => config = config.merge_file(ConfigFile::from_file(&path)?),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    config = config.merge_file(ConfigFile::from_file(&path)?);
                }
            }
        }

        config.merge_env(|key| std::env::var(key).ok())
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
