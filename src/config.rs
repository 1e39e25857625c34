//! Process configuration loaded once at startup from the environment

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const ENV_STORAGE_BACKEND: &str = "STORAGE_BACKEND";
const ENV_DATABASE_URL: &str = "DATABASE_URL";
const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
const ENV_DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
const ENV_HTTP_SERVER_HOST: &str = "HTTP_SERVER_HOST";
const ENV_HTTP_SERVER_PORT: &str = "HTTP_SERVER_PORT";
const ENV_HTTP_REQUEST_TIMEOUT_SECS: &str = "HTTP_REQUEST_TIMEOUT_SECS";
const ENV_SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_DATABASE_NAME: &str = "fifa_wct";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HTTP_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_SERVER_PORT: u16 = 80;
const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 55;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration failures; each names the offending variable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable '{0}': env is required")]
    Missing(&'static str),

    #[error("environment variable '{name}': invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Which storage adapter backs the team repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    /// Connection string; empty for the memory backend
    pub url: String,
    /// Namespace (schema) holding the teams collection
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Returns the `host:port` bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Config {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend = parse_or(&var, ENV_STORAGE_BACKEND, StorageBackend::default())?;
        let url = match backend {
            StorageBackend::Postgres => {
                var(ENV_DATABASE_URL).ok_or(ConfigError::Missing(ENV_DATABASE_URL))?
            }
            StorageBackend::Memory => var(ENV_DATABASE_URL).unwrap_or_default(),
        };

        let database = DatabaseConfig {
            backend,
            url,
            name: var(ENV_DATABASE_NAME).unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            max_connections: parse_or(
                &var,
                ENV_DATABASE_MAX_CONNECTIONS,
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
        };

        let server = ServerConfig {
            host: var(ENV_HTTP_SERVER_HOST).unwrap_or_else(|| DEFAULT_HTTP_SERVER_HOST.to_string()),
            port: parse_or(&var, ENV_HTTP_SERVER_PORT, DEFAULT_HTTP_SERVER_PORT)?,
            request_timeout: Duration::from_secs(parse_or(
                &var,
                ENV_HTTP_REQUEST_TIMEOUT_SECS,
                DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
            )?),
            shutdown_timeout: Duration::from_secs(parse_or(
                &var,
                ENV_SHUTDOWN_TIMEOUT_SECS,
                DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            )?),
        };

        let logging = LoggingConfig {
            level: var(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            format: parse_or(&var, ENV_LOG_FORMAT, LogFormat::default())?,
        };

        Ok(Self {
            database,
            server,
            logging,
        })
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
