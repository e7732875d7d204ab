use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Database configuration helpers
pub mod database;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DB_URL is not set in environment")]
    MissingDatabaseUrl,
    #[error("APP_HOST:APP_PORT must form a valid socket address, got `{0}`")]
    InvalidAddress(String),
    #[error("{name} must be a positive number, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

/// Process settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub addr: SocketAddr,
    pub max_connections: u32,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = database_url_from_env()?;

        let host = std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, raw)))?,
            Err(_) => DEFAULT_PORT,
        };
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, port)))?;

        let max_connections = number_from_env("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let timeout_secs = number_from_env("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            database_url,
            addr,
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Load a local `.env` file if there is one. Its absence is only worth a warning.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        tracing::warn!("no .env file loaded: {}", e);
    }
}

fn database_url_from_env() -> Result<String, ConfigError> {
    match std::env::var("DB_URL") {
        Ok(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(ConfigError::MissingDatabaseUrl),
    }
}

fn number_from_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}
