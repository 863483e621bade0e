//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_FIXTURES_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::errors::{AppError, AppResult};

/// Backing store for the data-access layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DataSource {
    /// PostgreSQL database reached through `DATABASE_URL`
    #[default]
    Postgres,
    /// Static JSON tables loaded from `FIXTURES_DIR`
    Fixtures,
}

impl FromStr for DataSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DataSource::Postgres),
            "fixtures" | "fixture" | "json" => Ok(DataSource::Fixtures),
            other => Err(AppError::validation(format!(
                "Unknown data source '{}' (expected 'postgres' or 'fixtures')",
                other
            ))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Postgres => write!(f, "postgres"),
            DataSource::Fixtures => write!(f, "fixtures"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub data_source: DataSource,
    pub database_url: String,
    pub fixtures_dir: PathBuf,
    pub server_host: String,
    pub server_port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_source", &self.data_source)
            .field("database_url", &"[REDACTED]")
            .field("fixtures_dir", &self.fixtures_dir)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    ///
    /// # Errors
    /// Returns a validation error if `DATA_SOURCE` names an unknown backend.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_source = match lookup("DATA_SOURCE") {
            Some(value) => value.parse()?,
            None => DataSource::default(),
        };

        Ok(Self {
            data_source,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            fixtures_dir: lookup("FIXTURES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR)),
            server_host: lookup("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
