//! Server configuration loaded from `QUOTES_*` environment variables

use anyhow::{Context, Result};
use config::Environment;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

pub const ENV_PREFIX: &str = "QUOTES";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/quotes.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Store connection string
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Pre-built client bundle to serve on non-API paths
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment...");
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: Environment) -> Result<Self> {
        let config: Config = config::Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
