//! Application configuration management

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the HTTP server to
    pub host: String,

    /// Server port
    pub port: u16,

    /// Database URL (SQLite). Defaults to an in-memory database since the
    /// catalog is re-seeded on every start anyway.
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }
}
