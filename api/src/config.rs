use std::env;

use anyhow::{bail, Context, Result};

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Bearer key required on `/functions/*` when set
    pub api_key: Option<String>,
    /// Create missing tables and seed teams at startup
    pub bootstrap_schema: bool,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            None => 8080,
        };

        let bootstrap_schema = match lookup("NFL_DB_BOOTSTRAP_SCHEMA") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("NFL_DB_BOOTSTRAP_SCHEMA is not a boolean: {}", value))?,
            None => false,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS is not a number: {}", value)
            })?,
            None => 10,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            database_url,
            port,
            api_key: lookup("NFL_DB_API_KEY").filter(|key| !key.is_empty()),
            bootstrap_schema,
            max_connections,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
