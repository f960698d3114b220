use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    /// SQL batch applied after the schema, for demo datasets.
    pub seed_path: Option<String>,
    pub max_workers: usize,
    /// Year whose Dec 20-26 window the Christmas price endpoint averages over.
    pub peak_season_year: i32,
    pub weather_api_key: Option<String>,
    /// Hosted sign-in page of the identity provider.
    pub auth_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            db_path: "smartstay.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: None,
            max_workers: 8,
            peak_season_year: 2023,
            weather_api_key: None,
            auth_url: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: try_load("SMARTSTAY_ADDR", "127.0.0.1:8080")?,
            db_path: try_load("SMARTSTAY_DB", "smartstay.sqlite3")?,
            schema_path: try_load("SMARTSTAY_SCHEMA", "sql/schema.sql")?,
            seed_path: optional("SMARTSTAY_SEED"),
            max_workers: try_load("SMARTSTAY_WORKERS", "8")?,
            peak_season_year: try_load("SMARTSTAY_PEAK_YEAR", "2023")?,
            weather_api_key: optional("OPENWEATHER_API_KEY"),
            auth_url: optional("SMARTSTAY_AUTH_URL"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => {
            warn!("{key} not set, feature disabled");
            None
        }
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
