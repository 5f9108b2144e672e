//! Service settings loaded from environment variables.

use super::types::{ReadProjection, StoreBackend};
use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ID_START: i64 = 1;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind: String,
    pub backend: StoreBackend,
    pub max_connections: u32,
    /// First identifier handed out by the in-memory store.
    pub id_start: i64,
    /// Seed demo records at startup. In-memory backend only.
    pub seed: bool,
    pub read_projection: ReadProjection,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.into(),
            backend: StoreBackend::Memory,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            id_start: DEFAULT_ID_START,
            seed: true,
            read_projection: ReadProjection::Full,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let database_url = get("DATABASE_URL");
        let backend = match get("CAMPUS_STORE").map(|s| s.to_lowercase()) {
            Some(s) if s == "memory" => StoreBackend::Memory,
            Some(s) if s == "postgres" => StoreBackend::Postgres {
                database_url: database_url.ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "CAMPUS_STORE",
                    value: other,
                })
            }
            None => match database_url {
                Some(database_url) => StoreBackend::Postgres { database_url },
                None => StoreBackend::Memory,
            },
        };

        Ok(AppConfig {
            bind: get("CAMPUS_BIND").unwrap_or(defaults.bind),
            backend,
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            id_start: parse_id_start(get("CAMPUS_ID_START"), defaults.id_start)?,
            seed: match get("CAMPUS_SEED") {
                Some(v) => parse_bool("CAMPUS_SEED", &v)?,
                None => defaults.seed,
            },
            read_projection: match get("CAMPUS_READ_PROJECTION") {
                Some(v) => v.parse()?,
                None => defaults.read_projection,
            },
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { name, value: v }),
        None => Ok(default),
    }
}

/// Ids are non-negative.
fn parse_id_start(value: Option<String>, default: i64) -> Result<i64, ConfigError> {
    let id_start = parse_or("CAMPUS_ID_START", value.clone(), default)?;
    if id_start < 0 {
        return Err(ConfigError::Invalid {
            name: "CAMPUS_ID_START",
            value: value.unwrap_or_default(),
        });
    }
    Ok(id_start)
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
    }
}
