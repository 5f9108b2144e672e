//! Setting value types.

use crate::error::ConfigError;
use std::str::FromStr;

/// Which store backs the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres { database_url: String },
}

/// Column set returned by PostgreSQL list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadProjection {
    /// Every column.
    #[default]
    Full,
    /// `id` plus the entity's label column; other fields come back as defaults.
    Summary,
}

impl FromStr for ReadProjection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(ReadProjection::Full),
            "summary" => Ok(ReadProjection::Summary),
            _ => Err(ConfigError::Invalid {
                name: "CAMPUS_READ_PROJECTION",
                value: s.to_string(),
            }),
        }
    }
}
