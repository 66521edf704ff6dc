use anyhow::{Context, Result};
use config::Environment;
use serde::Deserialize;

/// Store configuration, loaded from the environment.
///
/// Recognized variables (a `.env` file is honored if present):
/// - `CLAIMTRACK_DATABASE_URL` — SQLite connection string
/// - `CLAIMTRACK_MAX_CONNECTIONS` — pool size
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite://claimtrack.db".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(Environment::with_prefix("CLAIMTRACK").try_parsing(true))
            .build()
            .context("Failed to read configuration from environment")?;

        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite://claimtrack.db");
        assert_eq!(config.max_connections, 10);
    }
}
