use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MongoConfig {
    /// Default connection string for the connection guard. Absence is only
    /// reported once a connect is attempted without an explicit URI.
    pub uri: Option<String>,
    /// Overrides the database named in the connection string.
    pub database: Option<String>,
}

impl BackendConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(BackendConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI"),
                database: get_env("MONGO_DATABASE"),
            },
            otlp_endpoint: get_env("OTLP_ENDPOINT"),
        })
    }
}

/// Unset and empty variables are both treated as absent.
fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.trim().is_empty())
}
