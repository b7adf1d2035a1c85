use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads settings from an optional `configuration` file, `APP__*` variables,
    /// and finally a bare `PORT` variable, which wins when usable.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = parse_port(std::env::var("PORT").ok().as_deref()).map(i64::from);

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Empty, non-numeric, out-of-range and zero values are ignored so the port
/// falls back to the other sources and finally to 4000.
fn parse_port(raw: Option<&str>) -> Option<u16> {
    raw.map(str::trim)
        .and_then(|p| p.parse::<u16>().ok())
        .filter(|p| *p != 0)
}
