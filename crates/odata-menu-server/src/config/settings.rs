use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub odata: ODataConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixed service root for `@odata.context` URLs, e.g. `https://api.example.com/`.
    /// When unset the root is taken from the request's `Host` header.
    #[serde(default)]
    pub public_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ODataConfig {
    pub metadata_path: PathBuf,
}

impl Settings {
    /// Layered load: built-in defaults, then `config/settings.*`, then `APP__*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::with_defaults()?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Settings built from the defaults alone, ignoring files and environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults()?.build()?.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 52999)?
            .set_default("database.url", "sqlite://data.sqlite")?
            .set_default("database.pool_max_size", 5)?
            .set_default("database.pool_timeout_seconds", 3)?
            .set_default("odata.metadata_path", "config/metadata.xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::defaults().unwrap();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 52999);
        assert!(settings.server.public_url.is_none());
        assert_eq!(settings.database.url, "sqlite://data.sqlite");
        assert_eq!(settings.database.pool_max_size, 5);
        assert_eq!(settings.odata.metadata_path, PathBuf::from("config/metadata.xml"));
    }
}
