use serde::Deserialize;
use std::env;
use std::path::Path;

/// Environment variable accepted as a shortcut for `database.url`.
pub const MONGO_URL_VAR: &str = "MONGO_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting '{0}' (set MONGO_URL or FLIGHTDECK__DATABASE__URL)")]
    Missing(&'static str),
    #[error(transparent)]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_database_name")]
    pub name: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: default_database_name(),
            collection: default_collection(),
        }
    }
}

fn default_port() -> u16 { 4000 }
fn default_database_name() -> String { "airline".into() }
fn default_collection() -> String { "flights".into() }

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_file(None)
    }

    /// Loads `.env` (or `env_file`) into the process environment first.
    /// Variables that are already set are left untouched.
    pub fn load_with_env_file(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = env_file {
            dotenvy::from_path(path).ok();
        } else {
            dotenvy::dotenv().ok();
        }

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `FLIGHTDECK__SERVER__PORT=4001`
            .add_source(
                config::Environment::with_prefix("FLIGHTDECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var(MONGO_URL_VAR).ok())?
            .build()?;

        Self::from_config(s)
    }

    /// Deserializes already-merged sources and checks required settings.
    pub fn from_config(source: config::Config) -> Result<Self, ConfigError> {
        let config: Self = source.try_deserialize()?;
        if config.database.url.trim().is_empty() {
            return Err(ConfigError::Missing("database.url"));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_settings() {
        let source = config::Config::builder()
            .set_override("database.url", "mongodb://localhost:27017")
            .unwrap()
            .build()
            .unwrap();

        let config = Config::from_config(source).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "airline");
        assert_eq!(config.database.collection, "flights");
    }

    #[test]
    fn test_explicit_settings_win() {
        let source = config::Config::builder()
            .set_override("database.url", "mongodb://db:27017")
            .unwrap()
            .set_override("database.name", "aerolinea")
            .unwrap()
            .set_override("server.port", 8080_i64)
            .unwrap()
            .build()
            .unwrap();

        let config = Config::from_config(source).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.name, "aerolinea");
    }

    #[test]
    fn test_missing_database_url_is_rejected() {
        let source = config::Config::builder().build().unwrap();
        let err = Config::from_config(source).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("database.url")));

        let source = config::Config::builder()
            .set_override("database.url", "  ")
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            Config::from_config(source),
            Err(ConfigError::Missing(_))
        ));
    }

    // Every test touching the process environment lives here; tests run in
    // parallel and share it.
    #[test]
    fn test_load_layers_env_file_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "MONGO_URL=mongodb://dotenv:27017\n").unwrap();

        env::remove_var(MONGO_URL_VAR);
        env::set_var("FLIGHTDECK__DATABASE__URL", "mongodb://prefixed:27017");
        env::set_var("FLIGHTDECK__SERVER__PORT", "4100");

        // MONGO_URL from the .env file beats the prefixed variable
        let config = Config::load_with_env_file(Some(&env_file)).unwrap();
        assert_eq!(config.database.url, "mongodb://dotenv:27017");
        assert_eq!(config.server.port, 4100);

        // A variable already in the environment is not replaced by .env
        env::set_var(MONGO_URL_VAR, "mongodb://shell:27017");
        let config = Config::load_with_env_file(Some(&env_file)).unwrap();
        assert_eq!(config.database.url, "mongodb://shell:27017");

        env::remove_var(MONGO_URL_VAR);
        let config = Config::load_with_env_file(Some(&dir.path().join("missing.env"))).unwrap();
        assert_eq!(config.database.url, "mongodb://prefixed:27017");

        env::remove_var("FLIGHTDECK__DATABASE__URL");
        let err = Config::load_with_env_file(Some(&dir.path().join("missing.env"))).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("database.url")));

        env::remove_var("FLIGHTDECK__SERVER__PORT");
    }
}
