//! # fd-configs
//!
//! Layered runtime configuration for food-db.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `food-db.toml` in the working directory, then `FOOD_DB__*` environment
//! variables (e.g. `FOOD_DB__SERVER__PORT=9000`). A `.env` file is loaded
//! into the environment beforehand when present.

use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_FILE: &str = "food-db";
const ENV_PREFIX: &str = "FOOD_DB";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug)]
pub struct DatabaseSettings {
    /// Connection string; may embed credentials.
    pub url: SecretString,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySettings {
    pub timeout_ms: u64,
}

impl RepositorySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

#[derive(Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub repository: RepositorySettings,
    pub log: LogSettings,
    /// `.env` file loaded into the environment, if any. Reported by the
    /// binary once logging is up.
    pub env_file: Option<PathBuf>,
}

// Deserialization target; the URL is moved into a `SecretString` afterwards.
#[derive(Deserialize)]
struct RawSettings {
    server: ServerSettings,
    database: RawDatabaseSettings,
    repository: RepositorySettings,
    log: LogSettings,
}

#[derive(Deserialize)]
struct RawDatabaseSettings {
    url: String,
    max_connections: u32,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("database.url", "sqlite:food.db")?
        .set_default("database.max_connections", 5)?
        .set_default("repository.timeout_ms", 5000)?
        .set_default("log.filter", "info")?
        .set_default("log.json", false)
}

/// `FOOD_DB__SECTION__KEY` variables, e.g. `FOOD_DB__SERVER__PORT`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Loads settings from `.env`, `food-db.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file = match dotenvy::dotenv() {
            Ok(path) => Some(path),
            Err(err) if err.not_found() => None,
            Err(err) => return Err(ConfigError::Invalid(format!(".env: {err}"))),
        };

        let builder = defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment());

        let mut settings = Self::from_builder(builder)?;
        settings.env_file = env_file;
        Ok(settings)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let raw: RawSettings = builder.build()?.try_deserialize()?;

        if raw.repository.timeout_ms == 0 {
            return Err(ConfigError::Invalid("repository.timeout_ms must be positive".into()));
        }
        if raw.database.max_connections == 0 {
            return Err(ConfigError::Invalid("database.max_connections must be positive".into()));
        }

        Ok(Self {
            server: raw.server,
            database: DatabaseSettings {
                url: SecretString::from(raw.database.url),
                max_connections: raw.database.max_connections,
            },
            repository: raw.repository,
            log: raw.log,
            env_file: None,
        })
    }

    /// `host:port` the server binds to.
    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_are_complete() {
        let settings = Settings::from_builder(defaults().unwrap()).unwrap();
        assert_eq!(settings.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(settings.database.url.expose_secret(), "sqlite:food.db");
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.repository.timeout(), Duration::from_secs(5));
        assert_eq!(settings.log.filter, "info");
        assert!(!settings.log.json);
    }

    #[test]
    fn overrides_take_precedence() {
        let builder = defaults()
            .unwrap()
            .set_override("server.port", 9000)
            .unwrap()
            .set_override("log.json", true)
            .unwrap();
        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert!(settings.log.json);
    }

    #[test]
    fn prefixed_environment_overrides_defaults() {
        let vars = config::Map::from([
            ("FOOD_DB__SERVER__PORT".to_string(), "9000".to_string()),
            ("FOOD_DB__LOG__JSON".to_string(), "true".to_string()),
            ("FOOD_DB__REPOSITORY__TIMEOUT_MS".to_string(), "250".to_string()),
            ("FOOD_DB_SERVER_PORT".to_string(), "1".to_string()),
            ("SERVER__PORT".to_string(), "2".to_string()),
        ]);
        let builder = defaults().unwrap().add_source(environment().source(Some(vars)));

        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert!(settings.log.json);
        assert_eq!(settings.repository.timeout(), Duration::from_millis(250));
        assert_eq!(settings.server.host, "127.0.0.1");
        assert!(settings.env_file.is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let builder = defaults().unwrap().set_override("repository.timeout_ms", 0).unwrap();
        let err = Settings::from_builder(builder).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn database_url_is_redacted_in_debug() {
        let builder = defaults()
            .unwrap()
            .set_override("database.url", "postgres://user:hunter2@db/food")
            .unwrap();
        let settings = Settings::from_builder(builder).unwrap();
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
