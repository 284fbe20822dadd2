use std::env;

use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub idle_timeout_seconds: u32,
    pub secure_cookie: bool,
    pub cookie_name: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ACCOUNTS_SERVER__HTTP_PORT, ACCOUNTS_DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: ACCOUNTS_DATABASE__URL=sqlite://accounts.db overrides database.url
            .add_source(
                Environment::with_prefix("ACCOUNTS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize::<Self>()?.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.session.idle_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "session.idle_timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(self)
    }

    fn defaults() -> Result<config::builder::ConfigBuilder<DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .set_default("database.backend", "sqlite")?
            .set_default("database.url", "sqlite::memory:")?
            .set_default("session.idle_timeout_seconds", 20 * 60)?
            .set_default("session.secure_cookie", false)?
            .set_default("session.cookie_name", "sid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.http_port, 3000);
        assert_eq!(config.database.backend, StoreBackend::Sqlite);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.session.idle_timeout_seconds, 1200);
        assert!(!config.session.secure_cookie);
        assert_eq!(config.session.cookie_name, "sid");
    }

    #[test]
    fn test_memory_backend_parses() {
        let config: Config = Config::defaults()
            .unwrap()
            .set_override("database.backend", "memory")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, StoreBackend::Memory);
    }

    #[test]
    fn test_zero_idle_timeout_is_rejected() {
        let config: Config = Config::defaults()
            .unwrap()
            .set_override("session.idle_timeout_seconds", 0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("idle_timeout_seconds"));
    }

    #[test]
    fn test_negative_idle_timeout_does_not_deserialize() {
        let result = Config::defaults()
            .unwrap()
            .set_override("session.idle_timeout_seconds", -5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Config>();

        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_pass_validation() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.validate().is_ok());
    }
}
