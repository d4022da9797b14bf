//! Application configuration schemas.
//!
//! All configuration structs are deserialized through the `config` crate
//! from TOML files plus `PORTAL__*` environment variables. Each sub-module
//! is one logical section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// User store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and password settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default account seeding.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Layers `config/default.toml`, then `config/{env}.toml`, then
    /// variables such as `PORTAL__AUTH__JWT_ACCESS_SECRET`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        app.validate()?;
        Ok(app)
    }

    /// Reject configurations the server cannot run safely with.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        if self.database.provider == StoreProvider::Postgres && self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "database.url is required when database.provider is \"postgres\"",
            ));
        }
        if self.server.port == 0 {
            return Err(AppError::configuration("server.port must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                provider: StoreProvider::Memory,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig::new("access-secret", "refresh-secret"),
            logging: LoggingConfig::default(),
            seed: SeedConfig::default(),
        }
    }

    #[test]
    fn sample_config_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn postgres_without_url_is_rejected() {
        let mut config = sample();
        config.database.provider = StoreProvider::Postgres;
        config.database.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_section_defaults() {
        let raw = r#"{
            "auth": { "jwt_access_secret": "a", "jwt_refresh_secret": "b" },
            "database": { "provider": "memory" }
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.jwt_access_ttl_minutes, 15);
        assert_eq!(config.auth.jwt_refresh_ttl_hours, 168);
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }
}
