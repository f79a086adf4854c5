//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homelink.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values. The loaded configuration is built once in
//! `main` and handed into each component constructor; nothing reads ambient
//! configuration on the request path.

use serde::Deserialize;

use homelink_adapter_amqp_lapin::AmqpConfig;
use homelink_adapter_registry_reqwest::RegistryConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Legacy device registry client settings.
    pub registry: RegistryConfig,
    /// AMQP event publisher settings.
    pub amqp: AmqpConfig,
    /// Sensor aggregation settings.
    pub sensors: SensorsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Sensor aggregation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    /// Cap on concurrent registry reads per aggregation request.
    pub max_concurrent_fetches: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `homelink.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homelink.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMELINK_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMELINK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HOMELINK_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_REGISTRY_URL") {
            self.registry.base_url = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_AMQP_URL") {
            self.amqp.url = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.sensors.max_concurrent_fetches == 0 {
            return Err(ConfigError::Validation(
                "sensors.max_concurrent_fetches must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:homelink.db?mode=rwc".to_string(),
        }
    }
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homelinkd=info,homelink=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
