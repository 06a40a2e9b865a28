use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::dashboard::revenue::DEFAULT_ITEMS_PER_ORDER;
use crate::dashboard::revenue::DEFAULT_UNIT_PRICE;

/// Application configuration for order-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// HTTP server configuration.
///
/// An empty `cors_origins` list allows any origin.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Lifetime of issued tokens.
    ///
    /// # Errors
    /// * `Message` - `expiration_hours` is not positive or overflows a duration
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.expiration_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.expiration_hours out of range: {}",
                    self.expiration_hours
                ))
            })
    }
}

/// Constants of the estimated revenue model used by the dashboard.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_items_per_order")]
    pub items_per_order: f64,
    #[serde(default = "default_unit_price")]
    pub unit_price: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            items_per_order: default_items_per_order(),
            unit_price: default_unit_price(),
        }
    }
}

fn default_expiration_hours() -> i64 {
    auth::jwt::DEFAULT_TOKEN_TTL_HOURS
}

fn default_items_per_order() -> f64 {
    DEFAULT_ITEMS_PER_ORDER
}

fn default_unit_price() -> f64 {
    DEFAULT_UNIT_PRICE
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
