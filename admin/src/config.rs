//! Configuration management for the offer administration client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with OFERTAS_ prefix

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Request timeout in seconds, transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Path of the product list endpoint
    pub products_path: String,

    /// Path of the supplier list endpoint
    pub suppliers_path: String,
}

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_PRODUCTS_PATH: &str = "/admin/productos";
const DEFAULT_SUPPLIERS_PATH: &str = "/admin/proveedores";

impl Config {
    /// Load configuration from `.env`, files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var("OFERTAS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self::builder(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (OFERTAS_ prefix)
            .add_source(
                Environment::with_prefix("OFERTAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with the default values
    pub fn builder(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.products_path", DEFAULT_PRODUCTS_PATH)?
            .set_default("api.suppliers_path", DEFAULT_SUPPLIERS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            suppliers_path: DEFAULT_SUPPLIERS_PATH.to_string(),
        }
    }
}
