//! Application configuration
//!
//! Loaded from an optional `config` file (TOML) with `BUSSP_*` environment
//! overrides. The SPTrans token is held behind `secrecy` so it never shows
//! up in debug output.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use integration_sptrans::SpTransConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// SPTrans Olho Vivo API configuration
    #[serde(default)]
    pub sptrans: SpTransAppConfig,

    /// GTFS dataset configuration
    #[serde(default)]
    pub gtfs: GtfsDatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads `config.toml` from the working directory when present, then
    /// applies environment overrides such as `BUSSP_SPTRANS__API_TOKEN`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("BUSSP")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

/// SPTrans configuration as it appears in the application config file
#[derive(Debug, Clone, Deserialize)]
pub struct SpTransAppConfig {
    /// Base URL for the Olho Vivo API
    #[serde(default = "default_sptrans_base_url")]
    pub base_url: String,

    /// API token issued by the SPTrans developer portal
    #[serde(default = "empty_secret")]
    pub api_token: SecretString,

    /// Connection timeout in seconds
    #[serde(default = "default_sptrans_timeout_secs")]
    pub timeout_secs: u64,
}

impl SpTransAppConfig {
    /// Materialize the client configuration for the integration crate
    #[must_use]
    pub fn to_client_config(&self) -> SpTransConfig {
        SpTransConfig {
            base_url: self.base_url.clone(),
            api_token: self.api_token.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl Default for SpTransAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_sptrans_base_url(),
            api_token: empty_secret(),
            timeout_secs: default_sptrans_timeout_secs(),
        }
    }
}

fn default_sptrans_base_url() -> String {
    "http://api.olhovivo.sptrans.com.br/v2.1".to_string()
}

const fn default_sptrans_timeout_secs() -> u64 {
    30
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

/// GTFS SQLite dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtfsDatabaseConfig {
    /// Path to the GTFS SQLite database file
    #[serde(default = "default_gtfs_path")]
    pub path: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for GtfsDatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_gtfs_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_gtfs_path() -> String {
    "gtfs.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}
