//! SPTrans service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Olho Vivo API client
#[derive(Clone, Serialize, Deserialize)]
pub struct SpTransConfig {
    /// Base URL for the Olho Vivo API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API token issued by the SPTrans developer portal
    #[serde(default)]
    pub api_token: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.olhovivo.sptrans.com.br/v2.1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

// The token is a credential; keep it out of debug output.
impl std::fmt::Debug for SpTransConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpTransConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for SpTransConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpTransConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_token.is_empty() {
            return Err("api_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
