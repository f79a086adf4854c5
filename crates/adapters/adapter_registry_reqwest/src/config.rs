//! Registry client configuration.

use serde::Deserialize;

/// Configuration for the legacy registry client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the registry (e.g. `http://localhost:8080`).
    pub base_url: String,
    /// Total per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}
