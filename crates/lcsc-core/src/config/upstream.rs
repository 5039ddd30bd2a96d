//! Upstream component lookup configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the EasyEDA component API client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the component API, without trailing slash.
    #[validate(url)]
    pub base_url: String,
    /// Value of the `version` query parameter the API expects.
    pub api_version: String,
    /// Per-request timeout in seconds.
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with each lookup.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://easyeda.com".to_string(),
            api_version: "6.4.19.5".to_string(),
            timeout_seconds: 20,
            user_agent: format!("lcsc-kicad-exporter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
