//! HTTP client for the EasyEDA component API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

use lcsc_core::config::UpstreamConfig;
use lcsc_core::error::AppError;
use lcsc_core::result::AppResult;
use lcsc_core::traits::ComponentSource;
use lcsc_core::types::{CadData, LcscId};

use crate::error::UpstreamError;
use crate::models::ComponentResponse;

/// Stateless component lookup client.
///
/// Holds only immutable settings and reqwest's internal connection pool, so
/// one instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct EasyedaClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    timeout_seconds: u64,
}

impl EasyedaClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// URL of the component document for `id`.
    pub fn component_url(&self, id: &LcscId) -> String {
        format!(
            "{}/api/products/{}/components?version={}",
            self.base_url, id, self.api_version
        )
    }

    async fn lookup(&self, id: &LcscId) -> Result<CadData, UpstreamError> {
        let url = self.component_url(id);
        tracing::debug!(lcsc_id = %id, url = %url, "Fetching component data");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let envelope: ComponentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout(self.timeout_seconds)
            } else {
                UpstreamError::Decode(e.to_string())
            }
        })?;

        envelope
            .into_cad_document()
            .map(CadData)
            .ok_or_else(|| UpstreamError::NotFound(id.to_string()))
    }

    fn classify(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout_seconds)
        } else {
            UpstreamError::Request(err)
        }
    }
}

#[async_trait]
impl ComponentSource for EasyedaClient {
    async fn fetch(&self, id: &LcscId) -> AppResult<CadData> {
        match self.lookup(id).await {
            Ok(cad) => {
                tracing::info!(lcsc_id = %id, "Component data fetched");
                Ok(cad)
            }
            Err(e @ UpstreamError::NotFound(_)) => {
                tracing::info!(lcsc_id = %id, "Component not found upstream");
                Err(e.into())
            }
            Err(e) => {
                tracing::error!(lcsc_id = %id, error = %e, "Upstream lookup failed");
                Err(e.into())
            }
        }
    }
}
