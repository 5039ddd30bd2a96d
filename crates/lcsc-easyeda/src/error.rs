//! Errors raised while talking to the component API.

use lcsc_core::error::AppError;
use thiserror::Error;

/// Failure modes of an upstream lookup.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The API has no data for the component.
    #[error("Component '{0}' not found upstream")]
    NotFound(String),

    /// The lookup did not finish within the configured timeout.
    #[error("Upstream lookup timed out after {0} seconds")]
    Timeout(u64),

    /// The API answered with an unexpected HTTP status.
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON document.
    #[error("Malformed upstream response: {0}")]
    Decode(String),

    /// Transport-level failure.
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match &err {
            UpstreamError::NotFound(_) => AppError::not_found(err.to_string()),
            _ => AppError::external_service(err.to_string()),
        }
    }
}
