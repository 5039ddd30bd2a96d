//! Component identifier extraction from the path or query string.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use lcsc_core::types::LcscId;

use crate::error::ApiError;

/// Name of the path parameter and of the query parameter.
pub const PARAM: &str = "lcsc_id";

/// Query string accepted by the download routes.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    /// Identifier supplied as `?lcsc_id=`.
    pub lcsc_id: Option<String>,
}

/// The requested component.
///
/// Taken from the `{lcsc_id}` path segment when present, otherwise from the
/// `lcsc_id` query parameter. Rejects with 400 when neither yields a valid
/// identifier.
#[derive(Debug, Clone)]
pub struct ComponentId(pub LcscId);

impl<S> FromRequestParts<S> for ComponentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let from_path = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(mut params)| params.remove(PARAM))
            .filter(|value| !value.trim().is_empty());

        let raw = match from_path {
            Some(value) => value,
            None => Query::<IdQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(query)| query.lcsc_id)
                .unwrap_or_default(),
        };

        Ok(Self(LcscId::parse(&raw)?))
    }
}
