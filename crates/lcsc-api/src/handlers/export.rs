//! Artifact download handlers.

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use lcsc_convert::bundle::BUNDLE_CONTENT_TYPE;
use lcsc_core::error::AppError;
use lcsc_core::types::ArtifactKind;

use crate::error::ApiError;
use crate::extractors::ComponentId;
use crate::state::AppState;

/// GET /get_symbol[/{lcsc_id}]
pub async fn get_symbol(
    State(state): State<AppState>,
    ComponentId(id): ComponentId,
) -> Result<Response, ApiError> {
    let artifact = state
        .export_service
        .export(ArtifactKind::Symbol, &id)
        .await?;
    attachment(&artifact.filename, artifact.content_type, artifact.data)
}

/// GET /get_footprint[/{lcsc_id}]
pub async fn get_footprint(
    State(state): State<AppState>,
    ComponentId(id): ComponentId,
) -> Result<Response, ApiError> {
    let artifact = state
        .export_service
        .export(ArtifactKind::Footprint, &id)
        .await?;
    attachment(&artifact.filename, artifact.content_type, artifact.data)
}

/// GET /get_step[/{lcsc_id}]
pub async fn get_step(
    State(state): State<AppState>,
    ComponentId(id): ComponentId,
) -> Result<Response, ApiError> {
    let artifact = state
        .export_service
        .export(ArtifactKind::Model, &id)
        .await?;
    attachment(&artifact.filename, artifact.content_type, artifact.data)
}

/// GET /get_all[/{lcsc_id}]
pub async fn get_all(
    State(state): State<AppState>,
    ComponentId(id): ComponentId,
) -> Result<Response, ApiError> {
    let bundle = state.export_service.export_all(&id).await?;
    attachment(&bundle.filename, BUNDLE_CONTENT_TYPE, bundle.data)
}

/// Build a file download response.
fn attachment(filename: &str, content_type: &str, data: Bytes) -> Result<Response, ApiError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| ApiError(AppError::internal(format!("Response build failed: {e}"))))
}
