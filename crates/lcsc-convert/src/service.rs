//! Per-request export orchestration.

use std::sync::Arc;

use lcsc_core::error::AppError;
use lcsc_core::result::AppResult;
use lcsc_core::traits::{CadConverter, ComponentSource};
use lcsc_core::types::{ArtifactKind, ExportArtifact, LcscId};

use crate::assembler::ArtifactAssembler;
use crate::bundle::{Bundle, BundleBuilder};

/// Looks up a component and turns it into artifacts or a bundle.
///
/// Holds only shared, immutable collaborators. Every call fetches its own
/// CAD data and keeps nothing afterwards.
#[derive(Debug, Clone)]
pub struct ExportService {
    source: Arc<dyn ComponentSource>,
    assembler: ArtifactAssembler,
}

impl ExportService {
    /// Create a new export service.
    pub fn new(source: Arc<dyn ComponentSource>, converter: Arc<dyn CadConverter>) -> Self {
        Self {
            source,
            assembler: ArtifactAssembler::new(converter),
        }
    }

    /// Export a single artifact of `kind`.
    pub async fn export(&self, kind: ArtifactKind, id: &LcscId) -> AppResult<ExportArtifact> {
        let cad = self.source.fetch(id).await?;
        let artifact = match kind {
            ArtifactKind::Symbol => self.assembler.symbol(id, &cad).await?,
            ArtifactKind::Footprint => self.assembler.footprint(id, &cad).await?,
            ArtifactKind::Model => self.assembler.model(id, &cad).await?,
        };

        tracing::info!(
            lcsc_id = %id,
            kind = %kind,
            filename = %artifact.filename,
            bytes = artifact.data.len(),
            "Artifact exported"
        );
        Ok(artifact)
    }

    /// Export every available artifact as a zip bundle.
    ///
    /// The component is looked up once. An artifact that fails is logged
    /// and left out; the request only fails when nothing could be produced,
    /// in which case the first failure (symbol, footprint, model) is
    /// returned.
    pub async fn export_all(&self, id: &LcscId) -> AppResult<Bundle> {
        let cad = self.source.fetch(id).await?;

        let (symbol, footprint, model) = tokio::join!(
            self.assembler.symbol(id, &cad),
            self.assembler.footprint(id, &cad),
            self.assembler.model(id, &cad),
        );

        let mut builder = BundleBuilder::new(id);
        let mut first_error: Option<AppError> = None;

        for (kind, result) in [
            (ArtifactKind::Symbol, symbol),
            (ArtifactKind::Footprint, footprint),
            (ArtifactKind::Model, model),
        ] {
            match result {
                Ok(artifact) => builder.add(&artifact)?,
                Err(e) => {
                    if e.kind.is_client_error() {
                        tracing::warn!(lcsc_id = %id, kind = %kind, error = %e, "Artifact unavailable, omitted from bundle");
                    } else {
                        tracing::error!(lcsc_id = %id, kind = %kind, error = %e, "Artifact failed, omitted from bundle");
                    }
                    first_error.get_or_insert(e);
                }
            }
        }

        if builder.is_empty() {
            return Err(first_error
                .unwrap_or_else(|| AppError::not_found(format!("No artifacts available for {id}"))));
        }

        let bundle = builder.finish()?;
        tracing::info!(
            lcsc_id = %id,
            entries = ?bundle.entries,
            bytes = bundle.data.len(),
            "Bundle exported"
        );
        Ok(bundle)
    }
}
