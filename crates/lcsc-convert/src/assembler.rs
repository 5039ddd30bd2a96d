//! Wraps converter output into downloadable KiCad artifacts.

use std::sync::Arc;

use lcsc_core::result::AppResult;
use lcsc_core::traits::CadConverter;
use lcsc_core::types::{ArtifactKind, CadData, ExportArtifact, LcscId};

use crate::scratch::sanitize_stem;

/// KiCad symbol library format version written in the header.
pub const SYMBOL_LIB_VERSION: u32 = 20211014;
/// Generator tag written in the symbol library header.
pub const GENERATOR: &str = "lcsc_kicad_exporter";

/// Turns converter results into named, typed byte buffers.
#[derive(Debug, Clone)]
pub struct ArtifactAssembler {
    converter: Arc<dyn CadConverter>,
}

impl ArtifactAssembler {
    /// Create an assembler over `converter`.
    pub fn new(converter: Arc<dyn CadConverter>) -> Self {
        Self { converter }
    }

    /// `{id}.kicad_sym` containing the component's symbol library.
    pub async fn symbol(&self, id: &LcscId, cad: &CadData) -> AppResult<ExportArtifact> {
        let body = self.converter.symbol(id, cad).await?;
        let library = wrap_symbol_library(&body);
        Ok(ExportArtifact::new(ArtifactKind::Symbol, id.as_str(), library))
    }

    /// `{footprint_name}.kicad_mod`.
    pub async fn footprint(&self, id: &LcscId, cad: &CadData) -> AppResult<ExportArtifact> {
        let footprint = self.converter.footprint(id, cad).await?;
        let stem = stem_or_id(&footprint.name, id);
        Ok(ExportArtifact::new(
            ArtifactKind::Footprint,
            &stem,
            footprint.content,
        ))
    }

    /// `{model_name}.step`.
    pub async fn model(&self, id: &LcscId, cad: &CadData) -> AppResult<ExportArtifact> {
        let model = self.converter.model(id, cad).await?;
        let stem = stem_or_id(&model.name, id);
        Ok(ExportArtifact::new(ArtifactKind::Model, &stem, model.step))
    }
}

fn stem_or_id(name: &str, id: &LcscId) -> String {
    sanitize_stem(name).unwrap_or_else(|| id.to_string())
}

/// Wrap a symbol block in a `kicad_symbol_lib` container.
///
/// Output that already is a complete library is returned unchanged.
pub fn wrap_symbol_library(body: &str) -> String {
    let body = body.trim();
    if body.starts_with("(kicad_symbol_lib") {
        return format!("{body}\n");
    }

    let mut out = String::with_capacity(body.len() + 96);
    out.push_str("(kicad_symbol_lib\n");
    out.push_str(&format!("  (version {SYMBOL_LIB_VERSION})\n"));
    out.push_str(&format!("  (generator {GENERATOR})\n"));
    for line in body.lines() {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(")\n");
    out
}
