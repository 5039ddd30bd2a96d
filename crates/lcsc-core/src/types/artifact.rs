//! CAD data and export artifacts.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Raw component description returned by the upstream lookup.
///
/// The exporter never interprets it; it is handed to the converter as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CadData(pub serde_json::Value);

impl CadData {
    /// Serialize the document for handing to an external process.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.0)
    }
}

/// The three artifact kinds the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Schematic symbol library.
    Symbol,
    /// PCB footprint module.
    Footprint,
    /// 3D STEP model.
    Model,
}

impl ArtifactKind {
    /// Name passed to the converter as `{kind}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Footprint => "footprint",
            Self::Model => "model",
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Symbol => "kicad_sym",
            Self::Footprint => "kicad_mod",
            Self::Model => "step",
        }
    }

    /// MIME type of the download.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Symbol | Self::Footprint => "text/plain",
            Self::Model => "application/step",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Footprint module text and the footprint's own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintOutput {
    /// Footprint name, used as the download file stem.
    pub name: String,
    /// `.kicad_mod` module text.
    pub content: String,
}

/// A STEP model and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutput {
    /// Model name, used as the download file stem.
    pub name: String,
    /// STEP file bytes.
    pub step: Bytes,
}

/// A named, typed byte buffer ready to be sent or bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Which kind of artifact this is.
    pub kind: ArtifactKind,
    /// Download file name including extension.
    pub filename: String,
    /// MIME type.
    pub content_type: &'static str,
    /// File contents.
    pub data: Bytes,
}

impl ExportArtifact {
    /// Build an artifact named `{stem}.{extension}` for `kind`.
    pub fn new(kind: ArtifactKind, stem: &str, data: impl Into<Bytes>) -> Self {
        Self {
            kind,
            filename: format!("{stem}.{}", kind.extension()),
            content_type: kind.content_type(),
            data: data.into(),
        }
    }
}
