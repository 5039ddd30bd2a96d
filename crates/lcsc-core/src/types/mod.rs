//! Per-request domain types.

pub mod artifact;
pub mod id;

pub use artifact::{ArtifactKind, CadData, ExportArtifact, FootprintOutput, ModelOutput};
pub use id::LcscId;
