//! [`CadConverter`] backed by an external converter executable.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use lcsc_core::config::ConverterConfig;
use lcsc_core::result::AppResult;
use lcsc_core::traits::CadConverter;
use lcsc_core::types::{ArtifactKind, CadData, FootprintOutput, LcscId, ModelOutput};

use crate::error::ConverterError;
use crate::executor::{ExecutionParams, ProcessExecutor};
use crate::scratch::{ScratchSpace, stem_of};

/// Runs the configured converter once per artifact in a fresh scratch
/// directory.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    executor: ProcessExecutor,
    scratch: ScratchSpace,
}

/// Artifact file read back from a scratch directory.
struct RawOutput {
    name: Option<String>,
    data: Vec<u8>,
}

impl CommandConverter {
    /// Create a converter from configuration.
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            executor: ProcessExecutor::new(config),
            scratch: ScratchSpace::new(config.effective_scratch_root()),
        }
    }

    /// Root directory scratch directories are created in.
    pub fn scratch_root(&self) -> PathBuf {
        self.scratch.root().to_path_buf()
    }

    async fn run(
        &self,
        kind: ArtifactKind,
        id: &LcscId,
        cad: &CadData,
    ) -> Result<RawOutput, ConverterError> {
        let scratch = self.scratch.prepare(cad).await?;
        let params = ExecutionParams {
            kind,
            lcsc_id: id,
            input_path: scratch.input_path(),
            output_dir: scratch.output_dir(),
        };

        let result = self.executor.execute(&params, scratch.path()).await?;
        if !result.stdout.is_empty() {
            tracing::debug!(kind = %kind, lcsc_id = %id, stdout = %result.stdout, "Converter stdout");
        }
        if !result.stderr.is_empty() {
            tracing::debug!(kind = %kind, lcsc_id = %id, stderr = %result.stderr, "Converter stderr");
        }

        let path = scratch
            .find_output(kind)
            .await?
            .ok_or(ConverterError::Unavailable(kind))?;
        let data = tokio::fs::read(&path).await?;
        if data.is_empty() {
            return Err(ConverterError::OutputEmpty { path });
        }

        tracing::info!(
            kind = %kind,
            lcsc_id = %id,
            bytes = data.len(),
            duration_ms = result.duration_ms,
            "Converter produced artifact"
        );

        Ok(RawOutput {
            name: stem_of(&path),
            data,
        })
    }

    async fn run_text(
        &self,
        kind: ArtifactKind,
        id: &LcscId,
        cad: &CadData,
    ) -> Result<(Option<String>, String), ConverterError> {
        let raw = self.run(kind, id, cad).await?;
        let text = String::from_utf8(raw.data).map_err(|_| ConverterError::InvalidUtf8(kind))?;
        Ok((raw.name, text))
    }
}

#[async_trait]
impl CadConverter for CommandConverter {
    async fn symbol(&self, id: &LcscId, cad: &CadData) -> AppResult<String> {
        let (_, text) = self.run_text(ArtifactKind::Symbol, id, cad).await?;
        Ok(text)
    }

    async fn footprint(&self, id: &LcscId, cad: &CadData) -> AppResult<FootprintOutput> {
        let (name, content) = self.run_text(ArtifactKind::Footprint, id, cad).await?;
        Ok(FootprintOutput {
            name: name.unwrap_or_else(|| id.to_string()),
            content,
        })
    }

    async fn model(&self, id: &LcscId, cad: &CadData) -> AppResult<ModelOutput> {
        let raw = self.run(ArtifactKind::Model, id, cad).await?;
        Ok(ModelOutput {
            name: raw.name.unwrap_or_else(|| id.to_string()),
            step: Bytes::from(raw.data),
        })
    }
}
