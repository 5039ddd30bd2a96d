//! Per-conversion scratch directories and output discovery.
//!
//! A [`Scratch`] owns a [`TempDir`]; the directory and everything the
//! converter wrote into it are removed when the value is dropped, whichever
//! way the conversion ends.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use lcsc_core::types::{ArtifactKind, CadData};

use crate::error::ConverterError;

/// File name of the CAD document inside a scratch directory.
const INPUT_FILE: &str = "cad.json";
/// Directory the converter is told to write into.
const OUTPUT_DIR: &str = "out";

/// Factory for scratch directories under a common root.
#[derive(Debug, Clone)]
pub struct ScratchSpace {
    root: PathBuf,
}

impl ScratchSpace {
    /// Create a factory rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory scratch directories are created in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a fresh scratch directory holding the CAD document.
    pub async fn prepare(&self, cad: &CadData) -> Result<Scratch, ConverterError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let dir = tempfile::Builder::new()
            .prefix("lcsc-")
            .tempdir_in(&self.root)?;

        let scratch = Scratch { dir };
        tokio::fs::write(scratch.input_path(), cad.to_json_bytes()?).await?;
        tokio::fs::create_dir(scratch.output_dir()).await?;
        Ok(scratch)
    }
}

/// A scratch directory scoped to one conversion.
#[derive(Debug)]
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// The scratch directory itself.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the CAD document.
    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join(INPUT_FILE)
    }

    /// Directory the converter writes artifacts into.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join(OUTPUT_DIR)
    }

    /// Locate the artifact of `kind` the converter produced.
    ///
    /// Entries are visited in name order so the choice is stable when a
    /// converter writes more than one matching file.
    pub async fn find_output(&self, kind: ArtifactKind) -> Result<Option<PathBuf>, ConverterError> {
        let mut entries = tokio::fs::read_dir(self.output_dir()).await?;
        let mut candidates = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && matches_kind(&path, kind) {
                candidates.push(path);
            }
        }

        candidates.sort();
        Ok(candidates.into_iter().next())
    }
}

fn matches_kind(path: &Path, kind: ArtifactKind) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    match kind {
        ArtifactKind::Model => ext == "step" || ext == "stp",
        _ => ext == kind.extension(),
    }
}

/// Sanitize a converter-supplied name into a safe file stem.
///
/// Keeps letters, digits, `-`, `_` and `.`, turns whitespace into `_` and
/// drops everything else. Returns `None` when nothing usable remains.
pub fn sanitize_stem(name: &str) -> Option<String> {
    let sanitized: String = name
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .take(200)
        .collect();

    let sanitized = sanitized.trim_matches('.');
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized.to_string())
    }
}

/// File stem of `path`, sanitized.
pub fn stem_of(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(sanitize_stem)
}
