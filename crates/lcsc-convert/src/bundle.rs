//! In-memory zip bundles of export artifacts.

use std::collections::BTreeSet;
use std::io::{Cursor, Write};

use bytes::Bytes;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use lcsc_core::types::{ExportArtifact, LcscId};

use crate::error::BundleError;

/// MIME type of a bundle download.
pub const BUNDLE_CONTENT_TYPE: &str = "application/zip";

/// A finished zip archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Download file name, `{id}.zip`.
    pub filename: String,
    /// Entry names in insertion order.
    pub entries: Vec<String>,
    /// Archive bytes.
    pub data: Bytes,
}

/// Accumulates artifacts and writes them as a deflated zip.
///
/// Entries get a fixed timestamp, so equal inputs give byte-identical
/// archives.
pub struct BundleBuilder {
    filename: String,
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: BTreeSet<String>,
    entries: Vec<String>,
}

impl BundleBuilder {
    /// Start a bundle named after `id`.
    pub fn new(id: &LcscId) -> Self {
        Self {
            filename: format!("{id}.zip"),
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: BTreeSet::new(),
            entries: Vec::new(),
        }
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an artifact; file names must be unique within the bundle.
    pub fn add(&mut self, artifact: &ExportArtifact) -> Result<(), BundleError> {
        if !self.names.insert(artifact.filename.clone()) {
            return Err(BundleError::DuplicateEntry(artifact.filename.clone()));
        }

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        self.writer.start_file(artifact.filename.as_str(), options)?;
        self.writer.write_all(&artifact.data)?;
        self.entries.push(artifact.filename.clone());
        Ok(())
    }

    /// Finish the archive.
    pub fn finish(self) -> Result<Bundle, BundleError> {
        let cursor = self.writer.finish()?;
        Ok(Bundle {
            filename: self.filename,
            entries: self.entries,
            data: Bytes::from(cursor.into_inner()),
        })
    }
}
