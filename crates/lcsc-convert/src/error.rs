//! Error types for conversion and bundling.
//!
//! Both enums map into [`AppError`] so handlers can use `?` throughout.

use std::path::PathBuf;

use lcsc_core::error::{AppError, ErrorKind};
use lcsc_core::types::ArtifactKind;
use thiserror::Error;

/// Failures of the external converter.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The converter executable could not be started.
    #[error("Failed to start converter '{command}': {source}")]
    Spawn {
        /// Configured command.
        command: String,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The converter did not finish in time and was killed.
    #[error("Converter timed out after {0} seconds")]
    Timeout(u64),

    /// The converter exited with a non-zero code.
    #[error("Converter failed with exit code {code}: {stderr}")]
    ProcessFailed {
        /// The exit code.
        code: i32,
        /// Captured standard error (truncated).
        stderr: String,
    },

    /// The converter was terminated by a signal.
    #[error("Converter was killed (signal termination)")]
    Killed,

    /// The converter succeeded but produced no artifact of this kind.
    #[error("No {0} available for this component")]
    Unavailable(ArtifactKind),

    /// The produced artifact file is empty.
    #[error("Converter produced an empty file: {path}")]
    OutputEmpty {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Text output was not valid UTF-8.
    #[error("Converter produced non UTF-8 {0} output")]
    InvalidUtf8(ArtifactKind),

    /// Scratch I/O error.
    #[error("Scratch I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CAD document could not be serialized for the converter.
    #[error("Failed to serialize CAD data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ConverterError> for AppError {
    fn from(err: ConverterError) -> Self {
        let kind = match &err {
            ConverterError::Unavailable(_) | ConverterError::OutputEmpty { .. } => {
                ErrorKind::NotFound
            }
            ConverterError::Io(_) => ErrorKind::Storage,
            ConverterError::Serialize(_) => ErrorKind::Serialization,
            _ => ErrorKind::Conversion,
        };
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}

/// Failures while building a zip bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Two artifacts share a file name.
    #[error("Duplicate bundle entry: {0}")]
    DuplicateEntry(String),

    /// ZIP library error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error while writing the archive.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BundleError> for AppError {
    fn from(err: BundleError) -> Self {
        AppError::internal(err.to_string())
    }
}
