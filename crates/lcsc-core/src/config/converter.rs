//! External converter configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the external CAD-to-KiCad converter process.
///
/// `args` is a template; the placeholders `{kind}`, `{input}`,
/// `{output_dir}` and `{lcsc_id}` are substituted per invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConverterConfig {
    /// Converter executable (resolved through `PATH` when not absolute).
    #[validate(length(min = 1))]
    pub command: String,
    /// Argument template.
    pub args: Vec<String>,
    /// Timeout in seconds for a single converter invocation.
    #[validate(range(min = 1, max = 600))]
    pub timeout_seconds: u64,
    /// Parent directory for per-request scratch directories.
    ///
    /// Falls back to the system temporary directory when unset.
    pub scratch_dir: Option<PathBuf>,
    /// Extra environment variables for the converter process.
    pub env: HashMap<String, String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            command: "easyeda2kicad-export".to_string(),
            args: vec![
                "{kind}".to_string(),
                "--input".to_string(),
                "{input}".to_string(),
                "--output".to_string(),
                "{output_dir}".to_string(),
            ],
            timeout_seconds: 60,
            scratch_dir: None,
            env: HashMap::new(),
        }
    }
}

impl ConverterConfig {
    /// Directory under which scratch directories are created.
    pub fn effective_scratch_root(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
