//! Component identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum accepted identifier length.
const MAX_LEN: usize = 64;

/// An LCSC catalog identifier such as `C2040`.
///
/// Opaque to the exporter; the only guarantee is that it is non-empty and
/// safe to embed in file names, headers and process arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LcscId(String);

impl LcscId {
    /// Parse a raw caller-supplied value.
    ///
    /// Surrounding whitespace is ignored. Blank input is reported as a
    /// missing parameter.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Missing lcsc_id parameter"));
        }
        if trimmed.len() > MAX_LEN {
            return Err(AppError::validation(format!(
                "lcsc_id exceeds {MAX_LEN} characters"
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        {
            return Err(AppError::validation(format!(
                "Invalid lcsc_id: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LcscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LcscId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LcscId> for String {
    fn from(id: LcscId) -> Self {
        id.0
    }
}
