use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload accepted by create and update.
///
/// Everything is optional on the wire; [`validate`](Self::validate) enforces
/// what must be present. Unknown fields such as `id` or `finished` are ignored.
/// `year` takes any JSON integer that fits in an `i64`; a fractional year
/// such as `2020.5` does not decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// Why a [`BookInput`] was rejected.
///
/// The display text is the client-facing reason; the catalog prefixes it
/// with the failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Mohon isi nama buku")]
    MissingName,
    #[error("readPage tidak boleh lebih besar dari pageCount")]
    ReadPageExceedsPageCount,
}

impl BookInput {
    /// Check the payload. The name rule is checked before the page rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingName);
        }
        if self.read_page > self.page_count {
            return Err(ValidationError::ReadPageExceedsPageCount);
        }
        Ok(())
    }
}
