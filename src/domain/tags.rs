//! Tag collections in their persisted form.
//!
//! Tags are stored as JSON array text (or nothing at all). Decoding happens
//! lazily at the points that need the strings, so a corrupted column never
//! prevents the rest of a record from being served.

use thiserror::Error;

/// Failure to decode a persisted tag column.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed tag data: {0}")]
pub struct TagDecodeError(String);

/// Tag column exactly as persisted: JSON array text, or `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTags(Option<String>);

impl StoredTags {
    /// Wrap a raw column value without inspecting it.
    pub fn from_raw(raw: Option<String>) -> Self {
        Self(raw)
    }

    /// Serialize tags for storage. Order and duplicates are kept as given.
    pub fn encode(tags: &[String]) -> Self {
        Self(serde_json::to_string(tags).ok())
    }

    /// Encode optional request tags; absent tags are stored as `NULL`.
    pub fn encode_optional(tags: Option<&[String]>) -> Self {
        tags.map(Self::encode).unwrap_or_default()
    }

    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_raw(self) -> Option<String> {
        self.0
    }

    /// Decode the stored text into tag strings.
    ///
    /// Absent, empty and JSON `null` values decode to an empty list.
    pub fn decode(&self) -> Result<Vec<String>, TagDecodeError> {
        decode_tags(self.raw())
    }

    /// Decode for presentation, degrading malformed data to an empty list.
    pub fn materialize(&self) -> Vec<String> {
        self.decode().unwrap_or_else(|e| {
            log::warn!("Serving empty tag list: {e}");
            Vec::new()
        })
    }
}

/// Decode a raw tag column value.
pub fn decode_tags(raw: Option<&str>) -> Result<Vec<String>, TagDecodeError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.is_empty() => Ok(Vec::new()),
        Some(text) => serde_json::from_str::<Option<Vec<String>>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|e| TagDecodeError(e.to_string())),
    }
}
