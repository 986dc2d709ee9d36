//! JSON response bodies.

pub mod categories;
pub mod contacts;
pub mod resources;
pub mod tags;

use serde::Serialize;

/// Body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation body for deletions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDto {
    pub message: String,
}
