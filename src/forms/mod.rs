//! JSON request bodies and their conversion into validated domain payloads.

pub mod categories;
pub mod contacts;
pub mod resources;
