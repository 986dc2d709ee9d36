//! Validated domain entities shared by the repository and service layers.

pub mod category;
pub mod contact;
pub mod resource;
pub mod tags;
pub mod types;
