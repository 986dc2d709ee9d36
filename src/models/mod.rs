//! Diesel row types and their conversions to domain entities.

pub mod category;
pub mod config;
pub mod contact;
pub mod resource;
