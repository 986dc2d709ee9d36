//! Business logic behind the HTTP routes.
//!
//! Services are generic over the repository traits so they can be exercised
//! against the in-memory test repository.

pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod contacts;
pub mod errors;
pub mod health;
pub mod resources;
pub mod tags;
