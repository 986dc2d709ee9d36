//! In-memory search and tag ranking over records fetched from the store.

pub mod filter;
pub mod tags;

pub use filter::{MatchOutcome, SearchQuery, Searchable, filter};
pub use tags::{TagSort, TagSummary, aggregate};
