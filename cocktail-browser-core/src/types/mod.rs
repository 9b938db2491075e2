//! Domain type definitions

mod catalog;
mod preferences;

pub use catalog::{CatalogItem, EnrichedDetails};
pub use preferences::{Category, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, Preferences, clamp_limit};
