//! Cocktail Browser Core Library
//!
//! Provides the business logic of the cocktail browser:
//! - Preference persistence (Preference Service)
//! - Two-phase catalog retrieval with caching (Catalog Service)
//!
//! This library is platform-independent: storage is abstracted through
//! [`KeyValueStore`] and the remote catalog through
//! [`CatalogProvider`](cocktail_browser_provider::CatalogProvider).

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{CATALOG_KEY, CatalogService, PREFERENCES_KEY, PreferenceService, ServiceContext};
pub use traits::KeyValueStore;
pub use types::{CatalogItem, Category, EnrichedDetails, Preferences};
