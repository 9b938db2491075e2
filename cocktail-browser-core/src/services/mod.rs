//! Business logic service layer

mod catalog_service;
mod preference_service;

pub use catalog_service::{CATALOG_KEY, CatalogService};
pub use preference_service::{PREFERENCES_KEY, PreferenceService};

use std::sync::Arc;

use cocktail_browser_provider::CatalogProvider;

use crate::traits::KeyValueStore;

/// Service context - holds all dependencies
///
/// The platform layer builds this context and injects its storage and provider.
pub struct ServiceContext {
    /// Persistent key/value store
    pub store: Arc<dyn KeyValueStore>,
    /// Remote drink catalog
    pub provider: Arc<dyn CatalogProvider>,
}

impl ServiceContext {
    /// Create service context
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, provider: Arc<dyn CatalogProvider>) -> Self {
        Self { store, provider }
    }
}
