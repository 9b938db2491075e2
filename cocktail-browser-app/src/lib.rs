//! Platform-agnostic application bootstrap for Cocktail Browser.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter injection),
//! plus the storage adapters in [`adapters`].

pub mod adapters;

use std::sync::Arc;

use cocktail_browser_core::error::{CoreError, CoreResult};
use cocktail_browser_core::services::{CatalogService, PreferenceService, ServiceContext};
use cocktail_browser_core::traits::KeyValueStore;
use cocktail_browser_core::types::{CatalogItem, Preferences};
use cocktail_browser_provider::{CatalogProvider, ProviderConfig, create_provider};

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the store and the provider)
    pub ctx: Arc<ServiceContext>,
    /// Preference service
    pub preference_service: Arc<PreferenceService>,
    /// Catalog service
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    /// First startup step: the stored preferences, or the defaults.
    ///
    /// Frontends await this before their first frame so the preferences view
    /// never shows anything else.
    pub async fn startup_preferences(&self) -> Preferences {
        let preferences = self.preference_service.load().await;
        log::info!(
            "Starting with preferences {}/{}",
            preferences.category,
            preferences.limit
        );
        preferences
    }

    /// Second startup step: the cached list, or a fresh fetch with `preferences`.
    pub async fn startup_catalog(
        &self,
        preferences: &Preferences,
    ) -> CoreResult<Vec<CatalogItem>> {
        let catalog = self.catalog_service.cached_or_fetch(preferences).await;

        match &catalog {
            Ok(items) => log::info!("Startup complete: {} drinks available", items.len()),
            Err(e) if e.is_expected() => log::warn!("Startup fetch failed: {e}"),
            Err(e) => log::error!("Startup fetch failed: {e}"),
        }

        catalog
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `store`: where preferences and the fetched list are persisted
///
/// # Optional
/// - `provider`: defaults to a provider created from `provider_config`
/// - `provider_config`: defaults to the public TheCocktailDB endpoint
pub struct AppStateBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    provider: Option<Arc<dyn CatalogProvider>>,
    provider_config: ProviderConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            provider: None,
            provider_config: ProviderConfig::default(),
        }
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn CatalogProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn provider_config(mut self, config: ProviderConfig) -> Self {
        self.provider_config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing,
    /// or `CoreError::Provider` if the default provider cannot be created.
    pub fn build(self) -> CoreResult<AppState> {
        let store = self
            .store
            .ok_or_else(|| CoreError::ValidationError("store is required".to_string()))?;
        let provider = match self.provider {
            Some(provider) => provider,
            None => create_provider(self.provider_config)?,
        };

        log::debug!("Using catalog provider '{}'", provider.id());

        let ctx = Arc::new(ServiceContext::new(store, provider));

        let preference_service = Arc::new(PreferenceService::new(Arc::clone(&ctx)));
        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&ctx)));

        Ok(AppState {
            ctx,
            preference_service,
            catalog_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
