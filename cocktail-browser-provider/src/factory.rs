//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::CatalogProvider;
use crate::types::ProviderConfig;

#[cfg(feature = "cocktaildb")]
use crate::providers::CocktailDbProvider;

/// Creates a [`CatalogProvider`] instance from the given configuration.
///
/// The concrete provider type is determined by the [`ProviderConfig`] variant.
/// The returned provider is wrapped in `Arc<dyn CatalogProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cocktail_browser_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(ProviderConfig::default()).unwrap();
/// ```
pub fn create_provider(config: ProviderConfig) -> Result<Arc<dyn CatalogProvider>> {
    match config {
        #[cfg(feature = "cocktaildb")]
        ProviderConfig::CocktailDb { base_url } => {
            let provider = match base_url {
                Some(url) => CocktailDbProvider::with_base_url(&url)?,
                None => CocktailDbProvider::new()?,
            };
            Ok(Arc::new(provider))
        }
    }
}
