//! # cocktail-browser-provider
//!
//! A drink catalog abstraction with a client for the public
//! [TheCocktailDB](https://www.thecocktaildb.com/) JSON API.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Endpoint |
//! |----------|-------------|----------|
//! | [TheCocktailDB](https://www.thecocktaildb.com/api.php) | `cocktaildb` | `https://www.thecocktaildb.com/api/json/v1/1` |
//!
//! ## Feature Flags
//!
//! - **`cocktaildb`** *(default)*: Enable the TheCocktailDB provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cocktail_browser_provider::{create_provider, CatalogProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderConfig::default())?;
//!
//!     // 1. List a category
//!     let drinks = provider.list_by_category("Beer").await?;
//!
//!     // 2. Look up the first drink
//!     if let Some(first) = drinks.first() {
//!         if let Some(detail) = provider.lookup(&first.id).await? {
//!             println!("{}: {}", detail.name, detail.ingredients.join(", "));
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: the request did not complete
//! - [`ProviderError::HttpStatus`]: the service answered with a non-2xx status
//! - [`ProviderError::ParseError`]: the body was not the expected JSON
//!
//! Nothing is retried automatically; [`ProviderError::is_transient`] tells the
//! caller whether resubmitting makes sense.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::CatalogProvider;

// Re-export types
pub use types::{DrinkDetail, DrinkSummary, ProviderConfig};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cocktaildb")]
pub use providers::{COCKTAILDB_API_BASE, CocktailDbProvider};
