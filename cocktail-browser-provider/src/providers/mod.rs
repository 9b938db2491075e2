//! Catalog provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "cocktaildb")]
mod cocktaildb;

#[cfg(feature = "cocktaildb")]
pub use cocktaildb::{COCKTAILDB_API_BASE, CocktailDbProvider};
