use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DrinkDetail, DrinkSummary};

/// Internal helpers for building provider-tagged errors.
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error and log messages.
    fn provider_name(&self) -> &'static str;

    /// Shortcut: invalid request parameter
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Remote drink catalog.
///
/// Implementations are stateless apart from their HTTP client and can be
/// shared across tasks behind an `Arc<dyn CatalogProvider>`.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Lists the drinks of a category in service order.
    ///
    /// An unknown or empty category yields an empty list, not an error.
    async fn list_by_category(&self, category: &str) -> Result<Vec<DrinkSummary>>;

    /// Looks up the full record for one drink.
    ///
    /// Returns `Ok(None)` when the service has no record for `drink_id`.
    async fn lookup(&self, drink_id: &str) -> Result<Option<DrinkDetail>>;
}
