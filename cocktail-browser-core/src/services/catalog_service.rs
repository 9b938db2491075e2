//! Catalog retrieval service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{CatalogItem, EnrichedDetails, Preferences};

/// Storage key for the last fetched list.
pub const CATALOG_KEY: &str = "cocktails";

/// Catalog retrieval service
///
/// Fetching is two-phase: one category listing, then one detail lookup per
/// kept item. Lookups run one after another in list order.
pub struct CatalogService {
    ctx: Arc<ServiceContext>,
}

impl CatalogService {
    /// Create catalog service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetches up to `prefs.limit` drinks of `prefs.category`, enriched with details.
    ///
    /// Listing failures are returned. A lookup that fails or finds no record
    /// leaves that item's `details` empty and the fetch continues. The result
    /// is stored under [`CATALOG_KEY`]; a storage failure is logged and the
    /// list is still returned.
    pub async fn fetch(&self, prefs: &Preferences) -> CoreResult<Vec<CatalogItem>> {
        let provider = &self.ctx.provider;
        let category = prefs.category.as_str();

        log::info!(
            "Fetching up to {} drinks in category '{category}'",
            prefs.limit
        );

        let summaries = provider.list_by_category(category).await?;
        let available = summaries.len();
        let limit = usize::try_from(prefs.limit).unwrap_or(usize::MAX);

        let mut items: Vec<CatalogItem> = summaries
            .into_iter()
            .take(limit)
            .map(CatalogItem::from)
            .collect();

        for item in &mut items {
            match provider.lookup(&item.id).await {
                Ok(Some(detail)) => item.details = Some(EnrichedDetails::from(detail)),
                Ok(None) => log::debug!("No details for drink {} ({})", item.id, item.name),
                Err(e) => log::warn!("Detail lookup for drink {} failed: {e}", item.id),
            }
        }

        let enriched = items.iter().filter(|i| i.details.is_some()).count();
        log::info!(
            "Fetched {} of {available} drinks ({enriched} with details)",
            items.len()
        );

        if let Err(e) = self.store(&items).await {
            log::error!("Failed to cache fetched drinks: {e}");
        }

        Ok(items)
    }

    /// Returns the last stored list, whatever preferences produced it.
    ///
    /// `None` when nothing is stored or the stored value cannot be read.
    pub async fn load_cached(&self) -> Option<Vec<CatalogItem>> {
        let raw = match self.ctx.store.get(CATALOG_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                log::error!("Failed to read cached drinks: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                log::warn!("Ignoring malformed drink cache: {e}");
                None
            }
        }
    }

    /// Startup path: the cached list when there is one, otherwise a fresh fetch.
    pub async fn cached_or_fetch(&self, prefs: &Preferences) -> CoreResult<Vec<CatalogItem>> {
        if let Some(items) = self.load_cached().await {
            log::info!("Using {} cached drinks", items.len());
            return Ok(items);
        }
        self.fetch(prefs).await
    }

    async fn store(&self, items: &[CatalogItem]) -> CoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.ctx.store.set(CATALOG_KEY, &json).await
    }
}
