//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use cocktail_browser_provider::{
    CatalogProvider, DrinkDetail, DrinkSummary, ProviderError, Result as ProviderResult,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::KeyValueStore;

// ===== MockKeyValueStore =====

pub struct MockKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    /// If Some, `get` returns this error
    get_error: RwLock<Option<String>>,
    /// If Some, `set` returns this error
    set_error: RwLock<Option<String>>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
        }
    }

    pub async fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    pub async fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }
}

#[async_trait]
impl KeyValueStore for MockKeyValueStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.insert_raw(key, value).await;
        Ok(())
    }
}

// ===== MockCatalogProvider =====

pub struct MockCatalogProvider {
    categories: RwLock<HashMap<String, Vec<DrinkSummary>>>,
    details: RwLock<HashMap<String, DrinkDetail>>,
    failing_lookups: RwLock<HashSet<String>>,
    list_error: RwLock<Option<ProviderError>>,
    /// Drink ids passed to `lookup`, in call order
    lookups: RwLock<Vec<String>>,
}

impl MockCatalogProvider {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(HashMap::new()),
            details: RwLock::new(HashMap::new()),
            failing_lookups: RwLock::new(HashSet::new()),
            list_error: RwLock::new(None),
            lookups: RwLock::new(Vec::new()),
        }
    }

    pub async fn add_category(&self, category: &str, drinks: Vec<DrinkSummary>) {
        self.categories
            .write()
            .await
            .insert(category.to_string(), drinks);
    }

    pub async fn add_detail(&self, detail: DrinkDetail) {
        self.details.write().await.insert(detail.id.clone(), detail);
    }

    pub async fn fail_lookup(&self, drink_id: &str) {
        self.failing_lookups
            .write()
            .await
            .insert(drink_id.to_string());
    }

    pub async fn set_list_error(&self, err: Option<ProviderError>) {
        *self.list_error.write().await = err;
    }

    pub async fn lookup_log(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalogProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_by_category(&self, category: &str) -> ProviderResult<Vec<DrinkSummary>> {
        if let Some(ref err) = *self.list_error.read().await {
            return Err(err.clone());
        }
        Ok(self
            .categories
            .read()
            .await
            .get(category)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup(&self, drink_id: &str) -> ProviderResult<Option<DrinkDetail>> {
        self.lookups.write().await.push(drink_id.to_string());
        if self.failing_lookups.read().await.contains(drink_id) {
            return Err(ProviderError::ParseError {
                provider: "mock".to_string(),
                detail: format!("broken record for {drink_id}"),
            });
        }
        Ok(self.details.read().await.get(drink_id).cloned())
    }
}

// ===== Factory methods =====

/// Create a test `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockKeyValueStore>,
    Arc<MockCatalogProvider>,
) {
    let store = Arc::new(MockKeyValueStore::new());
    let provider = Arc::new(MockCatalogProvider::new());

    let ctx = Arc::new(ServiceContext::new(store.clone(), provider.clone()));

    (ctx, store, provider)
}

/// `n` listing entries with ids `"1"..="n"`
pub fn test_summaries(n: usize) -> Vec<DrinkSummary> {
    (1..=n)
        .map(|i| DrinkSummary {
            id: i.to_string(),
            name: format!("Drink {i}"),
            thumbnail_url: None,
        })
        .collect()
}

/// Detail record for `id` with two ingredients
pub fn test_detail(id: &str) -> DrinkDetail {
    DrinkDetail {
        id: id.to_string(),
        name: format!("Drink {id}"),
        instructions: "Pour and stir.".to_string(),
        thumbnail_url: format!("https://example.test/{id}.jpg"),
        ingredients: vec!["Lager".to_string(), "Lime".to_string()],
    }
}
