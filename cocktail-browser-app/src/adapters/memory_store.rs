//! In-memory key/value store

use std::collections::HashMap;

use async_trait::async_trait;
use cocktail_browser_core::error::CoreResult;
use cocktail_browser_core::traits::KeyValueStore;
use tokio::sync::RwLock;

/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("preferences").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_overwrites() {
        let store = InMemoryStore::new();
        store.set("k", "1").await.unwrap();
        store.set("k", "2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
    }
}
