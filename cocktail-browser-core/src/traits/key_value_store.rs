//! Persistent key/value storage abstraction

use async_trait::async_trait;

use crate::error::CoreResult;

/// Key/value store Trait
///
/// Values are opaque strings; the services store JSON documents under fixed keys.
///
/// Platform implementations:
/// - `JsonFileStore`: one file per key under the data directory
/// - `InMemoryStore`: process-local map for tests and throwaway sessions
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - a value exists
    /// * `Ok(None)` - nothing stored yet
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}
