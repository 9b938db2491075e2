//! JSON file key/value store
//!
//! Each key is stored as `{dir}/{key}.json`. Values are written verbatim, so
//! the files hold whatever JSON the services produced. Reads go through an
//! in-memory cache that is filled on first access per key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cocktail_browser_core::error::{CoreError, CoreResult};
use cocktail_browser_core::traits::KeyValueStore;
use tokio::fs;
use tokio::sync::Mutex;

/// File-per-key store rooted at a data directory
pub struct JsonFileStore {
    dir: PathBuf,
    /// In-memory cache; `None` records a key known to have no file
    cache: Mutex<HashMap<String, Option<String>>>,
}

impl JsonFileStore {
    /// Creates a store under `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Directory holding the value files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    fn path_for(&self, key: &str) -> CoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoreError::ValidationError(format!(
                "Invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Ensure the data directory exists
    async fn ensure_dir(&self) -> CoreResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
            log::debug!("Created data directory {}", self.dir.display());
        }
        Ok(())
    }

    /// Read a value file, treating a missing file as no value
    async fn load_from_file(path: &Path) -> CoreResult<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let path = self.path_for(key)?;

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.get(key) {
            return Ok(cached.clone());
        }

        let value = Self::load_from_file(&path).await?;
        cache.insert(key.to_string(), value.clone());
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let path = self.path_for(key)?;
        self.ensure_dir().await?;

        let mut cache = self.cache.lock().await;
        fs::write(&path, value).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", path.display()))
        })?;
        cache.insert(key.to_string(), Some(value.to_string()));

        log::debug!("Stored {} bytes under '{key}'", value.len());
        Ok(())
    }
}
