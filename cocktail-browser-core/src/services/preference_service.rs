//! Preference persistence service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::Preferences;

/// Storage key for the saved preferences.
pub const PREFERENCES_KEY: &str = "preferences";

/// Preference persistence service
pub struct PreferenceService {
    ctx: Arc<ServiceContext>,
}

impl PreferenceService {
    /// Create preference service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Returns the stored preferences, or the defaults when none are usable.
    ///
    /// A missing key, an unreadable store and a value of the wrong shape all
    /// fall back to [`Preferences::default`]. Stored limits are not range-checked.
    pub async fn load(&self) -> Preferences {
        let raw = match self.ctx.store.get(PREFERENCES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored preferences, using defaults");
                return Preferences::default();
            }
            Err(e) => {
                log::error!("Failed to read preferences: {e}");
                return Preferences::default();
            }
        };

        match serde_json::from_str::<Preferences>(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Ignoring malformed stored preferences: {e}");
                Preferences::default()
            }
        }
    }

    /// Persists `prefs`, overwriting whatever was stored.
    pub async fn save(&self, prefs: &Preferences) -> CoreResult<()> {
        let json = serde_json::to_string(prefs)?;
        self.ctx.store.set(PREFERENCES_KEY, &json).await?;
        log::info!(
            "Saved preferences: category={}, limit={}",
            prefs.category,
            prefs.limit
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::create_test_context;
    use crate::traits::KeyValueStore;
    use crate::types::Category;

    #[tokio::test]
    async fn load_from_empty_store_returns_default() {
        let (ctx, _, _) = create_test_context();
        let svc = PreferenceService::new(ctx);

        let prefs = svc.load().await;

        assert_eq!(prefs.category, Category::Beer);
        assert_eq!(prefs.limit, 10);
    }

    #[tokio::test]
    async fn load_after_save_returns_saved_value() {
        let (ctx, _, _) = create_test_context();
        let svc = PreferenceService::new(ctx);
        let prefs = Preferences {
            category: Category::CoffeeTea,
            limit: 42,
        };

        svc.save(&prefs).await.unwrap();

        assert_eq!(svc.load().await, prefs);
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let (ctx, store, _) = create_test_context();
        let svc = PreferenceService::new(ctx);

        svc.save(&Preferences {
            category: Category::Shot,
            limit: 1,
        })
        .await
        .unwrap();
        let latest = Preferences {
            category: Category::Cocoa,
            limit: 100,
        };
        svc.save(&latest).await.unwrap();

        assert_eq!(svc.load().await, latest);
        let raw = store.get(PREFERENCES_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"category":"Cocoa","limit":100}"#);
    }

    #[tokio::test]
    async fn malformed_value_falls_back_to_default() {
        let (ctx, store, _) = create_test_context();
        store.insert_raw(PREFERENCES_KEY, "{\"category\":").await;
        let svc = PreferenceService::new(ctx);

        assert_eq!(svc.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn wrong_shape_falls_back_to_default() {
        let (ctx, store, _) = create_test_context();
        store
            .insert_raw(PREFERENCES_KEY, r#"{"category":"Wine","limit":5}"#)
            .await;
        let svc = PreferenceService::new(ctx);

        assert_eq!(svc.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn stored_out_of_range_limit_is_trusted() {
        let (ctx, store, _) = create_test_context();
        store
            .insert_raw(PREFERENCES_KEY, r#"{"category":"Cocktail","limit":500}"#)
            .await;
        let svc = PreferenceService::new(ctx);

        let prefs = svc.load().await;
        assert_eq!(prefs.category, Category::Cocktail);
        assert_eq!(prefs.limit, 500);
    }

    #[tokio::test]
    async fn unreadable_store_falls_back_to_default() {
        let (ctx, store, _) = create_test_context();
        store.set_get_error(Some("permission denied".into())).await;
        let svc = PreferenceService::new(ctx);

        assert_eq!(svc.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn save_failure_propagates() {
        let (ctx, store, _) = create_test_context();
        store.set_set_error(Some("disk full".into())).await;
        let svc = PreferenceService::new(ctx);

        let result = svc.save(&Preferences::default()).await;
        assert!(matches!(result, Err(CoreError::StorageError(ref m)) if m == "disk full"));
    }
}
