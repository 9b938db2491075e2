use std::sync::Arc;

use cocktail_browser_app::AppState;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, Command, TaskMessage};

/// Runs [`Command`]s on the tokio runtime
///
/// Each command becomes one spawned task that reports back through the
/// channel the main loop drains. A send error only means the loop is gone.
pub struct Executor {
    state: Arc<AppState>,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl Executor {
    pub fn new(state: Arc<AppState>, handle: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self { state, handle, tx }
    }

    /// Start `command` in the background
    pub fn execute(&self, command: Command) {
        log::debug!("Executing {command:?}");
        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            for msg in run(&state, command).await {
                if tx.send(AppMessage::Task(msg)).is_err() {
                    log::debug!("Main loop closed; dropping task result");
                    break;
                }
            }
        });
    }
}

/// Perform `command` and collect the messages to report
async fn run(state: &AppState, command: Command) -> Vec<TaskMessage> {
    match command {
        Command::Startup {
            preferences,
            generation,
        } => {
            let result = state.startup_catalog(&preferences).await;
            vec![TaskMessage::CatalogLoaded { generation, result }]
        }

        Command::SubmitPreferences {
            preferences,
            generation,
        } => {
            let mut messages = Vec::new();
            // Save first, fetch regardless of the outcome
            if let Err(e) = state.preference_service.save(&preferences).await {
                messages.push(TaskMessage::PreferencesSaveFailed(e));
            }
            let result = state.catalog_service.fetch(&preferences).await;
            messages.push(TaskMessage::CatalogLoaded { generation, result });
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cocktail_browser_app::adapters::InMemoryStore;
    use cocktail_browser_app::AppStateBuilder;
    use cocktail_browser_core::types::{Category, Preferences};
    use cocktail_browser_core::PREFERENCES_KEY;
    use cocktail_browser_core::traits::KeyValueStore;
    use cocktail_browser_provider::{CatalogProvider, DrinkDetail, DrinkSummary, Result};

    struct TwoBeers;

    #[async_trait]
    impl CatalogProvider for TwoBeers {
        fn id(&self) -> &'static str {
            "two-beers"
        }

        async fn list_by_category(&self, _category: &str) -> Result<Vec<DrinkSummary>> {
            Ok(["Radler", "Shandy"]
                .iter()
                .enumerate()
                .map(|(i, name)| DrinkSummary {
                    id: (i + 1).to_string(),
                    name: (*name).to_string(),
                    thumbnail_url: None,
                })
                .collect())
        }

        async fn lookup(&self, _drink_id: &str) -> Result<Option<DrinkDetail>> {
            Ok(None)
        }
    }

    fn state() -> (Arc<AppState>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let state = AppStateBuilder::new()
            .store(store.clone())
            .provider(Arc::new(TwoBeers))
            .build()
            .unwrap();
        (Arc::new(state), store)
    }

    #[test]
    fn submit_saves_then_fetches() {
        let (state, store) = state();
        let prefs = Preferences {
            category: Category::Beer,
            limit: 1,
        };

        let messages = tokio_test::block_on(run(
            &state,
            Command::SubmitPreferences {
                preferences: prefs,
                generation: 4,
            },
        ));

        assert_eq!(messages.len(), 1);
        match &messages[0] {
            TaskMessage::CatalogLoaded { generation, result } => {
                assert_eq!(*generation, 4);
                let items = result.as_ref().unwrap();
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Radler");
                assert!(items[0].details.is_none());
            }
            other => panic!("unexpected message: {other:?}"),
        }

        let stored = tokio_test::block_on(store.get(PREFERENCES_KEY)).unwrap();
        assert!(stored.is_some_and(|s| s.contains("\"limit\":1")));
    }

    #[test]
    fn startup_fetches_with_given_preferences_when_nothing_is_cached() {
        let (state, store) = state();
        let prefs = Preferences {
            category: Category::Beer,
            limit: 1,
        };
        let messages = tokio_test::block_on(run(
            &state,
            Command::Startup {
                preferences: prefs,
                generation: 1,
            },
        ));

        match &messages[..] {
            [TaskMessage::CatalogLoaded { generation, result }] => {
                assert_eq!(*generation, 1);
                assert_eq!(result.as_ref().unwrap().len(), 1);
            }
            other => panic!("unexpected messages: {other:?}"),
        }

        // Startup never writes preferences
        let stored = tokio_test::block_on(store.get(PREFERENCES_KEY)).unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn execute_reports_through_channel() {
        let (state, _) = state();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let executor = Executor::new(state, Handle::current(), tx);

        executor.execute(Command::Startup {
            preferences: Preferences::default(),
            generation: 7,
        });

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            AppMessage::Task(TaskMessage::CatalogLoaded { generation: 7, .. })
        ));
    }
}
