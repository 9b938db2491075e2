use cocktail_browser_core::error::{CoreError, CoreResult};
use cocktail_browser_core::types::{CatalogItem, Preferences};

/// Background work requested by the update layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the cached list, or fetch one with the stored `preferences`
    Startup {
        preferences: Preferences,
        generation: u64,
    },
    /// Persist `preferences`, then fetch with them
    SubmitPreferences {
        preferences: Preferences,
        generation: u64,
    },
}

/// Results of background work, fed back into the loop
#[derive(Debug)]
pub enum TaskMessage {
    /// Only sent on failure; a successful save is silent
    PreferencesSaveFailed(CoreError),
    CatalogLoaded {
        generation: u64,
        result: CoreResult<Vec<CatalogItem>>,
    },
}
