use cocktail_browser_core::error::CoreResult;
use cocktail_browser_core::types::CatalogItem;

use crate::message::TaskMessage;
use crate::model::{App, Page};

/// Apply a finished background task
pub fn update(app: &mut App, msg: TaskMessage) {
    match msg {
        TaskMessage::PreferencesSaveFailed(e) => {
            log::error!("Failed to save preferences: {e}");
            app.modal
                .show_error("Failed to save preferences", e.to_string());
        }

        TaskMessage::CatalogLoaded { generation, result } => {
            if !app.session.is_current(generation) {
                log::debug!(
                    "Dropping stale fetch result (generation {generation}, latest {})",
                    app.session.generation
                );
                return;
            }
            apply_catalog(app, result);
        }
    }
}

fn apply_catalog(app: &mut App, result: CoreResult<Vec<CatalogItem>>) {
    app.session.loading = false;

    match result {
        Ok(items) => {
            let count = items.len();
            app.session.replace_items(items);
            if app.current_page == Page::Cocktails {
                app.session.reset_cursor();
            }
            app.set_status(format!("Loaded {count} cocktails"));
        }
        Err(e) => {
            let hint = if e.is_transient() {
                " (submit again to retry)"
            } else {
                ""
            };
            app.set_status(format!("Failed to load cocktails{hint}"));
            app.modal.show_error("Failed to load cocktails", e.to_string());
        }
    }
}
