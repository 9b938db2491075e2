//! Session transitions
//!
//! Each user action that changes what is being browsed maps to one function
//! here. They only touch the model; persistence and fetching are requested by
//! returning a [`Command`].

use crate::message::Command;
use crate::model::{App, Modal, Page};

/// Show `page` and mark its navigation entry active.
///
/// Entering the cocktail page puts the cursor back on the first item.
/// Calling it again with the same page changes nothing further.
pub fn navigate(app: &mut App, page: Page) {
    app.current_page = page;
    app.navigation.select_page(page);
    if page == Page::Cocktails {
        app.session.reset_cursor();
    }
}

/// Take the form values as the new preferences and ask for save + refetch.
///
/// Only valid while the preferences page is shown; the page stays put.
pub fn submit_preferences(app: &mut App) -> Option<Command> {
    if app.current_page != Page::Preferences {
        return None;
    }

    let preferences = app.form.to_preferences();
    app.preferences = preferences;
    let generation = app.session.begin_fetch();
    app.set_status(format!(
        "Loading {} {} cocktails...",
        preferences.limit, preferences.category
    ));
    log::info!(
        "Submitting preferences {}/{} (generation {generation})",
        preferences.category,
        preferences.limit
    );

    Some(Command::SubmitPreferences {
        preferences,
        generation,
    })
}

/// Step to the next cocktail, or raise the end-of-list notice.
///
/// An empty list has no successor either, so it gets the notice too.
pub fn advance(app: &mut App) {
    if app.current_page != Page::Cocktails {
        return;
    }

    if !app.session.step_forward() {
        app.modal.show(Modal::EndOfList);
    }
}

/// Move the limit slider. Nothing is persisted until submit.
pub fn change_range(app: &mut App, delta: i32) {
    app.form.adjust_limit(delta);
}
