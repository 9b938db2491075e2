use cocktail_browser_core::types::Preferences;

use super::{FocusPanel, ModalState, NavigationState, Page, PreferencesForm, SessionState};

/// Application state, owned by the main loop
pub struct App {
    /// Set by `Quit`; the loop exits after the next draw
    pub should_quit: bool,

    pub focus: FocusPanel,

    pub navigation: NavigationState,

    /// The active component
    pub current_page: Page,

    /// Last status bar message
    pub status_message: Option<String>,

    // === Page state ===
    /// Last submitted (or loaded) preferences
    pub preferences: Preferences,
    /// Preferences form being edited
    pub form: PreferencesForm,
    /// Fetched list and browsing cursor
    pub session: SessionState,

    pub modal: ModalState,
}

impl App {
    /// Fresh state: preferences page, default preferences, no list yet
    pub fn new() -> Self {
        Self::with_preferences(Preferences::default())
    }

    /// Fresh state with the form prefilled from stored `preferences`
    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Content,
            navigation: NavigationState::new(),
            current_page: Page::Preferences,
            status_message: None,
            form: PreferencesForm::from_preferences(&preferences),
            preferences,
            session: SessionState::new(),
            modal: ModalState::new(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
