use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether `key` is this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const GOTO_PREFERENCES: KeyBinding = KeyBinding::key(KeyCode::Char('1'));
    pub const GOTO_COCKTAILS: KeyBinding = KeyBinding::key(KeyCode::Char('2'));

    // Preferences form
    pub const LIMIT_UP_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const LIMIT_DOWN_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // Cocktail browser
    pub const NEXT: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
}

/// Slider step for PgUp/PgDn
pub const LIMIT_PAGE_STEP: i32 = 10;
