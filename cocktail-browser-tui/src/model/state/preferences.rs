//! Preferences form state

use cocktail_browser_core::types::{clamp_limit, Category, Preferences};

use crate::model::FormField;

/// Editable copy of the preferences
///
/// Nothing here is persisted until the form is submitted. The limit label
/// always mirrors `slider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesForm {
    pub category: Category,
    pub slider: u32,
    pub focus: FormField,
}

impl PreferencesForm {
    /// Prefill from stored preferences, clamping the slider into range
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            category: prefs.category,
            slider: clamp_limit(prefs.limit),
            focus: FormField::default(),
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Move the slider by `delta`, clamped to the allowed range
    pub fn adjust_limit(&mut self, delta: i32) {
        let step = delta.unsigned_abs();
        let moved = if delta >= 0 {
            self.slider.saturating_add(step)
        } else {
            self.slider.saturating_sub(step)
        };
        self.slider = clamp_limit(moved);
    }

    /// Text of the value label next to the slider
    pub fn limit_label(&self) -> String {
        self.slider.to_string()
    }

    /// Preferences as they would be submitted
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            category: self.category,
            limit: self.slider,
        }
    }
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self::from_preferences(&Preferences::default())
    }
}
