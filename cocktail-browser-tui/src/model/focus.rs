//! Focus tracking

/// Which panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left navigation panel
    #[default]
    Navigation,
    /// Right content panel
    Content,
}

impl FocusPanel {
    /// The other panel
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}

/// Focused field of the preferences form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Category,
    Limit,
}

impl FormField {
    /// Fields cycle; there are only two
    pub fn next(self) -> Self {
        match self {
            FormField::Category => FormField::Limit,
            FormField::Limit => FormField::Category,
        }
    }
}
