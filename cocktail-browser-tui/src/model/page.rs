//! Pages

/// The two views the session switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Preferences form; shown first on every launch
    #[default]
    Preferences,
    /// Paginated cocktail browser
    Cocktails,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Self; 2] = [Self::Preferences, Self::Cocktails];

    /// Page title
    pub fn title(self) -> &'static str {
        match self {
            Page::Preferences => "Preferences",
            Page::Cocktails => "Cocktails",
        }
    }

    /// Navigation icon
    pub fn icon(self) -> &'static str {
        match self {
            Page::Preferences => "≡",
            Page::Cocktails => "●",
        }
    }
}
