/// Content panel messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // === Preferences form ===
    /// Move focus to the other form field
    NextField,
    PreviousCategory,
    NextCategory,
    /// Move the limit slider; only the label follows
    LimitChanged(i32),
    /// Persist the form and refetch
    Submit,

    // === Cocktail browser ===
    /// Show the next cocktail
    Advance,
}
