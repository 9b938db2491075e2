//! Browsing session state

use cocktail_browser_core::types::CatalogItem;

/// In-memory list plus the browsing cursor
///
/// The cursor only exists while something has been shown: it starts empty,
/// is placed on the first item when the cocktail page is entered, and only
/// ever moves forward from there.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current list, in fetch order
    pub items: Vec<CatalogItem>,
    /// Index of the active item
    active: Option<usize>,
    /// Latest issued fetch generation
    pub generation: u64,
    /// A fetch for `generation` is in flight
    pub loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active item
    pub fn active_item(&self) -> Option<&CatalogItem> {
        self.active.and_then(|i| self.items.get(i))
    }

    /// 1-based position of the active item
    pub fn position(&self) -> Option<usize> {
        self.active.map(|i| i + 1)
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Place the cursor on the first item, or clear it for an empty list
    pub fn reset_cursor(&mut self) {
        self.active = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Swap in a new list; the cursor is cleared until the page is shown again
    pub fn replace_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
        self.active = None;
    }

    /// Move to the successor of the active item.
    ///
    /// Returns `false`, leaving the cursor untouched, when there is none.
    pub fn step_forward(&mut self) -> bool {
        match self.active {
            Some(i) if i + 1 < self.items.len() => {
                self.active = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Issue a new generation for an outgoing fetch
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Whether a completion for `generation` is still wanted
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<CatalogItem> {
        (1..=n)
            .map(|i| CatalogItem {
                id: i.to_string(),
                name: format!("Drink {i}"),
                thumbnail_url: None,
                details: None,
            })
            .collect()
    }

    #[test]
    fn cursor_starts_empty() {
        let mut session = SessionState::new();
        session.replace_items(items(3));
        assert_eq!(session.position(), None);
        assert!(session.active_item().is_none());
    }

    #[test]
    fn step_forward_stops_at_last_item() {
        let mut session = SessionState::new();
        session.replace_items(items(2));
        session.reset_cursor();

        assert!(session.step_forward());
        assert_eq!(session.position(), Some(2));
        assert!(!session.step_forward());
        assert_eq!(session.position(), Some(2));
    }

    #[test]
    fn reset_cursor_on_empty_list_clears_it() {
        let mut session = SessionState::new();
        session.reset_cursor();
        assert_eq!(session.position(), None);
        assert!(!session.step_forward());
    }

    #[test]
    fn generations_increase() {
        let mut session = SessionState::new();
        let first = session.begin_fetch();
        let second = session.begin_fetch();
        assert!(second > first);
        assert!(session.is_current(second));
        assert!(!session.is_current(first));
        assert!(session.loading);
    }
}
