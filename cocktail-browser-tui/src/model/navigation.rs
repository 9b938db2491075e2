use super::Page;

/// Navigation entry
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navigation panel state
///
/// `selected` is the cursor; the active entry is the one whose page is
/// currently shown, which `App::current_page` tracks.
pub struct NavigationState {
    /// Entries in display order
    pub items: Vec<NavItem>,
    /// Cursor index
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: Page::ALL
                .into_iter()
                .map(|page| NavItem {
                    page,
                    label: page.title(),
                    icon: page.icon(),
                })
                .collect(),
            selected: 0,
        }
    }

    /// Move the cursor up
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the cursor down
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// Put the cursor on the entry for `page`
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.selected = index;
        }
    }

    /// Page under the cursor
    pub fn current_page(&self) -> Option<Page> {
        self.items.get(self.selected).map(|item| item.page)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
