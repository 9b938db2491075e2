//! Left navigation panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::text::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// Render the navigation panel.
///
/// `▶` marks the cursor; the entry of the page on screen is drawn bold with
/// a trailing `•`, so exactly one entry is marked active.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_navigation();

    let block = Block::default()
        .title(" Menu ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let label_width = usize::from(area.width.saturating_sub(8));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_cursor = is_focused && i == app.navigation.selected;
            let is_active = nav_item.page == app.current_page;

            let prefix = if is_cursor { "▶ " } else { "  " };
            let marker = if is_active { " •" } else { "" };
            let content = format!(
                "{prefix}{} {}{marker}",
                nav_item.icon,
                truncate_to_width(nav_item.label, label_width)
            );

            let style = if is_cursor {
                Styles::selected()
            } else if is_active {
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.muted)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
