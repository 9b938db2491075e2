//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// Render key hints followed by the last status message
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Hints for the current focus and page
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Enter/Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Switch Panels")];

    match (app.focus, app.current_page) {
        (FocusPanel::Navigation, _) => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
        }
        (FocusPanel::Content, Page::Preferences) => {
            hints.push(("↑↓", "Field"));
            hints.push(("←→", "Change"));
            hints.push(("PgUp/PgDn", "±10"));
            hints.push(("Enter", "Save"));
        }
        (FocusPanel::Content, Page::Cocktails) => {
            hints.push(("n/Enter/→", "Next"));
        }
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
