//! Modal notices

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// Render the open modal, if any, above everything else
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::EndOfList => render_notice(frame, " Cocktails ", "Last cocktail", colors().highlight),
        Modal::Error { title, message } => {
            render_notice(frame, &format!(" {title} "), message, colors().error);
        }
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Frame a modal and return its inner area
fn modal_frame(frame: &mut Frame, title: &str, accent: Color, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_notice(frame: &mut Frame, title: &str, message: &str, accent: Color) {
    let inner = modal_frame(frame, title, accent, 50, 8);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled("Press Enter or Esc to close", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let inner = modal_frame(frame, " Help ", Color::Cyan, 48, 16);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };
    let heading = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        heading("Global"),
        entry("Tab", "Switch panel"),
        entry("1 / 2", "Preferences / Cocktails"),
        entry("Esc", "Clear status"),
        entry("q, Ctrl+C", "Quit"),
        Line::from(""),
        heading("Preferences"),
        entry("↑↓", "Category / limit field"),
        entry("←→", "Change value"),
        entry("PgUp/PgDn", "Limit ±10"),
        entry("Enter", "Save and fetch"),
        Line::from(""),
        heading("Cocktails"),
        entry("n, Enter, →", "Next cocktail"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
