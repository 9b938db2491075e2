//! Preferences form

use cocktail_browser_core::types::{Category, MAX_LIMIT, MIN_LIMIT};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.form;
    let content_focused = app.focus.is_content();

    let rows = Layout::vertical([
        Constraint::Length(1), // category label
        Constraint::Length(1), // category selector
        Constraint::Length(1),
        Constraint::Length(1), // limit label
        Constraint::Length(1), // slider
        Constraint::Length(1),
        Constraint::Min(0), // footer
    ])
    .split(area.inner(Margin::new(1, 0)));

    let field_style = |field: FormField| {
        if content_focused && form.focus == field {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        }
    };
    let cursor = |field: FormField| {
        if content_focused && form.focus == field {
            "▶ "
        } else {
            "  "
        }
    };

    // Category selector
    frame.render_widget(
        Paragraph::new(Line::styled("Category", Styles::heading())),
        rows[0],
    );
    let position = format!("  ({}/{})", form.category.index() + 1, Category::ALL.len());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(cursor(FormField::Category)),
            Span::styled(
                format!("◀ {} ▶", form.category),
                field_style(FormField::Category),
            ),
            Span::styled(position, Styles::muted()),
        ])),
        rows[1],
    );

    // Limit slider with its value label
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Number of cocktails: ", Styles::heading()),
            Span::styled(form.limit_label(), field_style(FormField::Limit)),
        ])),
        rows[3],
    );
    let slider_row = Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).split(rows[4]);
    frame.render_widget(Paragraph::new(cursor(FormField::Limit)), slider_row[0]);
    frame.render_widget(
        LineGauge::default()
            .filled_style(field_style(FormField::Limit))
            .unfilled_style(Styles::muted())
            .line_set(symbols::line::THICK)
            .label(form.limit_label())
            .ratio(slider_ratio(form.slider)),
        slider_row[1],
    );

    // Footer: what is currently saved
    let saved = &app.preferences;
    let mut footer = vec![Line::styled(
        format!("Saved: {} · {} cocktails", saved.category, saved.limit),
        Styles::muted(),
    )];
    if app.session.loading {
        footer.push(Line::styled("Loading...", Style::default().fg(c.success)));
    } else {
        footer.push(Line::styled(
            format!("{} cocktails loaded", app.session.total()),
            Styles::muted(),
        ));
    }
    footer.push(Line::from(""));
    footer.push(Line::styled("Press Enter to save and fetch", Styles::muted()));
    frame.render_widget(Paragraph::new(footer), rows[6]);
}

/// Slider fill in `[0, 1]`
fn slider_ratio(value: u32) -> f64 {
    let span = f64::from(MAX_LIMIT - MIN_LIMIT);
    (f64::from(value.clamp(MIN_LIMIT, MAX_LIMIT) - MIN_LIMIT) / span).clamp(0.0, 1.0)
}
