//! Cocktail browser

use cocktail_browser_core::types::CatalogItem;
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::text::truncate_to_width;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let area = area.inner(Margin::new(1, 0));

    let lines = match (app.session.active_item(), app.session.position()) {
        (Some(item), Some(position)) => {
            item_lines(item, position, app.session.total(), usize::from(area.width))
        }
        _ => empty_lines(app),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Header, detail sections and the next hint for one item
fn item_lines(item: &CatalogItem, position: usize, total: usize, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::styled(format!("Cocktail {position}/{total}"), Styles::muted()),
        Line::from(""),
        Line::styled(
            truncate_to_width(&item.name, width),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    match &item.details {
        Some(details) => {
            lines.push(Line::styled("Instructions", Styles::heading()));
            lines.push(Line::styled(details.instructions.clone(), Style::default().fg(c.fg)));
            lines.push(Line::from(""));

            lines.push(Line::styled("Ingredients", Styles::heading()));
            for ingredient in &details.ingredients {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Styles::muted()),
                    Span::styled(ingredient.clone(), Style::default().fg(c.fg)),
                ]));
            }
            lines.push(Line::from(""));
        }
        None => {
            lines.push(Line::styled("No details available", Styles::muted()));
            lines.push(Line::from(""));
        }
    }

    if let Some(url) = item.image_url() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", Styles::heading()),
            Span::styled(url.to_string(), Styles::muted()),
        ]));
        lines.push(Line::from(""));
    }

    let next_style = if position < total {
        Styles::hint_key()
    } else {
        Styles::muted()
    };
    lines.push(Line::from(vec![
        Span::styled("[ Next ▶ ]", next_style),
        Span::styled("  n / Enter / →", Styles::muted()),
    ]));

    lines
}

/// Placeholder when there is nothing to show
fn empty_lines(app: &App) -> Vec<Line<'static>> {
    let text = if app.session.loading {
        "Loading cocktails..."
    } else {
        "No cocktails loaded. Choose preferences and press Enter to fetch."
    };
    vec![Line::from(""), Line::styled(text, Styles::muted())]
}
