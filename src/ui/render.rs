//! List renderer for the directory browser.
//!
//! This module should stay pure rendering: it reads state and produces
//! widgets, without owning browser logic. The cursor row is distinguished
//! with bold + underline; re-rendering a frame is idempotent.

use crate::app::AppState;

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Paints the full entry list from the top-left origin, one entry per row,
/// and highlights the cursor row.
pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let snapshot = app.nav().snapshot();

    if snapshot.is_empty() {
        frame.render_widget(Paragraph::new("[empty directory]"), area);
        return;
    }

    let pane_width = area.width as usize;
    let items: Vec<ListItem> = snapshot
        .iter()
        .map(|entry| {
            let name = entry.name_str();
            let line = if entry.width() > pane_width {
                Line::raw(clip_to_width(&name, pane_width))
            } else {
                Line::raw(name.into_owned())
            };
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.visible_selected());

    frame.render_stateful_widget(
        List::new(items).highlight_style(
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        area,
        &mut state,
    );
}

/// Clips a name to the pane width by display columns, dropping control
/// characters. A wide character that would straddle the edge is cut.
fn clip_to_width(name: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(name.len().min(pane_width));
    let mut current_w = 0;

    for char in name.chars() {
        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > pane_width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    out
}
