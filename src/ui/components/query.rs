//! Query box component renderer.
//!
//! Renders the main input with a bordered frame, the typed text (or the mode's
//! placeholder) and the progress text while a request is in flight.

use crate::ui::helpers::{char_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::QueryBoxInfo;

/// Horizontal margin for the query box (spaces on left and right).
const QUERY_BOX_MARGIN: usize = 1;

/// Renders the query box at `row` and returns the next free row (`row + 3`).
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────────┐
/// │ > spicy noodles█             Searching…  │
/// └──────────────────────────────────────────┘
/// ```
///
/// The border uses `input_focus_border` while the box has focus and
/// `input_border` otherwise.
pub fn render_query_box(row: usize, query: &QueryBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(QUERY_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if query.is_focused {
        &theme.colors.input_focus_border
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(QUERY_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let status = query
        .loading_text
        .as_ref()
        .map_or_else(String::new, |text| format!("{text} "));
    let text_width = inner_width.saturating_sub(char_width(&status) + 3);
    let cursor = if query.is_focused { "█" } else { "" };

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(QUERY_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" > ");
    let shown = if query.text.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        let placeholder = truncate(&query.placeholder, text_width);
        print!("{placeholder}");
        char_width(&placeholder)
    } else {
        let text = truncate(&query.text, text_width.saturating_sub(1));
        print!("{text}{cursor}");
        char_width(&text) + char_width(cursor)
    };
    print!("{}", " ".repeat(inner_width.saturating_sub(3 + shown + char_width(&status))));
    print!("{}", Theme::fg(&theme.colors.status_warn));
    print!("{status}");
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(QUERY_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
