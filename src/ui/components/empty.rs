//! Empty state shown in place of the results table before the first search,
//! when there is nothing to list and nothing to report.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and subtitle centered, two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    print_centered(row + 2, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 3, &empty.subtitle, &subtitle_style, cols);

    row + 4
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let width = char_width(text);
    let left = cols.saturating_sub(width) / 2;
    let right = cols.saturating_sub(left + width);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}
