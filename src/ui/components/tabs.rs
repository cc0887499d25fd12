//! Mode tab strip.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabInfo;

/// Renders the tabs at `row` and returns the next free row.
///
/// The active tab is bold in the accent color; the others are dimmed.
pub fn render_tabs(row: usize, tabs: &[TabInfo], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!(" ");
    for tab in tabs {
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
            print!("[ {} ]", tab.label);
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("  {}  ", tab.label);
        }
        print!("{}", Theme::reset());
        print!(" ");
    }
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" Ctrl+t to switch");
    print!("{}", Theme::reset());
    row + 1
}
