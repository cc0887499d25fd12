//! Description card for the dish under the cursor.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the dish name and its wrapped description. Returns the next free row.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!(" ▸ {}", truncate(&detail.title, cols.saturating_sub(4)));
    print!("{}", Theme::reset());

    for (offset, line) in detail.lines.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        print!("{}   {line}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
    row + 1 + detail.lines.len()
}
