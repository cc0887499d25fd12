//! Filter row shown in Search mode.

use crate::ui::helpers::{position_cursor, print_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FiltersInfo;

/// Width of each value cell.
const VALUE_WIDTH: usize = 12;

/// Renders the filter fields on one line and returns the next free row.
///
/// Each field prints as `Label: value`; the focused field's value uses the
/// focus border color, empty values show their placeholder dimmed.
pub fn render_filters(row: usize, filters: &FiltersInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    for field in &filters.fields {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}: ", field.label);

        if field.is_focused {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.input_focus_border));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        if field.value.is_empty() {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_cell(&field.placeholder, VALUE_WIDTH);
        } else {
            print_cell(&field.value, VALUE_WIDTH);
        }
        print!("{}", Theme::reset());
    }
    row + 1
}
