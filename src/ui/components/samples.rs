//! Sample query chips.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SampleChip;

/// Renders as many chips as fit on one line and returns the next free row.
pub fn render_samples(row: usize, chips: &[SampleChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" Try: ");
    let mut used = 6;

    for chip in chips {
        let text = format!("[{} {}] ", chip.key, chip.label);
        let width = char_width(&text);
        if used + width > cols {
            break;
        }
        if chip.is_last_picked {
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        used += width;
    }

    print!("{}", Theme::reset());
    row + 1
}
