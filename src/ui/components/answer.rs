//! AI answer card.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AnswerInfo;

/// Renders the card title and its pre-wrapped lines. Returns the next free row.
pub fn render_answer(row: usize, answer: &AnswerInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent));
    print!(" ✦ {}", answer.title);
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for line in &answer.lines {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("   {line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
