//! Single-line error or notice banner.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ToastInfo, ToastKind};

/// Renders the toast at `row` and returns the next free row.
pub fn render_toast(row: usize, toast: &ToastInfo, theme: &Theme, cols: usize) -> usize {
    let (icon, color) = match toast.kind {
        ToastKind::Notice => ("ℹ", &theme.colors.status_warn),
        ToastKind::Error => ("✗", &theme.colors.status_error),
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!(" {icon} {}", truncate(&toast.message, cols.saturating_sub(4)));
    print!("{}", Theme::reset());
    row + 1
}
