//! Header component renderer.
//!
//! Renders the title bar: brand on the left, backend status on the right.

use crate::domain::HealthStatus;
use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///  Savory                                   ● API connected · 14:02
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let status_color = match header.health {
        HealthStatus::Unknown => &theme.colors.status_warn,
        HealthStatus::Healthy => &theme.colors.status_ok,
        HealthStatus::Unhealthy => &theme.colors.status_error,
    };
    let status = format!("● {} ", header.health_label);
    let used = char_width(&header.title) + char_width(&status);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::fg(status_color));
    print!("{status}");

    print!("{}", Theme::reset());
    row + 1
}
