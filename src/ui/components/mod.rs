//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row, so the layout is a simple top-down fold.
//!
//! # Components
//!
//! - [`header`]: Brand and backend status
//! - [`tabs`]: Search/Chat mode tabs
//! - [`query`]: Query input box
//! - [`filters`]: Filter row (Search mode)
//! - [`toast`]: Error or notice banner
//! - [`answer`]: AI answer card (Chat mode)
//! - [`table`]: Results list
//! - [`detail`]: Selected dish description
//! - [`empty`]: Empty state message
//! - [`samples`]: Sample query chips
//! - [`footer`]: Keybinding hints

mod answer;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod query;
mod samples;
mod table;
mod tabs;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use answer::render_answer;
use detail::render_detail;
use empty::render_empty_state;
use filters::render_filters;
use footer::render_footer;
use header::render_header;
use query::render_query_box;
use samples::render_samples;
use table::{render_table_headers, render_table_rows};
use tabs::render_tabs;
use toast::render_toast;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Tabs]
/// [Query box - 3 lines]
/// [Filters]                (Search mode)
/// [Toast]                  (error or notice)
/// [Answer card]            (chat answer)
/// [Table headers + rows]   or [Empty state]
/// [Detail card]            (selected dish)
/// [Blank padding]
/// [Samples]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_tabs(current_row, &vm.tabs, theme);
    current_row = render_query_box(current_row, &vm.query_box, theme, cols);
    if let Some(filters) = &vm.filters {
        current_row = render_filters(current_row, filters, theme);
    }
    if let Some(toast) = &vm.toast {
        current_row = render_toast(current_row, toast, theme, cols);
    }
    if let Some(answer) = &vm.answer {
        current_row = render_answer(current_row, answer, theme);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, vm.total_results, theme);
        current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
        if let Some(detail) = &vm.detail {
            render_detail(current_row, detail, theme, cols);
        }
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let samples_row = border_row.saturating_sub(1);

    render_samples(samples_row, &vm.samples, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
