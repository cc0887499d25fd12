//! Results table component renderer.
//!
//! Renders matched dishes as a four-column table (DISH, MATCH, CUISINE,
//! CALORIES) with selection and fuzzy match highlighting. Match percentages
//! and calorie tags are colored by band.

use crate::domain::{CalorieBand, ScoreBand};
use crate::ui::helpers::{self, char_width, position_cursor, print_cell};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const NAME_WIDTH: usize = 36;
const MATCH_WIDTH: usize = 7;
const CUISINE_WIDTH: usize = 16;

/// Renders the column headers and returns the next free row.
pub fn render_table_headers(row: usize, total: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" ");
    print_cell(&format!("DISH ({total})"), NAME_WIDTH - 1);
    print_cell("MATCH", MATCH_WIDTH);
    print_cell("CUISINE", CUISINE_WIDTH);
    print!("CALORIES");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Selection colors for the whole row (if `is_selected`)
/// 2. Band colors for match and calories, fuzzy highlights in the name
/// 3. Normal text color
///
/// The row is padded to the full width so the selection background spans it.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = |theme: &Theme| {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };
    let band_color = |color: &str| {
        if item.is_selected {
            String::new()
        } else {
            Theme::fg(color)
        }
    };

    position_cursor(row, 1);
    print!("{}", base(theme));
    print!("{}", if item.is_selected { "›" } else { " " });

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat((NAME_WIDTH - 1).saturating_sub(char_width(&item.name))));

    let score_color = match item.score_band {
        ScoreBand::High => &theme.colors.status_ok,
        ScoreBand::Medium => &theme.colors.status_warn,
        ScoreBand::Low => &theme.colors.text_dim,
    };
    print!("{}", band_color(score_color));
    print_cell(&item.score, MATCH_WIDTH);
    print!("{}", base(theme));

    print_cell(&item.cuisine, CUISINE_WIDTH);

    let calorie_color = match item.calorie_band {
        CalorieBand::Low => &theme.colors.status_ok,
        CalorieBand::Medium => &theme.colors.status_warn,
        CalorieBand::High => &theme.colors.status_error,
    };
    let calories = format!("{} · {}", item.calories, item.calorie_band.label());
    print!("{}", band_color(calorie_color));
    print!("{calories}");

    let line_len = NAME_WIDTH + MATCH_WIDTH + CUISINE_WIDTH + char_width(&calories);
    print!("{}", base(theme));
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
