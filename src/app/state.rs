//! Application state and view model computation.
//!
//! [`AppState`] bundles the [`Store`] (what the view shows) with the
//! controllers that mutate it and the purely local view concerns: which input
//! field has focus, which result row is selected and which query the current
//! results were produced by.
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, fuzzy match highlighting, answer
//! wrapping and layout adjustments based on terminal dimensions.
//!
//! # Example
//!
//! ```rust
//! use savory::app::AppState;
//! use savory::ui::Theme;
//!
//! let state = AppState::new("http://localhost:8000", 5.0, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::health::HealthMonitor;
use super::modes::{InputField, Mode};
use super::orchestrator::RequestOrchestrator;
use super::samples::{SamplePicker, SAMPLE_QUERIES};
use super::store::{Store, UiState};
use crate::domain::{Dish, FilterValue, HealthStatus};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AnswerInfo, DetailInfo, DisplayItem, EmptyState, FilterFieldInfo, FiltersInfo, FooterInfo, HeaderInfo,
    QueryBoxInfo, SampleChip, TabInfo, ToastInfo, ToastKind, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows used by fixed chrome: blank, header, border, tabs, query box (3),
/// table header, samples, border, footer.
const BASE_CHROME_ROWS: usize = 11;

/// Longest chat answer shown before it is cut with an ellipsis.
const MAX_ANSWER_LINES: usize = 6;

/// Longest dish description shown under the table.
const MAX_DETAIL_LINES: usize = 3;

const NAME_COLUMN_WIDTH: usize = 34;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// View state and its change log.
    pub store: Store,

    pub orchestrator: RequestOrchestrator,

    pub health: HealthMonitor,

    pub samples: SamplePicker,

    /// Input field receiving typed characters.
    ///
    /// Always one of [`InputField::available`] for the current mode.
    pub focus: InputField,

    /// Zero-based index of the selected row in `results`.
    ///
    /// Reset to the top when results are replaced. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Query that produced the current results, used for match highlighting.
    pub results_query: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the startup state: Search mode, default filters, health unknown.
    #[must_use]
    pub fn new(base_url: impl Into<String>, health_timeout_secs: f64, theme: Theme) -> Self {
        Self {
            store: Store::new(),
            orchestrator: RequestOrchestrator::new(base_url),
            health: HealthMonitor::new(health_timeout_secs),
            samples: SamplePicker::default(),
            focus: InputField::Query,
            selected_index: 0,
            results_query: String::new(),
            theme,
        }
    }

    /// Read access to the view state.
    #[must_use]
    pub const fn ui(&self) -> &UiState {
        self.store.state()
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    ///
    /// Returns `false` if there are no results.
    pub fn move_selection_down(&mut self) -> bool {
        let len = self.ui().results.len();
        if len == 0 {
            return false;
        }
        self.selected_index = (self.selected_index + 1) % len;
        true
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    ///
    /// Returns `false` if there are no results.
    pub fn move_selection_up(&mut self) -> bool {
        let len = self.ui().results.len();
        if len == 0 {
            return false;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
        true
    }

    /// Returns the dish under the cursor, if any.
    #[must_use]
    pub fn selected_dish(&self) -> Option<&Dish> {
        self.ui().results.get(self.selected_index)
    }

    /// Moves focus, falling back to the query field if `field` is unavailable
    /// in the current mode. Returns `true` if focus changed.
    pub fn set_focus(&mut self, field: InputField) -> bool {
        let field = if field.is_available(self.ui().mode) {
            field
        } else {
            InputField::Query
        };
        let changed = self.focus != field;
        self.focus = field;
        changed
    }

    /// Text of the focused field, or `None` for the result count selector.
    #[must_use]
    pub fn focused_text(&self) -> Option<&str> {
        let state = self.ui();
        match self.focus {
            InputField::Query => Some(&state.query),
            InputField::Cuisine => Some(&state.filters.cuisine_filter),
            InputField::MaxCalories => Some(&state.filters.max_calories),
            InputField::ResultCount => None,
        }
    }

    /// Replaces the text of the focused field. No-op on the result count.
    pub fn set_focused_text(&mut self, text: String) {
        match self.focus {
            InputField::Query => self.store.set_query(text),
            InputField::Cuisine => self.store.set_filter(FilterValue::Cuisine(text)),
            InputField::MaxCalories => self.store.set_filter(FilterValue::MaxCalories(text)),
            InputField::ResultCount => {}
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let state = self.ui();
        let answer = self.compute_answer(cols);
        let detail = self.compute_detail(cols);
        let toast = Self::compute_toast(state);

        let mut chrome = BASE_CHROME_ROWS;
        if state.mode.shows_filters() {
            chrome += 1;
        }
        if toast.is_some() {
            chrome += 1;
        }
        if let Some(answer) = &answer {
            chrome += answer.lines.len() + 1;
        }
        if let Some(detail) = &detail {
            chrome += detail.lines.len() + 1;
        }
        let available_rows = rows.saturating_sub(chrome).max(1);

        let total = state.results.len();
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let matcher = if self.results_query.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let display_items: Vec<DisplayItem> = state.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, dish)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(dish, absolute_idx, matcher.as_ref())
            })
            .collect();

        let empty_state = (!state.loading
            && state.results.is_empty()
            && state.error.is_none()
            && state.chat_text.is_empty())
        .then(|| EmptyState {
            message: "Discover something delicious".to_string(),
            subtitle: "Type a query or pick a sample, then press Enter".to_string(),
        });

        UIViewModel {
            header: self.compute_header(),
            tabs: Self::compute_tabs(state.mode),
            query_box: self.compute_query_box(),
            filters: self.compute_filters(),
            toast,
            answer,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            total_results: total,
            detail,
            samples: self.compute_samples(),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(
        &self,
        dish: &Dish,
        absolute_idx: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let name_len = dish.food_name.chars().count();
        let name = if name_len > NAME_COLUMN_WIDTH {
            let kept: String = dish.food_name.chars().take(NAME_COLUMN_WIDTH - 3).collect();
            format!("{kept}...")
        } else {
            dish.food_name.clone()
        };

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            let visible = name_len.min(NAME_COLUMN_WIDTH - 3);
            self.compute_highlight_ranges(&dish.food_name, m)
                .into_iter()
                .filter(|&(start, _)| start < visible)
                .map(|(start, end)| (start, end.min(visible)))
                .collect()
        });

        DisplayItem {
            name,
            cuisine: dish.cuisine_type.clone(),
            calories: format!("{} kcal", dish.food_calories_per_serving),
            calorie_band: dish.calorie_band(),
            score: format!("{}%", dish.score_percent()),
            score_band: dish.score_band(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Character ranges of `text` matched by any token of the results query.
    ///
    /// Each whitespace-separated token is fuzzy matched on its own; the union
    /// of their indices is coalesced into `(start, end)` ranges with an
    /// exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let mut indices: Vec<usize> = self
            .results_query
            .split_whitespace()
            .filter_map(|token| matcher.fuzzy_indices(text, token))
            .flat_map(|(_score, idx)| idx)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let health = self.ui().health;
        let health_label = match (health, self.health.checked_at()) {
            (HealthStatus::Unknown, _) | (_, None) => health.label().to_string(),
            (_, Some(at)) => format!("{} · {}", health.label(), at.format("%H:%M")),
        };
        HeaderInfo {
            title: " Savory ".to_string(),
            health,
            health_label,
        }
    }

    fn compute_tabs(active: Mode) -> Vec<TabInfo> {
        [Mode::Search, Mode::Chat]
            .into_iter()
            .map(|mode| TabInfo {
                mode,
                label: mode.label().to_string(),
                is_active: mode == active,
            })
            .collect()
    }

    fn compute_query_box(&self) -> QueryBoxInfo {
        let state = self.ui();
        let progress = match state.mode {
            Mode::Search => "Searching…",
            Mode::Chat => "Thinking…",
        };
        let loading_text = state.loading.then(|| progress.to_string());
        QueryBoxInfo {
            text: state.query.clone(),
            placeholder: state.mode.placeholder().to_string(),
            is_focused: self.focus == InputField::Query,
            loading_text,
        }
    }

    fn compute_filters(&self) -> Option<FiltersInfo> {
        let state = self.ui();
        if !state.mode.shows_filters() {
            return None;
        }
        let filters = &state.filters;
        let field = |field: InputField, label: &str, value: String, placeholder: &str| {
            FilterFieldInfo {
                label: label.to_string(),
                value,
                placeholder: placeholder.to_string(),
                is_focused: self.focus == field,
            }
        };
        Some(FiltersInfo {
            fields: vec![
                field(InputField::Cuisine, "Cuisine", filters.cuisine_filter.clone(), "any"),
                field(InputField::MaxCalories, "Max cal", filters.max_calories.clone(), "no limit"),
                field(
                    InputField::ResultCount,
                    "Results",
                    format!("‹ {} ›", filters.n_results),
                    "",
                ),
            ],
        })
    }

    fn compute_toast(state: &UiState) -> Option<ToastInfo> {
        state.error.as_ref().map(|message| ToastInfo {
            kind: if state.notice {
                ToastKind::Notice
            } else {
                ToastKind::Error
            },
            message: message.clone(),
        })
    }

    fn compute_answer(&self, cols: usize) -> Option<AnswerInfo> {
        let text = self.ui().chat_text.trim();
        if text.is_empty() {
            return None;
        }

        Some(AnswerInfo {
            title: "AI answer".to_string(),
            lines: wrap_capped(text, cols, MAX_ANSWER_LINES),
        })
    }

    fn compute_detail(&self, cols: usize) -> Option<DetailInfo> {
        let dish = self.selected_dish()?;
        let description = dish.food_description.trim();
        if description.is_empty() {
            return None;
        }
        Some(DetailInfo {
            title: dish.food_name.clone(),
            lines: wrap_capped(description, cols, MAX_DETAIL_LINES),
        })
    }

    fn compute_samples(&self) -> Vec<SampleChip> {
        SAMPLE_QUERIES
            .iter()
            .enumerate()
            .map(|(i, label)| SampleChip {
                key: format!("Alt+{}", i + 1),
                label: (*label).to_string(),
                is_last_picked: self.samples.last() == Some(i),
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let state = self.ui();
        let keybindings = if state.loading {
            "Esc: cancel  ↑/↓: browse  Ctrl+t: switch mode".to_string()
        } else {
            match (state.mode, self.focus) {
                (Mode::Search, InputField::ResultCount) => {
                    "←/→: result count  Tab: next field  Enter: search  Ctrl+t: AI chat  Esc: close"
                        .to_string()
                }
                (Mode::Search, _) => {
                    "Enter: search  Tab: filters  Ctrl+t: AI chat  Alt+1-5: samples  ↑/↓: browse  Esc: close"
                        .to_string()
                }
                (Mode::Chat, _) => {
                    "Enter: ask  Ctrl+t: smart search  Alt+1-5: samples  ↑/↓: browse  Esc: close"
                        .to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }
}

/// Wraps `text` to the card width for `cols`, keeping at most `max_lines` and
/// marking a cut with `…`.
fn wrap_capped(text: &str, cols: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, cols.saturating_sub(6).max(10));
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::sample_dish;

    fn state_with_results(count: usize) -> AppState {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        let results = (0..count)
            .map(|i| sample_dish(&i.to_string(), &format!("Dish {i}"), 0.8))
            .collect();
        state.store.set_results(results);
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with_results(3);
        assert!(state.move_selection_up());
        assert_eq!(state.selected_index, 2);
        assert!(state.move_selection_down());
        assert_eq!(state.selected_index, 0);

        let mut empty = state_with_results(0);
        assert!(!empty.move_selection_down());
        assert_eq!(empty.selected_dish(), None);
    }

    #[test]
    fn window_keeps_selection_visible() {
        let mut state = state_with_results(40);
        state.selected_index = 35;
        let vm = state.compute_viewmodel(24, 80);

        assert!(!vm.display_items.is_empty());
        assert!(vm.display_items.len() < 40);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].name, "Dish 35");
        assert_eq!(vm.total_results, 40);
    }

    #[test]
    fn highlight_covers_every_query_token() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        state.store.set_results(vec![sample_dish("1", "Thai Green Curry", 0.9)]);
        state.results_query = "green thai".to_string();

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 4), (5, 10)]);
    }

    #[test]
    fn long_names_are_truncated_on_char_boundaries() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        let name = "Crème brûlée ".repeat(5);
        state.store.set_results(vec![sample_dish("1", &name, 0.9)]);

        let vm = state.compute_viewmodel(30, 100);
        let shown = &vm.display_items[0].name;
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), NAME_COLUMN_WIDTH);
    }

    #[test]
    fn filters_row_only_in_search_mode() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        assert!(state.compute_viewmodel(24, 80).filters.is_some());

        state.store.set_mode(Mode::Chat);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.filters.is_none());
        assert_eq!(vm.query_box.placeholder, "Ask anything about food…");
        assert!(vm.tabs[1].is_active);
    }

    #[test]
    fn toast_kind_follows_the_store_not_the_wording() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        state.store.set_notice("Nothing here yet");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.toast.map(|t| t.kind), Some(ToastKind::Notice));
        assert!(vm.empty_state.is_none());

        state.store.set_error(Some("Nothing here yet".to_string()));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.toast.map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn long_answers_are_wrapped_and_capped() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        state.store.set_chat_text("word ".repeat(200));
        let vm = state.compute_viewmodel(40, 40);

        let answer = vm.answer.unwrap();
        assert_eq!(answer.lines.len(), MAX_ANSWER_LINES);
        assert!(answer.lines.iter().all(|l| l.chars().count() <= 35));
        assert!(answer.lines[MAX_ANSWER_LINES - 1].ends_with('…'));
    }

    #[test]
    fn selected_dish_description_is_shown() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        let mut curry = sample_dish("1", "Green Curry", 0.9);
        curry.food_description = "Coconut curry with Thai basil and bamboo shoots".to_string();
        state
            .store
            .set_results(vec![sample_dish("0", "Pad Thai", 0.95), curry]);

        let detail = state.compute_viewmodel(30, 100).detail.unwrap();
        assert_eq!(detail.title, "Pad Thai");
        assert_eq!(detail.lines, vec!["Rice noodles with chili and basil"]);

        state.move_selection_down();
        let vm = state.compute_viewmodel(30, 30);
        let detail = vm.detail.unwrap();
        assert_eq!(detail.title, "Green Curry");
        assert!(detail.lines.len() > 1);
        assert!(detail.lines.len() <= MAX_DETAIL_LINES);
        assert!(detail.lines.iter().all(|l| l.chars().count() <= 25));
    }

    #[test]
    fn no_detail_without_results_or_description() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        assert!(state.compute_viewmodel(24, 80).detail.is_none());

        let mut dish = sample_dish("1", "Plain Rice", 0.7);
        dish.food_description = "   ".to_string();
        state.store.set_results(vec![dish]);
        assert!(state.compute_viewmodel(24, 80).detail.is_none());
    }

    #[test]
    fn focus_falls_back_to_query_when_unavailable() {
        let mut state = AppState::new("http://api", 5.0, Theme::default());
        state.store.set_mode(Mode::Chat);
        assert!(!state.set_focus(InputField::Cuisine));
        assert_eq!(state.focus, InputField::Query);
    }
}
