//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: labels are formatted, bands are
//! resolved, answer text is already wrapped and the result list is already
//! windowed to the terminal height.
//!
//! # Example
//!
//! ```rust
//! use savory::domain::{CalorieBand, ScoreBand};
//! use savory::ui::viewmodel::DisplayItem;
//!
//! let item = DisplayItem {
//!     name: "Pad Thai".to_string(),
//!     cuisine: "Thai".to_string(),
//!     calories: "450 kcal".to_string(),
//!     calorie_band: CalorieBand::Medium,
//!     score: "83%".to_string(),
//!     score_band: ScoreBand::High,
//!     is_selected: true,
//!     highlight_ranges: vec![(0, 3)],
//! };
//! assert_eq!(item.calorie_band.label(), "Medium");
//! ```

use crate::app::modes::Mode;
use crate::domain::{CalorieBand, HealthStatus, ScoreBand};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub tabs: Vec<TabInfo>,
    pub query_box: QueryBoxInfo,

    /// Filter row, present in Search mode only.
    pub filters: Option<FiltersInfo>,

    /// Error or soft notice shown under the inputs.
    pub toast: Option<ToastInfo>,

    /// Generated chat answer, pre-wrapped.
    pub answer: Option<AnswerInfo>,

    /// Visible window of the result list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Total number of results, including rows outside the window.
    pub total_results: usize,

    /// Description of the dish under the cursor, shown below the table.
    pub detail: Option<DetailInfo>,

    pub samples: Vec<SampleChip>,

    /// Shown in place of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Title bar with the backend status.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub health: HealthStatus,

    /// Status text, e.g. "API connected · 14:02".
    pub health_label: String,
}

/// One mode tab.
#[derive(Debug, Clone)]
pub struct TabInfo {
    pub mode: Mode,
    pub label: String,
    pub is_active: bool,
}

/// Query input box.
#[derive(Debug, Clone)]
pub struct QueryBoxInfo {
    /// Typed text, empty when the placeholder applies.
    pub text: String,
    pub placeholder: String,
    pub is_focused: bool,

    /// Progress text while a request is in flight ("Searching…").
    pub loading_text: Option<String>,
}

/// Filter row in Search mode.
#[derive(Debug, Clone)]
pub struct FiltersInfo {
    pub fields: Vec<FilterFieldInfo>,
}

#[derive(Debug, Clone)]
pub struct FilterFieldInfo {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_focused: bool,
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational, e.g. a search with no matches.
    Notice,
    /// A request failed.
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub kind: ToastKind,
    pub message: String,
}

/// Chat answer card.
#[derive(Debug, Clone)]
pub struct AnswerInfo {
    pub title: String,
    pub lines: Vec<String>,
}

/// Description card for the selected dish.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,
    /// Description, pre-wrapped and capped.
    pub lines: Vec<String>,
}

/// Display information for one dish row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub name: String,
    pub cuisine: String,

    /// Calories with unit, e.g. "450 kcal".
    pub calories: String,
    pub calorie_band: CalorieBand,

    /// Match strength as a percentage, e.g. "83%".
    pub score: String,
    pub score_band: ScoreBand,

    pub is_selected: bool,

    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Sample query chip.
#[derive(Debug, Clone)]
pub struct SampleChip {
    /// Key that picks the sample, e.g. "Alt+1".
    pub key: String,
    pub label: String,

    /// Whether this sample was picked last.
    pub is_last_picked: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode and focus.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
