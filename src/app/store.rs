//! View state and its narrow mutation surface.
//!
//! [`UiState`] is the aggregate the view renders from. It is only reachable for
//! writing through [`Store`], whose setters record a [`StateChange`] whenever a
//! value actually changes. The event handler drains these after each event and
//! re-renders only when something was recorded.

use super::modes::Mode;
use crate::domain::{Dish, FilterSet, FilterValue, HealthStatus};

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub query: String,
    pub filters: FilterSet,
    pub mode: Mode,
    pub results: Vec<Dish>,
    pub chat_text: String,
    pub loading: bool,
    pub error: Option<String>,
    /// `error` holds a soft notice rather than a failure.
    pub notice: bool,
    pub health: HealthStatus,
}

/// Which part of [`UiState`] a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Query,
    Filters,
    Mode,
    Results,
    ChatText,
    Loading,
    Error,
    Health,
}

/// Owner of [`UiState`] with a pending change log.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: UiState,
    changes: Vec<StateChange>,
}

impl Store {
    /// Creates a store holding the startup defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current state.
    #[must_use]
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.state.query != query {
            self.state.query = query;
            self.record(StateChange::Query);
        }
    }

    pub fn set_filter(&mut self, value: FilterValue) {
        if self.state.filters.set(value) {
            self.record(StateChange::Filters);
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.mode != mode {
            self.state.mode = mode;
            self.record(StateChange::Mode);
        }
    }

    /// Replaces the result list wholesale.
    ///
    /// Records a change even when the new list equals the old one, so a repeated
    /// identical search still resets the selection.
    pub fn set_results(&mut self, results: Vec<Dish>) {
        self.state.results = results;
        self.record(StateChange::Results);
    }

    pub fn set_chat_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.state.chat_text != text {
            self.state.chat_text = text;
            self.record(StateChange::ChatText);
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.state.loading != loading {
            self.state.loading = loading;
            self.record(StateChange::Loading);
        }
    }

    /// Sets or clears the failure message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.set_message(error, false);
    }

    /// Shows `notice` in the message slot, styled as information.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.set_message(Some(notice.into()), true);
    }

    fn set_message(&mut self, message: Option<String>, notice: bool) {
        let notice = notice && message.is_some();
        if self.state.error != message || self.state.notice != notice {
            self.state.error = message;
            self.state.notice = notice;
            self.record(StateChange::Error);
        }
    }

    pub fn set_health(&mut self, health: HealthStatus) {
        if self.state.health != health {
            self.state.health = health;
            self.record(StateChange::Health);
        }
    }

    /// Takes the changes recorded since the last drain, in first-seen order.
    pub fn drain_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }

    fn record(&mut self, change: StateChange) {
        if !self.changes.contains(&change) {
            self.changes.push(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::sample_dish;
    use crate::domain::ResultCount;

    #[test]
    fn starts_with_defaults() {
        let store = Store::new();
        let state = store.state();
        assert_eq!(state.mode, Mode::Search);
        assert_eq!(state.filters.n_results, ResultCount::Five);
        assert_eq!(state.health, HealthStatus::Unknown);
        assert!(state.query.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn no_op_mutations_record_nothing() {
        let mut store = Store::new();
        store.set_query("");
        store.set_mode(Mode::Search);
        store.set_loading(false);
        store.set_error(None);
        store.set_health(HealthStatus::Unknown);
        store.set_filter(FilterValue::ResultCount(ResultCount::Five));
        assert!(store.drain_changes().is_empty());
    }

    #[test]
    fn changes_are_deduplicated_and_drained_once() {
        let mut store = Store::new();
        store.set_query("pho");
        store.set_query("pho bo");
        store.set_loading(true);
        store.set_results(vec![sample_dish("1", "Pho", 0.9)]);

        assert_eq!(
            store.drain_changes(),
            vec![StateChange::Query, StateChange::Loading, StateChange::Results]
        );
        assert!(store.drain_changes().is_empty());
        assert_eq!(store.state().query, "pho bo");
    }

    #[test]
    fn notice_and_error_share_the_message_slot() {
        let mut store = Store::new();
        store.set_notice("No dishes matched");
        assert!(store.state().notice);
        assert_eq!(store.drain_changes(), vec![StateChange::Error]);

        store.set_error(Some("No dishes matched".to_string()));
        assert!(!store.state().notice);
        assert_eq!(store.drain_changes(), vec![StateChange::Error]);

        store.set_notice("gone soon");
        store.set_error(None);
        assert_eq!(store.state().error, None);
        assert!(!store.state().notice);
    }
}
