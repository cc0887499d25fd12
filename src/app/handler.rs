//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the plugin runtime
//! drives the application. Each event mutates [`AppState`] and yields the
//! actions the runtime must execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Startup` (network access granted)
//! - **Editing**: `Char`, `Backspace`, `ClearField`, `SetFilter`
//! - **Focus**: `NextField`, `PrevField`, `StepUp`, `StepDown`
//! - **Mode**: `ToggleMode`, `SetMode`
//! - **Samples**: `PickSample`, `NextSample`
//! - **Requests**: `Submit`, `Escape`, `TransportCompleted`, `TimerElapsed`
//! - **Navigation**: `KeyDown`, `KeyUp`
//!
//! # Render Flag
//!
//! The returned boolean is `true` iff the store recorded a change or a local
//! view concern (focus, selection) moved. No-op events do not re-render.
//!
//! # Example
//!
//! ```rust
//! use savory::app::{handle_event, AppState, Event};
//! use savory::ui::Theme;
//!
//! let mut state = AppState::new("http://localhost:8000", 5.0, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Char('p'))?;
//! assert!(render);
//! assert!(actions.is_empty());
//!
//! // Blank queries are never submitted.
//! let (_, actions) = handle_event(&mut state, &Event::Backspace)?;
//! assert!(actions.is_empty());
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(!render);
//! assert!(actions.is_empty());
//! # Ok::<(), savory::SavoryError>(())
//! ```

use super::modes::{InputField, Mode};
use super::orchestrator::Completion;
use super::{Action, AppState};
use crate::api::{RequestKind, TransportReply};
use crate::domain::error::Result;
use crate::domain::FilterValue;

/// Events triggered by user input, host callbacks or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Network access is available; runs the one-shot health check.
    Startup,

    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character from the focused text field.
    Backspace,
    /// Empties the focused text field.
    ClearField,

    /// Sets one filter field directly.
    SetFilter(FilterValue),

    /// Moves focus to the next field available in the current mode.
    NextField,
    /// Moves focus to the previous field available in the current mode.
    PrevField,
    /// Steps the result count up when it has focus.
    StepUp,
    /// Steps the result count down when it has focus.
    StepDown,

    /// Switches between Search and Chat.
    ToggleMode,
    /// Selects a mode explicitly.
    SetMode(Mode),

    /// Loads the sample query at the index into the query field.
    PickSample(usize),
    /// Loads the sample after the last one picked.
    NextSample,

    /// Submits the query through the current mode's endpoint.
    Submit,

    /// Cancels the in-flight request, or closes the plugin when idle.
    Escape,

    /// Moves result selection down (wraps to top).
    KeyDown,
    /// Moves result selection up (wraps to bottom).
    KeyUp,

    /// A request dispatched earlier has completed.
    TransportCompleted(TransportReply),

    /// The timer armed by [`Action::ArmTimer`] has fired.
    TimerElapsed,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the view must be redrawn, and the side effects
/// to execute in order.
///
/// # Errors
///
/// Returns [`SavoryError::Encode`](crate::SavoryError::Encode) if a request
/// payload cannot be serialized. State is left unchanged in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (view_changed, actions) = dispatch(state, event)?;

    let changes = state.store.drain_changes();
    if !changes.is_empty() {
        tracing::trace!(?changes, "state changed");
    }

    Ok((view_changed || !changes.is_empty(), actions))
}

/// Applies one event. The boolean reports changes to view state held outside
/// the store.
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Startup => {
            let base_url = state.orchestrator.base_url().to_string();
            Ok((false, state.health.start(&base_url)))
        }
        Event::Char(c) => {
            let Some(text) = state.focused_text() else {
                return Ok((false, vec![]));
            };
            let mut text = text.to_string();
            text.push(*c);
            tracing::trace!(field = ?state.focus, "field edited");
            state.set_focused_text(text);
            Ok((false, vec![]))
        }
        Event::Backspace => {
            let Some(text) = state.focused_text() else {
                return Ok((false, vec![]));
            };
            let mut text = text.to_string();
            text.pop();
            state.set_focused_text(text);
            Ok((false, vec![]))
        }
        Event::ClearField => {
            state.set_focused_text(String::new());
            Ok((false, vec![]))
        }
        Event::SetFilter(value) => {
            state.store.set_filter(value.clone());
            Ok((false, vec![]))
        }
        Event::NextField => {
            let next = state.focus.next(state.ui().mode);
            Ok((state.set_focus(next), vec![]))
        }
        Event::PrevField => {
            let prev = state.focus.prev(state.ui().mode);
            Ok((state.set_focus(prev), vec![]))
        }
        Event::StepUp | Event::StepDown => {
            if state.focus != InputField::ResultCount {
                return Ok((false, vec![]));
            }
            let current = state.ui().filters.n_results;
            let stepped = if *event == Event::StepUp {
                current.next()
            } else {
                current.prev()
            };
            state.store.set_filter(FilterValue::ResultCount(stepped));
            Ok((false, vec![]))
        }
        Event::ToggleMode => {
            let mode = state.ui().mode.toggle();
            Ok((apply_mode(state, mode), vec![]))
        }
        Event::SetMode(mode) => Ok((apply_mode(state, *mode), vec![])),
        Event::PickSample(index) => {
            if !state.samples.pick(&mut state.store, *index) {
                return Ok((false, vec![]));
            }
            // The chip highlight moves even when the query text is unchanged.
            state.set_focus(InputField::Query);
            Ok((true, vec![]))
        }
        Event::NextSample => {
            state.samples.next_sample(&mut state.store);
            state.set_focus(InputField::Query);
            Ok((true, vec![]))
        }
        Event::Submit => {
            let request = state.orchestrator.submit(&mut state.store)?;
            Ok((false, request.map(Action::Dispatch).into_iter().collect()))
        }
        Event::Escape => {
            if state.orchestrator.cancel(&mut state.store) {
                Ok((false, vec![]))
            } else {
                tracing::debug!("nothing in flight, closing plugin");
                Ok((false, vec![Action::CloseFocus]))
            }
        }
        Event::KeyDown => Ok((state.move_selection_down(), vec![])),
        Event::KeyUp => Ok((state.move_selection_up(), vec![])),
        Event::TransportCompleted(reply) => {
            if reply.ticket().is_some_and(|t| t.kind == RequestKind::Health) {
                state.health.on_reply(&mut state.store, reply);
                return Ok((false, vec![]));
            }

            match state.orchestrator.complete(&mut state.store, reply) {
                Completion::Succeeded { query } => {
                    state.selected_index = 0;
                    state.results_query = query;
                    Ok((true, vec![]))
                }
                Completion::Failed | Completion::Stale => Ok((false, vec![])),
            }
        }
        Event::TimerElapsed => {
            state.health.on_timeout(&mut state.store);
            Ok((false, vec![]))
        }
    }
}

/// Switches mode, pulling focus back to the query if it sat on a field the new
/// mode hides. Returns `true` if focus moved.
fn apply_mode(state: &mut AppState, mode: Mode) -> bool {
    state.store.set_mode(mode);
    tracing::debug!(?mode, "mode selected");
    let focus = state.focus;
    state.set_focus(focus)
}
