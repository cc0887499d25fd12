//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/api
//! layers. It implements the event-driven controller behind the UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Store Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───── Transport replies, timers ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`health`]: One-shot backend health check
//! - [`modes`]: Search/Chat mode and input focus
//! - [`orchestrator`]: Request submission, stale-reply guard, reply mapping
//! - [`samples`]: Canned example queries
//! - [`state`]: Application state container and view model computation
//! - [`store`]: View state with change tracking
//!
//! # Example
//!
//! ```rust
//! use savory::app::{handle_event, AppState, Event};
//! use savory::ui::Theme;
//!
//! let mut state = AppState::new("http://localhost:8000", 5.0, Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Startup)?;
//! assert_eq!(actions.len(), 2); // check + timeout
//! # Ok::<(), savory::SavoryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod health;
pub mod modes;
pub mod orchestrator;
pub mod samples;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputField, Mode};
pub use state::AppState;
pub use store::{StateChange, Store, UiState};
