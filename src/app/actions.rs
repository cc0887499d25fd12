//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order: requests go to the
//! [`Transport`](crate::api::Transport), timers and pane visibility go to the
//! host.
//!
//! # Example
//!
//! ```rust
//! use savory::api::OutboundRequest;
//! use savory::app::Action;
//!
//! let actions = vec![
//!     Action::Dispatch(OutboundRequest::health("http://localhost:8000", 0)),
//!     Action::ArmTimer { seconds: 5.0 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::api::OutboundRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Sends a request through the transport.
    ///
    /// The reply comes back later as
    /// [`Event::TransportCompleted`](crate::app::Event::TransportCompleted).
    Dispatch(OutboundRequest),

    /// Arms a one-shot timer that fires
    /// [`Event::TimerElapsed`](crate::app::Event::TimerElapsed).
    ArmTimer {
        /// Delay before the timer fires.
        seconds: f64,
    },

    /// Hides the plugin pane.
    ///
    /// Sent when the user presses Escape with nothing in flight.
    CloseFocus,
}
