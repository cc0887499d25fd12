//! Zellij plugin wrapper and entry point.
//!
//! Translates host events into library [`Event`]s, feeds them to
//! [`handle_event`] and executes the returned [`Action`]s through the host
//! API. Nothing in here decides behavior.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `WebRequestResult`, `Timer`, `PermissionRequestResult`
//! 3. **Permission**: Once `WebAccess` is answered, `Event::Startup` runs the
//!    health check
//! 4. **Update**: Map host events, delegate to the library
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `WebRequestResult` → `Event::TransportCompleted`
//! - `Timer` → `Event::TimerElapsed`
//! - `Key` → see below
//!
//! # Keybindings
//!
//! - Characters: type into the focused field
//! - `Backspace`: delete, `Ctrl+u`: clear the field
//! - `Enter`: submit
//! - `Tab` / `Shift+Tab`: next / previous field
//! - `Left` / `Right`: step the result count (when focused)
//! - `Ctrl+t`: toggle Search/Chat
//! - `Alt+1`..`Alt+5`: load a sample query, `Ctrl+e`: next sample
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move through results
//! - `Esc`: cancel the running request, or hide the plugin when idle

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use savory::api::{Method, OutboundRequest, Transport, TransportReply};
use savory::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Sends requests through Zellij's `web_request`. Replies arrive as
/// `WebRequestResult` events with the context map echoed back.
#[derive(Debug, Default)]
struct ZellijTransport;

impl Transport for ZellijTransport {
    fn send(&mut self, request: &OutboundRequest) {
        let verb = match request.method {
            Method::Get => HttpVerb::Get,
            Method::Post => HttpVerb::Post,
        };
        tracing::debug!(url = %request.url, ?verb, body_len = request.body.len(), "sending web request");
        web_request(
            &request.url,
            verb,
            request.headers.clone(),
            request.body.clone(),
            request.context(),
        );
    }
}

/// Plugin state wrapper.
struct State {
    app: savory::AppState,
    transport: ZellijTransport,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: savory::initialize(&Config::default()),
            transport: ZellijTransport,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        savory::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_base_url = %config.api_base_url,
            health_timeout_secs = config.health_timeout_secs,
            "parsed configuration"
        );
        self.app = savory::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request completed");
                Event::TransportCompleted(TransportReply {
                    status,
                    body,
                    context,
                })
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("web access denied - backend will be reported offline");
                }
                Event::Startup
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        savory::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('t') => Some(Event::ToggleMode),
                BareKey::Char('e') => Some(Event::NextSample),
                BareKey::Char('u') => Some(Event::ClearField),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Alt]) {
            return match key.bare_key {
                BareKey::Char(c @ '1'..='5') => c
                    .to_digit(10)
                    .map(|digit| Event::PickSample(digit as usize - 1)),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PrevField);
        }

        Some(match key.bare_key {
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Tab => Event::NextField,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Right => Event::StepUp,
            BareKey::Left => Event::StepDown,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Dispatch(request) => self.transport.send(&request),
            Action::ArmTimer { seconds } => {
                tracing::debug!(seconds, "arming timer");
                set_timeout(seconds);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
