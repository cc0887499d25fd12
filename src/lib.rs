//! Savory: a Zellij plugin for discovering dishes.
//!
//! Savory talks to a food-discovery backend over HTTP and offers two modes:
//! - **Smart Search**: ranked dishes for a free-text query, narrowed by
//!   cuisine, a calorie ceiling and a result count
//! - **AI Chat**: a conversational answer plus the dishes it recommends
//!
//! A one-shot health check on startup tells the user whether the backend is
//! reachable, and five sample queries give a starting point.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web requests, timers
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Store: observable UI state + change log          │
//! │  - Mode controller, request orchestrator            │
//! │  - Health monitor, sample picker                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ API Layer (api/)      │   │ UI Layer (ui/)            │
//! │ - Wire payloads       │   │ - Rendering               │
//! │ - Requests & tickets  │   │ - Theming                 │
//! │ - Transport trait     │   │ - Components              │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the Zellij host. Requests leave as
//! [`Action::Dispatch`] and come back as [`Event::TransportCompleted`]; the
//! shim owns the translation in both directions.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/savory.wasm" {
//!         api_base_url "http://localhost:8000"
//!         health_timeout_secs "5"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use savory::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PickSample(0))?;
//! assert!(actions.is_empty());
//!
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert!(matches!(&actions[..], [Action::Dispatch(req)] if req.url.ends_with("/api/search")));
//! # Ok::<(), savory::SavoryError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputField, Mode};
pub use domain::{Result, SavoryError};
pub use ui::Theme;

use app::health::DEFAULT_HEALTH_TIMEOUT_SECS;
use std::collections::BTreeMap;

/// Backend address used when neither the plugin option nor the environment
/// provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted when `api_base_url` is not configured.
pub const API_BASE_URL_ENV: &str = "SAVORY_API_BASE_URL";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base address, without a trailing slash.
    pub api_base_url: String,

    /// Seconds the startup health check may take before the backend is
    /// reported offline. Default: 5
    pub health_timeout_secs: f64,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_timeout_secs: DEFAULT_HEALTH_TIMEOUT_SECS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// - `api_base_url`: falls back to `$SAVORY_API_BASE_URL`, then
    ///   `http://localhost:8000`
    /// - `health_timeout_secs`: positive number of seconds, else 5
    /// - `theme`, `theme_file`, `trace_level`: taken as given
    ///
    /// Blank values count as absent.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use savory::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://food.example/".to_string());
    /// map.insert("health_timeout_secs".to_string(), "2.5".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "https://food.example");
    /// assert_eq!(config.health_timeout_secs, 2.5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_base_url = resolve_base_url(
            non_blank(config, "api_base_url"),
            std::env::var(API_BASE_URL_ENV).ok().as_deref(),
        );

        let health_timeout_secs = non_blank(config, "health_timeout_secs")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS);

        Self {
            api_base_url,
            health_timeout_secs,
            theme_name: non_blank(config, "theme").map(String::from),
            theme_file: non_blank(config, "theme_file").map(String::from),
            trace_level: non_blank(config, "trace_level").map(String::from),
        }
    }
}

fn non_blank<'a>(config: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    config
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn resolve_base_url(configured: Option<&str>, from_env: Option<&str>) -> String {
    configured
        .or_else(|| from_env.map(str::trim).filter(|url| !url.is_empty()))
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Builds the initial [`AppState`]: loads the theme (file, then name, then the
/// default) and wires the controllers to the configured backend.
///
/// Theme problems are logged and never fatal.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing savory plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.api_base_url.clone(), config.health_timeout_secs, theme)
}
