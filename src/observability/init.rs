//! Subscriber installation.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the span file inside the data directory.
pub const TRACE_FILE_NAME: &str = "savory-otlp.json";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global `tracing` subscriber: an [`EnvFilter`] feeding an
/// OpenTelemetry layer that exports to the trace file.
///
/// Does nothing if the data directory cannot be created. Later calls are
/// no-ops once a global subscriber is set.
///
/// # Parameters
///
/// * `config` - Plugin configuration; only `trace_level` is read here
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and parseable as an `EnvFilter` directive
/// 2. Otherwise `"info"`
///
/// # File Location
///
/// Spans go to `/host/.local/share/zellij/savory/savory-otlp.json` inside the
/// sandbox, which is `~/.local/share/zellij/savory/savory-otlp.json` when
/// Zellij is started from the home directory.
///
/// # Example
///
/// ```rust,no_run
/// use savory::observability::init_tracing;
/// use savory::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Savory"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("Savory"));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
