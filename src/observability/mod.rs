//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → savory-otlp.json
//! ```
//!
//! The trace file lives in the plugin data directory
//! (`~/.local/share/zellij/savory/` on the host) and rotates at 10 MB, keeping
//! three backups. Outgoing requests carry the active span as a W3C
//! `traceparent` header (see [`crate::api::TraceContext`]), so client and
//! backend spans join into one trace.
//!
//! The level comes from the `trace_level` plugin option, default `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
