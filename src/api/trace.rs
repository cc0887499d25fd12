//! Trace context propagation onto outbound requests.
//!
//! The backend can stitch its own spans under the plugin's when requests carry
//! a W3C `traceparent` header built from the active `tracing` span.

/// Header name defined by the W3C Trace Context recommendation.
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// OpenTelemetry identifiers of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// Trace ID as 32 lowercase hex characters.
    pub trace_id: String,

    /// Span ID as 16 lowercase hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the current `tracing` span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is not
    /// being recorded, which is always the case in unit tests.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Formats the context as a sampled `traceparent` header value.
    ///
    /// ```
    /// use savory::api::TraceContext;
    ///
    /// let ctx = TraceContext {
    ///     trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
    ///     parent_span_id: "00f067aa0ba902b7".to_string(),
    /// };
    /// assert_eq!(
    ///     ctx.traceparent(),
    ///     "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
    /// );
    /// ```
    #[must_use]
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_span_id)
    }
}
