//! Backend availability snapshot.

/// Result of the one-shot health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// Check not yet resolved.
    #[default]
    Unknown,
    /// Check answered with a 2xx status.
    Healthy,
    /// Check failed, returned a non-2xx status, or timed out.
    Unhealthy,
}

impl HealthStatus {
    /// Status line shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking…",
            Self::Healthy => "API connected",
            Self::Unhealthy => "API offline",
        }
    }

    /// Returns `true` once the check has produced a final answer.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
