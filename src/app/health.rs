//! One-shot backend health check.
//!
//! [`HealthMonitor::start`] emits the check and a timeout timer together. The
//! first of the two to resolve decides the status; once resolved, the status
//! is final for the session.

use super::actions::Action;
use super::store::Store;
use crate::api::{OutboundRequest, RequestKind, TransportReply};
use crate::domain::HealthStatus;
use chrono::{DateTime, Local};

/// Default check timeout in seconds.
pub const DEFAULT_HEALTH_TIMEOUT_SECS: f64 = 5.0;

/// Generation carried by the check's ticket.
const CHECK_GENERATION: u64 = 0;

#[derive(Debug, Clone)]
pub struct HealthMonitor {
    timeout_secs: f64,
    started: bool,
    checked_at: Option<DateTime<Local>>,
}

impl HealthMonitor {
    #[must_use]
    pub const fn new(timeout_secs: f64) -> Self {
        Self {
            timeout_secs,
            started: false,
            checked_at: None,
        }
    }

    /// Local time at which the status was resolved.
    #[must_use]
    pub const fn checked_at(&self) -> Option<DateTime<Local>> {
        self.checked_at
    }

    /// Issues the check and arms its timeout. Later calls return no actions.
    pub fn start(&mut self, base_url: &str) -> Vec<Action> {
        if self.started {
            tracing::debug!("health check already started");
            return vec![];
        }
        self.started = true;

        let check = OutboundRequest::health(base_url, CHECK_GENERATION);
        tracing::info!(url = %check.url, timeout_secs = self.timeout_secs, "checking backend health");

        vec![
            Action::Dispatch(check),
            Action::ArmTimer {
                seconds: self.timeout_secs,
            },
        ]
    }

    /// Resolves the status from the check reply, unless already resolved.
    pub fn on_reply(&mut self, store: &mut Store, reply: &TransportReply) {
        if !self.started || store.state().health.is_resolved() {
            tracing::debug!(status = reply.status, "ignoring late health reply");
            return;
        }

        let status = if reply.is_success() {
            HealthStatus::Healthy
        } else {
            tracing::warn!(
                endpoint = RequestKind::Health.endpoint(),
                status = reply.status,
                "health check failed"
            );
            HealthStatus::Unhealthy
        };
        self.resolve(store, status);
    }

    /// Marks the backend unhealthy if the check has not answered yet.
    pub fn on_timeout(&mut self, store: &mut Store) {
        if !self.started || store.state().health.is_resolved() {
            return;
        }
        tracing::warn!(timeout_secs = self.timeout_secs, "health check timed out");
        self.resolve(store, HealthStatus::Unhealthy);
    }

    fn resolve(&mut self, store: &mut Store, status: HealthStatus) {
        self.checked_at = Some(Local::now());
        store.set_health(status);
        tracing::info!(?status, "backend health resolved");
    }
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_TIMEOUT_SECS)
    }
}
