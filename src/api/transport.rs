//! Seam between the controller and whatever performs HTTP.

use super::request::OutboundRequest;

/// Sends requests without blocking.
///
/// Implementations fire the request and return immediately. The reply is fed
/// back later as [`Event::TransportCompleted`](crate::app::Event::TransportCompleted)
/// carrying the request's context map unchanged. Failures that prevent a reply
/// must still be reported, as a non-2xx status.
pub trait Transport {
    fn send(&mut self, request: &OutboundRequest);
}
