//! Backend wire contract and transport seam.
//!
//! Everything that knows about HTTP lives here: the JSON bodies of the three
//! endpoints, how a request is addressed and tagged, and the [`Transport`]
//! trait the plugin shim implements on top of Zellij's `web_request`.
//!
//! # Modules
//!
//! - [`wire`]: Request and response bodies
//! - [`request`]: Outbound requests, tickets and replies
//! - [`trace`]: W3C trace context propagation
//! - [`transport`]: The [`Transport`] trait

pub mod request;
pub mod trace;
pub mod transport;
pub mod wire;

pub use request::{Method, OutboundRequest, RequestKind, RequestTicket, TransportReply};
pub use trace::TraceContext;
pub use transport::Transport;
pub use wire::{ChatOutcome, ChatRequest, ChatResponse, SearchRequest, SearchResponse};
