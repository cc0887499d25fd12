//! Outbound requests and the replies matched back to them.
//!
//! Every request carries a [`RequestTicket`] (what was asked and under which
//! generation). The ticket travels through Zellij's `web_request` context map
//! and comes back untouched with the `WebRequestResult` event, which is how a
//! reply is tied to the request that produced it.

use super::trace::{TraceContext, TRACEPARENT_HEADER};
use super::wire::{ChatRequest, SearchRequest};
use crate::domain::error::{Result, SavoryError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Context key holding the request kind.
const CONTEXT_KIND: &str = "savory.kind";

/// Context key holding the request generation.
const CONTEXT_GENERATION: &str = "savory.generation";

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Health,
    Search,
    Chat,
}

impl RequestKind {
    /// Path of the endpoint relative to the API base address.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Health => "/api/health",
            Self::Search => "/api/search",
            Self::Chat => "/api/chat",
        }
    }

    /// HTTP method used for the endpoint.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Health => Method::Get,
            Self::Search | Self::Chat => Method::Post,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Search => "search",
            Self::Chat => "chat",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "health" => Some(Self::Health),
            "search" => Some(Self::Search),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }
}

/// HTTP method, mapped onto the host's verb type by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Identity of one request: its kind and the generation it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub kind: RequestKind,
    pub generation: u64,
}

impl RequestTicket {
    /// Encodes the ticket into a host context map.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_KIND.to_string(), self.kind.as_str().to_string()),
            (CONTEXT_GENERATION.to_string(), self.generation.to_string()),
        ])
    }

    /// Decodes a ticket from a host context map.
    ///
    /// Returns `None` for contexts that did not originate from this plugin.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let kind = RequestKind::parse(context.get(CONTEXT_KIND)?)?;
        let generation = context.get(CONTEXT_GENERATION)?.parse().ok()?;
        Some(Self { kind, generation })
    }
}

/// A fully built request ready to hand to a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub ticket: RequestTicket,
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Builds the health check.
    #[must_use]
    pub fn health(base_url: &str, generation: u64) -> Self {
        let kind = RequestKind::Health;
        Self {
            ticket: RequestTicket { kind, generation },
            method: kind.method(),
            url: join_url(base_url, kind.endpoint()),
            headers: base_headers(),
            body: Vec::new(),
        }
    }

    /// Builds a structured search request.
    ///
    /// # Errors
    ///
    /// Returns [`SavoryError::Encode`] if the payload cannot be serialized.
    pub fn search(base_url: &str, generation: u64, payload: &SearchRequest) -> Result<Self> {
        Self::json(RequestKind::Search, base_url, generation, payload)
    }

    /// Builds a free-text chat request.
    ///
    /// # Errors
    ///
    /// Returns [`SavoryError::Encode`] if the payload cannot be serialized.
    pub fn chat(base_url: &str, generation: u64, payload: &ChatRequest) -> Result<Self> {
        Self::json(RequestKind::Chat, base_url, generation, payload)
    }

    fn json<T: Serialize>(
        kind: RequestKind,
        base_url: &str,
        generation: u64,
        payload: &T,
    ) -> Result<Self> {
        let body =
            serde_json::to_vec(payload).map_err(|e| SavoryError::Encode(e.to_string()))?;

        let mut headers = base_headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(Self {
            ticket: RequestTicket { kind, generation },
            method: kind.method(),
            url: join_url(base_url, kind.endpoint()),
            headers,
            body,
        })
    }

    /// Host context map carrying this request's ticket.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        self.ticket.to_context()
    }
}

fn base_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    if let Some(trace) = TraceContext::from_current() {
        headers.insert(TRACEPARENT_HEADER.to_string(), trace.traceparent());
    }
    headers
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}

/// Completed exchange as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: Vec<u8>,
    pub context: BTreeMap<String, String>,
}

impl TransportReply {
    /// Returns `true` for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Ticket of the request this reply answers, if it carries one.
    #[must_use]
    pub fn ticket(&self) -> Option<RequestTicket> {
        RequestTicket::from_context(&self.context)
    }

    /// Checks the status and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns [`SavoryError::Transport`] for a non-2xx status and
    /// [`SavoryError::Decode`] if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, kind: RequestKind) -> Result<T> {
        if !self.is_success() {
            return Err(SavoryError::Transport {
                endpoint: kind.endpoint(),
                status: self.status,
            });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}
