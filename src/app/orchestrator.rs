//! Submission of search and chat requests and mapping of their replies.
//!
//! The orchestrator owns the in-flight guard. Submitting allocates a new
//! generation and records it as the in-flight ticket; a reply is applied only
//! if its ticket matches. Anything else (a reply to a cancelled request, or to
//! one issued before a newer submission) is stale and dropped without touching
//! the store.
//!
//! Backend failures never escape as errors: they become the user-facing message
//! of the mode that issued the request, and the previous results stay visible.

use super::modes::Mode;
use super::store::{Store, UiState};
use crate::api::{
    ChatOutcome, ChatRequest, ChatResponse, OutboundRequest, RequestKind, RequestTicket,
    SearchRequest, SearchResponse, TransportReply,
};
use crate::domain::error::Result;
use crate::domain::Dish;
use chrono::{DateTime, Utc};

/// Soft notice shown when a search succeeds with no matches.
pub const NO_MATCHES_NOTICE: &str = "No dishes matched — try different keywords.";

/// Shown when a search request fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Could not reach the backend. Is the server running?";

/// Shown when a chat request fails.
pub const CHAT_FAILED_MESSAGE: &str = "AI response failed. Make sure the server is running.";

/// Result of feeding a reply to [`RequestOrchestrator::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The reply did not match the in-flight ticket and was dropped.
    Stale,

    /// The request failed; the mode's failure message is set.
    Failed,

    /// The result list was replaced.
    Succeeded {
        /// Trimmed query that produced the results.
        query: String,
    },
}

#[derive(Debug, Clone)]
struct InFlight {
    ticket: RequestTicket,
    query: String,
    issued_at: DateTime<Utc>,
}

/// Builds outbound requests and applies their outcomes to the [`Store`].
#[derive(Debug, Clone)]
pub struct RequestOrchestrator {
    base_url: String,
    next_generation: u64,
    in_flight: Option<InFlight>,
}

impl RequestOrchestrator {
    /// Creates an orchestrator targeting `base_url`.
    ///
    /// Generations start at 1; generation 0 is left to the health check.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            next_generation: 1,
            in_flight: None,
        }
    }

    /// API base address requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ticket of the request currently awaiting a reply.
    #[must_use]
    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight.as_ref().map(|f| f.ticket)
    }

    /// Returns `true` if the trimmed query is non-empty and nothing is loading.
    ///
    /// Filters and mode have no influence.
    #[must_use]
    pub fn can_submit(state: &UiState) -> bool {
        !state.loading && !state.query.trim().is_empty()
    }

    /// Builds the search payload from the current query and filters.
    ///
    /// `cuisine_filter` is included only when non-blank after trimming and
    /// `max_calories` only when the typed text coerces to a non-negative number.
    #[must_use]
    pub fn search_payload(state: &UiState) -> SearchRequest {
        SearchRequest {
            query: state.query.trim().to_string(),
            n_results: state.filters.n_results,
            cuisine_filter: state.filters.cuisine().map(str::to_string),
            max_calories: state.filters.max_calories(),
        }
    }

    /// Builds the chat payload, which carries the trimmed query only.
    #[must_use]
    pub fn chat_payload(state: &UiState) -> ChatRequest {
        ChatRequest {
            query: state.query.trim().to_string(),
        }
    }

    /// Starts a request for the current mode.
    ///
    /// Returns `Ok(None)` and leaves the store untouched when submission is not
    /// allowed. Otherwise clears the error, marks the store as loading, records
    /// the new in-flight ticket and returns the request to dispatch. In Search
    /// mode the previous chat answer is also cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SavoryError::Encode`](crate::SavoryError::Encode) if the payload
    /// cannot be serialized. The store is not modified in that case.
    pub fn submit(&mut self, store: &mut Store) -> Result<Option<OutboundRequest>> {
        let state = store.state();
        if self.in_flight.is_some() || !Self::can_submit(state) {
            tracing::debug!(
                loading = state.loading,
                query_len = state.query.len(),
                "submit refused"
            );
            return Ok(None);
        }

        let generation = self.next_generation;
        let mode = state.mode;
        let _span = tracing::debug_span!("submit", ?mode, generation).entered();

        let request = match mode {
            Mode::Search => {
                OutboundRequest::search(&self.base_url, generation, &Self::search_payload(state))?
            }
            Mode::Chat => {
                OutboundRequest::chat(&self.base_url, generation, &Self::chat_payload(state))?
            }
        };
        let query = state.query.trim().to_string();

        self.next_generation += 1;
        self.in_flight = Some(InFlight {
            ticket: request.ticket,
            query,
            issued_at: Utc::now(),
        });

        store.set_error(None);
        store.set_loading(true);
        if mode == Mode::Search {
            store.set_chat_text("");
        }

        tracing::info!(url = %request.url, "request dispatched");
        Ok(Some(request))
    }

    /// Applies a reply to the store if it answers the in-flight request.
    pub fn complete(&mut self, store: &mut Store, reply: &TransportReply) -> Completion {
        let ticket = reply.ticket();
        let Some(in_flight) = self
            .in_flight
            .take_if(|f| ticket.is_some_and(|t| t == f.ticket))
        else {
            tracing::debug!(?ticket, in_flight = ?self.in_flight(), "discarding stale reply");
            return Completion::Stale;
        };

        let kind = in_flight.ticket.kind;
        let elapsed_ms = (Utc::now() - in_flight.issued_at).num_milliseconds();
        let _span = tracing::debug_span!(
            "complete",
            ?kind,
            generation = in_flight.ticket.generation,
            status = reply.status
        )
        .entered();
        tracing::info!(elapsed_ms, "reply received");

        let completion = match kind {
            RequestKind::Search => match reply.decode::<SearchResponse>(kind) {
                Ok(response) => {
                    let results = accept_results(response.into_results());
                    if results.is_empty() {
                        store.set_notice(NO_MATCHES_NOTICE);
                    }
                    store.set_results(results);
                    Completion::Succeeded { query: in_flight.query }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "search failed");
                    store.set_error(Some(SEARCH_FAILED_MESSAGE.to_string()));
                    Completion::Failed
                }
            },
            RequestKind::Chat => match reply.decode::<ChatResponse>(kind) {
                Ok(response) => {
                    let outcome = ChatOutcome::from(response);
                    store.set_chat_text(outcome.response_text);
                    store.set_results(accept_results(outcome.results));
                    Completion::Succeeded { query: in_flight.query }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "chat failed");
                    store.set_error(Some(CHAT_FAILED_MESSAGE.to_string()));
                    Completion::Failed
                }
            },
            RequestKind::Health => {
                tracing::warn!("health reply routed to request orchestrator");
                Completion::Stale
            }
        };

        store.set_loading(false);
        completion
    }

    /// Abandons the in-flight request.
    ///
    /// Clears the loading flag and leaves results and error untouched. Returns
    /// `false` when nothing was in flight.
    pub fn cancel(&mut self, store: &mut Store) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        tracing::info!(
            kind = ?in_flight.ticket.kind,
            generation = in_flight.ticket.generation,
            "request cancelled"
        );
        store.set_loading(false);
        true
    }
}

fn accept_results(results: Vec<Dish>) -> Vec<Dish> {
    let received = results.len();
    let accepted: Vec<Dish> = results
        .into_iter()
        .filter(|dish| {
            let valid = dish.has_valid_score();
            if !valid {
                tracing::warn!(
                    food_id = %dish.food_id,
                    score = dish.similarity_score,
                    "dropping dish with out-of-range similarity score"
                );
            }
            valid
        })
        .collect();
    tracing::debug!(received, accepted = accepted.len(), "results decoded");
    accepted
}
