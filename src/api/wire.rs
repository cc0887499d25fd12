//! JSON bodies exchanged with the backend.
//!
//! Request types serialize exactly the fields the endpoint contract allows;
//! optional search filters are omitted rather than sent as `null`. Response
//! types tolerate missing or `null` collections the same way the backend's
//! older builds emit them.

use crate::domain::{Dish, ResultCount};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub n_results: ResultCount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
}

/// Body of `POST /api/chat`. Free text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Body returned by `POST /api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<Dish>>,
}

impl SearchResponse {
    /// Matches in relevance order, empty when the backend sent none.
    #[must_use]
    pub fn into_results(self) -> Vec<Dish> {
        self.results.unwrap_or_default()
    }
}

/// Body returned by `POST /api/chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    results: Option<Vec<Dish>>,
}

/// Generated answer with the matches it was grounded on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub response_text: String,
    pub results: Vec<Dish>,
}

impl From<ChatResponse> for ChatOutcome {
    fn from(response: ChatResponse) -> Self {
        Self {
            response_text: response.response.unwrap_or_default(),
            results: response.results.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_request_omits_absent_filters() {
        let request = SearchRequest {
            query: "Spicy Thai noodles".to_string(),
            n_results: ResultCount::Five,
            cuisine_filter: None,
            max_calories: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "Spicy Thai noodles", "n_results": 5 })
        );
    }

    #[test]
    fn search_request_includes_present_filters() {
        let request = SearchRequest {
            query: "curry".to_string(),
            n_results: ResultCount::Ten,
            cuisine_filter: Some("Thai".to_string()),
            max_calories: Some(300),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "curry",
                "n_results": 10,
                "cuisine_filter": "Thai",
                "max_calories": 300
            })
        );
    }

    #[test]
    fn responses_tolerate_missing_and_null_fields() {
        let missing: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_results().is_empty());

        let null: SearchResponse = serde_json::from_str(r#"{"results":null}"#).unwrap();
        assert!(null.into_results().is_empty());

        let chat: ChatResponse = serde_json::from_str(r#"{"response":null}"#).unwrap();
        let outcome = ChatOutcome::from(chat);
        assert_eq!(outcome.response_text, "");
        assert!(outcome.results.is_empty());
    }
}
