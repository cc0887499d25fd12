//! End-to-end flows through `handle_event` with a recording transport standing
//! in for the Zellij host.

use savory::api::{OutboundRequest, RequestKind, Transport, TransportReply};
use savory::app::orchestrator::{CHAT_FAILED_MESSAGE, NO_MATCHES_NOTICE, SEARCH_FAILED_MESSAGE};
use savory::domain::{FilterValue, HealthStatus};
use savory::{handle_event, initialize, Action, Config, Event, Mode};
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingTransport {
    sent: Vec<OutboundRequest>,
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: &OutboundRequest) {
        self.sent.push(request.clone());
    }
}

struct Harness {
    app: savory::AppState,
    transport: RecordingTransport,
    timers: Vec<f64>,
    closed: bool,
}

impl Harness {
    fn new() -> Self {
        let config = Config {
            api_base_url: "http://food.test".to_string(),
            ..Config::default()
        };
        Self {
            app: initialize(&config),
            transport: RecordingTransport::default(),
            timers: Vec::new(),
            closed: false,
        }
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.app, &event).unwrap();
        for action in actions {
            match action {
                Action::Dispatch(request) => self.transport.send(&request),
                Action::ArmTimer { seconds } => self.timers.push(seconds),
                Action::CloseFocus => self.closed = true,
            }
        }
        render
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }

    fn last_request(&self) -> &OutboundRequest {
        self.transport.sent.last().expect("a request was dispatched")
    }

    fn last_payload(&self) -> Value {
        serde_json::from_slice(&self.last_request().body).unwrap()
    }

    fn answer(&mut self, request: &OutboundRequest, status: u16, body: &Value) -> bool {
        self.send(Event::TransportCompleted(TransportReply {
            status,
            body: body.to_string().into_bytes(),
            context: request.context(),
        }))
    }

    fn answer_last(&mut self, status: u16, body: &Value) -> bool {
        let request = self.last_request().clone();
        self.answer(&request, status, body)
    }
}

fn dish(id: u64, name: &str, score: f64) -> Value {
    json!({
        "food_id": id,
        "food_name": name,
        "similarity_score": score,
        "cuisine_type": "Thai",
        "food_calories_per_serving": 380,
        "food_description": "Rice noodles with chili and basil",
    })
}

#[test]
fn empty_search_sets_notice_and_clears_results() {
    let mut h = Harness::new();
    h.type_text("Spicy Thai noodles");
    assert!(h.send(Event::Submit));

    let request = h.last_request();
    assert_eq!(request.url, "http://food.test/api/search");
    assert_eq!(request.ticket.kind, RequestKind::Search);
    assert_eq!(h.last_payload(), json!({ "query": "Spicy Thai noodles", "n_results": 5 }));
    assert!(h.app.ui().loading);

    assert!(h.answer_last(200, &json!({ "results": [] })));
    let ui = h.app.ui();
    assert!(ui.results.is_empty());
    assert_eq!(ui.error.as_deref(), Some(NO_MATCHES_NOTICE));
    assert!(!ui.loading);
}

#[test]
fn whitespace_query_never_submits() {
    let mut h = Harness::new();
    h.type_text("  ");
    assert!(!h.send(Event::Submit));
    assert!(h.transport.sent.is_empty());
    assert!(!h.app.ui().loading);
}

#[test]
fn filters_are_included_in_search_payload() {
    let mut h = Harness::new();
    h.type_text("noodles");
    h.send(Event::NextField);
    h.type_text("Thai");
    h.send(Event::NextField);
    h.type_text("300");
    h.send(Event::Submit);

    assert_eq!(
        h.last_payload(),
        json!({
            "query": "noodles",
            "n_results": 5,
            "cuisine_filter": "Thai",
            "max_calories": 300,
        })
    );
}

#[test]
fn non_numeric_calorie_ceiling_is_omitted() {
    let mut h = Harness::new();
    h.send(Event::SetFilter(FilterValue::MaxCalories("lots".to_string())));
    h.send(Event::SetFilter(FilterValue::ResultCount(
        savory::domain::ResultCount::Ten,
    )));
    h.type_text("soup");
    h.send(Event::Submit);

    assert_eq!(h.last_payload(), json!({ "query": "soup", "n_results": 10 }));
}

#[test]
fn chat_sends_query_only_and_fills_answer_and_results() {
    let mut h = Harness::new();
    h.send(Event::NextField);
    h.type_text("Korean");
    h.send(Event::SetMode(Mode::Chat));
    h.send(Event::PickSample(4));
    h.send(Event::Submit);

    let request = h.last_request();
    assert_eq!(request.url, "http://food.test/api/chat");
    assert_eq!(h.last_payload(), json!({ "query": "High-protein breakfast" }));

    h.answer_last(
        200,
        &json!({
            "response": "Try a veggie omelette.",
            "results": [dish(7, "Veggie Omelette", 0.81), dish(8, "Greek Yogurt Bowl", 0.74)],
        }),
    );

    let ui = h.app.ui();
    assert_eq!(ui.chat_text, "Try a veggie omelette.");
    assert_eq!(ui.results.len(), 2);
    assert_eq!(ui.results[0].food_id.as_str(), "7");
    assert_eq!(ui.error, None);
    assert!(!ui.loading);
    assert_eq!(h.app.results_query, "High-protein breakfast");
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut h = Harness::new();
    h.type_text("curry");
    h.send(Event::Submit);
    h.answer_last(200, &json!({ "results": [dish(1, "Green Curry", 0.9)] }));
    assert_eq!(h.app.ui().results.len(), 1);

    h.send(Event::Submit);
    h.answer_last(500, &json!({ "detail": "boom" }));

    let ui = h.app.ui();
    assert_eq!(ui.results.len(), 1);
    assert_eq!(ui.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
    assert!(!ui.loading);
}

#[test]
fn mode_switch_keeps_query_answer_and_results() {
    let mut h = Harness::new();
    h.send(Event::ToggleMode);
    h.type_text("something warm");
    h.send(Event::Submit);
    h.answer_last(
        200,
        &json!({
            "response": "A bowl of pho would do.",
            "results": [dish(3, "Beef Pho", 0.86)],
        }),
    );

    assert!(h.send(Event::ToggleMode));
    let ui = h.app.ui();
    assert_eq!(ui.mode, Mode::Search);
    assert_eq!(ui.query, "something warm");
    assert_eq!(ui.chat_text, "A bowl of pho would do.");
    assert_eq!(ui.results.len(), 1);
    assert_eq!(ui.results[0].food_name, "Beef Pho");
}

#[test]
fn failed_chat_keeps_previous_results() {
    let mut h = Harness::new();
    h.type_text("curry");
    h.send(Event::Submit);
    h.answer_last(200, &json!({ "results": [dish(1, "Green Curry", 0.9)] }));

    h.send(Event::ToggleMode);
    h.send(Event::Submit);
    assert_eq!(h.last_request().ticket.kind, RequestKind::Chat);
    h.answer_last(500, &json!({ "detail": "boom" }));

    let ui = h.app.ui();
    assert_eq!(ui.results.len(), 1);
    assert_eq!(ui.results[0].food_name, "Green Curry");
    assert_eq!(ui.error.as_deref(), Some(CHAT_FAILED_MESSAGE));
    assert!(!ui.notice);
    assert!(!ui.loading);
}

#[test]
fn malformed_chat_body_is_a_failure() {
    let mut h = Harness::new();
    h.send(Event::ToggleMode);
    h.type_text("something sweet");
    h.send(Event::Submit);

    h.send(Event::TransportCompleted(TransportReply {
        status: 200,
        body: b"<html>gateway</html>".to_vec(),
        context: h.last_request().context(),
    }));

    let ui = h.app.ui();
    assert_eq!(ui.error.as_deref(), Some(CHAT_FAILED_MESSAGE));
    assert!(!ui.loading);
}

#[test]
fn out_of_range_scores_are_dropped() {
    let mut h = Harness::new();
    h.type_text("pad thai");
    h.send(Event::Submit);
    h.answer_last(
        200,
        &json!({ "results": [dish(1, "Pad Thai", 0.92), dish(2, "Broken", 1.7)] }),
    );

    let ui = h.app.ui();
    assert_eq!(ui.results.len(), 1);
    assert_eq!(ui.results[0].food_name, "Pad Thai");
}

#[test]
fn second_submit_while_loading_issues_nothing() {
    let mut h = Harness::new();
    h.type_text("ramen");
    h.send(Event::Submit);
    assert!(!h.send(Event::Submit));
    assert_eq!(h.transport.sent.len(), 1);
}

#[test]
fn reply_after_cancel_is_discarded() {
    let mut h = Harness::new();
    h.type_text("tacos");
    h.send(Event::Submit);
    let cancelled = h.last_request().clone();

    assert!(h.send(Event::Escape));
    assert!(!h.app.ui().loading);
    assert!(!h.closed);

    h.send(Event::Submit);
    let current = h.last_request().clone();
    assert_ne!(cancelled.ticket, current.ticket);

    assert!(!h.answer(&cancelled, 200, &json!({ "results": [dish(1, "Old Taco", 0.5)] })));
    assert!(h.app.ui().loading);
    assert!(h.app.ui().results.is_empty());

    h.answer(&current, 200, &json!({ "results": [dish(2, "Fish Taco", 0.88)] }));
    assert_eq!(h.app.ui().results[0].food_name, "Fish Taco");
    assert!(!h.app.ui().loading);
}

#[test]
fn escape_when_idle_closes_the_plugin() {
    let mut h = Harness::new();
    h.send(Event::Escape);
    assert!(h.closed);
}

#[test]
fn failed_health_check_never_recovers() {
    let mut h = Harness::new();
    assert_eq!(h.app.ui().health, HealthStatus::Unknown);

    h.send(Event::Startup);
    let check = h.last_request().clone();
    assert_eq!(check.url, "http://food.test/api/health");
    assert!(check.body.is_empty());
    assert_eq!(h.timers, vec![5.0]);

    assert!(h.answer(&check, 503, &json!({})));
    assert_eq!(h.app.ui().health, HealthStatus::Unhealthy);

    assert!(!h.answer(&check, 200, &json!({ "status": "ok" })));
    assert!(!h.send(Event::TimerElapsed));
    assert!(!h.send(Event::Startup));
    assert_eq!(h.app.ui().health, HealthStatus::Unhealthy);
    assert_eq!(h.transport.sent.len(), 1);
}

#[test]
fn health_timeout_marks_backend_offline() {
    let mut h = Harness::new();
    h.send(Event::Startup);
    let check = h.last_request().clone();

    assert!(h.send(Event::TimerElapsed));
    assert_eq!(h.app.ui().health, HealthStatus::Unhealthy);

    h.answer(&check, 200, &json!({ "status": "ok" }));
    assert_eq!(h.app.ui().health, HealthStatus::Unhealthy);
}

#[test]
fn health_reply_does_not_disturb_a_running_search() {
    let mut h = Harness::new();
    h.send(Event::Startup);
    let check = h.last_request().clone();

    h.type_text("dumplings");
    h.send(Event::Submit);
    h.answer(&check, 200, &json!({ "status": "ok" }));

    let ui = h.app.ui();
    assert_eq!(ui.health, HealthStatus::Healthy);
    assert!(ui.loading);
    assert!(h.app.health.checked_at().is_some());
}
