//! Validation failure logging
//!
//! Captures `uniform::validate` events with a recording layer and checks the
//! request context they carry.

use rstest::rstest;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use uniform_forms::{Form, ValidateOptions};
use uniform_test::fixtures::*;
use uniform_test::{DummyRequest, DummySchema, EMPTY_VALUE_MESSAGE};

// ===================================================================
// Event capture
// ===================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
	level: Level,
	fields: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct ValidateLog {
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

#[derive(Default)]
struct FieldVisitor {
	fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		self.fields.insert(field.name().to_string(), value.to_string());
	}

	fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
		self.fields.insert(field.name().to_string(), format!("{value:?}"));
	}
}

impl<S> Layer<S> for ValidateLog
where
	S: tracing::Subscriber,
{
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
		if event.metadata().target() != "uniform::validate" {
			return;
		}
		let mut visitor = FieldVisitor::default();
		event.record(&mut visitor);
		self.events.lock().unwrap().push(CapturedEvent {
			level: *event.metadata().level(),
			fields: visitor.fields,
		});
	}
}

fn capture_validate_events() -> (tracing::dispatcher::DefaultGuard, Arc<Mutex<Vec<CapturedEvent>>>) {
	let log = ValidateLog::default();
	let events = log.events.clone();
	let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(log));
	tracing::callsite::rebuild_interest_cache();
	(guard, events)
}

fn errors_logged(events: &[CapturedEvent]) -> Vec<CapturedEvent> {
	events.iter().filter(|e| e.level == Level::ERROR).cloned().collect()
}

// ===================================================================
// Failure event
// ===================================================================

#[rstest]
fn test_failure_logs_request_context(dummy_schema: DummySchema) {
	// Arrange
	let request = DummyRequest::builder()
		.url("https://shop.example.com/signup?ref=mail")
		.remote_addr("203.0.113.9")
		.user_agent("Mozilla/5.0 (X11; Linux)")
		.post(json!({ "foo": "", "note": "hi" }))
		.build();
	let mut form = Form::new(&request, &dummy_schema);
	let (_guard, events) = capture_validate_events();

	// Act
	let valid = form.validate_with(ValidateOptions::new().skip_csrf()).unwrap();

	// Assert
	assert!(!valid);
	let events = events.lock().unwrap();
	let failures = errors_logged(&events);
	assert_eq!(failures.len(), 1);
	let fields = &failures[0].fields;
	assert_eq!(fields["url"], "https://shop.example.com/signup?ref=mail");
	assert!(fields["remote_addr"].contains("203.0.113.9"));
	assert!(fields["user_agent"].contains("Mozilla/5.0 (X11; Linux)"));
	assert!(fields["params"].contains("note"));
	assert!(fields["params"].contains("hi"));
	assert!(fields["errors"].contains("foo"));
	assert!(fields["errors"].contains(EMPTY_VALUE_MESSAGE));
}

#[rstest]
fn test_failure_logs_missing_client_details_as_none(dummy_schema: DummySchema) {
	let request = DummyRequest::from_post(json!({ "foo": "" }));
	let mut form = Form::new(&request, &dummy_schema);
	let (_guard, events) = capture_validate_events();

	form.validate_with(ValidateOptions::new().skip_csrf()).unwrap();

	let events = events.lock().unwrap();
	let failures = errors_logged(&events);
	assert_eq!(failures.len(), 1);
	assert_eq!(failures[0].fields["remote_addr"], "None");
	assert_eq!(failures[0].fields["user_agent"], "None");
}

#[rstest]
fn test_success_logs_no_failure(dummy_schema: DummySchema) {
	let request = DummyRequest::from_post(json!({ "foo": "hello" }));
	let mut form = Form::new(&request, &dummy_schema);
	let (_guard, events) = capture_validate_events();

	assert!(form.validate_with(ValidateOptions::new().skip_csrf()).unwrap());

	let events = events.lock().unwrap();
	assert!(errors_logged(&events).is_empty());
	assert!(events.iter().any(|e| e.level == Level::DEBUG));
}
