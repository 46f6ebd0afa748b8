//! rstest fixtures
//!
//! Pull them into a test with `use uniform_test::fixtures::*;` and name them
//! as `#[rstest]` arguments.

use crate::mock::{DummyObject, RecordingTags};
use crate::request::{DUMMY_CSRF_TOKEN, DummyRequest};
use crate::schema::DummySchema;
use rstest::fixture;
use serde_json::json;
use uniform_forms::DEFAULT_CSRF_FIELD;

/// Fresh schema with a zero call count
#[fixture]
pub fn dummy_schema() -> DummySchema {
	DummySchema::new()
}

/// POST request with a valid `foo` and the session's CSRF token
#[fixture]
pub fn csrf_request() -> DummyRequest {
	DummyRequest::builder()
		.post(json!({ "foo": "hello", DEFAULT_CSRF_FIELD: DUMMY_CSRF_TOKEN }))
		.build()
}

/// POST request with an empty `foo` and no CSRF token
#[fixture]
pub fn invalid_request() -> DummyRequest {
	DummyRequest::from_post(json!({ "foo": "" }))
}

#[fixture]
pub fn dummy_object() -> DummyObject {
	DummyObject::new()
}

#[fixture]
pub fn recording_tags() -> RecordingTags {
	RecordingTags::new()
}
