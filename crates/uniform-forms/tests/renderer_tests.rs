//! Form renderer tests
//!
//! Controls rendered from a validated form, form tags and the CSRF field.

use rstest::{fixture, rstest};
use serde_json::json;
use uniform_forms::{Attrs, Form, FormError, FormMethod, FormRenderer, SelectOption, ValidateOptions};
use uniform_test::fixtures::*;
use uniform_test::{DUMMY_CSRF_TOKEN, DummyRequest, DummySchema, RecordingTags};

#[fixture]
fn hello_request() -> DummyRequest {
	DummyRequest::builder()
		.path("/things")
		.post(json!({ "foo": "hello" }))
		.build()
}

fn validate(form: &mut Form<'_>) {
	let _ = form.validate_with(ValidateOptions::new().skip_csrf()).unwrap();
}

// ===================================================================
// Construction
// ===================================================================

#[rstest]
fn test_unvalidated_form_cannot_render(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let form = Form::new(&hello_request, &dummy_schema);

	assert!(matches!(FormRenderer::new(&form), Err(FormError::NotValidated)));
}

// ===================================================================
// Errors
// ===================================================================

#[rstest]
fn test_success_has_empty_errorlist(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(renderer.errorlist("foo"), "");
	assert!(!renderer.is_error("foo"));
	assert!(renderer.errors_for("foo").is_empty());
}

#[rstest]
fn test_failure_has_errorlist(invalid_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&invalid_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.errorlist("foo");

	assert_eq!(html, "<ul class=\"error\"><li>Please enter a value</li></ul>");
	assert!(renderer.is_error("foo"));
	assert_eq!(renderer.errors_for("foo").len(), 1);
}

// ===================================================================
// Controls
// ===================================================================

#[rstest]
fn test_value(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(renderer.value("foo", None), Some(&json!("hello")));
}

#[rstest]
fn test_text_without_param(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.text("bar", Some("somevalue"), None, &Attrs::new());

	assert_eq!(html, "<input type=\"text\" name=\"bar\" id=\"bar\" value=\"somevalue\" />");
}

#[rstest]
fn test_text_with_param(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.text("foo", Some("somevalue"), None, &Attrs::new());

	assert!(html.contains("value=\"hello\""));
	assert!(!html.contains("somevalue"));
}

#[rstest]
fn test_invalid_form_redisplays_submission(dummy_schema: DummySchema) {
	let request = DummyRequest::from_post(json!({ "foo": "" }));
	let mut form = Form::new(&request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.text("foo", Some("fallback"), None, &Attrs::new());

	assert!(html.contains("value=\"\""));
}

#[rstest]
fn test_each_control_renders(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();
	let attrs = Attrs::new().with("class", "field");

	assert_eq!(
		renderer.file("upload", None, None, &attrs),
		"<input type=\"file\" name=\"upload\" id=\"upload\" class=\"field\" />"
	);
	assert_eq!(
		renderer.hidden("foo", None, None, &attrs),
		"<input type=\"hidden\" name=\"foo\" id=\"foo\" value=\"hello\" class=\"field\" />"
	);
	assert_eq!(
		renderer.password("foo", None, None, &attrs),
		"<input type=\"password\" name=\"foo\" id=\"foo\" value=\"hello\" class=\"field\" />"
	);
	assert_eq!(
		renderer.submit(Some("go"), Some("Go"), None, &attrs),
		"<input type=\"submit\" name=\"go\" id=\"go\" value=\"Go\" class=\"field\" />"
	);
	assert_eq!(
		renderer.radio("foo", "hello", false, Some("Hello"), None, &attrs),
		"<label><input type=\"radio\" name=\"foo\" id=\"foo_hello\" value=\"hello\" checked=\"checked\" class=\"field\" /> Hello</label>"
	);
	assert_eq!(
		renderer.checkbox("agree", "1", false, None, None, &attrs),
		"<input type=\"checkbox\" name=\"agree\" id=\"agree\" value=\"1\" class=\"field\" />"
	);
	assert_eq!(
		renderer.textarea("foo", None, None, &attrs),
		"<textarea name=\"foo\" id=\"foo\" class=\"field\">hello</textarea>"
	);
}

#[rstest]
fn test_select_receives_sequence(hello_request: DummyRequest, dummy_schema: DummySchema, recording_tags: RecordingTags) {
	// Arrange
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap().with_tags(recording_tags);
	let options = [SelectOption::from(("hello", "Hello")), SelectOption::from(("bye", "Bye"))];

	// Act
	let html = renderer.select("foo", None, &options, None, &Attrs::new());
	renderer.select("missing", Some(&json!(["a", "b"])), &options, None, &Attrs::new());
	renderer.select("other", None, &options, None, &Attrs::new());

	// Assert
	let calls = renderer.tags().calls();
	assert_eq!(calls.len(), 3);
	assert_eq!(calls[0].selected, vec!["hello".to_string()]);
	assert_eq!(calls[1].selected, vec!["a".to_string(), "b".to_string()]);
	assert!(calls[2].selected.is_empty());
	assert!(html.contains("<option value=\"hello\" selected=\"selected\">Hello</option>"));
}

#[rstest]
fn test_explicit_id(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert!(renderer.text("foo", None, Some("tiger"), &Attrs::new()).contains("id=\"tiger\""));
}

#[rstest]
fn test_id_prefix(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap().with_id_prefix("blorg-");

	assert!(renderer.text("foo", None, None, &Attrs::new()).contains("id=\"blorg-foo\""));
}

// ===================================================================
// Form tags
// ===================================================================

#[rstest]
fn test_begin_defaults(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(
		renderer.begin(None, None, &Attrs::new()),
		"<form action=\"/things\" method=\"post\" enctype=\"multipart/form-data\">"
	);
}

#[rstest]
fn test_begin_overrides(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();
	let attrs = Attrs::new().with("method", "get").with("class", "search");

	assert_eq!(
		renderer.begin(Some("/search"), Some(false), &attrs),
		"<form action=\"/search\" method=\"get\" class=\"search\">"
	);
}

#[rstest]
fn test_begin_uses_form_method(dummy_schema: DummySchema) {
	let request = DummyRequest::builder()
		.path("/find")
		.query(json!({ "foo": "x" }))
		.build();
	let mut form = Form::new(&request, &dummy_schema)
		.with_method(Some(FormMethod::Get))
		.with_multipart(false);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(
		renderer.begin(None, None, &Attrs::new()),
		"<form action=\"/find\" method=\"get\">"
	);
}

#[rstest]
fn test_end(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(renderer.end(), "</form>");
}

// ===================================================================
// CSRF field
// ===================================================================

#[rstest]
fn test_csrf(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.csrf(None);

	assert_eq!(
		html,
		format!(
			"<input type=\"hidden\" name=\"_authentication_token\" id=\"_authentication_token\" value=\"{DUMMY_CSRF_TOKEN}\" />"
		)
		.as_str()
	);
}

#[rstest]
fn test_csrf_token(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	let html = renderer.csrf_token(None);

	assert!(html.as_str().starts_with("<div style=\"display:none;\"><input type=\"hidden\""));
	assert!(html.contains(DUMMY_CSRF_TOKEN));
	assert!(html.as_str().ends_with("</div>"));
}

#[rstest]
fn test_csrf_field_overrides(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema);
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap().with_csrf_field("token");

	assert!(renderer.csrf(None).contains("name=\"token\""));
	assert!(renderer.csrf(Some("xsrf")).contains("name=\"xsrf\""));
}

#[rstest]
fn test_csrf_field_follows_form_config(hello_request: DummyRequest, dummy_schema: DummySchema) {
	let mut form = Form::new(&hello_request, &dummy_schema).with_csrf_field("csrf");
	validate(&mut form);
	let renderer = FormRenderer::new(&form).unwrap();

	assert_eq!(renderer.csrf_field(), "csrf");
}
