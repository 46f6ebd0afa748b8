//! Schema double

use serde_json::Value;
use std::cell::Cell;
use uniform_forms::{FormData, Invalid, Params, Schema, State};

/// Message reported for an empty or missing `foo`
pub const EMPTY_VALUE_MESSAGE: &str = "Please enter a value";

/// Schema with a single required string field `foo`
///
/// Unknown fields make it fail without a per-field mapping, the way a
/// schema that forbids extra fields does. Counts how often it runs.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uniform_forms::{Schema, State};
/// use uniform_test::{DummyRequest, DummySchema};
///
/// let request = DummyRequest::from_post(json!({ "foo": "" }));
/// let schema = DummySchema::new();
///
/// let err = schema.normalize(&Default::default(), &State::new(&request)).unwrap_err();
/// assert!(err.has_field_errors());
/// assert_eq!(schema.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DummySchema {
	calls: Cell<usize>,
}

impl DummySchema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of times the schema was run
	pub fn calls(&self) -> usize {
		self.calls.get()
	}
}

impl Schema for DummySchema {
	fn normalize(&self, params: &Params, _state: &State<'_>) -> Result<FormData, Invalid> {
		self.calls.set(self.calls.get() + 1);

		let mut extra: Vec<&str> = params
			.keys()
			.map(String::as_str)
			.filter(|name| *name != "foo")
			.collect();
		if !extra.is_empty() {
			extra.sort_unstable();
			return Err(Invalid::new(format!(
				"The input field(s) {} were not expected.",
				extra.join(", ")
			)));
		}

		match params.get("foo") {
			Some(Value::String(foo)) if !foo.is_empty() => {
				Ok(FormData::from([("foo".to_string(), Value::from(foo.as_str()))]))
			}
			_ => Err(Invalid::new(format!("foo: {EMPTY_VALUE_MESSAGE}"))
				.with_field("foo", EMPTY_VALUE_MESSAGE)),
		}
	}
}
