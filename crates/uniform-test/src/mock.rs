//! Recording doubles for tag rendering and binding

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use uniform_forms::{BindError, BindTarget};
use uniform_html::{Attrs, HtmlTags, Markup, SelectOption, TagRenderer};

/// Arguments of one recorded [`TagRenderer`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCall {
	pub control: &'static str,
	pub name: Option<String>,
	pub value: Option<String>,
	pub id: Option<String>,
	/// Selection handed to `select`; empty for other controls
	pub selected: Vec<String>,
	pub checked: bool,
}

impl TagCall {
	fn new(control: &'static str, name: Option<&str>, id: Option<&str>) -> Self {
		Self {
			control,
			name: name.map(str::to_string),
			value: None,
			id: id.map(str::to_string),
			selected: Vec::new(),
			checked: false,
		}
	}

	fn value(mut self, value: Option<&str>) -> Self {
		self.value = value.map(str::to_string);
		self
	}
}

/// Tag renderer that records every control call and renders with [`HtmlTags`]
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uniform_forms::{FieldErrors, FormData, Renderer};
/// use uniform_html::{Attrs, SelectOption};
/// use uniform_test::RecordingTags;
///
/// let data = FormData::from([("colour".to_string(), json!("red"))]);
/// let errors = FieldErrors::new();
/// let renderer = Renderer::new(&data, &errors).with_tags(RecordingTags::new());
///
/// renderer.select("colour", None, &[SelectOption::from("red")], None, &Attrs::new());
///
/// let calls = renderer.tags().calls();
/// assert_eq!(calls[0].selected, vec!["red".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingTags {
	calls: RefCell<Vec<TagCall>>,
	inner: HtmlTags,
}

impl RecordingTags {
	pub fn new() -> Self {
		Self::default()
	}

	/// Calls recorded so far, oldest first
	pub fn calls(&self) -> Vec<TagCall> {
		self.calls.borrow().clone()
	}

	pub fn last_call(&self) -> Option<TagCall> {
		self.calls.borrow().last().cloned()
	}

	fn record(&self, call: TagCall) {
		self.calls.borrow_mut().push(call);
	}
}

impl TagRenderer for RecordingTags {
	fn text(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.record(TagCall::new("text", Some(name), id).value(value));
		self.inner.text(name, value, id, attrs)
	}

	fn file(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.record(TagCall::new("file", Some(name), id).value(value));
		self.inner.file(name, value, id, attrs)
	}

	fn hidden(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.record(TagCall::new("hidden", Some(name), id).value(value));
		self.inner.hidden(name, value, id, attrs)
	}

	fn password(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.record(TagCall::new("password", Some(name), id).value(value));
		self.inner.password(name, value, id, attrs)
	}

	fn submit(
		&self,
		name: Option<&str>,
		value: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		self.record(TagCall::new("submit", name, id).value(value));
		self.inner.submit(name, value, id, attrs)
	}

	fn radio(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let mut call = TagCall::new("radio", Some(name), id).value(Some(value));
		call.checked = checked;
		self.record(call);
		self.inner.radio(name, value, checked, label, id, attrs)
	}

	fn checkbox(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let mut call = TagCall::new("checkbox", Some(name), id).value(Some(value));
		call.checked = checked;
		self.record(call);
		self.inner.checkbox(name, value, checked, label, id, attrs)
	}

	fn textarea(&self, name: &str, content: &str, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.record(TagCall::new("textarea", Some(name), id).value(Some(content)));
		self.inner.textarea(name, content, id, attrs)
	}

	fn select(
		&self,
		name: &str,
		selected: &[String],
		options: &[SelectOption],
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let mut call = TagCall::new("select", Some(name), id);
		call.selected = selected.to_vec();
		self.record(call);
		self.inner.select(name, selected, options, id, attrs)
	}

	fn form(&self, action: &str, method: &str, multipart: bool, attrs: &Attrs) -> Markup {
		self.inner.form(action, method, multipart, attrs)
	}

	fn end_form(&self) -> Markup {
		self.inner.end_form()
	}

	fn element(&self, tag: &str, content: &Markup, attrs: &Attrs) -> Markup {
		self.inner.element(tag, content, attrs)
	}
}

/// Bind target storing every field it receives
///
/// Fields listed with [`DummyObject::rejecting`] are refused with a
/// [`BindError`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DummyObject {
	pub fields: BTreeMap<String, Value>,
	rejected: Vec<String>,
}

impl DummyObject {
	pub fn new() -> Self {
		Self::default()
	}

	/// Object already holding `name = value`
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.insert(name.into(), value.into());
		self
	}

	/// Refuse values for `name`
	pub fn rejecting(mut self, name: impl Into<String>) -> Self {
		self.rejected.push(name.into());
		self
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}
}

impl BindTarget for DummyObject {
	fn bind_field(&mut self, name: &str, value: &Value) -> Result<(), BindError> {
		if self.rejected.iter().any(|rejected| rejected == name) {
			return Err(BindError::new(format!("{name} is read-only")));
		}
		self.fields.insert(name.to_string(), value.clone());
		Ok(())
	}
}
