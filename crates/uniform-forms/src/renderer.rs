//! Form-control rendering over a snapshot of form data and errors

use crate::schema::{FieldErrors, FormData};
use serde_json::Value;
use uniform_html::{Attrs, HtmlTags, Markup, SelectOption, TagRenderer};

/// Renders form controls pre-populated from submitted data
///
/// A renderer borrows a `(data, errors)` snapshot and never changes it. Every
/// control builder resolves the element id and the value to show, then hands
/// off to the [`TagRenderer`] `T`.
///
/// Ids default to the field name, prefixed with the renderer's id prefix when
/// one is set. An explicit id is always used as given.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uniform_forms::{FieldErrors, FormData, Renderer};
/// use uniform_html::Attrs;
///
/// let data = FormData::from([("email".to_string(), json!("ann@example.com"))]);
/// let errors = FieldErrors::new();
/// let renderer = Renderer::new(&data, &errors).with_id_prefix("signup-");
///
/// assert_eq!(
///     renderer.text("email", None, None, &Attrs::new()),
///     "<input type=\"text\" name=\"email\" id=\"signup-email\" value=\"ann@example.com\" />"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<'a, T: TagRenderer = HtmlTags> {
	data: &'a FormData,
	errors: &'a FieldErrors,
	id_prefix: Option<String>,
	tags: T,
}

impl<'a> Renderer<'a, HtmlTags> {
	pub fn new(data: &'a FormData, errors: &'a FieldErrors) -> Self {
		Self {
			data,
			errors,
			id_prefix: None,
			tags: HtmlTags,
		}
	}
}

impl<'a, T: TagRenderer> Renderer<'a, T> {
	/// Render through another tag builder
	pub fn with_tags<U: TagRenderer>(self, tags: U) -> Renderer<'a, U> {
		Renderer {
			data: self.data,
			errors: self.errors,
			id_prefix: self.id_prefix,
			tags,
		}
	}

	/// Prefix prepended to auto-generated ids
	pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.id_prefix = Some(prefix.into());
		self
	}

	pub fn data(&self) -> &'a FormData {
		self.data
	}

	pub fn errors(&self) -> &'a FieldErrors {
		self.errors
	}

	pub fn id_prefix(&self) -> Option<&str> {
		self.id_prefix.as_deref()
	}

	pub fn tags(&self) -> &T {
		&self.tags
	}

	/// Value stored for `name`, else `default`
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::{json, Value};
	/// use uniform_forms::{FieldErrors, FormData, Renderer};
	///
	/// let data = FormData::from([("x".to_string(), json!("stored"))]);
	/// let errors = FieldErrors::new();
	/// let renderer = Renderer::new(&data, &errors);
	/// let fallback = json!("d");
	///
	/// assert_eq!(renderer.value("x", Some(&fallback)), Some(&json!("stored")));
	/// assert_eq!(renderer.value("y", Some(&fallback)), Some(&fallback));
	/// assert_eq!(renderer.value("y", None), None);
	/// ```
	pub fn value<'v>(&self, name: &str, default: Option<&'v Value>) -> Option<&'v Value>
	where
		'a: 'v,
	{
		self.data.get(name).or(default)
	}

	pub fn is_error(&self, name: &str) -> bool {
		!self.errors_for(name).is_empty()
	}

	/// Error messages for `name`, empty when it has none
	pub fn errors_for(&self, name: &str) -> &'a [String] {
		self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
	}

	/// `<ul class="error">` listing the messages for `name`
	///
	/// Empty markup when the field has no errors.
	pub fn errorlist(&self, name: &str) -> Markup {
		let errors = self.errors_for(name);
		if errors.is_empty() {
			return Markup::default();
		}

		let items = errors
			.iter()
			.map(|message| {
				self.tags
					.element("li", &Markup::escape(message), &Attrs::new())
					.into_string()
			})
			.collect::<Vec<_>>()
			.join("\n");

		self.tags.element(
			"ul",
			&Markup::literal(items),
			&Attrs::new().with("class", "error"),
		)
	}

	pub fn text(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		let value = self.submitted_or(name, value);
		let id = self.resolve_id(id, Some(name));
		self.tags.text(name, value.as_deref(), id.as_deref(), attrs)
	}

	pub fn file(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		let value = self.submitted_or(name, value);
		let id = self.resolve_id(id, Some(name));
		self.tags.file(name, value.as_deref(), id.as_deref(), attrs)
	}

	/// Hidden input; an explicit `value` takes precedence over submitted data
	pub fn hidden(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		let value = match value {
			Some(value) => Some(value.to_string()),
			None => self.submitted(name),
		};
		let id = self.resolve_id(id, Some(name));
		self.tags.hidden(name, value.as_deref(), id.as_deref(), attrs)
	}

	pub fn password(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		let value = self.submitted_or(name, value);
		let id = self.resolve_id(id, Some(name));
		self.tags.password(name, value.as_deref(), id.as_deref(), attrs)
	}

	/// Submit button; without a name only the explicit value is used
	pub fn submit(
		&self,
		name: Option<&str>,
		value: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let value = match name {
			Some(name) => self.submitted_or(name, value),
			None => value.map(str::to_string),
		};
		let id = self.resolve_id(id, name);
		self.tags.submit(name, value.as_deref(), id.as_deref(), attrs)
	}

	/// Radio button, checked when the submitted value equals `value`
	///
	/// The default id is `{name}_{value}` with characters outside
	/// `[A-Za-z0-9_-]` replaced by `_`.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use uniform_forms::{FieldErrors, FormData, Renderer};
	/// use uniform_html::Attrs;
	///
	/// let data = FormData::from([("size".to_string(), json!("L"))]);
	/// let errors = FieldErrors::new();
	/// let renderer = Renderer::new(&data, &errors);
	///
	/// let large = renderer.radio("size", "L", false, None, None, &Attrs::new());
	/// assert_eq!(large, "<input type=\"radio\" name=\"size\" id=\"size_L\" value=\"L\" checked=\"checked\" />");
	/// assert!(!renderer.radio("size", "M", false, None, None, &Attrs::new()).contains("checked"));
	/// ```
	pub fn radio(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let checked = self.submitted(name).as_deref() == Some(value) || checked;
		let default_id = format!("{}_{}", name, safe_id_component(value));
		let id = self.resolve_id(id, Some(&default_id));
		self.tags.radio(name, value, checked, label, id.as_deref(), attrs)
	}

	/// Checkbox, checked from submitted data when present, else from `checked`
	///
	/// A submitted boolean is used as-is, a submitted list is checked when it
	/// contains `value`, anything else is compared with `value`.
	pub fn checkbox(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let checked = match self.data.get(name) {
			None | Some(Value::Null) => checked,
			Some(Value::Bool(submitted)) => *submitted,
			Some(Value::Array(items)) => items
				.iter()
				.any(|item| display_value(item).as_deref() == Some(value)),
			Some(other) => display_value(other).as_deref() == Some(value),
		};
		let id = self.resolve_id(id, Some(name));
		self.tags.checkbox(name, value, checked, label, id.as_deref(), attrs)
	}

	/// Textarea holding the submitted text, else `content`
	pub fn textarea(&self, name: &str, content: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		let content = self.submitted_or(name, content).unwrap_or_default();
		let id = self.resolve_id(id, Some(name));
		self.tags.textarea(name, &content, id.as_deref(), attrs)
	}

	/// Select box; `selected` applies when nothing was submitted
	///
	/// The selection handed to the tag builder is always a sequence: a single
	/// value becomes a one-element list.
	pub fn select(
		&self,
		name: &str,
		selected: Option<&Value>,
		options: &[SelectOption],
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let selected = match self.value(name, selected) {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::Array(items)) => items.iter().filter_map(display_value).collect(),
			Some(value) => display_value(value).into_iter().collect(),
		};
		let id = self.resolve_id(id, Some(name));
		self.tags.select(name, &selected, options, id.as_deref(), attrs)
	}

	fn submitted(&self, name: &str) -> Option<String> {
		self.data.get(name).and_then(display_value)
	}

	fn submitted_or(&self, name: &str, fallback: Option<&str>) -> Option<String> {
		self.submitted(name).or_else(|| fallback.map(str::to_string))
	}

	fn resolve_id(&self, id: Option<&str>, name: Option<&str>) -> Option<String> {
		if let Some(id) = id {
			return Some(id.to_string());
		}
		let name = name?;
		Some(match &self.id_prefix {
			Some(prefix) => format!("{prefix}{name}"),
			None => name.to_string(),
		})
	}
}

/// Text shown for a submitted value; `None` for null
fn display_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		other => Some(other.to_string()),
	}
}

fn safe_id_component(value: &str) -> String {
	value
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
		.collect()
}
