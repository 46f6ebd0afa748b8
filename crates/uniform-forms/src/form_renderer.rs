//! Rendering a validated form

use crate::config::FormMethod;
use crate::error::FormResult;
use crate::form::Form;
use crate::renderer::Renderer;
use std::ops::Deref;
use uniform_html::{Attrs, HtmlTags, Markup, TagRenderer};

/// [`Renderer`] bound to a [`Form`], adding the `<form>` tags and CSRF field
///
/// Dereferences to its [`Renderer`], so every control builder is available
/// directly.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use serde_json::json;
/// use uniform_forms::{Form, FormRenderer};
/// use uniform_html::Attrs;
/// use uniform_test::{DummyRequest, DummySchema, DUMMY_CSRF_TOKEN};
///
/// let request = DummyRequest::builder()
///     .method(Method::POST)
///     .path("/signup")
///     .post(json!({ "foo": "", "_authentication_token": DUMMY_CSRF_TOKEN }))
///     .build();
/// let schema = DummySchema::new();
/// let mut form = Form::new(&request, &schema).with_multipart(false);
/// assert!(!form.validate().unwrap());
///
/// let renderer = FormRenderer::new(&form).unwrap();
/// assert_eq!(renderer.begin(None, None, &Attrs::new()), "<form action=\"/signup\" method=\"post\">");
/// assert!(renderer.errorlist("foo").contains("Please enter a value"));
/// assert_eq!(renderer.end(), "</form>");
/// ```
pub struct FormRenderer<'f, 'r, T: TagRenderer = HtmlTags> {
	form: &'f Form<'r>,
	csrf_field: String,
	renderer: Renderer<'f, T>,
}

impl<'f, 'r> FormRenderer<'f, 'r, HtmlTags> {
	/// Wrap a validated form
	///
	/// # Errors
	///
	/// [`FormError::NotValidated`](crate::FormError::NotValidated) when `form` has not been validated.
	pub fn new(form: &'f Form<'r>) -> FormResult<Self> {
		let data = form.data()?;
		Ok(Self {
			form,
			csrf_field: form.csrf_field().to_string(),
			renderer: Renderer::new(data, form.errors()),
		})
	}
}

impl<'f, 'r, T: TagRenderer> FormRenderer<'f, 'r, T> {
	pub fn with_tags<U: TagRenderer>(self, tags: U) -> FormRenderer<'f, 'r, U> {
		FormRenderer {
			form: self.form,
			csrf_field: self.csrf_field,
			renderer: self.renderer.with_tags(tags),
		}
	}

	/// Field name used by [`csrf`](Self::csrf) when none is given
	pub fn with_csrf_field(mut self, field: impl Into<String>) -> Self {
		self.csrf_field = field.into();
		self
	}

	pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.renderer = self.renderer.with_id_prefix(prefix);
		self
	}

	pub fn form(&self) -> &'f Form<'r> {
		self.form
	}

	pub fn csrf_field(&self) -> &str {
		&self.csrf_field
	}

	pub fn renderer(&self) -> &Renderer<'f, T> {
		&self.renderer
	}

	/// Opening `<form>` tag
	///
	/// `url` defaults to the request path and `multipart` to the form's
	/// setting. The method comes from the form unless `attrs` carry one.
	pub fn begin(&self, url: Option<&str>, multipart: Option<bool>, attrs: &Attrs) -> Markup {
		let url = url.unwrap_or_else(|| self.form.request().path());
		let multipart = multipart.unwrap_or_else(|| self.form.multipart());

		let mut attrs = attrs.clone();
		let method = attrs.remove("method").unwrap_or_else(|| {
			match self.form.method() {
				Some(FormMethod::Get) => FormMethod::Get.html_method(),
				_ => FormMethod::Post.html_method(),
			}
			.to_string()
		});

		self.renderer.tags().form(url, &method, multipart, &attrs)
	}

	/// Closing `</form>` tag
	pub fn end(&self) -> Markup {
		self.renderer.tags().end_form()
	}

	/// Hidden input carrying the session's CSRF token
	pub fn csrf(&self, name: Option<&str>) -> Markup {
		let name = name.unwrap_or(self.csrf_field.as_str());
		let token = self.form.request().session().csrf_token();
		self.renderer.hidden(name, Some(&token), None, &Attrs::new())
	}

	/// [`csrf`](Self::csrf) wrapped in an invisible `<div>`
	pub fn csrf_token(&self, name: Option<&str>) -> Markup {
		self.renderer.tags().element(
			"div",
			&self.csrf(name),
			&Attrs::new().with("style", "display:none;"),
		)
	}
}

impl<'f, T: TagRenderer> Deref for FormRenderer<'f, '_, T> {
	type Target = Renderer<'f, T>;

	fn deref(&self) -> &Self::Target {
		&self.renderer
	}
}

impl<T: TagRenderer> std::fmt::Debug for FormRenderer<'_, '_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormRenderer")
			.field("form", self.form)
			.field("csrf_field", &self.csrf_field)
			.field("id_prefix", &self.renderer.id_prefix())
			.finish_non_exhaustive()
	}
}
