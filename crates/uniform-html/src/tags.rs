//! Form-control tag builders
//!
//! [`TagRenderer`] is the capability the form renderers depend on. It has one
//! method per control type, plus form open/close and a generic element
//! builder. [`HtmlTags`] is the implementation used unless a renderer is
//! constructed with another one.
//!
//! Every builder escapes the values it receives; only [`Markup`] arguments are
//! embedded verbatim.

use crate::attrs::Attrs;
use crate::escape::{escape, escape_attr};
use crate::markup::Markup;

/// One `<option>` of a `<select>` control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
}

impl SelectOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

impl From<&str> for SelectOption {
	fn from(value: &str) -> Self {
		Self::new(value, value)
	}
}

impl From<(&str, &str)> for SelectOption {
	fn from((value, label): (&str, &str)) -> Self {
		Self::new(value, label)
	}
}

impl From<(String, String)> for SelectOption {
	fn from((value, label): (String, String)) -> Self {
		Self::new(value, label)
	}
}

/// Builds escaped markup for form controls
///
/// `id` arguments are final: implementations must not derive their own id
/// when one is given. `attrs` are passed through unmodified.
pub trait TagRenderer {
	fn text(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup;

	fn file(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup;

	fn hidden(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup;

	fn password(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs)
	-> Markup;

	fn submit(
		&self,
		name: Option<&str>,
		value: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup;

	fn radio(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup;

	fn checkbox(
		&self,
		name: &str,
		value: &str,
		checked: bool,
		label: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup;

	fn textarea(&self, name: &str, content: &str, id: Option<&str>, attrs: &Attrs) -> Markup;

	/// `selected` is always a sequence, even for single-valued selects
	fn select(
		&self,
		name: &str,
		selected: &[String],
		options: &[SelectOption],
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup;

	/// Opening `<form>` tag
	fn form(&self, action: &str, method: &str, multipart: bool, attrs: &Attrs) -> Markup;

	/// Closing `</form>` tag
	fn end_form(&self) -> Markup;

	/// Generic element wrapping already-safe content
	fn element(&self, tag: &str, content: &Markup, attrs: &Attrs) -> Markup;
}

/// Default XHTML-style tag builder
///
/// # Examples
///
/// ```
/// use uniform_html::{Attrs, HtmlTags, TagRenderer};
///
/// let tags = HtmlTags::new();
/// let html = tags.text("name", Some("Ann & Bo"), Some("name"), &Attrs::new());
/// assert_eq!(
///     html,
///     "<input type=\"text\" name=\"name\" id=\"name\" value=\"Ann &amp; Bo\" />"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTags;

impl HtmlTags {
	pub fn new() -> Self {
		Self
	}

	fn input(
		&self,
		kind: &str,
		name: Option<&str>,
		id: Option<&str>,
		value: Option<&str>,
		checked: bool,
		attrs: &Attrs,
	) -> Markup {
		let mut html = format!("<input type=\"{}\"", kind);
		push_attr(&mut html, "name", name);
		push_attr(&mut html, "id", id);
		push_attr(&mut html, "value", value);
		if checked {
			html.push_str(" checked=\"checked\"");
		}
		html.push_str(&attrs.render());
		html.push_str(" />");
		Markup::literal(html)
	}

	fn labelled(&self, input: Markup, label: Option<&str>) -> Markup {
		match label {
			Some(label) => Markup::literal(format!("<label>{} {}</label>", input, escape(label))),
			None => input,
		}
	}
}

fn push_attr(html: &mut String, name: &str, value: Option<&str>) {
	if let Some(value) = value {
		html.push(' ');
		html.push_str(name);
		html.push_str("=\"");
		html.push_str(&escape_attr(value));
		html.push('"');
	}
}

impl TagRenderer for HtmlTags {
	fn text(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.input("text", Some(name), id, value, false, attrs)
	}

	fn file(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.input("file", Some(name), id, value, false, attrs)
	}

	fn hidden(&self, name: &str, value: Option<&str>, id: Option<&str>, attrs: &Attrs) -> Markup {
		self.input("hidden", Some(name), id, value, false, attrs)
	}

	fn password(
		&self,
		name: &str,
		value: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		self.input("password", Some(name), id, value, false, attrs)
	}

	fn submit(
		&self,
		name: Option<&str>,
		value: Option<&str>,
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		self.input("submit", name, id, value, false, attrs)
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
		let input = self.input("radio", Some(name), id, Some(value), checked, attrs);
		self.labelled(input, label)
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
		let input = self.input("checkbox", Some(name), id, Some(value), checked, attrs);
		self.labelled(input, label)
	}

	fn textarea(&self, name: &str, content: &str, id: Option<&str>, attrs: &Attrs) -> Markup {
		let mut html = String::from("<textarea");
		push_attr(&mut html, "name", Some(name));
		push_attr(&mut html, "id", id);
		html.push_str(&attrs.render());
		html.push('>');
		html.push_str(&escape(content));
		html.push_str("</textarea>");
		Markup::literal(html)
	}

	fn select(
		&self,
		name: &str,
		selected: &[String],
		options: &[SelectOption],
		id: Option<&str>,
		attrs: &Attrs,
	) -> Markup {
		let mut html = String::from("<select");
		push_attr(&mut html, "name", Some(name));
		push_attr(&mut html, "id", id);
		if selected.len() > 1 && !attrs.contains("multiple") {
			html.push_str(" multiple=\"multiple\"");
		}
		html.push_str(&attrs.render());
		html.push('>');
		for option in options {
			html.push_str("<option");
			push_attr(&mut html, "value", Some(&option.value));
			if selected.contains(&option.value) {
				html.push_str(" selected=\"selected\"");
			}
			html.push('>');
			html.push_str(&escape(&option.label));
			html.push_str("</option>");
		}
		html.push_str("</select>");
		Markup::literal(html)
	}

	fn form(&self, action: &str, method: &str, multipart: bool, attrs: &Attrs) -> Markup {
		let mut html = String::from("<form");
		push_attr(&mut html, "action", Some(action));
		push_attr(&mut html, "method", Some(method));
		if multipart {
			html.push_str(" enctype=\"multipart/form-data\"");
		}
		html.push_str(&attrs.render());
		html.push('>');
		Markup::literal(html)
	}

	fn end_form(&self) -> Markup {
		Markup::literal("</form>")
	}

	fn element(&self, tag: &str, content: &Markup, attrs: &Attrs) -> Markup {
		Markup::literal(format!("<{tag}{}>{content}</{tag}>", attrs.render()))
	}
}
