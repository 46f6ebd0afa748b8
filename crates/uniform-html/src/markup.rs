//! Pre-escaped HTML strings

use crate::escape::escape;
use std::fmt;

/// A string of HTML that is safe to embed verbatim
///
/// Every builder in this crate returns `Markup`. Untrusted text enters through
/// [`Markup::escape`]; [`Markup::literal`] marks a string the caller already
/// knows to be safe.
///
/// # Examples
///
/// ```
/// use uniform_html::Markup;
///
/// let safe = Markup::literal("<br />");
/// assert_eq!(safe, "<br />");
///
/// let text = Markup::escape("<br />");
/// assert_eq!(text, "&lt;br /&gt;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
	/// Mark a string as already-escaped HTML
	pub fn literal(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Escape untrusted text into markup
	pub fn escape(text: &str) -> Self {
		Self(escape(text))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, needle: &str) -> bool {
		self.0.contains(needle)
	}

	/// Append another fragment
	pub fn push(&mut self, other: &Markup) {
		self.0.push_str(&other.0);
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl PartialEq<str> for Markup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Markup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for Markup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}
