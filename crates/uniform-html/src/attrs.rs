//! Extra HTML attributes passed through to a control

use crate::escape::escape_attr;

/// Ordered list of HTML attributes
///
/// Insertion order is preserved when rendering. Setting a key that already
/// exists replaces its value in place.
///
/// # Examples
///
/// ```
/// use uniform_html::Attrs;
///
/// let attrs = Attrs::new()
///     .with("class", "wide")
///     .with("placeholder", "Your name")
///     .with("class", "narrow");
///
/// assert_eq!(attrs.get("class"), Some("narrow"));
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.render(), " class=\"narrow\" placeholder=\"Your name\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: Vec<(String, String)>,
}

impl Attrs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`Attrs::set`]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn remove(&mut self, name: &str) -> Option<String> {
		let pos = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(pos).1)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Render as ` name="value"` pairs, each value attribute-escaped
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (name, value) in &self.entries {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape_attr(value));
			out.push('"');
		}
		out
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attrs::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}
