//! Escaping of untrusted text for HTML content and attribute values

/// Escape HTML special characters for use in element content
///
/// # Examples
///
/// ```
/// use uniform_html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<b>\"bold\"</b>"), "&lt;b&gt;&quot;bold&quot;&lt;/b&gt;");
/// assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
/// ```
pub fn escape(text: &str) -> String {
	escape_into(text, false)
}

/// Escape a value for use inside a double-quoted attribute
///
/// In addition to the characters handled by [`escape`], line breaks and tabs
/// are encoded so the attribute survives whitespace normalization.
///
/// # Examples
///
/// ```
/// use uniform_html::escape_attr;
///
/// assert_eq!(escape_attr("plain"), "plain");
/// assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	escape_into(text, true)
}

fn escape_into(text: &str, attribute: bool) -> String {
	let mut out = String::with_capacity(text.len() + 8);
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			'\n' if attribute => out.push_str("&#10;"),
			'\r' if attribute => out.push_str("&#13;"),
			'\t' if attribute => out.push_str("&#9;"),
			_ => out.push(ch),
		}
	}
	out
}
