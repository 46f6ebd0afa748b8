//! Form configuration
//!
//! [`FormConfig`] collects the per-form settings so a hosting framework can
//! load defaults from its own settings file with `serde`.

use http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter name carrying the CSRF token
pub const DEFAULT_CSRF_FIELD: &str = "_authentication_token";

/// Request method a form accepts submissions with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
	Post,
	Get,
}

impl FormMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Post => "POST",
			Self::Get => "GET",
		}
	}

	/// Value for the `method` attribute of a `<form>` tag
	pub fn html_method(&self) -> &'static str {
		match self {
			Self::Post => "post",
			Self::Get => "get",
		}
	}

	pub fn matches(&self, method: &Method) -> bool {
		match self {
			Self::Post => *method == Method::POST,
			Self::Get => *method == Method::GET,
		}
	}
}

impl fmt::Display for FormMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Settings of a [`Form`](crate::Form)
///
/// Omitted keys take their default when deserializing; `method: null` means
/// any request method is accepted.
///
/// # Examples
///
/// ```
/// use uniform_forms::{FormConfig, FormMethod};
///
/// let config: FormConfig = serde_json::from_str(r#"{"method": "GET", "multipart": false}"#).unwrap();
/// assert_eq!(config.method, Some(FormMethod::Get));
/// assert!(!config.multipart);
/// assert_eq!(config.dict_char, '.');
/// assert_eq!(config.csrf_field, "_authentication_token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	/// Required request method, `None` accepts any
	pub method: Option<FormMethod>,
	/// Separator between nested field names in error keys
	pub dict_char: char,
	/// Separator before list positions in error keys
	pub list_char: char,
	/// Whether `<form>` tags default to `multipart/form-data`
	pub multipart: bool,
	pub csrf_field: String,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			method: Some(FormMethod::Post),
			dict_char: '.',
			list_char: '-',
			multipart: true,
			csrf_field: DEFAULT_CSRF_FIELD.to_string(),
		}
	}
}
