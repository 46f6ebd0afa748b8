//! Schema engine contract
//!
//! The form delegates all structural and type validation to a [`Schema`].
//! A schema either returns normalized data or fails with [`Invalid`].
//!
//! # Contract
//!
//! Invalid *user input* must be reported with a per-field error mapping
//! ([`Invalid::error_dict`]). A failure without one is treated as a defect in
//! the schema itself: the form does not record it as field errors but hands
//! it back to the caller unchanged as [`FormError::Schema`](crate::FormError::Schema).

use crate::request::{Params, State};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Validated (or, after a failure, submitted) values by field name
pub type FormData = HashMap<String, Value>;

/// Error messages by field path, in the order the schema reported them
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Nested error structure reported by a schema for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTree {
	Message(String),
	/// Errors of a nested group of fields
	Dict(BTreeMap<String, ErrorTree>),
	/// Errors by position of a repeated field; `None` marks a valid entry
	List(Vec<Option<ErrorTree>>),
}

impl From<&str> for ErrorTree {
	fn from(message: &str) -> Self {
		Self::Message(message.to_string())
	}
}

impl From<String> for ErrorTree {
	fn from(message: String) -> Self {
		Self::Message(message)
	}
}

/// Validation failure raised by a schema
///
/// # Examples
///
/// ```
/// use uniform_forms::Invalid;
///
/// let err = Invalid::new("There was a problem with your submission")
///     .with_field("email", "An email address must contain a single @");
/// assert!(err.has_field_errors());
///
/// let errors = err.unpack_errors('.', '-').unwrap();
/// assert_eq!(errors["email"], vec!["An email address must contain a single @"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Invalid {
	pub message: String,
	pub error_dict: Option<BTreeMap<String, ErrorTree>>,
}

impl Invalid {
	/// Failure without per-field errors
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			error_dict: None,
		}
	}

	/// Add an error for one field
	pub fn with_field(mut self, name: impl Into<String>, error: impl Into<ErrorTree>) -> Self {
		self.error_dict
			.get_or_insert_with(BTreeMap::new)
			.insert(name.into(), error.into());
		self
	}

	pub fn has_field_errors(&self) -> bool {
		self.error_dict.as_ref().is_some_and(|dict| !dict.is_empty())
	}

	/// Flatten the error mapping into field-path keys
	///
	/// Nested names are joined with `dict_char`, list positions with
	/// `list_char`. A field reported with an empty message gets the overall
	/// failure message; `None` list positions are valid and produce no key.
	/// Returns `None` when no field path ends up with a message, so a failure
	/// never unpacks to an empty error map.
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::BTreeMap;
	/// use uniform_forms::{ErrorTree, Invalid};
	///
	/// let address = ErrorTree::Dict(BTreeMap::from([
	///     ("zip".to_string(), ErrorTree::from("Please enter a value")),
	/// ]));
	/// let phones = ErrorTree::List(vec![None, Some(ErrorTree::from("Invalid number"))]);
	///
	/// let err = Invalid::new("invalid")
	///     .with_field("address", address)
	///     .with_field("phone", phones);
	/// let errors = err.unpack_errors('.', '-').unwrap();
	///
	/// assert_eq!(errors["address.zip"], vec!["Please enter a value"]);
	/// assert_eq!(errors["phone-1"], vec!["Invalid number"]);
	/// assert!(!errors.contains_key("phone-0"));
	/// ```
	pub fn unpack_errors(&self, dict_char: char, list_char: char) -> Option<FieldErrors> {
		if !self.has_field_errors() {
			return None;
		}
		let mut unpacker = Unpacker {
			dict_char,
			list_char,
			fallback: &self.message,
			errors: FieldErrors::new(),
		};
		for (name, tree) in self.error_dict.iter().flatten() {
			unpacker.flatten(name.clone(), tree);
		}
		(!unpacker.errors.is_empty()).then_some(unpacker.errors)
	}
}

struct Unpacker<'a> {
	dict_char: char,
	list_char: char,
	fallback: &'a str,
	errors: FieldErrors,
}

impl Unpacker<'_> {
	fn flatten(&mut self, path: String, tree: &ErrorTree) {
		match tree {
			ErrorTree::Message(message) => {
				let message = if message.is_empty() { self.fallback } else { message.as_str() };
				if !message.is_empty() {
					self.errors.entry(path).or_default().push(message.to_string());
				}
			}
			ErrorTree::Dict(children) => {
				for (name, child) in children {
					self.flatten(format!("{path}{}{name}", self.dict_char), child);
				}
			}
			ErrorTree::List(items) => {
				for (index, item) in items.iter().enumerate() {
					if let Some(child) = item {
						self.flatten(format!("{path}{}{index}", self.list_char), child);
					}
				}
			}
		}
	}
}

/// Schema engine normalizing submitted parameters
///
/// Any closure `Fn(&Params, &State) -> Result<FormData, Invalid>` is a schema.
pub trait Schema {
	fn normalize(&self, params: &Params, state: &State<'_>) -> Result<FormData, Invalid>;
}

impl<F> Schema for F
where
	F: Fn(&Params, &State<'_>) -> Result<FormData, Invalid>,
{
	fn normalize(&self, params: &Params, state: &State<'_>) -> Result<FormData, Invalid> {
		self(params, state)
	}
}
