//! Binding validated data onto application objects

use serde_json::{Map, Value};
use std::collections::HashMap;

/// A bind target refused a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct BindError(pub String);

impl BindError {
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

impl From<serde_json::Error> for BindError {
	fn from(err: serde_json::Error) -> Self {
		Self(err.to_string())
	}
}

/// Object that validated form fields can be copied onto
///
/// [`Form::bind`](crate::Form::bind) calls [`BindTarget::bind_field`] once per
/// validated field whose name does not start with an underscore.
///
/// # Examples
///
/// ```
/// use serde_json::Value;
/// use uniform_forms::{BindError, BindTarget};
///
/// #[derive(Default)]
/// struct Profile {
///     name: String,
///     age: u32,
/// }
///
/// impl BindTarget for Profile {
///     fn bind_field(&mut self, name: &str, value: &Value) -> Result<(), BindError> {
///         match name {
///             "name" => self.name = serde_json::from_value(value.clone())?,
///             "age" => self.age = serde_json::from_value(value.clone())?,
///             _ => {}
///         }
///         Ok(())
///     }
/// }
///
/// let mut profile = Profile::default();
/// profile.bind_field("age", &Value::from(42)).unwrap();
/// assert_eq!(profile.age, 42);
/// assert!(profile.bind_field("age", &Value::from("old")).is_err());
/// ```
pub trait BindTarget {
	fn bind_field(&mut self, name: &str, value: &Value) -> Result<(), BindError>;
}

impl BindTarget for HashMap<String, Value> {
	fn bind_field(&mut self, name: &str, value: &Value) -> Result<(), BindError> {
		self.insert(name.to_string(), value.clone());
		Ok(())
	}
}

impl BindTarget for Map<String, Value> {
	fn bind_field(&mut self, name: &str, value: &Value) -> Result<(), BindError> {
		self.insert(name.to_string(), value.clone());
		Ok(())
	}
}
