//! Errors propagated to the caller
//!
//! Field-level validation messages are never raised: they are collected into
//! [`FieldErrors`](crate::FieldErrors) and queried through
//! [`Form::errors_for`](crate::Form::errors_for). Everything in this module is
//! a failure the hosting framework has to turn into a response.

use crate::bind::BindError;
use crate::schema::Invalid;
use http::StatusCode;

/// CSRF token check failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsrfError {
	#[error("Missing CSRF token in field '{field}'")]
	Missing { field: String },
	#[error("Bad CSRF token in field '{field}'")]
	Mismatch { field: String },
}

impl CsrfError {
	/// Name of the parameter that carried (or should have carried) the token
	pub fn field(&self) -> &str {
		match self {
			Self::Missing { field } | Self::Mismatch { field } => field,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// Data or binding used before [`Form::validate`](crate::Form::validate) ran
	#[error("Form has not been validated; call validate() first")]
	NotValidated,
	/// Binding attempted while the form carries field errors
	#[error("Form is invalid")]
	Invalid,
	#[error("CSRF validation failed: {0}")]
	Csrf(#[from] CsrfError),
	/// The schema failed without a per-field error mapping
	#[error(transparent)]
	Schema(#[from] Invalid),
	/// `assert_valid` contract violation: a programming error, not bad input
	#[error("Assertion failed: {0}")]
	Assertion(String),
	#[error("Cannot bind field '{field}': {source}")]
	Bind {
		field: String,
		#[source]
		source: BindError,
	},
	#[error("Cannot deserialize form data: {0}")]
	Deserialize(#[from] serde_json::Error),
}

impl FormError {
	/// HTTP status a hosting framework should answer with
	///
	/// # Examples
	///
	/// ```
	/// use http::StatusCode;
	/// use uniform_forms::{CsrfError, FormError};
	///
	/// let err = FormError::from(CsrfError::Missing { field: "_authentication_token".into() });
	/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
	/// assert_eq!(FormError::NotValidated.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::Csrf(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn is_client_error(&self) -> bool {
		self.status_code().is_client_error()
	}
}

pub type FormResult<T> = Result<T, FormError>;
