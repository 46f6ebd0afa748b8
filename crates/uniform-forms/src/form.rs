use crate::bind::BindTarget;
use crate::config::{FormConfig, FormMethod};
use crate::error::{CsrfError, FormError, FormResult};
use crate::request::{Params, Request, State};
use crate::schema::{FieldErrors, FormData, Schema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use subtle::ConstantTimeEq;

/// Flags for [`Form::validate_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
	/// Do not check (or strip) the CSRF token
	pub skip_csrf: bool,
	/// Treat a wrong request method or invalid data as a programming error
	pub assert_valid: bool,
}

impl ValidateOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn skip_csrf(mut self) -> Self {
		self.skip_csrf = true;
		self
	}

	pub fn assert_valid(mut self) -> Self {
		self.assert_valid = true;
		self
	}
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A submission of GET or POST parameters validated against a [`Schema`]
///
/// One form serves one request. It reads the parameters through the
/// [`Request`] capability, checks the CSRF token, hands the rest to the schema
/// and keeps the outcome: normalized [`data`](Form::data) and per-field
/// [`errors`](Form::errors).
///
/// # Lifecycle
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Unvalidated
///     Unvalidated --> Unvalidated: method not allowed (returns false)
///     Unvalidated --> [*]: CSRF failure / unstructured schema failure (Err)
///     Unvalidated --> Valid: schema accepted params
///     Unvalidated --> Invalid: schema reported field errors
///     Valid --> Bound: bind()
///     Valid --> Valid: validate() (cached)
///     Invalid --> Invalid: validate() (cached)
/// ```
///
/// # Examples
///
/// ```
/// use http::Method;
/// use serde_json::json;
/// use uniform_forms::Form;
/// use uniform_test::{DummyRequest, DummySchema, DUMMY_CSRF_TOKEN};
///
/// let request = DummyRequest::builder()
///     .method(Method::POST)
///     .post(json!({ "foo": "hello", "_authentication_token": DUMMY_CSRF_TOKEN }))
///     .build();
/// let schema = DummySchema::new();
///
/// let mut form = Form::new(&request, &schema);
/// assert!(form.validate().unwrap());
/// assert_eq!(form.data().unwrap()["foo"], "hello");
/// assert!(form.errors().is_empty());
/// ```
pub struct Form<'r> {
	request: &'r dyn Request,
	schema: &'r dyn Schema,
	config: FormConfig,
	state: State<'r>,
	is_validated: bool,
	data: FormData,
	errors: FieldErrors,
}

impl<'r> Form<'r> {
	/// Create a form accepting POST submissions with default settings
	pub fn new(request: &'r dyn Request, schema: &'r dyn Schema) -> Self {
		Self::with_config(request, schema, FormConfig::default())
	}

	pub fn with_config(request: &'r dyn Request, schema: &'r dyn Schema, config: FormConfig) -> Self {
		Self {
			request,
			schema,
			config,
			state: State::new(request),
			is_validated: false,
			data: FormData::new(),
			errors: FieldErrors::new(),
		}
	}

	/// Require a request method, or accept any with `None`
	pub fn with_method(mut self, method: Option<FormMethod>) -> Self {
		self.config.method = method;
		self
	}

	/// Separators used when flattening nested error keys
	pub fn with_separators(mut self, dict_char: char, list_char: char) -> Self {
		self.config.dict_char = dict_char;
		self.config.list_char = list_char;
		self
	}

	pub fn with_multipart(mut self, multipart: bool) -> Self {
		self.config.multipart = multipart;
		self
	}

	pub fn with_csrf_field(mut self, field: impl Into<String>) -> Self {
		self.config.csrf_field = field.into();
		self
	}

	pub fn request(&self) -> &'r dyn Request {
		self.request
	}

	pub fn state(&self) -> &State<'r> {
		&self.state
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	pub fn method(&self) -> Option<FormMethod> {
		self.config.method
	}

	pub fn multipart(&self) -> bool {
		self.config.multipart
	}

	pub fn csrf_field(&self) -> &str {
		&self.config.csrf_field
	}

	pub fn is_validated(&self) -> bool {
		self.is_validated
	}

	/// Result of validation
	///
	/// Holds the schema's output when the form is valid, and the submitted
	/// parameters (without the CSRF token) when it is not, so controls can be
	/// re-rendered with what the user typed.
	pub fn data(&self) -> FormResult<&FormData> {
		if self.is_validated {
			Ok(&self.data)
		} else {
			Err(FormError::NotValidated)
		}
	}

	/// Field errors; empty until validation has run
	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	/// Whether the request was made with the method this form requires
	pub fn method_allowed(&self) -> bool {
		self.config
			.method
			.is_none_or(|method| method.matches(self.request.method()))
	}

	/// Validate with default options: check CSRF, return validity
	pub fn validate(&mut self) -> FormResult<bool> {
		self.validate_with(ValidateOptions::default())
	}

	/// Validate the submission
	///
	/// Returns whether the form is valid. Once the form has been validated the
	/// cached result is returned without running any check again.
	///
	/// # Errors
	///
	/// - [`FormError::Csrf`] when the token is missing or wrong; validation
	///   stops before the schema runs
	/// - [`FormError::Schema`] when the schema fails without field errors
	/// - [`FormError::Assertion`] under `assert_valid` when the request method
	///   is not allowed or the data is invalid
	pub fn validate_with(&mut self, options: ValidateOptions) -> FormResult<bool> {
		if self.is_validated {
			return Ok(self.errors.is_empty());
		}

		if !self.method_allowed() {
			let expected = self.config.method.map(|m| m.as_str()).unwrap_or("any");
			if options.assert_valid {
				return Err(FormError::Assertion(format!(
					"Expected request method {}; got {} instead",
					expected,
					self.request.method()
				)));
			}
			tracing::debug!(
				target: "uniform::validate",
				expected,
				got = %self.request.method(),
				"Request method not allowed, skipping validation"
			);
			return Ok(false);
		}

		let mut params = self.raw_params().clone();

		if !options.skip_csrf {
			self.validate_csrf(Some(&params))?;
			params.remove(&self.config.csrf_field);
		}

		tracing::debug!(target: "uniform::validate", path = self.request.path(), "Running schema");

		match self.schema.normalize(&params, &self.state) {
			Ok(data) => self.data = data,
			Err(invalid) => {
				let Some(errors) = invalid.unpack_errors(self.config.dict_char, self.config.list_char)
				else {
					return Err(FormError::Schema(invalid));
				};
				self.errors = errors;
				tracing::error!(
					target: "uniform::validate",
					url = %self.request.url(),
					remote_addr = ?self.request.remote_addr(),
					user_agent = ?self.request.user_agent(),
					params = ?params,
					errors = ?self.errors,
					"Validation failure"
				);
				self.data = params;
			}
		}

		self.is_validated = true;
		let valid = self.errors.is_empty();

		if options.assert_valid && !valid {
			return Err(FormError::Assertion(format!(
				"form invalid with errors: {:?}",
				self.errors
			)));
		}

		Ok(valid)
	}

	/// Validate, treating a wrong method or invalid data as an error
	pub fn assert_valid(&mut self, skip_csrf: bool) -> FormResult<()> {
		self.validate_with(ValidateOptions {
			skip_csrf,
			assert_valid: true,
		})
		.map(|_| ())
	}

	/// Check the submitted CSRF token against the session's token
	///
	/// Reads the request's parameters when `params` is `None`.
	pub fn validate_csrf(&self, params: Option<&Params>) -> FormResult<()> {
		let params = params.unwrap_or_else(|| self.raw_params());
		let field = &self.config.csrf_field;

		let Some(submitted) = params.get(field) else {
			tracing::warn!(target: "uniform::csrf", url = %self.request.url(), field = field.as_str(), "Missing CSRF token");
			return Err(CsrfError::Missing {
				field: field.clone(),
			}
			.into());
		};

		let expected = self.request.session().csrf_token();
		let matches = submitted
			.as_str()
			.is_some_and(|token| bool::from(token.as_bytes().ct_eq(expected.as_bytes())));
		if !matches {
			tracing::warn!(target: "uniform::csrf", url = %self.request.url(), field = field.as_str(), "Bad CSRF token");
			return Err(CsrfError::Mismatch {
				field: field.clone(),
			}
			.into());
		}

		Ok(())
	}

	/// Copy validated fields onto `obj`
	///
	/// Fields whose name starts with an underscore are skipped.
	///
	/// # Errors
	///
	/// [`FormError::NotValidated`] before validation, [`FormError::Invalid`]
	/// when the form has errors, [`FormError::Bind`] when `obj` refuses a value.
	pub fn bind<'o, T>(&self, obj: &'o mut T) -> FormResult<&'o mut T>
	where
		T: BindTarget + ?Sized,
	{
		for (name, value) in self.bindable()? {
			obj.bind_field(name, value).map_err(|source| FormError::Bind {
				field: name.clone(),
				source,
			})?;
		}
		Ok(obj)
	}

	/// Deserialize the validated fields into a new `T`
	///
	/// Same preconditions as [`Form::bind`]; underscore-prefixed fields are
	/// left out.
	pub fn bind_as<T: DeserializeOwned>(&self) -> FormResult<T> {
		let fields: Map<String, Value> = self
			.bindable()?
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect();
		Ok(serde_json::from_value(Value::Object(fields))?)
	}

	/// Error messages for `field`, empty when it has none
	pub fn errors_for(&self, field: &str) -> &[String] {
		self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn is_error(&self, field: &str) -> bool {
		!self.errors_for(field).is_empty()
	}

	fn bindable(&self) -> FormResult<impl Iterator<Item = (&String, &Value)>> {
		if !self.is_validated {
			return Err(FormError::NotValidated);
		}
		if !self.errors.is_empty() {
			return Err(FormError::Invalid);
		}
		Ok(self.data.iter().filter(|(name, _)| !name.starts_with('_')))
	}

	fn raw_params(&self) -> &'r Params {
		match self.config.method {
			Some(FormMethod::Post) => self.request.post(),
			_ => self.request.params(),
		}
	}
}

impl fmt::Debug for Form<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("state", &self.state)
			.field("config", &self.config)
			.field("is_validated", &self.is_validated)
			.field("data", &self.data)
			.field("errors", &self.errors)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::Session;
	use crate::schema::Invalid;
	use http::Method;
	use serde_json::json;

	struct FixedSession;

	impl Session for FixedSession {
		fn csrf_token(&self) -> String {
			"secret".to_string()
		}
	}

	struct Submission {
		method: Method,
		params: Params,
	}

	impl Request for Submission {
		fn method(&self) -> &Method {
			&self.method
		}
		fn post(&self) -> &Params {
			&self.params
		}
		fn params(&self) -> &Params {
			&self.params
		}
		fn path(&self) -> &str {
			"/submit"
		}
		fn session(&self) -> &dyn Session {
			&FixedSession
		}
	}

	fn echo(params: &Params, _state: &State<'_>) -> Result<FormData, Invalid> {
		Ok(params.clone())
	}

	fn submission(params: serde_json::Value) -> Submission {
		let params = match params {
			Value::Object(map) => map.into_iter().collect(),
			_ => Params::new(),
		};
		Submission {
			method: Method::POST,
			params,
		}
	}

	#[test]
	fn test_validate_options_builders() {
		let options = ValidateOptions::new().skip_csrf().assert_valid();
		assert!(options.skip_csrf);
		assert!(options.assert_valid);
		assert_eq!(ValidateOptions::default(), ValidateOptions::new());
	}

	#[test]
	fn test_token_is_stripped_before_schema() {
		let request = submission(json!({ "a": 1, "_authentication_token": "secret" }));
		let mut form = Form::new(&request, &echo);

		assert!(form.validate().unwrap());
		assert_eq!(form.data().unwrap(), &FormData::from([("a".to_string(), json!(1))]));
	}

	#[test]
	fn test_explicit_params_for_csrf_check() {
		let request = submission(json!({}));
		let form = Form::new(&request, &echo);
		let params = Params::from([("_authentication_token".to_string(), json!("secret"))]);

		assert!(form.validate_csrf(Some(&params)).is_ok());
		assert!(form.validate_csrf(None).is_err());
	}

	#[test]
	fn test_data_before_validation() {
		let request = submission(json!({}));
		let form = Form::new(&request, &echo);

		assert!(matches!(form.data(), Err(FormError::NotValidated)));
		assert!(form.errors().is_empty());
		assert!(!form.is_validated());
	}

	#[test]
	fn test_debug_lists_state() {
		let request = submission(json!({}));
		let form = Form::new(&request, &echo);

		let debug = format!("{form:?}");
		assert!(debug.contains("is_validated: false"));
		assert!(debug.contains("/submit"));
	}
}
