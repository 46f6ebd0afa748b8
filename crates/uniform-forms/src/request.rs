//! Capabilities the hosting framework provides
//!
//! A [`Form`](crate::Form) never parses HTTP itself. It reads the submission
//! through [`Request`] and the expected CSRF token through [`Session`].

use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Submitted parameters, one JSON value per name
///
/// Multi-valued parameters are represented as a JSON array.
pub type Params = HashMap<String, Value>;

/// Session of the client that sent the request
pub trait Session {
	/// Token the client is expected to submit back
	fn csrf_token(&self) -> String;
}

/// Request being validated
pub trait Request {
	fn method(&self) -> &Method;

	/// Parameters from the request body
	fn post(&self) -> &Params;

	/// Query and body parameters combined
	fn params(&self) -> &Params;

	fn path(&self) -> &str;

	/// Full URL, used for diagnostics
	fn url(&self) -> String {
		self.path().to_string()
	}

	fn remote_addr(&self) -> Option<String> {
		None
	}

	fn user_agent(&self) -> Option<String> {
		None
	}

	fn session(&self) -> &dyn Session;
}

/// Context handed to the schema along with the parameters
///
/// Gives validators access to the request, e.g. to look up the current user.
#[derive(Clone, Copy)]
pub struct State<'r> {
	request: &'r dyn Request,
}

impl<'r> State<'r> {
	pub fn new(request: &'r dyn Request) -> Self {
		Self { request }
	}

	pub fn request(&self) -> &'r dyn Request {
		self.request
	}
}

impl fmt::Debug for State<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("State")
			.field("method", self.request.method())
			.field("path", &self.request.path())
			.finish()
	}
}
