//! In-memory request and session

use http::Method;
use serde_json::Value;
use uniform_forms::{Params, Request, Session};

/// CSRF token every [`DummySession`] hands out unless told otherwise
pub const DUMMY_CSRF_TOKEN: &str = "0123456789012345678901234567890123456789";

/// Session with a fixed CSRF token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummySession {
	token: String,
}

impl DummySession {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: token.into(),
		}
	}
}

impl Default for DummySession {
	fn default() -> Self {
		Self::new(DUMMY_CSRF_TOKEN)
	}
}

impl Session for DummySession {
	fn csrf_token(&self) -> String {
		self.token.clone()
	}
}

/// Request built in memory
///
/// [`params`](Request::params) holds the query parameters merged with the
/// body parameters; body values win on conflicting names.
#[derive(Debug, Clone)]
pub struct DummyRequest {
	method: Method,
	post: Params,
	params: Params,
	path: String,
	url: Option<String>,
	remote_addr: Option<String>,
	user_agent: Option<String>,
	session: DummySession,
}

impl DummyRequest {
	pub fn builder() -> DummyRequestBuilder {
		DummyRequestBuilder::default()
	}

	/// POST request carrying `post` as its body
	pub fn from_post(post: Value) -> Self {
		Self::builder().post(post).build()
	}

	/// GET request carrying `query` as its query string
	pub fn from_query(query: Value) -> Self {
		Self::builder().query(query).build()
	}
}

impl Request for DummyRequest {
	fn method(&self) -> &Method {
		&self.method
	}

	fn post(&self) -> &Params {
		&self.post
	}

	fn params(&self) -> &Params {
		&self.params
	}

	fn path(&self) -> &str {
		&self.path
	}

	fn url(&self) -> String {
		self.url
			.clone()
			.unwrap_or_else(|| format!("http://example.com{}", self.path))
	}

	fn remote_addr(&self) -> Option<String> {
		self.remote_addr.clone()
	}

	fn user_agent(&self) -> Option<String> {
		self.user_agent.clone()
	}

	fn session(&self) -> &dyn Session {
		&self.session
	}
}

/// Builder for [`DummyRequest`]
///
/// The method defaults to `POST` when a body was given and `GET` otherwise.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use serde_json::json;
/// use uniform_forms::Request;
/// use uniform_test::DummyRequest;
///
/// let request = DummyRequest::builder()
///     .query(json!({ "page": "2" }))
///     .post(json!({ "name": "Ann" }))
///     .build();
///
/// assert_eq!(request.method(), &Method::POST);
/// assert_eq!(request.params().len(), 2);
/// assert_eq!(request.post().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DummyRequestBuilder {
	method: Option<Method>,
	post: Option<Params>,
	query: Params,
	path: Option<String>,
	url: Option<String>,
	remote_addr: Option<String>,
	user_agent: Option<String>,
	session: DummySession,
}

impl DummyRequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	/// Body parameters from a JSON object
	pub fn post(mut self, post: Value) -> Self {
		self.post = Some(into_params(post));
		self
	}

	/// Query parameters from a JSON object
	pub fn query(mut self, query: Value) -> Self {
		self.query = into_params(query);
		self
	}

	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = Some(path.into());
		self
	}

	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	pub fn remote_addr(mut self, addr: impl Into<String>) -> Self {
		self.remote_addr = Some(addr.into());
		self
	}

	pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
		self.user_agent = Some(agent.into());
		self
	}

	/// CSRF token held by the session
	pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
		self.session = DummySession::new(token);
		self
	}

	pub fn build(self) -> DummyRequest {
		let method = self.method.unwrap_or(if self.post.is_some() {
			Method::POST
		} else {
			Method::GET
		});
		let post = self.post.unwrap_or_default();
		let mut params = self.query;
		params.extend(post.iter().map(|(k, v)| (k.clone(), v.clone())));

		DummyRequest {
			method,
			post,
			params,
			path: self.path.unwrap_or_else(|| "/".to_string()),
			url: self.url,
			remote_addr: self.remote_addr,
			user_agent: self.user_agent,
			session: self.session,
		}
	}
}

fn into_params(value: Value) -> Params {
	match value {
		Value::Object(map) => map.into_iter().collect(),
		Value::Null => Params::new(),
		other => panic!("request parameters must be a JSON object, got {other}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_get_without_body() {
		let request = DummyRequest::from_query(json!({ "q": "rust" }));
		assert_eq!(request.method(), &Method::GET);
		assert!(request.post().is_empty());
		assert_eq!(request.params()["q"], "rust");
	}

	#[test]
	fn test_body_wins_over_query() {
		let request = DummyRequest::builder()
			.query(json!({ "name": "query" }))
			.post(json!({ "name": "body" }))
			.build();
		assert_eq!(request.params()["name"], "body");
	}

	#[test]
	fn test_explicit_method_overrides_default() {
		let request = DummyRequest::builder()
			.method(Method::PUT)
			.post(json!({}))
			.build();
		assert_eq!(request.method(), &Method::PUT);
	}

	#[test]
	fn test_default_url_includes_path() {
		let request = DummyRequest::builder().path("/signup").build();
		assert_eq!(request.url(), "http://example.com/signup");
		assert_eq!(request.remote_addr(), None);
	}

	#[test]
	fn test_session_token() {
		let request = DummyRequest::builder().csrf_token("abc").build();
		assert_eq!(request.session().csrf_token(), "abc");
		assert_eq!(DummySession::default().csrf_token(), DUMMY_CSRF_TOKEN);
	}
}
