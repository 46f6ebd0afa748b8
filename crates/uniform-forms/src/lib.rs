//! Form handling for web request handlers
//!
//! This crate provides:
//! - [`Form`]: validation lifecycle of one submission (method check, CSRF
//!   check, schema delegation, error collection, binding)
//! - [`Renderer`] / [`FormRenderer`]: form controls pre-populated from the
//!   submitted data, with error lists and the CSRF hidden field
//! - the capabilities a hosting framework implements: [`Request`],
//!   [`Session`] and [`Schema`]
//!
//! Failures that need a response ([`FormError`]) are returned as `Err`;
//! field-level messages are collected as data in [`FieldErrors`].
//!
//! # Examples
//!
//! ```
//! use http::Method;
//! use serde_json::json;
//! use uniform_forms::{FieldErrors, Form, FormData, FormRenderer, Invalid, Params, State};
//! use uniform_test::{DummyRequest, DUMMY_CSRF_TOKEN};
//!
//! let schema = |params: &Params, _state: &State<'_>| -> Result<FormData, Invalid> {
//!     match params.get("name").and_then(|v| v.as_str()) {
//!         Some(name) if !name.is_empty() => Ok(FormData::from([("name".to_string(), json!(name))])),
//!         _ => Err(Invalid::new("invalid").with_field("name", "Please enter a value")),
//!     }
//! };
//! let request = DummyRequest::builder()
//!     .method(Method::POST)
//!     .post(json!({ "name": "Alice", "_authentication_token": DUMMY_CSRF_TOKEN }))
//!     .build();
//!
//! let mut form = Form::new(&request, &schema);
//! assert!(form.validate().unwrap());
//! assert_eq!(form.data().unwrap(), &FormData::from([("name".to_string(), json!("Alice"))]));
//! assert_eq!(form.errors(), &FieldErrors::new());
//!
//! let renderer = FormRenderer::new(&form).unwrap();
//! assert!(renderer.text("name", None, None, &Default::default()).contains("value=\"Alice\""));
//! ```

pub mod bind;
pub mod config;
pub mod error;
pub mod form;
pub mod form_renderer;
pub mod renderer;
pub mod request;
pub mod schema;

pub use bind::{BindError, BindTarget};
pub use config::{DEFAULT_CSRF_FIELD, FormConfig, FormMethod};
pub use error::{CsrfError, FormError, FormResult};
pub use form::{Form, ValidateOptions};
pub use form_renderer::FormRenderer;
pub use renderer::Renderer;
pub use request::{Params, Request, Session, State};
pub use schema::{ErrorTree, FieldErrors, FormData, Invalid, Schema};

pub use uniform_html::{Attrs, HtmlTags, Markup, SelectOption, TagRenderer};
