//! # Uniform
//!
//! Form handling for web request handlers: validate a submission against a
//! schema, check its CSRF token, collect per-field errors, bind the result to
//! application objects, and re-render the form controls with what the user
//! submitted.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - [`Form`](forms::Form), renderers, errors and
//!   configuration
//! - `test` - in-memory requests, sessions, schemas and tag renderers for
//!   tests
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use uniform::prelude::*;
//!
//! fn signup(request: &dyn Request, schema: &dyn Schema) -> FormResult<String> {
//!     let mut form = Form::new(request, schema);
//!     if form.validate()? {
//!         let profile: Profile = form.bind_as()?;
//!         return Ok(format!("Welcome, {}", profile.name));
//!     }
//!     let renderer = FormRenderer::new(&form)?;
//!     Ok(format!(
//!         "{}{}{}{}{}",
//!         renderer.begin(None, None, &Attrs::new()),
//!         renderer.csrf_token(None),
//!         renderer.text("name", None, None, &Attrs::new()),
//!         renderer.errorlist("name"),
//!         renderer.end(),
//!     ))
//! }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
pub mod html;
#[cfg(feature = "test")]
pub mod test;

/// Commonly used types
pub mod prelude {
	pub use uniform_html::{Attrs, Markup, TagRenderer};

	#[cfg(feature = "forms")]
	pub use uniform_forms::{
		BindTarget, FieldErrors, Form, FormConfig, FormData, FormError, FormMethod, FormRenderer,
		FormResult, Invalid, Params, Renderer, Request, Schema, Session, State, ValidateOptions,
	};
}
