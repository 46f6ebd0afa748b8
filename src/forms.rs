//! Form validation and rendering.
//!
//! # Examples
//!
//! ```rust,no_run
//! use uniform::forms::{Form, FormRenderer, Schema};
//! ```

#[cfg(feature = "forms")]
pub use uniform_forms::*;
