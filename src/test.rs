//! Test doubles for form handlers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use uniform::test::{DummyRequest, DummySchema, DUMMY_CSRF_TOKEN};
//! ```

#[cfg(feature = "test")]
pub use uniform_test::*;
