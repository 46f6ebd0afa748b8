//! Test doubles for `uniform-forms`
//!
//! - [`DummyRequest`] / [`DummySession`]: in-memory request with a fixed CSRF
//!   token ([`DUMMY_CSRF_TOKEN`])
//! - [`DummySchema`]: one required field `foo`, rejects unknown fields
//! - [`RecordingTags`]: tag renderer recording the arguments of every control
//! - [`DummyObject`]: bind target that stores what it receives
//! - [`fixtures`]: rstest fixtures built from the above

pub mod fixtures;
pub mod mock;
pub mod request;
pub mod schema;

pub use mock::{DummyObject, RecordingTags, TagCall};
pub use request::{DUMMY_CSRF_TOKEN, DummyRequest, DummyRequestBuilder, DummySession};
pub use schema::{DummySchema, EMPTY_VALUE_MESSAGE};
