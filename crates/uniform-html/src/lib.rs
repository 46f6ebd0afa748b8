//! HTML tag generation for form controls
//!
//! This crate provides the tag-rendering capability used by `uniform-forms`:
//! - [`Markup`] for strings that are already safe to embed in a page
//! - [`escape`] / [`escape_attr`] for untrusted text and attribute values
//! - [`Attrs`] for extra attributes passed through to a control
//! - the [`TagRenderer`] trait and its default implementation [`HtmlTags`]
//!
//! Renderers in `uniform-forms` are generic over [`TagRenderer`], so a host
//! framework can plug in its own markup conventions.

pub mod attrs;
pub mod escape;
pub mod markup;
pub mod tags;

pub use attrs::Attrs;
pub use escape::{escape, escape_attr};
pub use markup::Markup;
pub use tags::{HtmlTags, SelectOption, TagRenderer};
