//! HTML tag generation.
//!
//! # Examples
//!
//! ```
//! use uniform::html::{Attrs, HtmlTags, TagRenderer};
//!
//! let html = HtmlTags::new().hidden("next", Some("/home"), None, &Attrs::new());
//! assert_eq!(html, "<input type=\"hidden\" name=\"next\" value=\"/home\" />");
//! ```

pub use uniform_html::*;
