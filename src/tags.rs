//! Form, link, list, head and text helpers.
//!
//! # Examples
//!
//! ```
//! use reinhardt_html::core::attrs;
//! use reinhardt_html::tags::hidden;
//!
//! let field = hidden("token", "abc", attrs! {}).unwrap();
//! assert_eq!(field, r#"<input id="token" name="token" type="hidden" value="abc" />"#);
//! ```

#[cfg(feature = "tags")]
pub use reinhardt_html_tags::*;
