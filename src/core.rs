//! Safe strings, escaping and the tag builder.
//!
//! # Examples
//!
//! ```
//! use reinhardt_html::core::{HTML, escape};
//!
//! assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
//! assert_eq!(HTML.comment(["a < b"]), "<!-- a &lt; b -->");
//! ```

pub use reinhardt_html_core::*;
