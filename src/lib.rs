//! # Reinhardt HTML
//!
//! Safe HTML strings, a tag builder and HTML helpers for Rust.
//!
//! Text that may contain markup characters is kept apart from markup that is
//! already safe. Raw text is escaped exactly once on its way into a document;
//! [`SafeString`] values pass through untouched. On top of that sits the tag
//! builder, which turns a tag name, attributes and content into well-formed
//! markup.
//!
//! ## Feature Flags
//!
//! - `tags` (default) - form, link, list, head and text helpers
//! - `full` - all features enabled
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_html::prelude::*;
//!
//! let greeting = HTML.tag("p", ["Fish & chips"], attrs! { "class_" => "menu" }).unwrap();
//! assert_eq!(greeting, r#"<p class="menu">Fish &amp; chips</p>"#);
//!
//! let combined = SafeString::new("<b>Today:</b> ") + "<none>";
//! assert_eq!(combined, "<b>Today:</b> &lt;none&gt;");
//! ```
//!
//! ## Module Organization
//!
//! - [`core`] - escaping, [`SafeString`], attributes and the tag builder
//! - [`tags`] - higher-level helpers (requires the `tags` feature)

pub mod core;
#[cfg(feature = "tags")]
pub mod tags;

// Re-export the everyday core types
pub use reinhardt_html_core::{
	AttrValue, Attrs, BuilderConfig, Fragment, HTML, HtmlBuilder, HtmlError, HtmlResult,
	NO_CONTENT, Renderable, SafeString, TagOptions, attrs, escape, format_html,
};

/// Prelude module for convenient imports
///
/// ```
/// use reinhardt_html::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		AttrValue, Attrs, Fragment, HTML, HtmlError, HtmlResult, NO_CONTENT, Renderable,
		SafeString, TagOptions, attrs, escape, format_html,
	};

	pub use reinhardt_html_core::{BR, EMPTY, NL, SPACE};

	#[cfg(feature = "tags")]
	pub use reinhardt_html_tags::{
		AutoLink, auto_link, button_to, checkbox, end_form, form, hidden, image, link_to, mail_to,
		nl2br, ol, select, submit, text, text_to_html, textarea, ul,
	};
}
