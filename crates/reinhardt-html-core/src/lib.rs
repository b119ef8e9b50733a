//! Safe HTML strings and the tag builder for Reinhardt HTML helpers.
//!
//! This crate keeps "known-safe" markup apart from plain text that still has
//! to be escaped, and builds well-formed elements on top of that distinction:
//!
//! - **SafeString**: text that is emitted verbatim and never escaped again
//! - **Escaping**: [`escape`] turns raw text into a [`SafeString`] exactly once
//! - **Attributes**: [`optimize_attrs`] normalizes names, composable lists and
//!   boolean attributes; [`render_attrs`] writes them in sorted order
//! - **Tag builder**: [`HtmlBuilder`] (shared as [`HTML`]) joins a tag name,
//!   attributes and content into markup
//!
//! # Quick Start
//!
//! ```
//! use reinhardt_html_core::{HTML, NO_CONTENT, SafeString, attrs, escape};
//!
//! assert_eq!(escape(r#"<this"that>"#), "&lt;this&#34;that&gt;");
//!
//! let div = HTML
//!     .tag(
//!         "div",
//!         NO_CONTENT,
//!         attrs! { "class_" => ["a", "b"], "style" => ["color:red", "margin:0"] },
//!     )
//!     .unwrap();
//! assert_eq!(div, r#"<div class="a b" style="color:red; margin:0"></div>"#);
//!
//! // Safe content is never escaped twice
//! let bold = SafeString::new("<b>bold</b>");
//! let p = HTML.tag("p", [bold], attrs! {}).unwrap();
//! assert_eq!(p, "<p><b>bold</b></p>");
//! ```
//!
//! # Configuration
//!
//! The void, boolean and composable name sets live in [`BuilderConfig`] and
//! can be loaded from TOML or JSON. Build a dedicated [`HtmlBuilder`] to use
//! anything other than the defaults.

pub mod attrs;
pub mod builder;
pub mod config;
pub mod element;
pub mod elements;
pub mod error;
pub mod escape;
pub mod fragment;
pub mod safe_string;

pub use attrs::{AttrItem, AttrValue, Attrs, decode_attr_name, optimize_attrs, render_attrs};
pub use builder::{HTML, HtmlBuilder, NO_CONTENT, TagOptions};
pub use config::BuilderConfig;
pub use element::TagBuilder;
pub use error::{HtmlError, HtmlResult};
pub use escape::{escape, escape_str, url_escape};
pub use fragment::Fragment;
pub use safe_string::{BR, BR2, EMPTY, NL, NL2, Renderable, SPACE, SafeString, TAB2, TAB4};
