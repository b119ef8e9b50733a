//! Higher-level HTML helpers for Reinhardt
//!
//! Everything here is built on the public surface of
//! [`reinhardt_html_core`]: raw input is escaped, every helper accepts extra
//! [`Attrs`](reinhardt_html_core::Attrs), and usage errors come back as
//! [`HtmlError`](reinhardt_html_core::HtmlError).
//!
//! ## Modules
//!
//! - [`form`]: `<form>` and the input controls
//! - [`select`]: `<select>` and its option model
//! - [`links`]: anchors, lazily rendered links, sortable table headers
//! - [`lists`]: `<ul>` and `<ol>`
//! - [`head`]: images, scripts, stylesheets, feed links
//! - [`tools`]: line breaks, paragraphs, highlighting, auto-linking, button
//!   forms, `mailto:` links
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::attrs;
//! use reinhardt_html_tags::{link_to, text};
//!
//! let link = link_to("Home", "/", attrs! {}).unwrap();
//! assert_eq!(link, r#"<a href="/">Home</a>"#);
//!
//! let input = text("title", "", attrs! {}).unwrap();
//! assert_eq!(input, r#"<input id="title" name="title" type="text" value="" />"#);
//! ```

pub mod form;
pub mod head;
pub mod links;
pub mod lists;
pub mod select;
pub mod tools;

pub use form::{
	Label, checkbox, end_form, file, form, hidden, make_safe_id_component, password, radio,
	submit, text, textarea,
};
pub use head::{auto_discovery_link, image, javascript_link, stylesheet_link};
pub use links::{Link, SortableColumn, link_to, link_to_if, link_to_unless, th_sortable};
pub use lists::{ol, ul};
pub use select::{OptGroup, OptionItem, Options, SelectOption, select};
pub use tools::{
	AutoLink, MailEncoding, MailTo, Phrase, auto_link, button_to, highlight, mail_to, nl2br,
	text_to_html,
};
