//! Per-element shorthand constructors
//!
//! Each function is [`HtmlBuilder::tag`](crate::HtmlBuilder::tag) on the
//! shared [`HTML`] builder with a fixed element name.
//!
//! ```
//! use reinhardt_html_core::elements::{a, br};
//! use reinhardt_html_core::{NO_CONTENT, attrs};
//!
//! assert_eq!(br(NO_CONTENT, attrs! {}).unwrap(), "<br />");
//! assert_eq!(a(["A", "B"], attrs! { "href" => "/" }).unwrap(), r#"<a href="/">AB</a>"#);
//! ```

use crate::attrs::Attrs;
use crate::builder::HTML;
use crate::error::HtmlResult;
use crate::fragment::Fragment;
use crate::safe_string::SafeString;

macro_rules! define_element {
	($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $name<I>(content: I, attrs: Attrs) -> HtmlResult<SafeString>
			where
				I: IntoIterator,
				I::Item: Into<Fragment>,
			{
				HTML.tag($tag, content, attrs)
			}
		)*
	};
}

define_element!(
	/// Create an `<a>` element
	a => "a",
	abbr => "abbr",
	article => "article",
	aside => "aside",
	b => "b",
	blockquote => "blockquote",
	body => "body",
	/// Create a `<br />` element
	br => "br",
	button => "button",
	caption => "caption",
	code => "code",
	col => "col",
	dd => "dd",
	/// Create a `<div>` element
	div => "div",
	dl => "dl",
	dt => "dt",
	em => "em",
	fieldset => "fieldset",
	footer => "footer",
	/// Create a `<form>` element
	///
	/// Pass `"_closed" => false` for the opening tag alone.
	form => "form",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	head => "head",
	header => "header",
	hr => "hr",
	html => "html",
	i => "i",
	/// Create an `<img />` element
	img => "img",
	input => "input",
	label => "label",
	legend => "legend",
	li => "li",
	link => "link",
	main => "main",
	meta => "meta",
	nav => "nav",
	ol => "ol",
	optgroup => "optgroup",
	option => "option",
	/// Create a `<p>` element (paragraph)
	p => "p",
	pre => "pre",
	script => "script",
	section => "section",
	select => "select",
	small => "small",
	span => "span",
	strong => "strong",
	style => "style",
	table => "table",
	tbody => "tbody",
	td => "td",
	textarea => "textarea",
	tfoot => "tfoot",
	th => "th",
	thead => "thead",
	title => "title",
	tr => "tr",
	ul => "ul",
);
