//! Fluent element builder
//!
//! [`TagBuilder`] collects a tag's attributes, children and options through
//! method chaining and renders them with the [`HtmlBuilder`] it came from.
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::HTML;
//!
//! let list = HTML
//!     .element("ul")
//!     .class("menu")
//!     .child(HTML.element("li").text("Home"))
//!     .child(HTML.element("li").text("About & Contact"))
//!     .build();
//! assert_eq!(
//!     list,
//!     r#"<ul class="menu"><li>Home</li><li>About &amp; Contact</li></ul>"#
//! );
//! ```

use crate::attrs::{AttrValue, Attrs};
use crate::builder::{HtmlBuilder, TagOptions};
use crate::fragment::Fragment;
use crate::safe_string::{Renderable, SafeString};

/// HTML element builder with fluent API.
///
/// Attribute names go through the same optimization as keyword calls, so
/// `class_`, list-valued `class`/`style` and boolean attributes all work.
#[derive(Debug, Clone)]
pub struct TagBuilder<'b> {
	builder: &'b HtmlBuilder,
	name: String,
	attrs: Attrs,
	children: Vec<Fragment>,
	options: TagOptions,
}

impl<'b> TagBuilder<'b> {
	/// Create a new builder for `name`.
	pub fn new(builder: &'b HtmlBuilder, name: impl Into<String>) -> Self {
		Self {
			builder,
			name: name.into(),
			attrs: Attrs::new(),
			children: Vec::new(),
			options: TagOptions::default(),
		}
	}

	/// Set a custom attribute
	///
	/// ## Example
	///
	/// ```
	/// use reinhardt_html_core::HTML;
	///
	/// let div = HTML.element("div").attr("data_test_id", "my-div").build();
	/// assert_eq!(div, r#"<div data-test-id="my-div"></div>"#);
	/// ```
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	/// Merge a whole attribute map.
	pub fn attrs(mut self, attrs: Attrs) -> Self {
		self.attrs.extend(attrs);
		self
	}

	/// Set the class attribute
	///
	/// Accepts a plain string or a list of (optionally flagged) parts.
	pub fn class(self, class: impl Into<AttrValue>) -> Self {
		self.attr("class", class)
	}

	/// Set the id attribute
	pub fn id(self, id: impl Into<AttrValue>) -> Self {
		self.attr("id", id)
	}

	/// Set the style attribute
	pub fn style(self, style: impl Into<AttrValue>) -> Self {
		self.attr("style", style)
	}

	/// Remove an attribute
	pub fn remove_attr(mut self, name: &str) -> Self {
		self.attrs.remove(name);
		self
	}

	/// Append a child, escaping it if it is raw text.
	pub fn child(mut self, child: impl Into<Fragment>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Append several children.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Set text content
	///
	/// This will replace all children of the element.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children = vec![Fragment::Raw(text.into())];
		self
	}

	/// Whether to emit the closing tag (default `true`).
	pub fn closed(mut self, closed: bool) -> Self {
		self.options.closed = closed;
		self
	}

	/// Put the opening tag, each child and the closing tag on separate lines.
	pub fn newline_layout(mut self, newline: bool) -> Self {
		self.options.newline = newline;
		self
	}

	/// Treat `name` as a boolean attribute for this element.
	pub fn boolean_attr(mut self, name: impl Into<String>) -> Self {
		self.options.boolean_attrs.push(name.into());
		self
	}

	/// Render the element.
	pub fn build(self) -> SafeString {
		self.builder
			.render_tag(&self.name, self.children, self.attrs, &self.options)
	}
}

impl Renderable for TagBuilder<'_> {
	fn to_html(&self) -> SafeString {
		self.clone().build()
	}
}

impl From<TagBuilder<'_>> for Fragment {
	fn from(builder: TagBuilder<'_>) -> Self {
		Fragment::Safe(builder.build())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HTML;
	use rstest::rstest;

	#[rstest]
	fn test_void_element() {
		let img = HTML.element("img").attr("src", "/a.png").attr("alt", "").build();
		assert_eq!(img, r#"<img alt="" src="/a.png" />"#);
	}

	#[rstest]
	fn test_flagged_class_list() {
		let div = HTML
			.element("div")
			.class(vec![("active", true), ("hidden", false)])
			.build();
		assert_eq!(div, r#"<div class="active"></div>"#);
	}

	#[rstest]
	fn test_text_replaces_children() {
		let p = HTML.element("p").child("a").child("b").text("<c>").build();
		assert_eq!(p, "<p>&lt;c&gt;</p>");
	}

	#[rstest]
	fn test_remove_attr() {
		let p = HTML.element("p").id("x").remove_attr("id").build();
		assert_eq!(p, "<p></p>");
	}

	#[rstest]
	fn test_boolean_attr_and_open_tag() {
		let out = HTML
			.element("details")
			.attr("open", true)
			.boolean_attr("open")
			.closed(false)
			.build();
		assert_eq!(out, r#"<details open="open">"#);
	}

	#[rstest]
	fn test_newline_layout() {
		let out = HTML
			.element("ul")
			.children([HTML.element("li").text("a"), HTML.element("li").text("b")])
			.newline_layout(true)
			.build();
		assert_eq!(out, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
	}

	#[rstest]
	fn test_renderable() {
		let link = HTML.element("a").attr("href", "/").text("Home");
		assert_eq!(Fragment::rendered(&link).into_html(), link.build());
	}
}
