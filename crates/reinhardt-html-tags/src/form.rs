//! Form tag and input controls
//!
//! Inputs get an `id` derived from their name unless the caller supplies
//! one. An explicit `"id" => None::<&str>` (or an empty id) suppresses it.

use reinhardt_html_core::{
	AttrValue, Attrs, Fragment, HTML, HtmlError, HtmlResult, NO_CONTENT, SafeString, attrs,
};

/// Turn arbitrary text into something usable as an `id`.
///
/// Whitespace becomes `_`, anything that is not a word character or `-` is
/// dropped, and the result is lowercased.
///
/// # Examples
///
/// ```
/// use reinhardt_html_tags::make_safe_id_component;
///
/// assert_eq!(make_safe_id_component("Hello World!"), "hello_world");
/// assert_eq!(make_safe_id_component("-1"), "-1");
/// ```
pub fn make_safe_id_component(idstring: &str) -> String {
	idstring
		.chars()
		.filter_map(|c| match c {
			c if c.is_whitespace() => Some('_'),
			c if c.is_alphanumeric() || c == '_' || c == '-' => Some(c),
			_ => None,
		})
		.flat_map(char::to_lowercase)
		.collect()
}

/// Resolve the `id`/`id_` pair in `attrs`, falling back to `default`.
pub(crate) fn set_id_attr(attrs: &mut Attrs, default: impl FnOnce() -> String) -> HtmlResult<()> {
	match (attrs.remove("id"), attrs.remove("id_")) {
		(Some(_), Some(_)) => Err(HtmlError::UnsupportedArgument(
			"pass either 'id' or 'id_', not both".to_string(),
		)),
		(Some(id), None) | (None, Some(id)) => {
			if id.is_truthy() {
				attrs.insert("id", id);
			}
			Ok(())
		}
		(None, None) => {
			attrs.insert("id", default());
			Ok(())
		}
	}
}

fn input(
	kind: impl Into<AttrValue>,
	name: &str,
	value: AttrValue,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	attrs.insert("type", kind);
	attrs.insert("name", name);
	attrs.insert("value", value);
	set_id_attr(&mut attrs, || make_safe_id_component(name))?;
	HTML.tag("input", NO_CONTENT, attrs)
}

/// Text shown next to a checkbox or radio button.
///
/// The control and the text are wrapped together in a `<label>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
	text: Fragment,
	class: Option<String>,
}

impl Label {
	pub fn new(text: impl Into<Fragment>) -> Self {
		Self {
			text: text.into(),
			class: None,
		}
	}

	/// CSS class for the `<label>` element.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	fn wrap(self, widget: SafeString) -> HtmlResult<SafeString> {
		HTML.tag(
			"label",
			[Fragment::Safe(widget), Fragment::raw(" "), self.text],
			attrs! { "class_" => self.class },
		)
	}
}

/// An opening `<form>` tag.
///
/// Methods other than GET and POST are sent as POST, with the real method
/// in a hidden `_method` field. Hidden fields are placed in a
/// `<div style="display:none">` right after the opening tag.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::form;
///
/// let tag = form("/submit", "post", false, &[], attrs! {}).unwrap();
/// assert_eq!(tag, r#"<form action="/submit" method="post">"#);
/// ```
pub fn form(
	url: impl Into<AttrValue>,
	method: &str,
	multipart: bool,
	hidden_fields: &[(&str, &str)],
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	let mut fields = Vec::with_capacity(hidden_fields.len() + 1);
	attrs.insert("action", url);
	if multipart {
		attrs.insert("enctype", "multipart/form-data");
	}
	if method.eq_ignore_ascii_case("get") || method.eq_ignore_ascii_case("post") {
		attrs.insert("method", method);
	} else {
		tracing::debug!(method, "emulating form method with a hidden _method field");
		attrs.insert("method", "post");
		fields.push(hidden("_method", method, attrs! { "id" => AttrValue::None })?);
	}
	for (name, value) in hidden_fields {
		fields.push(hidden(name, *value, attrs! { "id" => AttrValue::None })?);
	}

	let div = if fields.is_empty() {
		None
	} else {
		Some(HTML.tag(
			"div",
			fields,
			attrs! { "style" => "display:none", "_nl" => true },
		)?)
	};
	attrs.insert("_closed", false);
	HTML.tag("form", [div], attrs)
}

/// The closing `</form>` tag.
pub fn end_form() -> SafeString {
	SafeString::from_static("</form>")
}

/// A text input. Pass `"type" => ...` for other text-like types such as
/// `email` or `color`.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::text;
///
/// assert_eq!(
///     text("color", None::<&str>, attrs! { "type" => "color" }).unwrap(),
///     r#"<input id="color" name="color" type="color" />"#
/// );
/// ```
pub fn text(name: &str, value: impl Into<AttrValue>, mut attrs: Attrs) -> HtmlResult<SafeString> {
	let kind = attrs.remove("type").unwrap_or_else(|| AttrValue::from("text"));
	input(kind, name, value.into(), attrs)
}

pub fn hidden(name: &str, value: impl Into<AttrValue>, attrs: Attrs) -> HtmlResult<SafeString> {
	input("hidden", name, value.into(), attrs)
}

pub fn file(name: &str, value: impl Into<AttrValue>, attrs: Attrs) -> HtmlResult<SafeString> {
	input("file", name, value.into(), attrs)
}

pub fn password(name: &str, value: impl Into<AttrValue>, attrs: Attrs) -> HtmlResult<SafeString> {
	input("password", name, value.into(), attrs)
}

pub fn submit(name: &str, value: impl Into<AttrValue>, attrs: Attrs) -> HtmlResult<SafeString> {
	input("submit", name, value.into(), attrs)
}

/// A `<textarea>`; `content` is escaped unless it is already safe.
pub fn textarea(
	name: &str,
	content: impl Into<Fragment>,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	attrs.insert("name", name);
	set_id_attr(&mut attrs, || make_safe_id_component(name))?;
	HTML.tag("textarea", [content.into()], attrs)
}

/// A checkbox, optionally wrapped in a [`Label`].
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::checkbox;
///
/// assert_eq!(
///     checkbox("admin", "1", true, None, attrs! {}).unwrap(),
///     r#"<input checked="checked" id="admin" name="admin" type="checkbox" value="1" />"#
/// );
/// ```
pub fn checkbox(
	name: &str,
	value: impl Into<AttrValue>,
	checked: bool,
	label: Option<Label>,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	if checked {
		attrs.insert("checked", "checked");
	}
	let widget = input("checkbox", name, value.into(), attrs)?;
	match label {
		Some(label) => label.wrap(widget),
		None => Ok(widget),
	}
}

/// A radio button. The default id is `{name}_{value}`, with the value made
/// id-safe.
pub fn radio(
	name: &str,
	value: &str,
	checked: bool,
	label: Option<Label>,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	if checked {
		attrs.insert("checked", "checked");
	}
	if !attrs.contains_key("id") && !attrs.contains_key("id_") {
		attrs.insert("id", format!("{name}_{}", make_safe_id_component(value)));
	}
	let widget = input("radio", name, value.into(), attrs)?;
	match label {
		Some(label) => label.wrap(widget),
		None => Ok(widget),
	}
}
