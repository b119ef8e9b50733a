//! Bulleted and numbered lists

use reinhardt_html_core::{Attrs, Fragment, HTML, HtmlResult, NL, SafeString};

fn list<I>(
	tag: &str,
	items: I,
	default: Option<SafeString>,
	li_attrs: &Attrs,
	attrs: Attrs,
) -> HtmlResult<SafeString>
where
	I: IntoIterator,
	I::Item: Into<Fragment>,
{
	let items = items
		.into_iter()
		.map(|item| HTML.tag("li", [item], li_attrs.clone()))
		.collect::<HtmlResult<Vec<_>>>()?;

	if items.is_empty() {
		if let Some(default) = default {
			return Ok(default);
		}
		return HTML.tag(tag, [SafeString::EMPTY], attrs);
	}
	let content = NL.join_trusted(items);
	HTML.tag(tag, [NL, content, NL], attrs)
}

/// A `<ul>` with one `<li>` per item.
///
/// With no items the result is `default` if given, otherwise an empty
/// `<ul></ul>`.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::ul;
///
/// let out = ul(["foo", "bar"], None, &attrs! {}, attrs! {}).unwrap();
/// assert_eq!(out, "<ul>\n<li>foo</li>\n<li>bar</li>\n</ul>");
/// ```
pub fn ul<I>(
	items: I,
	default: Option<SafeString>,
	li_attrs: &Attrs,
	attrs: Attrs,
) -> HtmlResult<SafeString>
where
	I: IntoIterator,
	I::Item: Into<Fragment>,
{
	list("ul", items, default, li_attrs, attrs)
}

/// An `<ol>`; see [`ul`].
pub fn ol<I>(
	items: I,
	default: Option<SafeString>,
	li_attrs: &Attrs,
	attrs: Attrs,
) -> HtmlResult<SafeString>
where
	I: IntoIterator,
	I::Item: Into<Fragment>,
{
	list("ol", items, default, li_attrs, attrs)
}
