//! Images and `<head>` links

use reinhardt_html_core::{
	AttrValue, Attrs, HTML, HtmlError, HtmlResult, NL, NO_CONTENT, SafeString,
};

fn reject(attrs: &Attrs, forbidden: &[&str], helper: &str) -> HtmlResult<()> {
	match forbidden.iter().find(|key| attrs.contains_key(key)) {
		Some(key) => {
			tracing::debug!(helper, argument = *key, "rejected reserved argument");
			Err(HtmlError::UnsupportedArgument(format!("{helper}: {key}")))
		}
		None => Ok(()),
	}
}

/// An `<img />` tag.
///
/// A missing `alt` becomes `alt=""`. If either dimension is given both are
/// written, with an absent one omitted.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::image;
///
/// let img = image("/icons/icon.gif", None, Some(16), None, attrs! {}).unwrap();
/// assert_eq!(img, r#"<img alt="" src="/icons/icon.gif" width="16" />"#);
/// ```
pub fn image(
	url: impl Into<AttrValue>,
	alt: Option<&str>,
	width: Option<u32>,
	height: Option<u32>,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	reject(&attrs, &["path", "use_pil"], "image")?;
	if width.is_some() || height.is_some() {
		attrs.insert("width", width);
		attrs.insert("height", height);
	}
	attrs.insert("src", url);
	attrs.insert("alt", alt.unwrap_or_default());
	HTML.tag("img", NO_CONTENT, attrs)
}

/// One `<script>` tag per URL, separated by newlines.
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::javascript_link;
///
/// let out = javascript_link(["/js/app.js"], attrs! { "defer" => true }).unwrap();
/// assert_eq!(
///     out,
///     r#"<script defer="defer" src="/js/app.js" type="text/javascript"></script>"#
/// );
/// ```
pub fn javascript_link<I>(urls: I, attrs: Attrs) -> HtmlResult<SafeString>
where
	I: IntoIterator,
	I::Item: Into<AttrValue>,
{
	let tags = urls
		.into_iter()
		.map(|url| {
			let mut attrs = attrs.clone();
			attrs.insert("src", url);
			attrs.set_default("type", "text/javascript");
			HTML.tag("script", [SafeString::EMPTY], attrs)
		})
		.collect::<HtmlResult<Vec<_>>>()?;
	Ok(NL.join_trusted(tags))
}

/// One stylesheet `<link />` per URL, separated by newlines.
///
/// `rel`, `type` and `media` default to `stylesheet`, `text/css` and
/// `screen`. Passing `href` is an error.
pub fn stylesheet_link<I>(urls: I, attrs: Attrs) -> HtmlResult<SafeString>
where
	I: IntoIterator,
	I::Item: Into<AttrValue>,
{
	reject(&attrs, &["href"], "stylesheet_link")?;
	let tags = urls
		.into_iter()
		.map(|url| {
			let mut attrs = attrs.clone();
			attrs.insert("href", url);
			attrs.set_default("rel", "stylesheet");
			attrs.set_default("type", "text/css");
			attrs.set_default("media", "screen");
			HTML.tag("link", NO_CONTENT, attrs)
		})
		.collect::<HtmlResult<Vec<_>>>()?;
	Ok(NL.join_trusted(tags))
}

/// A feed `<link rel="alternate" />`.
///
/// `rss` and `atom` expand to their MIME types and a matching default
/// title. Any other `feed_type` is used as the MIME type verbatim with an
/// empty title. Passing `href` or `type` is an error.
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::auto_discovery_link;
///
/// let out = auto_discovery_link("http://feed.com/feed.xml", "rss", attrs! {}).unwrap();
/// assert_eq!(
///     out,
///     r#"<link href="http://feed.com/feed.xml" rel="alternate" title="RSS" type="application/rss+xml" />"#
/// );
/// ```
pub fn auto_discovery_link(
	url: impl Into<AttrValue>,
	feed_type: &str,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	reject(&attrs, &["href", "type"], "auto_discovery_link")?;
	let (mime, title) = match feed_type.to_ascii_lowercase().as_str() {
		kind @ ("rss" | "atom") => (
			format!("application/{kind}+xml"),
			kind.to_ascii_uppercase(),
		),
		_ => (feed_type.to_string(), String::new()),
	};
	attrs.insert("href", url);
	attrs.insert("type", mime);
	attrs.set_default("rel", "alternate");
	attrs.set_default("title", title);
	HTML.tag("link", NO_CONTENT, attrs)
}
