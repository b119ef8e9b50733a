//! The tag builder
//!
//! [`HtmlBuilder`] turns a tag name, content items and attributes into a
//! [`SafeString`]. It holds nothing but its [`BuilderConfig`], so one builder
//! can be shared by every thread; [`HTML`] is the process-wide default.
//!
//! There are two ways in:
//!
//! - [`HtmlBuilder::render_tag`] takes typed [`TagOptions`] and cannot fail.
//! - [`HtmlBuilder::tag`] takes a single keyword map where `_`-prefixed keys
//!   are builder options (`_closed`, `_nl`, `_bool`), `c` supplies content,
//!   and everything else is an attribute. Unknown options are rejected.

use once_cell::sync::Lazy;

use crate::attrs::{AttrItem, AttrValue, Attrs, optimize_attrs, render_attrs};
use crate::config::BuilderConfig;
use crate::element::TagBuilder;
use crate::error::{HtmlError, HtmlResult};
use crate::escape::escape_str;
use crate::fragment::Fragment;
use crate::safe_string::{EMPTY, NL, SafeString};

/// The shared default builder.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{HTML, NO_CONTENT, attrs};
///
/// let img = HTML.tag("img", NO_CONTENT, attrs! { "src" => "http://x/y.jpg" }).unwrap();
/// assert_eq!(img, r#"<img src="http://x/y.jpg" />"#);
/// ```
pub static HTML: Lazy<HtmlBuilder> = Lazy::new(HtmlBuilder::default);

/// Empty content list for tag calls without content.
pub const NO_CONTENT: [Fragment; 0] = [];

const COMMENT_OPEN: SafeString = SafeString::from_static("<!-- ");
const COMMENT_CLOSE: SafeString = SafeString::from_static(" -->");
const CDATA_OPEN: SafeString = SafeString::from_static("<![CDATA[");
const CDATA_CLOSE: SafeString = SafeString::from_static("]]>");

/// Per-call rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
	/// Emit a closing tag, or the self-closing form for void elements.
	pub closed: bool,
	/// Put every chunk on its own line.
	pub newline: bool,
	/// Attribute names treated as boolean for this call only.
	pub boolean_attrs: Vec<String>,
}

impl Default for TagOptions {
	fn default() -> Self {
		Self {
			closed: true,
			newline: false,
			boolean_attrs: Vec::new(),
		}
	}
}

impl TagOptions {
	/// Options for an opening tag only.
	pub fn open() -> Self {
		Self {
			closed: false,
			..Self::default()
		}
	}

	pub fn with_newlines(mut self) -> Self {
		self.newline = true;
		self
	}

	pub fn with_boolean_attr(mut self, name: impl Into<String>) -> Self {
		self.boolean_attrs.push(name.into());
		self
	}
}

/// Stateless markup factory.
#[derive(Debug, Clone, Default)]
pub struct HtmlBuilder {
	config: BuilderConfig,
}

impl HtmlBuilder {
	pub fn new(config: BuilderConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &BuilderConfig {
		&self.config
	}

	/// Whether `name` renders as `<name />` when it has no content.
	pub fn is_void(&self, name: &str) -> bool {
		self.config.is_void(name)
	}

	/// [`optimize_attrs`] with this builder's configuration.
	pub fn optimize_attrs<S: AsRef<str>>(&self, attrs: Attrs, extra_boolean: &[S]) -> Attrs {
		optimize_attrs(attrs, &self.config, extra_boolean)
	}

	/// Optimize and render `attrs` for splicing into hand-written markup.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{HTML, attrs};
	///
	/// let attrs = attrs! { "class_" => ["a", "b"], "id" => "x" };
	/// assert_eq!(HTML.render_attrs(attrs), r#" class="a b" id="x""#);
	/// ```
	pub fn render_attrs(&self, attrs: Attrs) -> SafeString {
		render_attrs(&self.optimize_attrs(attrs, &[] as &[&str]))
	}

	/// Render one element.
	///
	/// Raw content is escaped, safe content is emitted as is. A void element
	/// with no content and `closed` set renders as `<name attrs />`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{Fragment, HTML, TagOptions, attrs};
	///
	/// let form = HTML.render_tag("form", vec![], attrs! { "action" => "hello" }, &TagOptions::open());
	/// assert_eq!(form, r#"<form action="hello">"#);
	///
	/// let a = HTML.render_tag(
	///     "a",
	///     vec![Fragment::from("A"), Fragment::from("B")],
	///     attrs! { "href" => "/" },
	///     &TagOptions::default().with_newlines(),
	/// );
	/// assert_eq!(a, "<a href=\"/\">\nA\nB\n</a>\n");
	/// ```
	pub fn render_tag(
		&self,
		name: &str,
		content: Vec<Fragment>,
		attrs: Attrs,
		options: &TagOptions,
	) -> SafeString {
		let attrs = render_attrs(&self.optimize_attrs(attrs, &options.boolean_attrs));
		let name = escape_str(name);

		let mut chunks = Vec::with_capacity(content.len() + 2);
		if content.is_empty() && options.closed && self.is_void(&name) {
			chunks.push(SafeString::new(format!("<{name}{attrs} />")));
		} else {
			chunks.push(SafeString::new(format!("<{name}{attrs}>")));
			chunks.extend(content.into_iter().map(Fragment::into_html));
			if options.closed {
				chunks.push(SafeString::new(format!("</{name}>")));
			}
		}

		if options.newline {
			NL.join_trusted(chunks) + NL
		} else {
			EMPTY.join_trusted(chunks)
		}
	}

	/// Render one element from positional content and a keyword map.
	///
	/// Keys of `kwargs`:
	///
	/// - `_closed`, `_nl`: truthy/falsy [`TagOptions::closed`] and
	///   [`TagOptions::newline`]
	/// - `_bool`: a name or list of names for [`TagOptions::boolean_attrs`]
	/// - `c`: content, only when no positional content is given
	/// - any other `_`-prefixed key is an error
	/// - everything else is an attribute
	///
	/// # Errors
	///
	/// [`HtmlError::UnknownOption`] for unrecognized `_` keys,
	/// [`HtmlError::ConflictingContent`] when `c` is combined with
	/// positional content.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{HTML, HtmlError, NO_CONTENT, attrs};
	///
	/// let a = HTML
	///     .tag("a", ["Bad <script> tag"], attrs! { "href" => "http://mostlysafe\" <tag" })
	///     .unwrap();
	/// assert_eq!(a, r#"<a href="http://mostlysafe&#34; &lt;tag">Bad &lt;script&gt; tag</a>"#);
	///
	/// let err = HTML.tag("a", NO_CONTENT, attrs! { "_bogus" => 1 }).unwrap_err();
	/// assert!(matches!(err, HtmlError::UnknownOption(keys) if keys == ["_bogus"]));
	/// ```
	pub fn tag<I>(&self, name: &str, content: I, kwargs: Attrs) -> HtmlResult<SafeString>
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		let mut content: Vec<Fragment> = content.into_iter().map(Into::into).collect();
		let positional = !content.is_empty();
		let mut options = TagOptions::default();
		let mut attrs = Attrs::new();
		let mut unknown = Vec::new();

		for (key, value) in kwargs {
			match key.as_str() {
				"c" => {
					if positional {
						tracing::debug!(tag = name, "content passed positionally and via 'c'");
						return Err(HtmlError::ConflictingContent);
					}
					content = content_fragments(value);
				}
				"_closed" => options.closed = value.is_truthy(),
				"_nl" => options.newline = value.is_truthy(),
				"_bool" => options.boolean_attrs = option_names(value),
				_ if key.starts_with('_') => unknown.push(key),
				_ => {
					attrs.insert(key, value);
				}
			}
		}

		if !unknown.is_empty() {
			unknown.sort();
			tracing::debug!(tag = name, options = ?unknown, "rejected unknown tag options");
			return Err(HtmlError::UnknownOption(unknown));
		}

		Ok(self.render_tag(name, content, attrs, &options))
	}

	/// Escape and concatenate `items`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::HTML;
	///
	/// assert_eq!(HTML.concat(["<a>"]), "&lt;a&gt;");
	/// ```
	pub fn concat<I>(&self, items: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		EMPTY.join(items)
	}

	/// Escape `items` and put each on its own line.
	pub fn lines<I>(&self, items: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		NL.join(items) + NL
	}

	/// Concatenate `items` without escaping any of them.
	pub fn literal<I>(&self, items: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		EMPTY.join_trusted(items)
	}

	/// Wrap escaped `items` in an HTML comment.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::HTML;
	///
	/// assert_eq!(HTML.comment(["foo", "bar"]), "<!-- foobar -->");
	/// ```
	pub fn comment<I>(&self, items: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		COMMENT_OPEN + self.concat(items) + COMMENT_CLOSE
	}

	/// Wrap `items` in a CDATA section without escaping them.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::HTML;
	///
	/// assert_eq!(HTML.cdata(["<foo>"]), "<![CDATA[<foo>]]>");
	/// ```
	pub fn cdata<I>(&self, items: I) -> SafeString
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		CDATA_OPEN + self.literal(items) + CDATA_CLOSE
	}

	/// Start a fluent [`TagBuilder`] for `name`.
	pub fn element(&self, name: impl Into<String>) -> TagBuilder<'_> {
		TagBuilder::new(self, name)
	}
}

/// Content supplied through the `c` keyword.
fn content_fragments(value: AttrValue) -> Vec<Fragment> {
	match value {
		AttrValue::None => Vec::new(),
		AttrValue::List(items) => items
			.into_iter()
			.filter_map(AttrItem::into_kept)
			.map(content_fragment)
			.collect(),
		other => vec![content_fragment(other)],
	}
}

fn content_fragment(value: AttrValue) -> Fragment {
	match value {
		AttrValue::None => Fragment::Absent,
		AttrValue::Text(text) => Fragment::Raw(text),
		AttrValue::Safe(safe) => Fragment::Safe(safe),
		other => Fragment::rendered(&other),
	}
}

/// Names supplied through the `_bool` option.
fn option_names(value: AttrValue) -> Vec<String> {
	match value {
		AttrValue::List(items) => items
			.into_iter()
			.filter_map(AttrItem::into_kept)
			.filter_map(|item| item.as_str().map(str::to_string))
			.collect(),
		other => other.as_str().map(str::to_string).into_iter().collect(),
	}
}
