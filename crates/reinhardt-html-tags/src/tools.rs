//! Text-to-markup tools, button forms and `mailto:` links
//!
//! ```
//! use reinhardt_html_tags::{nl2br, text_to_html};
//!
//! assert_eq!(nl2br("A B\nC D\r\n\r\nE F"), "A B<br />\nC D<br />\n<br />\nE F");
//! assert_eq!(
//!     text_to_html("A paragraph\n\nand another one!", false),
//!     "<p>A paragraph</p>\n\n<p>and another one!</p>"
//! );
//! ```

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Regex, RegexBuilder};
use reinhardt_html_core::{
	AttrValue, Attrs, BR, EMPTY, Fragment, HTML, HtmlResult, NL, NL2, NO_CONTENT, SafeString,
	TagOptions, attrs, escape, escape_str,
};

use crate::form::hidden;

static NEWLINES: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("Invalid newline regex pattern"));
static PARAGRAPH_BREAK: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\n{2,}").expect("Invalid paragraph regex pattern"));

/// Leading text, scheme or `www.`, host with port, path, query and anchor, trailing text.
static AUTO_LINK_URL: Lazy<Regex> = Lazy::new(|| {
	Regex::new(concat!(
		r"(<\w+.*?>|[^=!:'\x22/]|^)",
		r"((?:https?://)|(?:www\.))",
		r"([-\w]+(?:\.[-\w]+)*(?::\d+)?",
		r"(?:/(?:(?:[~\w+%-]|(?:[,.;:][^\s$]))+)?)*",
		r"(?:\?[\w+/%&=.;-]+)?(?:#[\w-]*)?)",
		r"([.,\x22'?!;:]|\s|<|\]|$)",
	))
	.expect("Invalid auto-link URL regex pattern")
});
static AUTO_LINK_EMAIL: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"([\w.!#$%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)")
		.expect("Invalid auto-link email regex pattern")
});
static ANCHOR_START: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?i)^<a\s").expect("Invalid anchor regex pattern"));

/// Query-string encoding for `mailto:` options; spaces become `%20`.
const MAILTO_QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-');

/// Escape `text` and normalize `\r\n` and `\r` to `\n`.
fn normalized(text: Fragment) -> SafeString {
	escape(text).regex_replace_all(&NEWLINES, NL)
}

/// Replace every line break with `<br />` and a newline.
///
/// Raw text is escaped first; safe text keeps its markup. An absent value
/// gives an empty string.
pub fn nl2br(text: impl Into<Fragment>) -> SafeString {
	let text = text.into();
	if text.is_absent() {
		return EMPTY;
	}
	normalized(text).replace("\n", BR)
}

/// Wrap blank-line separated blocks in `<p>` tags.
///
/// With `preserve_lines` the single line breaks inside a paragraph become
/// `<br />`.
pub fn text_to_html(text: impl Into<Fragment>, preserve_lines: bool) -> SafeString {
	let text = text.into();
	if text.is_absent() {
		return EMPTY;
	}
	let text = normalized(text);
	let paragraphs = PARAGRAPH_BREAK.split(text.as_str()).map(|para| {
		let mut para = SafeString::new(para);
		if preserve_lines {
			para = para.replace("\n", BR);
		}
		HTML.render_tag("p", vec![Fragment::Safe(para)], Attrs::new(), &TagOptions::default())
	});
	NL2.join_trusted(paragraphs)
}

/// What [`highlight`] looks for.
#[derive(Debug, Clone)]
pub enum Phrase {
	Text(String),
	/// Any of several phrases.
	Any(Vec<String>),
	/// A ready-made pattern. It runs over raw text before escaping and over
	/// safe text as markup.
	Regex(Regex),
}

impl From<&str> for Phrase {
	fn from(phrase: &str) -> Self {
		Self::Text(phrase.to_string())
	}
}

impl From<String> for Phrase {
	fn from(phrase: String) -> Self {
		Self::Text(phrase)
	}
}

impl From<Vec<&str>> for Phrase {
	fn from(phrases: Vec<&str>) -> Self {
		Self::Any(phrases.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for Phrase {
	fn from(phrases: [&str; N]) -> Self {
		Self::Any(phrases.into_iter().map(str::to_string).collect())
	}
}

impl From<Regex> for Phrase {
	fn from(re: Regex) -> Self {
		Self::Regex(re)
	}
}

impl Phrase {
	/// Compiled pattern, or `None` when there is nothing to look for.
	///
	/// Literal phrases searched in trusted markup are escaped first so that
	/// `&` finds `&amp;`.
	fn compile(self, case_sensitive: bool, in_markup: bool) -> Option<Regex> {
		let parts: Vec<String> = match self {
			Self::Regex(re) => return Some(re),
			Self::Text(text) => vec![text],
			Self::Any(texts) => texts,
		};
		let pattern = parts
			.iter()
			.filter(|part| !part.is_empty())
			.map(|part| {
				if in_markup {
					regex::escape(&escape_str(part))
				} else {
					regex::escape(part)
				}
			})
			.collect::<Vec<_>>()
			.join("|");
		if pattern.is_empty() {
			return None;
		}
		match RegexBuilder::new(&pattern)
			.case_insensitive(!case_sensitive)
			.build()
		{
			Ok(re) => Some(re),
			Err(err) => {
				tracing::warn!(%err, "highlight pattern rejected");
				None
			}
		}
	}
}

/// Wrap every occurrence of `phrase` in `<strong class="highlight">`.
///
/// Raw text is searched before escaping, so a match never lands inside an
/// entity. Safe text is searched as markup. The class can be replaced or
/// removed through `"class" => ...` in `attrs`; other attributes go onto
/// each `<strong>` as well.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::highlight;
///
/// let out = highlight("The cat in the hat.", ["cat", "hat"], false, attrs! {}).unwrap();
/// assert_eq!(
///     out,
///     r#"The <strong class="highlight">cat</strong> in the <strong class="highlight">hat</strong>."#
/// );
/// ```
pub fn highlight(
	text: impl Into<Fragment>,
	phrase: impl Into<Phrase>,
	case_sensitive: bool,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	let (source, trusted) = match text.into() {
		Fragment::Absent => return Ok(EMPTY),
		Fragment::Raw(raw) => (raw, false),
		Fragment::Safe(safe) => (safe.into_string(), true),
	};
	let piece = |s: &str| -> Fragment {
		if trusted {
			Fragment::Safe(SafeString::new(s))
		} else {
			Fragment::raw(s)
		}
	};
	let phrase: Phrase = phrase.into();
	let Some(re) = phrase.compile(case_sensitive, trusted) else {
		return Ok(piece(&source).into_html());
	};
	attrs.set_default("class", "highlight");

	let mut out = EMPTY;
	let mut last = 0;
	for found in re.find_iter(&source) {
		out += piece(&source[last..found.start()]);
		out += HTML.tag("strong", [piece(found.as_str())], attrs.clone())?;
		last = found.end();
	}
	out += piece(&source[last..]);
	Ok(out)
}

/// How [`MailTo`] hides the address from harvesters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailEncoding {
	/// Character entities for the protocol, percent escapes for the address.
	Hex,
	/// The whole link is written by an inline script.
	Javascript,
}

/// A `mailto:` link.
///
/// ```
/// use reinhardt_html_tags::MailTo;
///
/// let link = MailTo::new("wolfgang@stufenlos.net")
///     .replace_at("(at)")
///     .replace_dot("(dot)")
///     .render()
///     .unwrap();
/// assert_eq!(link, r#"<a href="mailto:wolfgang@stufenlos.net">wolfgang(at)stufenlos(dot)net</a>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MailTo {
	address: String,
	name: Fragment,
	cc: Option<String>,
	bcc: Option<String>,
	subject: Option<String>,
	body: Option<String>,
	replace_at: Option<String>,
	replace_dot: Option<String>,
	encode: Option<MailEncoding>,
	attrs: Attrs,
}

impl MailTo {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			..Self::default()
		}
	}

	/// Link text; defaults to the (obfuscated) address.
	pub fn name(mut self, name: impl Into<Fragment>) -> Self {
		self.name = name.into();
		self
	}

	pub fn cc(mut self, cc: impl Into<String>) -> Self {
		self.cc = Some(cc.into());
		self
	}

	pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
		self.bcc = Some(bcc.into());
		self
	}

	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());
		self
	}

	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	/// Shown instead of `@` in the link text. The href keeps the real address.
	pub fn replace_at(mut self, replacement: impl Into<String>) -> Self {
		self.replace_at = Some(replacement.into());
		self
	}

	/// Shown instead of `.` in the link text.
	pub fn replace_dot(mut self, replacement: impl Into<String>) -> Self {
		self.replace_dot = Some(replacement.into());
		self
	}

	pub fn encode(mut self, encoding: MailEncoding) -> Self {
		self.encode = Some(encoding);
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}

	fn query(&self) -> String {
		[
			("cc", &self.cc),
			("bcc", &self.bcc),
			("subject", &self.subject),
			("body", &self.body),
		]
		.into_iter()
		.filter_map(|(key, value)| {
			value
				.as_deref()
				.filter(|v| !v.is_empty())
				.map(|v| format!("{key}={}", utf8_percent_encode(v, MAILTO_QUERY)))
		})
		.collect::<Vec<_>>()
		.join("&")
	}

	fn display_address(&self) -> String {
		let mut shown = self.address.clone();
		if let Some(at) = &self.replace_at {
			shown = shown.replace('@', at);
		}
		if let Some(dot) = &self.replace_dot {
			shown = shown.replace('.', dot);
		}
		shown
	}

	pub fn render(self) -> HtmlResult<SafeString> {
		let hex = self.encode == Some(MailEncoding::Hex);
		let shown = self.display_address();

		let mut href = if hex {
			SafeString::new(decimal_entities("mailto:")) + SafeString::new(hex_address(&self.address))
		} else {
			SafeString::from_static("mailto:") + self.address.as_str()
		};
		let query = self.query();
		if !query.is_empty() {
			href = href + SafeString::from_static("?") + query;
		}

		let label = match self.name {
			Fragment::Absent => None,
			Fragment::Raw(ref s) if s.is_empty() => None,
			Fragment::Safe(ref s) if s.is_empty() => None,
			name => Some(name),
		};
		let label = label.unwrap_or_else(|| {
			if hex {
				Fragment::Safe(SafeString::new(decimal_entities(&shown)))
			} else {
				Fragment::Raw(shown)
			}
		});

		let mut attrs = self.attrs;
		attrs.insert("href", href);
		let tag = HTML.tag("a", [label], attrs)?;

		if self.encode != Some(MailEncoding::Javascript) {
			return Ok(tag);
		}
		let script = percent_all(&format!("document.write('{tag}');"));
		HTML.tag(
			"script",
			[SafeString::new(format!(
				"\n//<![CDATA[\neval(unescape('{script}'))\n//]]>\n"
			))],
			attrs! { "type" => "text/javascript" },
		)
	}
}

/// [`MailTo`] with just an address and link text.
pub fn mail_to(address: &str, name: impl Into<Fragment>) -> HtmlResult<SafeString> {
	MailTo::new(address).name(name).render()
}

/// `&#NN;` for every character.
fn decimal_entities(s: &str) -> String {
	s.chars().map(|c| format!("&#{};", u32::from(c))).collect()
}

/// `%xx` for word characters, markup-escaped for the rest.
fn hex_address(s: &str) -> String {
	s.chars().fold(String::new(), |mut out, c| {
		if c.is_alphanumeric() || c == '_' {
			out.push_str(&format!("%{:x}", u32::from(c)));
		} else {
			let mut buf = [0; 4];
			out.push_str(&escape_str(c.encode_utf8(&mut buf)));
		}
		out
	})
}

/// `%xx` for every character.
fn percent_all(s: &str) -> String {
	s.chars().map(|c| format!("%{:x}", u32::from(c))).collect()
}

/// A form holding a single button that submits to `url`.
///
/// Use it for actions that are not safe as a plain GET link. The form gets
/// class `button-to`; `attrs` go onto the inner `<input>`. `PUT` and
/// `DELETE` are posted with a hidden `_method` field. The case of `method`
/// is kept on the form, and an empty method posts as `POST`. Passing
/// `"type" => "image"` together with a `src` renders an image button whose
/// `alt` defaults to `name`.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::button_to;
///
/// let out = button_to("Edit", "/feeds/edit/3", "", attrs! {}).unwrap();
/// assert_eq!(
///     out,
///     r#"<form action="/feeds/edit/3" class="button-to" method="POST"><div><input type="submit" value="Edit" /></div></form>"#
/// );
/// ```
pub fn button_to(name: &str, url: &str, method: &str, mut attrs: Attrs) -> HtmlResult<SafeString> {
	let upper = method.to_ascii_uppercase();
	let mut content = Vec::with_capacity(2);
	if matches!(upper.as_str(), "PUT" | "DELETE") {
		tracing::debug!(method, "emulating button method with a hidden _method field");
		content.push(hidden("_method", method, attrs! {})?);
	}
	let form_method = match method {
		"put" | "delete" => "post",
		_ if matches!(upper.as_str(), "GET" | "POST") => method,
		_ => "POST",
	};

	let label = if name.is_empty() { url } else { name };
	let is_image = attrs.get("type").and_then(AttrValue::as_str) == Some("image")
		&& attrs.get("src").is_some_and(AttrValue::is_truthy);
	attrs.insert("value", label);
	if is_image {
		attrs.set_default("alt", label);
	} else {
		attrs.insert("type", "submit");
	}
	content.push(HTML.tag("input", NO_CONTENT, attrs)?);

	let div = HTML.tag("div", content, Attrs::new())?;
	HTML.tag(
		"form",
		[div],
		attrs! { "action" => url, "class_" => "button-to", "method" => form_method },
	)
}

/// What [`auto_link`] turns into links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoLink {
	#[default]
	All,
	EmailAddresses,
	Urls,
}

/// Turn URLs and email addresses in `text` into links.
///
/// Raw text is escaped first. `attrs` go onto the generated URL anchors;
/// text already inside an `<a>` tag is left alone.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::{AutoLink, auto_link};
///
/// let out = auto_link("Go to http://www.rust-lang.org and write to me@example.com", AutoLink::All, attrs! {}).unwrap();
/// assert_eq!(
///     out,
///     r#"Go to <a href="http://www.rust-lang.org">http://www.rust-lang.org</a> and write to <a href="mailto:me@example.com">me@example.com</a>"#
/// );
/// ```
pub fn auto_link(text: impl Into<Fragment>, link: AutoLink, attrs: Attrs) -> HtmlResult<SafeString> {
	let text = escape(text);
	if text.is_empty() {
		return Ok(EMPTY);
	}
	match link {
		AutoLink::All => link_urls(&link_email_addresses(&text), &attrs),
		AutoLink::EmailAddresses => Ok(link_email_addresses(&text)),
		AutoLink::Urls => link_urls(&text, &attrs),
	}
}

fn link_urls(text: &SafeString, attrs: &Attrs) -> HtmlResult<SafeString> {
	let mut failure = None;
	let out = text.regex_replace_all_with(&AUTO_LINK_URL, |caps| {
		let (before, prefix, link, after) = (&caps[1], &caps[2], &caps[3], &caps[4]);
		if ANCHOR_START.is_match(before) {
			return SafeString::new(&caps[0]);
		}
		let shown = SafeString::new(format!("{prefix}{link}"));
		let href = if prefix == "www." {
			SafeString::new(format!("http://www.{link}"))
		} else {
			shown.clone()
		};
		let mut attrs = attrs.clone();
		attrs.insert("href", href);
		match HTML.tag("a", [shown], attrs) {
			Ok(anchor) => SafeString::new(before) + anchor + SafeString::new(after),
			Err(err) => {
				if failure.is_none() {
					failure = Some(err);
				}
				SafeString::new(&caps[0])
			}
		}
	});
	match failure {
		Some(err) => Err(err),
		None => Ok(out),
	}
}

fn link_email_addresses(text: &SafeString) -> SafeString {
	text.regex_replace_all_with(&AUTO_LINK_EMAIL, |caps| {
		SafeString::new(format!(r#"<a href="mailto:{0}">{0}</a>"#, &caps[1]))
	})
}
