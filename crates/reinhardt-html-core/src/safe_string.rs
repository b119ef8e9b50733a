//! Strings that are known to be safe HTML
//!
//! A [`SafeString`] is text that never needs escaping again. It is produced by
//! trusting text explicitly ([`SafeString::new`]), by escaping raw text
//! ([`escape`](crate::escape)), or by combining safe pieces. Every operation
//! returns a new value; raw operands are escaped on the way in so the result
//! stays safe.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, AddAssign, Deref};

use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::escape::escape_str;
use crate::fragment::Fragment;

/// Objects that know their own safe HTML representation.
///
/// Implementors are trusted: [`escape`](crate::escape) returns the result of
/// [`to_html`](Renderable::to_html) without escaping it again. This is how
/// nested builder output avoids double-escaping.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{Fragment, Renderable, SafeString, escape};
///
/// struct Badge(u32);
///
/// impl Renderable for Badge {
///     fn to_html(&self) -> SafeString {
///         SafeString::new(format!("<span class=\"badge\">{}</span>", self.0))
///     }
/// }
///
/// let html = escape(Fragment::rendered(&Badge(3)));
/// assert_eq!(html, r#"<span class="badge">3</span>"#);
/// ```
pub trait Renderable {
	/// Return the preferred safe HTML representation of `self`.
	fn to_html(&self) -> SafeString;
}

impl<T: Renderable + ?Sized> Renderable for &T {
	fn to_html(&self) -> SafeString {
		(**self).to_html()
	}
}

/// A string that is safe to emit verbatim as HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeString(Cow<'static, str>);

/// The empty safe string.
pub const EMPTY: SafeString = SafeString::EMPTY;
/// A single space.
pub const SPACE: SafeString = SafeString::from_static(" ");
/// Two spaces.
pub const TAB2: SafeString = SafeString::from_static("  ");
/// Four spaces.
pub const TAB4: SafeString = SafeString::from_static("    ");
/// A newline.
pub const NL: SafeString = SafeString::from_static("\n");
/// Two newlines.
pub const NL2: SafeString = SafeString::from_static("\n\n");
/// A line break tag followed by a newline.
pub const BR: SafeString = SafeString::from_static("<br />\n");
/// Two line break tags, each followed by a newline.
pub const BR2: SafeString = SafeString::from_static("<br />\n<br />\n");

impl SafeString {
	/// The empty safe string, identity for concatenation and joins.
	pub const EMPTY: SafeString = SafeString::from_static("");

	/// Wrap a static string without escaping it.
	pub const fn from_static(s: &'static str) -> Self {
		Self(Cow::Borrowed(s))
	}

	/// Trust `s` as HTML and wrap it verbatim.
	///
	/// Only use this for text known to be safe; it is not escaped.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		Self(Cow::Owned(s.into()))
	}

	/// Trust the textual form of any displayable value.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::SafeString;
	///
	/// assert_eq!(SafeString::from_display(11), "11");
	/// ```
	pub fn from_display(value: impl fmt::Display) -> Self {
		Self::new(value.to_string())
	}

	/// Like [`from_display`](Self::from_display), but `None` becomes
	/// [`SafeString::EMPTY`] rather than any placeholder text.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::SafeString;
	///
	/// assert_eq!(SafeString::from_option(None::<&str>), "");
	/// assert_eq!(SafeString::from_option(Some(">")), ">");
	/// ```
	pub fn from_option<T: fmt::Display>(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::from_display(value),
			None => Self::EMPTY,
		}
	}

	/// Escape `value` unless it is already safe.
	///
	/// Same as [`escape`](crate::escape).
	pub fn escape(value: impl Into<Fragment>) -> Self {
		value.into().into_html()
	}

	/// Get the string content
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert into the underlying String
	pub fn into_string(self) -> String {
		self.0.into_owned()
	}

	/// Append `other`, escaping it first if it is raw.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::SafeString;
	///
	/// let lit = SafeString::new("<other>");
	/// assert_eq!(lit.concat("\""), "<other>&#34;");
	/// ```
	pub fn concat(&self, other: impl Into<Fragment>) -> Self {
		let other = other.into().into_html();
		if other.is_empty() {
			return self.clone();
		}
		if self.is_empty() {
			return other;
		}
		let mut out = String::with_capacity(self.len() + other.len());
		out.push_str(self);
		out.push_str(&other);
		Self::new(out)
	}

	/// Join `items` with `self` as the separator, escaping raw items.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{Fragment, SafeString};
	///
	/// let sep = SafeString::new("<>");
	/// assert_eq!(sep.join(["f", "a"]), "f<>a");
	///
	/// let sep = SafeString::new(", ");
	/// let joined = sep.join([Fragment::from("<A>"), SafeString::new("<b>B</b>").into()]);
	/// assert_eq!(joined, "&lt;A&gt;, <b>B</b>");
	/// ```
	pub fn join<I>(&self, items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Fragment>,
	{
		self.join_trusted(items.into_iter().map(|item| item.into().into_html()))
	}

	/// Join `items` with `self` as the separator, trusting every item.
	///
	/// Nothing is escaped. Only pass items known to be safe HTML.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::NL;
	///
	/// assert_eq!(NL.join_trusted(["<a>", "</a>"]), "<a>\n</a>");
	/// ```
	pub fn join_trusted<I>(&self, items: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut out = String::new();
		for (index, item) in items.into_iter().enumerate() {
			if index > 0 {
				out.push_str(self);
			}
			out.push_str(item.as_ref());
		}
		Self::new(out)
	}

	/// Repeat the string `n` times.
	pub fn repeat(&self, n: usize) -> Self {
		Self::new(self.0.repeat(n))
	}

	/// Replace every occurrence of `from` with `to`.
	///
	/// Both arguments are escaped first unless already safe, so the
	/// result stays safe.
	pub fn replace(&self, from: &str, to: impl Into<Fragment>) -> Self {
		let from = escape_str(from);
		let to = to.into().into_html();
		Self::new(self.0.replace(from.as_ref(), to.as_str()))
	}

	/// Regex substitution that keeps the result safe.
	///
	/// The replacement is escaped unless already safe and is inserted
	/// literally (no `$name` expansion).
	///
	/// # Examples
	///
	/// ```
	/// use regex::Regex;
	/// use reinhardt_html_core::SafeString;
	///
	/// let lit = SafeString::new("This is a <string>");
	/// let re = Regex::new("<str").unwrap();
	/// let out = lit.regex_replace_all(&re, SafeString::new("<b"));
	/// assert_eq!(out, "This is a <bing>");
	/// ```
	pub fn regex_replace_all(&self, re: &Regex, rep: impl Into<Fragment>) -> Self {
		let rep = rep.into().into_html();
		Self::new(re.replace_all(self.as_str(), NoExpand(rep.as_str())).into_owned())
	}

	/// Regex substitution with a replacement closure producing safe HTML.
	pub fn regex_replace_all_with<F>(&self, re: &Regex, mut rep: F) -> Self
	where
		F: FnMut(&Captures<'_>) -> SafeString,
	{
		Self::new(
			re.replace_all(self.as_str(), |caps: &Captures<'_>| rep(caps))
				.into_owned(),
		)
	}
}

impl Renderable for SafeString {
	fn to_html(&self) -> SafeString {
		self.clone()
	}
}

impl Deref for SafeString {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<SafeString> for String {
	fn from(s: SafeString) -> Self {
		s.into_string()
	}
}

impl PartialEq<str> for SafeString {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for SafeString {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl PartialEq<String> for SafeString {
	fn eq(&self, other: &String) -> bool {
		self.as_str() == other.as_str()
	}
}

impl PartialEq<SafeString> for str {
	fn eq(&self, other: &SafeString) -> bool {
		self == other.as_str()
	}
}

impl PartialEq<SafeString> for &str {
	fn eq(&self, other: &SafeString) -> bool {
		*self == other.as_str()
	}
}

impl PartialEq<SafeString> for String {
	fn eq(&self, other: &SafeString) -> bool {
		self.as_str() == other.as_str()
	}
}

impl<T: Into<Fragment>> Add<T> for SafeString {
	type Output = SafeString;

	fn add(self, rhs: T) -> SafeString {
		self.concat(rhs)
	}
}

impl<T: Into<Fragment>> AddAssign<T> for SafeString {
	fn add_assign(&mut self, rhs: T) {
		let rhs = rhs.into().into_html();
		if !rhs.is_empty() {
			self.0.to_mut().push_str(&rhs);
		}
	}
}

impl Add<SafeString> for &str {
	type Output = SafeString;

	fn add(self, rhs: SafeString) -> SafeString {
		SafeString::escape(self).concat(rhs)
	}
}

impl Add<SafeString> for String {
	type Output = SafeString;

	fn add(self, rhs: SafeString) -> SafeString {
		SafeString::escape(self).concat(rhs)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_concat_two_safe_strings() {
		let lit = SafeString::new("This string <>");
		let other = SafeString::new("<other>");
		assert_eq!(lit + other, "This string <><other>");
	}

	#[rstest]
	fn test_raw_on_either_side_is_escaped() {
		let other = SafeString::new("<other>");
		assert_eq!("\"" + other.clone(), "&#34;<other>");
		assert_eq!(other + "\"", "<other>&#34;");
	}

	#[rstest]
	fn test_add_assign_escapes() {
		let mut out = SafeString::new("<p>");
		out += "a < b";
		out += SafeString::new("</p>");
		assert_eq!(out, "<p>a &lt; b</p>");
	}

	#[rstest]
	fn test_repeat() {
		assert_eq!(SafeString::new("<>").repeat(3), "<><><>");
	}

	#[rstest]
	fn test_join_escapes_raw_items() {
		let sep = SafeString::new("<>");
		assert_eq!(sep.join(["f", "a"]), "f<>a");
		assert_eq!(sep.join(["<f>"]), "&lt;f&gt;");
	}

	#[rstest]
	fn test_join_trusted_does_not_escape() {
		assert_eq!(EMPTY.join_trusted(["<a>", "<b>"]), "<a><b>");
	}

	#[rstest]
	fn test_join_empty_is_empty() {
		assert_eq!(NL.join(Vec::<&str>::new()), EMPTY);
	}

	#[rstest]
	fn test_from_option_none_is_empty() {
		assert_eq!(SafeString::from_option(None::<i32>), EMPTY);
		assert_eq!(SafeString::from_option(Some(11)), "11");
	}

	#[rstest]
	fn test_replace_keeps_result_safe() {
		let text = SafeString::new("a\nb");
		assert_eq!(text.replace("\n", BR), "a<br />\nb");
		assert_eq!(text.replace("\n", "<hr>"), "a&lt;hr&gt;b");
	}

	#[rstest]
	fn test_regex_replace_all_does_not_expand() {
		let re = Regex::new("x").unwrap();
		let out = SafeString::new("axb").regex_replace_all(&re, "$0");
		assert_eq!(out, "a$0b");
	}

	#[rstest]
	fn test_constants() {
		assert_eq!(BR2, "<br />\n<br />\n");
		assert_eq!(NL2, NL.repeat(2));
		assert_eq!(TAB4, TAB2.repeat(2));
		assert_eq!(SPACE.len(), 1);
	}

	#[rstest]
	fn test_serialization_is_transparent() {
		let safe = SafeString::new("<p>Test</p>");
		let json = serde_json::to_string(&safe).unwrap();
		assert_eq!(json, "\"<p>Test</p>\"");
		let back: SafeString = serde_json::from_str(&json).unwrap();
		assert_eq!(back, safe);
	}

	#[rstest]
	fn test_display() {
		let safe = SafeString::new("<i>Italic</i>");
		assert_eq!(format!("{}", safe), "<i>Italic</i>");
	}
}
