//! Attribute values, attribute maps, and the attribute pipeline
//!
//! A tag call collects its attributes into an [`Attrs`] map. Before rendering
//! the map is normalized by [`optimize_attrs`]:
//!
//! 1. keys with an absent value are dropped
//! 2. names are decoded (`class_` → `class`, `data_foo` → `data-foo`)
//! 3. list values of composable attributes are joined with their separator
//! 4. boolean attributes become `name="name"` or disappear
//!
//! [`render_attrs`] then writes the normalized map as ` key="value"` pairs in
//! sorted key order.

use std::borrow::Cow;
use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::BuilderConfig;
use crate::escape::{escape, escape_str};
use crate::fragment::Fragment;
use crate::safe_string::{Renderable, SPACE, SafeString};

/// The value of a single attribute before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AttrValue {
	/// Omit the attribute.
	#[default]
	None,
	Bool(bool),
	Int(i64),
	Float(f64),
	/// Raw text, escaped when rendered.
	Text(String),
	/// Trusted markup, rendered verbatim.
	Safe(SafeString),
	/// Parts of a composable attribute such as `class` or `style`.
	List(Vec<AttrItem>),
}

/// One element of an [`AttrValue::List`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttrItem {
	/// Always kept.
	Plain(AttrValue),
	/// Kept only when the flag is truthy.
	Flagged(AttrValue, AttrValue),
}

impl AttrValue {
	/// Whether this value is [`AttrValue::None`].
	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Ordinary truthiness: absent, `false`, zero, empty text and empty
	/// lists are falsy, everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::None => false,
			Self::Bool(b) => *b,
			Self::Int(n) => *n != 0,
			Self::Float(f) => *f != 0.0,
			Self::Text(s) => !s.is_empty(),
			Self::Safe(s) => !s.is_empty(),
			Self::List(items) => !items.is_empty(),
		}
	}

	/// Textual value if this is plain or trusted text.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			Self::Safe(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl Renderable for AttrValue {
	/// Escaped attribute text.
	///
	/// Booleans render as `true`/`false`. A list outside a composable
	/// attribute renders its kept parts separated by a space.
	fn to_html(&self) -> SafeString {
		match self {
			Self::None => SafeString::EMPTY,
			Self::Bool(b) => SafeString::from_static(if *b { "true" } else { "false" }),
			Self::Int(n) => SafeString::from_display(n),
			Self::Float(f) => SafeString::from_display(f),
			Self::Text(s) => escape(s.as_str()),
			Self::Safe(s) => s.clone(),
			Self::List(items) => SPACE.join_trusted(items.iter().filter_map(AttrItem::kept)),
		}
	}
}

impl AttrItem {
	/// Rendered part, or `None` when a flagged item is switched off.
	fn kept(&self) -> Option<SafeString> {
		match self {
			Self::Plain(value) => Some(value.to_html()),
			Self::Flagged(value, flag) if flag.is_truthy() => Some(value.to_html()),
			Self::Flagged(..) => None,
		}
	}

	/// Owned value, or `None` when a flagged item is switched off.
	pub(crate) fn into_kept(self) -> Option<AttrValue> {
		match self {
			Self::Plain(value) => Some(value),
			Self::Flagged(value, flag) if flag.is_truthy() => Some(value),
			Self::Flagged(..) => None,
		}
	}
}

impl From<&str> for AttrValue {
	fn from(s: &str) -> Self {
		Self::Text(s.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(s: String) -> Self {
		Self::Text(s)
	}
}

impl From<&String> for AttrValue {
	fn from(s: &String) -> Self {
		Self::Text(s.clone())
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(s: Cow<'_, str>) -> Self {
		Self::Text(s.into_owned())
	}
}

impl From<SafeString> for AttrValue {
	fn from(s: SafeString) -> Self {
		Self::Safe(s)
	}
}

impl From<&SafeString> for AttrValue {
	fn from(s: &SafeString) -> Self {
		Self::Safe(s.clone())
	}
}

impl From<Fragment> for AttrValue {
	fn from(fragment: Fragment) -> Self {
		match fragment {
			Fragment::Absent => Self::None,
			Fragment::Raw(text) => Self::Text(text),
			Fragment::Safe(safe) => Self::Safe(safe),
		}
	}
}

impl From<bool> for AttrValue {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<f32> for AttrValue {
	fn from(f: f32) -> Self {
		Self::Float(f64::from(f))
	}
}

impl From<f64> for AttrValue {
	fn from(f: f64) -> Self {
		Self::Float(f)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(n: $ty) -> Self {
					i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Int)
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::None, Into::into)
	}
}

impl<T: Into<AttrItem>> From<Vec<T>> for AttrValue {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<AttrItem>, const N: usize> From<[T; N]> for AttrValue {
	fn from(items: [T; N]) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl From<AttrValue> for AttrItem {
	fn from(value: AttrValue) -> Self {
		Self::Plain(value)
	}
}

impl<V: Into<AttrValue>, F: Into<AttrValue>> From<(V, F)> for AttrItem {
	fn from((value, flag): (V, F)) -> Self {
		Self::Flagged(value.into(), flag.into())
	}
}

macro_rules! impl_item_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrItem {
				fn from(value: $ty) -> Self {
					Self::Plain(value.into())
				}
			}
		)*
	};
}

impl_item_from!(
	&str, String, &String, SafeString, &SafeString, bool, f32, f64, i8, i16, i32, i64, u8, u16,
	u32, u64, usize,
);

/// Insertion-ordered attribute map.
///
/// Order only matters while building; [`render_attrs`] sorts by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs(IndexMap<String, AttrValue>);

impl Attrs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{Attrs, render_attrs};
	///
	/// let attrs = Attrs::new().with("b", "2").with("a", 1);
	/// assert_eq!(render_attrs(&attrs), r#" a="1" b="2""#);
	/// ```
	pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Insert or replace a value, returning the previous one.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
		self.0.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.0.get(key)
	}

	/// Remove a key, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		self.0.shift_remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Insert `value` only if `key` is not present yet.
	pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
		self.0.entry(key.into()).or_insert_with(|| value.into());
	}

	pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttrValue> {
		self.0.iter()
	}

	pub fn keys(&self) -> indexmap::map::Keys<'_, String, AttrValue> {
		self.0.keys()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Merge `other` into `self`; later values replace earlier ones.
	pub fn extend(&mut self, other: Attrs) {
		self.0.extend(other.0);
	}
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl IntoIterator for Attrs {
	type Item = (String, AttrValue);
	type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Attrs {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Build an [`Attrs`] map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttrValue, attrs};
///
/// let attrs = attrs! { "href" => "/", "class_" => vec!["a", "b"], "title" => None::<&str> };
/// assert_eq!(attrs.len(), 3);
/// assert_eq!(attrs.get("href"), Some(&AttrValue::from("/")));
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attrs::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut attrs = $crate::Attrs::new();
		$(
			attrs.insert($key, $value);
		)+
		attrs
	}};
}

/// Decode an underscore-encoded attribute name.
///
/// Trailing underscores are stripped, then every remaining underscore
/// becomes a hyphen.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::decode_attr_name;
///
/// assert_eq!(decode_attr_name("class_"), "class");
/// assert_eq!(decode_attr_name("data_foo_bar"), "data-foo-bar");
/// assert_eq!(decode_attr_name("_data_foo_bar_"), "-data-foo-bar");
/// assert_eq!(decode_attr_name("href"), "href");
/// ```
pub fn decode_attr_name(key: &str) -> Cow<'_, str> {
	let trimmed = key.trim_end_matches('_');
	if trimmed.contains('_') {
		Cow::Owned(trimmed.replace('_', "-"))
	} else {
		Cow::Borrowed(trimmed)
	}
}

/// Normalize an attribute map.
///
/// `extra_boolean` names are treated as boolean attributes in addition to
/// the ones in `config`. When both an underscore-encoded key and its plain
/// form are present, the encoded key's value wins.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{AttrValue, BuilderConfig, attrs, optimize_attrs};
///
/// let config = BuilderConfig::default();
/// let attrs = attrs! {
///     "class_" => vec![("a", false), ("b", true)],
///     "disabled" => true,
///     "title" => None::<&str>,
/// };
/// let optimized = optimize_attrs(attrs, &config, &[] as &[&str]);
///
/// assert_eq!(optimized.get("class").and_then(AttrValue::as_str), Some("b"));
/// assert_eq!(optimized.get("disabled").and_then(AttrValue::as_str), Some("disabled"));
/// assert!(!optimized.contains_key("title"));
/// ```
pub fn optimize_attrs<S: AsRef<str>>(attrs: Attrs, config: &BuilderConfig, extra_boolean: &[S]) -> Attrs {
	let mut out = Attrs::new();
	let mut renamed = HashSet::new();

	for (key, value) in attrs {
		if value.is_none() {
			continue;
		}

		let name = decode_attr_name(&key).into_owned();
		if name != key {
			tracing::trace!(from = %key, to = %name, "renamed attribute");
			renamed.insert(name.clone());
		} else if renamed.contains(&name) {
			continue;
		}

		let value = match (config.separator(&name), value) {
			(Some(sep), AttrValue::List(items)) => {
				let parts: Vec<SafeString> = items.iter().filter_map(AttrItem::kept).collect();
				if parts.is_empty() {
					out.remove(&name);
					continue;
				}
				AttrValue::Safe(SafeString::new(sep).join_trusted(parts))
			}
			(_, value) => value,
		};

		if config.is_boolean(&name, extra_boolean) {
			if !value.is_truthy() {
				out.remove(&name);
				continue;
			}
			let value = AttrValue::Text(name.clone());
			out.insert(name, value);
			continue;
		}

		out.insert(name, value);
	}

	out
}

/// Render attributes as ` key="value"` pairs sorted by key.
///
/// Keys and values are escaped. Absent values are skipped, so an
/// unoptimized map still renders sensibly. An empty map renders as
/// [`SafeString::EMPTY`].
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{attrs, render_attrs};
///
/// let a = render_attrs(&attrs! { "b" => "2", "a" => "1" });
/// let b = render_attrs(&attrs! { "a" => "1", "b" => "2" });
/// assert_eq!(a, r#" a="1" b="2""#);
/// assert_eq!(a, b);
/// ```
pub fn render_attrs(attrs: &Attrs) -> SafeString {
	let mut pairs: Vec<(&String, &AttrValue)> =
		attrs.iter().filter(|(_, value)| !value.is_none()).collect();
	if pairs.is_empty() {
		return SafeString::EMPTY;
	}
	pairs.sort_by(|a, b| a.0.cmp(b.0));

	let mut out = String::new();
	for (key, value) in pairs {
		out.push(' ');
		out.push_str(&escape_str(key));
		out.push_str("=\"");
		out.push_str(&value.to_html());
		out.push('"');
	}
	SafeString::new(out)
}
