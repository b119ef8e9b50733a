//! HTML escaping
//!
//! The escaper replaces the five markup-significant characters with the
//! entities downstream snapshot tests depend on:
//!
//! | char | entity  |
//! |------|---------|
//! | `&`  | `&amp;` |
//! | `<`  | `&lt;`  |
//! | `>`  | `&gt;`  |
//! | `"`  | `&#34;` |
//! | `'`  | `&#39;` |
//!
//! [`escape`] is the smart entry point: absent values become
//! [`SafeString::EMPTY`], values that are already safe pass through untouched,
//! and everything else is escaped exactly once.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::fragment::Fragment;
use crate::safe_string::SafeString;

/// Characters left untouched by [`url_escape`] besides ASCII alphanumerics.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'_')
	.remove(b'.')
	.remove(b'-')
	.remove(b'~')
	.remove(b'/');

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::escape_str;
///
/// assert_eq!(escape_str("plain"), "plain");
/// assert_eq!(escape_str(r#"<this"that>"#), "&lt;this&#34;that&gt;");
/// assert_eq!(escape_str("it's"), "it&#39;s");
/// ```
pub fn escape_str(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 16);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&#34;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escape a value and return it as a [`SafeString`].
///
/// - absent values (`None`) yield [`SafeString::EMPTY`]
/// - safe values (a [`SafeString`] or a [`Fragment::rendered`] object) are
///   returned unchanged
/// - raw text, numbers and characters are converted to text and escaped
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{SafeString, escape};
///
/// assert_eq!(escape("<b>"), "&lt;b&gt;");
/// assert_eq!(escape(SafeString::new("<b>")), "<b>");
/// assert_eq!(escape(None::<&str>), "");
/// assert_eq!(escape(42), "42");
///
/// // Escaping is idempotent
/// let once = escape(r#"This string is "quoted""#);
/// assert_eq!(escape(once.clone()), once);
/// ```
pub fn escape(value: impl Into<Fragment>) -> SafeString {
	value.into().into_html()
}

/// Percent-encode a string for use inside a URL.
///
/// ASCII alphanumerics and `_ . - ~ /` are left untouched.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::url_escape;
///
/// assert_eq!(url_escape("/path/to file"), "/path/to%20file");
/// assert_eq!(url_escape("a@b.com"), "a%40b.com");
/// ```
pub fn url_escape(s: &str) -> String {
	utf8_percent_encode(s, URL_SAFE).to_string()
}

/// Format into a [`SafeString`], escaping every argument.
///
/// The format string itself is trusted; arguments go through [`escape`]
/// so safe values are not escaped twice.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{SafeString, format_html};
///
/// let out = format_html!("<{}>ello", "<H>");
/// assert_eq!(out, "<&lt;H&gt;>ello");
///
/// let unit = SafeString::new("<em>kg</em>");
/// assert_eq!(format_html!("{} {}", 16, unit), "16 <em>kg</em>");
/// ```
#[macro_export]
macro_rules! format_html {
	($fmt:literal $(, $arg:expr)* $(,)?) => {
		$crate::SafeString::new(::std::format!($fmt $(, $crate::escape($arg))*))
	};
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_is_idempotent(s in "\\PC*") {
			let once = escape(s.as_str());
			let twice = escape(once.clone());
			prop_assert_eq!(once, twice);
		}

		#[test]
		fn prop_escape_removes_markup_chars(s in "\\PC*") {
			let escaped = escape_str(&s);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
			prop_assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_leaves_clean_text(s in "[^<>&\"']*") {
			let escaped = escape_str(&s);
			prop_assert_eq!(escaped.as_ref(), s.as_str());
		}
	}
}
