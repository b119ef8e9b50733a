//! Content items: raw text, safe HTML, or nothing
//!
//! [`Fragment`] is what every escaping entry point accepts. Conversions from
//! the common text and number types produce [`Fragment::Raw`]; conversions
//! from [`SafeString`] produce [`Fragment::Safe`]; `None` becomes
//! [`Fragment::Absent`].

use std::borrow::Cow;

use crate::escape::escape_str;
use crate::safe_string::{Renderable, SafeString};

/// A piece of content that is either raw text, already-safe HTML, or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fragment {
	/// No value; escapes to [`SafeString::EMPTY`].
	#[default]
	Absent,
	/// Plain text that must be escaped before it reaches markup.
	Raw(String),
	/// HTML that is emitted verbatim.
	Safe(SafeString),
}

impl Fragment {
	/// Wrap raw text.
	pub fn raw(text: impl Into<String>) -> Self {
		Self::Raw(text.into())
	}

	/// Capture the safe representation of a [`Renderable`] value.
	pub fn rendered<R: Renderable + ?Sized>(value: &R) -> Self {
		Self::Safe(value.to_html())
	}

	/// Whether this fragment holds no value.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Resolve into safe HTML, escaping raw text exactly once.
	pub fn into_html(self) -> SafeString {
		match self {
			Self::Absent => SafeString::EMPTY,
			Self::Safe(safe) => safe,
			Self::Raw(text) => {
				let escaped = match escape_str(&text) {
					Cow::Owned(escaped) => Some(escaped),
					Cow::Borrowed(_) => None,
				};
				SafeString::new(escaped.unwrap_or(text))
			}
		}
	}
}

impl From<&str> for Fragment {
	fn from(s: &str) -> Self {
		Self::Raw(s.to_string())
	}
}

impl From<String> for Fragment {
	fn from(s: String) -> Self {
		Self::Raw(s)
	}
}

impl From<&String> for Fragment {
	fn from(s: &String) -> Self {
		Self::Raw(s.clone())
	}
}

impl From<Cow<'_, str>> for Fragment {
	fn from(s: Cow<'_, str>) -> Self {
		Self::Raw(s.into_owned())
	}
}

impl From<char> for Fragment {
	fn from(c: char) -> Self {
		Self::Raw(c.to_string())
	}
}

impl From<SafeString> for Fragment {
	fn from(s: SafeString) -> Self {
		Self::Safe(s)
	}
}

impl From<&SafeString> for Fragment {
	fn from(s: &SafeString) -> Self {
		Self::Safe(s.clone())
	}
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Fragment {
				fn from(n: $ty) -> Self {
					Self::Raw(n.to_string())
				}
			}
		)*
	};
}

impl_from_number!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
