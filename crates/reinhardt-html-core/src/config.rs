//! Builder configuration
//!
//! [`BuilderConfig`] holds the read-only name sets the tag builder consults:
//! which elements are void, which attributes are boolean, and which
//! attributes are composable along with their separators.
//!
//! Configuration can be loaded from TOML or JSON. Missing keys fall back to
//! the defaults, so a file only has to list what it changes:
//!
//! ```toml
//! boolean_attrs = ["defer", "disabled", "multiple", "readonly", "checked"]
//!
//! [compose_attrs]
//! class = " "
//! style = "; "
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HtmlError, HtmlResult};

/// Elements that can never have content or a closing tag.
///
/// `basefont`, `frame` and `isindex` are deprecated but kept so older markup
/// keeps its self-closing form.
pub const VOID_TAGS: &[&str] = &[
	"area", "base", "basefont", "br", "col", "embed", "frame", "hr", "img", "input", "isindex",
	"link", "meta", "param", "source", "track", "wbr",
];

/// Attributes treated as boolean by default.
pub const BOOLEAN_ATTRS: &[&str] = &["defer", "disabled", "multiple", "readonly"];

/// HTML5 boolean attributes, used by [`BuilderConfig::html5`].
///
/// Boolean attributes in HTML are special: the presence of the attribute alone
/// makes it active, regardless of its value. For example:
/// - `<button disabled="">` is disabled
/// - `<button disabled="false">` is STILL disabled
/// - `<button>` is NOT disabled (attribute absent)
pub const HTML5_BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Composable attributes and the separator used to join their parts.
pub const COMPOSE_ATTRS: &[(&str, &str)] = &[("class", " "), ("style", "; ")];

/// Name sets consulted by [`HtmlBuilder`](crate::HtmlBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
	/// Elements rendered as `<name />` when they have no content.
	pub void_tags: BTreeSet<String>,
	/// Attributes whose truthy values render as the attribute's own name.
	pub boolean_attrs: BTreeSet<String>,
	/// Attributes whose list values are joined with the mapped separator.
	pub compose_attrs: BTreeMap<String, String>,
}

impl Default for BuilderConfig {
	fn default() -> Self {
		Self {
			void_tags: to_set(VOID_TAGS),
			boolean_attrs: to_set(BOOLEAN_ATTRS),
			compose_attrs: COMPOSE_ATTRS
				.iter()
				.map(|(name, sep)| ((*name).to_string(), (*sep).to_string()))
				.collect(),
		}
	}
}

impl BuilderConfig {
	/// Default configuration with the full HTML5 boolean attribute set.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::BuilderConfig;
	///
	/// let config = BuilderConfig::html5();
	/// assert!(config.is_boolean("checked", &[] as &[&str]));
	/// assert!(!BuilderConfig::default().is_boolean("checked", &[] as &[&str]));
	/// ```
	pub fn html5() -> Self {
		Self {
			boolean_attrs: to_set(HTML5_BOOLEAN_ATTRS),
			..Self::default()
		}
	}

	/// Parse configuration from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::BuilderConfig;
	///
	/// let config = BuilderConfig::from_toml_str(r#"boolean_attrs = ["hidden"]"#).unwrap();
	/// assert!(config.is_boolean("hidden", &[] as &[&str]));
	/// assert!(!config.is_boolean("disabled", &[] as &[&str]));
	/// assert!(config.is_void("br"));
	/// ```
	pub fn from_toml_str(s: &str) -> HtmlResult<Self> {
		Ok(toml::from_str(s)?)
	}

	/// Parse configuration from a JSON document.
	pub fn from_json_str(s: &str) -> HtmlResult<Self> {
		Ok(serde_json::from_str(s)?)
	}

	/// Load configuration from a `.toml` or `.json` file.
	pub fn from_path(path: impl AsRef<Path>) -> HtmlResult<Self> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);
		let content = match extension.as_deref() {
			Some("toml") | Some("json") => fs::read_to_string(path)?,
			_ => {
				return Err(HtmlError::InvalidSource(format!(
					"unsupported configuration file: {}",
					path.display()
				)));
			}
		};
		tracing::trace!(path = %path.display(), "loading builder configuration");
		match extension.as_deref() {
			Some("toml") => Self::from_toml_str(&content),
			_ => Self::from_json_str(&content),
		}
	}

	/// Whether `name` is a void element.
	pub fn is_void(&self, name: &str) -> bool {
		self.void_tags.contains(name)
	}

	/// Whether `name` is boolean, either by configuration or via `extra`.
	pub fn is_boolean<S: AsRef<str>>(&self, name: &str, extra: &[S]) -> bool {
		self.boolean_attrs.contains(name) || extra.iter().any(|e| e.as_ref() == name)
	}

	/// Separator for a composable attribute, if `name` is one.
	pub fn separator(&self, name: &str) -> Option<&str> {
		self.compose_attrs.get(name).map(String::as_str)
	}
}

fn to_set(names: &[&str]) -> BTreeSet<String> {
	names.iter().map(|name| (*name).to_string()).collect()
}
