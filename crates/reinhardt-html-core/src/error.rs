//! Error types for the HTML builder.
//!
//! Every error here is a usage error surfaced synchronously by the call that
//! misused the builder, or a failure while loading a [`BuilderConfig`].
//! Escaping and rendering never fail.
//!
//! [`BuilderConfig`]: crate::config::BuilderConfig

use thiserror::Error;

/// Errors that can occur while building markup or loading builder configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HtmlError {
	/// One or more `_`-prefixed keyword arguments are not builder options.
	///
	/// The keys are sorted so the message is stable.
	#[error("unknown option(s): {}", .0.join(", "))]
	UnknownOption(Vec<String>),

	/// Content was supplied positionally and through the `c` keyword at once.
	#[error("content cannot be passed both positionally and via the 'c' keyword")]
	ConflictingContent,

	/// A helper received a keyword argument it reserves for itself.
	#[error("argument not allowed: {0}")]
	UnsupportedArgument(String),

	/// I/O operation failed while reading a configuration file.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML configuration could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// JSON configuration could not be parsed.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The configuration source is not one the loader understands.
	#[error("Invalid configuration source: {0}")]
	InvalidSource(String),
}

/// Result type alias for builder operations.
pub type HtmlResult<T> = Result<T, HtmlError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_option_lists_every_key() {
		let err = HtmlError::UnknownOption(vec!["_bogus".to_string(), "_closd".to_string()]);
		assert_eq!(err.to_string(), "unknown option(s): _bogus, _closd");
	}

	#[rstest]
	fn test_unsupported_argument_message() {
		let err = HtmlError::UnsupportedArgument("href".to_string());
		assert_eq!(err.to_string(), "argument not allowed: href");
	}

	#[rstest]
	fn test_json_error_converts() {
		let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: HtmlError = parse_err.into();
		assert!(matches!(err, HtmlError::Json(_)));
	}
}
