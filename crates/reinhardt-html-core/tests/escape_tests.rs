//! Escaping and SafeString tests
//!
//! Tests for double-escape protection and literal-safe string operations

use regex::Regex;
use reinhardt_html_core::{Fragment, HTML, Renderable, SafeString, escape, format_html};

#[test]
fn test_double_escape() {
	// Test: Escaping an escaped value is a no-op
	let quoted = escape(r#"This string is "quoted""#);
	assert_eq!(quoted, "This string is &#34;quoted&#34;");
	let dbl_quoted = escape(quoted.clone());
	assert_eq!(quoted, dbl_quoted);
}

#[test]
fn test_escape_spec_table() {
	// Test: All five markup characters use their exact entities
	assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&#34;&#39;");
	assert_eq!(escape(r#"<this"that>"#), "&lt;this&#34;that&gt;");
}

#[test]
fn test_literal_concatenation() {
	// Test: Raw operands are escaped, safe operands are not
	let lit = SafeString::new("This string <>");
	let other = SafeString::new("<other>");
	assert_eq!(lit + other.clone(), "This string <><other>");
	assert_eq!("\"" + other.clone(), "&#34;<other>");
	assert_eq!(other + "\"", "<other>&#34;");
}

#[test]
fn test_format_html_mixes_safe_and_raw() {
	// Test: Formatting escapes raw arguments only
	let lit = SafeString::new("This string <>");
	let unq = "This has <crap>";
	assert_eq!(
		format_html!("{} and {}", lit, unq),
		"This string <> and This has &lt;crap&gt;"
	);
	assert_eq!(format_html!("<{}>", 5), "<5>");
}

#[test]
fn test_builder_call_escapes() {
	// Test: The builder's concat form escapes its input
	assert_eq!(HTML.concat(["<a>"]), "&lt;a&gt;");
}

#[test]
fn test_lit_sub() {
	// Test: Regex substitution keeps the result safe
	let lit = SafeString::new("This is a <string>");
	let re = Regex::new("<str").unwrap();
	assert_eq!(
		lit.regex_replace_all(&re, SafeString::new("<b")),
		"This is a <bing>"
	);

	let unlit = escape("This is also a <string>");
	let re = Regex::new("a &lt;str").unwrap();
	assert_eq!(
		unlit.regex_replace_all(&re, "a <b> <b"),
		"This is also a &lt;b&gt; &lt;bing&gt;"
	);
}

#[test]
fn test_regex_replace_with_closure() {
	// Test: The closure form builds safe markup from captures
	let text = escape("call 555-1234 or 555-9876");
	let re = Regex::new(r"\d{3}-\d{4}").unwrap();
	let out = text.regex_replace_all_with(&re, |caps| {
		format_html!("<em>{}</em>", &caps[0])
	});
	assert_eq!(out, "call <em>555-1234</em> or <em>555-9876</em>");
}

struct Money {
	cents: u64,
}

impl Renderable for Money {
	fn to_html(&self) -> SafeString {
		let amount = format!("${}.{:02}", self.cents / 100, self.cents % 100);
		format_html!("<span class=\"money\">{}</span>", amount)
	}
}

#[test]
fn test_renderable_objects_are_not_escaped() {
	// Test: Objects with their own HTML form pass through escape untouched
	let price = Money { cents: 1999 };
	let html = escape(Fragment::rendered(&price));
	assert_eq!(html, r#"<span class="money">$19.99</span>"#);
	assert_eq!(escape(html.clone()), html);
}

#[test]
fn test_none_escapes_to_empty() {
	// Test: Absent values never render as placeholder text
	assert_eq!(escape(None::<i32>), "");
	assert_eq!(SafeString::from_option(None::<i32>), "");
}
