//! Facade tests
//!
//! The prelude alone is enough to build a small page fragment

use reinhardt_html::prelude::*;
use rstest::rstest;

#[test]
fn test_prelude_builds_a_form() {
	// Test: Core builder and helpers compose through the prelude
	let body = HTML.lines([
		form("/login", "post", false, &[], attrs! {}).unwrap(),
		text("user", None::<&str>, attrs! {}).unwrap(),
		submit("go", "Log in", attrs! {}).unwrap(),
		end_form(),
	]);
	assert_eq!(
		body,
		"<form action=\"/login\" method=\"post\">\n\
		 <input id=\"user\" name=\"user\" type=\"text\" />\n\
		 <input id=\"go\" name=\"go\" type=\"submit\" value=\"Log in\" />\n\
		 </form>\n"
	);
}

#[rstest]
#[case("plain", "plain")]
#[case("<b>", "&lt;b&gt;")]
fn test_format_html_from_facade(#[case] arg: &str, #[case] expected: &str) {
	assert_eq!(format_html!("{}", arg), expected);
}

#[test]
fn test_helpers_accept_safe_content() {
	let items = ul([SafeString::new("<em>one</em>")], None, &Attrs::new(), Attrs::new()).unwrap();
	assert_eq!(items, "<ul>\n<li><em>one</em></li>\n</ul>");
	assert_eq!(nl2br("a\nb"), SafeString::new("a") + BR + "b");
}
