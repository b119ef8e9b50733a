//! Tag builder tests
//!
//! End-to-end markup produced by the shared builder

use reinhardt_html_core::elements::{a, br, div, form, img, li, ul};
use reinhardt_html_core::{
	AttrItem, Attrs, BuilderConfig, HTML, HtmlBuilder, HtmlError, NO_CONTENT, SafeString,
	TagOptions, attrs,
};
use rstest::rstest;

#[test]
fn test_html() {
	// Test: Keyword content, void elements and escaping of attribute values
	let link = a(NO_CONTENT, attrs! { "href" => "http://mostlysafe\" <tag", "c" => "Bad <script> tag" })
		.unwrap();
	assert_eq!(
		link,
		r#"<a href="http://mostlysafe&#34; &lt;tag">Bad &lt;script&gt; tag</a>"#
	);

	let image = img(NO_CONTENT, attrs! { "src" => "http://some/image.jpg" }).unwrap();
	assert_eq!(image, r#"<img src="http://some/image.jpg" />"#);

	assert_eq!(br(NO_CONTENT, attrs! {}).unwrap(), "<br />");
}

#[test]
fn test_positional_content() {
	// Test: Positional content is escaped the same way as keyword content
	let link = HTML
		.tag("a", ["Bad <script> tag"], attrs! { "href" => "http://mostlysafe\" <tag" })
		.unwrap();
	insta::assert_snapshot!(
		link.to_string(),
		@r#"<a href="http://mostlysafe&#34; &lt;tag">Bad &lt;script&gt; tag</a>"#
	);
}

#[test]
fn test_composable_attributes() {
	// Test: class and style lists are joined with their separators
	let out = div(
		NO_CONTENT,
		attrs! { "class_" => ["a", "b"], "style" => ["color:red", "margin:0"] },
	)
	.unwrap();
	insta::assert_snapshot!(out.to_string(), @r#"<div class="a b" style="color:red; margin:0"></div>"#);
}

#[test]
fn test_unclosed_tag() {
	// Test: _closed=false emits only the opening tag
	assert_eq!(form(NO_CONTENT, attrs! { "_closed" => false }).unwrap(), "<form>");
	assert_eq!(
		form(NO_CONTENT, attrs! { "_closed" => false, "action" => "hello" }).unwrap(),
		r#"<form action="hello">"#
	);
}

#[rstest]
#[case(Vec::<&str>::new(), attrs! {}, "<a></a>")]
#[case(Vec::new(), attrs! { "_nl" => true }, "<a>\n</a>\n")]
#[case(Vec::new(), attrs! { "_closed" => false }, "<a>")]
#[case(Vec::new(), attrs! { "_closed" => false, "_nl" => true }, "<a>\n")]
#[case(vec!["A", "B"], attrs! { "href" => "/" }, r#"<a href="/">AB</a>"#)]
#[case(vec!["A", "B"], attrs! { "href" => "/", "_nl" => true }, "<a href=\"/\">\nA\nB\n</a>\n")]
fn test_newline_arg(#[case] content: Vec<&str>, #[case] kwargs: Attrs, #[case] expected: &str) {
	assert_eq!(a(content, kwargs).unwrap(), expected);
}

#[rstest]
#[case(attrs! { "_nl" => true }, "<br />\n")]
#[case(attrs! { "_nl" => true, "class_" => ["a"] }, "<br class=\"a\" />\n")]
#[case(attrs! { "_nl" => true, "_closed" => false }, "<br>\n")]
fn test_newline_after_void_element(#[case] kwargs: Attrs, #[case] expected: &str) {
	// Test: A self-closed void element still gets the trailing newline
	assert_eq!(HTML.tag("br", NO_CONTENT, kwargs).unwrap(), expected);
}

#[test]
fn test_null_attribute_is_omitted() {
	// Test: None removes the attribute entirely
	assert_eq!(a(NO_CONTENT, attrs! { "href" => None::<&str> }).unwrap(), "<a></a>");
}

#[rstest]
#[case(true, r#"<input disabled="disabled" />"#)]
#[case(false, "<input />")]
fn test_boolean_attribute(#[case] disabled: bool, #[case] expected: &str) {
	let out = HTML.tag("input", NO_CONTENT, attrs! { "disabled" => disabled }).unwrap();
	assert_eq!(out, expected);
}

#[test]
fn test_data_attributes() {
	// Test: Underscores become hyphens in attribute names
	let out = div(NO_CONTENT, attrs! { "data_id" => 7, "aria_hidden" => "true" }).unwrap();
	assert_eq!(out, r#"<div aria-hidden="true" data-id="7"></div>"#);
}

#[test]
fn test_conditional_class_list() {
	// Test: Flagged class parts are kept only when the flag is true
	let is_active = false;
	let out = li(
		["Home"],
		attrs! { "class_" => vec![AttrItem::from("nav"), ("active", is_active).into()] },
	)
	.unwrap();
	assert_eq!(out, r#"<li class="nav">Home</li>"#);
}

#[test]
fn test_unknown_option_is_rejected() {
	// Test: Typos in options are reported, never ignored
	let err = a(NO_CONTENT, attrs! { "_closd" => false }).unwrap_err();
	assert!(matches!(&err, HtmlError::UnknownOption(keys) if keys == &["_closd"]));
	assert_eq!(err.to_string(), "unknown option(s): _closd");
}

#[test]
fn test_conflicting_content_is_rejected() {
	// Test: Content may come positionally or through c, not both
	let err = a(["x"], attrs! { "c" => "y" }).unwrap_err();
	assert!(matches!(err, HtmlError::ConflictingContent));
}

#[test]
fn test_nested_elements() {
	// Test: Output of nested calls is not escaped again
	let items = ["<one>", "two"]
		.into_iter()
		.map(|text| li([text], attrs! {}))
		.collect::<Result<Vec<SafeString>, _>>()
		.unwrap();
	let list = ul(items, attrs! { "_nl" => true }).unwrap();
	assert_eq!(list, "<ul>\n<li>&lt;one&gt;</li>\n<li>two</li>\n</ul>\n");
}

#[test]
fn test_comment_and_cdata() {
	// Test: Comments escape their content, CDATA does not
	assert_eq!(HTML.comment(["<foo>"]), "<!-- &lt;foo&gt; -->");
	assert_eq!(HTML.cdata(["<foo>"]), "<![CDATA[<foo>]]>");
}

#[test]
fn test_render_tag_with_extra_boolean() {
	// Test: Per-call boolean names
	let out = HTML.render_tag(
		"option",
		vec!["Red".into()],
		attrs! { "selected" => true, "value" => "r" },
		&TagOptions::default().with_boolean_attr("selected"),
	);
	assert_eq!(out, r#"<option selected="selected" value="r">Red</option>"#);
}

#[test]
fn test_builder_with_custom_void_tags() {
	// Test: A custom builder uses its own void set
	let config = BuilderConfig::from_toml_str(r#"void_tags = ["x-icon"]"#).unwrap();
	let builder = HtmlBuilder::new(config);
	assert_eq!(builder.tag("x-icon", NO_CONTENT, attrs! {}).unwrap(), "<x-icon />");
	assert_eq!(builder.tag("br", NO_CONTENT, attrs! {}).unwrap(), "<br></br>");
}

#[test]
fn test_shared_builder_across_threads() {
	// Test: The default builder is usable from several threads at once
	let handles: Vec<_> = (0..4)
		.map(|i| {
			std::thread::spawn(move || {
				HTML.tag("span", [i], attrs! { "id" => format!("s{i}") }).unwrap()
			})
		})
		.collect();
	for (i, handle) in handles.into_iter().enumerate() {
		let out = handle.join().unwrap();
		assert_eq!(out, format!(r#"<span id="s{i}">{i}</span>"#));
	}
}
