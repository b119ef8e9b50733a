//! Form helper tests
//!
//! Form tags, input controls and select boxes

use reinhardt_html_core::{AttrValue, HtmlError, attrs};
use reinhardt_html_tags::{
	Label, OptGroup, OptionItem, Options, checkbox, end_form, file, form, hidden, password,
	radio, select, submit, text, textarea,
};
use rstest::rstest;

#[rstest]
#[case("post", r#"<form action="/submit" method="post">"#)]
#[case("get", r#"<form action="/submit" method="get">"#)]
#[case("GET", r#"<form action="/submit" method="GET">"#)]
fn test_form_native_methods(#[case] method: &str, #[case] expected: &str) {
	// Test: GET and POST are kept as given
	assert_eq!(form("/submit", method, false, &[], attrs! {}).unwrap(), expected);
}

#[test]
fn test_form_method_emulation() {
	// Test: Other methods are posted with a hidden _method field
	let out = form("/submit", "put", false, &[], attrs! {}).unwrap();
	insta::assert_snapshot!(out.to_string(), @r#"
	<form action="/submit" method="post"><div style="display:none">
	<input name="_method" type="hidden" value="put" />
	</div>
	"#);
}

#[test]
fn test_form_multipart_and_hidden_fields() {
	// Test: Multipart encoding and extra hidden fields without ids
	let out = form("/upload", "post", true, &[("token", "abc")], attrs! {}).unwrap();
	assert_eq!(
		out,
		"<form action=\"/upload\" enctype=\"multipart/form-data\" method=\"post\">\
		 <div style=\"display:none\">\n\
		 <input name=\"token\" type=\"hidden\" value=\"abc\" />\n\
		 </div>\n"
	);
	assert_eq!(end_form(), "</form>");
}

#[rstest]
#[case("", r#"<input id="title" name="title" type="text" value="" />"#)]
#[case("Hello!", r#"<input id="title" name="title" type="text" value="Hello!" />"#)]
fn test_text_values(#[case] value: &str, #[case] expected: &str) {
	assert_eq!(text("title", value, attrs! {}).unwrap(), expected);
}

#[test]
fn test_text_without_value() {
	// Test: An absent value omits the attribute entirely
	assert_eq!(
		text("title", None::<&str>, attrs! {}).unwrap(),
		r#"<input id="title" name="title" type="text" />"#
	);
}

#[test]
fn test_input_helpers() {
	assert_eq!(
		hidden("id", 3, attrs! {}).unwrap(),
		r#"<input id="id" name="id" type="hidden" value="3" />"#
	);
	assert_eq!(
		password("password", None::<&str>, attrs! {}).unwrap(),
		r#"<input id="password" name="password" type="password" />"#
	);
	assert_eq!(
		file("myfile", None::<&str>, attrs! {}).unwrap(),
		r#"<input id="myfile" name="myfile" type="file" />"#
	);
	assert_eq!(
		submit("commit", "Save changes", attrs! {}).unwrap(),
		r#"<input id="commit" name="commit" type="submit" value="Save changes" />"#
	);
}

#[test]
fn test_textarea() {
	assert_eq!(
		textarea("body", "", attrs! { "cols" => 25, "rows" => 10 }).unwrap(),
		r#"<textarea cols="25" id="body" name="body" rows="10"></textarea>"#
	);
	assert_eq!(
		textarea("aa", None::<&str>, attrs! {}).unwrap(),
		r#"<textarea id="aa" name="aa"></textarea>"#
	);
	assert_eq!(
		textarea("aa", "<b>hi</b>", attrs! {}).unwrap(),
		r#"<textarea id="aa" name="aa">&lt;b&gt;hi&lt;/b&gt;</textarea>"#
	);
}

#[test]
fn test_checkbox_boolean_options() {
	// Test: Boolean attributes collapse to name="name"
	let out = checkbox(
		"admin",
		1,
		true,
		None,
		attrs! { "disabled" => true, "readonly" => "yes" },
	)
	.unwrap();
	assert_eq!(
		out,
		r#"<input checked="checked" disabled="disabled" id="admin" name="admin" readonly="readonly" type="checkbox" value="1" />"#
	);

	let out = checkbox("admin", 1, false, None, attrs! { "disabled" => false }).unwrap();
	assert_eq!(out, r#"<input id="admin" name="admin" type="checkbox" value="1" />"#);
}

#[rstest]
#[case("people", "justin", r#"<input id="people_justin" name="people" type="radio" value="justin" />"#)]
#[case("opinion", "-1", r#"<input id="opinion_-1" name="opinion" type="radio" value="-1" />"#)]
#[case("color", "Dark Blue", r#"<input id="color_dark_blue" name="color" type="radio" value="Dark Blue" />"#)]
fn test_radio_ids(#[case] name: &str, #[case] value: &str, #[case] expected: &str) {
	assert_eq!(radio(name, value, false, None, attrs! {}).unwrap(), expected);
}

#[test]
fn test_radio_with_label() {
	let out = radio("people", "justin", true, Some(Label::new("Justin")), attrs! {}).unwrap();
	assert_eq!(
		out,
		r#"<label><input checked="checked" id="people_justin" name="people" type="radio" value="justin" /> Justin</label>"#
	);
}

#[test]
fn test_id_conflict() {
	// Test: Both id spellings at once are rejected
	let err = submit("go", "Go", attrs! { "id" => "a", "id_" => "b" }).unwrap_err();
	assert!(matches!(err, HtmlError::UnsupportedArgument(_)));
}

#[test]
fn test_id_suppressed() {
	let out = text("q", "x", attrs! { "id" => AttrValue::None }).unwrap();
	assert_eq!(out, r#"<input name="q" type="text" value="x" />"#);
}

#[test]
fn test_select_explicit_id() {
	let out = select("spam", &["1", "2"], Options::new(["2"]), attrs! { "id" => "eggs" }).unwrap();
	assert_eq!(
		out,
		"<select id=\"eggs\" name=\"spam\">\n<option selected=\"selected\" value=\"2\">2</option>\n</select>"
	);
}

#[test]
fn test_select_multiple() {
	let out = select(
		"cc",
		&["VISA"],
		Options::new(["VISA", "MasterCard"]),
		attrs! { "multiple" => true },
	)
	.unwrap();
	insta::assert_snapshot!(out.to_string(), @r#"
	<select id="cc" multiple="multiple" name="cc">
	<option selected="selected" value="VISA">VISA</option>
	<option value="MasterCard">MasterCard</option>
	</select>
	"#);
}

#[test]
fn test_select_prompt() {
	// Test: With nothing selected the empty-valued prompt is selected
	let options = Options::new([("$", "Dollar"), ("DKK", "Kroner")]).with_prompt("Please choose ...");
	let out = select("currency", &[] as &[&str], options, attrs! {}).unwrap();
	assert_eq!(
		out,
		"<select id=\"currency\" name=\"currency\">\n\
		 <option selected=\"selected\" value=\"\">Please choose ...</option>\n\
		 <option value=\"$\">Dollar</option>\n\
		 <option value=\"DKK\">Kroner</option>\n\
		 </select>"
	);
}

#[test]
fn test_select_optgroup() {
	let options = Options::new([
		OptionItem::from(("", "")),
		OptionItem::from(OptGroup::new("Users", [("1", "Joe"), ("2", "Sam")])),
	]);
	let out = select("privacy", &["2"], options, attrs! {}).unwrap();
	assert_eq!(
		out,
		"<select id=\"privacy\" name=\"privacy\">\n\
		 <option value=\"\"></option>\n\
		 <optgroup label=\"Users\">\n\
		 <option value=\"1\">Joe</option>\n\
		 <option selected=\"selected\" value=\"2\">Sam</option>\n\
		 </optgroup>\n\
		 </select>"
	);
}
