//! `<select>` and its option model
//!
//! ```
//! use reinhardt_html_core::attrs;
//! use reinhardt_html_tags::{Options, select};
//!
//! let out = select("cc", &["MasterCard"], Options::new(["VISA", "MasterCard"]), attrs! {})
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     "<select id=\"cc\" name=\"cc\">\n\
//!      <option value=\"VISA\">VISA</option>\n\
//!      <option selected=\"selected\" value=\"MasterCard\">MasterCard</option>\n\
//!      </select>"
//! );
//! ```

use reinhardt_html_core::{
	Attrs, Fragment, HTML, HtmlResult, NL, Renderable, SafeString, TagOptions, attrs,
};

use crate::form::{make_safe_id_component, set_id_attr};

/// One `<option>`. Without an explicit value the label doubles as the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub label: String,
	pub value: Option<String>,
}

impl SelectOption {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: None,
		}
	}

	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// The submitted value.
	pub fn value(&self) -> &str {
		self.value.as_deref().unwrap_or(&self.label)
	}

	fn render(&self, selected: &[String]) -> SafeString {
		let value = self.value();
		let is_selected = selected.iter().any(|s| s == value);
		HTML.render_tag(
			"option",
			vec![Fragment::from(&self.label)],
			attrs! { "value" => value, "selected" => is_selected },
			&TagOptions::default().with_boolean_attr("selected"),
		)
	}
}

impl From<&str> for SelectOption {
	fn from(label: &str) -> Self {
		Self::new(label)
	}
}

impl From<String> for SelectOption {
	fn from(label: String) -> Self {
		Self::new(label)
	}
}

/// `(value, label)`
impl From<(&str, &str)> for SelectOption {
	fn from((value, label): (&str, &str)) -> Self {
		Self::new(label).with_value(value)
	}
}

/// A labelled `<optgroup>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptGroup {
	pub label: String,
	pub options: Vec<SelectOption>,
}

impl OptGroup {
	pub fn new<I>(label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<SelectOption>,
	{
		Self {
			label: label.into(),
			options: options.into_iter().map(Into::into).collect(),
		}
	}

	fn render(&self, selected: &[String]) -> SafeString {
		let options = NL.join_trusted(self.options.iter().map(|opt| opt.render(selected))) + NL;
		HTML.render_tag(
			"optgroup",
			vec![Fragment::Safe(NL), Fragment::Safe(options)],
			attrs! { "label" => &self.label },
			&TagOptions::default(),
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionItem {
	Option(SelectOption),
	Group(OptGroup),
}

impl From<SelectOption> for OptionItem {
	fn from(option: SelectOption) -> Self {
		Self::Option(option)
	}
}

macro_rules! impl_option_item_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for OptionItem {
				fn from(option: $ty) -> Self {
					Self::Option(option.into())
				}
			}
		)*
	};
}

impl_option_item_from!(&str, String, (&str, &str));

impl From<OptGroup> for OptionItem {
	fn from(group: OptGroup) -> Self {
		Self::Group(group)
	}
}

/// Ordered options and groups for [`select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(Vec<OptionItem>);

impl Options {
	pub fn new<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<OptionItem>,
	{
		Self(items.into_iter().map(Into::into).collect())
	}

	pub fn push(&mut self, item: impl Into<OptionItem>) {
		self.0.push(item.into());
	}

	/// Put a prompt option with an empty value in front.
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.0
			.insert(0, OptionItem::Option(SelectOption::new(prompt).with_value("")));
		self
	}

	pub fn iter(&self) -> impl Iterator<Item = &OptionItem> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// One option or group per line, with a trailing newline.
	pub fn render<S: AsRef<str>>(&self, selected: &[S]) -> SafeString {
		let selected = selected_values(selected);
		let items = self.0.iter().map(|item| match item {
			OptionItem::Option(option) => option.render(&selected),
			OptionItem::Group(group) => group.render(&selected),
		});
		NL.join_trusted(items) + NL
	}
}

impl Renderable for Options {
	/// Options with nothing but the empty-valued prompt selected.
	fn to_html(&self) -> SafeString {
		self.render(&[] as &[&str])
	}
}

impl<T: Into<OptionItem>> FromIterator<T> for Options {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter)
	}
}

fn selected_values<S: AsRef<str>>(selected: &[S]) -> Vec<String> {
	if selected.is_empty() {
		vec![String::new()]
	} else {
		selected.iter().map(|s| s.as_ref().to_string()).collect()
	}
}

/// A `<select>` with one line per option.
///
/// An empty `selected` slice selects the prompt, if there is one. Add
/// `"multiple" => true` for a multi-select.
pub fn select<S: AsRef<str>>(
	name: &str,
	selected: &[S],
	options: Options,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	attrs.insert("name", name);
	set_id_attr(&mut attrs, || make_safe_id_component(name))?;
	HTML.tag("select", [NL, options.render(selected)], attrs)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_tuple_is_value_then_label() {
		let opt = SelectOption::from(("b", "B"));
		assert_eq!(opt.label, "B");
		assert_eq!(opt.value(), "b");
	}

	#[rstest]
	fn test_label_is_default_value() {
		assert_eq!(SelectOption::new("A").value(), "A");
	}

	#[rstest]
	fn test_prompt_selected_by_default() {
		let options = Options::new(["a"]).with_prompt("Please choose ...");
		assert_eq!(
			options.to_html(),
			"<option selected=\"selected\" value=\"\">Please choose ...</option>\n\
			 <option value=\"a\">a</option>\n"
		);
	}

	#[rstest]
	fn test_optgroup() {
		let options = Options::new([OptionItem::from(OptGroup::new("Users", [("1", "Joe")]))]);
		assert_eq!(
			options.render(&["1"]),
			"<optgroup label=\"Users\">\n\
			 <option selected=\"selected\" value=\"1\">Joe</option>\n\
			 </optgroup>\n"
		);
	}

	#[rstest]
	fn test_label_escaped() {
		let options = Options::new([("1", "<Joe>")]);
		assert_eq!(options.to_html(), "<option value=\"1\">&lt;Joe&gt;</option>\n");
	}
}
