//! Anchors and sortable table headers

use reinhardt_html_core::{
	AttrValue, Attrs, Fragment, HTML, HtmlResult, Renderable, SafeString, TagOptions, escape,
};

fn is_blank(fragment: &Fragment) -> bool {
	match fragment {
		Fragment::Absent => true,
		Fragment::Raw(text) => text.is_empty(),
		Fragment::Safe(safe) => safe.is_empty(),
	}
}

/// An `<a>` element. A blank label falls back to the URL.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::link_to;
///
/// let link = link_to(None::<&str>, "http://www.example.com?q1=v1&q2=v2", attrs! {}).unwrap();
/// assert_eq!(
///     link,
///     r#"<a href="http://www.example.com?q1=v1&amp;q2=v2">http://www.example.com?q1=v1&amp;q2=v2</a>"#
/// );
/// ```
pub fn link_to(
	label: impl Into<Fragment>,
	url: impl Into<Fragment>,
	mut attrs: Attrs,
) -> HtmlResult<SafeString> {
	let url = url.into();
	let mut label = label.into();
	if is_blank(&label) {
		label = url.clone();
	}
	attrs.insert("href", AttrValue::from(url));
	HTML.tag("a", [label], attrs)
}

/// [`link_to`] when `condition` holds, otherwise just the escaped label.
pub fn link_to_if(
	condition: bool,
	label: impl Into<Fragment>,
	url: impl Into<Fragment>,
	attrs: Attrs,
) -> HtmlResult<SafeString> {
	if condition {
		link_to(label, url, attrs)
	} else {
		Ok(escape(label))
	}
}

/// [`link_to`] unless `condition` holds, otherwise just the escaped label.
pub fn link_to_unless(
	condition: bool,
	label: impl Into<Fragment>,
	url: impl Into<Fragment>,
	attrs: Attrs,
) -> HtmlResult<SafeString> {
	link_to_if(!condition, label, url, attrs)
}

/// A link that is rendered only when it is put into markup.
///
/// Attributes are written as-is; builder options such as `_nl` are not
/// interpreted here.
///
/// ```
/// use reinhardt_html_core::Renderable;
/// use reinhardt_html_tags::Link;
///
/// let link = Link::new("Home", "/").attr("class_", "nav");
/// assert_eq!(link.to_html(), r#"<a class="nav" href="/">Home</a>"#);
///
/// let inactive = Link::new("Home", "/").condition(false);
/// assert_eq!(inactive.to_html(), "Home");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	pub label: Fragment,
	pub url: Fragment,
	pub condition: bool,
	pub attrs: Attrs,
}

impl Link {
	pub fn new(label: impl Into<Fragment>, url: impl Into<Fragment>) -> Self {
		Self {
			label: label.into(),
			url: url.into(),
			condition: true,
			attrs: Attrs::new(),
		}
	}

	/// Render only the label when `condition` is false.
	pub fn condition(mut self, condition: bool) -> Self {
		self.condition = condition;
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(name, value);
		self
	}
}

impl Renderable for Link {
	fn to_html(&self) -> SafeString {
		if !self.condition {
			return escape(self.label.clone());
		}
		let label = if is_blank(&self.label) {
			self.url.clone()
		} else {
			self.label.clone()
		};
		let mut attrs = self.attrs.clone();
		attrs.insert("href", AttrValue::from(self.url.clone()));
		HTML.render_tag("a", vec![label], attrs, &TagOptions::default())
	}
}

/// Renders `<th>` headers for a sortable table.
///
/// The header of the column currently sorted on gets
/// `class_if_sort_column` and no link. Every other header links to
/// `url` and gets `class_if_not_sort_column`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableColumn {
	pub class_if_sort_column: Option<String>,
	pub class_if_not_sort_column: Option<String>,
	pub link_attrs: Attrs,
	/// Element name, `th` unless overridden.
	pub name: String,
}

impl Default for SortableColumn {
	fn default() -> Self {
		Self {
			class_if_sort_column: Some("sort".to_string()),
			class_if_not_sort_column: None,
			link_attrs: Attrs::new(),
			name: "th".to_string(),
		}
	}
}

impl SortableColumn {
	pub fn render(
		&self,
		current_order: &str,
		column_order: &str,
		label: impl Into<Fragment>,
		url: Option<&str>,
		mut attrs: Attrs,
	) -> HtmlResult<SafeString> {
		let content = if current_order == column_order {
			attrs.insert("class_", self.class_if_sort_column.as_deref());
			escape(label)
		} else {
			attrs.insert("class_", self.class_if_not_sort_column.as_deref());
			let mut link_attrs = self.link_attrs.clone();
			link_attrs.insert("href", url);
			HTML.tag("a", [label.into()], link_attrs)?
		};
		HTML.tag(&self.name, [content], attrs)
	}
}

/// [`SortableColumn::render`] with the default classes.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::attrs;
/// use reinhardt_html_tags::th_sortable;
///
/// let sorted = th_sortable("name", "name", "Name", Some("?sort=name"), attrs! {}).unwrap();
/// assert_eq!(sorted, r#"<th class="sort">Name</th>"#);
///
/// let other = th_sortable("name", "date", "Date", Some("?sort=date"), attrs! {}).unwrap();
/// assert_eq!(other, r#"<th><a href="?sort=date">Date</a></th>"#);
/// ```
pub fn th_sortable(
	current_order: &str,
	column_order: &str,
	label: impl Into<Fragment>,
	url: Option<&str>,
	attrs: Attrs,
) -> HtmlResult<SafeString> {
	SortableColumn::default().render(current_order, column_order, label, url, attrs)
}
