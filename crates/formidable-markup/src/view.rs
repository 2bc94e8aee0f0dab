//! View tree and HTML serialization.

use std::borrow::Cow;
use std::fmt;

/// A unified representation of renderable content.
///
/// A `View` is the markup tree handed back by widget renderers and form
/// renderers. It is built once per request and serialized with
/// [`View::render_to_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An HTML element.
	Element(ElementView),
	/// A text node. Escaped on serialization.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents an element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	/// The tag name (e.g., "div", "input").
	tag: Cow<'static, str>,
	/// HTML attributes, in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_markup::ElementView;
	///
	/// assert!(ElementView::new("input").is_void());
	/// assert!(!ElementView::new("form").is_void());
	/// ```
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	///
	/// Setting an attribute that already exists replaces its value in place.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Adds an attribute only when `condition` holds.
	pub fn attr_if(
		self,
		condition: bool,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		if condition { self.attr(name, value) } else { self }
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Appends a child view in place.
	pub fn push(&mut self, child: impl IntoView) {
		self.children.push(child.into_view());
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the named attribute, if present.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_markup::ElementView;
	///
	/// let input = ElementView::new("input").attr("type", "text");
	/// assert_eq!(input.attr_value("type"), Some("text"));
	/// assert_eq!(input.attr_value("name"), None);
	/// ```
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns true if the `class` attribute lists `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.attr_value("class")
			.is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns the direct children that are elements.
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementView> {
		self.children.iter().filter_map(View::as_element)
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Concatenated text content of this element and its descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this view is one.
	pub fn as_element(&self) -> Option<&ElementView> {
		match self {
			View::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Collects every element in the tree (depth-first, document order)
	/// matching `predicate`.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_markup::{ElementView, IntoView};
	///
	/// let view = ElementView::new("form")
	///     .child(ElementView::new("button").attr("value", "save"))
	///     .child(ElementView::new("button").attr("value", "delete"))
	///     .into_view();
	/// let buttons = view.find_all(|el| el.tag_name() == "button");
	/// assert_eq!(buttons.len(), 2);
	/// assert_eq!(buttons[1].attr_value("value"), Some("delete"));
	/// ```
	pub fn find_all(&self, predicate: impl Fn(&ElementView) -> bool) -> Vec<&ElementView> {
		let mut found = Vec::new();
		self.find_all_inner(&predicate, &mut found);
		found
	}

	fn find_all_inner<'a>(
		&'a self,
		predicate: &dyn Fn(&ElementView) -> bool,
		found: &mut Vec<&'a ElementView>,
	) {
		match self {
			View::Element(el) => {
				if predicate(el) {
					found.push(el);
				}
				for child in &el.children {
					child.find_all_inner(predicate, found);
				}
			}
			View::Fragment(children) => {
				for child in children {
					child.find_all_inner(predicate, found);
				}
			}
			View::Text(_) | View::Empty => {}
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			View::Element(el) => {
				for child in &el.children {
					child.collect_text(out);
				}
			}
			View::Text(text) => out.push_str(text),
			View::Fragment(children) => {
				for child in children {
					child.collect_text(out);
				}
			}
			View::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
