//! Built-in field widgets
//!
//! Every built-in widget renders the same shape:
//!
//! ```html
//! <div class="field" data-field="age">
//!   <label for="id_age">Age</label>
//!   <input type="number" name="age" id="id_age" required="required" />
//! </div>
//! ```
//!
//! Optional fields get an extra `optional` class and no `required` attribute.

use crate::registry::Renderer;
use formidable_markup::{ElementView, IntoView, View};
use formidable_schema::{FieldDescriptor, TypeRef};

/// The `id` given to a field's control, referenced by its label.
pub fn field_id(name: &str) -> String {
	format!("id_{}", name)
}

/// Wrapper `<div>` holding the label for `name`; the caller appends the control.
pub fn field_container(name: &str, title: &str, optional: bool) -> ElementView {
	let label = ElementView::new("label")
		.attr("for", field_id(name))
		.child(title.to_string());

	ElementView::new("div")
		.attr("class", if optional { "field optional" } else { "field" })
		.attr("data-field", name.to_string())
		.child(label)
}

/// `<input>` widget for single-value fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRenderer {
	input_type: &'static str,
	optional: bool,
	step: Option<&'static str>,
	value: Option<&'static str>,
}

impl InputRenderer {
	/// Create an input of the given HTML `type`.
	pub fn new(input_type: &'static str, optional: bool) -> Self {
		Self {
			input_type,
			optional,
			step: None,
			value: None,
		}
	}

	pub fn text(optional: bool) -> Self {
		Self::new("text", optional)
	}

	/// Whole-number input.
	pub fn number(optional: bool) -> Self {
		Self::new("number", optional)
	}

	/// Number input accepting any fraction.
	pub fn float(optional: bool) -> Self {
		Self::number(optional).with_step("any")
	}

	/// Checkbox submitting `true` when ticked.
	pub fn checkbox(optional: bool) -> Self {
		let mut input = Self::new("checkbox", optional);
		input.value = Some("true");
		input
	}

	pub fn email(optional: bool) -> Self {
		Self::new("email", optional)
	}

	pub fn password(optional: bool) -> Self {
		Self::new("password", optional)
	}

	pub fn date(optional: bool) -> Self {
		Self::new("date", optional)
	}

	/// Set the `step` attribute.
	pub fn with_step(mut self, step: &'static str) -> Self {
		self.step = Some(step);
		self
	}

	pub fn input_type(&self) -> &str {
		self.input_type
	}
}

impl Renderer for InputRenderer {
	fn render(&self, name: &str, field: &FieldDescriptor, _type_ref: &TypeRef) -> View {
		let optional = self.optional || !field.is_required();

		let mut input = ElementView::new("input")
			.attr("type", self.input_type)
			.attr("name", name.to_string())
			.attr("id", field_id(name));
		if let Some(step) = self.step {
			input = input.attr("step", step);
		}
		if let Some(value) = self.value {
			input = input.attr("value", value);
		}
		let input = input.attr_if(!optional, "required", "required");

		field_container(name, field.title(), optional)
			.child(input)
			.into_view()
	}
}

/// Multi-line text widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextareaRenderer {
	optional: bool,
	rows: Option<u32>,
}

impl TextareaRenderer {
	pub fn new(optional: bool) -> Self {
		Self {
			optional,
			rows: None,
		}
	}

	pub fn with_rows(mut self, rows: u32) -> Self {
		self.rows = Some(rows);
		self
	}
}

impl Renderer for TextareaRenderer {
	fn render(&self, name: &str, field: &FieldDescriptor, _type_ref: &TypeRef) -> View {
		let optional = self.optional || !field.is_required();

		let mut textarea = ElementView::new("textarea")
			.attr("name", name.to_string())
			.attr("id", field_id(name));
		if let Some(rows) = self.rows {
			textarea = textarea.attr("rows", rows.to_string());
		}
		let textarea = textarea.attr_if(!optional, "required", "required");

		field_container(name, field.title(), optional)
			.child(textarea)
			.into_view()
	}
}
