//! Field metadata.

use crate::types::TypeRef;

/// Metadata for a single schema field.
///
/// Descriptors are read-only once built; renderers receive them by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	name: String,
	title: Option<String>,
	type_ref: TypeRef,
	required: bool,
}

impl FieldDescriptor {
	/// Create a new field descriptor.
	///
	/// The field is required unless its type accepts `None`.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_schema::{FieldDescriptor, TypeRef};
	///
	/// let field = FieldDescriptor::new("age", TypeRef::integer());
	/// assert!(field.is_required());
	/// assert_eq!(field.title(), "age");
	///
	/// let field = FieldDescriptor::new("nickname", TypeRef::optional(TypeRef::string()));
	/// assert!(!field.is_required());
	/// ```
	pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
		let required = !type_ref.is_nullable();
		Self {
			name: name.into(),
			title: None,
			type_ref,
			required,
		}
	}

	/// Set the human-readable title shown in the label.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_schema::{FieldDescriptor, TypeRef};
	///
	/// let field = FieldDescriptor::new("name", TypeRef::string()).with_title("Your Name");
	/// assert_eq!(field.title(), "Your Name");
	/// ```
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Mark the field as required, even when its type accepts `None`.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Mark the field as optional: a missing value cleans to `null`.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// The title, falling back to the field name.
	pub fn title(&self) -> &str {
		self.title.as_deref().unwrap_or(&self.name)
	}

	pub fn type_ref(&self) -> &TypeRef {
		&self.type_ref
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	/// Returns true if a missing submission cleans to `null`.
	pub fn accepts_missing(&self) -> bool {
		!self.required
	}
}
