//! Cleaning submitted form data against a schema.

use crate::field::FieldDescriptor;
use crate::types::{Primitive, TypeRef};
use serde_json::{Map, Number, Value};

/// Special key for form-level (non-field-specific) errors.
pub const ALL_FIELDS_KEY: &str = "_all";

/// Cleaned values keyed by field name.
pub type CleanedData = Map<String, Value>;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// A required field was not submitted.
	Missing,
	/// The submitted text could not be converted to the declared type.
	InvalidType { expected: String },
	/// The cleaned data did not fit the target structure.
	Invalid,
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
	pub field: String,
	pub kind: ErrorKind,
	pub message: String,
}

impl FieldError {
	pub fn missing(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			kind: ErrorKind::Missing,
			message: "This field is required.".to_string(),
		}
	}

	pub fn invalid_type(field: impl Into<String>, expected: &TypeRef) -> Self {
		Self {
			field: field.into(),
			kind: ErrorKind::InvalidType {
				expected: expected.to_string(),
			},
			message: format!("Input should be a valid {}.", expected),
		}
	}

	pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			kind: ErrorKind::Invalid,
			message: message.into(),
		}
	}
}

/// Structured validation failure raised when submitted data violates the
/// schema. Carries one [`FieldError`] per offending field, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} validation error(s) for {schema}{}", .errors.len(), join_errors(.errors))]
pub struct ValidationError {
	schema: String,
	errors: Vec<FieldError>,
}

impl ValidationError {
	pub fn new(schema: impl Into<String>, errors: Vec<FieldError>) -> Self {
		Self {
			schema: schema.into(),
			errors,
		}
	}

	/// Name of the schema that rejected the data.
	pub fn schema(&self) -> &str {
		&self.schema
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	/// Names of the invalid fields, in schema order.
	pub fn field_names(&self) -> Vec<&str> {
		self.errors.iter().map(|e| e.field.as_str()).collect()
	}

	/// Errors reported for `field`.
	pub fn errors_for(&self, field: &str) -> impl Iterator<Item = &FieldError> {
		self.errors.iter().filter(move |e| e.field == field)
	}
}

fn join_errors(errors: &[FieldError]) -> String {
	errors.iter().map(|e| format!("; {}", e)).collect()
}

/// Clean one submitted value for `field`.
///
/// `raw` is `None` when the key was absent from the submission.
pub(crate) fn clean_field(field: &FieldDescriptor, raw: Option<&str>) -> Result<Value, FieldError> {
	let type_ref = field.type_ref();
	match raw {
		None if field.accepts_missing() => Ok(Value::Null),
		None => Err(FieldError::missing(field.name())),
		Some("") if !accepts_empty_text(type_ref) && field.accepts_missing() => Ok(Value::Null),
		Some("") if !accepts_empty_text(type_ref) && type_ref.is_nullable() => {
			Err(FieldError::missing(field.name()))
		}
		Some(text) => clean_value(type_ref, text)
			.ok_or_else(|| FieldError::invalid_type(field.name(), type_ref)),
	}
}

/// Convert `text` to a JSON value of `type_ref`, or `None` if it does not fit.
pub(crate) fn clean_value(type_ref: &TypeRef, text: &str) -> Option<Value> {
	match type_ref {
		TypeRef::Primitive(Primitive::Str) | TypeRef::Named(_) => {
			Some(Value::String(text.to_string()))
		}
		TypeRef::Primitive(Primitive::Int) => {
			text.trim().parse::<i64>().ok().map(Value::from)
		}
		TypeRef::Primitive(Primitive::Float) => text
			.trim()
			.parse::<f64>()
			.ok()
			.and_then(Number::from_f64)
			.map(Value::Number),
		TypeRef::Primitive(Primitive::Bool) => parse_bool(text).map(Value::Bool),
		TypeRef::Null => text.is_empty().then_some(Value::Null),
		TypeRef::Optional(inner) => {
			if text.is_empty() && !accepts_empty_text(inner) {
				Some(Value::Null)
			} else {
				clean_value(inner, text)
			}
		}
		TypeRef::Union(members) => members
			.iter()
			.filter(|m| !m.is_null())
			.find_map(|m| clean_value(m, text))
			.or_else(|| (text.is_empty() && type_ref.is_nullable()).then_some(Value::Null)),
	}
}

/// Whether the empty string is a meaningful value rather than "no value".
fn accepts_empty_text(type_ref: &TypeRef) -> bool {
	type_ref
		.non_null_members()
		.first()
		.is_some_and(|m| matches!(m, TypeRef::Primitive(Primitive::Str) | TypeRef::Named(_)))
}

fn parse_bool(text: &str) -> Option<bool> {
	match text.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
		"false" | "0" | "no" | "off" | "f" | "n" => Some(false),
		_ => None,
	}
}
