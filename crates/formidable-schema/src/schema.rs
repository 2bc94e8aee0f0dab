//! Ordered schema descriptors.

use crate::field::FieldDescriptor;
use crate::validation::{ALL_FIELDS_KEY, CleanedData, FieldError, ValidationError, clean_field};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Errors raised while building a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	#[error("Duplicate field name in schema {schema}: {field}")]
	DuplicateField { schema: String, field: String },
	#[error("Empty field name in schema {0}")]
	EmptyFieldName(String),
}

/// An ordered sequence of fields.
///
/// Declaration order is rendering order; field names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
	name: String,
	fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
	/// Start building a schema identified by `name`.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
	///
	/// let schema = SchemaDescriptor::builder("ExampleForm")
	///     .field(FieldDescriptor::new("name", TypeRef::string()).with_title("Your Name"))
	///     .field(FieldDescriptor::new("age", TypeRef::integer()))
	///     .build()
	///     .unwrap();
	/// assert_eq!(schema.len(), 2);
	/// assert_eq!(schema.fields()[1].name(), "age");
	/// ```
	pub fn builder(name: impl Into<String>) -> SchemaBuilder {
		SchemaBuilder {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Schema identity, used in error messages.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|f| f.name() == name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
		self.fields.iter()
	}

	/// Validate a submitted data mapping.
	///
	/// Keys not declared by the schema are ignored. Every field is checked so
	/// the error lists all offending fields, not just the first.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
	/// use std::collections::HashMap;
	///
	/// let schema = SchemaDescriptor::builder("Age")
	///     .field(FieldDescriptor::new("age", TypeRef::integer()))
	///     .build()
	///     .unwrap();
	///
	/// let mut data = HashMap::new();
	/// data.insert("age".to_string(), "notanumber".to_string());
	/// let err = schema.validate(&data).unwrap_err();
	/// assert_eq!(err.field_names(), vec!["age"]);
	/// ```
	pub fn validate(&self, data: &HashMap<String, String>) -> Result<CleanedData, ValidationError> {
		let mut cleaned = CleanedData::new();
		let mut errors = Vec::new();

		for field in &self.fields {
			match clean_field(field, data.get(field.name()).map(String::as_str)) {
				Ok(value) => {
					cleaned.insert(field.name().to_string(), value);
				}
				Err(e) => errors.push(e),
			}
		}

		if errors.is_empty() {
			Ok(cleaned)
		} else {
			Err(ValidationError::new(&self.name, errors))
		}
	}

	/// Validate `data` and deserialize the cleaned values into `T`.
	///
	/// A mismatch between the cleaned values and `T` is reported as a
	/// form-level error under [`ALL_FIELDS_KEY`].
	pub fn parse<T: DeserializeOwned>(&self, data: &HashMap<String, String>) -> Result<T, ValidationError> {
		let cleaned = self.validate(data)?;
		serde_json::from_value(Value::Object(cleaned)).map_err(|e| {
			ValidationError::new(&self.name, vec![FieldError::invalid(ALL_FIELDS_KEY, e.to_string())])
		})
	}
}

impl<'a> IntoIterator for &'a SchemaDescriptor {
	type Item = &'a FieldDescriptor;
	type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}

/// Builder for [`SchemaDescriptor`].
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
	name: String,
	fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
	/// Append a field. Order of calls is rendering order.
	pub fn field(mut self, field: FieldDescriptor) -> Self {
		self.fields.push(field);
		self
	}

	/// Finish the schema, rejecting empty or duplicate field names.
	pub fn build(self) -> Result<SchemaDescriptor, SchemaError> {
		let mut seen = HashSet::with_capacity(self.fields.len());
		for field in &self.fields {
			if field.name().is_empty() {
				return Err(SchemaError::EmptyFieldName(self.name));
			}
			if !seen.insert(field.name()) {
				return Err(SchemaError::DuplicateField {
					schema: self.name.clone(),
					field: field.name().to_string(),
				});
			}
		}
		Ok(SchemaDescriptor {
			name: self.name,
			fields: self.fields,
		})
	}
}

/// Types that describe their own form schema.
///
/// # Examples
///
/// ```
/// use formidable_schema::{FieldDescriptor, FormSchema, SchemaDescriptor, SchemaError, TypeRef};
/// use serde::Deserialize;
/// use std::collections::HashMap;
///
/// #[derive(Deserialize)]
/// struct Login {
///     username: String,
/// }
///
/// impl FormSchema for Login {
///     fn schema() -> Result<SchemaDescriptor, SchemaError> {
///         SchemaDescriptor::builder("Login")
///             .field(FieldDescriptor::new("username", TypeRef::string()))
///             .build()
///     }
/// }
///
/// let schema = Login::schema().unwrap();
/// let mut data = HashMap::new();
/// data.insert("username".to_string(), "alice".to_string());
/// let login: Login = schema.parse(&data).unwrap();
/// assert_eq!(login.username, "alice");
/// ```
pub trait FormSchema: DeserializeOwned {
	/// Describe the fields of this type, in rendering order.
	fn schema() -> Result<SchemaDescriptor, SchemaError>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::TypeRef;
	use crate::validation::ErrorKind;
	use rstest::{fixture, rstest};
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Deserialize, PartialEq)]
	struct Example {
		name: String,
		age: i64,
		agree: bool,
		nickname: Option<String>,
	}

	#[fixture]
	fn example_schema() -> SchemaDescriptor {
		SchemaDescriptor::builder("ExampleForm")
			.field(FieldDescriptor::new("name", TypeRef::string()).with_title("Your Name"))
			.field(FieldDescriptor::new("age", TypeRef::integer()).with_title("Age"))
			.field(FieldDescriptor::new("agree", TypeRef::boolean()).with_title("I agree to terms"))
			.field(
				FieldDescriptor::new("nickname", TypeRef::union([TypeRef::string(), TypeRef::null()]))
					.with_title("Nickname (optional)"),
			)
			.build()
			.unwrap()
	}

	fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_builder_preserves_declaration_order(example_schema: SchemaDescriptor) {
		let names: Vec<_> = example_schema.iter().map(FieldDescriptor::name).collect();
		assert_eq!(names, vec!["name", "age", "agree", "nickname"]);
	}

	#[rstest]
	fn test_builder_rejects_duplicate_field() {
		let result = SchemaDescriptor::builder("Dup")
			.field(FieldDescriptor::new("name", TypeRef::string()))
			.field(FieldDescriptor::new("name", TypeRef::integer()))
			.build();
		assert_eq!(
			result.unwrap_err(),
			SchemaError::DuplicateField {
				schema: "Dup".to_string(),
				field: "name".to_string()
			}
		);
	}

	#[rstest]
	fn test_builder_rejects_empty_field_name() {
		let result = SchemaDescriptor::builder("Empty")
			.field(FieldDescriptor::new("", TypeRef::string()))
			.build();
		assert_eq!(result.unwrap_err(), SchemaError::EmptyFieldName("Empty".to_string()));
	}

	#[rstest]
	fn test_validate_ignores_unknown_keys(example_schema: SchemaDescriptor) {
		let cleaned = example_schema
			.validate(&data(&[
				("name", "A"),
				("age", "30"),
				("agree", "true"),
				("__trigger__", "save"),
			]))
			.unwrap();
		assert_eq!(cleaned.get("age"), Some(&json!(30)));
		assert_eq!(cleaned.get("nickname"), Some(&Value::Null));
		assert!(!cleaned.contains_key("__trigger__"));
	}

	#[rstest]
	fn test_validate_reports_every_invalid_field(example_schema: SchemaDescriptor) {
		let err = example_schema
			.validate(&data(&[("age", "notanumber"), ("agree", "perhaps")]))
			.unwrap_err();
		assert_eq!(err.schema(), "ExampleForm");
		assert_eq!(err.field_names(), vec!["name", "age", "agree"]);
	}

	#[rstest]
	fn test_validate_required_nullable_field_must_be_sent() {
		let schema = SchemaDescriptor::builder("Profile")
			.field(FieldDescriptor::new("nickname", TypeRef::optional(TypeRef::string())).required())
			.build()
			.unwrap();

		let err = schema.validate(&HashMap::new()).unwrap_err();
		assert_eq!(err.field_names(), vec!["nickname"]);
		assert_eq!(err.errors()[0].kind, ErrorKind::Missing);

		let cleaned = schema.validate(&data(&[("nickname", "")])).unwrap();
		assert_eq!(cleaned["nickname"], json!(""));
	}

	#[rstest]
	fn test_parse_into_struct(example_schema: SchemaDescriptor) {
		let parsed: Example = example_schema
			.parse(&data(&[("name", "A"), ("age", "30"), ("agree", "on"), ("nickname", "Al")]))
			.unwrap();
		assert_eq!(
			parsed,
			Example {
				name: "A".to_string(),
				age: 30,
				agree: true,
				nickname: Some("Al".to_string()),
			}
		);
	}

	#[rstest]
	fn test_parse_structure_mismatch_is_form_level_error() {
		#[derive(Debug, Deserialize)]
		#[allow(dead_code)]
		struct NeedsEmail {
			email: String,
		}

		let schema = SchemaDescriptor::builder("Other")
			.field(FieldDescriptor::new("name", TypeRef::string()))
			.build()
			.unwrap();
		let err = schema.parse::<NeedsEmail>(&data(&[("name", "A")])).unwrap_err();
		assert_eq!(err.field_names(), vec![ALL_FIELDS_KEY]);
	}
}
