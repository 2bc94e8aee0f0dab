//! Form schemas for formidable
//!
//! A [`SchemaDescriptor`] is an ordered list of [`FieldDescriptor`]s, each
//! carrying a title, a required flag and an explicit [`TypeRef`]. The same
//! descriptor drives rendering (field order, widget choice) and validation of
//! submitted data, which fails with a structured [`ValidationError`].
//!
//! ## Validation rules
//!
//! - Keys that are not schema fields are ignored
//! - A missing required field is reported as [`ErrorKind::Missing`], even when its type accepts `null`
//! - A missing optional field, or an empty one whose type is not text, cleans to `null`
//! - `int`, `float` and `bool` values are parsed from their text form
//! - A union tries its non-null members in declaration order

pub mod field;
pub mod schema;
pub mod types;
pub mod validation;

pub use field::FieldDescriptor;
pub use schema::{FormSchema, SchemaBuilder, SchemaDescriptor, SchemaError};
pub use types::{Primitive, TypeRef};
pub use validation::{ALL_FIELDS_KEY, CleanedData, ErrorKind, FieldError, ValidationError};
