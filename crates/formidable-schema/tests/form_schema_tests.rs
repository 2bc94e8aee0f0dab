//! FormSchema integration tests
//!
//! Tests for types that describe their own schema and parse submissions.

use formidable_schema::{
	ErrorKind, FieldDescriptor, FormSchema, SchemaDescriptor, SchemaError, TypeRef,
};
use rstest::rstest;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, PartialEq)]
struct Booking {
	guest: String,
	nights: i64,
	rate: f64,
	breakfast: bool,
	notes: Option<String>,
	party_size: Option<i64>,
}

impl FormSchema for Booking {
	fn schema() -> Result<SchemaDescriptor, SchemaError> {
		SchemaDescriptor::builder("Booking")
			.field(FieldDescriptor::new("guest", TypeRef::string()).with_title("Guest name"))
			.field(FieldDescriptor::new("nights", TypeRef::integer()))
			.field(FieldDescriptor::new("rate", TypeRef::float()))
			.field(FieldDescriptor::new("breakfast", TypeRef::boolean()))
			.field(FieldDescriptor::new("notes", TypeRef::optional(TypeRef::string())))
			.field(FieldDescriptor::new(
				"party_size",
				TypeRef::union([TypeRef::integer(), TypeRef::null()]),
			))
			.build()
	}
}

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
fn test_schema_titles_fall_back_to_names() {
	let schema = Booking::schema().unwrap();
	assert_eq!(schema.field("guest").unwrap().title(), "Guest name");
	assert_eq!(schema.field("nights").unwrap().title(), "nights");
	assert!(schema.field("missing").is_none());
}

#[rstest]
fn test_parse_full_submission() {
	let schema = Booking::schema().unwrap();
	let booking: Booking = schema
		.parse(&form(&[
			("guest", "Ada"),
			("nights", "3"),
			("rate", "99.5"),
			("breakfast", "true"),
			("notes", "late arrival"),
			("party_size", "2"),
		]))
		.unwrap();
	assert_eq!(
		booking,
		Booking {
			guest: "Ada".to_string(),
			nights: 3,
			rate: 99.5,
			breakfast: true,
			notes: Some("late arrival".to_string()),
			party_size: Some(2),
		}
	);
}

#[rstest]
fn test_parse_empty_optional_number_is_none() {
	let schema = Booking::schema().unwrap();
	let booking: Booking = schema
		.parse(&form(&[
			("guest", "Ada"),
			("nights", "1"),
			("rate", "80"),
			("breakfast", "false"),
			("party_size", ""),
		]))
		.unwrap();
	assert_eq!(booking.party_size, None);
	assert_eq!(booking.notes, None);
}

#[rstest]
#[case("nights", "three")]
#[case("rate", "cheap")]
#[case("breakfast", "sometimes")]
#[case("party_size", "many")]
fn test_parse_rejects_badly_typed_field(#[case] field: &str, #[case] value: &str) {
	let schema = Booking::schema().unwrap();
	let mut data = form(&[
		("guest", "Ada"),
		("nights", "1"),
		("rate", "80"),
		("breakfast", "false"),
	]);
	data.insert(field.to_string(), value.to_string());

	let err = schema.parse::<Booking>(&data).unwrap_err();
	assert_eq!(err.field_names(), vec![field]);
	assert!(matches!(
		err.errors()[0].kind,
		ErrorKind::InvalidType { .. }
	));
}

#[rstest]
fn test_unchecked_required_checkbox_is_missing() {
	let schema = Booking::schema().unwrap();
	let err = schema
		.validate(&form(&[("guest", "Ada"), ("nights", "1"), ("rate", "80")]))
		.unwrap_err();
	let breakfast: Vec<_> = err.errors_for("breakfast").collect();
	assert_eq!(breakfast.len(), 1);
	assert_eq!(breakfast[0].kind, ErrorKind::Missing);
}
