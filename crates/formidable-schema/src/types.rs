//! Declared field types.

use std::borrow::Cow;
use std::fmt;

/// Built-in scalar types understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
	/// Free text.
	Str,
	/// Signed 64-bit integer.
	Int,
	/// 64-bit float.
	Float,
	/// Boolean flag.
	Bool,
}

impl Primitive {
	/// The type name as written in a type expression.
	pub fn as_str(&self) -> &'static str {
		match self {
			Primitive::Str => "str",
			Primitive::Int => "int",
			Primitive::Float => "float",
			Primitive::Bool => "bool",
		}
	}
}

/// A field's declared type, compiled ahead of rendering into an explicit
/// tagged variant.
///
/// # Examples
///
/// ```
/// use formidable_schema::TypeRef;
///
/// let nickname = TypeRef::union([TypeRef::string(), TypeRef::null()]);
/// assert!(nickname.is_nullable());
/// assert_eq!(nickname.to_string(), "str | None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
	/// A built-in scalar.
	Primitive(Primitive),
	/// The null/none type.
	Null,
	/// `T | None`.
	Optional(Box<TypeRef>),
	/// Union of member types, in declaration order.
	Union(Vec<TypeRef>),
	/// Any other type, identified by name (e.g. `date`).
	Named(Cow<'static, str>),
}

impl TypeRef {
	pub fn string() -> Self {
		Self::Primitive(Primitive::Str)
	}

	pub fn integer() -> Self {
		Self::Primitive(Primitive::Int)
	}

	pub fn float() -> Self {
		Self::Primitive(Primitive::Float)
	}

	pub fn boolean() -> Self {
		Self::Primitive(Primitive::Bool)
	}

	pub fn null() -> Self {
		Self::Null
	}

	/// Wraps `inner` as `inner | None`.
	pub fn optional(inner: TypeRef) -> Self {
		Self::Optional(Box::new(inner))
	}

	/// Builds a union from its members, in declaration order.
	pub fn union(members: impl IntoIterator<Item = TypeRef>) -> Self {
		Self::Union(members.into_iter().collect())
	}

	/// A named type with no built-in meaning.
	pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
		Self::Named(name.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, TypeRef::Null)
	}

	/// Returns true if `None` is an accepted value for this type.
	pub fn is_nullable(&self) -> bool {
		match self {
			TypeRef::Null | TypeRef::Optional(_) => true,
			TypeRef::Union(members) => members.iter().any(TypeRef::is_nullable),
			TypeRef::Primitive(_) | TypeRef::Named(_) => false,
		}
	}

	/// Members of this type other than `None`, in declaration order.
	///
	/// A non-union type is its own single member.
	pub fn non_null_members(&self) -> Vec<&TypeRef> {
		match self {
			TypeRef::Null => Vec::new(),
			TypeRef::Optional(inner) => inner.non_null_members(),
			TypeRef::Union(members) => members
				.iter()
				.flat_map(TypeRef::non_null_members)
				.collect(),
			other => vec![other],
		}
	}
}

impl From<Primitive> for TypeRef {
	fn from(primitive: Primitive) -> Self {
		TypeRef::Primitive(primitive)
	}
}

impl fmt::Display for TypeRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeRef::Primitive(p) => f.write_str(p.as_str()),
			TypeRef::Null => f.write_str("None"),
			TypeRef::Optional(inner) => write!(f, "{} | None", inner),
			TypeRef::Union(members) => {
				for (i, member) in members.iter().enumerate() {
					if i > 0 {
						f.write_str(" | ")?;
					}
					write!(f, "{}", member)?;
				}
				Ok(())
			}
			TypeRef::Named(name) => f.write_str(name),
		}
	}
}
