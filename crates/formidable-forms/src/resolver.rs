//! Mapping declared field types to renderer tokens.

use formidable_schema::{Primitive, TypeRef};
use std::borrow::Cow;
use std::fmt;

/// Key under which a renderer is bound in the
/// [`RendererRegistry`](crate::RendererRegistry).
///
/// Tokens compare by exact identity: a named type called `"str"` does not
/// share a binding with the built-in string token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RendererToken {
	Primitive(Primitive),
	None,
	Named(Cow<'static, str>),
}

impl RendererToken {
	pub const STRING: Self = Self::Primitive(Primitive::Str);
	pub const INTEGER: Self = Self::Primitive(Primitive::Int);
	pub const FLOAT: Self = Self::Primitive(Primitive::Float);
	pub const BOOLEAN: Self = Self::Primitive(Primitive::Bool);
	pub const NONE: Self = Self::None;

	/// Token for a named, non built-in type.
	pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
		Self::Named(name.into())
	}
}

impl fmt::Display for RendererToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RendererToken::Primitive(Primitive::Str) => f.write_str("string"),
			RendererToken::Primitive(Primitive::Int) => f.write_str("integer"),
			RendererToken::Primitive(Primitive::Float) => f.write_str("float"),
			RendererToken::Primitive(Primitive::Bool) => f.write_str("boolean"),
			RendererToken::None => f.write_str("none"),
			RendererToken::Named(name) => f.write_str(name),
		}
	}
}

/// Result of resolving a field's type: which renderer to use and whether the
/// field accepts no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	pub token: RendererToken,
	pub optional: bool,
}

/// Resolves declared types to renderer tokens.
///
/// # Examples
///
/// ```
/// use formidable_forms::{RendererToken, TypeResolver};
/// use formidable_schema::TypeRef;
///
/// let resolver = TypeResolver::new();
///
/// let resolution = resolver.resolve(&TypeRef::optional(TypeRef::string()));
/// assert_eq!(resolution.token, RendererToken::STRING);
/// assert!(resolution.optional);
///
/// let resolution = resolver.resolve(&TypeRef::integer());
/// assert_eq!(resolution.token, RendererToken::INTEGER);
/// assert!(!resolution.optional);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeResolver;

impl TypeResolver {
	pub fn new() -> Self {
		Self
	}

	pub fn resolve(&self, type_ref: &TypeRef) -> Resolution {
		match type_ref {
			TypeRef::Optional(inner) => Resolution {
				token: self.resolve(inner).token,
				optional: true,
			},
			TypeRef::Union(members) => {
				let mut non_null = members.iter().filter(|member| !member.is_null());
				let has_null = members.iter().any(TypeRef::is_null);

				let Some(first) = non_null.next() else {
					return Resolution {
						token: RendererToken::NONE,
						optional: true,
					};
				};
				if non_null.next().is_some() {
					tracing::debug!(
						union = %type_ref,
						chosen = %first,
						"union has several non-null members; rendering the first"
					);
				}

				let inner = self.resolve(first);
				Resolution {
					token: inner.token,
					optional: has_null || inner.optional,
				}
			}
			TypeRef::Primitive(primitive) => Resolution {
				token: RendererToken::Primitive(*primitive),
				optional: false,
			},
			TypeRef::Null => Resolution {
				token: RendererToken::NONE,
				optional: false,
			},
			TypeRef::Named(name) => Resolution {
				token: RendererToken::Named(name.clone()),
				optional: false,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TypeRef::string(), RendererToken::STRING, false)]
	#[case(TypeRef::integer(), RendererToken::INTEGER, false)]
	#[case(TypeRef::float(), RendererToken::FLOAT, false)]
	#[case(TypeRef::boolean(), RendererToken::BOOLEAN, false)]
	#[case(TypeRef::null(), RendererToken::NONE, false)]
	#[case(TypeRef::named("date"), RendererToken::named("date"), false)]
	#[case(TypeRef::optional(TypeRef::string()), RendererToken::STRING, true)]
	#[case(TypeRef::union([TypeRef::integer(), TypeRef::null()]), RendererToken::INTEGER, true)]
	#[case(TypeRef::union([TypeRef::null(), TypeRef::float()]), RendererToken::FLOAT, true)]
	#[case(TypeRef::union([TypeRef::integer(), TypeRef::string()]), RendererToken::INTEGER, false)]
	#[case(TypeRef::union([TypeRef::optional(TypeRef::boolean())]), RendererToken::BOOLEAN, true)]
	#[case(TypeRef::union([TypeRef::null()]), RendererToken::NONE, true)]
	fn test_resolve(
		#[case] type_ref: TypeRef,
		#[case] token: RendererToken,
		#[case] optional: bool,
	) {
		assert_eq!(
			TypeResolver::new().resolve(&type_ref),
			Resolution { token, optional }
		);
	}

	#[rstest]
	fn test_named_token_does_not_alias_builtin() {
		assert_ne!(RendererToken::named("string"), RendererToken::STRING);
		assert_eq!(RendererToken::named("string").to_string(), RendererToken::STRING.to_string());
	}
}
