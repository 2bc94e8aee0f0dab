//! Renderer registry
//!
//! Binds renderer tokens, and optionally individual field names, to renderer
//! factories. A registry is configured up front and then shared read-only
//! (typically behind an [`Arc`]) by every form renderer that uses it.

use crate::resolver::RendererToken;
use crate::widgets::InputRenderer;
use formidable_markup::View;
use formidable_schema::{FieldDescriptor, TypeRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Renders one field as a view fragment.
pub trait Renderer: Send + Sync {
	/// Render the field called `name`.
	///
	/// `type_ref` is the field's declared type, before resolution.
	fn render(&self, name: &str, field: &FieldDescriptor, type_ref: &TypeRef) -> View;
}

/// Builds a renderer given whether the field resolved as optional.
pub type RendererFactory = Arc<dyn Fn(bool) -> Box<dyn Renderer> + Send + Sync>;

/// Token and field-name bindings to renderer factories.
///
/// A binding for a specific field name wins over its type's token binding.
///
/// # Examples
///
/// ```
/// use formidable_forms::{RendererRegistry, RendererToken, TextareaRenderer};
///
/// let mut registry = RendererRegistry::with_defaults();
/// registry.register_custom("bio", TextareaRenderer::new);
///
/// assert!(registry.has_binding(&RendererToken::STRING));
/// assert!(registry.has_custom("bio"));
/// assert!(registry.lookup("bio", &RendererToken::STRING).is_some());
/// assert!(registry.lookup("dob", &RendererToken::named("date")).is_none());
/// ```
#[derive(Clone, Default)]
pub struct RendererRegistry {
	bindings: HashMap<RendererToken, RendererFactory>,
	custom: HashMap<String, RendererFactory>,
}

impl RendererRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry with the built-in widgets bound:
	/// string → text input, integer → number input, float → number input
	/// with `step="any"`, boolean → checkbox.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry
			.register(RendererToken::STRING, InputRenderer::text)
			.register(RendererToken::INTEGER, InputRenderer::number)
			.register(RendererToken::FLOAT, InputRenderer::float)
			.register(RendererToken::BOOLEAN, InputRenderer::checkbox);
		registry
	}

	fn factory<F, R>(factory: F) -> RendererFactory
	where
		F: Fn(bool) -> R + Send + Sync + 'static,
		R: Renderer + 'static,
	{
		Arc::new(move |optional| Box::new(factory(optional)) as Box<dyn Renderer>)
	}

	/// Bind a factory to a token, replacing any earlier binding.
	pub fn register<F, R>(&mut self, token: RendererToken, factory: F) -> &mut Self
	where
		F: Fn(bool) -> R + Send + Sync + 'static,
		R: Renderer + 'static,
	{
		if self.bindings.insert(token.clone(), Self::factory(factory)).is_some() {
			tracing::debug!(%token, "replaced renderer binding");
		}
		self
	}

	/// Bind a factory to one field name, replacing any earlier binding.
	pub fn register_custom<F, R>(&mut self, field_name: impl Into<String>, factory: F) -> &mut Self
	where
		F: Fn(bool) -> R + Send + Sync + 'static,
		R: Renderer + 'static,
	{
		let field_name = field_name.into();
		if self.custom.contains_key(&field_name) {
			tracing::debug!(field = %field_name, "replaced custom renderer binding");
		}
		self.custom.insert(field_name, Self::factory(factory));
		self
	}

	/// Find the factory for a field: its name binding first, then its token.
	pub fn lookup(&self, field_name: &str, token: &RendererToken) -> Option<&RendererFactory> {
		self.custom
			.get(field_name)
			.or_else(|| self.bindings.get(token))
	}

	pub fn has_binding(&self, token: &RendererToken) -> bool {
		self.bindings.contains_key(token)
	}

	pub fn has_custom(&self, field_name: &str) -> bool {
		self.custom.contains_key(field_name)
	}

	/// Bound tokens, in display order.
	pub fn tokens(&self) -> Vec<&RendererToken> {
		let mut tokens: Vec<_> = self.bindings.keys().collect();
		tokens.sort_by_key(|token| token.to_string());
		tokens
	}
}

impl fmt::Debug for RendererRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut custom: Vec<_> = self.custom.keys().collect();
		custom.sort();
		f.debug_struct("RendererRegistry")
			.field("bindings", &self.tokens())
			.field("custom", &custom)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::widgets::TextareaRenderer;
	use formidable_markup::{ElementView, IntoView};
	use rstest::rstest;

	struct Marker(&'static str);

	impl Renderer for Marker {
		fn render(&self, name: &str, _field: &FieldDescriptor, _type_ref: &TypeRef) -> View {
			ElementView::new("span")
				.attr("data-field", name.to_string())
				.child(self.0)
				.into_view()
		}
	}

	fn render_with(
		registry: &RendererRegistry,
		field: &FieldDescriptor,
		token: RendererToken,
	) -> String {
		let factory = registry.lookup(field.name(), &token).expect("binding");
		factory(false)
			.render(field.name(), field, field.type_ref())
			.render_to_string()
	}

	#[rstest]
	#[case(RendererToken::STRING)]
	#[case(RendererToken::INTEGER)]
	#[case(RendererToken::FLOAT)]
	#[case(RendererToken::BOOLEAN)]
	fn test_defaults_bind_builtins(#[case] token: RendererToken) {
		assert!(RendererRegistry::with_defaults().has_binding(&token));
	}

	#[rstest]
	fn test_defaults_leave_none_and_named_unbound() {
		let registry = RendererRegistry::with_defaults();
		assert!(!registry.has_binding(&RendererToken::NONE));
		assert!(registry.lookup("when", &RendererToken::named("date")).is_none());
	}

	#[rstest]
	fn test_custom_binding_wins_over_token() {
		let mut registry = RendererRegistry::with_defaults();
		registry.register_custom("bio", TextareaRenderer::new);

		let bio = FieldDescriptor::new("bio", TypeRef::string());
		let name = FieldDescriptor::new("name", TypeRef::string());
		assert!(render_with(&registry, &bio, RendererToken::STRING).contains("<textarea"));
		assert!(render_with(&registry, &name, RendererToken::STRING).contains("<input"));
	}

	#[rstest]
	#[case::custom_first(true)]
	#[case::token_first(false)]
	fn test_custom_binding_wins_in_any_order(#[case] custom_first: bool) {
		let mut registry = RendererRegistry::new();
		if custom_first {
			registry
				.register_custom("bio", |_| Marker("custom"))
				.register(RendererToken::STRING, |_| Marker("token"));
		} else {
			registry
				.register(RendererToken::STRING, |_| Marker("token"))
				.register_custom("bio", |_| Marker("custom"));
		}

		let bio = FieldDescriptor::new("bio", TypeRef::string());
		let name = FieldDescriptor::new("name", TypeRef::string());
		assert_eq!(
			render_with(&registry, &bio, RendererToken::STRING),
			r#"<span data-field="bio">custom</span>"#
		);
		assert_eq!(
			render_with(&registry, &name, RendererToken::STRING),
			r#"<span data-field="name">token</span>"#
		);
	}

	#[rstest]
	fn test_register_replaces() {
		let mut registry = RendererRegistry::new();
		registry
			.register(RendererToken::STRING, |_| Marker("first"))
			.register(RendererToken::STRING, |_| Marker("second"));

		let field = FieldDescriptor::new("x", TypeRef::string());
		assert_eq!(
			render_with(&registry, &field, RendererToken::STRING),
			r#"<span data-field="x">second</span>"#
		);
		assert_eq!(registry.tokens().len(), 1);
	}

	#[rstest]
	fn test_factory_receives_optional_flag() {
		let registry = RendererRegistry::with_defaults();
		let field = FieldDescriptor::new("n", TypeRef::integer());
		let factory = registry.lookup("n", &RendererToken::INTEGER).unwrap();

		let html = factory(true).render("n", &field, field.type_ref()).render_to_string();
		assert!(html.contains(r#"class="field optional""#));
		assert!(!html.contains("required"));
	}
}
