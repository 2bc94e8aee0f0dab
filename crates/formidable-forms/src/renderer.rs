//! Whole-form rendering.

use crate::registry::RendererRegistry;
use crate::resolver::TypeResolver;
use crate::settings::DEFAULT_TRIGGER_FIELD;
use formidable_markup::{ElementView, IntoView, View};
use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
use std::sync::Arc;

/// A submit button: `name` is the trigger it selects, `title` its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton<'a> {
	pub name: &'a str,
	pub title: &'a str,
}

/// Fragment rendered in place of a field no renderer is bound for.
///
/// # Examples
///
/// ```
/// use formidable_forms::unsupported_field;
/// use formidable_schema::TypeRef;
///
/// let view = unsupported_field("dob", &TypeRef::named("date"));
/// assert_eq!(
///     view.render_to_string(),
///     r#"<div class="field unsupported" data-field="dob">⚠ No renderer for type: date</div>"#
/// );
/// ```
pub fn unsupported_field(name: &str, type_ref: &TypeRef) -> View {
	ElementView::new("div")
		.attr("class", "field unsupported")
		.attr("data-field", name.to_string())
		.child(format!("⚠ No renderer for type: {}", type_ref))
		.into_view()
}

/// Renders a schema and its submit buttons as a `<form method="post">`.
///
/// Rendering never fails: a field without a renderer becomes a visible
/// placeholder. Output depends only on the schema, the buttons, and the
/// registry, so the same inputs always give the same markup.
///
/// # Examples
///
/// ```
/// use formidable_forms::{FormRenderer, SubmitButton};
/// use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
///
/// let schema = SchemaDescriptor::builder("Search")
///     .field(FieldDescriptor::new("q", TypeRef::string()).with_title("Query"))
///     .build()
///     .unwrap();
/// let view = FormRenderer::default().render(&schema, [SubmitButton { name: "go", title: "Go" }]);
///
/// let html = view.render_to_string();
/// assert!(html.starts_with(r#"<form method="post">"#));
/// assert!(html.contains(r#"<button type="submit" name="__trigger__" value="go">Go</button>"#));
/// ```
#[derive(Debug, Clone)]
pub struct FormRenderer {
	registry: Arc<RendererRegistry>,
	resolver: TypeResolver,
	trigger_field: String,
}

impl Default for FormRenderer {
	fn default() -> Self {
		Self::new(Arc::new(RendererRegistry::with_defaults()))
	}
}

impl FormRenderer {
	pub fn new(registry: Arc<RendererRegistry>) -> Self {
		Self {
			registry,
			resolver: TypeResolver::new(),
			trigger_field: DEFAULT_TRIGGER_FIELD.to_string(),
		}
	}

	pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
		self.resolver = resolver;
		self
	}

	/// Set the form field name that buttons submit their trigger under.
	pub fn with_trigger_field(mut self, trigger_field: impl Into<String>) -> Self {
		self.trigger_field = trigger_field.into();
		self
	}

	pub fn registry(&self) -> &RendererRegistry {
		&self.registry
	}

	pub fn trigger_field(&self) -> &str {
		&self.trigger_field
	}

	/// Render a single field through its custom or token binding.
	pub fn render_field(&self, field: &FieldDescriptor) -> View {
		let resolution = self.resolver.resolve(field.type_ref());

		match self.registry.lookup(field.name(), &resolution.token) {
			Some(factory) => {
				factory(resolution.optional).render(field.name(), field, field.type_ref())
			}
			None => {
				tracing::warn!(
					field = field.name(),
					type_ref = %field.type_ref(),
					token = %resolution.token,
					"no renderer bound; rendering placeholder"
				);
				unsupported_field(field.name(), field.type_ref())
			}
		}
	}

	pub fn render_button(&self, button: SubmitButton<'_>) -> View {
		ElementView::new("button")
			.attr("type", "submit")
			.attr("name", self.trigger_field.clone())
			.attr("value", button.name.to_string())
			.child(button.title.to_string())
			.into_view()
	}

	/// Render every field in schema order, then every button in the order given.
	pub fn render<'a>(
		&self,
		schema: &SchemaDescriptor,
		buttons: impl IntoIterator<Item = SubmitButton<'a>>,
	) -> View {
		ElementView::new("form")
			.attr("method", "post")
			.children(schema.iter().map(|field| self.render_field(field)))
			.children(buttons.into_iter().map(|button| self.render_button(button)))
			.into_view()
	}
}
