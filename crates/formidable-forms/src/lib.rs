//! Schema-driven HTML forms with named submit triggers.
//!
//! This crate turns a [`SchemaDescriptor`](formidable_schema::SchemaDescriptor)
//! into an HTML form and dispatches its submissions:
//!
//! - [`TypeResolver`] maps each field's declared type to a [`RendererToken`]
//!   and an optional flag.
//! - [`RendererRegistry`] binds tokens (and individual field names) to
//!   [`Renderer`] factories. [`RendererRegistry::with_defaults`] covers
//!   strings, integers, floats and booleans.
//! - [`FormRenderer`] draws the whole `<form>`: one fragment per field in
//!   schema order, then one submit button per trigger. Fields without a
//!   renderer become a visible placeholder instead of an error.
//! - [`TriggerRegistry`] holds a form's named actions in `(order, name)` order.
//! - [`FormController`] answers `GET` with the form and `POST` with the
//!   selected trigger's response, re-rendering the form when the action
//!   reports a [`ValidationError`](formidable_schema::ValidationError).
//!
//! ## Quick Start
//!
//! ```
//! use formidable_forms::{ActionResult, FormController, FormData, FormHandler, TriggerRegistryBuilder};
//! use formidable_http::{Request, Response};
//! use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
//!
//! struct Feedback {
//!     schema: SchemaDescriptor,
//! }
//!
//! impl Feedback {
//!     fn send(&self, request: &Request, data: &FormData) -> ActionResult {
//!         self.schema.validate(data)?;
//!         Ok(Response::temporary_redirect(request.path()))
//!     }
//! }
//!
//! impl FormHandler for Feedback {
//!     fn schema(&self, _request: &Request) -> &SchemaDescriptor {
//!         &self.schema
//!     }
//!
//!     fn triggers(triggers: &mut TriggerRegistryBuilder<Self>) {
//!         triggers.trigger("send", "Send", Self::send);
//!     }
//! }
//!
//! let schema = SchemaDescriptor::builder("Feedback")
//!     .field(FieldDescriptor::new("message", TypeRef::string()).with_title("Message"))
//!     .build()
//!     .unwrap();
//! let controller = FormController::new(Feedback { schema }).unwrap();
//!
//! let page = controller.get(&Request::get("/feedback"));
//! assert!(page.body_text().contains(r#"<label for="id_message">Message</label>"#));
//! ```

pub mod controller;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod settings;
pub mod trigger;
pub mod widgets;

pub use controller::{FormController, FormHandler, Submission};
pub use error::{ALLOWED_METHODS, ActionError, FormError, FormResult, SetupError, TriggerError};
pub use registry::{Renderer, RendererFactory, RendererRegistry};
pub use renderer::{FormRenderer, SubmitButton, unsupported_field};
pub use resolver::{RendererToken, Resolution, TypeResolver};
pub use settings::{DEFAULT_TRIGGER_FIELD, FormSettings, SettingsError};
pub use trigger::{
	ActionResult, DuplicatePolicy, FormData, RESERVED_PREFIX, Trigger, TriggerRegistry,
	TriggerRegistryBuilder,
};
pub use widgets::{InputRenderer, TextareaRenderer, field_container, field_id};
