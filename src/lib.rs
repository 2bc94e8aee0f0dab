//! # Formidable
//!
//! Schema-driven HTML forms with named submit triggers.
//!
//! A form is described by a schema: ordered fields, each with a title, a
//! declared type, and a required flag. Formidable renders that schema as an
//! HTML form, one widget per field and one submit button per trigger, and
//! dispatches each submission to the trigger whose button was pressed.
//!
//! ## Crates
//!
//! - [`markup`] - view trees and HTML serialization
//! - [`schema`] - field descriptors, declared types, validation
//! - [`http`] - requests, responses, routing
//! - [`forms`] - renderers, triggers and the form controller (feature `forms`)
//!
//! ## Quick Example
//!
//! ```
//! use formidable::prelude::*;
//!
//! #[derive(Deserialize)]
//! struct Signup {
//!     email: String,
//! }
//!
//! impl FormSchema for Signup {
//!     fn schema() -> Result<SchemaDescriptor, SchemaError> {
//!         SchemaDescriptor::builder("Signup")
//!             .field(FieldDescriptor::new("email", TypeRef::string()).with_title("Email"))
//!             .build()
//!     }
//! }
//!
//! struct SignupPage {
//!     schema: SchemaDescriptor,
//! }
//!
//! impl SignupPage {
//!     fn join(&self, request: &Request, data: &FormData) -> ActionResult {
//!         let signup: Signup = self.schema.parse(data)?;
//!         assert!(!signup.email.is_empty());
//!         Ok(Response::temporary_redirect(request.path()))
//!     }
//! }
//!
//! impl FormHandler for SignupPage {
//!     fn schema(&self, _request: &Request) -> &SchemaDescriptor {
//!         &self.schema
//!     }
//!
//!     fn triggers(triggers: &mut TriggerRegistryBuilder<Self>) {
//!         triggers.trigger("join", "Join", Self::join);
//!     }
//! }
//!
//! let page = SignupPage { schema: Signup::schema().unwrap() };
//! let router = Router::new().route("/signup", FormController::new(page).unwrap());
//!
//! let response = router.dispatch(&Request::post(
//!     "/signup",
//!     [("email", "ada@example.com"), ("__trigger__", "join")],
//! ));
//! assert_eq!(response.status, StatusCode::FOUND);
//! ```

pub mod http;
pub mod markup;
pub mod schema;

#[cfg(feature = "forms")]
pub mod forms;

pub use formidable_http::{Error, Request, Response, Result, Router};
pub use formidable_markup::View;
pub use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef, ValidationError};

#[cfg(feature = "forms")]
pub use formidable_forms::{FormController, FormHandler, FormRenderer, RendererRegistry};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::http::{Handler, Method, Request, Response, Router, StatusCode};
	pub use crate::markup::{ElementView, IntoView, View};
	pub use crate::schema::{
		FieldDescriptor, FormSchema, SchemaDescriptor, SchemaError, TypeRef, ValidationError,
	};

	#[cfg(feature = "forms")]
	pub use crate::forms::{
		ActionError, ActionResult, FormController, FormData, FormError, FormHandler,
		FormRenderer, FormSettings, Renderer, RendererRegistry, RendererToken, Trigger,
		TriggerRegistryBuilder,
	};

	// External
	pub use serde::Deserialize;
}
