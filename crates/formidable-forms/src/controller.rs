//! Request handling for a single form
//!
//! A [`FormController`] owns a [`FormHandler`], the handler's validated
//! triggers, and the renderer used to draw its form:
//!
//! - `GET` renders the form.
//! - `POST` reads the trigger selector from the submitted data and runs
//!   exactly that trigger's action. An action that fails validation gets the
//!   form re-rendered with status 200; any other failure is returned as an
//!   error.
//! - Every other method is rejected.

use crate::error::{ActionError, FormError, FormResult, SetupError};
use crate::registry::RendererRegistry;
use crate::renderer::FormRenderer;
use crate::settings::FormSettings;
use crate::trigger::{TriggerRegistry, TriggerRegistryBuilder};
use formidable_http::{Handler, Method, Request, Response};
use formidable_markup::View;
use formidable_schema::{SchemaDescriptor, ValidationError};
use std::fmt;
use std::sync::Arc;

/// A form: its schema and the triggers that can submit it.
///
/// # Examples
///
/// ```
/// use formidable_forms::{ActionResult, FormController, FormData, FormHandler, TriggerRegistryBuilder};
/// use formidable_http::{Request, Response, StatusCode};
/// use formidable_schema::{FieldDescriptor, SchemaDescriptor, TypeRef};
///
/// struct Newsletter {
///     schema: SchemaDescriptor,
/// }
///
/// impl Newsletter {
///     fn subscribe(&self, request: &Request, data: &FormData) -> ActionResult {
///         self.schema.validate(data)?;
///         Ok(Response::temporary_redirect(request.path()))
///     }
/// }
///
/// impl FormHandler for Newsletter {
///     fn schema(&self, _request: &Request) -> &SchemaDescriptor {
///         &self.schema
///     }
///
///     fn triggers(triggers: &mut TriggerRegistryBuilder<Self>) {
///         triggers.trigger("subscribe", "Subscribe", Self::subscribe);
///     }
/// }
///
/// let schema = SchemaDescriptor::builder("Newsletter")
///     .field(FieldDescriptor::new("email", TypeRef::string()))
///     .build()
///     .unwrap();
/// let controller = FormController::new(Newsletter { schema }).unwrap();
///
/// let response = controller
///     .dispatch(&Request::post("/news", [("email", "a@b.c"), ("__trigger__", "subscribe")]))
///     .unwrap();
/// assert_eq!(response.status, StatusCode::FOUND);
/// ```
pub trait FormHandler: Send + Sync + Sized + 'static {
	/// The schema rendered and submitted for `request`.
	fn schema(&self, request: &Request) -> &SchemaDescriptor;

	/// Declare this form's triggers.
	fn triggers(triggers: &mut TriggerRegistryBuilder<Self>);
}

/// Outcome of a submission that reached its trigger.
#[derive(Debug)]
pub enum Submission {
	/// The action returned a response.
	Succeeded { trigger: String, response: Response },
	/// The action rejected the data; `response` is the re-rendered form.
	Invalid {
		trigger: String,
		response: Response,
		error: ValidationError,
	},
}

impl Submission {
	pub fn trigger(&self) -> &str {
		match self {
			Submission::Succeeded { trigger, .. } | Submission::Invalid { trigger, .. } => trigger,
		}
	}

	pub fn response(&self) -> &Response {
		match self {
			Submission::Succeeded { response, .. } | Submission::Invalid { response, .. } => {
				response
			}
		}
	}

	pub fn into_response(self) -> Response {
		match self {
			Submission::Succeeded { response, .. } | Submission::Invalid { response, .. } => {
				response
			}
		}
	}

	pub fn is_invalid(&self) -> bool {
		matches!(self, Submission::Invalid { .. })
	}

	/// The validation failure, for an invalid submission.
	pub fn validation_error(&self) -> Option<&ValidationError> {
		match self {
			Submission::Invalid { error, .. } => Some(error),
			Submission::Succeeded { .. } => None,
		}
	}
}

/// Serves one [`FormHandler`].
///
/// Everything a controller holds is read-only after construction, so one
/// controller can serve concurrent requests.
pub struct FormController<H: FormHandler> {
	handler: H,
	triggers: TriggerRegistry<H>,
	renderer: FormRenderer,
	settings: FormSettings,
}

impl<H: FormHandler> FormController<H> {
	/// Build a controller with default settings and built-in renderers.
	pub fn new(handler: H) -> Result<Self, SetupError> {
		Self::with_settings(handler, FormSettings::default())
	}

	/// Build a controller, validating `settings` and the handler's trigger
	/// declarations.
	pub fn with_settings(handler: H, settings: FormSettings) -> Result<Self, SetupError> {
		settings.validate()?;
		let mut builder = TriggerRegistryBuilder::new().with_policy(settings.duplicate_triggers);
		H::triggers(&mut builder);
		let triggers = builder.build()?;

		tracing::debug!(
			handler = std::any::type_name::<H>(),
			triggers = ?triggers.names(),
			"form controller ready"
		);

		let renderer = FormRenderer::default().with_trigger_field(settings.trigger_field.clone());
		Ok(Self {
			handler,
			triggers,
			renderer,
			settings,
		})
	}

	/// Render with `registry` instead of the built-in renderers.
	pub fn with_renderers(mut self, registry: Arc<RendererRegistry>) -> Self {
		self.renderer =
			FormRenderer::new(registry).with_trigger_field(self.settings.trigger_field.clone());
		self
	}

	pub fn handler(&self) -> &H {
		&self.handler
	}

	pub fn triggers(&self) -> &TriggerRegistry<H> {
		&self.triggers
	}

	pub fn renderer(&self) -> &FormRenderer {
		&self.renderer
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	/// The form for `request`, with one button per trigger.
	pub fn render_form(&self, request: &Request) -> View {
		self.renderer
			.render(self.handler.schema(request), self.triggers.buttons())
	}

	/// `200 OK` carrying the rendered form.
	pub fn get(&self, request: &Request) -> Response {
		Response::ok()
			.with_content_type(&self.settings.content_type)
			.with_body(self.render_form(request).render_to_string())
	}

	/// Run the trigger selected by the submitted data.
	pub fn submit(&self, request: &Request) -> FormResult<Submission> {
		let data = request.form();

		let Some(name) = data.get(&self.settings.trigger_field) else {
			tracing::warn!(
				path = request.path(),
				field = %self.settings.trigger_field,
				"submission carries no trigger"
			);
			return Err(FormError::TriggerNotFound(None));
		};
		let Some(trigger) = self.triggers.get(name) else {
			tracing::warn!(path = request.path(), trigger = %name, "unknown trigger submitted");
			return Err(FormError::TriggerNotFound(Some(name.clone())));
		};

		tracing::debug!(path = request.path(), trigger = %name, "dispatching trigger");
		match trigger.invoke(&self.handler, request, data) {
			Ok(response) => Ok(Submission::Succeeded {
				trigger: name.clone(),
				response,
			}),
			Err(ActionError::Validation(error)) => {
				tracing::info!(
					path = request.path(),
					trigger = %name,
					fields = ?error.field_names(),
					"submission failed validation; re-rendering form"
				);
				Ok(Submission::Invalid {
					trigger: name.clone(),
					response: self.get(request),
					error,
				})
			}
			Err(ActionError::Fatal(source)) => Err(FormError::Action {
				trigger: name.clone(),
				source,
			}),
		}
	}

	/// Answer a request according to its method.
	pub fn dispatch(&self, request: &Request) -> FormResult<Response> {
		match request.method {
			Method::GET => Ok(self.get(request)),
			Method::POST => self.submit(request).map(Submission::into_response),
			_ => Err(FormError::MethodNotSupported(request.method.clone())),
		}
	}
}

impl<H: FormHandler> Handler for FormController<H> {
	fn handle(&self, request: &Request) -> formidable_http::Result<Response> {
		Ok(self.dispatch(request)?)
	}
}

impl<H: FormHandler> fmt::Debug for FormController<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormController")
			.field("handler", &std::any::type_name::<H>())
			.field("triggers", &self.triggers.names())
			.field("renderer", &self.renderer)
			.field("settings", &self.settings)
			.finish()
	}
}
