use crate::settings::SettingsError;
use formidable_http::Method;
use formidable_schema::ValidationError;

/// Request-time failures of a form controller.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// The submitted trigger selector was absent or named no registered trigger.
	#[error("Trigger not found: {}", .0.as_deref().unwrap_or("<none submitted>"))]
	TriggerNotFound(Option<String>),

	#[error("Method not supported: {0}")]
	MethodNotSupported(Method),

	/// A trigger action failed with something other than a validation error.
	#[error("Trigger '{trigger}' failed: {source}")]
	Action {
		trigger: String,
		#[source]
		source: anyhow::Error,
	},
}

/// Result type for controller operations
pub type FormResult<T> = Result<T, FormError>;

/// Methods a form controller answers.
pub const ALLOWED_METHODS: [Method; 2] = [Method::GET, Method::POST];

impl From<FormError> for formidable_http::Error {
	fn from(error: FormError) -> Self {
		match error {
			FormError::TriggerNotFound(_) => formidable_http::Error::BadRequest(error.to_string()),
			FormError::MethodNotSupported(method) => formidable_http::Error::MethodNotAllowed {
				method,
				allowed: ALLOWED_METHODS.to_vec(),
			},
			FormError::Action { trigger, source } => {
				formidable_http::Error::Internal(source.context(format!("trigger '{}'", trigger)))
			}
		}
	}
}

/// Configuration-time failures while registering triggers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
	#[error("Duplicate trigger name: {0}")]
	DuplicateName(String),

	#[error("Trigger name '{0}' uses the reserved '_' prefix")]
	ReservedName(String),

	#[error("Trigger name must not be empty")]
	EmptyName,
}

/// Why a form controller could not be built.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
	#[error(transparent)]
	Trigger(#[from] TriggerError),

	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// How a trigger action can fail.
///
/// Validation failures are recovered by the controller with a re-render;
/// anything else is fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Fatal(#[from] anyhow::Error),
}

impl ActionError {
	/// Wrap any error as a fatal action failure.
	pub fn fatal(error: impl Into<anyhow::Error>) -> Self {
		ActionError::Fatal(error.into())
	}
}
