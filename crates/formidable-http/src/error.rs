use crate::response::{Response, TEXT_PLAIN};
use http::{Method, StatusCode, header};

/// Errors that reach the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Bad request: {0}")]
	BadRequest(String),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Method not allowed: {method}")]
	MethodNotAllowed { method: Method, allowed: Vec<Method> },

	#[error("Invalid form body: {0}")]
	FormBody(#[from] serde_urlencoded::de::Error),

	/// Unrecovered handler failure. Its detail is logged, never sent to the client.
	#[error("Internal error: {0}")]
	Internal(#[from] anyhow::Error),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// HTTP status this error is reported with.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Error;
	/// use http::StatusCode;
	///
	/// let error = Error::BadRequest("unknown trigger".to_string());
	/// assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::BadRequest(_) | Error::FormBody(_) => StatusCode::BAD_REQUEST,
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
			Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<Error> for Response {
	fn from(error: Error) -> Self {
		let status = error.status_code();
		let body = match &error {
			Error::Internal(_) => status
				.canonical_reason()
				.unwrap_or("Internal Server Error")
				.to_string(),
			other => other.to_string(),
		};
		let response = Response::new(status)
			.with_content_type(TEXT_PLAIN)
			.with_body(body);

		match &error {
			Error::MethodNotAllowed { allowed, .. } => {
				let allow = allowed
					.iter()
					.map(Method::as_str)
					.collect::<Vec<_>>()
					.join(", ");
				response.with_header(header::ALLOW.as_str(), &allow)
			}
			_ => response,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_method_not_allowed_sets_allow_header() {
		let response: Response = Error::MethodNotAllowed {
			method: Method::DELETE,
			allowed: vec![Method::GET, Method::POST],
		}
		.into();
		assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
		assert_eq!(response.header("allow"), Some("GET, POST"));
		assert_eq!(response.body_text(), "Method not allowed: DELETE");
	}

	#[rstest]
	fn test_internal_error_hides_detail() {
		let response: Response = Error::Internal(anyhow::anyhow!("database password leaked")).into();
		assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(response.body_text(), "Internal Server Error");
	}

	#[rstest]
	fn test_not_found_body() {
		let response: Response = Error::NotFound("/missing".to_string()).into();
		assert_eq!(response.status, StatusCode::NOT_FOUND);
		assert_eq!(response.content_type(), Some(TEXT_PLAIN));
		assert_eq!(response.body_text(), "Not found: /missing");
	}
}
