use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use std::borrow::Cow;

/// Content type used for rendered forms.
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Content type used for plain-text error bodies.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Response;
	/// use http::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}
	/// Create a `200 OK` response carrying an HTML document
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Response;
	///
	/// let response = Response::html("<form></form>");
	/// assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
	/// assert_eq!(response.body_text(), "<form></form>");
	/// ```
	pub fn html(body: impl Into<Bytes>) -> Self {
		Self::ok()
			.with_content_type(TEXT_HTML)
			.with_body(body)
	}
	/// Create a Response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}
	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}
	/// Create a Response with HTTP 405 Method Not Allowed status
	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}
	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}
	/// Create a Response with HTTP 302 Found (temporary redirect)
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Response;
	/// use http::StatusCode;
	///
	/// let response = Response::temporary_redirect("/thanks");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(response.header("location"), Some("/thanks"));
	/// ```
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}
	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
	/// Add a custom header to the response
	///
	/// Invalid header names or values are ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}
	/// Add a Location header to the response (typically used for redirects)
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = header::HeaderValue::from_str(location) {
			self.headers.insert(header::LOCATION, value);
		}
		self
	}
	/// Set the Content-Type header
	pub fn with_content_type(mut self, content_type: &str) -> Self {
		let value = header::HeaderValue::from_str(content_type)
			.unwrap_or_else(|_| header::HeaderValue::from_static("application/octet-stream"));
		self.headers.insert(header::CONTENT_TYPE, value);
		self
	}
	/// Returns the value of a header if it is present and valid text
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
	/// Returns the Content-Type header, if set
	pub fn content_type(&self) -> Option<&str> {
		self.header(header::CONTENT_TYPE.as_str())
	}
	/// Returns the body decoded as UTF-8 (lossily)
	pub fn body_text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}
	/// Returns true for 2xx statuses
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Response::ok(), StatusCode::OK)]
	#[case(Response::bad_request(), StatusCode::BAD_REQUEST)]
	#[case(Response::not_found(), StatusCode::NOT_FOUND)]
	#[case(Response::method_not_allowed(), StatusCode::METHOD_NOT_ALLOWED)]
	#[case(Response::internal_server_error(), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_status_constructors(#[case] response: Response, #[case] expected: StatusCode) {
		assert_eq!(response.status, expected);
	}

	#[rstest]
	fn test_with_header_ignores_invalid_value() {
		let response = Response::ok()
			.with_header("x-trigger", "save")
			.with_header("x-bad", "line\nbreak");
		assert_eq!(response.header("x-trigger"), Some("save"));
		assert_eq!(response.header("x-bad"), None);
	}

	#[rstest]
	fn test_content_type_falls_back_on_invalid_value() {
		let response = Response::ok().with_content_type("text/html\n");
		assert_eq!(response.content_type(), Some("application/octet-stream"));
	}

	#[rstest]
	fn test_html_response_is_success() {
		let response = Response::html("<p>hi</p>");
		assert!(response.is_success());
		assert_eq!(response.body_text(), "<p>hi</p>");
	}
}
