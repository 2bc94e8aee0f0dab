use crate::Result;
use http::{HeaderMap, Method};
use std::collections::HashMap;

/// HTTP request as seen by form handlers.
///
/// Only the method, the path and the submitted form fields are modelled;
/// headers are carried along for handlers that want them.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub headers: HeaderMap,
	path: String,
	form: HashMap<String, String>,
}

impl Request {
	/// Create a request with no form fields.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Request;
	/// use http::Method;
	///
	/// let request = Request::new(Method::GET, "/");
	/// assert_eq!(request.path(), "/");
	/// assert!(request.form().is_empty());
	/// ```
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			headers: HeaderMap::new(),
			path: path.into(),
			form: HashMap::new(),
		}
	}

	/// Create a GET request.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// Create a POST request carrying the given form fields.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Request;
	///
	/// let request = Request::post("/", [("name", "A"), ("__trigger__", "save")]);
	/// assert_eq!(request.form_value("name"), Some("A"));
	/// ```
	pub fn post<K, V>(path: impl Into<String>, form: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self::new(Method::POST, path).with_form(form)
	}

	/// Add form fields. An existing key keeps its first value.
	pub fn with_form<K, V>(mut self, form: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in form {
			self.form.entry(key.into()).or_insert_with(|| value.into());
		}
		self
	}

	/// Parse an `application/x-www-form-urlencoded` body into form fields.
	///
	/// Repeated keys keep their first value.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_http::Request;
	///
	/// let request = Request::new(http::Method::POST, "/")
	///     .with_urlencoded_body(b"name=Ada+L&agree=true&name=ignored")
	///     .unwrap();
	/// assert_eq!(request.form_value("name"), Some("Ada L"));
	/// assert_eq!(request.form_value("agree"), Some("true"));
	/// ```
	pub fn with_urlencoded_body(self, body: &[u8]) -> Result<Self> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
		Ok(self.with_form(pairs))
	}

	/// Add a header. Invalid names or values are ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = http::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = http::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	/// Submitted form fields as a string-keyed mapping.
	pub fn form(&self) -> &HashMap<String, String> {
		&self.form
	}

	pub fn form_value(&self, key: &str) -> Option<&str> {
		self.form.get(key).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_with_form_keeps_first_value() {
		let request = Request::post("/", [("a", "1"), ("a", "2")]);
		assert_eq!(request.form_value("a"), Some("1"));
	}

	#[rstest]
	fn test_urlencoded_body_decodes_percent_escapes() {
		let request = Request::new(Method::POST, "/signup")
			.with_urlencoded_body(b"nickname=%3Cb%3E&age=30")
			.unwrap();
		assert_eq!(request.form_value("nickname"), Some("<b>"));
		assert_eq!(request.form_value("age"), Some("30"));
	}

	#[rstest]
	fn test_with_header_ignores_invalid_name() {
		let request = Request::get("/")
			.with_header("x-form", "signup")
			.with_header("bad header", "value");
		assert_eq!(request.headers.len(), 1);
		assert_eq!(request.headers.get("x-form").unwrap(), "signup");
	}
}
