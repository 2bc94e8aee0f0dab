//! Exact-path routing to request handlers.

use crate::{Error, Request, Response, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Anything that can answer a request.
///
/// Handlers are shared across concurrent requests, so they only get `&self`.
pub trait Handler: Send + Sync {
	fn handle(&self, request: &Request) -> Result<Response>;
}

impl<F> Handler for F
where
	F: Fn(&Request) -> Result<Response> + Send + Sync,
{
	fn handle(&self, request: &Request) -> Result<Response> {
		self(request)
	}
}

/// Maps request paths to handlers and turns handler errors into responses.
///
/// # Examples
///
/// ```
/// use formidable_http::{Request, Response, Router};
/// use http::StatusCode;
///
/// let router = Router::new().route_fn("/", |_| Ok(Response::html("<p>home</p>")));
///
/// assert_eq!(router.dispatch(&Request::get("/")).status, StatusCode::OK);
/// assert_eq!(router.dispatch(&Request::get("/nope")).status, StatusCode::NOT_FOUND);
/// ```
#[derive(Default)]
pub struct Router {
	routes: HashMap<String, Arc<dyn Handler>>,
}

impl Router {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `handler` for the exact `path`. A later registration for the
	/// same path replaces the earlier one.
	pub fn route(self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
		self.route_shared(path, Arc::new(handler))
	}

	/// Register a closure for the exact `path`.
	pub fn route_fn<F>(self, path: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
	{
		self.route(path, handler)
	}

	/// Register an already shared handler for the exact `path`.
	pub fn route_shared(mut self, path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
		self.routes.insert(path.into(), handler);
		self
	}

	/// Returns the handler registered for `path`.
	pub fn resolve(&self, path: &str) -> Option<&Arc<dyn Handler>> {
		self.routes.get(path)
	}

	/// Route the request, converting any error into an error response.
	pub fn dispatch(&self, request: &Request) -> Response {
		let result = match self.resolve(request.path()) {
			Some(handler) => handler.handle(request),
			None => Err(Error::NotFound(request.path().to_string())),
		};

		match result {
			Ok(response) => {
				tracing::debug!(
					method = %request.method,
					path = request.path(),
					status = response.status.as_u16(),
					"request handled"
				);
				response
			}
			Err(Error::Internal(source)) => {
				tracing::error!(
					method = %request.method,
					path = request.path(),
					error = ?source,
					"handler failed"
				);
				Error::Internal(source).into()
			}
			Err(error) => {
				tracing::debug!(
					method = %request.method,
					path = request.path(),
					%error,
					"request rejected"
				);
				error.into()
			}
		}
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut paths: Vec<_> = self.routes.keys().collect();
		paths.sort();
		f.debug_struct("Router").field("routes", &paths).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::StatusCode;
	use rstest::rstest;

	fn failing(_: &Request) -> Result<Response> {
		Err(anyhow::anyhow!("boom").into())
	}

	#[rstest]
	fn test_dispatch_to_registered_path() {
		let router = Router::new()
			.route_fn("/a", |_| Ok(Response::html("a")))
			.route_fn("/b", |_| Ok(Response::html("b")));
		assert_eq!(router.len(), 2);
		assert_eq!(router.dispatch(&Request::get("/b")).body_text(), "b");
	}

	#[rstest]
	fn test_later_route_replaces_earlier() {
		let router = Router::new()
			.route_fn("/", |_| Ok(Response::html("first")))
			.route_fn("/", |_| Ok(Response::html("second")));
		assert_eq!(router.len(), 1);
		assert_eq!(router.dispatch(&Request::get("/")).body_text(), "second");
	}

	#[rstest]
	fn test_internal_error_becomes_500() {
		let router = Router::new().route("/", failing);
		let response = router.dispatch(&Request::get("/"));
		assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	}

	fn shared(_: &Request) -> Result<Response> {
		Ok(Response::html("shared"))
	}

	#[rstest]
	fn test_shared_handler_serves_several_paths() {
		let handler: Arc<dyn Handler> = Arc::new(shared);
		let router = Router::new()
			.route_shared("/one", Arc::clone(&handler))
			.route_shared("/two", handler);
		assert_eq!(router.dispatch(&Request::get("/one")).body_text(), "shared");
		assert_eq!(router.dispatch(&Request::get("/two")).body_text(), "shared");
	}
}
