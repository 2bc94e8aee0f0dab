//! HTTP module.
//!
//! Requests, responses, boundary errors, and exact-path routing.
//!
//! # Examples
//!
//! ```
//! use formidable::http::{Request, Response, Router, StatusCode};
//!
//! let router = Router::new().route_fn("/ping", |_| Ok(Response::html("pong")));
//! assert_eq!(router.dispatch(&Request::get("/ping")).status, StatusCode::OK);
//! ```

pub use formidable_http::*;
