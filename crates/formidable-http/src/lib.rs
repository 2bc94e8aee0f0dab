//! HTTP boundary for formidable
//!
//! This crate models the narrow request/response surface the form engine is
//! driven through:
//!
//! - [`Request`]: method, path and submitted form fields
//! - [`Response`]: status, headers and body
//! - [`Handler`]: anything that answers a [`Request`]
//! - [`Router`]: exact-path routing that converts [`Error`]s into responses
//!
//! Serving these over a socket is left to the embedding application.

pub mod error;
pub mod request;
pub mod response;
pub mod router;

pub use error::{Error, Result};
pub use request::Request;
pub use response::{Response, TEXT_HTML, TEXT_PLAIN};
pub use router::{Handler, Router};

pub use http::{Method, StatusCode};
