//! Markup tree construction for formidable
//!
//! Widget renderers build [`ElementView`] nodes; the form renderer composes
//! them into a single [`View`] which is serialized to HTML with
//! [`View::render_to_string`]. Text and attribute values are escaped on
//! serialization, never on construction.

pub mod view;

pub use view::{ElementView, IntoView, View, html_escape};
