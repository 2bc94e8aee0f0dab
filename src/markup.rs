//! Markup module.
//!
//! View trees and HTML serialization.
//!
//! # Examples
//!
//! ```
//! use formidable::markup::{ElementView, IntoView};
//!
//! let view = ElementView::new("p").child("a < b").into_view();
//! assert_eq!(view.render_to_string(), "<p>a &lt; b</p>");
//! ```

pub use formidable_markup::*;
