//! Forms module.
//!
//! Type resolution, renderer bindings, form rendering, triggers, and the
//! form controller.

pub use formidable_forms::*;
