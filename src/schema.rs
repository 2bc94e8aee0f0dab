//! Schema module.
//!
//! Field descriptors, declared types, and submission validation.

pub use formidable_schema::*;
