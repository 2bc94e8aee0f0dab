//! Form engine settings
//!
//! Settings are plain data loaded once at start-up, from defaults or a TOML
//! document:
//!
//! ```toml
//! trigger_field = "__trigger__"
//! content_type = "text/html; charset=utf-8"
//! duplicate_triggers = "reject"
//! ```

use crate::trigger::DuplicatePolicy;
use formidable_http::TEXT_HTML;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the form field that carries the selected trigger.
pub const DEFAULT_TRIGGER_FIELD: &str = "__trigger__";

/// Error type for loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid setting: {0}")]
	Invalid(String),
}

/// Settings shared by every form controller built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Form field whose value names the trigger to run.
	pub trigger_field: String,
	/// Content type of rendered form responses.
	pub content_type: String,
	/// What to do when two triggers share a name.
	pub duplicate_triggers: DuplicatePolicy,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			trigger_field: DEFAULT_TRIGGER_FIELD.to_string(),
			content_type: TEXT_HTML.to_string(),
			duplicate_triggers: DuplicatePolicy::default(),
		}
	}
}

impl FormSettings {
	/// Parse settings from a TOML document. Missing keys take their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use formidable_forms::{DuplicatePolicy, FormSettings};
	///
	/// let settings = FormSettings::from_toml_str(r#"duplicate_triggers = "replace""#).unwrap();
	/// assert_eq!(settings.duplicate_triggers, DuplicatePolicy::Replace);
	/// assert_eq!(settings.trigger_field, "__trigger__");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read and parse a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded form settings");
		Ok(settings)
	}

	/// Check invariants that serde cannot express.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.trigger_field.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"trigger_field must not be empty".to_string(),
			));
		}
		if self.content_type.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"content_type must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[fixture]
	fn settings_file() -> NamedTempFile {
		let mut file = NamedTempFile::new().expect("Failed to create temporary file");
		writeln!(
			file,
			"trigger_field = \"action\"\nduplicate_triggers = \"replace\""
		)
		.expect("Failed to write settings");
		file
	}

	#[rstest]
	fn test_defaults() {
		let settings = FormSettings::default();
		assert_eq!(settings.trigger_field, DEFAULT_TRIGGER_FIELD);
		assert_eq!(settings.content_type, TEXT_HTML);
		assert_eq!(settings.duplicate_triggers, DuplicatePolicy::Reject);
	}

	#[rstest]
	fn test_empty_document_is_default() {
		assert_eq!(FormSettings::from_toml_str("").unwrap(), FormSettings::default());
	}

	#[rstest]
	fn test_from_file(settings_file: NamedTempFile) {
		let settings = FormSettings::from_file(settings_file.path()).unwrap();
		assert_eq!(settings.trigger_field, "action");
		assert_eq!(settings.duplicate_triggers, DuplicatePolicy::Replace);
		assert_eq!(settings.content_type, TEXT_HTML);
	}

	#[rstest]
	fn test_missing_file_is_io_error() {
		let result = FormSettings::from_file("/nonexistent/formidable.toml");
		assert!(matches!(result, Err(SettingsError::Io(_))));
	}

	#[rstest]
	#[case("trigger_field = \"\"")]
	#[case("content_type = \"  \"")]
	fn test_rejects_blank_values(#[case] source: &str) {
		assert!(matches!(
			FormSettings::from_toml_str(source),
			Err(SettingsError::Invalid(_))
		));
	}

	#[rstest]
	fn test_rejects_unknown_policy() {
		assert!(matches!(
			FormSettings::from_toml_str("duplicate_triggers = \"merge\""),
			Err(SettingsError::Toml(_))
		));
	}
}
