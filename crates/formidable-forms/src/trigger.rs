//! Named submit actions
//!
//! A trigger is a submit button plus the action run when that button submits
//! the form. Triggers are declared per handler type, validated once, and then
//! kept in a read-only [`TriggerRegistry`] ordered by `(order, name)`.

use crate::error::{ActionError, TriggerError};
use crate::renderer::SubmitButton;
use formidable_http::{Request, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Submitted form data: field name to its first submitted value.
pub type FormData = HashMap<String, String>;

/// What a trigger action returns.
pub type ActionResult = Result<Response, ActionError>;

type Action<C> = Box<dyn Fn(&C, &Request, &FormData) -> ActionResult + Send + Sync>;

/// Trigger names starting with this character are reserved.
pub const RESERVED_PREFIX: char = '_';

/// A named action bound to handler type `C`.
///
/// # Examples
///
/// ```
/// use formidable_forms::{FormData, Trigger};
/// use formidable_http::{Request, Response};
///
/// struct Contact;
///
/// let trigger = Trigger::new("send", "Send", |_: &Contact, request: &Request, _: &FormData| {
///     Ok(Response::temporary_redirect(request.path()))
/// })
/// .with_order(10);
///
/// assert_eq!(trigger.name(), "send");
/// assert_eq!(trigger.order(), 10);
/// ```
pub struct Trigger<C> {
	name: String,
	title: String,
	order: i32,
	action: Action<C>,
}

impl<C> Trigger<C> {
	pub fn new<F>(name: impl Into<String>, title: impl Into<String>, action: F) -> Self
	where
		F: Fn(&C, &Request, &FormData) -> ActionResult + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			title: title.into(),
			order: 0,
			action: Box::new(action),
		}
	}

	/// Position among the form's buttons; lower comes first.
	pub fn with_order(mut self, order: i32) -> Self {
		self.order = order;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn order(&self) -> i32 {
		self.order
	}

	/// Run the action against `handler`.
	pub fn invoke(&self, handler: &C, request: &Request, data: &FormData) -> ActionResult {
		(self.action)(handler, request, data)
	}

	/// The submit button for this trigger.
	pub fn button(&self) -> SubmitButton<'_> {
		SubmitButton {
			name: &self.name,
			title: &self.title,
		}
	}

	fn sort_key(&self) -> (i32, &str) {
		(self.order, &self.name)
	}

	fn check_name(&self) -> Result<(), TriggerError> {
		if self.name.is_empty() {
			return Err(TriggerError::EmptyName);
		}
		if self.name.starts_with(RESERVED_PREFIX) {
			return Err(TriggerError::ReservedName(self.name.clone()));
		}
		Ok(())
	}
}

impl<C> fmt::Debug for Trigger<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Trigger")
			.field("name", &self.name)
			.field("title", &self.title)
			.field("order", &self.order)
			.finish_non_exhaustive()
	}
}

/// How a registry treats two triggers with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
	/// Fail the build with [`TriggerError::DuplicateName`].
	#[default]
	Reject,
	/// The later declaration replaces the earlier one.
	Replace,
}

/// Collects trigger declarations before they are validated.
pub struct TriggerRegistryBuilder<C> {
	triggers: Vec<Trigger<C>>,
	policy: DuplicatePolicy,
}

impl<C> Default for TriggerRegistryBuilder<C> {
	fn default() -> Self {
		Self {
			triggers: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}
}

impl<C> TriggerRegistryBuilder<C> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Declare a trigger.
	pub fn register(&mut self, trigger: Trigger<C>) -> &mut Self {
		self.triggers.push(trigger);
		self
	}

	/// Shorthand for registering [`Trigger::new`].
	pub fn trigger<F>(
		&mut self,
		name: impl Into<String>,
		title: impl Into<String>,
		action: F,
	) -> &mut Self
	where
		F: Fn(&C, &Request, &FormData) -> ActionResult + Send + Sync + 'static,
	{
		self.register(Trigger::new(name, title, action))
	}

	/// Validate names and freeze the declarations into a registry.
	pub fn build(self) -> Result<TriggerRegistry<C>, TriggerError> {
		let mut by_name: HashMap<String, Trigger<C>> =
			HashMap::with_capacity(self.triggers.len());

		for trigger in self.triggers {
			trigger.check_name()?;
			if by_name.contains_key(trigger.name()) {
				match self.policy {
					DuplicatePolicy::Reject => {
						return Err(TriggerError::DuplicateName(trigger.name.clone()));
					}
					DuplicatePolicy::Replace => {
						tracing::warn!(
							trigger = trigger.name(),
							"trigger redeclared; keeping the later one"
						);
					}
				}
			}
			by_name.insert(trigger.name.clone(), trigger);
		}

		let mut ordered: Vec<Trigger<C>> = by_name.into_values().collect();
		ordered.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
		let index = ordered
			.iter()
			.enumerate()
			.map(|(position, trigger)| (trigger.name.clone(), position))
			.collect();

		Ok(TriggerRegistry { ordered, index })
	}
}

/// Read-only set of triggers for one handler type, in button order.
pub struct TriggerRegistry<C> {
	ordered: Vec<Trigger<C>>,
	index: HashMap<String, usize>,
}

impl<C> TriggerRegistry<C> {
	pub fn builder() -> TriggerRegistryBuilder<C> {
		TriggerRegistryBuilder::new()
	}

	/// Look up a trigger by its exact name.
	pub fn get(&self, name: &str) -> Option<&Trigger<C>> {
		self.index.get(name).map(|&position| &self.ordered[position])
	}

	pub fn contains(&self, name: &str) -> bool {
		self.index.contains_key(name)
	}

	/// Triggers sorted by `(order, name)`.
	pub fn iter(&self) -> std::slice::Iter<'_, Trigger<C>> {
		self.ordered.iter()
	}

	/// Submit buttons in render order.
	pub fn buttons(&self) -> impl Iterator<Item = SubmitButton<'_>> {
		self.ordered.iter().map(Trigger::button)
	}

	pub fn names(&self) -> Vec<&str> {
		self.ordered.iter().map(Trigger::name).collect()
	}

	pub fn len(&self) -> usize {
		self.ordered.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ordered.is_empty()
	}
}

impl<C> fmt::Debug for TriggerRegistryBuilder<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TriggerRegistryBuilder")
			.field("triggers", &self.triggers)
			.field("policy", &self.policy)
			.finish()
	}
}

impl<C> fmt::Debug for TriggerRegistry<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.ordered).finish()
	}
}

impl<'a, C> IntoIterator for &'a TriggerRegistry<C> {
	type Item = &'a Trigger<C>;
	type IntoIter = std::slice::Iter<'a, Trigger<C>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	struct Page;

	fn ok(_: &Page, _: &Request, _: &FormData) -> ActionResult {
		Ok(Response::ok())
	}

	fn titled(title: &'static str) -> impl Fn(&Page, &Request, &FormData) -> ActionResult {
		move |_: &Page, _: &Request, _: &FormData| Ok(Response::ok().with_body(title))
	}

	#[fixture]
	fn builder() -> TriggerRegistryBuilder<Page> {
		TriggerRegistryBuilder::new()
	}

	#[rstest]
	fn test_sorted_by_order_then_name(mut builder: TriggerRegistryBuilder<Page>) {
		builder
			.register(Trigger::new("save", "Save", ok))
			.register(Trigger::new("delete", "Delete", ok).with_order(5))
			.register(Trigger::new("archive", "Archive", ok))
			.register(Trigger::new("preview", "Preview", ok).with_order(-1));
		let registry = builder.build().unwrap();

		assert_eq!(registry.names(), vec!["preview", "archive", "save", "delete"]);
		let titles: Vec<_> = registry.buttons().map(|button| button.title).collect();
		assert_eq!(titles, vec!["Preview", "Archive", "Save", "Delete"]);
	}

	#[rstest]
	fn test_lookup_is_exact(mut builder: TriggerRegistryBuilder<Page>) {
		builder.trigger("save", "Save", ok);
		let registry = builder.build().unwrap();

		assert!(registry.get("save").is_some());
		assert!(registry.get("Save").is_none());
		assert!(registry.get("save ").is_none());
		assert!(!registry.contains(""));
	}

	#[rstest]
	#[case("", TriggerError::EmptyName)]
	#[case("_private", TriggerError::ReservedName("_private".to_string()))]
	#[case("__trigger__", TriggerError::ReservedName("__trigger__".to_string()))]
	fn test_rejects_bad_names(
		mut builder: TriggerRegistryBuilder<Page>,
		#[case] name: &str,
		#[case] expected: TriggerError,
	) {
		builder.trigger(name, "Bad", ok);
		assert_eq!(builder.build().unwrap_err(), expected);
	}

	#[rstest]
	fn test_duplicate_rejected_by_default(mut builder: TriggerRegistryBuilder<Page>) {
		builder.trigger("save", "Save", ok).trigger("save", "Save again", ok);
		assert_eq!(
			builder.build().unwrap_err(),
			TriggerError::DuplicateName("save".to_string())
		);
	}

	#[rstest]
	fn test_duplicate_replaced_when_allowed() {
		let mut builder = TriggerRegistryBuilder::new().with_policy(DuplicatePolicy::Replace);
		builder
			.trigger("save", "First", titled("first"))
			.trigger("save", "Second", titled("second"));
		let registry = builder.build().unwrap();

		assert_eq!(registry.len(), 1);
		let save = registry.get("save").unwrap();
		assert_eq!(save.title(), "Second");
		let response = save
			.invoke(&Page, &Request::get("/"), &FormData::new())
			.unwrap();
		assert_eq!(response.body_text(), "second");
	}

	#[rstest]
	fn test_empty_registry(builder: TriggerRegistryBuilder<Page>) {
		let registry = builder.build().unwrap();
		assert!(registry.is_empty());
		assert_eq!(registry.buttons().count(), 0);
	}
}
