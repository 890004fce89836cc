//! Form controls and the form snapshot the engine attaches to

use crate::{FormError, FormResult};
use regex::Regex;

/// Kind of editable control, mirroring the HTML control types subject to
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
	Text,
	Checkbox,
	Radio,
	Select,
	Textarea,
}

impl ControlKind {
	/// Whether the control carries a free-text value (as opposed to a
	/// checked state).
	pub fn is_text_like(&self) -> bool {
		matches!(self, Self::Text | Self::Select | Self::Textarea)
	}
}

/// One form input/textarea/select element with its validation attributes.
///
/// Controls are plain data: the engine reads their current value/checked
/// state and their declared constraints, and never touches a live document.
///
/// # Examples
///
/// ```
/// use toiawase_forms::Control;
///
/// let control = Control::text("contact-name", "name")
/// 	.required()
/// 	.with_max_length(30);
/// assert!(control.required);
/// assert_eq!(control.max_length, Some(30));
/// ```
#[derive(Debug, Clone)]
pub struct Control {
	/// Stable element id, used as the ValidityRecord key
	pub id: String,
	/// Submitted field name; radio controls sharing a name form a group
	pub name: String,
	pub kind: ControlKind,
	/// Current value; for radios, the value submitted when checked
	pub value: String,
	/// Current checked state (checkboxes and radios)
	pub checked: bool,
	pub required: bool,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	/// Compiled pattern constraint
	pub pattern: Option<Regex>,
	/// Custom message shown when the required rule fails
	pub required_message: Option<String>,
	/// Custom message shown when the pattern rule fails (the element title)
	pub title: Option<String>,
	/// Element id of the error-display slot for this control
	pub error_slot: Option<String>,
	/// Element ids of associated labels, marked together with the control
	pub label_ids: Vec<String>,
}

impl Control {
	fn new(id: impl Into<String>, name: impl Into<String>, kind: ControlKind) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			kind,
			value: String::new(),
			checked: false,
			required: false,
			min_length: None,
			max_length: None,
			pattern: None,
			required_message: None,
			title: None,
			error_slot: None,
			label_ids: vec![],
		}
	}

	/// Create a text input control
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_forms::{Control, ControlKind};
	///
	/// let control = Control::text("contact-email", "email");
	/// assert_eq!(control.kind, ControlKind::Text);
	/// assert!(!control.required);
	/// ```
	pub fn text(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::new(id, name, ControlKind::Text)
	}

	/// Create a textarea control
	pub fn textarea(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::new(id, name, ControlKind::Textarea)
	}

	/// Create a select control
	pub fn select(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::new(id, name, ControlKind::Select)
	}

	/// Create a checkbox control
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_forms::Control;
	///
	/// let control = Control::checkbox("privacy", "privacy").required();
	/// assert!(!control.checked);
	/// ```
	pub fn checkbox(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::new(id, name, ControlKind::Checkbox)
	}

	/// Create a radio control with its submitted value
	///
	/// Radios sharing a name form a group that is validated as a unit.
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_forms::Control;
	///
	/// let control = Control::radio("category-01", "category", "radio01");
	/// assert_eq!(control.value, "radio01");
	/// ```
	pub fn radio(
		id: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		let mut control = Self::new(id, name, ControlKind::Radio);
		control.value = value.into();
		control
	}

	/// Mark the control as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the minimum-length constraint
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the maximum-length constraint
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the pattern constraint, compiling it eagerly
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_forms::Control;
	///
	/// let control = Control::text("contact-email", "email")
	/// 	.required()
	/// 	.with_pattern(r"^[^@\s]+@[^@\s]+$")
	/// 	.unwrap();
	/// assert!(control.pattern.is_some());
	/// assert!(Control::text("bad", "bad").with_pattern("(").is_err());
	/// ```
	pub fn with_pattern(mut self, pattern: &str) -> FormResult<Self> {
		let regex = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
			control: self.id.clone(),
			source,
		})?;
		self.pattern = Some(regex);
		Ok(self)
	}

	/// Set the custom message surfaced when the required rule fails
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Set the title surfaced when the pattern rule fails
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Set the element id of the error-display slot
	pub fn with_error_slot(mut self, slot: impl Into<String>) -> Self {
		self.error_slot = Some(slot.into());
		self
	}

	/// Associate a label element id, marked together with the control
	pub fn with_label(mut self, label_id: impl Into<String>) -> Self {
		self.label_ids.push(label_id.into());
		self
	}

	/// Set the current value
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Set the current checked state
	pub fn with_checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Current value with leading/trailing whitespace stripped
	pub fn trimmed_value(&self) -> &str {
		self.value.trim()
	}
}

/// Ordered snapshot of a form's editable controls.
///
/// Enumeration order is the order controls were added; the engine uses it
/// for focus selection and for picking the member of a radio group that
/// surfaces the group's error message.
///
/// # Examples
///
/// ```
/// use toiawase_forms::{Control, Form};
///
/// let mut form = Form::new("contact");
/// form.add_control(Control::text("contact-name", "name").required());
/// assert_eq!(form.controls().len(), 1);
/// assert!(form.control("contact-name").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Form {
	id: String,
	controls: Vec<Control>,
}

impl Form {
	/// Create an empty form with the given element id
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			controls: vec![],
		}
	}

	/// Form element id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Append a control, preserving enumeration order
	pub fn add_control(&mut self, control: Control) {
		self.controls.push(control);
	}

	/// All controls in enumeration order
	pub fn controls(&self) -> &[Control] {
		&self.controls
	}

	/// Look up a control by its stable id
	pub fn control(&self, id: &str) -> Option<&Control> {
		self.controls.iter().find(|c| c.id == id)
	}

	/// Mutable lookup by stable id
	pub fn control_mut(&mut self, id: &str) -> Option<&mut Control> {
		self.controls.iter_mut().find(|c| c.id == id)
	}

	/// Members of the radio group with the given name, in enumeration order
	pub fn radio_group(&self, name: &str) -> Vec<&Control> {
		self.controls
			.iter()
			.filter(|c| c.kind == ControlKind::Radio && c.name == name)
			.collect()
	}

	/// Whether at least one member of the named radio group is checked
	pub fn group_checked(&self, name: &str) -> bool {
		self.radio_group(name).iter().any(|c| c.checked)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_trimmed_value_strips_whitespace() {
		// Arrange
		let control = Control::text("t", "t").with_value("  hello  ");

		// Act & Assert
		assert_eq!(control.trimmed_value(), "hello");
	}

	#[rstest]
	fn test_invalid_pattern_is_rejected() {
		// Arrange & Act
		let result = Control::text("t", "t").with_pattern("[unclosed");

		// Assert
		assert!(matches!(result, Err(FormError::InvalidPattern { .. })));
	}

	#[rstest]
	fn test_radio_group_enumeration_order() {
		// Arrange
		let mut form = Form::new("f");
		form.add_control(Control::radio("r1", "category", "radio01"));
		form.add_control(Control::text("n", "name"));
		form.add_control(Control::radio("r2", "category", "radio02"));

		// Act
		let group = form.radio_group("category");

		// Assert
		assert_eq!(group.len(), 2);
		assert_eq!(group[0].id, "r1");
		assert_eq!(group[1].id, "r2");
	}

	#[rstest]
	fn test_group_checked_follows_any_member() {
		// Arrange
		let mut form = Form::new("f");
		form.add_control(Control::radio("r1", "category", "radio01"));
		form.add_control(Control::radio("r2", "category", "radio02").with_checked(true));

		// Act & Assert
		assert!(form.group_checked("category"));
		assert!(!form.group_checked("referral"));
	}
}
