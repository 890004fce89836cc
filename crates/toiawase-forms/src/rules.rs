//! The fixed rule set applied to each control
//!
//! Every rule yields nothing when it does not apply or passes. All four
//! rules are always computed for a control; the engine joins the resulting
//! messages for display.

use crate::control::{Control, ControlKind};
use thiserror::Error;

/// Generic message for a failed required rule without a custom message
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Generic message for a failed pattern rule without a title
pub const PATTERN_MESSAGE: &str = "Please match the requested format";

/// A single failed rule, carrying its resolved display message.
///
/// Violations are values rendered inline, never propagated as errors.
/// `GroupFailure` marks a radio control invalid because its group failed the
/// required rule while another member surfaces the message; it displays as
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
	#[error("Ensure this value has at least {min} characters")]
	TooShort { min: usize },
	#[error("Ensure this value has at most {max} characters")]
	TooLong { max: usize },
	#[error("{message}")]
	MissingRequired { message: String },
	#[error("{message}")]
	PatternMismatch { message: String },
	#[error("")]
	GroupFailure,
}

/// minLength rule: applies only when a minimum is declared; fails when the
/// trimmed character count is below it.
///
/// # Examples
///
/// ```
/// use toiawase_forms::Control;
/// use toiawase_forms::rules::check_min_length;
///
/// let control = Control::text("t", "t").with_min_length(3).with_value("ab ");
/// assert!(check_min_length(&control).is_some());
/// ```
pub fn check_min_length(control: &Control) -> Option<RuleViolation> {
	let min = control.min_length?;
	if control.trimmed_value().chars().count() < min {
		Some(RuleViolation::TooShort { min })
	} else {
		None
	}
}

/// maxLength rule: applies only when a maximum is declared; fails when the
/// trimmed character count exceeds it.
pub fn check_max_length(control: &Control) -> Option<RuleViolation> {
	let max = control.max_length?;
	if control.trimmed_value().chars().count() > max {
		Some(RuleViolation::TooLong { max })
	} else {
		None
	}
}

/// required rule: applies only when the control is marked required.
///
/// Checkboxes pass iff checked; radios pass iff at least one member of the
/// same-name group is checked (`group_has_checked`, supplied by the engine);
/// text-like controls pass iff the trimmed value is non-empty. The failure
/// message is the control's custom required-message when present, else the
/// generic one.
pub fn check_required(control: &Control, group_has_checked: bool) -> Option<RuleViolation> {
	if !control.required {
		return None;
	}
	let satisfied = match control.kind {
		ControlKind::Checkbox => control.checked,
		ControlKind::Radio => group_has_checked,
		_ => !control.trimmed_value().is_empty(),
	};
	if satisfied {
		None
	} else {
		let message = control
			.required_message
			.clone()
			.unwrap_or_else(|| REQUIRED_MESSAGE.to_string());
		Some(RuleViolation::MissingRequired { message })
	}
}

/// pattern rule: applies only when both a pattern and the required flag are
/// set; fails when the trimmed value does not match. The message is the
/// control's title when present, else the generic format message.
pub fn check_pattern(control: &Control) -> Option<RuleViolation> {
	let pattern = control.pattern.as_ref()?;
	if !control.required {
		return None;
	}
	if pattern.is_match(control.trimmed_value()) {
		None
	} else {
		let message = control
			.title
			.clone()
			.unwrap_or_else(|| PATTERN_MESSAGE.to_string());
		Some(RuleViolation::PatternMismatch { message })
	}
}

/// Run the ordered rule set against a control and collect every violation.
///
/// Evaluation order is minLength, maxLength, required, pattern; the order
/// only decides which message is surfaced first when several rules fail.
pub fn evaluate_rules(control: &Control, group_has_checked: bool) -> Vec<RuleViolation> {
	[
		check_min_length(control),
		check_max_length(control),
		check_required(control, group_has_checked),
		check_pattern(control),
	]
	.into_iter()
	.flatten()
	.collect()
}
