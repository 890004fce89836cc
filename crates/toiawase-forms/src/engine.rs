//! Validation engine: rule evaluation, validity tracking, submit gating

use crate::control::{Control, ControlKind, Form};
use crate::render::{RenderOp, render_control};
use crate::rules::{self, RuleViolation};
use crate::{FormError, FormResult};
use std::collections::HashMap;

/// Messages of simultaneously failed rules are joined with a line break
const MESSAGE_SEPARATOR: &str = "<br>";

/// Per-control validity state.
///
/// Every control starts `Untouched` at attach time and moves to
/// `Valid`/`Invalid` on its first evaluation; afterwards it flips between
/// the two on every re-evaluation. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
	Untouched,
	Valid,
	Invalid,
}

/// Result of evaluating a single control: the validity decision and the
/// joined display message (empty when valid, or for a group-level failure
/// surfaced by another member).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
	pub is_valid: bool,
	pub message: String,
}

/// Result of re-evaluating every control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub all_valid: bool,
	pub ops: Vec<RenderOp>,
}

/// Decision of a submit attempt.
///
/// `Proceed` means every control passed and the caller may hand the form to
/// the submission pipeline; `Blocked` carries the error render ops including
/// a focus op for the first invalid control in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
	Proceed { ops: Vec<RenderOp> },
	Blocked { ops: Vec<RenderOp> },
}

/// The validation engine attached to one form snapshot.
///
/// Owns the form, the ValidityRecord keyed by stable control id, and the
/// submit gate. All evaluation is synchronous and side-effect free apart
/// from the record update; visual changes are returned as [`RenderOp`]
/// lists.
///
/// # Examples
///
/// ```
/// use toiawase_forms::{Control, Form, FormEngine};
///
/// let mut form = Form::new("contact");
/// form.add_control(Control::text("contact-name", "name").required());
///
/// let mut engine = FormEngine::attach(form).unwrap();
/// let outcome = engine.evaluate_all();
/// assert!(!outcome.all_valid);
///
/// engine.set_value("contact-name", "Alice").unwrap();
/// assert!(engine.evaluate_all().all_valid);
/// ```
pub struct FormEngine {
	form: Form,
	record: HashMap<String, Validity>,
}

impl FormEngine {
	/// Attach to a form: enumerate its controls, seed the ValidityRecord
	/// with `Untouched`, and reject duplicate control ids.
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_forms::{Control, Form, FormEngine, Validity};
	///
	/// let mut form = Form::new("contact");
	/// form.add_control(Control::text("contact-name", "name"));
	///
	/// let engine = FormEngine::attach(form).unwrap();
	/// assert_eq!(engine.validity("contact-name"), Some(Validity::Untouched));
	/// ```
	pub fn attach(form: Form) -> FormResult<Self> {
		let mut record = HashMap::new();
		for control in form.controls() {
			if record
				.insert(control.id.clone(), Validity::Untouched)
				.is_some()
			{
				return Err(FormError::DuplicateControl(control.id.clone()));
			}
		}
		Ok(Self { form, record })
	}

	/// Render ops to apply once right after attaching, suppressing the
	/// browser's native validation UI.
	pub fn bootstrap_ops(&self) -> Vec<RenderOp> {
		vec![RenderOp::DisableNativeValidation {
			form: self.form.id().to_string(),
		}]
	}

	/// The attached form snapshot
	pub fn form(&self) -> &Form {
		&self.form
	}

	/// Current validity of a control
	pub fn validity(&self, id: &str) -> Option<Validity> {
		self.record.get(id).copied()
	}

	/// Whether every entry of the ValidityRecord is `Valid`
	pub fn is_all_valid(&self) -> bool {
		self.record.values().all(|v| *v == Validity::Valid)
	}

	/// Mirror an input event: update a text-like control's value.
	pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> FormResult<()> {
		let control = self
			.form
			.control_mut(id)
			.ok_or_else(|| FormError::UnknownControl(id.to_string()))?;
		control.value = value.into();
		Ok(())
	}

	/// Mirror an input event: update a checkbox or radio checked state.
	///
	/// Checking a radio unchecks the other members of its group, as the
	/// browser does.
	pub fn set_checked(&mut self, id: &str, checked: bool) -> FormResult<()> {
		let (kind, name) = {
			let control = self
				.form
				.control(id)
				.ok_or_else(|| FormError::UnknownControl(id.to_string()))?;
			(control.kind, control.name.clone())
		};
		if kind == ControlKind::Radio && checked {
			let member_ids: Vec<String> = self
				.form
				.radio_group(&name)
				.iter()
				.map(|c| c.id.clone())
				.collect();
			for member_id in member_ids {
				if let Some(member) = self.form.control_mut(&member_id) {
					member.checked = member_id == id;
				}
			}
		} else if let Some(control) = self.form.control_mut(id) {
			control.checked = checked;
		}
		Ok(())
	}

	/// Run the ordered rule set against one control.
	///
	/// All four rules are always computed; the non-empty messages are joined
	/// with a line break. A radio whose group failed the required rule but
	/// which is not the group's message-bearer (the first member in
	/// enumeration order) comes back invalid with an empty message, so the
	/// group failure renders once rather than per button.
	pub fn evaluate(&self, control: &Control) -> Evaluation {
		let group_has_checked = if control.kind == ControlKind::Radio {
			self.form.group_checked(&control.name)
		} else {
			false
		};
		let mut violations = rules::evaluate_rules(control, group_has_checked);

		if control.kind == ControlKind::Radio && !self.is_group_speaker(control) {
			for violation in &mut violations {
				if matches!(violation, RuleViolation::MissingRequired { .. }) {
					*violation = RuleViolation::GroupFailure;
				}
			}
		}

		let message = violations
			.iter()
			.map(ToString::to_string)
			.filter(|m| !m.is_empty())
			.collect::<Vec<_>>()
			.join(MESSAGE_SEPARATOR);
		Evaluation {
			is_valid: violations.is_empty(),
			message,
		}
	}

	/// Input-event path: re-evaluate one control, or its whole radio group,
	/// updating the record and returning the render ops.
	pub fn evaluate_control(&mut self, id: &str) -> FormResult<Vec<RenderOp>> {
		let control = self
			.form
			.control(id)
			.ok_or_else(|| FormError::UnknownControl(id.to_string()))?;
		let target_ids: Vec<String> = if control.kind == ControlKind::Radio {
			self.form
				.radio_group(&control.name)
				.iter()
				.map(|c| c.id.clone())
				.collect()
		} else {
			vec![id.to_string()]
		};

		let mut results = Vec::with_capacity(target_ids.len());
		for target_id in &target_ids {
			let control = self
				.form
				.control(target_id)
				.ok_or_else(|| FormError::UnknownControl(target_id.clone()))?;
			let evaluation = self.evaluate(control);
			let ops = render_control(control, &evaluation);
			results.push((target_id.clone(), evaluation.is_valid, ops));
		}

		let mut all_ops = Vec::new();
		for (target_id, is_valid, ops) in results {
			self.record.insert(
				target_id,
				if is_valid {
					Validity::Valid
				} else {
					Validity::Invalid
				},
			);
			all_ops.extend(ops);
		}
		Ok(all_ops)
	}

	/// Re-evaluate every control in enumeration order, updating the record
	/// and collecting render ops for each. When any control is invalid the
	/// outcome carries a focus op for the first invalid one.
	pub fn evaluate_all(&mut self) -> Outcome {
		let mut results = Vec::with_capacity(self.form.controls().len());
		for control in self.form.controls() {
			let evaluation = self.evaluate(control);
			let ops = render_control(control, &evaluation);
			results.push((control.id.clone(), evaluation.is_valid, ops));
		}

		let mut all_ops = Vec::new();
		let mut first_invalid: Option<String> = None;
		let mut invalid_count = 0usize;
		for (id, is_valid, ops) in results {
			if !is_valid {
				invalid_count += 1;
				if first_invalid.is_none() {
					first_invalid = Some(id.clone());
				}
			}
			self.record.insert(
				id,
				if is_valid {
					Validity::Valid
				} else {
					Validity::Invalid
				},
			);
			all_ops.extend(ops);
		}

		tracing::debug!(invalid = invalid_count, "form evaluated");

		match first_invalid {
			Some(control) => {
				all_ops.push(RenderOp::Focus { control });
				Outcome {
					all_valid: false,
					ops: all_ops,
				}
			}
			None => Outcome {
				all_valid: true,
				ops: all_ops,
			},
		}
	}

	/// Submit interception: re-evaluate everything and either block (with
	/// focus moved to the first invalid control) or allow the caller to
	/// hand the form off for submission.
	pub fn try_submit(&mut self) -> SubmitDecision {
		let outcome = self.evaluate_all();
		if outcome.all_valid {
			SubmitDecision::Proceed { ops: outcome.ops }
		} else {
			SubmitDecision::Blocked { ops: outcome.ops }
		}
	}

	/// The first member of a radio group in enumeration order surfaces the
	/// group's error message.
	fn is_group_speaker(&self, control: &Control) -> bool {
		self.form
			.radio_group(&control.name)
			.first()
			.is_some_and(|first| first.id == control.id)
	}
}
