//! Render instructions
//!
//! The engine never touches a live document. Evaluation produces a list of
//! [`RenderOp`] values describing the visual error state; a host shell
//! applies them to the real DOM. Ops are absolute (set, not toggle), so
//! re-evaluating an unchanged control yields the exact same list.

use crate::control::Control;
use crate::engine::Evaluation;
use serde::{Deserialize, Serialize};

/// One render instruction for the host shell.
///
/// Targets are element ids from the form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
	/// Suppress the browser's native validation UI for the form
	DisableNativeValidation { form: String },
	/// Add the error marker class to an element
	MarkInvalid { target: String },
	/// Remove the error marker class from an element
	ClearInvalid { target: String },
	/// Write the joined error messages into an error-display slot
	SetErrorText { slot: String, html: String },
	/// Empty an error-display slot
	ClearErrorText { slot: String },
	/// Move input focus to a control
	Focus { control: String },
}

/// Pure mapping from a control and its evaluation to render instructions.
///
/// Invalid controls are marked together with their labels; the message (when
/// non-empty) is written to the control's error slot. Valid controls get the
/// inverse: markers cleared and the slot emptied.
///
/// # Examples
///
/// ```
/// use toiawase_forms::{Control, Evaluation, RenderOp, render_control};
///
/// let control = Control::text("contact-name", "name")
/// 	.with_label("contact-name-label")
/// 	.with_error_slot("contact-name-error");
/// let evaluation = Evaluation {
/// 	is_valid: false,
/// 	message: "This field is required".to_string(),
/// };
///
/// let ops = render_control(&control, &evaluation);
/// assert!(ops.contains(&RenderOp::MarkInvalid { target: "contact-name".to_string() }));
/// assert!(ops.contains(&RenderOp::SetErrorText {
/// 	slot: "contact-name-error".to_string(),
/// 	html: "This field is required".to_string(),
/// }));
/// ```
pub fn render_control(control: &Control, evaluation: &Evaluation) -> Vec<RenderOp> {
	let mut ops = Vec::new();
	if evaluation.is_valid {
		ops.push(RenderOp::ClearInvalid {
			target: control.id.clone(),
		});
		for label in &control.label_ids {
			ops.push(RenderOp::ClearInvalid {
				target: label.clone(),
			});
		}
		if let Some(slot) = &control.error_slot {
			ops.push(RenderOp::ClearErrorText { slot: slot.clone() });
		}
	} else {
		ops.push(RenderOp::MarkInvalid {
			target: control.id.clone(),
		});
		for label in &control.label_ids {
			ops.push(RenderOp::MarkInvalid {
				target: label.clone(),
			});
		}
		if let Some(slot) = &control.error_slot
			&& !evaluation.message.is_empty()
		{
			ops.push(RenderOp::SetErrorText {
				slot: slot.clone(),
				html: evaluation.message.clone(),
			});
		}
	}
	ops
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn labelled_control() -> Control {
		Control::text("c", "c")
			.with_label("c-label")
			.with_error_slot("c-error")
	}

	#[rstest]
	fn test_invalid_marks_control_and_labels() {
		// Arrange
		let control = labelled_control();
		let evaluation = Evaluation {
			is_valid: false,
			message: "msg".to_string(),
		};

		// Act
		let ops = render_control(&control, &evaluation);

		// Assert
		assert_eq!(
			ops,
			vec![
				RenderOp::MarkInvalid {
					target: "c".to_string()
				},
				RenderOp::MarkInvalid {
					target: "c-label".to_string()
				},
				RenderOp::SetErrorText {
					slot: "c-error".to_string(),
					html: "msg".to_string()
				},
			]
		);
	}

	#[rstest]
	fn test_valid_clears_everything() {
		let control = labelled_control();
		let evaluation = Evaluation {
			is_valid: true,
			message: String::new(),
		};

		let ops = render_control(&control, &evaluation);

		assert_eq!(
			ops,
			vec![
				RenderOp::ClearInvalid {
					target: "c".to_string()
				},
				RenderOp::ClearInvalid {
					target: "c-label".to_string()
				},
				RenderOp::ClearErrorText {
					slot: "c-error".to_string()
				},
			]
		);
	}

	#[rstest]
	fn test_invalid_with_empty_message_writes_no_text() {
		// Group-level failure: invalid state without a visible message
		let control = labelled_control();
		let evaluation = Evaluation {
			is_valid: false,
			message: String::new(),
		};

		let ops = render_control(&control, &evaluation);

		assert!(!ops
			.iter()
			.any(|op| matches!(op, RenderOp::SetErrorText { .. })));
		assert!(ops.contains(&RenderOp::MarkInvalid {
			target: "c".to_string()
		}));
	}

	#[rstest]
	fn test_ops_serialize_as_tagged_json() {
		let op = RenderOp::Focus {
			control: "contact-name".to_string(),
		};

		let json = serde_json::to_string(&op).expect("serializable");

		assert_eq!(json, r#"{"op":"focus","control":"contact-name"}"#);
	}
}
