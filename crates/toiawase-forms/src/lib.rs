//! Form validation for Toiawase
//!
//! This crate is the validation core of the contact-form system: it attaches
//! to a snapshot of a form's editable controls, applies the fixed
//! attribute-driven rule set (minLength, maxLength, required, pattern) to
//! each, tracks per-control validity, and gates submission on the logical
//! AND of all decisions.
//!
//! The engine is deliberately pure over the document: instead of mutating a
//! DOM it returns [`RenderOp`] lists describing the visual error state, so
//! the whole decision logic is testable without a browser. A host shell
//! applies the ops to the real page.
//!
//! ## Quick Example
//!
//! ```
//! use toiawase_forms::{Control, Form, FormEngine, SubmitDecision};
//!
//! let mut form = Form::new("contact");
//! form.add_control(
//! 	Control::text("contact-name", "name")
//! 		.required()
//! 		.with_required_message("お名前を入力してください")
//! 		.with_error_slot("contact-name-error"),
//! );
//! form.add_control(Control::radio("category-01", "category", "radio01").required());
//! form.add_control(Control::radio("category-02", "category", "radio02").required());
//!
//! let mut engine = FormEngine::attach(form).unwrap();
//! assert!(matches!(engine.try_submit(), SubmitDecision::Blocked { .. }));
//!
//! engine.set_value("contact-name", "Alice").unwrap();
//! engine.set_checked("category-02", true).unwrap();
//! assert!(matches!(engine.try_submit(), SubmitDecision::Proceed { .. }));
//! ```

pub mod control;
pub mod engine;
pub mod render;
pub mod rules;

use thiserror::Error;

pub use control::{Control, ControlKind, Form};
pub use engine::{Evaluation, FormEngine, Outcome, SubmitDecision, Validity};
pub use render::{RenderOp, render_control};
pub use rules::{PATTERN_MESSAGE, REQUIRED_MESSAGE, RuleViolation};

/// Construction and lookup errors.
///
/// Rule violations are not errors; they are values rendered inline (see
/// [`RuleViolation`]).
#[derive(Debug, Error)]
pub enum FormError {
	#[error("Duplicate control id: {0}")]
	DuplicateControl(String),

	#[error("Unknown control id: {0}")]
	UnknownControl(String),

	#[error("Invalid pattern on control {control}: {source}")]
	InvalidPattern {
		control: String,
		#[source]
		source: regex::Error,
	},
}

pub type FormResult<T> = std::result::Result<T, FormError>;
