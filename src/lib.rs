//! # Toiawase
//!
//! A contact-form validation engine paired with a submission pipeline.
//!
//! The core is the validation engine ([`forms`]): it attaches to a snapshot
//! of a form's editable controls, applies the fixed attribute-driven rule
//! set (minLength, maxLength, required, pattern) per control, tracks
//! per-control validity, and gates submission until every control passes.
//! Instead of mutating a document it emits render instructions, keeping the
//! decision logic pure and testable without a browser.
//!
//! The submission pipeline ([`notify`]) takes over once the engine reports
//! all controls valid: it extracts the semantic field values, maps the radio
//! groups through fixed label tables, renders the payload template and posts
//! `{"text": ...}` to the configured endpoint, producing a blocking user
//! acknowledgment.
//!
//! ## Feature Flags
//!
//! - `forms` - the validation engine
//! - `notify` - the submission pipeline (pulls in `forms`)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use toiawase::forms::{Control, Form, FormEngine, SubmitDecision};
//! use toiawase::notify::{NotifySettings, SubmissionPipeline};
//!
//! let mut form = Form::new("contact");
//! form.add_control(Control::text("contact-name", "name").required());
//!
//! let mut engine = FormEngine::attach(form)?;
//! engine.set_value("contact-name", "山田太郎")?;
//!
//! if let SubmitDecision::Proceed { ops } = engine.try_submit() {
//! 	apply_to_dom(&ops);
//! 	let pipeline = SubmissionPipeline::from_settings(&NotifySettings::default())?;
//! 	let ack = pipeline.submit(engine.form()).await?;
//! 	show_alert(ack.message());
//! }
//! ```

#[cfg(feature = "forms")]
pub use toiawase_forms as forms;

#[cfg(feature = "notify")]
pub use toiawase_notify as notify;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::forms::{
		Control, ControlKind, Evaluation, Form, FormEngine, FormError, FormResult, RenderOp,
		RuleViolation, SubmitDecision, Validity,
	};

	#[cfg(feature = "notify")]
	pub use crate::notify::{
		Acknowledgment, InquiryCategory, InquiryValues, NotifyBackend, NotifyError, NotifyResult,
		NotifySettings, ReferralSource, SubmissionPipeline, WebhookPayload,
	};
}
