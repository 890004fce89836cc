//! The submission pipeline

use crate::backends::{NotifyBackend, backend_from_settings};
use crate::message::InquiryValues;
use crate::settings::NotifySettings;
use crate::NotifyResult;
use toiawase_forms::Form;

/// Blocking confirmation text shown to the user after delivery
pub const ACK_MESSAGE: &str = "お問い合わせを送信しました。";

/// The user-visible acknowledgment produced by a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
	message: String,
}

impl Acknowledgment {
	fn delivered() -> Self {
		Self {
			message: ACK_MESSAGE.to_string(),
		}
	}

	/// Text of the blocking confirmation
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Turns a validated form's current values into an outbound notification.
///
/// The pipeline extracts the semantic field values, renders the fixed
/// payload template and delivers once through its backend. It never retries
/// and never resets the form; a transport failure is surfaced as an error so
/// the host can show a failure notice instead of silently never
/// acknowledging.
///
/// # Examples
///
/// ```
/// use toiawase_notify::{MemoryBackend, SubmissionPipeline};
/// use toiawase_forms::Form;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MemoryBackend::new();
/// let pipeline = SubmissionPipeline::new(Box::new(backend.clone()));
///
/// let ack = pipeline.submit(&Form::new("contact")).await?;
/// assert_eq!(ack.message(), "お問い合わせを送信しました。");
/// assert_eq!(backend.sent().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct SubmissionPipeline {
	backend: Box<dyn NotifyBackend>,
}

impl SubmissionPipeline {
	/// Create a pipeline delivering through the given backend
	pub fn new(backend: Box<dyn NotifyBackend>) -> Self {
		Self { backend }
	}

	/// Create a pipeline with the backend named by the settings
	pub fn from_settings(settings: &NotifySettings) -> NotifyResult<Self> {
		Ok(Self::new(backend_from_settings(settings)?))
	}

	/// Scan the form once, render the payload and deliver it.
	///
	/// Returns the blocking acknowledgment on success. The caller is
	/// expected to have run the validation engine first; the pipeline does
	/// not re-validate.
	pub async fn submit(&self, form: &Form) -> NotifyResult<Acknowledgment> {
		let values = InquiryValues::from_form(form);
		let payload = values.to_payload();
		tracing::debug!(form = form.id(), "submitting inquiry");
		if let Err(e) = self.backend.deliver(&payload).await {
			tracing::warn!(error = %e, "inquiry delivery failed");
			return Err(e);
		}
		tracing::info!(form = form.id(), "inquiry delivered");
		Ok(Acknowledgment::delivered())
	}
}
