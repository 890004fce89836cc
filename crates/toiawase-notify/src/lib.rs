//! Contact-submission pipeline for Toiawase
//!
//! Takes a form that passed the validation engine, extracts its semantic
//! field values, maps the two radio groups through fixed label tables,
//! renders a multi-line text payload and posts it as `{"text": ...}` to a
//! configured endpoint, producing a blocking user acknowledgment.
//!
//! Delivery goes through the [`NotifyBackend`] trait with webhook, console
//! and in-memory implementations, so the network can be swapped out in
//! development and tests.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use toiawase_notify::{NotifySettings, SubmissionPipeline};
//! use toiawase_forms::Form;
//!
//! let mut settings = NotifySettings::default();
//! settings.backend = "webhook".to_string();
//! settings.webhook_url = "https://hooks.example.com/contact".to_string();
//!
//! let pipeline = SubmissionPipeline::from_settings(&settings)?;
//! let form = Form::new("contact"); // validated elsewhere
//! let ack = pipeline.submit(&form).await?;
//! println!("{}", ack.message());
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod message;
pub mod pipeline;
pub mod settings;

use thiserror::Error;

pub use backends::{
	ConsoleBackend, MemoryBackend, NotifyBackend, WebhookBackend, backend_from_settings,
};
pub use message::{
	COMPANY_PLACEHOLDER, InquiryCategory, InquiryValues, ReferralSource, WebhookPayload,
};
pub use pipeline::{ACK_MESSAGE, Acknowledgment, SubmissionPipeline};
pub use settings::NotifySettings;

#[derive(Debug, Error)]
pub enum NotifyError {
	#[error("Backend error: {0}")]
	Backend(String),

	#[error("Delivery error: {0}")]
	Delivery(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;
