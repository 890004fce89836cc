//! Delivery settings

use serde::{Deserialize, Serialize};

/// Settings for the submission pipeline's delivery backend.
///
/// The `backend` field selects `"webhook"`, `"console"` or `"memory"`;
/// `webhook_url` is the fixed endpoint the JSON payload is posted to.
///
/// # Examples
///
/// ```
/// use toiawase_notify::NotifySettings;
///
/// let mut settings = NotifySettings::default();
/// assert_eq!(settings.backend, "console");
///
/// settings.backend = "webhook".to_string();
/// settings.webhook_url = "https://hooks.example.com/contact".to_string();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifySettings {
	/// Backend kind: "webhook", "console" or "memory"
	pub backend: String,
	/// Endpoint receiving the `{"text": ...}` POST
	pub webhook_url: String,
	/// Request timeout for the webhook client, in seconds
	pub timeout_secs: u64,
}

impl Default for NotifySettings {
	fn default() -> Self {
		Self {
			backend: "console".to_string(),
			webhook_url: String::new(),
			timeout_secs: 30,
		}
	}
}
