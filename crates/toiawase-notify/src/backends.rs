//! Delivery backends
//!
//! The pipeline delivers through a backend trait so tests and development
//! setups can swap the network out: `WebhookBackend` posts the JSON body to
//! the configured endpoint, `ConsoleBackend` logs it, `MemoryBackend` stores
//! it for inspection.

use crate::message::WebhookPayload;
use crate::settings::NotifySettings;
use crate::{NotifyError, NotifyResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Asynchronous payload delivery.
#[async_trait]
pub trait NotifyBackend: Send + Sync {
	/// Deliver one payload. Called at most once per submission; the
	/// pipeline never retries.
	async fn deliver(&self, payload: &WebhookPayload) -> NotifyResult<()>;
}

/// POSTs the payload as JSON to a fixed endpoint.
///
/// The response body is never inspected; only the transport outcome and the
/// status class decide success.
pub struct WebhookBackend {
	client: reqwest::Client,
	endpoint: String,
}

impl WebhookBackend {
	/// Create a backend posting to the given endpoint with default client
	/// settings.
	///
	/// # Examples
	///
	/// ```
	/// use toiawase_notify::WebhookBackend;
	///
	/// let backend = WebhookBackend::new("https://hooks.example.com/contact");
	/// ```
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}

	/// Create a backend from settings, honoring the configured timeout.
	pub fn from_settings(settings: &NotifySettings) -> NotifyResult<Self> {
		if settings.webhook_url.is_empty() {
			return Err(NotifyError::Backend(
				"webhook backend requires webhook_url".to_string(),
			));
		}
		let client = reqwest::Client::builder()
			.timeout(Duration::from_secs(settings.timeout_secs))
			.build()
			.map_err(|e| NotifyError::Backend(e.to_string()))?;
		Ok(Self {
			client,
			endpoint: settings.webhook_url.clone(),
		})
	}
}

#[async_trait]
impl NotifyBackend for WebhookBackend {
	async fn deliver(&self, payload: &WebhookPayload) -> NotifyResult<()> {
		let body = serde_json::to_string(payload)?;
		let response = self
			.client
			.post(&self.endpoint)
			.header(reqwest::header::CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await
			.map_err(|e| NotifyError::Delivery(e.to_string()))?;
		if !response.status().is_success() {
			return Err(NotifyError::Delivery(format!(
				"endpoint returned {}",
				response.status()
			)));
		}
		Ok(())
	}
}

/// Logs the payload instead of sending it. Development backend.
#[derive(Debug, Default)]
pub struct ConsoleBackend;

impl ConsoleBackend {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl NotifyBackend for ConsoleBackend {
	async fn deliver(&self, payload: &WebhookPayload) -> NotifyResult<()> {
		tracing::info!(text = %payload.text, "inquiry payload (console backend)");
		Ok(())
	}
}

/// Stores delivered payloads in memory. Test backend.
///
/// Clones share the same store, so a clone kept by the test can inspect
/// what the pipeline delivered.
///
/// # Examples
///
/// ```
/// use toiawase_notify::MemoryBackend;
///
/// let backend = MemoryBackend::new();
/// let inspector = backend.clone();
/// assert!(inspector.sent().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
	sent: Arc<Mutex<Vec<WebhookPayload>>>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of every payload delivered so far
	pub fn sent(&self) -> Vec<WebhookPayload> {
		self.sent.lock().expect("payload store poisoned").clone()
	}
}

#[async_trait]
impl NotifyBackend for MemoryBackend {
	async fn deliver(&self, payload: &WebhookPayload) -> NotifyResult<()> {
		self.sent
			.lock()
			.expect("payload store poisoned")
			.push(payload.clone());
		Ok(())
	}
}

/// Construct the backend named by the settings.
///
/// # Examples
///
/// ```
/// use toiawase_notify::{NotifySettings, backend_from_settings};
///
/// let settings = NotifySettings::default();
/// let backend = backend_from_settings(&settings).unwrap();
/// ```
pub fn backend_from_settings(settings: &NotifySettings) -> NotifyResult<Box<dyn NotifyBackend>> {
	match settings.backend.as_str() {
		"webhook" => Ok(Box::new(WebhookBackend::from_settings(settings)?)),
		"console" => Ok(Box::new(ConsoleBackend::new())),
		"memory" => Ok(Box::new(MemoryBackend::new())),
		other => Err(NotifyError::Backend(format!(
			"unknown notify backend: {other}"
		))),
	}
}
