//! End-to-end flow: validation engine feeding the submission pipeline

use toiawase_forms::{Control, Form, FormEngine, SubmitDecision};
use toiawase_notify::{
	COMPANY_PLACEHOLDER, ACK_MESSAGE, MemoryBackend, SubmissionPipeline, WebhookBackend,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contact_form() -> Form {
	let mut form = Form::new("contact");
	for (index, value) in ["radio01", "radio02", "radio03", "radio04"]
		.iter()
		.enumerate()
	{
		form.add_control(
			Control::radio(format!("category-{:02}", index + 1), "category", *value)
				.required()
				.with_error_slot("category-error"),
		);
	}
	form.add_control(
		Control::text("contact-name", "name")
			.required()
			.with_required_message("お名前を入力してください")
			.with_error_slot("contact-name-error"),
	);
	form.add_control(Control::text("contact-company", "company"));
	form.add_control(
		Control::text("contact-email", "email")
			.required()
			.with_pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
			.expect("valid email pattern")
			.with_error_slot("contact-email-error"),
	);
	for (index, value) in ["search", "sns", "blog", "friend", "other"]
		.iter()
		.enumerate()
	{
		form.add_control(
			Control::radio(format!("referral-{:02}", index + 1), "referral", *value)
				.required()
				.with_error_slot("referral-error"),
		);
	}
	form.add_control(
		Control::textarea("contact-detail", "detail")
			.required()
			.with_error_slot("contact-detail-error"),
	);
	form
}

#[tokio::test]
async fn valid_submission_posts_mapped_labels_and_acknowledges() {
	// Category radio02 + referral blog, everything else filled validly
	let mut engine = FormEngine::attach(contact_form()).expect("attach");
	engine.set_checked("category-02", true).unwrap();
	engine.set_value("contact-name", "山田太郎").unwrap();
	engine.set_value("contact-email", "test@example.com").unwrap();
	engine.set_checked("referral-03", true).unwrap();
	engine.set_value("contact-detail", "hello").unwrap();

	let SubmitDecision::Proceed { .. } = engine.try_submit() else {
		panic!("form must validate");
	};

	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/contact"))
		.respond_with(ResponseTemplate::new(200))
		.expect(1)
		.mount(&server)
		.await;

	let pipeline = SubmissionPipeline::new(Box::new(WebhookBackend::new(format!(
		"{}/contact",
		server.uri()
	))));
	let ack = pipeline.submit(engine.form()).await.expect("delivery");
	assert_eq!(ack.message(), ACK_MESSAGE);

	// Exactly one POST whose payload text carries the mapped labels, never
	// the raw radio values
	let requests = server.received_requests().await.expect("recording enabled");
	assert_eq!(requests.len(), 1);
	let body: serde_json::Value =
		serde_json::from_slice(&requests[0].body).expect("JSON body");
	let text = body["text"].as_str().expect("text field");
	assert!(text.contains("お見積りのご依頼"));
	assert!(text.contains("ブログ"));
	assert!(!text.contains("radio02"));
	// Empty company falls back to the placeholder
	assert!(text.contains(COMPANY_PLACEHOLDER));
}

#[tokio::test]
async fn blocked_submission_makes_no_network_call() {
	// Required name left empty, email and detail filled
	let mut engine = FormEngine::attach(contact_form()).expect("attach");
	engine.set_checked("category-01", true).unwrap();
	engine.set_value("contact-email", "test@example.com").unwrap();
	engine.set_checked("referral-01", true).unwrap();
	engine.set_value("contact-detail", "hello").unwrap();

	let backend = MemoryBackend::new();
	let pipeline = SubmissionPipeline::new(Box::new(backend.clone()));

	match engine.try_submit() {
		SubmitDecision::Blocked { ops } => {
			// Name field marked and focused; nothing delivered
			assert!(ops.iter().any(|op| matches!(
				op,
				toiawase_forms::RenderOp::MarkInvalid { target } if target == "contact-name"
			)));
			assert!(matches!(
				ops.last(),
				Some(toiawase_forms::RenderOp::Focus { control }) if control == "contact-name"
			));
		}
		SubmitDecision::Proceed { .. } => {
			pipeline.submit(engine.form()).await.expect("delivery");
			panic!("form must not validate");
		}
	}
	assert!(backend.sent().is_empty());
}

#[tokio::test]
async fn company_value_is_forwarded_verbatim() {
	let mut engine = FormEngine::attach(contact_form()).expect("attach");
	engine.set_checked("category-01", true).unwrap();
	engine.set_value("contact-name", "山田太郎").unwrap();
	engine
		.set_value("contact-company", "  株式会社Example ")
		.unwrap();
	engine.set_value("contact-email", "test@example.com").unwrap();
	engine.set_checked("referral-02", true).unwrap();
	engine.set_value("contact-detail", "hello").unwrap();
	assert!(matches!(engine.try_submit(), SubmitDecision::Proceed { .. }));

	let backend = MemoryBackend::new();
	let pipeline = SubmissionPipeline::new(Box::new(backend.clone()));
	pipeline.submit(engine.form()).await.expect("delivery");

	let sent = backend.sent();
	assert_eq!(sent.len(), 1);
	assert!(sent[0].text.contains("会社名: 株式会社Example"));
	assert!(!sent[0].text.contains(COMPANY_PLACEHOLDER));
	// Referral sns maps to its label
	assert!(sent[0].text.contains("SNS"));
}

#[tokio::test]
async fn failing_endpoint_surfaces_delivery_error() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let pipeline =
		SubmissionPipeline::new(Box::new(WebhookBackend::new(server.uri())));
	let result = pipeline.submit(&Form::new("contact")).await;

	assert!(result.is_err());
}
