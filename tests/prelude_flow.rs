//! Facade smoke test: the whole flow through the prelude

use toiawase::prelude::*;

#[tokio::test]
async fn engine_and_pipeline_compose_through_the_facade() {
	let mut form = Form::new("contact");
	form.add_control(
		Control::radio("category-02", "category", "radio02")
			.required()
			.with_checked(true),
	);
	form.add_control(Control::text("contact-name", "name").required());
	form.add_control(
		Control::radio("referral-03", "referral", "blog")
			.required()
			.with_checked(true),
	);
	form.add_control(Control::textarea("contact-detail", "detail").required());

	let mut engine = FormEngine::attach(form).expect("attach");
	engine.set_value("contact-name", "山田太郎").expect("known");
	engine.set_value("contact-detail", "hello").expect("known");

	let SubmitDecision::Proceed { .. } = engine.try_submit() else {
		panic!("form must validate");
	};

	let backend = toiawase::notify::MemoryBackend::new();
	let pipeline = SubmissionPipeline::new(Box::new(backend.clone()));
	let ack = pipeline.submit(engine.form()).await.expect("delivery");

	assert!(!ack.message().is_empty());
	let sent = backend.sent();
	assert_eq!(sent.len(), 1);
	assert!(sent[0].text.contains("お見積りのご依頼"));
	assert!(sent[0].text.contains("ブログ"));
}
