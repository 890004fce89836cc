//! Inquiry values, label tables and payload templating
//!
//! The pipeline never forwards raw control values for the two radio groups;
//! they pass through the fixed value-to-label tables below, so the payload
//! only ever contains the human-readable labels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toiawase_forms::{ControlKind, Form};

/// Field name of the inquiry-type radio group
pub const CATEGORY_FIELD: &str = "category";
/// Field name of the visitor name input
pub const NAME_FIELD: &str = "name";
/// Field name of the optional company input
pub const COMPANY_FIELD: &str = "company";
/// Field name of the referral-source radio group
pub const REFERRAL_FIELD: &str = "referral";
/// Field name of the free-text detail textarea
pub const DETAIL_FIELD: &str = "detail";

/// Placeholder used when the optional company field is left empty
pub const COMPANY_PLACEHOLDER: &str = "not provided";

const MESSAGE_TEMPLATE: &str = "\
お問い合わせ種別: {{category}}
お名前: {{name}}
会社名: {{company}}
サイトを知ったきっかけ: {{referral}}
お問い合わせ内容:
{{detail}}";

/// The four inquiry categories selectable on the contact form.
///
/// # Examples
///
/// ```
/// use toiawase_notify::InquiryCategory;
///
/// let category = InquiryCategory::from_value("radio02").unwrap();
/// assert_eq!(category.label(), "お見積りのご依頼");
/// assert_eq!(InquiryCategory::from_value("radio99"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryCategory {
	Work,
	Estimate,
	Feedback,
	Other,
}

impl InquiryCategory {
	/// Map a submitted radio value to a category
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			"radio01" => Some(Self::Work),
			"radio02" => Some(Self::Estimate),
			"radio03" => Some(Self::Feedback),
			"radio04" => Some(Self::Other),
			_ => None,
		}
	}

	/// Human-readable label interpolated into the payload
	pub fn label(&self) -> &'static str {
		match self {
			Self::Work => "お仕事のご依頼",
			Self::Estimate => "お見積りのご依頼",
			Self::Feedback => "ご意見・ご感想",
			Self::Other => "その他のお問い合わせ",
		}
	}
}

/// The five referral sources selectable on the contact form.
///
/// # Examples
///
/// ```
/// use toiawase_notify::ReferralSource;
///
/// assert_eq!(ReferralSource::from_value("sns").unwrap().label(), "SNS");
/// assert_eq!(ReferralSource::from_value("blog").unwrap().label(), "ブログ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralSource {
	Search,
	Sns,
	Blog,
	Friend,
	Other,
}

impl ReferralSource {
	/// Map a submitted radio value to a referral source
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			"search" => Some(Self::Search),
			"sns" => Some(Self::Sns),
			"blog" => Some(Self::Blog),
			"friend" => Some(Self::Friend),
			"other" => Some(Self::Other),
			_ => None,
		}
	}

	/// Human-readable label interpolated into the payload
	pub fn label(&self) -> &'static str {
		match self {
			Self::Search => "検索エンジン",
			Self::Sns => "SNS",
			Self::Blog => "ブログ",
			Self::Friend => "知人の紹介",
			Self::Other => "その他",
		}
	}
}

/// Semantic values extracted from a validated contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryValues {
	pub category: Option<InquiryCategory>,
	pub name: String,
	pub company: String,
	pub referral: Option<ReferralSource>,
	pub detail: String,
}

impl InquiryValues {
	/// Extract values with a single scan over the form's controls.
	///
	/// Radio groups contribute the mapped category/referral of their checked
	/// member; an unknown radio value yields no category. Text fields are
	/// taken trimmed by name.
	pub fn from_form(form: &Form) -> Self {
		let mut values = Self {
			category: None,
			name: String::new(),
			company: String::new(),
			referral: None,
			detail: String::new(),
		};
		for control in form.controls() {
			match (control.kind, control.name.as_str()) {
				(ControlKind::Radio, CATEGORY_FIELD) if control.checked => {
					values.category = InquiryCategory::from_value(&control.value);
				}
				(ControlKind::Radio, REFERRAL_FIELD) if control.checked => {
					values.referral = ReferralSource::from_value(&control.value);
				}
				(ControlKind::Radio, _) => {}
				(_, NAME_FIELD) => values.name = control.trimmed_value().to_string(),
				(_, COMPANY_FIELD) => values.company = control.trimmed_value().to_string(),
				(_, DETAIL_FIELD) => values.detail = control.trimmed_value().to_string(),
				_ => {}
			}
		}
		values
	}

	/// Render the outbound text from the fixed multi-line template.
	///
	/// Each line is trimmed of incidental whitespace; the company line falls
	/// back to the placeholder when the field was left empty.
	pub fn render_text(&self) -> String {
		let mut context: HashMap<&str, String> = HashMap::new();
		context.insert(
			"category",
			self.category.map(|c| c.label().to_string()).unwrap_or_default(),
		);
		context.insert("name", self.name.clone());
		context.insert(
			"company",
			if self.company.is_empty() {
				COMPANY_PLACEHOLDER.to_string()
			} else {
				self.company.clone()
			},
		);
		context.insert(
			"referral",
			self.referral.map(|r| r.label().to_string()).unwrap_or_default(),
		);
		context.insert("detail", self.detail.clone());

		let mut text = MESSAGE_TEMPLATE.to_string();
		for (key, value) in &context {
			text = text.replace(&format!("{{{{{key}}}}}"), value);
		}
		text.lines()
			.map(str::trim)
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Build the JSON body posted to the endpoint
	pub fn to_payload(&self) -> WebhookPayload {
		WebhookPayload {
			text: self.render_text(),
		}
	}
}

/// The outbound JSON body: a single text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
	pub text: String,
}
