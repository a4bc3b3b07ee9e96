use axum::{extract::State, http::StatusCode, response::Response, Form};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use farm_data::{
	ContactForm, FormProblem, InquiryType, ADDRESS, EMAIL, PHONE, PHONE_LINK
};
use const_format::concatcp;

use crate::{
	layout::{into_response, Nav, Page},
	submission::Receipt,
	AppState
};

const STYLE: &str = r"
.info {
	text-align: center;
}
.info .details {
	font-weight: bold;
	margin: 6px 0;
}
#inquiry {
	max-width: 760px;
	margin: 0 auto;
}
#inquiry label {
	display: block;
	margin-bottom: 16px;
	font-weight: bold;
}
#inquiry input, #inquiry select, #inquiry textarea {
	display: block;
	width: 100%;
	margin-top: 6px;
	font-weight: normal;
}
.pair {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 16px;
}
.notice {
	border-radius: 8px;
	padding: 12px 16px;
	margin-bottom: 18px;
}
.notice.success {
	background-color: #dcfce7;
	color: #166534;
}
.notice.error {
	background-color: #fee2e2;
	color: #991b1b;
}
";

const INQUIRY_PLACEHOLDER: &str = "Select the type of inquiry";

const GOOGLE_MAPS: &str = "https://maps.google.com/?q=123+Farm+Road+Countryside+ST+12345";

struct InfoCard {
	title: &'static str,
	details: &'static str,
	description: &'static str,
	action: Option<(&'static str, &'static str)>
}

const CONTACT_INFO: [InfoCard; 4] = [
	InfoCard {
		title: "Phone",
		details: PHONE,
		description: "Monday - Friday, 8:00 AM - 6:00 PM",
		action: Some(("Call Now", PHONE_LINK))
	},
	InfoCard {
		title: "Email",
		details: EMAIL,
		description: "We respond within 24 hours",
		action: Some(("Send Email", concatcp!("mailto:", EMAIL)))
	},
	InfoCard {
		title: "Farm Address",
		details: ADDRESS,
		description: "Visits by appointment only",
		action: Some(("Get Directions", GOOGLE_MAPS))
	},
	InfoCard {
		title: "Business Hours",
		details: "Monday - Friday: 8:00 AM - 6:00 PM",
		description: "Saturday: 7:00 AM - 3:00 PM (Market Days)",
		action: None
	},
];

/// The banner at the top of the form after something was sent (or tried to be)
#[derive(Debug, PartialEq, Eq)]
pub struct Notice {
	pub success: bool,
	pub title: &'static str,
	pub description: &'static str,
	/// Only there when the message actually went out
	pub receipt: Option<Receipt>
}

impl Notice {
	fn sent(receipt: Receipt) -> Self {
		Self {
			success: true,
			title: "Message sent successfully!",
			description: "We'll get back to you within 24 hours.",
			receipt: Some(receipt)
		}
	}

	fn class(&self) -> &'static str {
		if self.success { "notice success" } else { "notice error" }
	}
}

pub async fn contact_us() -> Response {
	render(StatusCode::OK, ContactForm::default(), None, Vec::new())
}

pub async fn send_message(
	State(state): State<AppState>,
	Form(form): Form<ContactForm>
) -> Response {
	let inquiry = match form.validate() {
		Ok(inquiry) => inquiry,
		Err(e) => {
			tracing::debug!("Contact form came in incomplete: {e}");
			return render(StatusCode::BAD_REQUEST, form, None, e.0);
		}
	};

	match state.submitter.submit(&inquiry).await {
		// Sent, so they get a fresh form
		Ok(receipt) => render(StatusCode::OK, ContactForm::default(), Some(Notice::sent(receipt)), Vec::new()),
		Err(e) => {
			tracing::error!("Couldn't send inquiry from {}: {e}", inquiry.email);
			let notice = Notice {
				success: false,
				title: e.title(),
				description: e.description(),
				receipt: None
			};
			render(StatusCode::BAD_GATEWAY, form, Some(notice), Vec::new())
		}
	}
}

fn render(
	status: StatusCode,
	form: ContactForm,
	notice: Option<Notice>,
	problems: Vec<FormProblem>
) -> Response {
	into_response(status, Page {
		title: "Contact Us - Glenn Leigh Farms LLC",
		description: "Get in touch with Glenn Leigh Farms. Contact us for orders, wholesale inquiries, farm visits, or general questions about our premium farm products.",
		current: Some(Nav::ContactUs),
		style: STYLE,
		content: ContactPage { form, notice, problems }
	})
}

struct ContactPage {
	form: ContactForm,
	notice: Option<Notice>,
	problems: Vec<FormProblem>
}

impl RenderOnce for ContactPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { form, notice, problems } = self;

		tmpl << html! {
			section(class = "hero") {
				h1 : "Contact Us";
				p : "We'd love to hear from you. Get in touch with any questions about our products, wholesale opportunities, or to schedule a farm visit.";
			}
			section {
				h2(class = "section-title") : "Get in Touch";
				p(class = "section-intro") : "Multiple ways to reach us for your convenience.";
				div(class = "grid") {
					@ for info in &CONTACT_INFO {
						div(class = "card info") {
							div(class = "card-body") {
								h3 : info.title;
								div(class = "details") : info.details;
								p(class = "muted-text") : info.description;
								@ if let Some((text, href)) = info.action {
									@ if href.starts_with("http") {
										a(href = href, target = "_blank", rel = "noopener noreferrer", class = "button outline") : text;
									} else {
										a(href = href, class = "button outline") : text;
									}
								}
							}
						}
					}
				}
			}
			section(class = "muted") {
				div(id = "inquiry") {
					h2(class = "section-title") : "Send Us a Message";
					p(class = "section-intro") : "Fill out the form below and we'll get back to you as soon as possible.";
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Inquiry Form";
							p(class = "muted-text") : "Please provide as much detail as possible to help us assist you better.";
							@ if let Some(notice) = &notice {
								div(class = notice.class()) {
									strong : notice.title;
									p : notice.description;
									@ if let Some(receipt) = notice.receipt {
										p(class = "reference") : format!("Reference: {}", receipt.reference);
									}
								}
							}
							@ if !problems.is_empty() {
								div(class = "notice error") {
									strong : "Please fix the following:";
									ul {
										@ for problem in &problems {
											li : problem.to_string();
										}
									}
								}
							}
							: InquiryForm(form);
						}
					}
				}
			}
			section {
				div(class = "grid") {
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Wholesale Inquiries";
							p(class = "description") : "Interested in carrying our products in your restaurant, store, or market? We offer competitive wholesale pricing for restaurants, grocery stores, and other food service businesses. Our products are available in bulk quantities with flexible delivery options.";
							ul {
								li : "Minimum order quantities available";
								li : "Custom packaging options";
								li : "Regular delivery schedules";
								li : "Volume discounts";
							}
							a(href = "mailto:wholesale@glennleighfarms.com", class = "button outline") : "Contact Wholesale Team";
						}
					}
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Farm Visits & Tours";
							p(class = "description") : "Experience sustainable farming firsthand with a guided tour of our facilities. We welcome visitors to learn about our farming practices and see the Glenn Leigh method in action. Tours are available by appointment and include educational components suitable for all ages.";
							ul {
								li : "Educational tours for schools and groups";
								li : "Behind-the-scenes farm operations";
								li : "Meet our livestock and team";
								li : "Learn about sustainable agriculture";
							}
							a(href = "mailto:tours@glennleighfarms.com", class = "button outline") : "Schedule a Visit";
						}
					}
				}
			}
		};
	}
}

/// The form itself, filled in with whatever was last sent
struct InquiryForm(ContactForm);

impl RenderOnce for InquiryForm {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let form = self.0;

		tmpl << html! {
			form(action = Nav::ContactUs.href(), method = "post") {
				div(class = "pair") {
					label {
						: "Full Name *";
						input(type = "text", name = "name", value = form.name.as_str(), placeholder = "Your full name", required ?= true);
					}
					label {
						: "Email Address *";
						input(type = "email", name = "email", value = form.email.as_str(), placeholder = "your.email@example.com", required ?= true);
					}
				}
				div(class = "pair") {
					label {
						: "Phone Number";
						input(type = "tel", name = "phone", value = form.phone.as_str(), placeholder = PHONE);
					}
					label {
						: "Company/Organization";
						input(type = "text", name = "company", value = form.company.as_str(), placeholder = "Your company name (optional)");
					}
				}
				label {
					: "Inquiry Type *";
					select(name = "inquiry_type", required ?= true) {
						option(value = "", selected ?= form.inquiry_type.is_empty()) : INQUIRY_PLACEHOLDER;
						@ for ty in InquiryType::ALL {
							option(value = ty.slug(), selected ?= (form.inquiry_type == ty.slug())) : ty.label();
						}
					}
				}
				label {
					: "Subject *";
					input(type = "text", name = "subject", value = form.subject.as_str(), placeholder = "Brief description of your inquiry", required ?= true);
				}
				label {
					: "Message *";
					textarea(name = "message", rows = "6", placeholder = "Please provide details about your inquiry...", required ?= true) : form.message.as_str();
				}
				button(type = "submit", class = "button") : "Send Message";
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use horrorshow::Template;

	#[test]
	fn form_keeps_what_was_typed() {
		let form = ContactForm {
			name: "Pat".into(),
			inquiry_type: "farm-visits".into(),
			message: "Hello <there>".into(),
			..ContactForm::default()
		};

		let html = InquiryForm(form).into_string().unwrap();
		assert!(html.contains(r#"value="Pat""#));
		assert!(html.contains(r#"<option value="farm-visits" selected>"#));
		assert!(html.contains("Hello &lt;there&gt;"));
	}

	#[test]
	fn sent_notice_shows_the_reference() {
		let receipt = Receipt { reference: uuid::Uuid::nil() };
		let html = ContactPage {
			form: ContactForm::default(),
			notice: Some(Notice::sent(receipt)),
			problems: Vec::new()
		}.into_string().unwrap();

		assert!(html.contains("Message sent successfully!"));
		assert!(html.contains("Reference: 00000000-0000-0000-0000-000000000000"));
	}

	#[test]
	fn empty_form_selects_the_placeholder() {
		let html = InquiryForm(ContactForm::default()).into_string().unwrap();
		assert!(html.contains(r#"<option value="" selected>"#));
		assert!(!html.contains(r#"value="general" selected"#));
	}
}
