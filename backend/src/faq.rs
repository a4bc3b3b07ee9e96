use axum::{extract::Query, http::StatusCode, response::Response};
use const_format::concatcp;
use horrorshow::{html, RenderOnce, TemplateBuffer};
use serde::Deserialize;
use farm_data::{filter, ExpansionSet, FaqCategory, FaqEntry, Pick, Selection, EMAIL, FAQ_ENTRIES, PHONE, PHONE_LINK};

use crate::layout::{into_response, Nav, Page};

const STYLE: &str = r"
#faq-categories {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 12px;
}
#faq-list {
	max-width: 900px;
	margin: 0 auto;
}
.question {
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 16px 20px;
	font-size: 18px;
	font-weight: bold;
}
.question .chevron {
	color: var(--muted-text);
}
.answer {
	padding: 0 20px 16px 20px;
	color: var(--muted-text);
	line-height: 1.6;
}
#faq-list .card {
	margin-bottom: 14px;
}
#still-have-questions {
	text-align: center;
}
";

#[derive(Deserialize, Default, Debug)]
pub struct FaqParams {
	category: Option<String>,
	open: Option<String>
}

/// Everything the FAQ page needs to know to draw itself, and to build the links that move it to
/// its next state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqState {
	pub pick: Pick<FaqCategory>,
	pub expanded: ExpansionSet
}

impl FaqParams {
	pub fn state(self) -> FaqState {
		FaqState {
			pick: Pick::from_param(self.category.as_deref()),
			expanded: self.open
				.as_deref()
				.map(ExpansionSet::from_param)
				.unwrap_or_default()
				.restricted_to(FAQ_ENTRIES)
		}
	}
}

impl FaqState {
	fn href(pick: Pick<FaqCategory>, expanded: &ExpansionSet) -> String {
		let mut href = format!("/faq?category={}", pick.slug());
		if !expanded.is_empty() {
			href.push_str("&open=");
			href.push_str(&expanded.to_param());
		}
		href
	}

	/// Where to go to show a different category. The open answers stay open.
	pub fn category_href(&self, pick: Pick<FaqCategory>) -> String {
		Self::href(pick, &self.expanded)
	}

	/// Where to go to open (or close) the answer for `id`
	pub fn toggle_href(&self, id: u32) -> String {
		let toggled = self.expanded.clone().toggle(id);
		format!("{}#faq-{id}", Self::href(self.pick, &toggled))
	}
}

pub async fn faq(Query(params): Query<FaqParams>) -> Response {
	let state = params.state();
	let entries = filter(FAQ_ENTRIES, &Selection::new(state.pick, String::new()));

	into_response(StatusCode::OK, Page {
		title: "FAQ - Glenn Leigh Farms LLC",
		description: "Frequently asked questions about Glenn Leigh Farms products, farming practices, orders, and wholesale opportunities.",
		current: Some(Nav::Faq),
		style: STYLE,
		content: FaqPage { state, entries }
	})
}

struct FaqPage {
	state: FaqState,
	entries: Vec<&'static FaqEntry>
}

impl RenderOnce for FaqPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { state, entries } = self;

		tmpl << html! {
			section(class = "hero") {
				h1 : "Frequently Asked Questions";
				p : "Find answers to common questions about our products, farming practices, and services. Can't find what you're looking for? We're here to help.";
			}
			section(class = "muted") {
				div(id = "faq-categories") {
					@ for pick in Pick::<FaqCategory>::choices() {
						@ if pick == state.pick {
							a(href = state.category_href(pick), class = "button") : pick.label();
						} else {
							a(href = state.category_href(pick), class = "button outline") : pick.label();
						}
					}
				}
			}
			section {
				div(id = "faq-list") {
					@ for entry in &entries {
						div(class = "card", id = format_args!("faq-{}", entry.id)) {
							a(class = "question", href = state.toggle_href(entry.id)) {
								span : entry.question;
								span(class = "chevron") : state.expanded.chevron(entry.id).glyph();
							}
							@ if state.expanded.contains(entry.id) {
								p(class = "answer") : entry.answer;
							}
						}
					}
					@ if entries.is_empty() {
						div(class = "empty-state") {
							p : "No questions found in this category.";
						}
					}
				}
			}
			section(class = "muted", id = "still-have-questions") {
				h2 : "Still Have Questions?";
				p(class = "section-intro") : "We're here to help! Contact us through any of these channels and we'll get back to you promptly.";
				div(class = "grid") {
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Contact Form";
							p(class = "description") : "Fill out our detailed contact form for comprehensive assistance.";
							a(href = Nav::ContactUs.href(), class = "button outline") : "Contact Form";
						}
					}
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Call Us";
							p(class = "description") : "Speak directly with our team during business hours.";
							a(href = PHONE_LINK, class = "button outline") : PHONE;
						}
					}
					div(class = "card") {
						div(class = "card-body") {
							h3 : "Email Us";
							p(class = "description") : "Send us an email and we'll respond within 24 hours.";
							a(href = concatcp!("mailto:", EMAIL), class = "button outline") : "Send Email";
						}
					}
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(category: Option<&str>, open: Option<&str>) -> FaqState {
		FaqParams {
			category: category.map(Into::into),
			open: open.map(Into::into)
		}.state()
	}

	#[test]
	fn no_params_means_everything_collapsed() {
		let state = parse(None, None);
		assert_eq!(state.pick, Pick::All);
		assert!(state.expanded.is_empty());
	}

	#[test]
	fn open_ids_that_dont_exist_are_ignored() {
		let state = parse(Some("orders"), Some("3,99,x"));
		assert_eq!(state.pick, Pick::Only(FaqCategory::Orders));
		assert_eq!(state.expanded.to_param(), "3");
	}

	#[test]
	fn toggle_links_flip_one_answer() {
		let state = parse(Some("orders"), None);
		assert_eq!(state.toggle_href(3), "/faq?category=orders&open=3#faq-3");

		let state = parse(Some("orders"), Some("3"));
		assert_eq!(state.toggle_href(3), "/faq?category=orders#faq-3");
		assert_eq!(state.toggle_href(4), "/faq?category=orders&open=3,4#faq-4");
	}

	#[test]
	fn category_links_keep_answers_open() {
		let state = parse(None, Some("1,7"));
		assert_eq!(state.category_href(Pick::Only(FaqCategory::Wholesale)), "/faq?category=wholesale&open=1,7");
	}
}
