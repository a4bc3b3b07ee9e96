use axum::{extract::Query, http::StatusCode, response::Response};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use serde::Deserialize;
use farm_data::{
	capitalized, featured, filter, format_date, DateStyle, Event, EventType, Kind, Pick, Selection,
	EVENTS, PHONE, PHONE_LINK
};

use crate::layout::{into_response, Nav, Page};

const STYLE: &str = r"
.event-meta {
	font-size: 14px;
	margin: 8px 0;
}
.event-meta strong {
	margin-right: 4px;
}
.event-badges {
	display: flex;
	gap: 8px;
	margin-bottom: 8px;
}
#event-list {
	max-width: 1000px;
	margin: 0 auto;
}
#event-list .card {
	margin-bottom: 18px;
}
.event-when {
	text-align: right;
	font-weight: bold;
}
#event-filter {
	display: flex;
	gap: 8px;
	max-width: 420px;
	margin: 12px 0 24px 0;
}
#want-us {
	text-align: center;
}
";

#[derive(Deserialize, Default, Debug)]
pub struct EventParams {
	#[serde(rename = "type")]
	kind: Option<String>
}

impl EventParams {
	pub fn pick(&self) -> Pick<EventType> {
		Pick::from_param(self.kind.as_deref())
	}
}

pub async fn where_to_find_us(Query(params): Query<EventParams>) -> Response {
	let pick = params.pick();
	let events = filter(EVENTS.as_slice(), &Selection::new(pick, String::new()));

	into_response(StatusCode::OK, Page {
		title: "Where to Find Us - Glenn Leigh Farms LLC",
		description: "Find Glenn Leigh Farms at local farmers markets, food festivals, and special events. Check our schedule of upcoming appearances.",
		current: Some(Nav::WhereToFindUs),
		style: STYLE,
		content: EventsPage { pick, events }
	})
}

struct EventsPage {
	pick: Pick<EventType>,
	events: Vec<&'static Event>
}

impl RenderOnce for EventsPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { pick, events } = self;

		tmpl << html! {
			section(class = "hero") {
				h1 : "Where to Find Us";
				p : "Meet us at local farmers markets, food festivals, and special events throughout the region. Experience our premium products and learn about sustainable farming practices.";
			}
			section(class = "muted") {
				h2(class = "section-title") : "Featured Events";
				p(class = "section-intro") : "Don't miss these special appearances and regular market spots.";
				div(class = "grid") {
					@ for event in featured(EVENTS.as_slice()) {
						: EventCard { event, featured_section: true };
					}
				}
			}
			section {
				div(id = "event-list") {
					h2 : "Upcoming Events";
					p(class = "muted-text") : "All times are local. Events subject to weather and other conditions.";
					form(action = "/where-to-find-us", method = "get", id = "event-filter") {
						select(name = "type") {
							@ for choice in Pick::<EventType>::choices() {
								option(value = choice.slug(), selected ?= (choice == pick)) : choice.label();
							}
						}
						input(type = "submit", value = "Filter");
					}
					@ for event in events.iter().copied() {
						: EventCard { event, featured_section: false };
					}
					@ if events.is_empty() {
						div(class = "empty-state") {
							p : "No events found for the selected filter.";
						}
					}
				}
			}
			section(class = "muted", id = "want-us") {
				h2 : "Want Us at Your Event?";
				p(class = "section-intro") : "We're always looking for new opportunities to connect with our community. Contact us to discuss bringing Glenn Leigh Farms to your farmers market, festival, or special event.";
				a(href = Nav::ContactUs.href(), class = "button") : "Contact Us";
				: " ";
				a(href = PHONE_LINK, class = "button outline") : format!("Call {PHONE}");
			}
		};
	}
}

struct EventCard {
	event: &'static Event,
	/// The featured cards always say they're featured and put the date below the description;
	/// the list only marks the featured ones and puts the date up top.
	featured_section: bool
}

impl RenderOnce for EventCard {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { event, featured_section } = self;
		let date = format_date(event.date, DateStyle::LongWithWeekday);

		tmpl << html! {
			div(class = "card", id = format_args!("event-{}", event.id)) {
				div(class = "card-body") {
					div(class = "event-badges") {
						span(class = format_args!("badge {}", event.kind.badge().class())) : capitalized(event.kind.slug());
						@ if event.featured {
							span(class = "badge") : "Featured";
						}
					}
					@ if !featured_section {
						div(class = "event-when") {
							div : &date;
							div(class = "muted-text") : event.time;
						}
					}
					h3 : event.name;
					p(class = "description") : event.description;
					@ if featured_section {
						div(class = "event-meta") : &date;
						div(class = "event-meta") : event.time;
					}
					div(class = "event-meta") {
						div { strong : event.location; }
						div(class = "muted-text") : event.address;
					}
					div(class = "event-meta") {
						strong : "Recurring:";
						: event.recurring;
					}
					div(class = "event-meta") {
						strong : "Contact:";
						: event.contact;
					}
					@ if let Some(website) = event.website {
						a(href = website, target = "_blank", rel = "noopener noreferrer", class = "button outline") : "Event Website";
					}
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use horrorshow::Template;

	#[test]
	fn card_uses_weekday_dates_and_type_colors() {
		let html = EventCard { event: &EVENTS[1], featured_section: true }.into_string().unwrap();
		assert!(html.contains("Friday, August 22, 2025"));
		assert!(html.contains("badge badge-purple"));
		assert!(html.contains(">Festival<"));
		assert!(html.contains("https://countrysidefoods.com"));
	}
}
