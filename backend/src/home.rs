use axum::{http::StatusCode, response::Response};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use farm_data::{format_timestamp, DateStyle, FarmUpdate, FARM_UPDATES, FEED_PAGE};

use crate::layout::{into_response, Nav, Page};

const STYLE: &str = r"
.hero .actions {
	display: flex;
	justify-content: center;
	gap: 12px;
	margin-top: 20px;
}
.feature {
	text-align: center;
}
.update img {
	width: 100%;
	height: 200px;
	object-fit: cover;
}
.update .posted {
	font-size: 13px;
	color: var(--muted-text);
}
#follow {
	text-align: center;
	margin-top: 24px;
}
#cta {
	background-color: var(--primary);
	color: var(--primary-text);
	text-align: center;
}
#cta .button {
	margin: 0 6px;
}
";

const FEATURES: [(&str, &str); 4] = [
	("Farm Fresh", "Premium quality meat raised with care and dedication"),
	("Local Delivery", "Fresh delivery to your doorstep within our service area"),
	("Quality Assured", "100% satisfaction guarantee with every purchase"),
	("Family Owned", "Three generations of farming expertise and tradition"),
];

pub async fn home() -> Response {
	into_response(StatusCode::OK, Page {
		title: "Glenn Leigh Farms LLC - Premium Farm Fresh Meat",
		description: "Family-owned farm providing premium quality meat products using sustainable farming practices. Shop our selection of beef, pork, and farm accessories.",
		current: Some(Nav::Home),
		style: STYLE,
		content: HomePage
	})
}

struct HomePage;

impl RenderOnce for HomePage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(class = "hero") {
				h1 : "Premium Farm Fresh Meat";
				p : "Experience the Glenn Leigh difference. Three generations of farming excellence, sustainable practices, and uncompromising quality in every cut.";
				div(class = "actions") {
					a(href = Nav::Shop.href(), class = "button") : "Shop Now";
					a(href = Nav::AboutUs.href(), class = "button outline") : "Learn More";
				}
			}
			section {
				h2(class = "section-title") : "Why Choose Glenn Leigh Farms?";
				p(class = "section-intro") : "Our commitment to quality, sustainability, and tradition sets us apart.";
				div(class = "grid") {
					@ for (name, description) in FEATURES {
						div(class = "card feature") {
							div(class = "card-body") {
								h3 : name;
								p(class = "description") : description;
							}
						}
					}
				}
			}
			section(class = "muted") {
				h2(class = "section-title") : "Latest from Facebook";
				p(class = "section-intro") : "Stay connected with our farm community and get the latest updates.";
				div(class = "grid") {
					@ for update in FARM_UPDATES {
						: UpdateCard(update);
					}
				}
				div(id = "follow") {
					a(href = FEED_PAGE, target = "_blank", rel = "noopener noreferrer", class = "button outline") : "Follow Us on Facebook";
				}
			}
			section(id = "cta") {
				h2 : "Ready to Taste the Difference?";
				p : "Join hundreds of satisfied customers who have discovered the Glenn Leigh Farms difference.";
				a(href = Nav::Shop.href(), class = "button") : "Shop Our Products";
				a(href = Nav::ContactUs.href(), class = "button outline") : "Get in Touch";
			}
		};
	}
}

struct UpdateCard(&'static FarmUpdate);

impl RenderOnce for UpdateCard {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let update = self.0;

		tmpl << html! {
			div(class = "card update", id = format_args!("update-{}", update.id)) {
				img(src = update.picture, alt = "Facebook post");
				div(class = "card-body") {
					span(class = "posted") : format_timestamp(update.posted_at, DateStyle::Long);
					h3 : "Farm Update";
					p(class = "description") : update.message;
					a(href = update.permalink, target = "_blank", rel = "noopener noreferrer", class = "button outline") : "View on Facebook";
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
	fn updates_show_their_day() {
		let html = UpdateCard(&FARM_UPDATES[0]).into_string().unwrap();
		assert!(html.contains("August 14, 2025"));
		assert!(html.contains("https://facebook.com/glennleighfarms/posts/1"));
	}
}
