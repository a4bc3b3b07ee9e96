use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use build_info::{GitInfo, VersionControl};
use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use farm_data::{ADDRESS, EMAIL, FARM_NAME, FEED_PAGE, PHONE};

build_info::build_info!(pub fn build);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Nav {
	Home,
	Shop,
	WhereToFindUs,
	AboutUs,
	Faq,
	ContactUs
}

impl Nav {
	pub const MAIN: [Self; 4] = [Self::Home, Self::Shop, Self::WhereToFindUs, Self::AboutUs];
	pub const SUPPORT: [Self; 2] = [Self::ContactUs, Self::Faq];

	pub fn href(self) -> &'static str {
		match self {
			Self::Home => "/",
			Self::Shop => "/shop",
			Self::WhereToFindUs => "/where-to-find-us",
			Self::AboutUs => "/about-us",
			Self::Faq => "/faq",
			Self::ContactUs => "/contact-us"
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::Shop => "Shop",
			Self::WhereToFindUs => "Where to Find Us",
			Self::AboutUs => "About Us",
			Self::Faq => "FAQ",
			Self::ContactUs => "Contact Us"
		}
	}

	pub fn all() -> impl Iterator<Item = Self> {
		Self::MAIN.into_iter().chain(Self::SUPPORT)
	}
}

const SOCIALS: [(&str, &str); 3] = [
	("Facebook", FEED_PAGE),
	("Instagram", "https://instagram.com/glennleighfarms"),
	("Twitter", "https://twitter.com/glennleighfarms"),
];

const LAYOUT_STYLE: &str = concatcp!(farm_data::BASE_STYLE, r"
#site-header {
	display: flex;
	justify-content: space-between;
	align-items: center;
	flex-wrap: wrap;
	padding: 14px 24px;
	border-bottom: 1px solid var(--border-color);
	background-color: var(--card-background);
}
#site-header .brand {
	font-family: Georgia, serif;
	font-weight: bold;
	font-size: 20px;
}
#site-header nav a {
	margin-left: 18px;
	color: var(--muted-text);
}
#site-header nav a.current {
	color: var(--primary);
	font-weight: bold;
}
footer {
	background-color: var(--muted);
	border-top: 1px solid var(--border-color);
	padding: 40px 24px 20px 24px;
}
footer .columns {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
	gap: 24px;
	max-width: 1200px;
	margin: auto;
}
footer ul {
	list-style: none;
	padding: 0;
}
footer li {
	margin: 8px 0;
	color: var(--muted-text);
	font-size: 14px;
}
#credits {
	text-align: center;
	font-size: 12px;
	color: var(--muted-text);
	margin-top: 24px;
}
");

/// Wraps the content of every page with the header, footer, and everything that goes in `<head>`
pub struct Page<C: RenderOnce> {
	pub title: &'static str,
	pub description: &'static str,
	pub current: Option<Nav>,
	pub style: &'static str,
	pub content: C
}

impl<C> RenderOnce for Page<C> where C: RenderOnce {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let current = self.current;

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					title : self.title;
					meta(charset = "utf-8");
					meta(name = "description", content = self.description);
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					link(rel = "alternate", type = "application/rss+xml", href = "/index.xml");
					style : Raw(LAYOUT_STYLE);
					style : Raw(self.style);
				}
				body {
					header(id = "site-header") {
						a(href = "/", class = "brand") : FARM_NAME;
						nav {
							@ for item in Nav::all() {
								@ if Some(item) == current {
									a(href = item.href(), class = "current") : item.name();
								} else {
									a(href = item.href()) : item.name();
								}
							}
						}
					}
					main : self.content;
					: Footer;
				}
			}
		};
	}
}

struct Footer;

impl RenderOnce for Footer {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let build_info = build();
		let compiler_info = &build_info.compiler;
		let unknown_commit = "?????".to_string();

		tmpl << html! {
			footer {
				div(class = "columns") {
					div {
						h3 : "Navigation";
						ul {
							@ for item in Nav::MAIN {
								li { a(href = item.href()) : item.name(); }
							}
						}
					}
					div {
						h3 : "Support";
						ul {
							@ for item in Nav::SUPPORT {
								li { a(href = item.href()) : item.name(); }
							}
						}
					}
					div {
						h3 : "Connect";
						ul {
							li { a(href = "/index.xml") : "Farm updates (RSS)"; }
							@ for (name, href) in SOCIALS {
								li { a(href = href, target = "_blank", rel = "noopener noreferrer") : name; }
							}
						}
					}
					div {
						h3 : "Contact Info";
						ul {
							li : ADDRESS;
							li : PHONE;
							li : EMAIL;
						}
					}
				}
				div(id = "credits") {
					: format!("© 2025 {FARM_NAME}. All rights reserved. ");
					: format!("Built at {} using rustc {} {}, from ", build_info.timestamp, compiler_info.channel, compiler_info.version);
					: format!("#{}", match build_info.version_control {
						Some(VersionControl::Git(GitInfo { ref commit_id, .. })) => commit_id,
						_ => &unknown_commit
					});
				}
			}
		};
	}
}

/// Renders a template to a response, turning the (rare) render failure into a 500 rather than a
/// panic.
pub fn into_response(status: StatusCode, page: impl Template) -> Response {
	match page.into_string() {
		Ok(html) => (status, Html(html)).into_response(),
		Err(e) => {
			tracing::error!("Couldn't render page: {e}");
			(StatusCode::INTERNAL_SERVER_ERROR, "Couldn't render this page").into_response()
		}
	}
}

pub async fn not_found() -> Response {
	into_response(StatusCode::NOT_FOUND, Page {
		title: "Not Found - Glenn Leigh Farms LLC",
		description: "This page doesn't exist.",
		current: None,
		style: "",
		content: html! {
			section(class = "hero") {
				h1 : "Page not found";
				p : "We couldn't find what you were looking for.";
				a(href = "/", class = "button") : "Back to the farm";
			}
		}
	})
}
