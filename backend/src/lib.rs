use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod about;
pub mod api;
pub mod contact;
pub mod events;
pub mod faq;
pub mod home;
pub mod layout;
pub mod robots;
pub mod shop;
pub mod submission;

pub use submission::Submitter;

use robots::FeedCache;

/// Logs the message and returns it as the body of a response with the given status
#[macro_export]
macro_rules! print_and_ret{
	($err:expr, $($msg:tt)+) => {{
		let msg = format!($($msg)+);
		::tracing::error!("{msg}");
		return ::axum::response::IntoResponse::into_response(($err, msg));
	}};
}

#[derive(Clone, Debug)]
pub struct AppState {
	pub submitter: Submitter,
	/// Where the site lives, without a trailing slash, for links that leave the site (sitemap,
	/// feed, robots.txt)
	pub site_url: Arc<str>,
	feeds: FeedCache
}

impl AppState {
	pub fn new(submitter: Submitter, site_url: impl Into<Arc<str>>) -> Self {
		Self {
			submitter,
			site_url: site_url.into(),
			feeds: FeedCache::default()
		}
	}

	pub(crate) fn feeds(&self) -> &FeedCache {
		&self.feeds
	}
}

impl Default for AppState {
	fn default() -> Self {
		Self::new(Submitter::default(), "https://glennleighfarms.com")
	}
}

pub fn router(state: AppState, asset_dir: Option<String>) -> Router {
	let mut app = Router::new()
		.route("/", get(home::home))
		.route("/shop", get(shop::shop))
		.route("/about-us", get(about::about_us))
		.route("/contact-us", get(contact::contact_us).post(contact::send_message))
		.route("/faq", get(faq::faq))
		.route("/where-to-find-us", get(events::where_to_find_us))
		.route("/api/products", get(api::get_products))
		.route("/api/faq", get(api::get_faq))
		.route("/api/events", get(api::get_events))
		.route("/sitemap.xml", get(robots::get_sitemap_xml))
		.route("/robots.txt", get(robots::get_robots_txt))
		.route("/index.xml", get(robots::get_rss_xml));

	if let Some(dir) = asset_dir {
		tracing::info!("Serving assets out of {dir}");
		app = app.nest_service("/assets", ServeDir::new(dir));
	}

	app.fallback(layout::not_found)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;
	use axum::{
		body::{to_bytes, Body},
		http::{header, Method, Request, StatusCode}
	};
	use tower::ServiceExt;

	fn quick_state(force_failure: bool) -> AppState {
		AppState {
			submitter: Submitter { delay: Duration::ZERO, force_failure },
			..AppState::default()
		}
	}

	async fn send(state: AppState, req: Request<Body>) -> (StatusCode, String) {
		let res = router(state, None).oneshot(req).await.unwrap();
		let status = res.status();
		let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	async fn get_from(state: AppState, uri: &str) -> (StatusCode, String) {
		let req = Request::get(uri).body(Body::empty()).unwrap();
		send(state, req).await
	}

	async fn get(uri: &str) -> (StatusCode, String) {
		get_from(quick_state(false), uri).await
	}

	async fn ids(uri: &str) -> Vec<u64> {
		let (status, body) = get(uri).await;
		assert_eq!(status, StatusCode::OK, "{uri}");

		let json: serde_json::Value = serde_json::from_str(&body).unwrap();
		json.as_array()
			.unwrap()
			.iter()
			.map(|item| item["id"].as_u64().unwrap())
			.collect()
	}

	async fn post_contact(state: AppState, body: &'static str) -> (StatusCode, String) {
		let req = Request::builder()
			.method(Method::POST)
			.uri("/contact-us")
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from(body))
			.unwrap();
		send(state, req).await
	}

	const FILLED_IN: &str = "name=Pat+Doe&email=pat%40example.com&phone=&company=&inquiry_type=wholesale&subject=Weekly+order&message=Do+you+deliver%3F";

	#[tokio::test]
	async fn every_page_renders() {
		for (uri, expected) in [
			("/", "Premium Farm Fresh Meat"),
			("/shop", "Farm Shop"),
			("/about-us", "Our Farm History"),
			("/contact-us", "Send Us a Message"),
			("/faq", "Frequently Asked Questions"),
			("/where-to-find-us", "Want Us at Your Event?"),
		] {
			let (status, body) = get(uri).await;
			assert_eq!(status, StatusCode::OK, "{uri}");
			assert!(body.contains(expected), "{uri} is missing '{expected}'");
		}
	}

	#[tokio::test]
	async fn shop_search_narrows_the_grid() {
		let (_, body) = get("/shop?category=all&q=mug").await;
		assert!(body.contains("Farm Logo Mug"));

		let (_, body) = get("/shop?category=all&q=bacon").await;
		assert!(body.contains("Bacon Slab"));
		assert!(!body.contains("Farm Logo Mug"));

		let (_, body) = get("/shop?category=accessories&q=bacon").await;
		assert!(body.contains("No products found matching your criteria."));
	}

	#[tokio::test]
	async fn faq_opens_only_whats_asked_for() {
		let (_, body) = get("/faq?category=wholesale&open=7").await;
		assert!(body.contains("Minimum order quantities apply"));
		assert!(body.contains("Can I visit the farm?"));
		assert!(!body.contains("How do I place an order?"));

		let (_, body) = get("/faq?category=wholesale").await;
		assert!(!body.contains("Minimum order quantities apply"));
	}

	#[tokio::test]
	async fn events_filter_by_type() {
		let (_, body) = get("/where-to-find-us?type=expo").await;
		assert!(body.contains("Organic Living Expo"));

		let (_, body) = get("/where-to-find-us?type=festival").await;
		assert!(!body.contains("Organic Living Expo"));
		assert!(!body.contains("No events found for the selected filter."));
	}

	#[tokio::test]
	async fn unknown_pages_are_404() {
		let (status, body) = get("/wp-admin").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert!(body.contains("Page not found"));
	}

	#[tokio::test]
	async fn api_returns_filtered_json() {
		assert_eq!(ids("/api/products?category=meat").await, [1, 2, 3, 4, 8]);
		assert_eq!(ids("/api/products?q=mug").await, [6]);
		assert_eq!(ids("/api/faq?category=wholesale").await, [7, 8]);
		assert_eq!(ids("/api/faq").await, [1, 2, 3, 4, 5, 6, 7, 8]);
		assert_eq!(ids("/api/events?type=market").await, [1, 3, 6]);
		assert_eq!(ids("/api/events?type=unheard-of").await, [1, 2, 3, 4, 5, 6]);
	}

	#[tokio::test]
	async fn robots_point_at_the_sitemap() {
		let (_, body) = get("/robots.txt").await;
		assert!(body.contains("Sitemap: https://glennleighfarms.com/sitemap.xml"));

		let (status, body) = get("/sitemap.xml").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("https://glennleighfarms.com/where-to-find-us"));

		let (status, body) = get("/index.xml").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Farm Update"));
	}

	#[tokio::test]
	async fn each_router_links_its_own_site() {
		let a = AppState::new(Submitter::default(), "https://a.example");
		let b = AppState::new(Submitter::default(), "https://b.example");

		let (_, a_map) = get_from(a.clone(), "/sitemap.xml").await;
		let (_, b_map) = get_from(b.clone(), "/sitemap.xml").await;
		assert!(a_map.contains("https://a.example/shop"));
		assert!(!a_map.contains("https://b.example"));
		assert!(b_map.contains("https://b.example/shop"));
		assert!(!b_map.contains("https://a.example"));

		let (_, a_feed) = get_from(a, "/index.xml").await;
		let (_, b_feed) = get_from(b, "/index.xml").await;
		assert!(a_feed.contains("https://a.example/index.xml"));
		assert!(!a_feed.contains("https://b.example"));
		assert!(b_feed.contains("https://b.example/index.xml"));
		assert!(!b_feed.contains("https://a.example"));
	}

	#[tokio::test]
	async fn contact_success_resets_the_form() {
		let (status, body) = post_contact(quick_state(false), FILLED_IN).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Message sent successfully!"));
		assert!(!body.contains("Pat Doe"));
	}

	#[tokio::test]
	async fn contact_failure_keeps_what_was_typed() {
		let (status, body) = post_contact(quick_state(true), FILLED_IN).await;
		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert!(body.contains("Error sending message"));
		assert!(body.contains("Please try again or contact us directly."));
		assert!(body.contains("Pat Doe"));
	}

	#[tokio::test]
	async fn incomplete_contact_form_is_rejected() {
		let (status, body) = post_contact(quick_state(false), "name=Pat+Doe&inquiry_type=gardening").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("Email Address is required"));
		assert!(body.contains("Pat Doe"));
		assert!(!body.contains("Message sent successfully!"));
	}
}
