use crate::{layout::Nav, print_and_ret, AppState};
use std::{sync::Arc, collections::BTreeMap};
use tokio::sync::RwLock;
use axum::{
	extract::State,
	http::{header, StatusCode},
	response::{IntoResponse, Response}
};
use sitewriter::{UrlEntry, ChangeFreq};
use chrono::{DateTime, Utc};
use rss::{Item, Category, Guid, Source, Channel};
use farm_data::{FarmUpdate, EMAIL, FARM_NAME, FARM_UPDATES};

/// sitemap.xml and index.xml, built the first time someone asks for them. Clones share the same
/// documents, so each one belongs to exactly one `AppState` (and its `site_url`).
#[derive(Clone, Debug, Default)]
pub struct FeedCache {
	sitemap: Arc<RwLock<String>>,
	rss: Arc<RwLock<String>>
}

fn utc(unix_secs: u64) -> Option<DateTime<Utc>> {
	i64::try_from(unix_secs)
		.ok()
		.and_then(|secs| DateTime::from_timestamp(secs, 0))
}

fn latest_update() -> Option<u64> {
	FARM_UPDATES.iter()
		.map(|u| u.posted_at)
		.max()
}

fn sitemap_xml(site_url: &str) -> String {
	let urls = Nav::all()
		.filter_map(|page| {
			let loc = format!("{site_url}{}", page.href());
			match loc.parse() {
				Ok(loc) => Some(UrlEntry {
					loc,
					// the home page is the only one that changes, when the feed does
					lastmod: (page == Nav::Home)
						.then(latest_update)
						.flatten()
						.and_then(utc),
					changefreq: Some(if page == Nav::Home { ChangeFreq::Weekly } else { ChangeFreq::Monthly }),
					priority: Some(if page == Nav::Home { 1.0 } else { 0.8 })
				}),
				Err(e) => {
					tracing::warn!("Leaving {loc} out of the sitemap: {e}");
					None
				}
			}
		})
		.collect::<Vec<_>>();

	if urls.is_empty() {
		return String::new();
	}

	sitewriter::generate_str(&urls)
}

pub async fn update_sitemap_xml(cache: &FeedCache, site_url: &str) -> bool {
	let xml = sitemap_xml(site_url);
	let generated = !xml.is_empty();

	*cache.sitemap.write().await = xml;
	generated
}

pub async fn get_sitemap_xml(State(state): State<AppState>) -> Response {
	let cache = state.feeds();
	if cache.sitemap.read().await.is_empty() && !update_sitemap_xml(cache, &state.site_url).await {
		print_and_ret!(StatusCode::INTERNAL_SERVER_ERROR, "Couldn't build sitemap.xml; is SITE_URL ({}) a real url?", state.site_url)
	}

	xml("application/xml", cache.sitemap.read().await.clone())
}

fn update_item(update: &FarmUpdate, site_url: &str) -> Item {
	Item {
		title: Some("Farm Update".into()),
		link: Some(update.permalink.into()),
		description: Some(update.message.into()),
		author: Some(EMAIL.into()),
		categories: vec![Category {
			name: "Farm News".into(),
			domain: None
		}],
		comments: None,
		enclosure: None,
		guid: Some(Guid {
			value: update.permalink.into(),
			permalink: true
		}),
		pub_date: utc(update.posted_at).map(|dt| dt.to_rfc2822()),
		source: Some(Source {
			url: format!("{site_url}/index.xml"),
			title: Some(FARM_NAME.into())
		}),
		content: None,
		extensions: BTreeMap::new(),
		itunes_ext: None,
		dublin_core_ext: None
	}
}

fn rss_xml(site_url: &str) -> String {
	let items = FARM_UPDATES.iter()
		.map(|update| update_item(update, site_url))
		.collect::<Vec<_>>();

	let channel = Channel {
		title: FARM_NAME.into(),
		link: site_url.into(),
		description: "News from the farm: harvests, market days, and the people behind Glenn Leigh Farms".into(),
		language: Some("en_US".into()),
		copyright: None,
		managing_editor: Some(EMAIL.into()),
		webmaster: Some(EMAIL.into()),
		pub_date: None,
		last_build_date: latest_update()
			.and_then(utc)
			.map(|dt| dt.to_rfc2822()),
		categories: vec![
			Category {
				name: "Agriculture".into(),
				domain: None
			},
			Category {
				name: "Food".into(),
				domain: None
			}
		],
		generator: Some("https://crates.io/crates/rss".into()),
		docs: None,
		cloud: None,
		rating: None,
		ttl: Some("1440".into()),
		image: None,
		text_input: None,
		skip_hours: vec![],
		skip_days: vec![],
		items,
		extensions: BTreeMap::new(),
		itunes_ext: None,
		dublin_core_ext: None,
		syndication_ext: None,
		namespaces: BTreeMap::new()
	};

	channel.to_string()
}

pub async fn get_rss_xml(State(state): State<AppState>) -> Response {
	let cache = state.feeds();
	if cache.rss.read().await.is_empty() {
		*cache.rss.write().await = rss_xml(&state.site_url);
	}

	xml("application/rss+xml", cache.rss.read().await.clone())
}

pub async fn get_robots_txt(State(state): State<AppState>) -> String {
	format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", state.site_url)
}

fn xml(content_type: &'static str, body: String) -> Response {
	(StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sitemap_has_every_page() {
		let xml = sitemap_xml("https://glennleighfarms.com");
		for page in Nav::all() {
			assert!(xml.contains(&format!("https://glennleighfarms.com{}<", page.href())), "{xml}");
		}
	}

	#[test]
	fn bad_site_url_means_no_sitemap() {
		assert_eq!(sitemap_xml("not a url"), "");
	}

	#[test]
	fn timestamps_past_i64_are_dropped() {
		assert_eq!(utc(u64::MAX), None);
		assert_eq!(utc(1_755_167_400).map(|dt| dt.to_rfc3339()).as_deref(), Some("2025-08-14T10:30:00+00:00"));
	}

	#[test]
	fn feed_has_every_update() {
		let xml = rss_xml("https://glennleighfarms.com");
		assert_eq!(xml.matches("<item>").count(), FARM_UPDATES.len());
		assert!(xml.contains("https://facebook.com/glennleighfarms/posts/3"));
	}
}
