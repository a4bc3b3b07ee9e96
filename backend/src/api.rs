//! The same lists the pages show, as JSON, with the same query parameters

use axum::{extract::Query, response::Json};
use farm_data::{filter, Event, FaqEntry, Product, Selection, EVENTS, FAQ_ENTRIES, PRODUCTS};

use crate::{events::EventParams, faq::FaqParams, shop::ShopParams};

pub async fn get_products(Query(params): Query<ShopParams>) -> Json<Vec<&'static Product>> {
	Json(filter(PRODUCTS, &params.selection()))
}

pub async fn get_faq(Query(params): Query<FaqParams>) -> Json<Vec<&'static FaqEntry>> {
	let state = params.state();
	Json(filter(FAQ_ENTRIES, &Selection::new(state.pick, String::new())))
}

pub async fn get_events(Query(params): Query<EventParams>) -> Json<Vec<&'static Event>> {
	Json(filter(EVENTS.as_slice(), &Selection::new(params.pick(), String::new())))
}
