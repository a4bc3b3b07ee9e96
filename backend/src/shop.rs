use axum::{extract::Query, http::StatusCode, response::Response};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use serde::Deserialize;
use farm_data::{
	capitalized, featured, filter, format_price, star_rating, Pick, Product, ProductCategory,
	Selection, PRODUCTS
};

use crate::layout::{into_response, Nav, Page};

const STYLE: &str = r"
.stars {
	color: #facc15;
	letter-spacing: 1px;
}
.stars .empty {
	color: #d1d5db;
}
.stars .count {
	color: var(--muted-text);
	font-size: 13px;
	margin-left: 4px;
}
.card-top, .card-bottom {
	display: flex;
	justify-content: space-between;
	align-items: center;
}
.price {
	font-size: 24px;
	font-weight: bold;
	color: var(--primary);
}
#shop-filters {
	max-width: 1200px;
	margin: 0 auto;
}
#search-row {
	display: flex;
	gap: 8px;
}
#category-row {
	margin-top: 12px;
	display: flex;
	flex-wrap: wrap;
	gap: 8px;
}
";

/// How many featured products get shown above the full list
const FEATURED_COUNT: usize = 4;

#[derive(Deserialize, Default, Debug)]
pub struct ShopParams {
	category: Option<String>,
	q: Option<String>
}

impl ShopParams {
	pub fn selection(self) -> Selection<ProductCategory> {
		Selection::new(
			Pick::from_param(self.category.as_deref()),
			self.q.unwrap_or_default()
		)
	}
}

pub async fn shop(Query(params): Query<ShopParams>) -> Response {
	let selection = params.selection();
	let products = filter(PRODUCTS, &selection);

	tracing::debug!(
		"Shop filtered by {} / {:?} down to {} products",
		selection.pick.slug(),
		selection.query,
		products.len()
	);

	into_response(StatusCode::OK, Page {
		title: "Shop - Glenn Leigh Farms LLC",
		description: "Shop our premium farm fresh meat products and branded accessories. Quality beef, pork, and farm merchandise available online.",
		current: Some(Nav::Shop),
		style: STYLE,
		content: ShopPage { selection, products }
	})
}

struct ShopPage {
	selection: Selection<ProductCategory>,
	products: Vec<&'static Product>
}

impl RenderOnce for ShopPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { selection, products } = self;
		let current = selection.pick;

		tmpl << html! {
			section(class = "hero") {
				h1 : "Farm Shop";
				p : "Premium quality meat products and farm-branded merchandise, delivered fresh to your door.";
			}
			section {
				h2(class = "section-title") : "Featured Products";
				div(class = "grid") {
					@ for product in featured(PRODUCTS).into_iter().take(FEATURED_COUNT) {
						: ProductCard { product, badge: "Featured".into() };
					}
				}
			}
			section(class = "muted") {
				// one form for both search and categories, so that switching category keeps the
				// search text and searching keeps the category
				form(action = "/shop", method = "get", id = "shop-filters") {
					div(id = "search-row") {
						input(type = "search", name = "q", value = selection.query.as_str(), placeholder = "Search products...");
						// first submit button, so it's the one that pressing enter uses
						button(type = "submit", name = "category", value = current.slug()) : "Search";
					}
					div(id = "category-row") {
						@ for pick in Pick::<ProductCategory>::choices() {
							@ if pick == current {
								button(type = "submit", name = "category", value = pick.slug(), class = "button") : pick.label();
							} else {
								button(type = "submit", name = "category", value = pick.slug(), class = "button outline") : pick.label();
							}
						}
					}
				}
				@ if products.is_empty() {
					div(class = "empty-state") {
						p : "No products found matching your criteria.";
					}
				} else {
					div(class = "grid") {
						@ for product in products {
							: ProductCard { product, badge: capitalized(product.subcategory) };
						}
					}
				}
			}
		};
	}
}

struct ProductCard {
	product: &'static Product,
	badge: String
}

impl RenderOnce for ProductCard {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let product = self.product;

		tmpl << html! {
			div(class = "card", id = format_args!("product-{}", product.id)) {
				img(src = product.image, alt = product.name);
				div(class = "card-body") {
					div(class = "card-top") {
						span(class = "badge") : self.badge;
						: Stars(product.rating);
					}
					h3 : product.name;
					p(class = "description") : product.description;
					div(class = "card-bottom") {
						span(class = "price") : format_price(product.price_cents);
						@ if product.in_stock {
							button(type = "button") : "Add to Cart";
						} else {
							button(type = "button", disabled ?= true) : "Out of Stock";
						}
					}
				}
			}
		};
	}
}

pub struct Stars(pub f32);

impl RenderOnce for Stars {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let rating = self.0;

		tmpl << html! {
			span(class = "stars", title = format_args!("{rating} out of 5")) {
				@ for star in star_rating(rating) {
					@ if star.filled {
						span(class = "filled") : "★";
					} else {
						span(class = "empty") : "★";
					}
				}
				span(class = "count") : format!("({rating})");
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use horrorshow::Template;

	fn params(category: Option<&str>, q: Option<&str>) -> ShopParams {
		ShopParams {
			category: category.map(Into::into),
			q: q.map(Into::into)
		}
	}

	#[test]
	fn params_become_selections() {
		assert_eq!(ShopParams::default().selection(), Selection::default());
		assert_eq!(
			params(Some("accessories"), Some("mug")).selection(),
			Selection::new(Pick::Only(ProductCategory::Accessories), "mug")
		);
		assert_eq!(params(Some("vegetables"), None).selection().pick, Pick::All);
	}

	#[test]
	fn stars_render_filled_and_empty() {
		let html = Stars(4.8).into_string().unwrap();
		assert_eq!(html.matches(r#"class="filled""#).count(), 4);
		assert_eq!(html.matches(r#"class="empty""#).count(), 1);
		assert!(html.contains("(4.8)"));
	}

	#[test]
	fn out_of_stock_is_disabled() {
		let cap = PRODUCTS.iter().find(|p| p.id == 7).unwrap();
		let html = ProductCard { product: cap, badge: "Clothing".into() }.into_string().unwrap();
		assert!(html.contains("Out of Stock"));
		assert!(html.contains("$19.99"));
	}
}
