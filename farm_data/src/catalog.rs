use serde::Serialize;
use crate::filter::{Kind, Record};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
	Meat,
	Accessories
}

impl Kind for ProductCategory {
	const ALL: &'static [Self] = &[Self::Meat, Self::Accessories];
	const ALL_LABEL: &'static str = "All Products";

	fn slug(self) -> &'static str {
		match self {
			Self::Meat => "meat",
			Self::Accessories => "accessories"
		}
	}

	fn label(self) -> &'static str {
		match self {
			Self::Meat => "Meat Products",
			Self::Accessories => "Branded Accessories"
		}
	}
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Product {
	pub id: u32,
	pub name: &'static str,
	pub category: ProductCategory,
	pub subcategory: &'static str,
	pub price_cents: u32,
	pub description: &'static str,
	pub image: &'static str,
	/// out of 5
	pub rating: f32,
	pub in_stock: bool,
	pub featured: bool
}

impl Record for Product {
	type Kind = ProductCategory;

	fn id(&self) -> u32 {
		self.id
	}

	fn kind(&self) -> ProductCategory {
		self.category
	}

	fn matches_text(&self, needle: &str) -> bool {
		self.name.to_lowercase().contains(needle) ||
			self.description.to_lowercase().contains(needle)
	}

	fn is_featured(&self) -> bool {
		self.featured
	}
}

pub static PRODUCTS: &[Product] = &[
	Product {
		id: 1,
		name: "Premium Ribeye Steak",
		category: ProductCategory::Meat,
		subcategory: "beef",
		price_cents: 2499,
		description: "Perfectly marbled, tender ribeye steak from our grass-fed cattle",
		image: "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?w=400&h=300&fit=crop",
		rating: 4.8,
		in_stock: true,
		featured: true
	},
	Product {
		id: 2,
		name: "Ground Beef Bundle",
		category: ProductCategory::Meat,
		subcategory: "beef",
		price_cents: 8999,
		description: "10 lbs of premium ground beef, perfect for family meals",
		image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400&h=300&fit=crop",
		rating: 4.9,
		in_stock: true,
		featured: true
	},
	Product {
		id: 3,
		name: "Pork Chops (4 pack)",
		category: ProductCategory::Meat,
		subcategory: "pork",
		price_cents: 1999,
		description: "Juicy, flavorful pork chops from our pasture-raised pigs",
		image: "https://images.unsplash.com/photo-1529193594544-26d2890254c4?w=400&h=300&fit=crop",
		rating: 4.7,
		in_stock: true,
		featured: false
	},
	Product {
		id: 4,
		name: "Bacon Slab",
		category: ProductCategory::Meat,
		subcategory: "pork",
		price_cents: 3499,
		description: "Thick-cut, naturally smoked bacon slab",
		image: "https://images.unsplash.com/photo-1528735602780-2552fd46c7af?w=400&h=300&fit=crop",
		rating: 4.9,
		in_stock: true,
		featured: true
	},
	Product {
		id: 5,
		name: "Glenn Leigh Farms T-Shirt",
		category: ProductCategory::Accessories,
		subcategory: "clothing",
		price_cents: 2499,
		description: "Comfortable cotton t-shirt with our farm logo",
		image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=300&fit=crop",
		rating: 4.6,
		in_stock: true,
		featured: false
	},
	Product {
		id: 6,
		name: "Farm Logo Mug",
		category: ProductCategory::Accessories,
		subcategory: "drinkware",
		price_cents: 1499,
		description: "Ceramic mug perfect for your morning coffee",
		image: "https://images.unsplash.com/photo-1514228742587-6b1558fcf93a?w=400&h=300&fit=crop",
		rating: 4.8,
		in_stock: true,
		featured: false
	},
	Product {
		id: 7,
		name: "Farmers Cap",
		category: ProductCategory::Accessories,
		subcategory: "clothing",
		price_cents: 1999,
		description: "Adjustable cap with embroidered farm logo",
		image: "https://images.unsplash.com/photo-1588850568320-9cb8f8da4e3a?w=400&h=300&fit=crop",
		rating: 4.5,
		in_stock: false,
		featured: false
	},
	Product {
		id: 8,
		name: "Premium Beef Jerky",
		category: ProductCategory::Meat,
		subcategory: "beef",
		price_cents: 1299,
		description: "Handcrafted beef jerky with our special seasoning",
		image: "https://images.unsplash.com/photo-1617196034796-73dfa7b1fd56?w=400&h=300&fit=crop",
		rating: 4.7,
		in_stock: true,
		featured: true
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_unique() {
		let mut ids = PRODUCTS.iter().map(|p| p.id).collect::<Vec<_>>();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), PRODUCTS.len());
	}

	#[test]
	fn ratings_are_in_range() {
		assert!(PRODUCTS.iter().all(|p| (0.0..=5.0).contains(&p.rating)));
	}

	#[test]
	fn serializes_category_in_lowercase() {
		let json = serde_json::to_value(&PRODUCTS[0]).unwrap();
		assert_eq!(json["category"], "meat");
		assert_eq!(json["price_cents"], 2499);
	}
}
