use serde::Serialize;
use crate::filter::{Kind, Record};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
	Products,
	Orders,
	Farming,
	Wholesale
}

impl Kind for FaqCategory {
	const ALL: &'static [Self] = &[Self::Products, Self::Orders, Self::Farming, Self::Wholesale];
	const ALL_LABEL: &'static str = "All Questions";

	fn slug(self) -> &'static str {
		match self {
			Self::Products => "products",
			Self::Orders => "orders",
			Self::Farming => "farming",
			Self::Wholesale => "wholesale"
		}
	}

	fn label(self) -> &'static str {
		match self {
			Self::Products => "Products & Quality",
			Self::Orders => "Orders & Shipping",
			Self::Farming => "Farming Practices",
			Self::Wholesale => "Wholesale & Business"
		}
	}
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
	pub id: u32,
	pub category: FaqCategory,
	pub question: &'static str,
	pub answer: &'static str
}

impl Record for FaqEntry {
	type Kind = FaqCategory;

	fn id(&self) -> u32 {
		self.id
	}

	fn kind(&self) -> FaqCategory {
		self.category
	}
}

pub static FAQ_ENTRIES: &[FaqEntry] = &[
	FaqEntry {
		id: 1,
		category: FaqCategory::Products,
		question: "What makes Glenn Leigh Farms meat different from store-bought meat?",
		answer: "Our meat is raised using the Glenn Leigh method - sustainable farming practices that prioritize animal welfare, soil health, and environmental stewardship. Our livestock are grass-fed, pasture-raised, and never given hormones or unnecessary antibiotics. This results in meat that is more flavorful, nutritious, and ethically produced."
	},
	FaqEntry {
		id: 2,
		category: FaqCategory::Products,
		question: "Are your products organic certified?",
		answer: "Yes, we achieved organic certification in 2015. Our farming practices meet or exceed all organic standards, including no synthetic pesticides, fertilizers, or GMOs. We undergo regular inspections to maintain our certification."
	},
	FaqEntry {
		id: 3,
		category: FaqCategory::Orders,
		question: "How do I place an order?",
		answer: "You can place orders through our online shop, visit us at farmers markets, or call us directly at (555) 123-4567. Online orders are processed within 24 hours and typically delivered within 2-3 business days."
	},
	FaqEntry {
		id: 4,
		category: FaqCategory::Orders,
		question: "What are your shipping options and costs?",
		answer: "We offer local delivery within a 50-mile radius for a flat fee of $15. For orders over $100, local delivery is free. We also ship nationwide via overnight cold shipping. Shipping costs vary by location and order size, calculated at checkout."
	},
	FaqEntry {
		id: 5,
		category: FaqCategory::Farming,
		question: "What is the Glenn Leigh method?",
		answer: "The Glenn Leigh method is our comprehensive approach to sustainable farming that combines traditional wisdom with modern science. It includes regenerative agriculture practices, rotational grazing, soil health management, and ethical animal husbandry. This method produces superior quality meat while improving the land and reducing environmental impact."
	},
	FaqEntry {
		id: 6,
		category: FaqCategory::Farming,
		question: "How do you ensure animal welfare?",
		answer: "Our livestock are raised in spacious, natural environments with constant access to pasture. We follow strict animal welfare guidelines, provide clean water and nutritious feed, and minimize stress through gentle handling practices. We believe happy, healthy animals produce the best quality meat."
	},
	FaqEntry {
		id: 7,
		category: FaqCategory::Wholesale,
		question: "Do you offer wholesale pricing?",
		answer: "Yes, we offer competitive wholesale pricing for restaurants, grocery stores, and food service businesses. Minimum order quantities apply, and we provide flexible delivery schedules. Contact our wholesale team at wholesale@glennleighfarms.com for current pricing and availability."
	},
	FaqEntry {
		id: 8,
		category: FaqCategory::Wholesale,
		question: "Can I visit the farm?",
		answer: "We welcome farm visits by appointment. Educational tours are available for schools, groups, and interested customers. Tours typically last 1-2 hours and include a walk through our facilities, explanation of our farming practices, and an opportunity to meet our team. Schedule your visit by calling (555) 123-4567."
	},
];
