use serde::Serialize;

/// A post from the farm's social feed. There's no real feed behind this yet, so these are just
/// the ones we want on the home page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FarmUpdate {
	pub id: u32,
	pub message: &'static str,
	/// unix seconds, UTC
	pub posted_at: u64,
	pub picture: &'static str,
	pub permalink: &'static str
}

pub const FEED_PAGE: &str = "https://facebook.com/glennleighfarms";

pub static FARM_UPDATES: &[FarmUpdate] = &[
	FarmUpdate {
		id: 1,
		message: "Fresh harvest day! Our premium beef is now available at the farmers market. Come visit us this weekend! 🌾🥩",
		// 2025-08-14T10:30:00Z
		posted_at: 1_755_167_400,
		picture: "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?w=400&h=300&fit=crop",
		permalink: "https://facebook.com/glennleighfarms/posts/1"
	},
	FarmUpdate {
		id: 2,
		message: "Meet our newest team member, Sarah! She brings years of agricultural experience to Glenn Leigh Farms. Welcome to the family! 👩‍🌾",
		// 2025-08-12T14:15:00Z
		posted_at: 1_755_008_100,
		picture: "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?w=400&h=300&fit=crop",
		permalink: "https://facebook.com/glennleighfarms/posts/2"
	},
	FarmUpdate {
		id: 3,
		message: "The Glenn Leigh method in action: Our sustainable farming practices ensure the highest quality meat while caring for our land. 🌱♻️",
		// 2025-08-10T09:45:00Z
		posted_at: 1_754_819_100,
		picture: "https://images.unsplash.com/photo-1464226184884-fa280b87c399?w=400&h=300&fit=crop",
		permalink: "https://facebook.com/glennleighfarms/posts/3"
	},
];
