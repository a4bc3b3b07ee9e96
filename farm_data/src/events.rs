use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Serialize;
use crate::{display::BadgeStyle, filter::{Kind, Record}};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
	Market,
	Festival,
	Event,
	Expo
}

impl Kind for EventType {
	const ALL: &'static [Self] = &[Self::Market, Self::Festival, Self::Event, Self::Expo];
	const ALL_LABEL: &'static str = "All Events";

	fn slug(self) -> &'static str {
		match self {
			Self::Market => "market",
			Self::Festival => "festival",
			Self::Event => "event",
			Self::Expo => "expo"
		}
	}

	fn label(self) -> &'static str {
		match self {
			Self::Market => "Farmers Markets",
			Self::Festival => "Food Festivals",
			Self::Event => "Special Events",
			Self::Expo => "Expos & Shows"
		}
	}
}

impl EventType {
	#[must_use]
	pub fn badge(self) -> BadgeStyle {
		match self {
			Self::Market => BadgeStyle::Green,
			Self::Festival => BadgeStyle::Purple,
			Self::Event => BadgeStyle::Blue,
			Self::Expo => BadgeStyle::Orange
		}
	}
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
	pub id: u32,
	pub name: &'static str,
	#[serde(rename = "type")]
	pub kind: EventType,
	pub date: NaiveDate,
	pub time: &'static str,
	pub location: &'static str,
	pub address: &'static str,
	pub description: &'static str,
	pub recurring: &'static str,
	pub contact: &'static str,
	pub website: Option<&'static str>,
	pub featured: bool
}

impl Record for Event {
	type Kind = EventType;

	fn id(&self) -> u32 {
		self.id
	}

	fn kind(&self) -> EventType {
		self.kind
	}

	fn is_featured(&self) -> bool {
		self.featured
	}
}

// All of these are real dates, so the fallback never gets hit
fn day(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| vec![
	Event {
		id: 1,
		name: "Downtown Farmers Market",
		kind: EventType::Market,
		date: day(2025, 8, 16),
		time: "8:00 AM - 2:00 PM",
		location: "Main Street Plaza, Downtown",
		address: "123 Main Street, Downtown, ST 12345",
		description: "Our weekly spot at the downtown farmers market. Fresh meat, seasonal produce, and farm merchandise available.",
		recurring: "Every Saturday",
		contact: "Market Coordinator: (555) 123-4567",
		website: Some("https://downtownfarmersmarket.com"),
		featured: true
	},
	Event {
		id: 2,
		name: "Countryside Food Festival",
		kind: EventType::Festival,
		date: day(2025, 8, 22),
		time: "10:00 AM - 6:00 PM",
		location: "County Fairgrounds",
		address: "456 Fair Road, Countryside, ST 12345",
		description: "Annual food festival featuring local farms and artisans. Come taste our premium beef and learn about sustainable farming.",
		recurring: "Annual",
		contact: "Festival Info: (555) 987-6543",
		website: Some("https://countrysidefoods.com"),
		featured: true
	},
	Event {
		id: 3,
		name: "Westside Community Market",
		kind: EventType::Market,
		date: day(2025, 8, 18),
		time: "9:00 AM - 1:00 PM",
		location: "Westside Park",
		address: "789 Park Avenue, Westside, ST 12345",
		description: "Monthly community market in the heart of Westside. Family-friendly atmosphere with live music.",
		recurring: "Third Sunday of each month",
		contact: "Community Center: (555) 456-7890",
		website: Some("https://westsidemarket.org"),
		featured: false
	},
	Event {
		id: 4,
		name: "Farm-to-Table Dinner",
		kind: EventType::Event,
		date: day(2025, 8, 25),
		time: "6:00 PM - 9:00 PM",
		location: "The Harvest Restaurant",
		address: "321 Culinary Lane, Foodie District, ST 12345",
		description: "Exclusive farm-to-table dinner featuring our premium beef. Limited seating, reservations required.",
		recurring: "Quarterly",
		contact: "Reservations: (555) 234-5678",
		website: Some("https://harvestrestaurant.com"),
		featured: true
	},
	Event {
		id: 5,
		name: "Organic Living Expo",
		kind: EventType::Expo,
		date: day(2025, 8, 30),
		time: "11:00 AM - 5:00 PM",
		location: "Convention Center",
		address: "654 Expo Drive, Metro City, ST 12345",
		description: "Regional expo focused on organic and sustainable living. Educational talks and product demonstrations.",
		recurring: "Bi-annual",
		contact: "Expo Info: (555) 345-6789",
		website: Some("https://organiclivingexpo.com"),
		featured: false
	},
	Event {
		id: 6,
		name: "Riverside Farmers Market",
		kind: EventType::Market,
		date: day(2025, 8, 23),
		time: "7:00 AM - 12:00 PM",
		location: "Riverside Park",
		address: "987 River Road, Riverside, ST 12345",
		description: "Scenic farmers market along the river. Perfect for a morning stroll and fresh shopping.",
		recurring: "Every Friday",
		contact: "Market Manager: (555) 567-8901",
		website: Some("https://riversidemarket.net"),
		featured: false
	},
]);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dates_are_what_they_say() {
		assert!(EVENTS.iter().all(|e| e.date != NaiveDate::default()));
		assert_eq!(EVENTS[0].date.to_string(), "2025-08-16");
	}

	#[test]
	fn serializes_type_field() {
		let json = serde_json::to_value(&EVENTS[1]).unwrap();
		assert_eq!(json["type"], "festival");
		assert_eq!(json["date"], "2025-08-22");
	}
}
