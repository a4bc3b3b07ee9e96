//! Turning records into the strings and flags that pages actually show.

use chrono::{DateTime, NaiveDate};
use crate::{EventType, filter::Kind};

#[must_use]
pub fn format_price(cents: u32) -> String {
	format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
	/// August 14, 2025
	Long,
	/// Saturday, August 16, 2025
	LongWithWeekday
}

impl DateStyle {
	fn pattern(self) -> &'static str {
		match self {
			Self::Long => "%B %-d, %Y",
			Self::LongWithWeekday => "%A, %B %-d, %Y"
		}
	}
}

#[must_use]
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
	date.format(style.pattern()).to_string()
}

/// Same as [`format_date`] but for a unix timestamp, which we read as UTC
#[must_use]
pub fn format_timestamp(time: u64, style: DateStyle) -> String {
	time.try_into()
		.ok()
		.and_then(|secs| DateTime::from_timestamp(secs, 0))
		.map_or_else(
			|| "an unknown date".into(),
			|dt| format_date(dt.date_naive(), style)
		)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeStyle {
	Green,
	Purple,
	Blue,
	Orange,
	/// for anything we don't have a color for
	Gray
}

impl BadgeStyle {
	#[must_use]
	pub fn class(self) -> &'static str {
		match self {
			Self::Green => "badge-green",
			Self::Purple => "badge-purple",
			Self::Blue => "badge-blue",
			Self::Orange => "badge-orange",
			Self::Gray => "badge-gray"
		}
	}
}

/// For event types that only exist as a string (e.g. from a query). Never fails; unknown types
/// just get the neutral style.
#[must_use]
pub fn badge_style_for(raw: &str) -> BadgeStyle {
	EventType::from_slug(raw).map_or(BadgeStyle::Gray, EventType::badge)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
	pub filled: bool
}

/// Five stars where the first `floor(rating)` are filled in. We don't do half-stars.
#[must_use]
pub fn star_rating(rating: f32) -> [Star; 5] {
	let whole = rating.floor();
	std::array::from_fn(|i| Star { filled: (i + 1) as f32 <= whole })
}

/// "market" -> "Market"
#[must_use]
pub fn capitalized(word: &str) -> String {
	let mut chars = word.chars();
	chars.next()
		.map(|first| first.to_uppercase().chain(chars).collect())
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled(stars: [Star; 5]) -> usize {
		stars.iter().filter(|s| s.filled).count()
	}

	#[test]
	fn prices() {
		assert_eq!(format_price(2499), "$24.99");
		assert_eq!(format_price(1500), "$15.00");
		assert_eq!(format_price(5), "$0.05");
		assert_eq!(format_price(0), "$0.00");
	}

	#[test]
	fn dates() {
		let date = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
		assert_eq!(format_date(date, DateStyle::Long), "August 16, 2025");
		assert_eq!(format_date(date, DateStyle::LongWithWeekday), "Saturday, August 16, 2025");

		let date = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
		assert_eq!(format_date(date, DateStyle::LongWithWeekday), "Monday, August 25, 2025");
	}

	#[test]
	fn timestamps() {
		assert_eq!(format_timestamp(1_755_167_400, DateStyle::Long), "August 14, 2025");
		assert_eq!(format_timestamp(u64::MAX, DateStyle::Long), "an unknown date");
	}

	#[test]
	fn badges() {
		assert_eq!(EventType::Market.badge(), BadgeStyle::Green);
		assert_eq!(badge_style_for("festival"), BadgeStyle::Purple);
		assert_eq!(badge_style_for("expo").class(), "badge-orange");
		assert_eq!(badge_style_for("hayride"), BadgeStyle::Gray);
		assert_eq!(badge_style_for(""), BadgeStyle::Gray);
	}

	#[test]
	fn stars() {
		assert_eq!(filled(star_rating(4.8)), 4);
		assert!(!star_rating(4.8)[4].filled);
		assert_eq!(filled(star_rating(0.0)), 0);
		assert_eq!(filled(star_rating(5.0)), 5);
		assert_eq!(filled(star_rating(0.99)), 0);
		assert_eq!(filled(star_rating(f32::NAN)), 0);
	}

	#[test]
	fn capitals() {
		assert_eq!(capitalized("market"), "Market");
		assert_eq!(capitalized("e"), "E");
		assert_eq!(capitalized(""), "");
	}
}
