use std::str::FromStr;

/// A closed set of values that classifies a record (a product category, an event type, ...).
///
/// `slug` is the lowercase form that shows up in query strings and JSON, and `from_slug` is the
/// only place where a raw string gets turned back into one of these.
pub trait Kind: Copy + Eq + std::fmt::Debug + 'static {
	const ALL: &'static [Self];
	/// What the "everything" button/option is called for this kind of record
	const ALL_LABEL: &'static str;

	fn slug(self) -> &'static str;
	fn label(self) -> &'static str;

	#[must_use]
	fn from_slug(slug: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|k| k.slug() == slug)
	}
}

pub trait Record {
	type Kind: Kind;

	fn id(&self) -> u32;
	fn kind(&self) -> Self::Kind;

	/// `needle` is already lowercased and never empty. Records that can't be searched just match
	/// everything.
	fn matches_text(&self, _needle: &str) -> bool {
		true
	}

	fn is_featured(&self) -> bool {
		false
	}
}

/// Either the `"all"` sentinel or one specific kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick<K> {
	All,
	Only(K)
}

// not derived 'cause that'd force `K: Default`
impl<K> Default for Pick<K> {
	fn default() -> Self {
		Self::All
	}
}

impl<K: Kind> Pick<K> {
	pub const ALL_SLUG: &'static str = "all";

	#[must_use]
	pub fn allows(self, kind: K) -> bool {
		match self {
			Self::All => true,
			Self::Only(k) => k == kind
		}
	}

	#[must_use]
	pub fn slug(self) -> &'static str {
		match self {
			Self::All => Self::ALL_SLUG,
			Self::Only(k) => k.slug()
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::All => K::ALL_LABEL,
			Self::Only(k) => k.label()
		}
	}

	/// Every pick in the order they should be offered to someone: `All` first, then each kind.
	pub fn choices() -> impl Iterator<Item = Self> {
		std::iter::once(Self::All).chain(K::ALL.iter().copied().map(Self::Only))
	}

	/// Lenient parse for query strings; anything we don't recognize means "show everything".
	#[must_use]
	pub fn from_param(param: Option<&str>) -> Self {
		param.map(FromStr::from_str)
			.and_then(Result::ok)
			.unwrap_or_default()
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl std::fmt::Display for UnknownKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "'{}' is not a known category", self.0)
	}
}

impl std::error::Error for UnknownKind {}

impl<K: Kind> FromStr for Pick<K> {
	type Err = UnknownKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == Self::ALL_SLUG {
			return Ok(Self::All);
		}

		K::from_slug(s)
			.map(Self::Only)
			.ok_or_else(|| UnknownKind(s.to_owned()))
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<K> {
	pub pick: Pick<K>,
	pub query: String
}

impl<K> Default for Selection<K> {
	fn default() -> Self {
		Self { pick: Pick::All, query: String::new() }
	}
}

impl<K: Kind> Selection<K> {
	#[must_use]
	pub fn new(pick: Pick<K>, query: impl Into<String>) -> Self {
		Self { pick, query: query.into() }
	}

	#[must_use]
	pub fn only(kind: K) -> Self {
		Self::new(Pick::Only(kind), String::new())
	}
}

/// Returns, in their original order, every record that is of the selected kind and (if the
/// selection has a query) contains the query somewhere searchable. Matching is case-insensitive.
pub fn filter<'r, R: Record>(records: &'r [R], selection: &Selection<R::Kind>) -> Vec<&'r R> {
	let needle = selection.query.to_lowercase();

	records.iter()
		.filter(|r| selection.pick.allows(r.kind()))
		.filter(|r| needle.is_empty() || r.matches_text(&needle))
		.collect()
}

pub fn featured<R: Record>(records: &[R]) -> Vec<&R> {
	records.iter()
		.filter(|r| r.is_featured())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{PRODUCTS, ProductCategory, FAQ_ENTRIES, FaqCategory, EVENTS, EventType};

	fn ids<R: Record>(records: &[&R]) -> Vec<u32> {
		records.iter().map(|r| r.id()).collect()
	}

	#[test]
	fn all_with_no_query_returns_everything_in_order() {
		let all = filter(PRODUCTS, &Selection::default());
		assert_eq!(ids(&all), (1..=8).collect::<Vec<_>>());

		assert_eq!(filter(FAQ_ENTRIES, &Selection::default()).len(), FAQ_ENTRIES.len());
		assert_eq!(filter(EVENTS.as_slice(), &Selection::default()).len(), EVENTS.len());
	}

	#[test]
	fn meat_category_keeps_order() {
		let meat = filter(PRODUCTS, &Selection::only(ProductCategory::Meat));
		assert_eq!(ids(&meat), [1, 2, 3, 4, 8]);
	}

	#[test]
	fn bacon_search_finds_the_slab() {
		let found = filter(PRODUCTS, &Selection::new(Pick::All, "bacon"));
		assert_eq!(ids(&found), [4]);
		assert_eq!(found[0].name, "Bacon Slab");

		let shouting = filter(PRODUCTS, &Selection::new(Pick::All, "BACON"));
		assert_eq!(ids(&shouting), [4]);
	}

	#[test]
	fn query_matches_are_exactly_name_or_description() {
		for query in ["beef", "logo", "Farm", "e", "pasture", "zzz", "Mug", " "] {
			let lower = query.to_lowercase();
			let found = ids(&filter(PRODUCTS, &Selection::new(Pick::All, query)));
			let expected = PRODUCTS.iter()
				.filter(|p| p.name.to_lowercase().contains(&lower)
					|| p.description.to_lowercase().contains(&lower))
				.map(|p| p.id)
				.collect::<Vec<_>>();

			assert_eq!(found, expected, "query {query:?}");
		}
	}

	#[test]
	fn category_and_query_are_anded() {
		// "logo" is only ever on accessories
		let found = filter(PRODUCTS, &Selection::new(Pick::Only(ProductCategory::Meat), "logo"));
		assert!(found.is_empty());

		let found = filter(PRODUCTS, &Selection::new(Pick::Only(ProductCategory::Accessories), "logo"));
		assert_eq!(ids(&found), [5, 6, 7]);
	}

	#[test]
	fn filtering_leaves_the_input_alone() {
		let records = PRODUCTS.to_vec();
		let before = records.clone();
		_ = filter(&records, &Selection::new(Pick::Only(ProductCategory::Accessories), "cap"));
		assert_eq!(records, before);
	}

	#[test]
	fn wholesale_faq() {
		let wholesale = filter(FAQ_ENTRIES, &Selection::only(FaqCategory::Wholesale));
		assert_eq!(ids(&wholesale), [7, 8]);
	}

	#[test]
	fn faq_ignores_query() {
		let found = filter(FAQ_ENTRIES, &Selection::new(Pick::Only(FaqCategory::Orders), "nothing like this"));
		assert_eq!(ids(&found), [3, 4]);
	}

	#[test]
	fn market_events() {
		let markets = filter(EVENTS.as_slice(), &Selection::only(EventType::Market));
		assert_eq!(ids(&markets), [1, 3, 6]);
	}

	#[test]
	fn featured_records() {
		assert_eq!(ids(&featured(PRODUCTS)), [1, 2, 4, 8]);
		assert_eq!(ids(&featured(EVENTS.as_slice())), [1, 2, 4]);
	}

	#[test]
	fn picks_parse_from_params() {
		assert_eq!(Pick::<ProductCategory>::from_param(None), Pick::All);
		assert_eq!(Pick::<ProductCategory>::from_param(Some("all")), Pick::All);
		assert_eq!(Pick::from_param(Some("meat")), Pick::Only(ProductCategory::Meat));
		assert_eq!(Pick::<ProductCategory>::from_param(Some("Meat")), Pick::All);
		assert_eq!(
			"tractors".parse::<Pick<EventType>>(),
			Err(UnknownKind("tractors".into()))
		);
	}

	#[test]
	fn choices_lead_with_all() {
		let choices = Pick::<FaqCategory>::choices().collect::<Vec<_>>();
		assert_eq!(choices.len(), 5);
		assert_eq!(choices[0], Pick::All);
		assert_eq!(choices[0].label(), "All Questions");
		assert_eq!(choices[4].slug(), "wholesale");
	}
}
