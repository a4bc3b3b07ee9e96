use std::collections::BTreeSet;
use crate::filter::Record;

/// The ids of every FAQ entry whose answer is currently showing. Whoever renders the FAQ owns
/// one of these; it gets handed in with each interaction and a new one comes back out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet(BTreeSet<u32>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chevron {
	Up,
	Down
}

impl Chevron {
	#[must_use]
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Up => "▴",
			Self::Down => "▾"
		}
	}
}

impl ExpansionSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Flips whether `id` is expanded and leaves every other id alone
	#[must_use]
	pub fn toggle(mut self, id: u32) -> Self {
		if !self.0.remove(&id) {
			self.0.insert(id);
		}
		self
	}

	#[must_use]
	pub fn contains(&self, id: u32) -> bool {
		self.0.contains(&id)
	}

	#[must_use]
	pub fn chevron(&self, id: u32) -> Chevron {
		if self.contains(id) {
			Chevron::Up
		} else {
			Chevron::Down
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
		self.0.iter().copied()
	}

	/// Drops any id that doesn't belong to one of `records`. Sets that come in from the outside
	/// (e.g. a link someone copied) can name anything.
	#[must_use]
	pub fn restricted_to<R: Record>(self, records: &[R]) -> Self {
		Self(self.0.into_iter()
			.filter(|id| records.iter().any(|r| r.id() == *id))
			.collect())
	}

	/// Parses the comma-separated form that we put in query strings. Pieces that aren't numbers
	/// are skipped instead of failing the whole thing.
	#[must_use]
	pub fn from_param(param: &str) -> Self {
		param.split(',')
			.filter_map(|id| id.trim().parse().ok())
			.collect()
	}

	#[must_use]
	pub fn to_param(&self) -> String {
		self.iter()
			.map(|id| id.to_string())
			.collect::<Vec<_>>()
			.join(",")
	}
}

impl FromIterator<u32> for ExpansionSet {
	fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}
