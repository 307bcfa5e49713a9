use shelv_domain::{Link, small_hash};

use crate::LinkFilter;

impl<'a> LinkFilter<'a> {
	/// Single-record lookup by permalink hash.
	///
	/// Scans in insertion order and stops at the first id whose hash matches,
	/// so the earliest-inserted record wins should the hash ever collide. An
	/// unknown hash yields an empty result, not an error.
	pub(crate) fn filter_hash(&self, hash: &str) -> Vec<&'a Link> {
		self.links
			.iter()
			.find(|link| small_hash(&link.id) == hash)
			.map(|link| vec![link])
			.unwrap_or_default()
	}
}
