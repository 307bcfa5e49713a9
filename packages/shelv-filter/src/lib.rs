mod day;
mod error;
mod fulltext;
mod permalink;
mod tags;

pub use error::{Error, Result};
pub use tags::tags_to_tokens;

use std::collections::HashSet;

use shelv_domain::Link;

/// One filtering strategy plus its query payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Query {
	/// No filtering beyond visibility; the default view.
	All,
	/// Exact single-record lookup by permalink hash.
	Hash(String),
	/// Multi-field full-text search.
	Text(String),
	/// Tag-set matching.
	Tags(String),
	/// Records created on a `YYYYMMDD` day.
	Day(String),
	/// Intersection of a tag query and a text query.
	TagsAndText { tags: String, text: String },
}
impl Query {
	fn kind(&self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Hash(_) => "hash",
			Self::Text(_) => "text",
			Self::Tags(_) => "tags",
			Self::Day(_) => "day",
			Self::TagsAndText { .. } => "tags_and_text",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FilterOptions {
	pub case_sensitive: bool,
	/// When set, only private records are eligible. When unset, no
	/// visibility filtering happens at all.
	pub private_only: bool,
}

/// Filtering and search engine over a borrowed link collection.
///
/// Every call is a pure function of (collection, query, options); the engine
/// holds no state across calls and never mutates the collection. Results are
/// references into the input, newest first, except for day queries which are
/// chronological.
pub struct LinkFilter<'a> {
	links: &'a [Link],
}
impl<'a> LinkFilter<'a> {
	pub fn new(links: &'a [Link]) -> Self {
		Self { links }
	}

	/// Routes the query to its matcher. Only the day kind can fail; every
	/// other kind reports no-match as an empty result.
	pub fn filter(&self, query: &Query, opts: FilterOptions) -> Result<Vec<&'a Link>> {
		tracing::debug!(
			kind = query.kind(),
			case_sensitive = opts.case_sensitive,
			private_only = opts.private_only,
			"Filtering link collection."
		);

		match query {
			Query::All => Ok(self.default_view(opts.private_only)),
			Query::Hash(hash) => Ok(self.filter_hash(hash)),
			Query::Text(terms) =>
				Ok(self.filter_fulltext(terms, opts.case_sensitive, opts.private_only)),
			Query::Tags(tags) => Ok(self.filter_tags(tags, opts.case_sensitive, opts.private_only)),
			Query::Day(day) => self.filter_day(day),
			Query::TagsAndText { tags, text } =>
				Ok(self.filter_tags_and_text(tags, text, opts.private_only)),
		}
	}

	fn default_view(&self, private_only: bool) -> Vec<&'a Link> {
		let mut out: Vec<_> =
			self.links.iter().filter(|link| visible(link, private_only)).collect();

		sort_newest_first(&mut out);

		out
	}

	// Both sub-queries run case-insensitively over the full collection; an
	// empty sub-query matches everything, so the intersection degenerates to
	// the other matcher's result.
	fn filter_tags_and_text(
		&self,
		tags: &str,
		text: &str,
		private_only: bool,
	) -> Vec<&'a Link> {
		let tagged = self.filter_tags(tags, false, private_only);
		let matched: HashSet<&str> = self
			.filter_fulltext(text, false, private_only)
			.iter()
			.map(|link| link.id.as_str())
			.collect();

		tagged.into_iter().filter(|link| matched.contains(link.id.as_str())).collect()
	}
}

pub(crate) fn visible(link: &Link, private_only: bool) -> bool {
	!private_only || link.private
}

pub(crate) fn sort_newest_first(links: &mut [&Link]) {
	links.sort_by(|a, b| b.id.cmp(&a.id));
}
