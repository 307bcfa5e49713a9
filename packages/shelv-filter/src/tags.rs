use std::collections::HashSet;

use shelv_domain::Link;

use crate::LinkFilter;

/// Splits a raw tag string into tag tokens.
///
/// Commas and whitespace both separate tags; tokens are folded to lowercase
/// unless `case_sensitive`. Blank input yields no tokens.
pub fn tags_to_tokens(tags: &str, case_sensitive: bool) -> Vec<String> {
	let folded = if case_sensitive { tags.to_string() } else { tags.to_lowercase() };

	folded.replace(',', " ").split_whitespace().map(str::to_string).collect()
}

impl<'a> LinkFilter<'a> {
	/// Links whose tag set contains every required token and none of the
	/// excluded ones (leading `-`). An empty query matches everything.
	pub(crate) fn filter_tags(
		&self,
		tags: &str,
		case_sensitive: bool,
		private_only: bool,
	) -> Vec<&'a Link> {
		let mut required = Vec::new();
		let mut excluded = Vec::new();

		for token in tags_to_tokens(tags, case_sensitive) {
			match token.strip_prefix('-') {
				Some(stripped) if !stripped.is_empty() => excluded.push(stripped.to_string()),
				// A bare dash carries no tag; drop it.
				Some(_) => {},
				None => required.push(token),
			}
		}

		let mut out: Vec<_> = self
			.links
			.iter()
			.filter(|link| {
				if !crate::visible(link, private_only) {
					return false;
				}

				let link_tags: HashSet<String> =
					tags_to_tokens(&link.tags, case_sensitive).into_iter().collect();

				required.iter().all(|tag| link_tags.contains(tag))
					&& !excluded.iter().any(|tag| link_tags.contains(tag))
			})
			.collect();

		crate::sort_newest_first(&mut out);

		out
	}
}

#[cfg(test)]
mod tests {
	use super::tags_to_tokens;

	#[test]
	fn splits_on_spaces_and_commas() {
		assert_eq!(tags_to_tokens("linux, programming tools", false), [
			"linux",
			"programming",
			"tools"
		]);
	}

	#[test]
	fn blank_input_yields_no_tokens() {
		assert!(tags_to_tokens("", false).is_empty());
		assert!(tags_to_tokens("  \t ", false).is_empty());
		assert!(tags_to_tokens(" , , ", false).is_empty());
	}

	#[test]
	fn folds_case_unless_sensitive() {
		assert_eq!(tags_to_tokens("Mercurial W3C", false), ["mercurial", "w3c"]);
		assert_eq!(tags_to_tokens("Mercurial W3C", true), ["Mercurial", "W3C"]);
	}

	#[test]
	fn folds_non_ascii_graphemes() {
		assert_eq!(tags_to_tokens("Télévision КИНО", false), ["télévision", "кино"]);
	}
}
