use shelv_domain::Link;

use crate::LinkFilter;

impl<'a> LinkFilter<'a> {
	/// Multi-field full-text search over title, description, url, and tags.
	///
	/// A query wrapped entirely in double quotes is matched as one literal
	/// phrase. Otherwise it is split on whitespace into required tokens and
	/// excluded tokens (leading `-`), with AND semantics inside a field. An
	/// empty query matches everything, subject to visibility.
	pub(crate) fn filter_fulltext(
		&self,
		terms: &str,
		case_sensitive: bool,
		private_only: bool,
	) -> Vec<&'a Link> {
		let search = fold_case(&decode_entities(terms), case_sensitive);
		let search = search.trim();

		if search.is_empty() {
			return self.default_view(private_only);
		}

		let query = SearchTerms::parse(search);
		let mut out: Vec<_> = self
			.links
			.iter()
			.filter(|link| {
				crate::visible(link, private_only) && query.matches(link, case_sensitive)
			})
			.collect();

		crate::sort_newest_first(&mut out);

		out
	}
}

enum SearchTerms {
	Phrase(String),
	Tokens { required: Vec<String>, excluded: Vec<String> },
}
impl SearchTerms {
	fn parse(search: &str) -> Self {
		// Double quotes around the whole query mean an exact phrase; nothing
		// is tokenized, so no exclusion tokens exist in this mode.
		if search.len() >= 2 && search.starts_with('"') && search.ends_with('"') {
			return Self::Phrase(search[1..search.len() - 1].to_string());
		}

		let mut required = Vec::new();
		let mut excluded = Vec::new();

		for token in search.split_whitespace() {
			match token.strip_prefix('-') {
				Some(stripped) if !stripped.is_empty() => excluded.push(stripped.to_string()),
				// A bare dash carries no term; drop it.
				Some(_) => {},
				None => required.push(token.to_string()),
			}
		}

		Self::Tokens { required, excluded }
	}

	// Fields are checked in fixed order and the first satisfying field wins.
	fn matches(&self, link: &Link, case_sensitive: bool) -> bool {
		[&link.title, &link.description, &link.url, &link.tags]
			.into_iter()
			.any(|field| self.field_matches(&fold_case(field, case_sensitive)))
	}

	// Inclusion and exclusion are both scoped to the single field under
	// inspection: an excluded term appearing in a different field does not
	// disqualify a match found here. Long-standing quirk, kept on purpose.
	fn field_matches(&self, haystack: &str) -> bool {
		match self {
			Self::Phrase(phrase) => haystack.contains(phrase.as_str()),
			Self::Tokens { required, excluded } =>
				required.iter().all(|term| haystack.contains(term.as_str()))
					&& !excluded.iter().any(|term| haystack.contains(term.as_str())),
		}
	}
}

fn fold_case(text: &str, case_sensitive: bool) -> String {
	if case_sensitive { text.to_string() } else { text.to_lowercase() }
}

/// Decodes the HTML entities a query picked up on its way through a form:
/// the common named ones plus numeric `&#NN;` / `&#xHH;` references.
/// Anything unrecognized is left as-is.
fn decode_entities(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(start) = rest.find('&') {
		out.push_str(&rest[..start]);

		let tail = &rest[start..];
		let entity_end = tail.find(';');

		match entity_end.and_then(|end| decode_entity(&tail[1..end]).map(|ch| (ch, end))) {
			Some((decoded, end)) => {
				out.push(decoded);

				rest = &tail[end + 1..];
			},
			None => {
				out.push('&');

				rest = &tail[1..];
			},
		}
	}

	out.push_str(rest);

	out
}

fn decode_entity(entity: &str) -> Option<char> {
	match entity {
		"amp" => Some('&'),
		"lt" => Some('<'),
		"gt" => Some('>'),
		"quot" => Some('"'),
		"apos" => Some('\''),
		"nbsp" => Some(' '),
		_ => {
			let value = if let Some(hex) =
				entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X"))
			{
				u32::from_str_radix(hex, 16).ok()?
			} else if let Some(dec) = entity.strip_prefix('#') {
				dec.parse::<u32>().ok()?
			} else {
				return None;
			};

			char::from_u32(value)
		},
	}
}

#[cfg(test)]
mod tests {
	use super::{SearchTerms, decode_entities};

	#[test]
	fn decodes_named_and_numeric_entities() {
		assert_eq!(decode_entities("m&amp;m"), "m&m");
		assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
		assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
		assert_eq!(decode_entities("&#39;tis"), "'tis");
		assert_eq!(decode_entities("caf&#xE9;"), "café");
	}

	#[test]
	fn leaves_unrecognized_entities_alone() {
		assert_eq!(decode_entities("&unknown; & co"), "&unknown; & co");
		assert_eq!(decode_entities("dangling &"), "dangling &");
		assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
	}

	#[test]
	fn whole_string_quotes_mean_a_phrase() {
		match SearchTerms::parse("\"free software\"") {
			SearchTerms::Phrase(phrase) => assert_eq!(phrase, "free software"),
			SearchTerms::Tokens { .. } => panic!("expected a phrase"),
		}
	}

	#[test]
	fn a_lone_quote_is_a_token_not_a_phrase() {
		match SearchTerms::parse("\"") {
			SearchTerms::Tokens { required, excluded } => {
				assert_eq!(required, ["\""]);
				assert!(excluded.is_empty());
			},
			SearchTerms::Phrase(_) => panic!("expected tokens"),
		}
	}

	#[test]
	fn splits_required_and_excluded_tokens() {
		match SearchTerms::parse("free -gnu - software") {
			SearchTerms::Tokens { required, excluded } => {
				assert_eq!(required, ["free", "software"]);
				assert_eq!(excluded, ["gnu"]);
			},
			SearchTerms::Phrase(_) => panic!("expected tokens"),
		}
	}
}
