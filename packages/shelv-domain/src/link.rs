/// One bookmark record.
///
/// Records are owned by the surrounding application; the filter engine only
/// ever borrows them and produces subsets.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link {
	/// Sortable creation-time key in `YYYYMMDD_HHMMSS` form. Unique within a
	/// collection; doubles as the permalink hash input and the sort key.
	pub id: String,
	pub title: String,
	pub description: String,
	pub url: String,
	/// Space- or comma-separated tag list. Not pre-split; matchers derive
	/// the token list from this string on every call.
	pub tags: String,
	pub private: bool,
}

#[cfg(test)]
mod tests {
	use super::Link;

	#[test]
	fn deserializes_from_plain_json() {
		let link: Link = serde_json::from_str(
			r#"{
				"id": "20130614_184135",
				"title": "MediaGoblin",
				"description": "A free software media publishing platform.",
				"url": "http://mediagoblin.org/",
				"tags": "gnu media web",
				"private": false
			}"#,
		)
		.expect("valid link json");

		assert_eq!(link.id, "20130614_184135");
		assert!(!link.private);
	}
}

