use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use shelv_domain::Link;

use crate::{Error, LinkFilter, Result};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

impl<'a> LinkFilter<'a> {
	/// Links created on the given `YYYYMMDD` day, oldest first.
	///
	/// The only matcher with a fallible input: the day must be a real
	/// calendar date in exactly that 8-digit form. A well-formed but absent
	/// day is an empty result.
	pub(crate) fn filter_day(&self, day: &str) -> Result<Vec<&'a Link>> {
		if day.len() != 8 || Date::parse(day, DAY_FORMAT).is_err() {
			return Err(Error::InvalidDateFormat { input: day.to_string() });
		}

		let mut out: Vec<_> =
			self.links.iter().filter(|link| link.id.starts_with(day)).collect();

		// Chronological within the day, unlike every other query kind.
		out.sort_by(|a, b| a.id.cmp(&b.id));

		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use shelv_domain::Link;

	use crate::{Error, LinkFilter};

	fn links() -> Vec<Link> {
		["20120125_092103", "20120125_084532", "20111006_131924"]
			.iter()
			.map(|id| Link {
				id: (*id).to_string(),
				title: String::new(),
				description: String::new(),
				url: String::new(),
				tags: String::new(),
				private: false,
			})
			.collect()
	}

	#[test]
	fn matches_day_prefix_chronologically() {
		let links = links();
		let filter = LinkFilter::new(&links);
		let found = filter.filter_day("20120125").expect("valid day");
		let ids: Vec<_> = found.iter().map(|link| link.id.as_str()).collect();

		assert_eq!(ids, ["20120125_084532", "20120125_092103"]);
	}

	#[test]
	fn absent_day_is_empty() {
		let links = links();
		let filter = LinkFilter::new(&links);

		assert!(filter.filter_day("19700101").expect("valid day").is_empty());
	}

	#[test]
	fn rejects_malformed_days() {
		let links = links();
		let filter = LinkFilter::new(&links);

		for input in ["20", "2012012", "201201256", "2012012a", "Rainy day, dream away"] {
			assert!(matches!(
				filter.filter_day(input),
				Err(Error::InvalidDateFormat { .. })
			));
		}
	}

	#[test]
	fn rejects_impossible_calendar_dates() {
		let links = links();
		let filter = LinkFilter::new(&links);

		assert!(filter.filter_day("20121399").is_err());
		assert!(filter.filter_day("20130230").is_err());
	}
}
