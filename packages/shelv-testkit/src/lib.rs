use shelv_domain::Link;

pub const NB_LINKS_TOTAL: usize = 8;
pub const NB_LINKS_PRIVATE: usize = 2;

/// The reference link collection shared by the filter engine's tests.
///
/// Records are in insertion order, not id order, so tests exercise the
/// sorting contract. Two records are private. The `MediaGoblin` record's id
/// hashes to the known permalink vector `IuWvgA`.
pub fn reference_links() -> Vec<Link> {
	vec![
		link(
			"20130614_184135",
			"MediaGoblin",
			"A free software media publishing platform, part of the GNU project.",
			"http://mediagoblin.org/",
			"gnu media web",
			false,
		),
		link(
			"20130614_100201",
			"Free as in Freedom 2.0",
			"Richard Stallman and the free software révolution. Read this.",
			"https://static.fsf.org/nosvn/faif-2.0.pdf",
			"free gnu software stallman beard",
			false,
		),
		link(
			"20130613_114041",
			"Atlas Shrugged",
			"Totally unrelated to free software.",
			"https://bookstore.example.com/atlas",
			"reading",
			true,
		),
		link(
			"20121206_182539",
			"UserFriendly - Samba",
			"Tonight, we're going to party like it's 1999...",
			"http://ars.userfriendly.org/cartoons/?id=20010306",
			"samba cartoon web",
			false,
		),
		link(
			"20121206_172539",
			"UserFriendly - Web designer",
			"Naming conventions applied to web design.",
			"http://ars.userfriendly.org/cartoons/?id=20121206",
			"dev cartoon web",
			true,
		),
		link(
			"20121206_142300",
			"Woods - Moving to the Left",
			"An old video with M&M's.",
			"http://www.youtube.com/watch?v=YQHsXMglC9A",
			"music",
			false,
		),
		link(
			"20130616_154604",
			"Mercurial clone request",
			"The mercurial repository clone request, via the w3c mailing list.",
			"https://example.org/mercurial",
			"Mercurial w3c",
			false,
		),
		link(
			"20121207_152212",
			"Geek and Poke",
			"A webcomic about free and open source software designers.",
			"http://geek-and-poke.com/",
			"dev cartoon webcomic",
			false,
		),
	]
}

fn link(id: &str, title: &str, description: &str, url: &str, tags: &str, private: bool) -> Link {
	Link {
		id: id.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		url: url.to_string(),
		tags: tags.to_string(),
		private,
	}
}
