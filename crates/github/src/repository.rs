use serde::Deserialize;

/// One entry of a user's public repository listing.
/// Only the fields the portfolio projects into a card; everything else in the
/// payload is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
	pub name: String,
	pub description: Option<String>,
	pub language: Option<String>,
	pub stargazers_count: u64,
	pub forks_count: u64,
	pub fork: bool,
	pub html_url: String,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn deserializes_listing_entry() {
		let entry: Repository = serde_json::from_str(
			r#"{
				"id": 778,
				"name": "bluesky-report-AP2",
				"full_name": "onasiscart/bluesky-report-AP2",
				"description": "Network analysis of Bluesky reposts",
				"language": "Python",
				"stargazers_count": 3,
				"forks_count": 1,
				"fork": false,
				"html_url": "https://github.com/onasiscart/bluesky-report-AP2"
			}"#,
		)
		.unwrap();
		assert_eq!(entry.name, "bluesky-report-AP2");
		assert_eq!(entry.description.as_deref(), Some("Network analysis of Bluesky reposts"));
		assert_eq!(entry.language.as_deref(), Some("Python"));
		assert_eq!(entry.stargazers_count, 3);
		assert_eq!(entry.forks_count, 1);
		assert_eq!(entry.fork, false);
	}

	#[test]
	fn nullable_fields_absent() {
		let entry: Repository = serde_json::from_str(
			r#"{
				"name": "scratch",
				"description": null,
				"language": null,
				"stargazers_count": 0,
				"forks_count": 0,
				"fork": true,
				"html_url": "https://github.com/onasiscart/scratch"
			}"#,
		)
		.unwrap();
		assert_eq!(entry.description, None);
		assert_eq!(entry.language, None);
	}
}
