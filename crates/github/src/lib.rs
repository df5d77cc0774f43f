//! Minimal GitHub REST client that works under WASM.
//! Only covers the unauthenticated endpoints the portfolio needs.

mod error;
pub use error::*;
mod requests;
pub use requests::*;
mod repository;
pub use repository::*;

pub(crate) static GITHUB_API: &'static str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
	pub(crate) client: reqwest::Client,
}

impl GithubClient {
	pub fn new(user_agent: &'static str) -> Result<Self, Error> {
		let mut client = reqwest::Client::builder();
		client = client.default_headers({
			let agent = (
				reqwest::header::USER_AGENT,
				reqwest::header::HeaderValue::from_static(user_agent),
			);
			[agent].into_iter().collect()
		});
		let client = client.build()?;
		Ok(Self { client })
	}

	pub(crate) fn insert_rest_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		use reqwest::header::*;
		let builder = builder.header(ACCEPT, "application/vnd.github+json");
		let builder = builder.header("X-Github-Api-Version", "2022-11-28");
		builder
	}
}
