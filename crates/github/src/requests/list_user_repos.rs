use crate::{Error, Repository, GITHUB_API};
use futures_util::future::LocalBoxFuture;

pub struct Args<'a> {
	/// The account whose public repositories are listed.
	pub user: &'a str,
}

impl crate::GithubClient {
	/// Fetches the public repository listing for a user.
	/// Only the first page the endpoint returns is used; no pagination.
	pub fn list_user_repos(&self, request: Args<'_>) -> LocalBoxFuture<'static, Result<Vec<Repository>, Error>> {
		// https://docs.github.com/en/rest/repos/repos?apiVersion=2022-11-28#list-repositories-for-a-user
		let builder = self.client.get(format!("{GITHUB_API}/users/{}/repos", request.user));
		let builder = self.insert_rest_headers(builder);
		Box::pin(async move {
			let response = builder.send().await?;
			let status = response.status();
			if !status.is_success() {
				return Err(Error::Status(status.as_u16()));
			}
			let body = response.text().await?;
			let repositories = serde_json::from_str::<Vec<Repository>>(&body)?;
			log::debug!(target: "github", "listed {} repositories", repositories.len());
			Ok(repositories)
		})
	}
}
