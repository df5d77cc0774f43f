#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	/// The request never completed (connectivity failure, aborted fetch).
	#[error(transparent)]
	Request(std::sync::Arc<reqwest::Error>),
	/// The response body could not be decoded into the expected structure.
	#[error(transparent)]
	Deserialization(std::sync::Arc<serde_json::Error>),
	/// The endpoint answered with a non-success HTTP status.
	#[error("Failed to fetch repositories (HTTP {0})")]
	Status(u16),
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(std::sync::Arc::new(value))
	}
}
impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Self::Deserialization(std::sync::Arc::new(value))
	}
}
