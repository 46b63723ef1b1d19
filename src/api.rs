//! Remote To-Do Service Client
//!
//! Thin async wrappers over the two service endpoints: list and create.
//! Ambient browser credentials (cookies) ride along on every request.

use reqwest::{Client, RequestBuilder};
use thiserror::Error;

use crate::models::{CreateResponse, ListEnvelope, NewTask, TaskPage};

/// Deployed to-do service.
pub const DEFAULT_API_BASE: &str = "https://todo-37mc.onrender.com";

/// Failure taxonomy at the HTTP boundary.
///
/// `Server` covers non-2xx responses and bodies that fail to decode;
/// `Network` covers requests that never completed. Neither is ever
/// surfaced into the render path.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server error: {0}")]
    Server(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() || err.is_decode() {
            ApiError::Server(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Client for the remote to-do service. Cheap to clone.
#[derive(Clone)]
pub struct TodoApi {
    client: Client,
    base: String,
}

impl TodoApi {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    fn list_url(&self, page_index: u32, limit: u32) -> String {
        format!(
            "{}/todo/list?pageNumber={}&limit={}",
            self.base, page_index, limit
        )
    }

    fn create_url(&self) -> String {
        format!("{}/todo/create", self.base)
    }

    /// Fetch one page of tasks. `page_index` is 0-based.
    pub async fn list(&self, page_index: u32, limit: u32) -> Result<TaskPage, ApiError> {
        let request = with_credentials(self.client.get(self.list_url(page_index, limit)));
        let response = request.send().await?.error_for_status()?;
        let envelope: ListEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    /// Create a task; returns the server's confirmation message.
    pub async fn create(&self, draft: &NewTask) -> Result<String, ApiError> {
        let request = with_credentials(self.client.post(self.create_url()).json(draft));
        let response = request.send().await?.error_for_status()?;
        let body: CreateResponse = response.json().await?;
        Ok(body.message)
    }
}

impl Default for TodoApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_uses_zero_based_page_index() {
        let api = TodoApi::with_base("http://localhost:9000");
        assert_eq!(
            api.list_url(2, 5),
            "http://localhost:9000/todo/list?pageNumber=2&limit=5"
        );
    }

    #[test]
    fn create_url_targets_create_endpoint() {
        let api = TodoApi::with_base("http://localhost:9000");
        assert_eq!(api.create_url(), "http://localhost:9000/todo/create");
    }
}
