//! Backend query client
//!
//! One typed operation: POST the query request to `/process` and decode the
//! response payload. No timeout is enforced here and in-flight requests are
//! not cancelled; the session's ticket guard makes overlapping requests
//! benign.

use crate::error::ClientError;
use vq_model::{QueryRequest, QueryResponse};

/// Typed client for the query endpoint
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl QueryClient {
    /// Create a client for the given backend base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing HTTP client
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Submit one query
    ///
    /// # Errors
    /// `ClientError::Transport` on connection failure, non-success status,
    /// or an undecodable body.
    pub async fn submit(&self, request: &QueryRequest) -> Result<QueryResponse, ClientError> {
        let url = format!("{}/process", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let client = QueryClient::new("http://127.0.0.1:9");
        let result = client.submit(&QueryRequest::new("anything")).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
