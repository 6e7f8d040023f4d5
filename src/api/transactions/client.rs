use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::models::ApiError;
use crate::models::TransactionRecord;

/// Client for the transactions endpoint under test
pub struct TransactionsClient {
    http_client: HttpClient,
    api_url: String,
}

impl TransactionsClient {
    /// Create a client whose every request is bounded by `timeout`
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .default_headers(Self::create_headers())
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a non-200 response to an error, keeping the body text for diagnostics
    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => ApiError::BadRequest(body_text),
            401 => ApiError::Unauthorized(body_text),
            404 => ApiError::NotFound(body_text),
            500..=599 => ApiError::ServerError(status_code, body_text),
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// POST /api/transactions
    ///
    /// Submits `records` as a JSON array. Only HTTP 200 counts as success;
    /// the response body of a successful call is not inspected.
    pub async fn submit_batch(&self, records: &[TransactionRecord]) -> Result<(), ApiError> {
        let body =
            serde_json::to_vec(records).map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self
            .http_client
            .post(&self.api_url)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Self::handle_error_response(status, response).await);
        }

        debug!("Batch of {} accepted by {}", records.len(), self.api_url);
        Ok(())
    }
}
