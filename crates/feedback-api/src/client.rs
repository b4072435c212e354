//! HTTP client for the feedback backend.

use crate::error::ApiError;
use crate::review::{ReviewListResponse, SubmitReviewRequest, SubmitReviewResponse};
use crate::stats::Stats;
use serde::de::DeserializeOwned;

/// Client for the backend feedback API.
///
/// On wasm32 this rides on the browser fetch API via reqwest. Calls are
/// plain one-shot requests: no retries, no caching, no auth.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Submit a review and return the backend's synchronous AI response.
    pub async fn submit_review(
        &self,
        request: &SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/submit-review"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the full review list for the admin dashboard.
    pub async fn list_reviews(&self) -> Result<ReviewListResponse, ApiError> {
        let response = self.http.get(self.url("/api/reviews")).send().await?;
        decode(response).await
    }

    /// Fetch aggregate review statistics.
    pub async fn review_stats(&self) -> Result<Stats, ApiError> {
        let response = self.http.get(self.url("/api/reviews/stats")).send().await?;
        decode(response).await
    }
}

/// Join a base URL (already stripped of trailing slashes) with a path.
fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Turn a response into the expected JSON type, mapping non-2xx statuses to
/// [`ApiError::Http`] with the backend detail when present.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status_body(status.as_u16(), &body));
    }
    Ok(response.json::<T>().await?)
}
