//! Captured response snapshots.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// A captured response: status, headers, body.
///
/// The result of either a cache lookup or a live fetch. Cloning is cheap
/// (`Bytes` is reference-counted), which is what lets the interceptor hand
/// one copy to the caller and write another into the cache.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    /// HTTP status of the captured response.
    pub status: StatusCode,
    /// Response headers as captured.
    pub headers: HeaderMap,
    /// Full response body.
    pub body: Bytes,
}

impl ResponseSnapshot {
    /// Creates a snapshot with empty headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Captures a live `reqwest` response, consuming it.
    ///
    /// # Errors
    ///
    /// Returns the transport error if reading the body fails.
    pub async fn capture(response: reqwest::Response) -> reqwest::Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Returns `true` if the status is in the 2xx range.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }
}
