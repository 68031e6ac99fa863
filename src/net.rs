//! Live network fetches, abstracted for testability.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::request::Request;
use crate::snapshot::ResponseSnapshot;

/// The host's fetch primitive.
///
/// A fetch rejects only on transport failure; a response with a non-2xx
/// status is a successful fetch whose snapshot carries that status.
#[async_trait]
pub trait Network: Send + Sync {
    /// Performs a live fetch and captures the response.
    async fn fetch(&self, request: &Request) -> Result<ResponseSnapshot>;
}

/// Default network implementation using `reqwest`.
///
/// Request paths are joined onto a fixed origin.
#[derive(Debug, Clone)]
pub struct HttpNetwork {
    client: reqwest::Client,
    origin: reqwest::Url,
}

impl HttpNetwork {
    /// Creates a network with a fresh client for the given origin.
    #[must_use]
    pub fn new(origin: reqwest::Url) -> Self {
        Self::with_client(reqwest::Client::new(), origin)
    }

    /// Creates a network reusing an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, origin: reqwest::Url) -> Self {
        Self { client, origin }
    }

    /// Returns the origin requests are resolved against.
    #[must_use]
    pub const fn origin(&self) -> &reqwest::Url {
        &self.origin
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &Request) -> Result<ResponseSnapshot> {
        let url = self
            .origin
            .join(&request.path)
            .map_err(|e| Error::Fetch(format!("invalid path {}: {e}", request.path)))?;
        let response = self
            .client
            .request(request.method.clone(), url)
            .send()
            .await?;
        Ok(ResponseSnapshot::capture(response).await?)
    }
}
