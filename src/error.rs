//! Error types for the newsdeck-offline library.

use thiserror::Error;

/// Errors that can occur while precaching or intercepting requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure, propagated as-is.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The live fetch was rejected by the transport.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// An asset in the precache list could not be fetched and stored.
    #[error("precache failed for {asset}: {source}")]
    Precache {
        /// Path of the asset that failed.
        asset: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// A precache fetch came back with a non-2xx status.
    #[error("unexpected status {status} for {path}")]
    BadStatus {
        /// Path that was fetched.
        path: String,
        /// Status the server returned.
        status: reqwest::StatusCode,
    },

    /// Offline navigation with no cached fallback to serve.
    #[error("no cached fallback for {key}")]
    FallbackMiss {
        /// Cache key that was looked up.
        key: String,
    },

    /// The background revalidation task panicked or was cancelled.
    #[error("revalidation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A specialized `Result` type for newsdeck-offline operations.
pub type Result<T> = std::result::Result<T, Error>;
