//! Intercepted request identity and classification.

use std::fmt;

use reqwest::Method;

/// Purpose of an intercepted request, the sole strategy discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// A full document load (address-bar navigation, link click).
    Navigate,
    /// Everything else: images, scripts, manifests, data fetches.
    Asset,
}

/// A request intercepted from the controlled scope.
///
/// Supplied by the host per fetch; transient. The `mode` decides the
/// caching strategy, the method and path together form the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Origin-relative path, e.g. `/static/manifest.json`.
    pub path: String,
    /// Navigation vs. subordinate asset fetch.
    pub mode: RequestMode,
}

impl Request {
    /// Creates a `GET` asset request for the given path.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            mode: RequestMode::Asset,
        }
    }

    /// Creates a `GET` navigation request for the given path.
    #[must_use]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            mode: RequestMode::Navigate,
        }
    }

    /// Returns `true` if this is a full document load.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }

    /// Returns the cache identity of this request.
    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.method, &self.path)
    }
}

/// Identity of a request within a cache partition: method plus path.
///
/// Two requests with the same method and path hit the same cache entry
/// regardless of their mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from a method and an origin-relative path.
    #[must_use]
    pub fn new(method: &Method, path: &str) -> Self {
        Self(format!("{method} {path}"))
    }

    /// The key for a plain `GET` of the given path.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self::new(&Method::GET, path)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
