//! newsdeck-offline - An offline-caching shim for the newsdeck front end.
//!
//! This library precaches a fixed list of static assets at install time and
//! applies two request-handling strategies: network-first for navigations
//! (fresh news wins, with a cached fallback for offline), and
//! stale-while-revalidate for everything else.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use newsdeck_offline::{
//!     HttpNetwork, Installer, MemoryStore, Request, RequestInterceptor, ShimConfig,
//! };
//!
//! # async fn example() -> newsdeck_offline::Result<()> {
//! let config = ShimConfig::default();
//! let origin: reqwest::Url = "https://newsdeck.example".parse().expect("valid origin");
//! let net = Arc::new(HttpNetwork::new(origin));
//! let store = Arc::new(MemoryStore::open(&config.cache_name));
//!
//! // Install: precache the asset list, all-or-nothing.
//! let installer = Installer::new(Arc::clone(&net), Arc::clone(&store), &config);
//! installer.install().await?;
//!
//! // Fetch: dispatch each intercepted request to a strategy.
//! let interceptor = RequestInterceptor::new(net, store, &config);
//! let served = interceptor.intercept(Request::navigate("/")).await?;
//! println!("served {} bytes", served.response.body.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod install;
pub mod interceptor;
pub mod net;
pub mod request;
pub mod snapshot;
pub mod store;

// Re-export main types for convenience
pub use config::{CACHE_NAME, NAVIGATION_FALLBACK, PRECACHE_ASSETS, ShimConfig};
pub use error::{Error, Result};
pub use install::Installer;
pub use interceptor::{RequestInterceptor, Served};
pub use net::{HttpNetwork, Network};
pub use request::{CacheKey, Request, RequestMode};
pub use snapshot::ResponseSnapshot;
pub use store::{CacheStore, MemoryStore};
