//! Per-request strategy dispatch: network-first for navigations,
//! stale-while-revalidate for everything else.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::ShimConfig;
use crate::error::{Error, Result};
use crate::net::Network;
use crate::request::{CacheKey, Request};
use crate::snapshot::ResponseSnapshot;
use crate::store::CacheStore;

/// Outcome of an intercepted request.
#[derive(Debug)]
pub struct Served {
    /// The response handed to the caller.
    pub response: ResponseSnapshot,
    /// Pending background revalidation, when the response came from cache.
    ///
    /// Dropping the handle detaches the refresh (the default); awaiting it
    /// yields the fresh snapshot once the cache has been updated.
    pub revalidation: Option<JoinHandle<Result<ResponseSnapshot>>>,
}

/// Dispatches intercepted requests to a caching strategy by purpose.
pub struct RequestInterceptor<N, S> {
    net: Arc<N>,
    store: Arc<S>,
    fallback: String,
}

impl<N, S> RequestInterceptor<N, S>
where
    N: Network + 'static,
    S: CacheStore + 'static,
{
    /// Creates an interceptor over the given network and cache partition.
    #[must_use]
    pub fn new(net: Arc<N>, store: Arc<S>, config: &ShimConfig) -> Self {
        Self {
            net,
            store,
            fallback: config.navigation_fallback.clone(),
        }
    }

    /// Handles one intercepted request.
    ///
    /// # Errors
    ///
    /// Navigations fail with [`Error::FallbackMiss`] when the network is
    /// down and the fallback path was never cached. Asset requests fail
    /// with the fetch's own error when there is no cached snapshot to
    /// serve instead.
    pub async fn intercept(&self, request: Request) -> Result<Served> {
        if request.is_navigation() {
            self.network_first(request).await
        } else {
            self.stale_while_revalidate(request).await
        }
    }

    /// Network-first with a single cached fallback.
    ///
    /// Two states only: network succeeds, serve live (whatever its status);
    /// network fails, serve the cached fallback or nothing. Non-fallback
    /// navigations get no snapshot of their own.
    async fn network_first(&self, request: Request) -> Result<Served> {
        match self.net.fetch(&request).await {
            Ok(response) => Ok(Served {
                response,
                revalidation: None,
            }),
            Err(err) => {
                let key = CacheKey::for_path(&self.fallback);
                log::warn!(
                    "navigation fetch for {} failed ({err}), serving cached {key}",
                    request.path
                );
                let response = self
                    .store
                    .get(&key)
                    .await
                    .ok_or_else(|| Error::FallbackMiss {
                        key: key.to_string(),
                    })?;
                Ok(Served {
                    response,
                    revalidation: None,
                })
            }
        }
    }

    /// Serve from cache when possible, refresh in the background always.
    ///
    /// The refresh is spawned before the cache verdict is known; on a miss
    /// the caller simply waits for it. Concurrent refreshes for one key are
    /// last-write-wins at the store.
    async fn stale_while_revalidate(&self, request: Request) -> Result<Served> {
        let key = request.cache_key();
        let cached = self.store.get(&key).await;

        let net = Arc::clone(&self.net);
        let store = Arc::clone(&self.store);
        let refresh_key = key.clone();
        let refresh: JoinHandle<Result<ResponseSnapshot>> = tokio::spawn(async move {
            let fresh = match net.fetch(&request).await {
                Ok(fresh) => fresh,
                Err(err) => {
                    log::error!("revalidation failed for {refresh_key}: {err}");
                    return Err(err);
                }
            };
            store.put(refresh_key, fresh.clone()).await;
            Ok(fresh)
        });

        match cached {
            Some(response) => {
                log::debug!("cache hit for {key}, revalidating in background");
                Ok(Served {
                    response,
                    revalidation: Some(refresh),
                })
            }
            None => {
                let response = refresh.await??;
                Ok(Served {
                    response,
                    revalidation: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::mock::MockNetwork;
    use crate::store::MemoryStore;
    use reqwest::StatusCode;

    fn interceptor(
        net: Arc<MockNetwork>,
        store: Arc<MemoryStore>,
    ) -> RequestInterceptor<MockNetwork, MemoryStore> {
        RequestInterceptor::new(net, store, &ShimConfig::default())
    }

    // --- navigation: network-first ---

    #[tokio::test]
    async fn navigation_serves_live_response_when_online() {
        let net = Arc::new(MockNetwork::new().serve("/latest", "fresh news"));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        store
            .put(
                CacheKey::for_path("/"),
                ResponseSnapshot::new(StatusCode::OK, "stale dashboard"),
            )
            .await;

        let served = interceptor(net, store)
            .intercept(Request::navigate("/latest"))
            .await
            .unwrap();

        assert_eq!(served.response.body, "fresh news");
        assert!(served.revalidation.is_none());
    }

    #[tokio::test]
    async fn navigation_serves_live_response_even_on_error_status() {
        // A non-2xx response is still a successful fetch; no fallback.
        let net = Arc::new(MockNetwork::new().serve_status(
            "/gone",
            StatusCode::NOT_FOUND,
            "not found",
        ));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));

        let served = interceptor(net, store)
            .intercept(Request::navigate("/gone"))
            .await
            .unwrap();

        assert_eq!(served.response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn offline_navigation_falls_back_to_cached_root() {
        let net = Arc::new(MockNetwork::new());
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        store
            .put(
                CacheKey::for_path("/"),
                ResponseSnapshot::new(StatusCode::OK, "cached dashboard"),
            )
            .await;

        // Any navigation falls back to "/", not to its own prior snapshot.
        let served = interceptor(net, store)
            .intercept(Request::navigate("/article/42"))
            .await
            .unwrap();

        assert_eq!(served.response.body, "cached dashboard");
    }

    #[tokio::test]
    async fn offline_navigation_without_cached_root_fails() {
        let net = Arc::new(MockNetwork::new());
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));

        let err = interceptor(net, store)
            .intercept(Request::navigate("/article/42"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::FallbackMiss { ref key } if key == "GET /"));
    }

    // --- assets: stale-while-revalidate ---

    #[tokio::test]
    async fn cached_asset_is_served_immediately_and_refreshed_behind() {
        let net = Arc::new(MockNetwork::new().serve("/static/manifest.json", "v2"));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        let key = CacheKey::for_path("/static/manifest.json");
        store
            .put(key.clone(), ResponseSnapshot::new(StatusCode::OK, "v1"))
            .await;

        let served = interceptor(net, Arc::clone(&store))
            .intercept(Request::get("/static/manifest.json"))
            .await
            .unwrap();

        // Stale value first, fresh value in the cache afterwards.
        assert_eq!(served.response.body, "v1");
        let fresh = served.revalidation.unwrap().await.unwrap().unwrap();
        assert_eq!(fresh.body, "v2");
        assert_eq!(store.get(&key).await.unwrap().body, "v2");
    }

    #[tokio::test]
    async fn uncached_asset_waits_for_network_and_populates_cache() {
        let net = Arc::new(MockNetwork::new().serve("/static/app.js", "console.log(1)"));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        let key = CacheKey::for_path("/static/app.js");

        let served = interceptor(net, Arc::clone(&store))
            .intercept(Request::get("/static/app.js"))
            .await
            .unwrap();

        assert_eq!(served.response.body, "console.log(1)");
        assert!(served.revalidation.is_none());
        assert_eq!(store.get(&key).await.unwrap().body, "console.log(1)");
    }

    #[tokio::test]
    async fn uncached_asset_propagates_fetch_failure() {
        let net = Arc::new(MockNetwork::new());
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));

        let err = interceptor(net, store)
            .intercept(Request::get("/static/app.js"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_entry() {
        let net = Arc::new(MockNetwork::new());
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        let key = CacheKey::for_path("/static/logo.png");
        store
            .put(key.clone(), ResponseSnapshot::new(StatusCode::OK, "logo"))
            .await;

        let served = interceptor(net, Arc::clone(&store))
            .intercept(Request::get("/static/logo.png"))
            .await
            .unwrap();

        assert_eq!(served.response.body, "logo");
        // Refresh fails behind the scenes; the stale entry survives.
        assert!(served.revalidation.unwrap().await.unwrap().is_err());
        assert_eq!(store.get(&key).await.unwrap().body, "logo");
    }

    #[tokio::test]
    async fn asset_refresh_fires_even_on_cache_hit() {
        let net = Arc::new(MockNetwork::new().serve("/static/a.css", "body{}"));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        store
            .put(
                CacheKey::for_path("/static/a.css"),
                ResponseSnapshot::new(StatusCode::OK, "old{}"),
            )
            .await;

        let served = interceptor(Arc::clone(&net), store)
            .intercept(Request::get("/static/a.css"))
            .await
            .unwrap();
        served.revalidation.unwrap().await.unwrap().unwrap();

        assert_eq!(net.fetch_count(), 1);
    }

    #[tokio::test]
    async fn later_refresh_wins() {
        let net = Arc::new(MockNetwork::new().serve("/static/feed.json", "first"));
        let store = Arc::new(MemoryStore::open("newsdeck-v1"));
        let key = CacheKey::for_path("/static/feed.json");
        let interceptor = interceptor(Arc::clone(&net), Arc::clone(&store));

        let a = interceptor
            .intercept(Request::get("/static/feed.json"))
            .await
            .unwrap();
        net.update("/static/feed.json", "second");
        let b = interceptor
            .intercept(Request::get("/static/feed.json"))
            .await
            .unwrap();

        assert_eq!(a.response.body, "first");
        assert_eq!(b.response.body, "first");
        // The second refresh replaces the first intercept's entry.
        b.revalidation.unwrap().await.unwrap().unwrap();
        assert_eq!(store.get(&key).await.unwrap().body, "second");
    }
}
