//! Install-time cache population.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::config::ShimConfig;
use crate::error::{Error, Result};
use crate::net::Network;
use crate::request::Request;
use crate::store::CacheStore;

/// Populates the cache partition with the fixed asset list.
///
/// Runs once per install lifecycle signal. The batch is all-or-nothing:
/// any asset that fails to fetch, or comes back non-2xx, fails the entire
/// install. No retry is scheduled here; the host re-fires install on the
/// next activation.
pub struct Installer<N, S> {
    net: Arc<N>,
    store: Arc<S>,
    assets: Vec<String>,
}

impl<N: Network, S: CacheStore> Installer<N, S> {
    /// Creates an installer over the given network and cache partition.
    #[must_use]
    pub fn new(net: Arc<N>, store: Arc<S>, config: &ShimConfig) -> Self {
        Self {
            net,
            store,
            assets: config.precache_assets.clone(),
        }
    }

    /// Fetches and stores every asset in the precache list.
    ///
    /// Assets are fetched concurrently; the first failure aborts the
    /// install signal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precache`] naming the asset that failed.
    pub async fn install(&self) -> Result<()> {
        try_join_all(self.assets.iter().map(|asset| self.precache(asset))).await?;
        log::info!("install complete: {} assets precached", self.assets.len());
        Ok(())
    }

    async fn precache(&self, asset: &str) -> Result<()> {
        let request = Request::get(asset);
        let snapshot = self
            .net
            .fetch(&request)
            .await
            .map_err(|source| Error::Precache {
                asset: asset.to_string(),
                source: Box::new(source),
            })?;
        if !snapshot.is_ok() {
            return Err(Error::Precache {
                asset: asset.to_string(),
                source: Box::new(Error::BadStatus {
                    path: asset.to_string(),
                    status: snapshot.status,
                }),
            });
        }
        log::debug!("precached {asset} ({} bytes)", snapshot.body.len());
        self.store.put(request.cache_key(), snapshot).await;
        Ok(())
    }
}
