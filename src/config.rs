//! Build-time constants and shim configuration.

/// Cache partition version tag. Bump this to invalidate everything cached
/// under the previous tag.
pub const CACHE_NAME: &str = "newsdeck-v1";

/// Assets fetched and stored eagerly at install time.
pub const PRECACHE_ASSETS: [&str; 4] = [
    "/",
    "/static/manifest.json",
    "/static/images/icon-192.png",
    "/static/images/icon-512.png",
    // Add other static assets like CSS/JS here if they are local files
];

/// Path served from cache when a navigation fetch fails offline.
pub const NAVIGATION_FALLBACK: &str = "/";

/// Configuration for the offline shim.
#[derive(Debug, Clone)]
pub struct ShimConfig {
    /// Cache partition version tag.
    pub cache_name: String,
    /// Assets to precache at install time.
    pub precache_assets: Vec<String>,
    /// Single fallback path for failed navigations.
    pub navigation_fallback: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            cache_name: CACHE_NAME.to_string(),
            precache_assets: PRECACHE_ASSETS.iter().map(ToString::to_string).collect(),
            navigation_fallback: NAVIGATION_FALLBACK.to_string(),
        }
    }
}

impl ShimConfig {
    /// Creates a configuration with the build-time defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache partition version tag.
    #[must_use]
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Sets the precache asset list.
    #[must_use]
    pub fn with_precache_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precache_assets = assets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the navigation fallback path.
    #[must_use]
    pub fn with_navigation_fallback(mut self, path: impl Into<String>) -> Self {
        self.navigation_fallback = path.into();
        self
    }
}
