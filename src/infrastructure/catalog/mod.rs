// SPDX-License-Identifier: MPL-2.0
//! Remote catalog adapters.
//!
//! - [`HttpCatalog`]: one GET per lookup against the configured base address
//! - [`CachedCatalog`]: LRU decorator over any [`CatalogSource`]
//!
//! [`CatalogSource`]: crate::application::port::CatalogSource

mod cache;
mod http;
mod wire;

pub use cache::{CacheStats, CachedCatalog};
pub use http::HttpCatalog;

use crate::config::defaults;
use std::time::Duration;

/// Resolved settings for the HTTP catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub base_url: String,
    /// Whole-request deadline applied by the HTTP client.
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Records kept by [`CachedCatalog`]; `0` disables caching.
    pub cache_capacity: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
