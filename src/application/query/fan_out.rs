// SPDX-License-Identifier: MPL-2.0
//! Concurrent batch lookups.
//!
//! [`FanOutFetcher::fetch_batch`] issues one catalog lookup per identifier,
//! each on its own tokio task, with the number of in-flight requests bounded
//! by a semaphore. The call returns only once every lookup has resolved;
//! failures are collected next to the successes and never abort the batch.

use crate::application::port::CatalogSource;
use crate::config::defaults;
use crate::domain::error::{FetchError, FetchFailed};
use crate::domain::record::{Record, RecordId};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default number of lookups allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = defaults::DEFAULT_MAX_CONCURRENCY;

/// Default per-lookup deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration =
    Duration::from_secs(defaults::DEFAULT_REQUEST_TIMEOUT_SECS);

/// Limits applied to a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutConfig {
    /// Maximum lookups in flight at once (at least 1).
    pub max_concurrency: usize,
    /// Deadline for a single lookup, measured once it starts.
    pub request_timeout: Duration,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Result of one batch: every requested identifier ends up in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Successfully loaded records, ascending by identifier.
    pub records: Vec<Record>,
    /// Failed lookups, ordered by target.
    pub failures: Vec<FetchFailed>,
}

impl BatchOutcome {
    /// Number of identifiers that were looked up.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    /// Returns `true` when nothing could be loaded.
    #[must_use]
    pub fn is_total_failure(&self) -> bool {
        self.records.is_empty()
    }
}

/// Runs batches of lookups against a [`CatalogSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FanOutFetcher {
    config: FanOutConfig,
}

impl FanOutFetcher {
    #[must_use]
    pub fn new(config: FanOutConfig) -> Self {
        Self {
            config: FanOutConfig {
                max_concurrency: config.max_concurrency.max(1),
                ..config
            },
        }
    }

    #[must_use]
    pub fn config(&self) -> FanOutConfig {
        self.config
    }

    /// Looks up every identifier and waits for all of them.
    ///
    /// Duplicate identifiers are looked up once. Dropping the returned future
    /// aborts every lookup that is still running.
    pub async fn fetch_batch<C>(&self, catalog: Arc<C>, ids: &[RecordId]) -> BatchOutcome
    where
        C: CatalogSource + 'static,
    {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency));
        let timeout = self.config.request_timeout;
        let mut tasks = JoinSet::new();

        for &id in &unique {
            let catalog = Arc::clone(&catalog);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (id, fetch_with_timeout(&*catalog, id, timeout).await)
            });
        }

        let mut outcome = BatchOutcome::default();
        let mut pending: HashSet<RecordId> = unique.iter().copied().collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, result)) => {
                    pending.remove(&id);
                    match result {
                        Ok(record) => outcome.records.push(record),
                        Err(failure) => {
                            tracing::warn!(lookup = %failure.target, cause = %failure.cause, "catalog lookup failed");
                            outcome.failures.push(failure);
                        }
                    }
                }
                Err(join_error) => {
                    tracing::error!(error = %join_error, "catalog lookup task did not complete");
                }
            }
        }

        // A panicked task cannot report its identifier; account for it here.
        for id in pending {
            outcome.failures.push(FetchFailed::new(
                id,
                FetchError::Transport("lookup task did not complete".to_string()),
            ));
        }

        outcome.records.sort_by_key(Record::id);
        outcome.failures.sort_by(|a, b| a.target.cmp(&b.target));
        outcome
    }
}

/// Runs one lookup by identifier under a deadline.
///
/// Expiry is reported as [`FetchError::Timeout`] for that identifier only.
pub async fn fetch_with_timeout<C>(
    catalog: &C,
    id: RecordId,
    timeout: Duration,
) -> Result<Record, FetchFailed>
where
    C: CatalogSource,
{
    match tokio::time::timeout(timeout, catalog.fetch_by_id(id)).await {
        Ok(result) => result,
        Err(_) => Err(FetchFailed::new(id, FetchError::Timeout(timeout))),
    }
}
