// SPDX-License-Identifier: MPL-2.0
//! Test utilities: record fixtures and an in-memory catalog.
//!
//! [`FakeCatalog`] answers lookups from a map, can fail or delay chosen
//! identifiers (or panic on them), and records how many lookups ran concurrently.

use crate::application::port::CatalogSource;
use crate::domain::error::{FetchError, FetchFailed};
use crate::domain::record::{Ability, Category, Record, RecordId};
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Shorthand for a known-valid identifier.
pub fn id(value: u32) -> RecordId {
    RecordId::new(value).expect("test identifiers are positive")
}

/// Builds a small record named `creature-{value}`.
pub fn record(value: u32) -> Record {
    Record::new(
        id(value),
        format!("creature-{value}"),
        Some(format!("https://img.example.test/{value}.png")),
        vec![Ability::from_source("static", "https://example.test/ability/9/")],
        vec![Category::from_source("electric", "https://example.test/type/13/")],
    )
}

#[derive(Debug, Default)]
pub struct FakeCatalog {
    records: HashMap<RecordId, Record>,
    failures: HashMap<RecordId, FetchError>,
    delays: HashMap<RecordId, Duration>,
    panics: HashSet<RecordId>,
    default_delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeCatalog {
    /// Catalog holding `record(n)` for every `n` in the range.
    pub fn with_range(range: RangeInclusive<u32>) -> Self {
        Self {
            records: range.map(|n| (id(n), record(n))).collect(),
            ..Self::default()
        }
    }

    pub fn failing(mut self, value: u32, cause: FetchError) -> Self {
        self.failures.insert(id(value), cause);
        self
    }

    pub fn delayed(mut self, value: u32, delay: Duration) -> Self {
        self.delays.insert(id(value), delay);
        self
    }

    /// Lookups of `value` panic instead of returning.
    pub fn panicking(mut self, value: u32) -> Self {
        self.panics.insert(id(value));
        self
    }

    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl CatalogSource for FakeCatalog {
    async fn fetch_by_id(&self, id: RecordId) -> Result<Record, FetchFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(&id).copied().unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        assert!(!self.panics.contains(&id), "lookup of {id} panicked");
        if let Some(cause) = self.failures.get(&id) {
            return Err(FetchFailed::new(id, cause.clone()));
        }
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchFailed::new(id, FetchError::NotFound))
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Record, FetchFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .values()
            .find(|record| record.name() == name)
            .cloned()
            .ok_or_else(|| FetchFailed::for_name(name, FetchError::NotFound))
    }
}
