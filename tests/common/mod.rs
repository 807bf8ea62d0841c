// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests: an in-memory catalog and builders.

#![allow(dead_code)]

use dex_gallery::app::GalleryApp;
use dex_gallery::application::gallery::{Gallery, GallerySettings};
use dex_gallery::application::port::CatalogSource;
use dex_gallery::application::query::{FanOutConfig, FanOutFetcher, IdentifierSampler, Navigator};
use dex_gallery::domain::error::{FetchError, FetchFailed};
use dex_gallery::domain::record::{Ability, Category, Record, RecordId};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn id(value: u32) -> RecordId {
    RecordId::new(value).expect("test identifiers are positive")
}

pub fn record(value: u32) -> Record {
    Record::new(
        id(value),
        format!("specimen-{value}"),
        Some(format!("https://img.example.test/{value}.png")),
        vec![Ability::from_source("keen-eye", "https://example.test/ability/51/")],
        vec![
            Category::from_source("normal", "https://example.test/type/1/"),
            Category::from_source("flying", "https://example.test/type/3/"),
        ],
    )
}

/// Catalog holding `record(1..=size)`, with optional failing identifiers and
/// a fixed latency per lookup.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: HashMap<RecordId, Record>,
    unreachable: HashSet<RecordId>,
    latency: Duration,
    calls: AtomicUsize,
}

impl MemoryCatalog {
    pub fn with_size(size: u32) -> Self {
        Self {
            records: (1..=size).map(|n| (id(n), record(n))).collect(),
            ..Self::default()
        }
    }

    /// Every lookup fails with a transport error.
    pub fn offline() -> Self {
        Self::default().with_unreachable(1..=u32::from(u16::MAX))
    }

    pub fn with_unreachable(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.unreachable.extend(values.into_iter().map(id));
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for MemoryCatalog {
    async fn fetch_by_id(&self, id: RecordId) -> Result<Record, FetchFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.unreachable.contains(&id) {
            return Err(FetchFailed::new(
                id,
                FetchError::Transport("connection refused".to_string()),
            ));
        }
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchFailed::new(id, FetchError::NotFound))
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Record, FetchFailed> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = name.trim().to_lowercase();
        self.records
            .values()
            .find(|record| record.name() == key)
            .cloned()
            .ok_or_else(|| FetchFailed::for_name(name, FetchError::NotFound))
    }
}

/// Runtime over `catalog` with a seeded sampler.
pub fn gallery_app(
    catalog: MemoryCatalog,
    batch_size: usize,
    universe_size: u32,
) -> GalleryApp<MemoryCatalog> {
    GalleryApp::new(
        Gallery::new(
            GallerySettings {
                batch_size,
                universe_size,
            },
            IdentifierSampler::seeded(42),
        ),
        Arc::new(catalog),
        FanOutFetcher::new(FanOutConfig {
            max_concurrency: 8,
            request_timeout: Duration::from_secs(10),
        }),
        Navigator::default(),
    )
}
