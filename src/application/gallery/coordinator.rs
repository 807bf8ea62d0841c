// SPDX-License-Identifier: MPL-2.0
//! Gallery coordinator.
//!
//! `Gallery::update` is a pure reducer: it mutates [`GalleryState`] and
//! returns the [`Effect`] the runtime should perform. Batch and selection
//! progress independently. Each refresh bumps a generation counter and each
//! navigation bumps a request counter; results tagged with an older value are
//! dropped, so a slow stale response can never overwrite newer state.

use super::message::{Effect, Message};
use super::state::{BatchError, BatchPhase, GalleryState, Selection};
use crate::application::query::{BatchOutcome, IdentifierSampler};
use crate::config::defaults;
use crate::domain::error::FetchFailed;
use crate::domain::record::{Record, RecordId};

/// Default number of records per batch.
pub const DEFAULT_BATCH_SIZE: usize = defaults::DEFAULT_BATCH_SIZE;

/// Default number of identifiers known to the catalog.
pub const DEFAULT_UNIVERSE_SIZE: u32 = defaults::DEFAULT_UNIVERSE_SIZE;

/// Batch sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySettings {
    pub batch_size: usize,
    pub universe_size: u32,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            universe_size: DEFAULT_UNIVERSE_SIZE,
        }
    }
}

/// Owner of the gallery state.
#[derive(Debug)]
pub struct Gallery {
    state: GalleryState,
    settings: GallerySettings,
    sampler: IdentifierSampler,
    generation: u64,
    selection_request: u64,
}

impl Gallery {
    #[must_use]
    pub fn new(settings: GallerySettings, sampler: IdentifierSampler) -> Self {
        Self {
            state: GalleryState::default(),
            settings,
            sampler,
            generation: 0,
            selection_request: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> GallerySettings {
        self.settings
    }

    /// Generation of the most recent refresh.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Refresh => self.refresh(),
            Message::BatchLoaded {
                generation,
                outcome,
            } => {
                self.apply_batch(generation, outcome);
                Effect::None
            }
            Message::NavigationChanged(target) => self.navigation_changed(target),
            Message::SelectionLoaded { request, result } => {
                self.apply_selection(request, result);
                Effect::None
            }
            Message::ItemClicked(id) => Effect::Navigate(Some(id)),
            Message::CloseDetail => Effect::Navigate(None),
        }
    }

    fn refresh(&mut self) -> Effect {
        self.generation += 1;
        self.state.batch_error = None;

        let GallerySettings {
            batch_size,
            universe_size,
        } = self.settings;
        match self.sampler.sample(batch_size, universe_size) {
            Ok(ids) => {
                tracing::debug!(generation = self.generation, count = ids.len(), "refreshing gallery");
                self.state.phase = BatchPhase::Loading;
                Effect::FetchBatch {
                    generation: self.generation,
                    ids,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot sample gallery identifiers");
                self.state.records.clear();
                self.state.skipped = 0;
                self.state.phase = BatchPhase::Idle;
                self.state.batch_error = Some(BatchError::from(err));
                Effect::None
            }
        }
    }

    fn apply_batch(&mut self, generation: u64, outcome: BatchOutcome) {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "discarding stale batch");
            return;
        }

        let requested = outcome.requested();
        if outcome.is_total_failure() {
            tracing::error!(generation, requested, "no record of the batch could be loaded");
            self.state.records.clear();
            self.state.skipped = requested;
            self.state.phase = BatchPhase::Idle;
            self.state.batch_error = Some(BatchError::NothingLoaded { requested });
            return;
        }

        tracing::info!(
            generation,
            loaded = outcome.records.len(),
            failed = outcome.failures.len(),
            "gallery batch ready"
        );
        self.state.skipped = outcome.failures.len();
        self.state.records = outcome.records;
        self.state.phase = BatchPhase::Ready;
    }

    fn navigation_changed(&mut self, target: Option<RecordId>) -> Effect {
        self.selection_request += 1;
        match target {
            Some(id) => {
                self.state.selection = Selection::Pending(id);
                Effect::FetchSelection {
                    request: self.selection_request,
                    id,
                }
            }
            None => {
                self.state.selection = Selection::None;
                Effect::None
            }
        }
    }

    fn apply_selection(&mut self, request: u64, result: Result<Record, FetchFailed>) {
        if request != self.selection_request {
            tracing::debug!(request, latest = self.selection_request, "discarding stale selection");
            return;
        }

        self.state.selection = match result {
            Ok(record) => Selection::Ready(record),
            Err(failure) => {
                tracing::warn!(error = %failure, "selected record could not be loaded");
                Selection::Failed(failure)
            }
        };
    }
}
