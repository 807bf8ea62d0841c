// SPDX-License-Identifier: MPL-2.0
//! Gallery state exposed to the presentation layer.

use crate::domain::error::{FetchFailed, SampleError};
use crate::domain::record::{Record, RecordId};

/// Lifecycle of the current batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    /// Nothing loaded yet, or the last refresh failed as a whole.
    #[default]
    Idle,
    /// A refresh is in flight.
    Loading,
    /// The latest refresh produced at least one record.
    Ready,
}

/// Batch-level failure, shown instead of an unexplained empty gallery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// The identifier sample could not be drawn (misconfigured batch size).
    #[error(transparent)]
    Sampling(#[from] SampleError),

    /// Every lookup of the batch failed.
    #[error("none of the {requested} requested records could be loaded")]
    NothingLoaded { requested: usize },
}

/// Detail-view selection, independent of batch membership.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// A lookup for this identifier is in flight.
    Pending(RecordId),
    Ready(Record),
    Failed(FetchFailed),
}

impl Selection {
    /// The selected record, once loaded.
    #[must_use]
    pub fn record(&self) -> Option<&Record> {
        match self {
            Selection::Ready(record) => Some(record),
            _ => None,
        }
    }

    /// The identifier this selection refers to, in any non-empty state.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Selection::None => None,
            Selection::Pending(id) => Some(*id),
            Selection::Ready(record) => Some(record.id()),
            Selection::Failed(failure) => failure.id(),
        }
    }
}

/// Read-only projection of the gallery.
///
/// The coordinator is the only writer; a refresh replaces `records` in a
/// single step so observers never see a partially loaded batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub(super) records: Vec<Record>,
    pub(super) phase: BatchPhase,
    pub(super) batch_error: Option<BatchError>,
    pub(super) skipped: usize,
    pub(super) selection: Selection,
}

impl GalleryState {
    /// Records of the current batch, ascending by identifier.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == BatchPhase::Loading
    }

    #[must_use]
    pub fn batch_error(&self) -> Option<&BatchError> {
        self.batch_error.as_ref()
    }

    /// Returns `true` when the last refresh ended without any record.
    #[must_use]
    pub fn is_batch_failed(&self) -> bool {
        self.phase == BatchPhase::Idle && self.batch_error.is_some()
    }

    /// Lookups of the current batch that failed and were left out.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Record> {
        self.selection.record()
    }

    /// The detail view is shown only for a loaded selection.
    #[must_use]
    pub fn is_detail_visible(&self) -> bool {
        matches!(self.selection, Selection::Ready(_))
    }
}
