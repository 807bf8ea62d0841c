// SPDX-License-Identifier: MPL-2.0
//! Messages consumed by the gallery coordinator and the effects it requests.

use crate::application::query::BatchOutcome;
use crate::domain::error::FetchFailed;
use crate::domain::record::{Record, RecordId};

/// Inputs to `Gallery::update`, from the user, the navigation signal or a
/// finished lookup.
#[derive(Debug, Clone)]
pub enum Message {
    /// Draw and load a new batch.
    Refresh,
    /// A batch finished. Ignored unless `generation` is the latest one.
    BatchLoaded {
        generation: u64,
        outcome: BatchOutcome,
    },
    /// The navigation signal changed.
    NavigationChanged(Option<RecordId>),
    /// A selection lookup finished. Ignored unless `request` is the latest one.
    SelectionLoaded {
        request: u64,
        result: Result<Record, FetchFailed>,
    },
    /// The user picked an item in the gallery.
    ItemClicked(RecordId),
    /// The user closed the detail view.
    CloseDetail,
}

/// Side effects requested by the coordinator; the runtime carries them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch these identifiers and answer with [`Message::BatchLoaded`].
    FetchBatch { generation: u64, ids: Vec<RecordId> },
    /// Fetch one record and answer with [`Message::SelectionLoaded`].
    FetchSelection { request: u64, id: RecordId },
    /// Write the navigation signal.
    Navigate(Option<RecordId>),
}
