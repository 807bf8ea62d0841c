// SPDX-License-Identifier: MPL-2.0
//! Navigation signal for the selected record.
//!
//! This module provides a shared `Navigator` that holds the single source of
//! truth for "which record is open in the detail view". The address bar, a
//! deep link or the gallery itself write to it; the gallery runtime
//! subscribes and turns every change into a selection transition.

use crate::domain::record::RecordId;
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable read/write handle over the selected identifier.
///
/// `None` means the gallery root (no detail view). Writing the value that is
/// already current does not notify subscribers, so re-opening the record
/// that is on screen does not trigger a new lookup.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: Arc<watch::Sender<Option<RecordId>>>,
}

impl Navigator {
    /// Creates a navigator starting at `initial` (e.g. from a deep link).
    #[must_use]
    pub fn new(initial: Option<RecordId>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns the identifier currently addressed, if any.
    #[must_use]
    pub fn current(&self) -> Option<RecordId> {
        *self.sender.borrow()
    }

    /// Addresses one record.
    pub fn navigate_to(&self, id: RecordId) -> bool {
        self.set(Some(id))
    }

    /// Returns to the gallery root.
    pub fn clear(&self) -> bool {
        self.set(None)
    }

    /// Replaces the addressed identifier.
    ///
    /// Returns `true` if the value changed and subscribers were notified.
    pub fn set(&self, target: Option<RecordId>) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == target {
                false
            } else {
                *current = target;
                true
            }
        })
    }

    /// Subscribes to changes. The current value counts as already seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<RecordId>> {
        self.sender.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(None)
    }
}
