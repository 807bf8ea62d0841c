// SPDX-License-Identifier: MPL-2.0
//! Gallery coordination.
//!
//! - [`coordinator`]: the [`Gallery`] reducer that owns [`GalleryState`]
//! - [`message`]: its inputs ([`Message`]) and requested side effects ([`Effect`])
//! - [`state`]: the read-only projection consumed by the presentation layer
//!
//! The batch lifecycle (`Idle`/`Loading`/`Ready`) and the detail selection
//! (`None`/`Pending`/`Ready`/`Failed`) are orthogonal: a refresh never blocks
//! or clears a selection, and vice versa. Selection only changes in response
//! to the navigation signal; clicks and "close" merely request navigation.

pub mod coordinator;
pub mod message;
pub mod state;

pub use coordinator::{Gallery, GallerySettings, DEFAULT_BATCH_SIZE, DEFAULT_UNIVERSE_SIZE};
pub use message::{Effect, Message};
pub use state::{BatchError, BatchPhase, GalleryState, Selection};
