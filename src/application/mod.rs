// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Sampling, batch fetching and the navigation signal
//! - [`gallery`]: The gallery coordinator and its state
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The runtime in [`crate::app`] wires both together on tokio
//!
//! # Example
//!
//! ```ignore
//! use dex_gallery::application::gallery::{Gallery, GallerySettings, Message};
//! use dex_gallery::application::query::IdentifierSampler;
//!
//! let mut gallery = Gallery::new(GallerySettings::default(), IdentifierSampler::seeded(7));
//! let effect = gallery.update(Message::Refresh);
//! // The runtime performs `effect` and feeds the result back as a Message.
//! ```

pub mod gallery;
pub mod port;
pub mod query;
