// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! This module contains the services that acquire catalog data and track
//! which record the user is looking at. None of them own gallery state; they
//! hand their results to the gallery coordinator.
//!
//! # Available Services
//!
//! - [`sampler`]: Unique random identifiers (`IdentifierSampler`)
//! - [`fan_out`]: Concurrent batch lookups (`FanOutFetcher`)
//! - [`navigation`]: Selected-identifier signal (`Navigator`)
//!
//! # Design Notes
//!
//! Query services are part of the application layer because they:
//! - Coordinate domain operations
//! - Reach the catalog only through the [`CatalogSource`](super::port::CatalogSource) port
//! - Implement application-specific use cases

pub mod fan_out;
pub mod navigation;
pub mod sampler;

// Re-export main types
pub use fan_out::{BatchOutcome, FanOutConfig, FanOutFetcher};
pub use navigation::Navigator;
pub use sampler::IdentifierSampler;
