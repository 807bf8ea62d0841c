// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Remote catalog over HTTP (implements [`CatalogSource`]),
//!   plus an in-memory LRU decorator
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Wire formats stay private to the adapter; only domain types cross the port
//!
//! [`CatalogSource`]: crate::application::port::CatalogSource

pub mod catalog;

pub use catalog::{CachedCatalog, CatalogSettings, HttpCatalog};
