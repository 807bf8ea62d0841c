// SPDX-License-Identifier: MPL-2.0
//! `dex_gallery` shows a randomized gallery of creatures from a remote catalog.
//!
//! Each refresh draws a batch of distinct identifiers, looks them up
//! concurrently and replaces the gallery in one step. A navigation signal
//! selects one record for a detail view, independently of the batch.
//!
//! # Layers
//!
//! - [`domain`]: records, identifiers and the failure taxonomy
//! - [`application`]: catalog port, sampling, fan-out fetching and the
//!   gallery reducer
//! - [`infrastructure`]: HTTP catalog client and its cache
//! - [`app`]: tokio runtime that drives the reducer, plus logging and paths
//! - [`config`]: `settings.toml` loading and defaults

#![doc(html_root_url = "https://docs.rs/dex_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;
