// SPDX-License-Identifier: MPL-2.0
//! Catalog lookup port definition.
//!
//! This module defines the [`CatalogSource`] trait for resolving one record
//! by identifier or by name.
//!
//! # Design Notes
//!
//! - A lookup never panics and never substitutes a placeholder record; every
//!   failure comes back as an inspectable [`FetchFailed`]
//! - Returned futures are `Send` so lookups can run on tokio worker tasks
//! - Deadlines are applied by callers (see the fan-out fetcher), adapters may
//!   add their own transport-level timeout on top

use crate::domain::error::FetchFailed;
use crate::domain::record::{Record, RecordId};
use std::future::Future;

/// Port for the remote catalog.
///
/// # Example
///
/// ```ignore
/// use dex_gallery::application::port::CatalogSource;
/// use dex_gallery::domain::record::RecordId;
///
/// async fn show(catalog: &impl CatalogSource, id: RecordId) {
///     match catalog.fetch_by_id(id).await {
///         Ok(record) => println!("{}", record.normalized_name()),
///         Err(failure) => eprintln!("{failure}"),
///     }
/// }
/// ```
pub trait CatalogSource: Send + Sync {
    /// Resolves one record by its numeric identifier.
    fn fetch_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Record, FetchFailed>> + Send;

    /// Resolves one record by its catalog name (e.g. `"pikachu"`).
    fn fetch_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Record, FetchFailed>> + Send;
}
