// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides the per-item failure values produced by catalog
//! lookups and the precondition error of identifier sampling. They carry no
//! infrastructure types so that adapters and tests can build them freely.

mod fetch;
mod sample;

pub use fetch::{FetchError, FetchFailed, FetchTarget};
pub use sample::SampleError;
