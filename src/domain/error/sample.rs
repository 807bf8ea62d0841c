// SPDX-License-Identifier: MPL-2.0
//! Identifier sampling precondition error.

/// Raised before any draw when the request cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// More distinct identifiers were requested than the universe holds.
    #[error("cannot draw {count} distinct identifiers from a universe of {universe_size}")]
    InvalidArgument { count: usize, universe_size: u32 },
}
