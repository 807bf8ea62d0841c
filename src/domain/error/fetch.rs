// SPDX-License-Identifier: MPL-2.0
//! Classified outcome of a failed catalog lookup.

use crate::domain::record::RecordId;
use std::fmt;
use std::time::Duration;

/// What a lookup was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FetchTarget {
    Id(RecordId),
    Name(String),
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Id(id) => write!(f, "#{id}"),
            FetchTarget::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<RecordId> for FetchTarget {
    fn from(id: RecordId) -> Self {
        FetchTarget::Id(id)
    }
}

/// Why a lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS or TLS failure, or an unexpected non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within its deadline.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The catalog has no entry for the requested identifier or name.
    #[error("no catalog entry found")]
    NotFound,

    /// The payload did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Returns `true` for network-level failures, timeouts included.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout(_))
    }
}

/// A lookup failure tagged with the identifier or name that was requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch {target}: {cause}")]
pub struct FetchFailed {
    pub target: FetchTarget,
    #[source]
    pub cause: FetchError,
}

impl FetchFailed {
    #[must_use]
    pub fn new(target: impl Into<FetchTarget>, cause: FetchError) -> Self {
        Self {
            target: target.into(),
            cause,
        }
    }

    /// Failure for a lookup by name.
    #[must_use]
    pub fn for_name(name: &str, cause: FetchError) -> Self {
        Self::new(FetchTarget::Name(name.to_string()), cause)
    }

    /// Identifier of the failed lookup, when it was made by identifier.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        match self.target {
            FetchTarget::Id(id) => Some(id),
            FetchTarget::Name(_) => None,
        }
    }
}
