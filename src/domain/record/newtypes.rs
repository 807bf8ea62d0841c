// SPDX-License-Identifier: MPL-2.0
//! Record identifier newtype.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

// =============================================================================
// RecordId
// =============================================================================

/// Catalog identifier, guaranteed to be a positive integer.
///
/// Identifiers are assigned by the remote catalog and never change once a
/// record has been built around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(NonZeroU32);

impl RecordId {
    /// Creates an identifier, returning `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a [`RecordId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record identifier: {0:?}")]
pub struct ParseRecordIdError(String);

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseRecordIdError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(RecordId::new(0).is_none());
        assert_eq!(RecordId::new(25).map(RecordId::get), Some(25));
    }

    #[test]
    fn parses_trimmed_positive_integers() {
        assert_eq!("  25 ".parse::<RecordId>().ok(), RecordId::new(25));
        assert!("0".parse::<RecordId>().is_err());
        assert!("-3".parse::<RecordId>().is_err());
        assert!("pikachu".parse::<RecordId>().is_err());
    }

    #[test]
    fn ordering_follows_numeric_value() {
        let low = RecordId::new(2).unwrap();
        let high = RecordId::new(10).unwrap();
        assert!(low < high);
        assert_eq!(high.to_string(), "10");
    }
}
