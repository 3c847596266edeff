//! Construction errors for [`Series`](crate::Series).
//!
//! Only construction can fail: once a series exists, every operation either
//! succeeds or legitimately produces the empty series / an absent value.
//! Variants carry the offending index and timestamps so the builder
//! collaborator can point at the exact input record.

use snafu::prelude::*;

/// Errors raised when building a [`Series`](crate::Series) from an entry
/// sequence that violates the ordering invariants.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum SeriesError {
    /// Entry timestamps must be strictly increasing.
    #[snafu(display(
        "Entries out of order at index {index}: timestamp {timestamp} does not increase over {previous}"
    ))]
    UnorderedEntries {
        /// Index of the offending entry.
        index: usize,
        /// The offending entry's timestamp.
        timestamp: i64,
        /// The preceding entry's timestamp.
        previous: i64,
    },

    /// Entry intervals must not overlap.
    #[snafu(display(
        "Entries overlap at index {index}: previous entry is defined until {previous_end}, next starts at {timestamp}"
    ))]
    OverlappingEntries {
        /// Index of the offending entry.
        index: usize,
        /// The offending entry's timestamp.
        timestamp: i64,
        /// The preceding entry's exclusive end.
        previous_end: i64,
    },
}
